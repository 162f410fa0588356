#[derive(Debug, thiserror::Error)]
pub enum ArgdumpError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] utilargs::Error),
}

pub type Result<T> = std::result::Result<T, ArgdumpError>;
