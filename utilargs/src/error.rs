use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A field declaration the registry refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    #[error("option declares neither a short nor a long name")]
    Unnamed,

    #[error("invalid short option name {0:?}")]
    InvalidShort(char),

    #[error("invalid long option name {0:?}")]
    InvalidLong(String),

    #[error("short option -{0} declared twice")]
    DuplicateShort(char),

    #[error("long option --{0} declared twice")]
    DuplicateLong(String),
}
