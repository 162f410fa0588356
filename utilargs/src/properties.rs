//! Property files as long-option argument vectors.
//!
//! Every `key=value` line becomes the pair `--key`, `value`. Empty lines,
//! lines starting with `#` and lines without `=` are skipped. The key is
//! everything before the first `=`, the value everything after it, both
//! taken verbatim.

use std::path::Path;

use crate::error::{Error, Result};

pub fn to_arguments(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .flat_map(|(key, value)| [format!("--{}", key), value.to_string()])
        .collect()
}

/// Read a UTF-8 property file and translate it with [`to_arguments`].
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(to_arguments(&content))
}
