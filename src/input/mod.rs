use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;

pub mod cfv;
pub mod priors;
pub mod schemes;
pub mod vocab;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Appends `suffix` to the whole path, so `corpus.v2` + `.vocab` stays `corpus.v2.vocab`.
pub fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = base.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Returns `path` if it exists, otherwise its `.gz` sibling.
pub fn resolve_plain_or_gz(path: &Path) -> Result<PathBuf, InputError> {
    if path.exists() {
        return Ok(path.to_path_buf());
    }
    let gz = with_suffix(path, ".gz");
    if gz.exists() {
        return Ok(gz);
    }
    Err(InputError::MissingInput(format!(
        "{} (or {}) not found",
        path.display(),
        gz.display()
    )))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
