use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::input::{InputError, open_maybe_gz, resolve_plain_or_gz, with_suffix};

#[derive(Debug, Clone)]
pub struct VocabInfo {
    pub path: PathBuf,
    pub size: usize,
}

pub fn vocab_path(basefn: &Path) -> PathBuf {
    with_suffix(basefn, ".vocab")
}

/// Counts vocabulary entries; token content is not retained.
pub fn read_vocab(basefn: &Path) -> Result<VocabInfo, InputError> {
    let path = resolve_plain_or_gz(&vocab_path(basefn))?;
    let mut reader = open_maybe_gz(&path)?;
    let mut buf = String::new();
    let mut size = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        if !buf.trim().is_empty() {
            size += 1;
        }
    }

    Ok(VocabInfo { path, size })
}
