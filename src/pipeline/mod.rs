use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::InputError;
use crate::model::ModelError;

pub mod aggregate;
pub mod inspect;
pub mod params;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scheme {scheme} has no folds in {}; its mean is undefined", .path.display())]
    EmptyScheme { scheme: String, path: PathBuf },
    #[error("fold counts differ across schemes: {details}")]
    FoldMismatch { details: String },
    #[error("scheme {scheme} has {found} folds, expected {expected}")]
    FoldCount {
        scheme: String,
        expected: usize,
        found: usize,
    },
    #[error("inconsistent prior files: {0}")]
    InconsistentPriors(String),
}

/// Creates or truncates `path` and hands a buffered writer to `body`.
pub(crate) fn write_output<F>(path: &Path, body: F) -> Result<(), PipelineError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let write = || -> io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        body(&mut w)?;
        w.flush()
    };
    write().map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}
