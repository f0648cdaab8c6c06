use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::input::{InputError, open_maybe_gz, with_suffix};

#[derive(Debug, Clone)]
pub struct PriorFiles {
    pub alpha_path: PathBuf,
    pub beta_path: PathBuf,
    pub alpha: Vec<f64>,
    pub beta: Vec<Vec<f64>>,
}

pub fn alpha_path(basefn: &Path) -> PathBuf {
    with_suffix(basefn, ".alpha")
}

pub fn beta_path(basefn: &Path) -> PathBuf {
    with_suffix(basefn, ".beta")
}

/// Loads `<basefn>.alpha` as a flat vector and `<basefn>.beta` as one row per line,
/// empty lines included.
pub fn read_prior_files(basefn: &Path) -> Result<PriorFiles, InputError> {
    let alpha_path = alpha_path(basefn);
    let beta_path = beta_path(basefn);
    for path in [&alpha_path, &beta_path] {
        if !path.exists() {
            return Err(InputError::MissingInput(format!(
                "{} not found",
                path.display()
            )));
        }
    }

    let alpha_rows = read_float_rows(&alpha_path)?;
    let alpha = alpha_rows.into_iter().flatten().collect();
    let beta = read_float_rows(&beta_path)?;

    Ok(PriorFiles {
        alpha_path,
        beta_path,
        alpha,
        beta,
    })
}

fn read_float_rows(path: &Path) -> Result<Vec<Vec<f64>>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut rows = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        // An empty line is a legitimate zero-width row when W = 0.
        let line = buf.trim();
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let v = token.parse::<f64>().map_err(|_| {
                InputError::Parse(format!(
                    "{} line {}: invalid number {:?}",
                    path.display(),
                    line_no,
                    token
                ))
            })?;
            row.push(v);
        }
        rows.push(row);
    }

    Ok(rows)
}
