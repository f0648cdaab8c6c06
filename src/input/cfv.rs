use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::input::{InputError, open_maybe_gz, resolve_plain_or_gz};
use crate::model::scores::ScoreRecord;

/// `<dataset>/<name>-<scheme>.cfv`, where `name` is the last component of `dataset`.
pub fn cfv_path(dataset: &Path, scheme: &str) -> PathBuf {
    dataset.join(format!("{}-{}.cfv", dataset_name(dataset), scheme))
}

pub fn dataset_name(dataset: &Path) -> String {
    dataset
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dataset.display().to_string())
}

pub fn read_cfv(path: &Path) -> Result<(PathBuf, Vec<ScoreRecord>), InputError> {
    let path = resolve_plain_or_gz(path)?;
    let records = parse_cfv(&path)?;
    Ok((path, records))
}

pub fn parse_cfv(path: &Path) -> Result<Vec<ScoreRecord>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut records = Vec::new();
    let mut line_no = 0usize;
    let mut blank_line: Option<usize> = None;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        // Fold index is line index; only one blank line at EOF is tolerated.
        if let Some(blank) = blank_line {
            return Err(blank_line_error(path, blank));
        }
        let line = buf.trim();
        if line.is_empty() {
            blank_line = Some(line_no);
            continue;
        }
        let cols: Vec<&str> = line.split_whitespace().collect();
        if cols.len() != 3 {
            return Err(InputError::Parse(format!(
                "{} line {}: expected 3 columns, found {}",
                path.display(),
                line_no,
                cols.len()
            )));
        }
        let lda = parse_field(cols[0], path, line_no)?;
        let logic = parse_field(cols[1], path, line_no)?;
        let logic_total = parse_field(cols[2], path, line_no)?;
        records.push(ScoreRecord {
            lda,
            logic,
            logic_total,
        });
    }

    Ok(records)
}

fn parse_field(token: &str, path: &Path, line_no: usize) -> Result<f64, InputError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::Parse(format!(
            "{} line {}: invalid number {:?}",
            path.display(),
            line_no,
            token
        ))),
    }
}

fn blank_line_error(path: &Path, line_no: usize) -> InputError {
    InputError::Parse(format!(
        "{} line {}: blank line, expected 3 columns",
        path.display(),
        line_no
    ))
}
