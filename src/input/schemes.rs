use std::io::BufRead;
use std::path::Path;

use crate::input::{InputError, open_maybe_gz};

/// One scheme code per line; blank lines and `#` comments are ignored.
pub fn read_scheme_list(path: &Path) -> Result<Vec<String>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "scheme list {} not found",
            path.display()
        )));
    }
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut out = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        let line = buf.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        out.push(line.to_string());
    }

    validate_schemes(&out)?;
    Ok(out)
}

pub fn validate_schemes(schemes: &[String]) -> Result<(), InputError> {
    if schemes.is_empty() {
        return Err(InputError::InvalidInput("scheme list is empty".to_string()));
    }
    for scheme in schemes {
        if scheme.is_empty() || scheme.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(InputError::InvalidInput(format!(
                "invalid scheme code {:?}",
                scheme
            )));
        }
    }
    Ok(())
}
