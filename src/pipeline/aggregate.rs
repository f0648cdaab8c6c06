use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::input::cfv::{cfv_path, dataset_name, read_cfv};
use crate::input::schemes::validate_schemes;
use crate::model::scores::{ResultRow, SchemeScores, flatten_rows};
use crate::pipeline::{PipelineError, write_output};
use crate::report::SchemeMean;
use crate::report::json::render_summary_json;
use crate::report::text::write_rtable;

pub const DEFAULT_SCHEMES: &[&str] = &["MIR", "LDA"];

#[derive(Debug, Clone)]
pub struct AggregateConfig {
    pub dataset: PathBuf,
    pub schemes: Vec<String>,
    pub expected_folds: Option<usize>,
    pub strict_folds: bool,
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AggregateOutput {
    pub rtable_path: PathBuf,
    pub rows: Vec<ResultRow>,
    pub means: Vec<SchemeMean>,
}

pub fn rtable_path(dataset: &Path) -> PathBuf {
    dataset.join(format!("{}.rtable", dataset_name(dataset)))
}

pub fn run_aggregate(config: &AggregateConfig) -> Result<AggregateOutput, PipelineError> {
    validate_schemes(&config.schemes)?;
    warn_duplicates(&config.schemes);

    let mut schemes = Vec::with_capacity(config.schemes.len());
    let mut sources = Vec::with_capacity(config.schemes.len());
    for name in &config.schemes {
        let (path, records) = read_cfv(&cfv_path(&config.dataset, name))?;
        debug!(
            "{}: {} folds from {} (logic total column sum {})",
            name,
            records.len(),
            path.display(),
            records.iter().map(|r| r.logic_total).sum::<f64>()
        );
        schemes.push(SchemeScores::from_records(name, &records));
        sources.push(path);
    }

    let means = scheme_means(&schemes, &sources)?;
    check_fold_counts(&schemes, config.expected_folds, config.strict_folds)?;

    let rows = flatten_rows(&schemes);
    let rtable_path = rtable_path(&config.dataset);
    write_output(&rtable_path, |w| write_rtable(w, &rows))?;

    if let Some(path) = &config.summary_json {
        let json = render_summary_json(
            &dataset_name(&config.dataset),
            &rtable_path.display().to_string(),
            &means,
        )?;
        write_output(path, |w| w.write_all(json.as_bytes()))?;
        info!("wrote {}", path.display());
    }

    Ok(AggregateOutput {
        rtable_path,
        rows,
        means,
    })
}

/// Fails on the first scheme without folds rather than reporting a NaN mean.
pub fn scheme_means(
    schemes: &[SchemeScores],
    sources: &[PathBuf],
) -> Result<Vec<SchemeMean>, PipelineError> {
    let mut out = Vec::with_capacity(schemes.len());
    for (scheme, path) in schemes.iter().zip(sources) {
        let Some(mean) = scheme.mean() else {
            return Err(PipelineError::EmptyScheme {
                scheme: scheme.name.clone(),
                path: path.clone(),
            });
        };
        out.push(SchemeMean {
            name: scheme.name.clone(),
            n_folds: scheme.n_folds(),
            mean,
        });
    }
    Ok(out)
}

pub fn check_fold_counts(
    schemes: &[SchemeScores],
    expected: Option<usize>,
    strict: bool,
) -> Result<(), PipelineError> {
    if let Some(expected) = expected {
        if let Some(s) = schemes.iter().find(|s| s.n_folds() != expected) {
            return Err(PipelineError::FoldCount {
                scheme: s.name.clone(),
                expected,
                found: s.n_folds(),
            });
        }
    }

    let counts: BTreeSet<usize> = schemes.iter().map(SchemeScores::n_folds).collect();
    if counts.len() <= 1 {
        return Ok(());
    }
    let details = schemes
        .iter()
        .map(|s| format!("{}={}", s.name, s.n_folds()))
        .collect::<Vec<_>>()
        .join(", ");
    if strict {
        return Err(PipelineError::FoldMismatch { details });
    }
    warn!("fold counts differ across schemes ({details}); rtable rows will be unbalanced");
    Ok(())
}

fn warn_duplicates(schemes: &[String]) {
    let mut seen = BTreeSet::new();
    for s in schemes {
        if !seen.insert(s.as_str()) {
            warn!("scheme {} listed more than once", s);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/aggregate.rs"]
mod tests;
