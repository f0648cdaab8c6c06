use std::path::Path;

use tracing::info;

use crate::input::priors::read_prior_files;
use crate::input::resolve_plain_or_gz;
use crate::input::vocab::{read_vocab, vocab_path};
use crate::pipeline::PipelineError;
use crate::report::{PriorSummary, min_max};

/// Loads `.alpha`/`.beta` the way the modeling tool does and checks their shapes agree.
pub fn run_inspect(basefn: &Path) -> Result<PriorSummary, PipelineError> {
    let files = read_prior_files(basefn)?;
    let n_topics = files.alpha.len();
    if n_topics == 0 {
        return Err(PipelineError::InconsistentPriors(format!(
            "{} holds no values",
            files.alpha_path.display()
        )));
    }
    if files.beta.len() != n_topics {
        return Err(PipelineError::InconsistentPriors(format!(
            "{} has {} values but {} has {} rows",
            files.alpha_path.display(),
            n_topics,
            files.beta_path.display(),
            files.beta.len()
        )));
    }

    let vocab_size = files.beta[0].len();
    if let Some((t, row)) = files
        .beta
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != vocab_size)
    {
        return Err(PipelineError::InconsistentPriors(format!(
            "beta row {} has {} values, row 0 has {}",
            t,
            row.len(),
            vocab_size
        )));
    }

    if resolve_plain_or_gz(&vocab_path(basefn)).is_ok() {
        let vocab = read_vocab(basefn)?;
        if vocab.size != vocab_size {
            return Err(PipelineError::InconsistentPriors(format!(
                "beta width {} does not match vocabulary size {} in {}",
                vocab_size,
                vocab.size,
                vocab.path.display()
            )));
        }
    }

    let (alpha_min, alpha_max) = min_max(&files.alpha).unwrap_or((0.0, 0.0));
    let summary = PriorSummary {
        n_topics,
        vocab_size,
        alpha_sum: files.alpha.iter().sum(),
        alpha_min,
        alpha_max,
        beta_row_sums: files.beta.iter().map(|row| row.iter().sum()).collect(),
    };
    info!(
        "priors {} are consistent (T = {}, W = {})",
        basefn.display(),
        summary.n_topics,
        summary.vocab_size
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/inspect.rs"]
mod tests;
