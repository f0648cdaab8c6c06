use std::path::PathBuf;

use tracing::info;

use crate::input::priors::{alpha_path, beta_path};
use crate::input::vocab::read_vocab;
use crate::model::priors::DirichletPriors;
use crate::pipeline::{PipelineError, write_output};
use crate::report::text::{write_alpha, write_beta};

#[derive(Debug, Clone)]
pub struct ParamsConfig {
    pub basefn: PathBuf,
    pub n_topics: usize,
    pub alpha_total: f64,
    pub beta: f64,
}

#[derive(Debug, Clone)]
pub struct ParamsOutput {
    pub priors: DirichletPriors,
    pub alpha_path: PathBuf,
    pub beta_path: PathBuf,
}

pub fn run_params(config: &ParamsConfig) -> Result<ParamsOutput, PipelineError> {
    let vocab = read_vocab(&config.basefn)?;
    info!(
        "read vocabulary {} (W = {})",
        vocab.path.display(),
        vocab.size
    );

    let priors = DirichletPriors::symmetric(
        config.n_topics,
        vocab.size,
        config.alpha_total,
        config.beta,
    )?;

    let alpha_path = alpha_path(&config.basefn);
    write_output(&alpha_path, |w| write_alpha(w, &priors))?;

    let beta_path = beta_path(&config.basefn);
    write_output(&beta_path, |w| write_beta(w, &priors))?;

    Ok(ParamsOutput {
        priors,
        alpha_path,
        beta_path,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/params.rs"]
mod tests;
