use crate::model::ModelError;

pub const DEFAULT_ALPHA_TOTAL: f64 = 50.0;
pub const DEFAULT_BETA: f64 = 0.01;

/// Symmetric Dirichlet priors: a T-vector of `alpha` and a T x W matrix of `beta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirichletPriors {
    pub n_topics: usize,
    pub vocab_size: usize,
    pub alpha: f64,
    pub beta: f64,
}

impl DirichletPriors {
    pub fn symmetric(
        n_topics: usize,
        vocab_size: usize,
        alpha_total: f64,
        beta: f64,
    ) -> Result<Self, ModelError> {
        if n_topics == 0 {
            return Err(ModelError::ZeroTopics(n_topics));
        }
        check_positive("alpha total", alpha_total)?;
        check_positive("beta", beta)?;
        Ok(Self {
            n_topics,
            vocab_size,
            alpha: alpha_total / n_topics as f64,
            beta,
        })
    }

    pub fn alpha_sum(&self) -> f64 {
        self.alpha * self.n_topics as f64
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidHyperparameter { name, value })
    }
}
