use thiserror::Error;

pub mod priors;
pub mod scores;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("topic count must be a positive integer, got {0}")]
    ZeroTopics(usize),
    #[error("{name} must be finite and > 0, got {value}")]
    InvalidHyperparameter { name: &'static str, value: f64 },
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
