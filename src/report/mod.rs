pub mod json;
pub mod text;

#[derive(Debug, Clone)]
pub struct PriorSummary {
    pub n_topics: usize,
    pub vocab_size: usize,
    pub alpha_sum: f64,
    pub alpha_min: f64,
    pub alpha_max: f64,
    pub beta_row_sums: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct SchemeMean {
    pub name: String,
    pub n_folds: usize,
    pub mean: f64,
}

/// Matches the C-style `%f` rendering the downstream tools expect.
pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
