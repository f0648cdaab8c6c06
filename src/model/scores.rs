/// One line of a `.cfv` file. `logic_total` is carried but never combined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRecord {
    pub lda: f64,
    pub logic: f64,
    pub logic_total: f64,
}

impl ScoreRecord {
    pub fn combined(&self) -> f64 {
        self.lda + self.logic
    }
}

/// Combined per-fold values of one scheme, in file line order.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeScores {
    pub name: String,
    pub folds: Vec<f64>,
}

impl SchemeScores {
    pub fn from_records(name: &str, records: &[ScoreRecord]) -> Self {
        Self {
            name: name.to_string(),
            folds: records.iter().map(ScoreRecord::combined).collect(),
        }
    }

    pub fn n_folds(&self) -> usize {
        self.folds.len()
    }

    /// `None` for a scheme with no folds.
    pub fn mean(&self) -> Option<f64> {
        if self.folds.is_empty() {
            return None;
        }
        Some(self.folds.iter().sum::<f64>() / self.folds.len() as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub value: f64,
    pub fold: usize,
    pub scheme: usize,
}

/// Flattens schemes into rows, scheme-major then fold order, both 0-based.
pub fn flatten_rows(schemes: &[SchemeScores]) -> Vec<ResultRow> {
    let mut rows = Vec::with_capacity(schemes.iter().map(SchemeScores::n_folds).sum());
    for (si, scheme) in schemes.iter().enumerate() {
        for (ki, &value) in scheme.folds.iter().enumerate() {
            rows.push(ResultRow {
                value,
                fold: ki,
                scheme: si,
            });
        }
    }
    rows
}
