use serde::Serialize;

use crate::report::SchemeMean;

#[derive(Debug, Serialize)]
struct AggregateSummaryJson<'a> {
    tool: &'static str,
    tool_version: &'static str,
    dataset: &'a str,
    rtable: &'a str,
    n_rows: usize,
    schemes: Vec<SchemeJson<'a>>,
}

#[derive(Debug, Serialize)]
struct SchemeJson<'a> {
    index: usize,
    name: &'a str,
    n_folds: usize,
    mean: f64,
}

pub fn render_summary_json(
    dataset: &str,
    rtable: &str,
    means: &[SchemeMean],
) -> Result<String, serde_json::Error> {
    let summary = AggregateSummaryJson {
        tool: env!("CARGO_PKG_NAME"),
        tool_version: env!("CARGO_PKG_VERSION"),
        dataset,
        rtable,
        n_rows: means.iter().map(|m| m.n_folds).sum(),
        schemes: means
            .iter()
            .enumerate()
            .map(|(index, m)| SchemeJson {
                index,
                name: &m.name,
                n_folds: m.n_folds,
                mean: m.mean,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&summary)
}
