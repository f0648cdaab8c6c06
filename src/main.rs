mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::input::InputError;
use crate::input::schemes::read_scheme_list;
use crate::model::priors::{DEFAULT_ALPHA_TOTAL, DEFAULT_BETA};
use crate::pipeline::PipelineError;
use crate::pipeline::aggregate::{AggregateConfig, DEFAULT_SCHEMES, run_aggregate};
use crate::pipeline::inspect::run_inspect;
use crate::pipeline::params::{ParamsConfig, run_params};
use crate::report::text::{mean_line, render_prior_summary};

/// Prior generation and result collation for LogicLDA experiments.
#[derive(Debug, Parser)]
#[command(name = "ldaprep", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write symmetric Dirichlet priors <basefn>.alpha and <basefn>.beta
    Params(ParamsArgs),
    /// Collate per-fold .cfv scores into <dataset>.rtable and print scheme means
    Aggregate(AggregateArgs),
    /// Read <basefn>.alpha and <basefn>.beta back and check their shapes agree
    Inspect {
        basefn: PathBuf,
    },
}

#[derive(Debug, Args)]
struct ParamsArgs {
    /// Base path; <basefn>.vocab is read
    basefn: PathBuf,
    /// Number of topics T
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    topics: u32,
    /// alpha = alpha_total / T
    #[arg(long, default_value_t = DEFAULT_ALPHA_TOTAL)]
    alpha_total: f64,
    #[arg(long, default_value_t = DEFAULT_BETA)]
    beta: f64,
}

#[derive(Debug, Args)]
struct AggregateArgs {
    /// Directory holding <name>-<scheme>.cfv files; <name> is its last component
    dataset: PathBuf,
    /// Comma-separated scheme codes, in report order [default: MIR,LDA]
    #[arg(long, value_delimiter = ',', conflicts_with = "schemes_file")]
    schemes: Vec<String>,
    /// File with one scheme code per line
    #[arg(long)]
    schemes_file: Option<PathBuf>,
    /// Require exactly this many folds per scheme
    #[arg(long)]
    folds: Option<usize>,
    /// Fail instead of warning when schemes have different fold counts
    #[arg(long)]
    strict_folds: bool,
    /// Also write a JSON summary of the means here
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    match cli.command {
        Command::Params(args) => {
            let output = run_params(&params_config(args))?;
            let priors = &output.priors;
            info!(
                "wrote {} (T = {}, alpha = {}, sum = {})",
                output.alpha_path.display(),
                priors.n_topics,
                priors.alpha,
                priors.alpha_sum()
            );
            info!(
                "wrote {} ({} x {}, beta = {})",
                output.beta_path.display(),
                priors.n_topics,
                priors.vocab_size,
                priors.beta
            );
        }
        Command::Aggregate(args) => {
            let config = aggregate_config(args)?;
            let output = run_aggregate(&config)?;
            info!(
                "wrote {} ({} rows)",
                output.rtable_path.display(),
                output.rows.len()
            );
            for mean in &output.means {
                println!("{}", mean_line(mean));
            }
        }
        Command::Inspect { basefn } => {
            let summary = run_inspect(&basefn)?;
            print!("{}", render_prior_summary(&summary));
        }
    }
    Ok(())
}

fn params_config(args: ParamsArgs) -> ParamsConfig {
    ParamsConfig {
        basefn: args.basefn,
        n_topics: args.topics as usize,
        alpha_total: args.alpha_total,
        beta: args.beta,
    }
}

fn aggregate_config(args: AggregateArgs) -> Result<AggregateConfig, InputError> {
    let schemes = if let Some(path) = &args.schemes_file {
        read_scheme_list(path)?
    } else if !args.schemes.is_empty() {
        args.schemes
    } else {
        DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect()
    };
    Ok(AggregateConfig {
        dataset: args.dataset,
        schemes,
        expected_folds: args.folds,
        strict_folds: args.strict_folds,
        summary_json: args.summary_json,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
