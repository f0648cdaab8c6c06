use std::fs;
use std::path::PathBuf;

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("ldaprep").chain(args.iter().copied()))
}

#[test]
fn test_parse_params_defaults() {
    let cli = parse(&["params", "data/toy", "20"]).unwrap();
    let Command::Params(args) = cli.command else {
        panic!("expected params");
    };
    let config = params_config(args);
    assert_eq!(config.basefn, PathBuf::from("data/toy"));
    assert_eq!(config.n_topics, 20);
    assert_eq!(config.alpha_total, 50.0);
    assert_eq!(config.beta, 0.01);
}

#[test]
fn test_parse_params_rejects_zero_and_non_integer_topics() {
    assert!(parse(&["params", "toy", "0"]).is_err());
    assert!(parse(&["params", "toy", "ten"]).is_err());
    assert!(parse(&["params", "toy", "2.5"]).is_err());
}

#[test]
fn test_parse_aggregate_default_schemes() {
    let cli = parse(&["aggregate", "cora"]).unwrap();
    let Command::Aggregate(args) = cli.command else {
        panic!("expected aggregate");
    };
    let config = aggregate_config(args).unwrap();
    assert_eq!(config.schemes, vec!["MIR", "LDA"]);
    assert!(!config.strict_folds);
    assert_eq!(config.expected_folds, None);
}

#[test]
fn test_parse_aggregate_scheme_flag() {
    let cli = parse(&[
        "aggregate",
        "cora",
        "--schemes",
        "MIR,MPL,CGS",
        "--folds",
        "5",
        "--strict-folds",
    ])
    .unwrap();
    let Command::Aggregate(args) = cli.command else {
        panic!("expected aggregate");
    };
    let config = aggregate_config(args).unwrap();
    assert_eq!(config.schemes, vec!["MIR", "MPL", "CGS"]);
    assert_eq!(config.expected_folds, Some(5));
    assert!(config.strict_folds);
}

#[test]
fn test_parse_aggregate_schemes_file() {
    let mut dir = std::env::temp_dir();
    dir.push(format!("ldaprep_main_test_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("schemes.txt");
    fs::write(&path, "LDA\nALC\n").unwrap();

    let cli = parse(&["aggregate", "cora", "--schemes-file", path.to_str().unwrap()]).unwrap();
    let Command::Aggregate(args) = cli.command else {
        panic!("expected aggregate");
    };
    assert_eq!(aggregate_config(args).unwrap().schemes, vec!["LDA", "ALC"]);
}

#[test]
fn test_parse_aggregate_conflicting_scheme_sources() {
    assert!(parse(&["aggregate", "cora", "--schemes", "A", "--schemes-file", "s.txt"]).is_err());
}

#[test]
fn test_parse_inspect() {
    let cli = parse(&["inspect", "toy"]).unwrap();
    assert!(matches!(cli.command, Command::Inspect { .. }));
}
