use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::cfv::{cfv_path, dataset_name, parse_cfv, read_cfv};
use super::priors::read_prior_files;
use super::schemes::{read_scheme_list, validate_schemes};
use super::vocab::read_vocab;
use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("ldaprep_input_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_with_suffix_keeps_dots_in_base() {
    let p = with_suffix(Path::new("data/corpus.v2"), ".vocab");
    assert_eq!(p, PathBuf::from("data/corpus.v2.vocab"));
}

#[test]
fn test_vocab_counts_non_empty_lines() {
    let dir = make_temp_dir();
    let base = dir.join("toy");
    fs::write(dir.join("toy.vocab"), "apple\nbanana\n\n  \ncherry\n").unwrap();
    let vocab = read_vocab(&base).unwrap();
    assert_eq!(vocab.size, 3);
    assert_eq!(vocab.path, dir.join("toy.vocab"));
}

#[test]
fn test_vocab_empty_file_is_zero() {
    let dir = make_temp_dir();
    let base = dir.join("empty");
    fs::write(dir.join("empty.vocab"), "").unwrap();
    assert_eq!(read_vocab(&base).unwrap().size, 0);
}

#[test]
fn test_vocab_falls_back_to_gz() {
    let dir = make_temp_dir();
    let base = dir.join("zipped");
    write_gz(&dir.join("zipped.vocab.gz"), "a\nb\nc\nd\n");
    let vocab = read_vocab(&base).unwrap();
    assert_eq!(vocab.size, 4);
    assert!(vocab.path.to_string_lossy().ends_with(".vocab.gz"));
}

#[test]
fn test_vocab_missing_is_missing_input() {
    let dir = make_temp_dir();
    let err = read_vocab(&dir.join("nope")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_cfv_path_uses_last_component() {
    let p = cfv_path(Path::new("results/cora"), "MIR");
    assert_eq!(p, PathBuf::from("results/cora/cora-MIR.cfv"));
    assert_eq!(dataset_name(Path::new("cora")), "cora");
}

#[test]
fn test_parse_cfv_records() {
    let dir = make_temp_dir();
    let path = dir.join("d-A.cfv");
    // One trailing blank line at EOF is accepted.
    fs::write(&path, "1.0 2.0 9.0\n3.0\t4.0  9.0\n\n").unwrap();
    let records = parse_cfv(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].combined(), 3.0);
    assert_eq!(records[1].combined(), 7.0);
    assert_eq!(records[1].logic_total, 9.0);
}

#[test]
fn test_parse_cfv_wrong_column_count() {
    let dir = make_temp_dir();
    let path = dir.join("d-A.cfv");
    fs::write(&path, "1.0 2.0 9.0\n1.0 2.0\n").unwrap();
    let err = parse_cfv(&path).unwrap_err();
    match err {
        InputError::Parse(msg) => assert!(msg.contains("line 2"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_cfv_non_numeric() {
    let dir = make_temp_dir();
    let path = dir.join("d-A.cfv");
    fs::write(&path, "1.0 x 9.0\n").unwrap();
    assert!(matches!(parse_cfv(&path), Err(InputError::Parse(_))));
}

#[test]
fn test_parse_cfv_blank_line_between_folds() {
    let dir = make_temp_dir();
    let path = dir.join("d-A.cfv");
    fs::write(&path, "1.0 2.0 9.0\n\n3.0 4.0 9.0\n").unwrap();
    match parse_cfv(&path).unwrap_err() {
        InputError::Parse(msg) => assert!(msg.contains("line 2"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_cfv_whitespace_line_between_folds() {
    let dir = make_temp_dir();
    let path = dir.join("d-A.cfv");
    fs::write(&path, "1.0 2.0 9.0\n   \t\n3.0 4.0 9.0\n").unwrap();
    assert!(matches!(parse_cfv(&path), Err(InputError::Parse(_))));
}

#[test]
fn test_parse_cfv_two_trailing_blank_lines() {
    let dir = make_temp_dir();
    let path = dir.join("d-A.cfv");
    fs::write(&path, "1.0 2.0 9.0\n\n\n").unwrap();
    match parse_cfv(&path).unwrap_err() {
        InputError::Parse(msg) => assert!(msg.contains("line 2"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_cfv_non_finite_values() {
    let dir = make_temp_dir();
    for (i, line) in ["nan 0.5 9.0\n", "0.5 inf 9.0\n", "0.5 0.5 -infinity\n"]
        .iter()
        .enumerate()
    {
        let path = dir.join(format!("d-{i}.cfv"));
        fs::write(&path, line).unwrap();
        match parse_cfv(&path).unwrap_err() {
            InputError::Parse(msg) => assert!(msg.contains("line 1"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_read_cfv_missing_file() {
    let dir = make_temp_dir();
    let err = read_cfv(&dir.join("d-A.cfv")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_scheme_list_file() {
    let dir = make_temp_dir();
    let path = dir.join("schemes.txt");
    fs::write(&path, "# compared variants\nMIR\n\nLDA\n  CGS  \n").unwrap();
    let schemes = read_scheme_list(&path).unwrap();
    assert_eq!(schemes, vec!["MIR", "LDA", "CGS"]);
}

#[test]
fn test_scheme_list_rejects_empty_and_bad_codes() {
    assert!(validate_schemes(&[]).is_err());
    assert!(validate_schemes(&["A B".to_string()]).is_err());
    assert!(validate_schemes(&["../x".to_string()]).is_err());
    assert!(validate_schemes(&["MIR".to_string()]).is_ok());

    let dir = make_temp_dir();
    let path = dir.join("schemes.txt");
    fs::write(&path, "# nothing here\n").unwrap();
    assert!(matches!(
        read_scheme_list(&path),
        Err(InputError::InvalidInput(_))
    ));
}

#[test]
fn test_read_prior_files_keeps_empty_beta_rows() {
    let dir = make_temp_dir();
    let base = dir.join("p");
    fs::write(dir.join("p.alpha"), "25.000000 25.000000 ").unwrap();
    fs::write(dir.join("p.beta"), "\n\n").unwrap();
    let files = read_prior_files(&base).unwrap();
    assert_eq!(files.alpha, vec![25.0, 25.0]);
    assert_eq!(files.beta.len(), 2);
    assert!(files.beta.iter().all(Vec::is_empty));
}
