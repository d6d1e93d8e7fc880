use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use tradesense::cli::Cli;

#[test]
fn test_no_arguments_simulates_without_execution() {
    let cli = Cli::try_parse_from(["tradesense"]).unwrap();
    assert!(cli.batch.is_none());
    assert!(!cli.execute);
}

#[test]
fn test_batch_path_and_execute_flag() {
    let cli = Cli::try_parse_from(["tradesense", "batch.json", "--execute"]).unwrap();
    assert_eq!(cli.batch, Some(PathBuf::from("batch.json")));
    assert!(cli.execute);
}

#[test]
fn test_misspelled_flag_is_rejected() {
    let err = Cli::try_parse_from(["tradesense", "--exectue"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_extra_positional_is_rejected() {
    let err = Cli::try_parse_from(["tradesense", "b.json", "extra.json"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_help_does_not_run() {
    let err = Cli::try_parse_from(["tradesense", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}
