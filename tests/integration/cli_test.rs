use clap::Parser;
use repoready::cli::args::{Args, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_cli_args_defaults() {
    let args = Args::parse_from(["repoready"]);
    assert_eq!(args.output, None);
    assert_eq!(args.output_file, None);
    assert_eq!(args.config, None);
    assert!(!args.color);
    assert!(!args.verbose);
    assert!(!args.init);
}

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from([
        "repoready",
        "--output", "csv",
        "--output-file", "report.csv",
        "--color",
        "--config", "custom.toml",
        "-v",
    ]);

    assert_eq!(args.output, Some(OutputFormat::Csv));
    assert_eq!(args.output_file, Some(PathBuf::from("report.csv")));
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert!(args.color);
    assert!(args.verbose);
}

#[test]
fn test_cli_rejects_unknown_format() {
    assert!(Args::try_parse_from(["repoready", "--output", "xml"]).is_err());
}

#[test]
fn test_cli_rejects_positional_arguments() {
    assert!(Args::try_parse_from(["repoready", "extra"]).is_err());
}
