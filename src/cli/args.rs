//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// repoready - print the upload-readiness report for the hotel billing system
#[derive(Parser, Debug)]
#[command(name = "repoready")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the GitHub upload-readiness report for the hotel billing system")]
#[command(long_about = "repoready prints a fixed report describing the files, upload commands, \
features and statistics of the hotel billing system project. The report is compiled into the \
binary; nothing on disk is inspected and none of the listed git commands are executed.")]
#[command(after_help = "EXAMPLES:

    # Print the report
    repoready

    # Machine-readable report
    repoready --output json

    # Save a CSV copy of the tables
    repoready --output csv --output-file report.csv

    # Colored section headers
    repoready --color

    # Create a default .repoready.toml and use it
    repoready --init
    repoready --config .repoready.toml
")]
pub struct Args {
    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Output format: 'text' for the console report, 'json' or 'csv' for the underlying tables (default: text)")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Enable colored output
    #[arg(long, help = "Style section headers with ANSI colors (text output only)")]
    pub color: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to a TOML configuration file (none is read unless given)")]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, help = "Show debug logging on stderr")]
    pub verbose: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.repoready.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
