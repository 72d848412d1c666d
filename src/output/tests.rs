//! Tests for output formatting

use crate::core::hotel_billing_report;
use crate::models::config::OutputFormat;
use crate::output::{
    create_formatter, create_writer, CsvFormatter, FileWriter, Formatter, JsonFormatter,
    OutputWriter, TextFormatter,
};
use std::fs;
use tempfile::tempdir;

const EXPECTED_TEXT: &str = include_str!("../../tests/fixtures/hotel_billing_report.txt");

#[test]
fn test_text_formatter_matches_fixture() {
    let report = hotel_billing_report();
    let output = TextFormatter::new(false).format(&report).unwrap();
    assert_eq!(output, EXPECTED_TEXT);
}

#[test]
fn test_text_formatter_alignment() {
    let report = hotel_billing_report();
    let output = TextFormatter::new(false).format(&report).unwrap();

    assert!(output.contains("   ✅ Core Project Files            : 24 files - "));
    assert!(output.contains("   ✅ README.md                     :  1 files - "));
    assert!(output.contains("   🌟 Production Ready         : GST compliance"));
    assert!(output.contains("   📈 Menu Items          : 21 items across 4 categories"));
    assert!(output.contains("\n7. git push -u origin main\n"));
}

#[test]
fn test_text_formatter_with_colors() {
    let report = hotel_billing_report();
    let plain = TextFormatter::new(false).format(&report).unwrap();
    let colored = TextFormatter::new(true).format(&report).unwrap();

    assert_ne!(plain, colored);
    assert!(colored.contains("\x1b["));
    assert!(colored.contains("QUICK UPLOAD COMMANDS"));
    assert!(!plain.contains("\x1b["));
}

#[test]
fn test_json_formatter() {
    let report = hotel_billing_report();
    let output = JsonFormatter.format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["total_files"], 30);
    assert_eq!(value["files"].as_array().unwrap().len(), 7);
    assert_eq!(value["files"][0]["description"], "Core Project Files");
    assert_eq!(value["commands"][1], "git init");
    assert_eq!(value["statistics"][0]["value"], "29 files (24 code + 5 GitHub files)");
    assert_eq!(value["closing"]["sign_off"].as_array().unwrap().len(), 2);
}

#[test]
fn test_csv_formatter() {
    let report = hotel_billing_report();
    let output = CsvFormatter.format(&report).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "section,position,label,count,detail");
    assert_eq!(lines[1], "summary,,Total Files Ready,30,");
    assert_eq!(
        lines[2],
        "files,1,Core Project Files,24,Complete React application with all components"
    );
    // header + summary + 7 files + 7 commands + 10 features + 8 highlights + 8 stats + 8 benefits
    assert_eq!(lines.len(), 50);
    assert!(output.contains("commands,4,\"git commit -m \"\"🎉 Initial commit: Complete hotel billing system\"\"\",,"));
}

#[test]
fn test_create_formatter() {
    let report = hotel_billing_report();

    let text = create_formatter(OutputFormat::Text, false).format(&report).unwrap();
    assert!(text.starts_with("📁 GITHUB REPOSITORY PREPARATION"));

    let json = create_formatter(OutputFormat::Json, false).format(&report).unwrap();
    assert!(json.starts_with('{'));

    let csv = create_formatter(OutputFormat::Csv, true).format(&report).unwrap();
    assert!(csv.starts_with("section,"));
}

#[test]
fn test_file_writer() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("report.txt");

    let writer = FileWriter::new(&path);
    writer.write("hello report\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello report\n");
}

#[test]
fn test_file_writer_missing_directory() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("missing").join("report.txt");

    let err = FileWriter::new(&path).write("x").unwrap_err();
    assert!(matches!(err, crate::error::ReadyError::OutputWrite { .. }));
}

#[test]
fn test_create_writer_to_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("out.csv");

    create_writer(Some(&path)).write("a,b\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");
}
