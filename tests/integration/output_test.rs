use repoready::{
    error::Result,
    hotel_billing_report,
    models::config::OutputFormat,
    output::{create_formatter, FileWriter, OutputWriter},
};
use std::fs;
use tempfile::tempdir;

const EXPECTED_TEXT: &str = include_str!("../fixtures/hotel_billing_report.txt");

#[test]
fn test_text_output_is_deterministic() -> Result<()> {
    let formatter = create_formatter(OutputFormat::Text, false);

    let first = formatter.format(&hotel_billing_report())?;
    let second = formatter.format(&hotel_billing_report())?;

    assert_eq!(first, second);
    assert_eq!(first, EXPECTED_TEXT);
    Ok(())
}

#[test]
fn test_total_files_line_uses_column_sum() -> Result<()> {
    let report = hotel_billing_report();
    let sum: u32 = report.files.iter().map(|f| f.count).sum();
    assert_eq!(sum, 30);

    let output = create_formatter(OutputFormat::Text, false).format(&report)?;
    assert!(output.contains(&format!("📊 Total Files Ready: {}\n", sum)));
    assert!(output.contains("   📈 Total Files         : 29 files (24 code + 5 GitHub files)\n"));
    Ok(())
}

#[test]
fn test_every_format_writes_to_file() -> Result<()> {
    let temp_dir = tempdir().unwrap();
    let report = hotel_billing_report();

    for (format, name) in [
        (OutputFormat::Text, "report.txt"),
        (OutputFormat::Json, "report.json"),
        (OutputFormat::Csv, "report.csv"),
    ] {
        let path = temp_dir.path().join(name);
        let content = create_formatter(format, false).format(&report)?;
        FileWriter::new(&path).write(&content)?;

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, content);
        assert!(!written.is_empty());
    }

    Ok(())
}
