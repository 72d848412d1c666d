//! Output formatting and writing functionality

pub mod formatters;
pub mod writers;
#[cfg(test)]
mod tests;

pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::report::Report;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a report into a string
    fn format(&self, report: &Report) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(formatters::format_report_text(report, self.use_colors))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        formatters::format_report_json(report)
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        formatters::format_report_csv(report)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat, use_colors: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
