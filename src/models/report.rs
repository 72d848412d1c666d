//! Report data structures
//!
//! A [`Report`] is a fixed bundle of literal tables. Nothing in it is
//! derived from the filesystem; the only computed figure is
//! [`Report::total_files`].

use serde::Serialize;

/// One row of the file breakdown table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileCategory {
    pub description: &'static str,
    pub count: u32,
    pub purpose: &'static str,
}

/// One row of the repository highlights table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// One row of the project statistics table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistic {
    pub label: &'static str,
    pub value: &'static str,
}

/// Closing block printed after the congratulations header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Closing {
    /// Multi-line body; starts and ends with a newline
    pub body: &'static str,
    pub sign_off: [&'static str; 2],
}

/// The complete upload-readiness report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub files: Vec<FileCategory>,
    pub commands: Vec<&'static str>,
    pub features: Vec<&'static str>,
    pub highlights: Vec<Highlight>,
    pub statistics: Vec<Statistic>,
    pub benefits: Vec<&'static str>,
    pub closing: Closing,
}

impl Report {
    /// Sum of the file breakdown count column
    pub fn total_files(&self) -> u32 {
        self.files.iter().map(|f| f.count).sum()
    }
}

/// Report as serialized for machine-readable output
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub total_files: u32,
    #[serde(flatten)]
    pub report: &'a Report,
}

impl<'a> From<&'a Report> for ReportDocument<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            total_files: report.total_files(),
            report,
        }
    }
}
