//! Data models for the repoready application

pub mod config;
pub mod report;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use report::{Closing, FileCategory, Highlight, Report, ReportDocument, Statistic};
