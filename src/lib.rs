//! repoready - prints the GitHub upload-readiness report for the hotel
//! billing system project
//!
//! The report is a set of literal tables compiled into the crate. This
//! library renders them as text, JSON or CSV and writes the result to
//! stdout or a file.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use crate::core::hotel_billing_report;
pub use error::{ErrorSeverity, ReadyError, Result};
pub use models::{
    config::{OutputFormat, Settings},
    report::Report,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
