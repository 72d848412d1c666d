//! Error types and definitions for repoready
//!
//! Every failure the binary can hit lives in [`ReadyError`]. Printing the
//! report itself only fails when the output stream is gone; the rest of the
//! variants belong to configuration loading and file output.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error level - current operation fails
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for repoready operations
#[derive(Debug, Error)]
pub enum ReadyError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors (report output or `--init` template)
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// Rendered CSV was not valid UTF-8
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl ReadyError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReadyError::Config { .. } => ErrorSeverity::Critical,
            ReadyError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ReadyError::ConfigRead { .. } => ErrorSeverity::Critical,
            ReadyError::ConfigParse { .. } => ErrorSeverity::Critical,
            ReadyError::StdoutWrite { .. } => ErrorSeverity::Critical,
            ReadyError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ReadyError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            ReadyError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'.", path.display())
            }
            ReadyError::ConfigParse { path, source } => {
                format!("Invalid TOML in '{}': {}", path.display(), source)
            }
            ReadyError::OutputWrite { path, source } => {
                format!("Could not write '{}': {}", path.display(), source)
            }
            ReadyError::OutputDirectoryNotFound { path } => {
                format!("Output directory '{}' does not exist.", path.display())
            }
            _ => self.to_string(),
        }
    }

    /// Get a hint for fixing the error, if one applies
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ReadyError::ConfigNotFound { .. } => {
                Some("Run `repoready --init` to create a default .repoready.toml, or drop --config")
            }
            ReadyError::ConfigParse { .. } | ReadyError::Config { .. } => {
                Some("Check the configuration file against the keys written by `repoready --init`")
            }
            ReadyError::OutputDirectoryNotFound { .. } => {
                Some("Create the output directory first or specify a different path")
            }
            _ => None,
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        ReadyError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ReadyError::Config {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ReadyError {
    fn from(err: std::io::Error) -> Self {
        ReadyError::io_error(err)
    }
}

impl From<csv::Error> for ReadyError {
    fn from(err: csv::Error) -> Self {
        ReadyError::Csv { source: err }
    }
}

impl From<serde_json::Error> for ReadyError {
    fn from(err: serde_json::Error) -> Self {
        ReadyError::JsonSerialize { source: err }
    }
}

/// Result type alias for repoready operations
pub type Result<T> = std::result::Result<T, ReadyError>;
