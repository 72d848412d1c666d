//! Error handling for repoready
//!
//! Error types and the crate-wide result alias.

pub mod types;

pub use types::{ErrorSeverity, ReadyError, Result};
