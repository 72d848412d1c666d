//! Diagnostic logging
//!
//! Logs go to stderr so stdout carries nothing but the report.
//!
//! ## Log Levels
//! - Default: WARN
//! - `--verbose`: DEBUG
//! - `RUST_LOG` overrides both, e.g. `RUST_LOG=repoready=trace`

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "repoready=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Calling it again is a no-op.
///
/// ANSI styling is used only when stderr is a terminal.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
