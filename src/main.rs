use std::process;

use repoready::{
    cli::{Args, Command},
    error::ReadyError,
};

fn main() {
    let command = Command::from_args(Args::parse_args());

    let exit_code = match command.execute() {
        Ok(()) => 0,
        Err(err) => report_error(&err),
    };

    process::exit(exit_code);
}

/// Print a user-facing error on stderr and pick the exit code
fn report_error(err: &ReadyError) -> i32 {
    eprintln!("\nError: {}", err.user_message());

    if let Some(suggestion) = err.suggestion() {
        eprintln!("Suggestion: {}", suggestion);
    }

    let exit_code = if err.is_critical() { 2 } else { 1 };
    eprintln!("\nExiting with code {} due to {}", exit_code, err.severity());

    exit_code
}
