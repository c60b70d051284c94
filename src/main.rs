//! Taskbump: semantic version bumper for task manifest JSON files.
//!
//! This is the main entry point for the `taskbump` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and maps
//! errors to distinct exit codes.

mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod manifest;
pub mod options;
pub mod transform;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
