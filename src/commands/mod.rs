//! Command implementations for taskbump.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input-collection helper shared by both
//! commands.

mod bump_cmd;
mod check;

use crate::cli::Command;
use crate::error::{BumpError, Result};
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Bump(args) => bump_cmd::cmd_bump(args),
        Command::Check(args) => check::cmd_check(args),
    }
}

/// Explicit file paths plus glob discovery under the root directory.
fn collect_files(files: &[PathBuf], globs: &[String], root: &Path) -> Result<Vec<PathBuf>> {
    let mut all = files.to_vec();
    if !globs.is_empty() {
        all.extend(crate::fs::discover_manifests(root, globs)?);
    }

    if all.is_empty() {
        return Err(BumpError::User(
            "no manifest files given; pass file paths or --glob patterns".to_string(),
        ));
    }
    Ok(all)
}
