//! CLI argument parsing for taskbump.
//!
//! Uses clap derive macros for declarative argument definitions. This
//! module defines the command structure; actual implementations are in
//! the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Taskbump: semantic version bumper for task manifest JSON files.
///
/// A task manifest carries its version as an object with `Major`, `Minor`
/// and `Patch` fields. Taskbump computes the next semantic version for a
/// release type and rewrites those fields in place, leaving every other
/// field untouched.
#[derive(Parser, Debug)]
#[command(name = "taskbump")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for taskbump.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bump the version fields of task manifest files.
    ///
    /// Rewrites each manifest in place (atomically) and reports the bump
    /// per file unless --quiet is set.
    Bump(BumpArgs),

    /// Check task manifests for valid version specifications.
    ///
    /// Parses each manifest and validates its version without modifying
    /// anything.
    Check(CheckArgs),
}

/// Arguments for the `bump` command.
#[derive(Parser, Debug)]
pub struct BumpArgs {
    /// Manifest files to process.
    pub files: Vec<PathBuf>,

    /// Glob patterns (relative to --root) for discovering manifests.
    #[arg(long = "glob", value_name = "PATTERN")]
    pub globs: Vec<String>,

    /// Root directory for --glob discovery.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Release type: patch, minor, major, prepatch, preminor, premajor or
    /// prerelease. Unknown values fall back to patch.
    #[arg(long = "type", value_name = "TYPE")]
    pub release_type: Option<String>,

    /// Spaces per indentation level (1-10), or "tab". Malformed values
    /// fall back to 2.
    #[arg(long, value_name = "WIDTH")]
    pub indent: Option<String>,

    /// Representation of the rewritten version fields: "number" or
    /// "string".
    #[arg(long = "version-property-type", value_name = "TYPE")]
    pub version_property_type: Option<String>,

    /// Suppress per-file output.
    #[arg(long)]
    pub quiet: bool,

    /// JSON file with default options; flags take precedence. Recognized
    /// keys: type, indent, versionPropertyType, quiet.
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Emit one JSON event line per bumped file instead of text.
    #[arg(long)]
    pub json: bool,

    /// Print transformed manifests to stdout without rewriting files.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Manifest files to check.
    pub files: Vec<PathBuf>,

    /// Glob patterns (relative to --root) for discovering manifests.
    #[arg(long = "glob", value_name = "PATTERN")]
    pub globs: Vec<String>,

    /// Root directory for --glob discovery.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
