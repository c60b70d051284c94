//! Error types for the taskbump CLI.
//!
//! Uses thiserror for derive macros. Each variant maps to a distinct exit
//! code so pipelines can tell failure kinds apart per file.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for taskbump operations.
///
/// The first four variants are the per-file failure kinds of the transform;
/// `User` covers CLI-level problems (bad arguments, unreadable inputs).
#[derive(Error, Debug)]
pub enum BumpError {
    /// File content is not parseable JSON, or carries no version object.
    #[error("Error parsing JSON file '{}'", .path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// The extracted version string is not a valid semantic version.
    ///
    /// Carries the offending string verbatim, including `undefined`
    /// placeholders for absent sub-fields.
    #[error("Task manifest file contains an invalid version specification: {version}")]
    InvalidVersion {
        /// The dotted version string as extracted from the manifest.
        version: String,
    },

    /// Version computation or re-serialization failed after a valid
    /// version was established.
    #[error("Error bumping version in '{}'", .path.display())]
    Update {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// File content arrives as an incremental stream rather than a whole
    /// buffer.
    #[error("Streaming not supported")]
    StreamingUnsupported,

    /// User provided invalid arguments or an unreadable input.
    #[error("{0}")]
    User(String),
}

impl BumpError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BumpError::Parse { .. } => exit_codes::PARSE_FAILURE,
            BumpError::InvalidVersion { .. } => exit_codes::VERSION_FAILURE,
            BumpError::Update { .. } => exit_codes::UPDATE_FAILURE,
            BumpError::StreamingUnsupported => exit_codes::STREAMING_FAILURE,
            BumpError::User(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for taskbump operations.
pub type Result<T> = std::result::Result<T, BumpError>;
