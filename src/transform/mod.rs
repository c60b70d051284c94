//! Per-file transform orchestration.
//!
//! One entry at a time: parse, extract, validate, bump, re-serialize.
//! Processing is synchronous and stateless across entries; the driving
//! pipeline receives the result through a completion callback invoked
//! exactly once per entry.


use crate::error::{BumpError, Result};
use crate::manifest::{Manifest, bump_version};
use crate::options::{BumpType, Options};
use chrono::{DateTime, Utc};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a pipeline entry's content arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    /// Placeholder entry with no content; passes through unchanged.
    Empty,
    /// Whole file content delivered as one buffer.
    Buffer(Vec<u8>),
    /// Content delivered incrementally; rejected.
    Stream,
}

/// One file flowing through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File-system path, used for error context.
    pub path: PathBuf,
    /// The entry's content classification.
    pub contents: FileContents,
}

impl FileEntry {
    /// Entry carrying a whole buffer.
    pub fn buffer(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            contents: FileContents::Buffer(bytes),
        }
    }

    /// Placeholder entry with no content.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: FileContents::Empty,
        }
    }

    /// Whether this entry is a placeholder with no content.
    pub fn is_empty(&self) -> bool {
        matches!(self.contents, FileContents::Empty)
    }

    /// Whether this entry's content is delivered incrementally.
    pub fn is_stream(&self) -> bool {
        matches!(self.contents, FileContents::Stream)
    }
}

/// Record of one successful bump.
///
/// Returned to the caller instead of being logged from inside the bump
/// path; the caller decides whether and how to emit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BumpEvent {
    /// When the bump happened.
    pub ts: DateTime<Utc>,
    /// The file that was rewritten.
    pub path: PathBuf,
    /// Version before the bump.
    pub old_version: String,
    /// Version after the bump.
    pub new_version: String,
    /// The increment that was applied.
    pub release_type: BumpType,
}

impl BumpEvent {
    /// Serialize the event to a single-line JSON string for NDJSON output.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| BumpError::User(format!("failed to serialize bump event to JSON: {}", e)))
    }
}

impl std::fmt::Display for BumpEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bumped {} to {} with type: {}",
            self.old_version, self.new_version, self.release_type
        )
    }
}

/// Run one entry through the parse, extract, validate, bump, serialize
/// sequence.
///
/// Empty entries pass through unchanged; streamed entries are rejected.
/// On success the returned entry carries the re-serialized content and the
/// event describes the bump.
pub fn process_entry(options: &Options, entry: FileEntry) -> Result<(FileEntry, Option<BumpEvent>)> {
    let FileEntry { path, contents } = entry;

    let bytes = match contents {
        FileContents::Empty => {
            let entry = FileEntry {
                path,
                contents: FileContents::Empty,
            };
            return Ok((entry, None));
        }
        FileContents::Stream => return Err(BumpError::StreamingUnsupported),
        FileContents::Buffer(bytes) => bytes,
    };

    let mut manifest =
        Manifest::from_slice(&bytes).map_err(|_| BumpError::Parse { path: path.clone() })?;

    // A manifest without a version object fails the same way as malformed
    // JSON.
    let current = manifest
        .version_string()
        .ok_or_else(|| BumpError::Parse { path: path.clone() })?;

    let parsed = Version::parse(&current).map_err(|_| BumpError::InvalidVersion {
        version: current.clone(),
    })?;

    let bumped = bump_version(&mut manifest, &parsed, options)
        .map_err(|_| BumpError::Update { path: path.clone() })?;
    let output = manifest
        .to_bytes(&options.indent)
        .map_err(|_| BumpError::Update { path: path.clone() })?;

    let event = BumpEvent {
        ts: Utc::now(),
        path: path.clone(),
        old_version: current,
        new_version: bumped.to_string(),
        release_type: options.release_type,
    };

    let entry = FileEntry {
        path,
        contents: FileContents::Buffer(output),
    };
    Ok((entry, Some(event)))
}

/// Pipeline-facing entry point: process one entry and hand the result to
/// the completion callback.
///
/// The callback is invoked exactly once, with either the transformed entry
/// or the error for this file.
pub fn transform<F>(options: &Options, entry: FileEntry, done: F)
where
    F: FnOnce(Result<(FileEntry, Option<BumpEvent>)>),
{
    done(process_entry(options, entry));
}
