//! Exit code constants for the taskbump CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Parse failure (content is not valid JSON / no version object)
//! - 3: Invalid version specification
//! - 4: Update failure (version computation or re-serialization)
//! - 5: Streaming input rejected

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable file, or invalid options file.
pub const USER_ERROR: i32 = 1;

/// Parse failure: file content is not parseable as a task manifest.
pub const PARSE_FAILURE: i32 = 2;

/// Invalid version: the manifest's version fields do not form a valid
/// semantic version.
pub const VERSION_FAILURE: i32 = 3;

/// Update failure: version computation or re-serialization failed.
pub const UPDATE_FAILURE: i32 = 4;

/// Streaming failure: file content was delivered incrementally.
pub const STREAMING_FAILURE: i32 = 5;
