//! Transform options for taskbump.
//!
//! This module defines the validated `Options` record and the total
//! validation that produces one from a loosely-typed JSON options bag.
//! Validation never fails: every input, however malformed, yields a
//! fully-defaulted valid `Options`.

mod types;
mod validate;

#[cfg(test)]
mod tests;

// Re-export public API
pub use types::{BumpType, Indent, Options, VersionFieldType};
pub use validate::validate_options;
