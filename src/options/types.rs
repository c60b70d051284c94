//! Option types and defaults for taskbump.

use serde::{Deserialize, Serialize};

/// Semantic-version increment category.
///
/// The keyword set is an explicit enumeration; release-type validation is a
/// lookup here rather than a trial increment against the semver library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    /// Increment the major component, reset minor and patch.
    Major,
    /// Increment the minor component, reset patch.
    Minor,
    /// Increment the patch component (default).
    #[default]
    Patch,
    /// Major bump carrying an initial prerelease identifier.
    Premajor,
    /// Minor bump carrying an initial prerelease identifier.
    Preminor,
    /// Patch bump carrying an initial prerelease identifier.
    Prepatch,
    /// Advance the prerelease identifier, or start one from a release.
    Prerelease,
}

impl BumpType {
    /// Parse a bump type from a keyword.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "major" => Some(Self::Major),
            "minor" => Some(Self::Minor),
            "patch" => Some(Self::Patch),
            "premajor" => Some(Self::Premajor),
            "preminor" => Some(Self::Preminor),
            "prepatch" => Some(Self::Prepatch),
            "prerelease" => Some(Self::Prerelease),
            _ => None,
        }
    }
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
            BumpType::Premajor => "premajor",
            BumpType::Preminor => "preminor",
            BumpType::Prepatch => "prepatch",
            BumpType::Prerelease => "prerelease",
        };
        write!(f, "{}", keyword)
    }
}

/// JSON indentation for the re-serialized manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A single tab character per level.
    Tab,
    /// A fixed number of spaces per level, in the range 1..=10.
    Spaces(u8),
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

impl Indent {
    /// The byte sequence written per indentation level.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Indent::Tab => vec![b'\t'],
            Indent::Spaces(width) => vec![b' '; *width as usize],
        }
    }
}

/// Representation used for the rewritten `Major`/`Minor`/`Patch` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionFieldType {
    /// Write the components as JSON numbers (default).
    #[default]
    Number,
    /// Write the components as decimal strings.
    String,
}

/// Validated, fully-defaulted options for one transform invocation.
///
/// Constructed fresh per invocation; there is no shared state across files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Which version component to increment.
    pub release_type: BumpType,

    /// Indentation of the re-serialized JSON.
    pub indent: Indent,

    /// Number or string representation of the version fields.
    pub version_field_type: VersionFieldType,

    /// Suppress per-file log output.
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_type_from_keyword() {
        assert_eq!(BumpType::from_str("patch"), Some(BumpType::Patch));
        assert_eq!(BumpType::from_str("minor"), Some(BumpType::Minor));
        assert_eq!(BumpType::from_str("major"), Some(BumpType::Major));
        assert_eq!(BumpType::from_str("prerelease"), Some(BumpType::Prerelease));
        assert_eq!(BumpType::from_str("invalid"), None);
        assert_eq!(BumpType::from_str("Patch"), None);
    }

    #[test]
    fn bump_type_display_round_trips() {
        for keyword in [
            "major",
            "minor",
            "patch",
            "premajor",
            "preminor",
            "prepatch",
            "prerelease",
        ] {
            let parsed = BumpType::from_str(keyword).unwrap();
            assert_eq!(parsed.to_string(), keyword);
        }
    }

    #[test]
    fn indent_bytes() {
        assert_eq!(Indent::Tab.as_bytes(), b"\t");
        assert_eq!(Indent::Spaces(4).as_bytes(), b"    ");
        assert_eq!(Indent::default().as_bytes(), b"  ");
    }

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.release_type, BumpType::Patch);
        assert_eq!(options.indent, Indent::Spaces(2));
        assert_eq!(options.version_field_type, VersionFieldType::Number);
        assert!(!options.quiet);
    }
}
