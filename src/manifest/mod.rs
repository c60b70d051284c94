//! Task manifest model.
//!
//! Wraps the parsed JSON document and provides version-field access plus
//! indent-aware re-serialization. Fields other than `version` are opaque
//! and round-trip unchanged, in their original order.

mod version;


pub use version::{bump_version, increment};

use crate::options::{Indent, VersionFieldType};
use semver::Version;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

const VERSION_KEY: &str = "version";
const COMPONENT_KEYS: [&str; 3] = ["Major", "Minor", "Patch"];

/// The object representation of one task manifest file.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    root: Value,
}

impl Manifest {
    /// Parse a manifest from raw file bytes.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        Ok(Self {
            root: serde_json::from_slice(bytes)?,
        })
    }

    /// Parse a manifest from text.
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        Ok(Self {
            root: serde_json::from_str(text)?,
        })
    }

    /// Dotted version string from the manifest's version sub-fields.
    ///
    /// Returns `None` when the `version` key is absent or not an object.
    /// Otherwise the three sub-fields are joined with `.`, coerced to text
    /// without validation: an absent sub-field renders as the literal
    /// `undefined`, so the result may not be a valid semantic version.
    /// Validity is the caller's concern.
    pub fn version_string(&self) -> Option<String> {
        let version = self.root.get(VERSION_KEY)?.as_object()?;
        let [major, minor, patch] = COMPONENT_KEYS.map(|key| render_component(version.get(key)));
        Some(format!("{}.{}.{}", major, minor, patch))
    }

    /// Write the three components of `version` into the manifest in place.
    ///
    /// Callers establish that the version object exists (extraction
    /// succeeded) before bumping; without it this is a no-op.
    pub fn apply_version(&mut self, version: &Version, field_type: VersionFieldType) {
        let Some(object) = self
            .root
            .get_mut(VERSION_KEY)
            .and_then(Value::as_object_mut)
        else {
            return;
        };

        let components = [version.major, version.minor, version.patch];
        for (key, component) in COMPONENT_KEYS.into_iter().zip(components) {
            let value = match field_type {
                VersionFieldType::Number => Value::from(component),
                VersionFieldType::String => Value::from(component.to_string()),
            };
            object.insert(key.to_string(), value);
        }
    }

    /// Re-serialize the manifest as UTF-8 JSON with the given indentation.
    ///
    /// Output is structurally identical to the parsed input aside from the
    /// version fields. No trailing newline is appended.
    pub fn to_bytes(&self, indent: &Indent) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let step = indent.as_bytes();
        let formatter = PrettyFormatter::with_indent(&step);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.root.serialize(&mut serializer)?;
        Ok(buf)
    }
}

/// Text form of one version sub-field, as used in the dotted string.
fn render_component(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(other) => other.to_string(),
    }
}
