//! Total validation of the loose options bag.
//!
//! The bag arrives as arbitrary JSON (a file, or flags lowered into a JSON
//! object). Each recognized key is validated on its own; malformed values
//! fall back to that key's default rather than failing the invocation.

use super::types::{BumpType, Indent, Options, VersionFieldType};
use serde_json::{Map, Value};

/// Produce a complete `Options` from a partial or absent input bag.
///
/// There is no failure path: absent, null, or non-object input yields the
/// all-defaults record.
pub fn validate_options(raw: Option<&Value>) -> Options {
    let bag = raw.and_then(Value::as_object);

    Options {
        release_type: validate_release_type(field(bag, "type")),
        indent: validate_indent(field(bag, "indent")),
        version_field_type: validate_version_property_type(field(bag, "versionPropertyType")),
        quiet: validate_quiet(field(bag, "quiet")),
    }
}

fn field<'a>(bag: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a Value> {
    bag.and_then(|map| map.get(key))
}

/// Valid only when the value is one of the enumerated increment keywords.
fn validate_release_type(value: Option<&Value>) -> BumpType {
    value
        .and_then(Value::as_str)
        .and_then(BumpType::from_str)
        .unwrap_or_default()
}

/// The tab string passes verbatim; integers in 1..=10 pass; everything else
/// (digit strings included) falls back to two spaces.
fn validate_indent(value: Option<&Value>) -> Indent {
    match value {
        Some(Value::String(s)) if s == "\t" => Indent::Tab,
        Some(Value::Number(n)) => match integral(n) {
            Some(width @ 1..=10) => Indent::Spaces(width as u8),
            _ => Indent::default(),
        },
        _ => Indent::default(),
    }
}

/// Non-negative integer value of a JSON number, if it has one.
///
/// Covers numbers that parse as floats with a zero fraction, e.g. `4.0`.
fn integral(n: &serde_json::Number) -> Option<u64> {
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

/// Only the exact string "string" selects the string representation.
fn validate_version_property_type(value: Option<&Value>) -> VersionFieldType {
    match value {
        Some(Value::String(s)) if s == "string" => VersionFieldType::String,
        _ => VersionFieldType::Number,
    }
}

/// Only the literal JSON `true` suppresses logging.
fn validate_quiet(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}
