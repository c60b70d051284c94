//! Tests for option validation.

use crate::options::{BumpType, Indent, Options, VersionFieldType, validate_options};
use serde_json::{Value, json};

#[test]
fn absent_bag_yields_defaults() {
    assert_eq!(validate_options(None), Options::default());
}

#[test]
fn null_bag_yields_defaults() {
    assert_eq!(validate_options(Some(&Value::Null)), Options::default());
}

#[test]
fn non_object_bag_yields_defaults() {
    assert_eq!(validate_options(Some(&json!("quiet"))), Options::default());
    assert_eq!(validate_options(Some(&json!(42))), Options::default());
    assert_eq!(validate_options(Some(&json!(["type"]))), Options::default());
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(validate_options(Some(&json!({}))), Options::default());
}

#[test]
fn valid_release_types_are_honored() {
    for (keyword, expected) in [
        ("patch", BumpType::Patch),
        ("minor", BumpType::Minor),
        ("major", BumpType::Major),
        ("premajor", BumpType::Premajor),
        ("preminor", BumpType::Preminor),
        ("prepatch", BumpType::Prepatch),
        ("prerelease", BumpType::Prerelease),
    ] {
        let options = validate_options(Some(&json!({ "type": keyword })));
        assert_eq!(options.release_type, expected, "keyword {}", keyword);
    }
}

#[test]
fn invalid_release_type_falls_back_to_patch() {
    for bag in [
        json!({ "type": "invalid" }),
        json!({ "type": "Major" }),
        json!({ "type": 3 }),
        json!({ "type": null }),
        json!({ "type": true }),
    ] {
        let options = validate_options(Some(&bag));
        assert_eq!(options.release_type, BumpType::Patch, "bag {}", bag);
    }
}

#[test]
fn indent_in_range_passes_verbatim() {
    for width in 1..=10u8 {
        let options = validate_options(Some(&json!({ "indent": width })));
        assert_eq!(options.indent, Indent::Spaces(width), "width {}", width);
    }
}

#[test]
fn indent_tab_passes_verbatim() {
    let options = validate_options(Some(&json!({ "indent": "\t" })));
    assert_eq!(options.indent, Indent::Tab);
}

#[test]
fn indent_integral_float_passes() {
    let options = validate_options(Some(&json!({ "indent": 4.0 })));
    assert_eq!(options.indent, Indent::Spaces(4));
}

#[test]
fn malformed_indent_normalizes_to_two() {
    for bag in [
        json!({ "indent": 0 }),
        json!({ "indent": -7 }),
        json!({ "indent": 32 }),
        json!({ "indent": "invalid" }),
        json!({ "indent": "4" }),
        json!({ "indent": 4.5 }),
        json!({ "indent": null }),
        json!({ "indent": true }),
        json!({ "indent": [2] }),
    ] {
        let options = validate_options(Some(&bag));
        assert_eq!(options.indent, Indent::Spaces(2), "bag {}", bag);
    }
}

#[test]
fn version_property_type_requires_exact_string() {
    let options = validate_options(Some(&json!({ "versionPropertyType": "string" })));
    assert_eq!(options.version_field_type, VersionFieldType::String);

    for bag in [
        json!({ "versionPropertyType": "String" }),
        json!({ "versionPropertyType": "STRING" }),
        json!({ "versionPropertyType": "number" }),
        json!({ "versionPropertyType": 1 }),
        json!({ "versionPropertyType": true }),
    ] {
        let options = validate_options(Some(&bag));
        assert_eq!(
            options.version_field_type,
            VersionFieldType::Number,
            "bag {}",
            bag
        );
    }
}

#[test]
fn quiet_requires_literal_true() {
    let options = validate_options(Some(&json!({ "quiet": true })));
    assert!(options.quiet);

    for bag in [
        json!({ "quiet": false }),
        json!({ "quiet": 0 }),
        json!({ "quiet": 1 }),
        json!({ "quiet": "true" }),
        json!({}),
    ] {
        let options = validate_options(Some(&bag));
        assert!(!options.quiet, "bag {}", bag);
    }
}

#[test]
fn fields_are_validated_independently() {
    let bag = json!({
        "type": "minor",
        "indent": 99,
        "versionPropertyType": "string",
        "quiet": "yes"
    });
    let options = validate_options(Some(&bag));

    assert_eq!(options.release_type, BumpType::Minor);
    assert_eq!(options.indent, Indent::Spaces(2));
    assert_eq!(options.version_field_type, VersionFieldType::String);
    assert!(!options.quiet);
}

#[test]
fn unrecognized_keys_are_ignored() {
    let bag = json!({ "type": "major", "tabSize": 8, "verbose": true });
    let options = validate_options(Some(&bag));
    assert_eq!(options.release_type, BumpType::Major);
    assert_eq!(options.indent, Indent::Spaces(2));
}
