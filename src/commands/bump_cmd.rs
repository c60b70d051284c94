//! Implementation of the `taskbump bump` command.
//!
//! Lowers the options file and flags into one loose JSON bag, validates it,
//! then runs every input file through the transform and rewrites it
//! atomically. Processing is sequential; the first failing file stops the
//! run with that file's error kind.

use super::collect_files;
use crate::cli::BumpArgs;
use crate::error::{BumpError, Result};
use crate::fs::atomic_write;
use crate::options::validate_options;
use crate::transform::{FileContents, FileEntry, process_entry};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::Path;

/// Execute the `bump` command.
pub fn cmd_bump(args: BumpArgs) -> Result<()> {
    let raw = build_raw_options(&args)?;
    let options = validate_options(Some(&raw));
    let files = collect_files(&args.files, &args.globs, &args.root)?;

    for path in files {
        let bytes = std::fs::read(&path)
            .map_err(|e| BumpError::User(format!("failed to read '{}': {}", path.display(), e)))?;

        let (result, event) = process_entry(&options, FileEntry::buffer(path, bytes))?;
        let FileContents::Buffer(output) = &result.contents else {
            continue;
        };

        if args.dry_run {
            let mut stdout = std::io::stdout();
            stdout
                .write_all(output)
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(|e| BumpError::User(format!("failed to write to stdout: {}", e)))?;
        } else {
            atomic_write(&result.path, output)?;
        }

        if let Some(event) = event
            && !options.quiet
        {
            if args.json {
                println!("{}", event.to_ndjson_line()?);
            } else {
                println!("{}", event);
            }
        }
    }

    Ok(())
}

/// Lower the options file and flags into one loose JSON bag.
///
/// Flags take precedence over the file. The bag goes through the same
/// total validation as any other input, so malformed values fall back to
/// their defaults instead of failing the run.
fn build_raw_options(args: &BumpArgs) -> Result<Value> {
    let mut bag: Map<String, Value> = match &args.options {
        Some(path) => read_options_file(path)?,
        None => Map::new(),
    };

    if let Some(release_type) = &args.release_type {
        bag.insert("type".to_string(), Value::from(release_type.clone()));
    }
    if let Some(indent) = &args.indent {
        bag.insert("indent".to_string(), indent_flag_value(indent));
    }
    if let Some(field_type) = &args.version_property_type {
        bag.insert(
            "versionPropertyType".to_string(),
            Value::from(field_type.clone()),
        );
    }
    if args.quiet {
        bag.insert("quiet".to_string(), Value::Bool(true));
    }

    Ok(Value::Object(bag))
}

fn read_options_file(path: &Path) -> Result<Map<String, Value>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        BumpError::User(format!(
            "failed to read options file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|e| {
        BumpError::User(format!(
            "options file '{}' is not valid JSON: {}",
            path.display(),
            e
        ))
    })?;
    Ok(value.as_object().cloned().unwrap_or_default())
}

/// The flag arrives as text: "tab" (or a literal tab) selects tab
/// indentation, numeric text becomes a JSON number, anything else passes
/// through for the validator to default.
fn indent_flag_value(flag: &str) -> Value {
    if flag == "tab" || flag == "\t" {
        return Value::from("\t");
    }
    if let Ok(width) = flag.parse::<i64>() {
        return Value::from(width);
    }
    Value::from(flag)
}
