//! Implementation of the `taskbump check` command.
//!
//! Parses each manifest and validates its version specification without
//! modifying anything. All files are reported; the exit code reflects the
//! first failure.

use super::collect_files;
use crate::cli::CheckArgs;
use crate::error::{BumpError, Result};
use crate::manifest::Manifest;
use semver::Version;
use std::path::Path;

/// Execute the `check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let files = collect_files(&args.files, &args.globs, &args.root)?;

    let mut first_error: Option<BumpError> = None;
    for path in files {
        match check_file(&path) {
            Ok(version) => println!("{}: {}", path.display(), version),
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn check_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| BumpError::User(format!("failed to read '{}': {}", path.display(), e)))?;

    let manifest = Manifest::from_slice(&bytes).map_err(|_| BumpError::Parse {
        path: path.to_path_buf(),
    })?;
    let current = manifest.version_string().ok_or_else(|| BumpError::Parse {
        path: path.to_path_buf(),
    })?;

    Version::parse(&current).map_err(|_| BumpError::InvalidVersion {
        version: current.clone(),
    })?;
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_valid_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");
        std::fs::write(
            &path,
            r#"{"version": {"Major": 0, "Minor": 8, "Patch": 2}}"#,
        )
        .unwrap();

        assert_eq!(check_file(&path).unwrap(), "0.8.2");
    }

    #[test]
    fn rejects_invalid_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");
        std::fs::write(
            &path,
            r#"{"version": {"Major": "abc", "Minor": 8, "Patch": 2}}"#,
        )
        .unwrap();

        let err = check_file(&path).unwrap_err();
        assert!(matches!(err, BumpError::InvalidVersion { .. }));
        assert!(err.to_string().contains("abc.8.2"));
    }

    #[test]
    fn rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = check_file(&path).unwrap_err();
        assert!(matches!(err, BumpError::Parse { .. }));
    }

    #[test]
    fn does_not_modify_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");
        let content = r#"{"version": {"Major": 0, "Minor": 8, "Patch": 2}}"#;
        std::fs::write(&path, content).unwrap();

        check_file(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }
}
