//! Atomic file replacement.
//!
//! Rewrites follow the temp-file pattern: write to `.{name}.tmp` in the
//! target's directory, sync, then rename over the target, so a crash never
//! leaves a half-written manifest behind. Source and target must live on
//! the same filesystem for the rename to be atomic.

use crate::error::{BumpError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| BumpError::User(format!("invalid file path '{}'", target.display())))?;
    Ok(parent.join(format!(".{}.tmp", name)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        BumpError::User(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    if let Err(e) = file.write_all(content) {
        let _ = fs::remove_file(path);
        return Err(BumpError::User(format!(
            "failed to write temporary file: {}",
            e
        )));
    }
    if let Err(e) = file.sync_all() {
        let _ = fs::remove_file(path);
        return Err(BumpError::User(format!(
            "failed to sync temporary file to disk: {}",
            e
        )));
    }

    Ok(())
}

#[cfg(unix)]
fn replace(source: &Path, target: &Path) -> Result<()> {
    // rename() replaces an existing destination atomically on POSIX.
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        BumpError::User(format!("failed to replace '{}': {}", target.display(), e))
    })
}

#[cfg(windows)]
fn replace(source: &Path, target: &Path) -> Result<()> {
    // Plain rename fails on Windows when the target exists; drop it first.
    if target.exists()
        && let Err(e) = fs::remove_file(target)
    {
        let _ = fs::remove_file(source);
        return Err(BumpError::User(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        )));
    }
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        BumpError::User(format!("failed to replace '{}': {}", target.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");

        atomic_write(&path, b"{}").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"{}");
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");
        fs::write(&path, b"old").unwrap();

        atomic_write(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");

        atomic_write(&path, b"{}").unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
