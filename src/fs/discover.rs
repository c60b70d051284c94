//! Manifest discovery by glob pattern.

use crate::error::{BumpError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

/// Collect files under `root` whose root-relative path matches any of the
/// given glob patterns.
///
/// Results are sorted for a deterministic processing order.
pub fn discover_manifests(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let matcher = build_matcher(patterns)?;

    let mut found = Vec::new();
    walk(root, root, &matcher, &mut found)?;
    found.sort();
    Ok(found)
}

fn build_matcher(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| BumpError::User(format!("invalid glob pattern '{}': {}", pattern, e)))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| BumpError::User(format!("failed to build glob set: {}", e)))
}

fn walk(root: &Path, dir: &Path, matcher: &GlobSet, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        BumpError::User(format!("failed to read directory '{}': {}", dir.display(), e))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            BumpError::User(format!("failed to read directory '{}': {}", dir.display(), e))
        })?;
        let path = entry.path();
        if path.is_dir() {
            walk(root, &path, matcher, found)?;
        } else if let Ok(relative) = path.strip_prefix(root)
            && matcher.is_match(relative)
        {
            found.push(path);
        }
    }

    Ok(())
}
