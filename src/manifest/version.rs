//! Version increment rules.
//!
//! The semver crate is the authority for parsing, validity, and component
//! access; the increment itself follows the enumerated keyword semantics
//! over `semver::Version`.

use super::Manifest;
use crate::options::{BumpType, Options};
use semver::{Prerelease, Version};

/// Compute the next version for the given bump type.
pub fn increment(current: &Version, bump: BumpType) -> Result<Version, semver::Error> {
    let next = match bump {
        BumpType::Major => {
            // A prerelease of x.0.0 promotes to the release itself.
            if !current.pre.is_empty() && current.minor == 0 && current.patch == 0 {
                release(current.major, 0, 0)
            } else {
                release(current.major + 1, 0, 0)
            }
        }
        BumpType::Minor => {
            if !current.pre.is_empty() && current.patch == 0 {
                release(current.major, current.minor, 0)
            } else {
                release(current.major, current.minor + 1, 0)
            }
        }
        BumpType::Patch => {
            if !current.pre.is_empty() {
                release(current.major, current.minor, current.patch)
            } else {
                release(current.major, current.minor, current.patch + 1)
            }
        }
        BumpType::Premajor => prerelease_zero(release(current.major + 1, 0, 0))?,
        BumpType::Preminor => prerelease_zero(release(current.major, current.minor + 1, 0))?,
        BumpType::Prepatch => {
            prerelease_zero(release(current.major, current.minor, current.patch + 1))?
        }
        BumpType::Prerelease => {
            if current.pre.is_empty() {
                prerelease_zero(release(current.major, current.minor, current.patch + 1))?
            } else {
                let mut next = release(current.major, current.minor, current.patch);
                next.pre = advance_prerelease(current.pre.as_str())?;
                next
            }
        }
    };

    Ok(next)
}

fn release(major: u64, minor: u64, patch: u64) -> Version {
    Version::new(major, minor, patch)
}

fn prerelease_zero(mut version: Version) -> Result<Version, semver::Error> {
    version.pre = Prerelease::new("0")?;
    Ok(version)
}

/// Increment the rightmost numeric prerelease identifier; append `0` when
/// there is none.
fn advance_prerelease(pre: &str) -> Result<Prerelease, semver::Error> {
    let mut identifiers: Vec<String> = pre.split('.').map(str::to_string).collect();

    let mut advanced = false;
    for identifier in identifiers.iter_mut().rev() {
        if let Ok(n) = identifier.parse::<u64>() {
            *identifier = (n + 1).to_string();
            advanced = true;
            break;
        }
    }
    if !advanced {
        identifiers.push("0".to_string());
    }

    Prerelease::new(&identifiers.join("."))
}

/// Bump the manifest's version in place and return the new version.
///
/// Preconditions: `current` was parsed from this manifest's version fields
/// and `options` has been validated. Failures inside the semver calls
/// propagate to the caller; no recovery happens here.
pub fn bump_version(
    manifest: &mut Manifest,
    current: &Version,
    options: &Options,
) -> Result<Version, semver::Error> {
    let bumped = increment(current, options.release_type)?;
    manifest.apply_version(&bumped, options.version_field_type);
    Ok(bumped)
}
