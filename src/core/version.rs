//! Semantic version bumping for the tag action.
//!
//! Versions come from tag names parsed with the `semver` crate; when a
//! repository has no tags yet the baseline is 0.0.0.

use crate::core::error::{GitGuideError, Result};
use semver::Version;

/// Which component of the version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    pub fn label(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

/// Pure bump function: major resets minor and patch, minor resets patch.
pub fn bump(version: &Version, kind: BumpKind) -> Version {
    match kind {
        BumpKind::Major => Version::new(version.major + 1, 0, 0),
        BumpKind::Minor => Version::new(version.major, version.minor + 1, 0),
        BumpKind::Patch => Version::new(version.major, version.minor, version.patch + 1),
    }
}

/// Parse a tag name as a semantic version.
///
/// Tags are created without a "v" prefix, but one is tolerated on read so a
/// hand-made "v1.2.3" does not wedge tag enumeration.
pub fn parse_tag(tag: &str) -> Result<Version> {
    let trimmed = tag.strip_prefix('v').unwrap_or(tag);
    Version::parse(trimmed).map_err(|e| GitGuideError::invalid_version_tag(tag, e))
}

/// Pick the highest semantic version out of a list of tag names.
///
/// Non-semver tag names are skipped rather than treated as errors; returns
/// `None` when nothing parseable exists.
pub fn latest_version(tags: &[String]) -> Option<Version> {
    tags.iter().filter_map(|t| parse_tag(t).ok()).max()
}
