//! Changelog rendering and atomic rewrite for the tag action.
//!
//! `CHANGELOG.md` lives at the repository root and accumulates entries
//! newest-first. Each tag operation prepends one entry: a version + date
//! heading, one bullet per change line, and a fenced block with the captured
//! diff. The rewrite goes through a temporary file in the same directory
//! followed by a rename, so an interrupted process leaves either the old or
//! the new document, never a truncated one.

use crate::core::error::Result;
use chrono::Local;
use semver::Version;
use std::fs;
use std::path::Path;

pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Render one changelog entry for `version` dated today.
pub fn render_entry(version: &Version, changes: &[String], diff: &str) -> String {
    let date = Local::now().format("%Y-%m-%d");
    render_entry_dated(version, &date.to_string(), changes, diff)
}

/// Same as [`render_entry`] with an explicit date, kept separate so tests
/// do not depend on the wall clock.
pub fn render_entry_dated(
    version: &Version,
    date: &str,
    changes: &[String],
    diff: &str,
) -> String {
    let mut entry = format!("\n## {version} - {date}\n");
    for change in changes {
        let change = change.trim();
        if !change.is_empty() {
            entry.push_str(&format!("- {change}\n"));
        }
    }
    entry.push_str(&format!("\n### Diff:\n```\n{diff}\n```\n\n"));
    entry
}

/// Split the user's change description on `;` into individual lines.
pub fn split_changes(input: &str) -> Vec<String> {
    input
        .split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Prepend `entry` to the changelog in `repo_root`, atomically.
///
/// A missing changelog is created rather than treated as an error. The
/// pre-existing content is preserved byte-for-byte beneath the new entry.
pub fn prepend_entry(repo_root: &Path, entry: &str) -> Result<()> {
    let changelog_path = repo_root.join(CHANGELOG_FILE);
    let temp_path = repo_root.join("CHANGELOG_TEMP.md");

    let mut document = entry.to_string();
    if changelog_path.exists() {
        document.push_str(&fs::read_to_string(&changelog_path)?);
    } else {
        log::debug!("no {CHANGELOG_FILE} at {}, creating one", repo_root.display());
    }

    fs::write(&temp_path, &document)?;
    fs::rename(&temp_path, &changelog_path)?;
    log::debug!("changelog rewritten at {}", changelog_path.display());
    Ok(())
}
