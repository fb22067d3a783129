//! Value types produced by a status refresh.
//!
//! Everything here is recomputed wholesale on each refresh and never cached
//! across actions that mutate history.
//!
//! # Public API
//! - [`BranchState`]: active branch name plus the latest semver tag
//! - [`CommitSummary`]: one-line view of a commit (short hash, author, summary)
//! - [`ComparisonReport`]: ahead/behind commits and working-tree classification

use semver::Version;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchState {
    pub branch: String,
    /// `None` when the repository has no semver-parseable tags yet.
    pub latest_tag: Option<Version>,
}

impl BranchState {
    /// Display form of the latest tag, with the no-tags sentinel.
    pub fn latest_tag_label(&self) -> String {
        match &self.latest_tag {
            Some(v) => v.to_string(),
            None => "No tags available".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// First 7 hex characters of the commit id.
    pub short_hash: String,
    pub author: String,
    pub summary: String,
}

/// Snapshot comparing the local branch against its remote counterpart,
/// plus the working-tree classification.
///
/// Invariant: a path appears in at most one of `staged` / `unstaged` /
/// `untracked` for a given snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Commits on origin that the local branch does not have, log order.
    pub behind: Vec<CommitSummary>,
    /// Commits on the local branch not yet on origin, log order.
    pub ahead: Vec<CommitSummary>,
    /// Union of paths touched by the behind commits.
    pub incoming_files: BTreeSet<PathBuf>,
    pub staged: BTreeSet<PathBuf>,
    pub unstaged: BTreeSet<PathBuf>,
    pub untracked: BTreeSet<PathBuf>,
}

impl ComparisonReport {
    /// True when local and remote point at the same history.
    pub fn in_sync(&self) -> bool {
        self.behind.is_empty() && self.ahead.is_empty()
    }

    /// True when the working tree has nothing staged, modified, or untracked.
    pub fn tree_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty() && self.untracked.is_empty()
    }

    /// Candidate paths for the add action: unstaged and untracked files.
    pub fn addable_files(&self) -> Vec<PathBuf> {
        self.untracked
            .iter()
            .chain(self.unstaged.iter())
            .cloned()
            .collect()
    }
}
