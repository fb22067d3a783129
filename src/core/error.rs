//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitGuideError`] which covers every failure mode of
//! git-guide. It uses `thiserror` for ergonomic error definitions and keeps
//! a small set of recognized provider failures (merge conflict, rejected
//! push) as dedicated variants so handlers can pick a more specific
//! guidance message.
//!
//! # Public API
//! - [`GitGuideError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitGuideError>`
//!
//! # Error Categories
//! - **Startup**: repository discovery failure (the only fatal error)
//! - **Provider**: git2 library errors and `git` subprocess failures
//! - **Recognized provider failures**: merge conflict, rejected push
//! - **Preconditions**: dirty tree when tagging, nothing staged to commit

use thiserror::Error;

/// Domain-specific error types for git-guide
#[derive(Error, Debug)]
pub enum GitGuideError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("HEAD is not on a branch (detached or unborn)")]
    NoActiveBranch,

    #[error("No remote-tracking branch found for '{branch}' on origin")]
    NoRemoteBranch { branch: String },

    // Subprocess errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git {action} failed: {details}")]
    CommandFailed { action: String, details: String },

    // Recognized provider failures, matched by substring on stderr
    #[error("Merge conflict detected. Resolve the conflicts manually, then commit the result")]
    MergeConflict { details: String },

    #[error("Push was rejected; the remote has diverged. Pull first, then push again")]
    PushRejected { details: String },

    // Precondition misses (reported as information, never fatal)
    #[error("Uncommitted changes detected. Commit your changes before tagging")]
    DirtyWorkTree,

    #[error("No staged changes to commit")]
    NothingStaged,

    // Version handling
    #[error("Tag '{tag}' is not a semantic version: {source}")]
    InvalidVersionTag { tag: String, source: semver::Error },
}

/// Convenience type alias for Results using GitGuideError
pub type Result<T> = std::result::Result<T, GitGuideError>;

impl GitGuideError {
    /// Build a subprocess failure, classifying recognized substrings into
    /// the dedicated conflict/rejection variants.
    ///
    /// `output` must carry both of the command's streams: git reports merge
    /// conflicts on stdout ("fix conflicts and then commit the result")
    /// while rejections land on stderr, so neither stream alone is enough.
    pub fn from_git_output(action: impl Into<String>, output: impl Into<String>) -> Self {
        let details = output.into();
        if details.contains("fix conflicts") || details.contains("Merge conflict") {
            return Self::MergeConflict { details };
        }
        if details.contains("rejected") {
            return Self::PushRejected { details };
        }
        Self::CommandFailed {
            action: action.into(),
            details,
        }
    }

    /// Create an invalid version tag error
    pub fn invalid_version_tag(tag: impl Into<String>, source: semver::Error) -> Self {
        Self::InvalidVersionTag {
            tag: tag.into(),
            source,
        }
    }

    /// True for errors that mean "nothing to do here", not "something broke"
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::DirtyWorkTree | Self::NothingStaged)
    }
}
