//! Core functionality for the git-guide tool.
//!
//! This module provides the building blocks for the guided loop: the git
//! provider wrapper, the status comparator's value types, semver bumping,
//! changelog handling, the menu table, error handling, and output helpers.

pub mod changelog;
pub mod error;
pub mod git;
pub mod menu;
pub mod output;
pub mod report;
pub mod version;

// === Error handling ===
pub use error::{GitGuideError, Result};

// === Git operations ===
pub use git::GitRepo;

// === Status comparator types ===
pub use report::{BranchState, CommitSummary, ComparisonReport};

// === Version bumping ===
pub use version::{bump, latest_version, parse_tag, BumpKind};

// === Menu table ===
pub use menu::MenuChoice;

// === Output formatting and prompts ===
pub use output::{
    print_error, print_info, print_section_header, print_success, print_warning, prompt,
    prompt_to_continue,
};
