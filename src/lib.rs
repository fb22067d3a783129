//! Git Guide - an interactive, menu-driven assistant for everyday Git use.
//!
//! This library provides the core functionality for git-guide: the status
//! comparator (ahead/behind ranges plus working-tree classification), the
//! guided action dispatcher, and the tag-with-changelog workflow. It wraps
//! an installed Git (the `git2` library for queries, the `git` binary for
//! mutations) and narrates repository state with guidance text.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Git repository operations and the status comparator
//! - Comparison report and branch state value types
//! - Semantic version bumping and changelog handling
//! - The menu action table, error handling, and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    bump,
    latest_version,
    parse_tag,

    print_error,
    print_info,
    print_section_header,
    print_success,
    print_warning,

    BranchState,
    // Version bumping
    BumpKind,
    CommitSummary,
    // Status comparator types
    ComparisonReport,
    // Error handling
    GitGuideError,
    // Git operations
    GitRepo,

    // Menu table
    MenuChoice,
    Result,
};
