//! Refresh action: derive branch state, run the status comparator, and
//! render the report with prioritized guidance.
//!
//! Guidance is emitted only for non-empty categories, in fixed order
//! behind → ahead → staged → unstaged → untracked, and every guidance line
//! references the menu key of the action that resolves it. [`MenuChoice`]
//! is the source of those keys, so renumbering the menu updates the
//! guidance automatically.

use crate::core::{
    error::Result,
    git::GitRepo,
    menu::MenuChoice,
    output::{print_error, print_section_header},
    report::{BranchState, ComparisonReport},
};
use colored::*;

/// Display repository information and the comparison against origin.
///
/// Comparator failures (network unreachable, no remote branch) are reported
/// and swallowed so the session continues with absent data.
pub fn execute_status(repo: &GitRepo) -> Result<()> {
    let state = match repo.branch_state() {
        Ok(state) => state,
        Err(e) => {
            print_error(&e.to_string());
            return Ok(());
        }
    };

    print_repository_info(repo, &state)?;

    print_section_header("Differences between local and origin");
    match repo.compare_with_origin(&state.branch) {
        Ok(report) => print_report(&state.branch, &report),
        Err(e) => print_error(&format!("Error comparing with the origin: {e}")),
    }

    Ok(())
}

fn print_repository_info(repo: &GitRepo, state: &BranchState) -> Result<()> {
    print_section_header("Repository Information");
    println!(
        "{} {} {} {} {} {}",
        "You are working in".white(),
        repo.workdir()?.display().to_string().green(),
        "on the".white(),
        state.branch.green(),
        "branch. The latest tag (version) is".white(),
        state.latest_tag_label().green(),
    );
    Ok(())
}

fn print_report(branch: &str, report: &ComparisonReport) {
    if report.in_sync() && report.tree_clean() {
        println!(
            "{}",
            "Local branch and working tree are in sync with the origin.".green()
        );
        return;
    }

    if !report.behind.is_empty() {
        println!(
            "\n{}",
            format!(
                "Local branch {branch} is behind the remote origin by {} commit(s).",
                report.behind.len()
            )
            .green()
            .underline()
        );
        println!("{}", "Files on remote to be pulled:".green());
        for file in &report.incoming_files {
            println!("  - {}", file.display().to_string().white());
        }
        guidance(
            MenuChoice::Pull,
            "PULLING",
            &[
                "Files exist on the remote repository that you do not have locally.",
                "Pulling will update your local copy to match the remote one.",
            ],
        );
    }

    if !report.ahead.is_empty() {
        println!(
            "\n{}",
            format!(
                "Local branch {branch} is ahead of the remote origin by {} commit(s).",
                report.ahead.len()
            )
            .green()
            .underline()
        );
        println!("{}", "Commits waiting to be pushed:".green());
        for commit in &report.ahead {
            println!(
                "  {} - {}: {}",
                commit.short_hash.white(),
                commit.author.white(),
                commit.summary.white()
            );
        }
        guidance(
            MenuChoice::Push,
            "PUSHING",
            &[
                "Commits exist locally that do not exist on the remote.",
                "Pushing will update the remote repository to match the local one.",
            ],
        );
    }

    if !report.staged.is_empty() {
        println!("\n{}", "There are uncommitted changes:".green().underline());
        for file in &report.staged {
            println!("  Modified (staged): {}", file.display().to_string().white());
        }
        guidance(
            MenuChoice::Commit,
            "COMMITTING",
            &[
                "Files that have been marked for inclusion in the next commit.",
                "Once committed, the changes are ready to be pushed to the origin.",
            ],
        );
    }

    if !report.unstaged.is_empty() {
        println!(
            "\n{}",
            "There are changes to existing files which aren't yet added to staging:"
                .green()
                .underline()
        );
        for file in &report.unstaged {
            println!(
                "  Modified (not staged): {}",
                file.display().to_string().white()
            );
        }
        guidance(
            MenuChoice::Add,
            "ADDING",
            &[
                "Existing files changed since the last commit, but not yet staged.",
                "Only add files that are ready to be staged and then committed.",
            ],
        );
    }

    if !report.untracked.is_empty() {
        println!(
            "\n{}",
            "There are new (untracked) files which aren't yet added to staging:"
                .green()
                .underline()
        );
        for file in &report.untracked {
            println!(
                "  New file (untracked): {}",
                file.display().to_string().white()
            );
        }
        guidance(
            MenuChoice::Add,
            "ADDING",
            &[
                "New files Git has noticed but which are not yet staged for a commit.",
                "Once added, the files will be staged, ready for you to commit them.",
            ],
        );
    }
}

fn guidance(choice: MenuChoice, verb: &str, notes: &[&str]) {
    println!(
        "{} {} {}",
        "Guidance: Consider".bright_black(),
        format!("({}.) {verb}", choice.key()).yellow(),
        "to resolve this.".bright_black()
    );
    for note in notes {
        println!("{}", format!(">    {note}").bright_black());
    }
}
