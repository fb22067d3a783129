//! Commit action: require a non-empty staged set, prompt for a single-line
//! message (re-prompting on empty, aborting on the `exit` sentinel), then
//! commit through the provider.

use crate::core::{
    error::{GitGuideError, Result},
    git::GitRepo,
    output::{print_info, print_success, print_warning, prompt},
};
use colored::*;

/// Non-interactive core: commit the staged set with `message`.
/// Fails with [`GitGuideError::NothingStaged`] when the index is clean.
pub fn commit_staged(repo: &GitRepo, message: &str) -> Result<()> {
    let (staged, _unstaged, _untracked) = repo.classify_worktree()?;
    if staged.is_empty() {
        return Err(GitGuideError::NothingStaged);
    }
    repo.commit(message)
}

pub fn execute_commit(repo: &GitRepo) -> Result<()> {
    let (staged, _unstaged, _untracked) = repo.classify_worktree()?;
    if staged.is_empty() {
        // Informational no-op, not an error: nothing to commit means no
        // message prompt at all.
        print_info("No staged changes to commit.");
        return Ok(());
    }

    println!("{}", "Staged files:".cyan().bold());
    for file in &staged {
        println!("  {}", file.display().to_string().white());
    }

    loop {
        let message = prompt("Enter a single-line commit message (or 'exit' to quit):")?;
        if message.eq_ignore_ascii_case("exit") {
            print_info("Exiting commit process.");
            return Ok(());
        }
        if message.is_empty() {
            print_warning("Commit message can't be empty!");
            continue;
        }
        commit_staged(repo, &message)?;
        print_success("Staged changes have been committed.");
        return Ok(());
    }
}
