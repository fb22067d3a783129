//! Push action: publish local commits, with a nothing-to-push short-circuit.
//! A rejected push surfaces as a dedicated error advising a pull first; no
//! automatic retry.

use crate::core::{error::Result, git::GitRepo, output::print_success};

pub fn execute_push(repo: &GitRepo, branch: &str) -> Result<()> {
    let ahead = repo.ahead_commits(branch)?;
    if ahead.is_empty() {
        print_success("No unpushed commits to push to the origin.");
        return Ok(());
    }

    repo.push_branch(branch)?;
    print_success(&format!(
        "{} unpushed commit(s) have been pushed to the origin.",
        ahead.len()
    ));
    Ok(())
}
