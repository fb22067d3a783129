//! Pull action: merge remote commits into the local branch, with an
//! up-to-date short-circuit so no merge is attempted when nothing is behind.

use crate::core::{error::Result, git::GitRepo, output::print_success};

pub fn execute_pull(repo: &GitRepo, branch: &str) -> Result<()> {
    repo.fetch_origin()?;

    let behind = repo.behind_commits(branch)?;
    if behind.is_empty() {
        print_success(&format!(
            "The local {branch} branch is already up to date with the remote origin."
        ));
        return Ok(());
    }

    // Merge conflicts surface as a dedicated error variant; local state is
    // left as git leaves it, with no automatic abort.
    repo.pull(branch)?;
    print_success(&format!(
        "Successfully pulled {} commit(s) from the remote origin into {branch}.",
        behind.len()
    ));
    Ok(())
}
