//! Tag action: bump the version, tag the repository, rewrite the changelog,
//! commit the rewrite, and publish branch plus tags.
//!
//! The interactive front end ([`execute_tag`]) gathers the bump choice and
//! change lines; the pipeline itself ([`perform_tag`]) is non-interactive so
//! it can be exercised directly in tests.
//!
//! Publishing is best-effort by design: once the tag and changelog commit
//! exist locally they are never rolled back, even when the push fails.

use crate::core::{
    changelog,
    error::{GitGuideError, Result},
    git::GitRepo,
    output::{print_error, print_info, print_success, prompt},
    version::{bump, BumpKind},
};
use colored::*;
use semver::Version;

/// What the tag action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    Tagged { version: Version, pushed: bool },
    Cancelled,
}

pub fn execute_tag(repo: &GitRepo, latest_tag: Option<Version>) -> Result<TagOutcome> {
    if repo.is_dirty()? {
        return Err(GitGuideError::DirtyWorkTree);
    }

    let current = latest_tag.unwrap_or_else(|| Version::new(0, 0, 0));
    println!(
        "{} {}",
        "Current version:".white(),
        current.to_string().green()
    );
    println!("  1. Increment major version");
    println!("  2. Increment minor version");
    println!("  3. Increment patch version");
    println!("  4. Exit without tagging");

    let choice = prompt("Enter the number of your choice:")?;
    let kind = match choice.as_str() {
        "1" => BumpKind::Major,
        "2" => BumpKind::Minor,
        "3" => BumpKind::Patch,
        "4" => {
            print_info("Exiting without tagging.");
            return Ok(TagOutcome::Cancelled);
        }
        _ => {
            // Invalid input aborts without creating a tag; no partial state.
            print_error("Invalid choice. Please enter a number between 1 and 4.");
            return Ok(TagOutcome::Cancelled);
        }
    };

    let new_version = bump(&current, kind);
    print_info(&format!(
        "Bumping {} version: {current} -> {new_version}",
        kind.label()
    ));

    let changes_input =
        prompt("Enter the changes included in this version (separate multiple changes with ';'):")?;
    let changes = changelog::split_changes(&changes_input);

    perform_tag(repo, &new_version, &changes)
}

/// Run the tag pipeline for an already-decided version.
///
/// Steps: capture the diff against the previous commit, create the tag,
/// prepend the changelog entry atomically, commit the rewrite when it
/// dirtied the tree, then push branch and tags. Push failure is reported
/// and reflected in the outcome, never undone locally.
pub fn perform_tag(repo: &GitRepo, version: &Version, changes: &[String]) -> Result<TagOutcome> {
    let diff = repo.diff_against_parent()?;

    repo.create_tag(&version.to_string())?;
    log::debug!("created tag {version}");

    let entry = changelog::render_entry(version, changes, &diff);
    changelog::prepend_entry(repo.workdir()?, &entry)?;
    print_success(&format!(
        "CHANGELOG.md has been updated with version {version}."
    ));

    if repo.is_dirty()? {
        repo.add_all()?;
        repo.commit(&format!("Update changelog for version {version}"))?;
    }

    let branch = repo.current_branch()?;
    let pushed = match repo.push_branch(&branch).and_then(|_| repo.push_tags()) {
        Ok(()) => {
            print_success(&format!(
                "Tag {version} has been pushed to the remote repository."
            ));
            true
        }
        Err(e) => {
            // Local tag and changelog commit stand regardless.
            print_error(&format!("Error pushing tag to remote: {e}"));
            false
        }
    };

    Ok(TagOutcome::Tagged {
        version: version.clone(),
        pushed,
    })
}
