//! Add action: present untracked and modified-but-unstaged files, then
//! stage everything, an explicit subset (by index or name), or nothing.
//!
//! Unrecognized entries in a subset are skipped individually with a warning,
//! never fatal. The selection parser is a pure function so the accepted
//! grammar is testable without a terminal.

use crate::core::{
    error::Result,
    git::GitRepo,
    output::{print_info, print_success, print_warning, prompt},
};
use colored::*;
use std::path::PathBuf;

/// A stageable file with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCandidate {
    pub path: PathBuf,
    pub untracked: bool,
}

impl AddCandidate {
    fn status_label(&self) -> &'static str {
        if self.untracked {
            "Untracked"
        } else {
            "Modified (not staged)"
        }
    }
}

/// Outcome of parsing one subset-selection line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub paths: Vec<PathBuf>,
    pub skipped: Vec<String>,
}

/// Map whitespace-separated entries to candidate paths. A digit is a
/// 1-based index into the displayed list; anything else must match a listed
/// path exactly. Unmatched entries land in `skipped`.
pub fn parse_selection(input: &str, candidates: &[AddCandidate]) -> Selection {
    let mut selection = Selection::default();
    for entry in input.split_whitespace() {
        if let Ok(index) = entry.parse::<usize>() {
            if index >= 1 && index <= candidates.len() {
                selection.paths.push(candidates[index - 1].path.clone());
                continue;
            }
            selection.skipped.push(entry.to_string());
            continue;
        }
        match candidates.iter().find(|c| c.path == PathBuf::from(entry)) {
            Some(candidate) => selection.paths.push(candidate.path.clone()),
            None => selection.skipped.push(entry.to_string()),
        }
    }
    let mut seen = std::collections::BTreeSet::new();
    selection.paths.retain(|p| seen.insert(p.clone()));
    selection
}

/// Collect the files the add action can operate on, untracked first.
pub fn collect_candidates(repo: &GitRepo) -> Result<Vec<AddCandidate>> {
    let (_staged, unstaged, untracked) = repo.classify_worktree()?;
    let mut candidates: Vec<AddCandidate> = untracked
        .into_iter()
        .map(|path| AddCandidate {
            path,
            untracked: true,
        })
        .collect();
    candidates.extend(unstaged.into_iter().map(|path| AddCandidate {
        path,
        untracked: false,
    }));
    Ok(candidates)
}

pub fn execute_add(repo: &GitRepo) -> Result<()> {
    let candidates = collect_candidates(repo)?;
    if candidates.is_empty() {
        print_info("No untracked or modified files found.");
        return Ok(());
    }

    println!("{}", "Files ready for staging:".cyan().bold());
    for (i, candidate) in candidates.iter().enumerate() {
        println!(
            "  {}. {} ({})",
            i + 1,
            candidate.path.display().to_string().white(),
            candidate.status_label().bright_black()
        );
    }

    loop {
        let decision = prompt("Would you like to add all files? (yes/no/exit):")?;
        match decision.to_lowercase().as_str() {
            "yes" | "all" => {
                repo.add_all()?;
                print_success("All files added successfully!");
                return Ok(());
            }
            "no" => {
                let input = prompt(
                    "Enter the number or name of each file to add, separated by spaces:",
                )?;
                let selection = parse_selection(&input, &candidates);
                for entry in &selection.skipped {
                    print_warning(&format!(
                        "Entry '{entry}' was not in the list and was skipped."
                    ));
                }
                if selection.paths.is_empty() {
                    print_warning(
                        "No valid files provided. Specify files to add or choose 'yes' to add all.",
                    );
                    continue;
                }
                repo.add_paths(&selection.paths)?;
                print_success(&format!(
                    "Selected files have been added: {}",
                    selection
                        .paths
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
                return Ok(());
            }
            "exit" | "cancel" => {
                print_info("Exiting file addition process.");
                return Ok(());
            }
            _ => print_warning("Invalid input. Please enter 'yes', 'no', or 'exit'."),
        }
    }
}
