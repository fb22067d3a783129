//! The guided session loop: Refresh → Display → Prompt → Dispatch → loop.
//!
//! The dispatcher never mutates repository state itself; every side effect
//! happens inside the chosen action's handler. Handler failures are caught
//! here and reported — precondition misses as information, everything else
//! as errors — and the loop always returns to the menu. Only user-selected
//! Exit leaves the loop.

use crate::commands::{
    add::execute_add, commit::execute_commit, pull::execute_pull, push::execute_push,
    status::execute_status, tag::execute_tag,
};
use crate::core::{
    error::Result,
    git::GitRepo,
    menu::MenuChoice,
    output::{print_error, print_info, print_section_header, print_success, prompt,
        prompt_to_continue},
};
use colored::*;

/// Run the interactive loop until the user selects Exit.
pub fn run_session(repo: &GitRepo) -> Result<()> {
    print_title();

    loop {
        execute_status(repo)?;
        print_options();

        let input = prompt("\nEnter the number of your choice:")?;
        let Some(choice) = MenuChoice::parse(&input) else {
            print_error("Invalid choice! Please select a valid option.");
            continue;
        };

        match choice {
            MenuChoice::Refresh => continue,
            MenuChoice::Exit => {
                print_success("Exiting the program. Goodbye!");
                return Ok(());
            }
            action => {
                if let Err(e) = dispatch(repo, action) {
                    if e.is_precondition() {
                        print_info(&e.to_string());
                    } else {
                        print_error(&e.to_string());
                    }
                }
                prompt_to_continue()?;
            }
        }
    }
}

/// Route one menu action to its handler. Branch-dependent actions derive
/// the branch fresh so a checkout between iterations is picked up.
fn dispatch(repo: &GitRepo, choice: MenuChoice) -> Result<()> {
    match choice {
        MenuChoice::Pull => {
            let branch = repo.current_branch()?;
            execute_pull(repo, &branch)
        }
        MenuChoice::Push => {
            let branch = repo.current_branch()?;
            execute_push(repo, &branch)
        }
        MenuChoice::Commit => execute_commit(repo),
        MenuChoice::Add => execute_add(repo),
        MenuChoice::Tag => {
            let state = repo.branch_state()?;
            execute_tag(repo, state.latest_tag).map(|_| ())
        }
        // Refresh and Exit are handled in the loop itself
        MenuChoice::Refresh | MenuChoice::Exit => Ok(()),
    }
}

fn print_title() {
    println!(
        "{} {}",
        "Git Guide".bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black()
    );
    println!("{}", "A guided method to using Git".bright_black());
}

fn print_options() {
    print_section_header("Options");
    for choice in MenuChoice::ALL {
        println!("{}", choice.to_string().white());
    }
}
