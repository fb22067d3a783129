//! Binary-level tests for the guided session loop, driven through piped
//! stdin with assert_cmd.

mod common;

use assert_cmd::prelude::*;
use common::*;
use predicates::prelude::*;
use assert_cmd::Command;
use tempfile::TempDir;

fn git_guide() -> Command {
    Command::cargo_bin("git-guide").expect("binary built")
}

#[test]
fn startup_outside_a_repository_is_fatal() {
    let empty_dir = TempDir::new().unwrap();
    git_guide()
        .current_dir(empty_dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid Git repository"));
}

#[test]
fn exit_choice_terminates_successfully() {
    let fixture = setup_test_repo_with_remote();
    git_guide()
        .current_dir(fixture.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye"));
}

#[test]
fn menu_lists_all_actions() {
    let fixture = setup_test_repo_with_remote();
    let assert = git_guide()
        .current_dir(fixture.path())
        .write_stdin("6\n")
        .assert()
        .success();

    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in [
        "0. REFRESH and display current status",
        "1. PULL changes from remote repository",
        "2. PUSH changes to remote repository",
        "3. COMMIT changes to local repository",
        "4. ADD changes/files to staging area",
        "5. TAG the repository",
        "6. Exit the application",
    ] {
        assert!(stdout.contains(line), "missing menu line: {line}");
    }
}

#[test]
fn invalid_choice_reprompts_instead_of_advancing() {
    let fixture = setup_test_repo_with_remote();
    git_guide()
        .current_dir(fixture.path())
        .write_stdin("9\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("Goodbye"));
}

#[test]
fn status_reports_unpushed_commit_with_push_guidance() {
    let fixture = setup_test_repo_with_remote();
    create_file(fixture.path(), "feature.txt", "feature\n");
    git_add(fixture.path(), "feature.txt");
    git_commit(fixture.path(), "Add feature");

    git_guide()
        .current_dir(fixture.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ahead of the remote origin by 1 commit(s)",
        ))
        .stdout(predicate::str::contains("Add feature"))
        .stdout(predicate::str::contains("(2.) PUSHING"));
}

#[test]
fn status_reports_untracked_file_with_add_guidance() {
    let fixture = setup_test_repo_with_remote();
    create_file(fixture.path(), "new.txt", "n\n");

    git_guide()
        .current_dir(fixture.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("New file (untracked): new.txt"))
        .stdout(predicate::str::contains("(4.) ADDING"));
}

#[test]
fn commit_with_nothing_staged_is_an_informational_noop() {
    let fixture = setup_test_repo_with_remote();
    // choice 3 (commit) with a clean index, then enter to continue, then exit
    git_guide()
        .current_dir(fixture.path())
        .write_stdin("3\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No staged changes to commit."));
}

#[test]
fn commit_reprompts_on_empty_message_then_commits() {
    let fixture = setup_test_repo_with_remote();
    create_file(fixture.path(), "staged.txt", "s\n");
    git_add(fixture.path(), "staged.txt");
    let head_before = head_commit(fixture.path());

    // choice 3, empty message (rejected), real message, enter, exit
    git_guide()
        .current_dir(fixture.path())
        .write_stdin("3\n\nAdd staged file\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commit message can't be empty!"))
        .stdout(predicate::str::contains(
            "Staged changes have been committed.",
        ));

    assert_ne!(head_commit(fixture.path()), head_before);
}

#[test]
fn commit_exit_sentinel_leaves_the_index_untouched() {
    let fixture = setup_test_repo_with_remote();
    create_file(fixture.path(), "staged.txt", "s\n");
    git_add(fixture.path(), "staged.txt");
    let head_before = head_commit(fixture.path());

    git_guide()
        .current_dir(fixture.path())
        .write_stdin("3\nexit\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting commit process."));

    assert_eq!(head_commit(fixture.path()), head_before);
}

#[test]
fn add_dialogue_stages_the_named_file_only() {
    let fixture = setup_test_repo_with_remote();
    create_file(fixture.path(), "a.txt", "a\n");
    create_file(fixture.path(), "b.txt", "b\n");

    // choice 4, decline "all", pick a.txt by name, enter, exit; the refreshed
    // status after the action shows a.txt staged and b.txt still untracked
    git_guide()
        .current_dir(fixture.path())
        .write_stdin("4\nno\na.txt\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Selected files have been added: a.txt",
        ))
        .stdout(predicate::str::contains("Modified (staged): a.txt"))
        .stdout(predicate::str::contains("New file (untracked): b.txt"));
}

#[test]
fn add_dialogue_rejects_an_unrecognized_decision() {
    let fixture = setup_test_repo_with_remote();
    create_file(fixture.path(), "a.txt", "a\n");

    git_guide()
        .current_dir(fixture.path())
        .write_stdin("4\nmaybe\nexit\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please enter 'yes', 'no', or 'exit'.",
        ))
        .stdout(predicate::str::contains("Exiting file addition process."));
}

#[test]
fn comparator_failure_without_remote_keeps_session_alive() {
    let fixture = setup_test_repo_with_initial_commit();
    git_guide()
        .current_dir(fixture.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error comparing with the origin"))
        .stdout(predicate::str::contains("Goodbye"));
}
