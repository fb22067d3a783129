//! Git repository management and setup utilities
//!
//! Builders for throwaway repositories in various states, including a local
//! bare repository wired up as `origin` so fetch/pull/push scenarios run
//! without any network.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result. The TempDir must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A working repository plus a bare `origin` living in the same TempDir.
pub struct TestRepoWithRemote {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    pub remote_path: PathBuf,
}

impl TestRepoWithRemote {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn run_git(dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git binary available");
    assert!(
        output.status.success(),
        "git {:?} failed in {}: {}",
        args,
        dir.display(),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn configure_user(path: &Path) {
    run_git(path, &["config", "user.name", "Test User"]);
    run_git(path, &["config", "user.email", "test@example.com"]);
    // Merge on pull so divergent histories attempt a merge instead of
    // aborting with "Need to specify how to reconcile".
    run_git(path, &["config", "pull.rebase", "false"]);
}

/// Sets up a fresh git repository on branch `main` with test config.
pub fn setup_test_repo() -> TestRepo {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().to_path_buf();
    run_git(&path, &["init", "-b", "main"]);
    configure_user(&path);
    TestRepo { temp_dir, path }
}

/// Sets up a repository with an initial commit.
pub fn setup_test_repo_with_initial_commit() -> TestRepo {
    let repo = setup_test_repo();
    create_file(&repo.path, "initial.txt", "initial content\n");
    git_add(&repo.path, "initial.txt");
    git_commit(&repo.path, "Initial commit");
    repo
}

/// Sets up a working repository with an initial commit pushed to a local
/// bare `origin`, upstream configured.
pub fn setup_test_repo_with_remote() -> TestRepoWithRemote {
    let temp_dir = TempDir::new().expect("temp dir");
    let remote_path = temp_dir.path().join("remote.git");
    let path = temp_dir.path().join("work");

    fs::create_dir_all(&remote_path).expect("remote dir");
    run_git(&remote_path, &["init", "--bare", "-b", "main"]);

    fs::create_dir_all(&path).expect("work dir");
    run_git(&path, &["init", "-b", "main"]);
    configure_user(&path);

    create_file(&path, "initial.txt", "initial content\n");
    git_add(&path, "initial.txt");
    git_commit(&path, "Initial commit");

    run_git(
        &path,
        &["remote", "add", "origin", remote_path.to_str().unwrap()],
    );
    run_git(&path, &["push", "-u", "origin", "main"]);

    TestRepoWithRemote {
        temp_dir,
        path,
        remote_path,
    }
}

/// Clone the bare remote into a second working copy, for producing commits
/// the first copy is behind on.
pub fn clone_remote(fixture: &TestRepoWithRemote, name: &str) -> PathBuf {
    let clone_path = fixture.temp_dir.path().join(name);
    run_git(
        fixture.temp_dir.path(),
        &[
            "clone",
            fixture.remote_path.to_str().unwrap(),
            clone_path.to_str().unwrap(),
        ],
    );
    configure_user(&clone_path);
    clone_path
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) {
    let full = repo_path.join(filename);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).expect("parent dirs");
    }
    fs::write(full, content).expect("write file");
}

pub fn git_add(repo_path: &Path, filename: &str) {
    run_git(repo_path, &["add", filename]);
}

pub fn git_commit(repo_path: &Path, message: &str) {
    run_git(repo_path, &["commit", "-m", message]);
}

pub fn git_push(repo_path: &Path) {
    run_git(repo_path, &["push", "origin", "main"]);
}

/// Move the local branch back by `n` commits, leaving the remote ahead.
pub fn rewind_local(repo_path: &Path, n: usize) {
    run_git(repo_path, &["reset", "--hard", &format!("HEAD~{n}")]);
}

pub fn head_commit(repo_path: &Path) -> String {
    let output = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(repo_path)
        .output()
        .expect("git rev-parse");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn tag_exists(repo_path: &Path, name: &str) -> bool {
    let output = std::process::Command::new("git")
        .args(["tag", "--list", name])
        .current_dir(repo_path)
        .output()
        .expect("git tag --list");
    !String::from_utf8_lossy(&output.stdout).trim().is_empty()
}
