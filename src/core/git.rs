//! Git repository operations behind the [`GitRepo`] wrapper.
//!
//! This module is the only place that talks to the version-control provider.
//! Queries (branch, tags, revision ranges, working-tree status) go through
//! the `git2` library; mutations (fetch, pull, push, add, commit, tag) shell
//! out to the installed `git` binary so hooks, credential helpers, and merge
//! machinery behave exactly as they do on the command line.
//!
//! # Public API
//! - [`GitRepo`]: Main interface for repository operations
//!
//! # Key Features
//! - **Status comparator**: [`GitRepo::compare_with_origin`] builds the full
//!   [`ComparisonReport`] (ahead/behind ranges, incoming files, working-tree
//!   classification) in one call
//! - **Typed results**: operations return structured data, never raw output
//! - **Recognized failures**: pull/push stderr is classified into dedicated
//!   merge-conflict / push-rejected errors

use crate::core::{
    error::{GitGuideError, Result},
    report::{BranchState, CommitSummary, ComparisonReport},
    version,
};
use git2::{Oid, Repository, StatusOptions};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a repository at `path`, searching parent directories.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| GitGuideError::NotInGitRepo)?;
        Ok(GitRepo { repo })
    }

    /// Working-tree root. Bare repositories are not supported.
    pub fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or(GitGuideError::NotInGitRepo)
    }

    /// Run a `git` subcommand in the working directory, returning stdout.
    /// Non-zero exit is classified via the stderr text.
    fn run_git(&self, action: &str, args: &[&str]) -> Result<String> {
        let workdir = self.workdir()?;
        log::debug!("running git {action}: git {}", args.join(" "));

        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(workdir)
            .output()?;

        if !output.status.success() {
            // Classify on both streams: a failed merge reports "fix
            // conflicts" on stdout, while stderr only carries fetch noise.
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let mut combined = stderr.trim().to_string();
            if !stdout.trim().is_empty() {
                if !combined.is_empty() {
                    combined.push('\n');
                }
                combined.push_str(stdout.trim());
            }
            log::debug!("git {action} failed: {combined}");
            return Err(GitGuideError::from_git_output(action, combined));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    // --- branch and tag metadata ---

    /// Name of the active branch. Detached or unborn HEAD is an error the
    /// caller turns into display text; it never crashes the loop.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head().map_err(|_| GitGuideError::NoActiveBranch)?;
        if !head.is_branch() {
            return Err(GitGuideError::NoActiveBranch);
        }
        head.shorthand()
            .map(str::to_string)
            .ok_or(GitGuideError::NoActiveBranch)
    }

    pub fn tag_names(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;
        Ok(tags.iter().flatten().map(str::to_string).collect())
    }

    /// Branch name plus the highest semver tag, derived fresh.
    pub fn branch_state(&self) -> Result<BranchState> {
        let branch = self.current_branch()?;
        let latest_tag = version::latest_version(&self.tag_names()?);
        Ok(BranchState { branch, latest_tag })
    }

    // --- status comparator ---

    /// Compare the local branch against `origin/<branch>` and classify the
    /// working tree. Always a complete report or an error, never partial.
    pub fn compare_with_origin(&self, branch: &str) -> Result<ComparisonReport> {
        self.fetch_origin()?;

        let local = self.resolve_oid(branch)?;
        let remote = self
            .resolve_oid(&format!("origin/{branch}"))
            .map_err(|_| GitGuideError::NoRemoteBranch {
                branch: branch.to_string(),
            })?;

        let behind_oids = self.range_oids(remote, local)?;
        let ahead_oids = self.range_oids(local, remote)?;

        let behind = self.summarize(&behind_oids)?;
        let ahead = self.summarize(&ahead_oids)?;
        let incoming_files = self.touched_paths(&behind_oids)?;
        let (staged, unstaged, untracked) = self.classify_worktree()?;

        Ok(ComparisonReport {
            behind,
            ahead,
            incoming_files,
            staged,
            unstaged,
            untracked,
        })
    }

    /// Commits on `origin/<branch>` that the local branch does not have.
    /// Assumes remote-tracking metadata is current (call after a fetch).
    pub fn behind_commits(&self, branch: &str) -> Result<Vec<CommitSummary>> {
        let local = self.resolve_oid(branch)?;
        let remote = self
            .resolve_oid(&format!("origin/{branch}"))
            .map_err(|_| GitGuideError::NoRemoteBranch {
                branch: branch.to_string(),
            })?;
        let oids = self.range_oids(remote, local)?;
        self.summarize(&oids)
    }

    /// Commits on the local branch not yet on `origin/<branch>`.
    pub fn ahead_commits(&self, branch: &str) -> Result<Vec<CommitSummary>> {
        let local = self.resolve_oid(branch)?;
        let remote = self
            .resolve_oid(&format!("origin/{branch}"))
            .map_err(|_| GitGuideError::NoRemoteBranch {
                branch: branch.to_string(),
            })?;
        let oids = self.range_oids(local, remote)?;
        self.summarize(&oids)
    }

    fn resolve_oid(&self, refname: &str) -> Result<Oid> {
        let obj = self.repo.revparse_single(refname)?;
        Ok(obj.peel_to_commit()?.id())
    }

    /// Commits reachable from `include` but not from `exclude`, log order.
    fn range_oids(&self, include: Oid, exclude: Oid) -> Result<Vec<Oid>> {
        let mut walk = self.repo.revwalk()?;
        walk.push(include)?;
        walk.hide(exclude)?;
        let mut oids = Vec::new();
        for oid in walk {
            oids.push(oid?);
        }
        Ok(oids)
    }

    fn summarize(&self, oids: &[Oid]) -> Result<Vec<CommitSummary>> {
        let mut commits = Vec::with_capacity(oids.len());
        for &oid in oids {
            let commit = self.repo.find_commit(oid)?;
            commits.push(CommitSummary {
                short_hash: oid.to_string()[..7].to_string(),
                author: commit.author().name().unwrap_or("unknown").to_string(),
                summary: commit.summary().unwrap_or("").to_string(),
            });
        }
        Ok(commits)
    }

    /// Union of paths touched by the given commits, de-duplicated.
    fn touched_paths(&self, oids: &[Oid]) -> Result<BTreeSet<PathBuf>> {
        let mut paths = BTreeSet::new();
        for &oid in oids {
            let commit = self.repo.find_commit(oid)?;
            let tree = commit.tree()?;
            // Root commits diff against the empty tree
            let parent_tree = match commit.parent(0) {
                Ok(parent) => Some(parent.tree()?),
                Err(_) => None,
            };
            let diff =
                self.repo
                    .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;
            for delta in diff.deltas() {
                if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) {
                    paths.insert(path.to_path_buf());
                }
            }
        }
        Ok(paths)
    }

    /// Classify working-tree entries into staged, unstaged, and untracked.
    ///
    /// The sets are mutually exclusive: any index bit wins, then untracked,
    /// then remaining worktree bits. A path that is both staged and further
    /// modified counts as staged for this snapshot.
    pub fn classify_worktree(
        &self,
    ) -> Result<(BTreeSet<PathBuf>, BTreeSet<PathBuf>, BTreeSet<PathBuf>)> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut staged = BTreeSet::new();
        let mut unstaged = BTreeSet::new();
        let mut untracked = BTreeSet::new();

        let index_any = git2::Status::INDEX_NEW
            | git2::Status::INDEX_MODIFIED
            | git2::Status::INDEX_DELETED
            | git2::Status::INDEX_RENAMED
            | git2::Status::INDEX_TYPECHANGE;

        for entry in statuses.iter() {
            let path = entry.path().ok_or(GitGuideError::InvalidUtf8Path)?;
            let path = PathBuf::from(path);
            let flags = entry.status();

            if flags.intersects(index_any) {
                staged.insert(path);
            } else if flags.contains(git2::Status::WT_NEW) {
                untracked.insert(path);
            } else {
                unstaged.insert(path);
            }
        }

        Ok((staged, unstaged, untracked))
    }

    pub fn is_dirty(&self) -> Result<bool> {
        let (staged, unstaged, untracked) = self.classify_worktree()?;
        Ok(!(staged.is_empty() && unstaged.is_empty() && untracked.is_empty()))
    }

    // --- mutations, all via the git binary ---

    /// Update remote-tracking metadata without touching local branches.
    pub fn fetch_origin(&self) -> Result<()> {
        self.run_git("fetch", &["fetch", "origin"]).map(|_| ())
    }

    pub fn pull(&self, branch: &str) -> Result<()> {
        self.run_git("pull", &["pull", "origin", branch]).map(|_| ())
    }

    pub fn push_branch(&self, branch: &str) -> Result<()> {
        self.run_git("push", &["push", "origin", branch]).map(|_| ())
    }

    pub fn push_tags(&self) -> Result<()> {
        self.run_git("push", &["push", "origin", "--tags"]).map(|_| ())
    }

    pub fn add_all(&self) -> Result<()> {
        self.run_git("add", &["add", "-A"]).map(|_| ())
    }

    pub fn add_paths(&self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add".to_string(), "--".to_string()];
        for path in paths {
            args.push(path.to_string_lossy().into_owned());
        }
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run_git("add", &arg_refs).map(|_| ())
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        self.run_git("commit", &["commit", "-m", message]).map(|_| ())
    }

    /// Create a lightweight tag named by the canonical version string.
    pub fn create_tag(&self, name: &str) -> Result<()> {
        self.run_git("tag", &["tag", name]).map(|_| ())
    }

    /// Diff of HEAD against its first parent, zero context lines.
    /// A single-commit history has no parent; the diff is then empty.
    pub fn diff_against_parent(&self) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;
        if head.parent_count() == 0 {
            return Ok(String::new());
        }
        self.run_git("diff", &["diff", "HEAD~1", "--unified=0"])
    }
}
