// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The `git` command-line backed change source.

use crate::error::{DocsError, GitError, Result, ResultExt};
use std::path::PathBuf;
use std::process::Command;

use super::changes::{dedup_by_path, parse_name_status, ChangeRecord};
use super::repo::Repository;

/// Access to the changes and file contents of a repository.
///
/// The analysis pipeline only talks to this trait, so tests can feed it
/// canned changes without a real repository.
pub trait ChangeSource {
    /// List changed files, deduplicated by path.
    ///
    /// With `since`, the range `since..HEAD`; otherwise staged changes
    /// followed by unstaged ones. Failures yield an empty list.
    fn list_changes(&self, since: Option<&str>) -> Vec<ChangeRecord>;

    /// Read the working-tree content of a file.
    fn read_current(&self, path: &str) -> Option<String>;

    /// Read a file as it existed at `revision`.
    fn read_at_revision(&self, revision: &str, path: &str) -> Option<String>;
}

/// Change source that shells out to `git` in a working directory.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Create a change source rooted at `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Create a change source for the current directory.
    pub fn current() -> Result<Self> {
        let dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::new(dir))
    }

    /// Root of the enclosing repository, or the working directory when
    /// there is none. `git diff` prints paths relative to this root.
    fn toplevel(&self) -> PathBuf {
        match Repository::open(&self.workdir) {
            Ok(repo) => repo.workdir().to_path_buf(),
            Err(_) => self.workdir.clone(),
        }
    }

    /// Run a git command and return its stdout.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        tracing::debug!("Running {}", command);

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                DocsError::Git(GitError::CommandFailed {
                    command: command.clone(),
                    message: e.to_string(),
                })
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DocsError::Git(GitError::CommandFailed {
                command,
                message: stderr.trim().to_string(),
            }));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a git command, logging failures and returning empty output.
    fn run_or_empty(&self, args: &[&str]) -> String {
        match self.run(args) {
            Ok(out) => out,
            Err(e) => {
                tracing::warn!("{}", e);
                String::new()
            }
        }
    }
}

impl ChangeSource for GitCli {
    fn list_changes(&self, since: Option<&str>) -> Vec<ChangeRecord> {
        // Unquoted paths keep non-ASCII file names matchable and readable.
        let diff = ["-c", "core.quotePath=false", "diff", "--name-status"];

        let records = match since {
            Some(rev) => {
                let args: Vec<&str> = diff
                    .iter()
                    .copied()
                    .chain(["--end-of-options", rev, "HEAD"])
                    .collect();
                parse_name_status(&self.run_or_empty(&args))
            }
            None => {
                let staged: Vec<&str> = diff.iter().copied().chain(["--cached"]).collect();
                let staged = self.run_or_empty(&staged);
                let unstaged = self.run_or_empty(&diff);
                let mut records = parse_name_status(&staged);
                records.extend(parse_name_status(&unstaged));
                records
            }
        };

        dedup_by_path(records)
    }

    fn read_current(&self, path: &str) -> Option<String> {
        match std::fs::read_to_string(self.toplevel().join(path)) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!("Skipping unreadable file {}: {}", path, e);
                None
            }
        }
    }

    fn read_at_revision(&self, revision: &str, path: &str) -> Option<String> {
        let result =
            Repository::open(&self.workdir).and_then(|repo| repo.read_file_at(revision, path));
        match result {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("Cannot read {} at {}: {}", path, revision, e);
                None
            }
        }
    }
}
