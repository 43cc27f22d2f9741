// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{DocsError, GitError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository for reading historical file content.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                DocsError::Git(GitError::NotARepository)
            } else {
                DocsError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                DocsError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Read a file as it existed at `revision`.
    ///
    /// `path` is relative to the repository root, as printed by `git diff`.
    pub fn read_file_at(&self, revision: &str, path: &str) -> Result<String> {
        let spec = format!("{}:{}", revision, path);

        let object = self.inner.revparse_single(&spec).map_err(|e| {
            DocsError::Git(GitError::ObjectNotFound {
                reference: format!("{}: {}", spec, e.message()),
            })
        })?;

        let blob = object.peel_to_blob().map_err(|e| {
            DocsError::Git(GitError::ObjectNotFound {
                reference: format!("{}: {}", spec, e.message()),
            })
        })?;

        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }
}
