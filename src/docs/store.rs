// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! On-disk document store.

use crate::config::PathsConfig;
use crate::error::{DocsError, DocumentError, Result};
use crate::render::{API_CHANGELOG_FILE, API_DOC_FILE, CHANGELOG_FILE};
use std::fs;
use std::path::{Path, PathBuf};

use super::numbering::next_requirement_number;
use super::section::upsert_section;

/// Markdown documents under a project root.
///
/// Writes replace whole files; there is no locking between processes.
pub struct DocumentStore {
    root: PathBuf,
    paths: PathsConfig,
}

impl DocumentStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, paths: PathsConfig) -> Self {
        Self {
            root: root.into(),
            paths,
        }
    }

    /// Resolve a path relative to the store root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Root documentation directory.
    pub fn docs_dir(&self) -> PathBuf {
        self.resolve(&self.paths.docs_dir)
    }

    /// API documentation directory.
    pub fn api_docs_dir(&self) -> PathBuf {
        self.resolve(&self.paths.api_docs_dir)
    }

    /// Requirement documents directory.
    pub fn requirements_dir(&self) -> PathBuf {
        self.resolve(&self.paths.requirements_dir)
    }

    /// Path of the project changelog.
    pub fn changelog_path(&self) -> PathBuf {
        self.docs_dir().join(CHANGELOG_FILE)
    }

    /// Path of the API changelog.
    pub fn api_changelog_path(&self) -> PathBuf {
        self.api_docs_dir().join(API_CHANGELOG_FILE)
    }

    /// Path of the API reference.
    pub fn api_doc_path(&self) -> PathBuf {
        self.api_docs_dir().join(API_DOC_FILE)
    }

    /// Path of the requirement document for a feature slug.
    pub fn requirement_path(&self, name: &str) -> PathBuf {
        self.requirements_dir().join(format!("REQ-{}.md", name))
    }

    /// Create a directory and its parents. Succeeds if it already exists.
    pub fn ensure_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| {
            DocsError::Document(DocumentError::WriteFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })
    }

    /// Create the docs, API and requirements directories.
    pub fn ensure_layout(&self) -> Result<()> {
        self.ensure_directory(&self.docs_dir())?;
        self.ensure_directory(&self.api_docs_dir())?;
        self.ensure_directory(&self.requirements_dir())
    }

    /// Read a document. Missing or unreadable documents yield `None`.
    pub fn read_document(&self, path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Read a document that must already exist.
    pub fn require_document(&self, path: &Path) -> Result<String> {
        self.read_document(path).ok_or_else(|| {
            DocsError::Document(DocumentError::Missing {
                path: path.to_path_buf(),
            })
        })
    }

    /// Write a document, creating parent directories and replacing any
    /// existing file.
    pub fn write_document(&self, path: &Path, text: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.ensure_directory(parent)?;
        }

        fs::write(path, text).map_err(|e| {
            DocsError::Document(DocumentError::WriteFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), text.len());
        Ok(())
    }

    /// Insert a bullet into a section of an existing document.
    ///
    /// The document is left untouched when the section cannot be found.
    pub fn update_section(&self, path: &Path, header: &str, entry: &str) -> Result<()> {
        let content = self.require_document(path)?;

        let updated = upsert_section(&content, header, entry).ok_or_else(|| {
            DocsError::Document(DocumentError::SectionNotFound {
                section: header.to_string(),
                path: path.to_path_buf(),
            })
        })?;

        self.write_document(path, &updated)
    }

    /// Read every `REQ-*.md` in the requirements directory, sorted by path.
    pub fn requirement_documents(&self) -> Vec<String> {
        let dir = self.requirements_dir();
        let pattern = format!(
            "{}/REQ-*.md",
            glob::Pattern::escape(&dir.to_string_lossy())
        );

        let mut paths: Vec<PathBuf> = match glob::glob(&pattern) {
            Ok(entries) => entries.flatten().filter(|p| p.is_file()).collect(),
            Err(e) => {
                tracing::warn!("Invalid requirement glob {}: {}", pattern, e);
                Vec::new()
            }
        };
        paths.sort();

        // Unreadable documents still count towards the fallback number.
        paths
            .iter()
            .map(|p| self.read_document(p).unwrap_or_default())
            .collect()
    }

    /// Number for the next requirement document.
    pub fn next_requirement_number(&self) -> u32 {
        next_requirement_number(&self.requirement_documents())
    }
}
