// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for docsync.
//!
//! Read-side failures (git, unreadable files) are recovered where they occur
//! and only logged. Everything defined here is what reaches the caller:
//! configuration problems, document contract violations and write failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for docsync operations.
#[derive(Error, Debug)]
pub enum DocsError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Document store errors
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    // Template rendering errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Object not found: {reference}")]
    ObjectNotFound { reference: String },
}

/// Errors raised while reading or updating Markdown documents.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("{path} does not exist, run `docsync update init` first")]
    Missing { path: PathBuf },

    #[error("Section '{section}' not found in {path}, check the document format")]
    SectionNotFound { section: String, path: PathBuf },

    #[error("{path} already exists, use --force to overwrite")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

/// Template rendering errors.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template '{template}' is missing a value for '{field}'")]
    MissingField { template: String, field: String },

    #[error("Failed to render template: {message}")]
    Render { message: String },
}

/// Result type alias for docsync operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DocsError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
