// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! docsync - documentation sync assistant
//!
//! Keeps a project's changelogs, API documents and requirement documents in
//! step with its git history.
//!
//! # Features
//!
//! - **Change Analysis**: Classify changed files into Keep a Changelog categories
//! - **Endpoint Extraction**: Find route decorators in changed API files
//! - **Suggestions**: Draft CHANGELOG and API CHANGELOG entries
//! - **Document Store**: Create the docs layout and upsert changelog sections
//! - **Requirements**: Numbered requirement documents from a template
//!
//! # Example
//!
//! ```no_run
//! use docsync::analysis::ChangeAnalyzer;
//! use docsync::config::DocsConfig;
//! use docsync::git::GitCli;
//!
//! let config = DocsConfig::load().unwrap();
//! let analyzer = ChangeAnalyzer::new(config).unwrap();
//! let source = GitCli::current().unwrap();
//!
//! let report = analyzer.analyze(&source, Some("HEAD~1"), "2024-01-01");
//! println!("{}", report.to_text());
//! ```

// Module declarations
pub mod analysis;
pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod git;
pub mod render;

// Re-exports for convenience
pub use config::DocsConfig;
pub use error::{DocsError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of docsync.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let short = |sha: &str| sha.chars().take(7).collect::<String>();
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("{} ({} {})", VERSION, short(sha), date),
            (Some(sha), None) => format!("{} ({})", VERSION, short(sha)),
            _ => VERSION.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_version_string_starts_with_version() {
            assert!(version_string().starts_with(VERSION));
        }
    }
}
