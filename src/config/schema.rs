// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from docsync.toml.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The main configuration structure for docsync.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocsConfig {
    /// Documentation directory layout.
    pub paths: PathsConfig,

    /// Path and source patterns used during analysis.
    pub patterns: PatternsConfig,

    /// Project metadata filled into templates.
    pub project: ProjectConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl DocsConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Where the generated documents live, relative to the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root documentation directory (holds CHANGELOG.md).
    pub docs_dir: PathBuf,

    /// API documentation directory (holds API.md and API_CHANGELOG.md).
    pub api_docs_dir: PathBuf,

    /// Requirement documents directory.
    pub requirements_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            api_docs_dir: PathBuf::from("docs/api"),
            requirements_dir: PathBuf::from("docs/requirements"),
        }
    }
}

/// Regular expressions driving classification and endpoint extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternsConfig {
    /// Paths treated as API files (scanned for endpoints).
    pub api_files: Vec<String>,

    /// Paths that suggest a requirement document.
    pub feature_files: Vec<String>,

    /// Route decorator patterns. The HTTP verb is taken from the `method`
    /// named group, or the last group that participated in the match.
    pub route_decorators: Vec<String>,

    /// Handler definition pattern; group 1 is the handler name.
    pub handler: String,

    /// Number of lines after a decorator searched for the handler.
    pub lookahead: usize,

    /// Path substrings that move a modification into "Fixed".
    pub fix_keywords: Vec<String>,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            api_files: vec![
                r".*api.*\.py$".to_string(),
                r".*routes?.*\.py$".to_string(),
                r".*endpoints?.*\.py$".to_string(),
                r".*controllers?.*\.py$".to_string(),
                r".*views?.*\.py$".to_string(),
            ],
            feature_files: vec![
                r".*\.vue$".to_string(),
                r".*\.tsx?$".to_string(),
                r".*\.jsx?$".to_string(),
                r".*models?.*\.py$".to_string(),
                r".*services?.*\.py$".to_string(),
                r".*core.*\.py$".to_string(),
            ],
            route_decorators: vec![
                r"@(app|router)\.(?P<method>get|post|put|delete|patch|options|head)\s*\("
                    .to_string(),
                r"@api_router\.(?P<method>get|post|put|delete|patch|options|head)\s*\("
                    .to_string(),
            ],
            handler: r"^(?:async\s+)?def\s+(\w+)".to_string(),
            lookahead: 4,
            fix_keywords: vec!["fix".to_string(), "bug".to_string(), "patch".to_string()],
        }
    }
}

/// Project metadata used when creating documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name shown in the API document title.
    pub name: String,

    /// Repository URL used for the changelog compare link.
    pub repo_url: String,

    /// Base URL listed in the API document.
    pub base_url: String,

    /// Default author for requirement documents.
    pub author: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "Project".to_string(),
            repo_url: "https://github.com/your-repo/your-project".to_string(),
            base_url: "http://localhost:8000".to_string(),
            author: None,
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
