// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Analysis report output.

use crate::error::{Result, ResultExt};
use crate::git::ChangeRecord;
use serde::Serialize;

use super::classify::Categories;
use super::endpoints::ApiChange;

/// Suggested documentation updates.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestions {
    /// Suggested CHANGELOG block.
    pub changelog: String,
    /// Suggested API CHANGELOG block.
    pub api_changelog: String,
    /// Documents that should be updated.
    pub documents_to_update: Vec<String>,
}

/// Result of analysing one change set.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub changed_files: Vec<ChangeRecord>,
    pub api_changes: Vec<ApiChange>,
    pub categories: Categories,
    pub suggestions: Suggestions,
}

impl AnalysisReport {
    /// Whether the change set was empty.
    pub fn is_empty(&self) -> bool {
        self.changed_files.is_empty()
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    /// Render as a plain-text report.
    pub fn to_text(&self) -> String {
        let rule = "=".repeat(60);
        let mut lines = vec![
            rule.clone(),
            "Git Change Analysis Report".to_string(),
            rule,
            String::new(),
            "## Changed files".to_string(),
            String::new(),
        ];

        for change in &self.changed_files {
            lines.push(format!("  [{:<8}] {}", change.status.as_str(), change.path));
        }

        lines.extend([String::new(), "## API changes".to_string(), String::new()]);

        if self.api_changes.is_empty() {
            lines.push("  No API changes detected".to_string());
        } else {
            for change in &self.api_changes {
                lines.push(format!("  File: {} ({})", change.file, change.status));
                for endpoint in &change.endpoints {
                    lines.push(format!(
                        "    - {} {} -> {}()",
                        endpoint.method, endpoint.path, endpoint.handler
                    ));
                }
            }
        }

        lines.extend([
            String::new(),
            "## Documents to update".to_string(),
            String::new(),
        ]);
        for doc in &self.suggestions.documents_to_update {
            lines.push(format!("  - {}", doc));
        }

        lines.extend([
            String::new(),
            "## Suggested CHANGELOG entries".to_string(),
            String::new(),
            self.suggestions.changelog.clone(),
        ]);

        if !self.api_changes.is_empty() {
            lines.extend([
                String::new(),
                "## Suggested API CHANGELOG entries".to_string(),
                String::new(),
                self.suggestions.api_changelog.clone(),
            ]);
        }

        lines.join("\n")
    }
}
