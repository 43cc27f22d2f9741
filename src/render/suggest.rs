// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Suggestions for which documents to update.

use crate::analysis::{ApiChange, PatternSet};
use crate::config::PathsConfig;
use crate::git::ChangeRecord;

/// File name of the project changelog.
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";
/// File name of the API reference.
pub const API_DOC_FILE: &str = "API.md";
/// File name of the API changelog.
pub const API_CHANGELOG_FILE: &str = "API_CHANGELOG.md";

/// List the documents that should be updated for a change set.
///
/// The changelog is suggested for any change, the API documents when
/// endpoints changed, and a requirement document when a feature file changed.
pub fn suggest_documents(
    changes: &[ChangeRecord],
    api_changes: &[ApiChange],
    feature_files: &PatternSet,
    paths: &PathsConfig,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !changes.is_empty() {
        suggestions.push(display_path(&paths.docs_dir, CHANGELOG_FILE));
    }

    if !api_changes.is_empty() {
        suggestions.push(display_path(&paths.api_docs_dir, API_DOC_FILE));
        suggestions.push(display_path(&paths.api_docs_dir, API_CHANGELOG_FILE));
    }

    if changes.iter().any(|c| feature_files.matches_any(&c.path)) {
        suggestions.push(format!(
            "{} (create or update)",
            display_path(&paths.requirements_dir, "REQ-<feature_name>.md")
        ));
    }

    suggestions
}

/// Join a directory and file name with forward slashes for display.
fn display_path(dir: &std::path::Path, file: &str) -> String {
    let dir = dir.to_string_lossy();
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{EndpointRecord, HttpMethod};
    use crate::config::PatternsConfig;
    use crate::git::ChangeStatus;

    fn feature_files() -> PatternSet {
        PatternSet::new(&PatternsConfig::default().feature_files).unwrap()
    }

    fn api_change() -> ApiChange {
        ApiChange {
            file: "src/api/users.py".to_string(),
            status: ChangeStatus::Modified,
            endpoints: vec![EndpointRecord {
                method: HttpMethod::Get,
                path: "/users".to_string(),
                handler: "list_users".to_string(),
            }],
        }
    }

    #[test]
    fn test_no_changes_no_suggestions() {
        let suggestions =
            suggest_documents(&[], &[], &feature_files(), &PathsConfig::default());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_changelog_only() {
        let changes = vec![ChangeRecord::new("README.md", ChangeStatus::Modified)];
        let suggestions =
            suggest_documents(&changes, &[], &feature_files(), &PathsConfig::default());
        assert_eq!(suggestions, vec!["docs/CHANGELOG.md"]);
    }

    #[test]
    fn test_api_and_feature_suggestions() {
        let changes = vec![
            ChangeRecord::new("src/api/users.py", ChangeStatus::Modified),
            ChangeRecord::new("web/src/App.vue", ChangeStatus::Added),
        ];
        let suggestions = suggest_documents(
            &changes,
            &[api_change()],
            &feature_files(),
            &PathsConfig::default(),
        );
        assert_eq!(
            suggestions,
            vec![
                "docs/CHANGELOG.md",
                "docs/api/API.md",
                "docs/api/API_CHANGELOG.md",
                "docs/requirements/REQ-<feature_name>.md (create or update)",
            ]
        );
    }

    #[test]
    fn test_custom_paths() {
        let paths = PathsConfig {
            docs_dir: "documentation/".into(),
            ..PathsConfig::default()
        };
        let changes = vec![ChangeRecord::new("a.txt", ChangeStatus::Added)];
        let suggestions = suggest_documents(&changes, &[], &feature_files(), &paths);
        assert_eq!(suggestions, vec!["documentation/CHANGELOG.md"]);
    }
}
