// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The change analysis pipeline.

use crate::config::DocsConfig;
use crate::error::Result;
use crate::git::{ChangeRecord, ChangeSource};
use crate::render::{render_api_changelog, render_changelog, suggest_documents};

use super::classify::classify;
use super::endpoints::{analyze_api_changes, EndpointExtractor};
use super::patterns::PatternSet;
use super::report::{AnalysisReport, Suggestions};

/// Revision deleted files are read from when no range was requested.
const WORKTREE_BASE: &str = "HEAD";

/// Turns a change set into documentation suggestions.
pub struct ChangeAnalyzer {
    config: DocsConfig,
    api_files: PatternSet,
    feature_files: PatternSet,
    extractor: EndpointExtractor,
}

impl ChangeAnalyzer {
    /// Compile the configured patterns into an analyzer.
    pub fn new(config: DocsConfig) -> Result<Self> {
        let api_files = PatternSet::new(&config.patterns.api_files)?;
        let feature_files = PatternSet::new(&config.patterns.feature_files)?;
        let extractor = EndpointExtractor::new(&config.patterns)?;

        if api_files.is_empty() {
            tracing::warn!("No API file patterns configured, endpoint extraction is disabled");
        }

        Ok(Self {
            config,
            api_files,
            feature_files,
            extractor,
        })
    }

    /// List the changes from `source` and analyse them.
    pub fn analyze(
        &self,
        source: &dyn ChangeSource,
        since: Option<&str>,
        date: &str,
    ) -> AnalysisReport {
        let changes = source.list_changes(since);
        tracing::debug!("Found {} changed file(s)", changes.len());
        self.analyze_changes(changes, source, since, date)
    }

    /// Analyse an already listed change set.
    pub fn analyze_changes(
        &self,
        changes: Vec<ChangeRecord>,
        source: &dyn ChangeSource,
        since: Option<&str>,
        date: &str,
    ) -> AnalysisReport {
        let api_changes = analyze_api_changes(
            &changes,
            source,
            &self.api_files,
            &self.extractor,
            since.unwrap_or(WORKTREE_BASE),
        );
        let categories = classify(&changes, &self.config.patterns.fix_keywords);

        let suggestions = Suggestions {
            changelog: render_changelog(&categories, date),
            api_changelog: render_api_changelog(&api_changes, date),
            documents_to_update: suggest_documents(
                &changes,
                &api_changes,
                &self.feature_files,
                &self.config.paths,
            ),
        };

        AnalysisReport {
            changed_files: changes,
            api_changes,
            categories,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::ChangeStatus;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeSource {
        changes: Vec<ChangeRecord>,
        files: HashMap<String, String>,
        revisions_read: RefCell<Vec<String>>,
    }

    impl ChangeSource for FakeSource {
        fn list_changes(&self, _since: Option<&str>) -> Vec<ChangeRecord> {
            self.changes.clone()
        }

        fn read_current(&self, path: &str) -> Option<String> {
            self.files.get(path).cloned()
        }

        fn read_at_revision(&self, revision: &str, path: &str) -> Option<String> {
            self.revisions_read.borrow_mut().push(revision.to_string());
            self.files.get(path).cloned()
        }
    }

    fn users_source(status: ChangeStatus) -> FakeSource {
        FakeSource {
            changes: vec![ChangeRecord::new("src/api/users.py", status)],
            files: HashMap::from([(
                "src/api/users.py".to_string(),
                "@app.post(\"/api/users\")\ndef create_user(user):\n    pass\n".to_string(),
            )]),
            revisions_read: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_end_to_end_modified_api_file() {
        let analyzer = ChangeAnalyzer::new(DocsConfig::default()).unwrap();
        let source = users_source(ChangeStatus::Modified);

        let report = analyzer.analyze(&source, None, "2024-05-01");

        assert_eq!(report.categories.changed, vec!["src/api/users.py"]);
        assert!(report.categories.added.is_empty());

        let docs = &report.suggestions.documents_to_update;
        assert!(docs.contains(&"docs/CHANGELOG.md".to_string()));
        assert!(docs.contains(&"docs/api/API.md".to_string()));
        assert!(docs.contains(&"docs/api/API_CHANGELOG.md".to_string()));

        assert!(report
            .suggestions
            .api_changelog
            .contains("### 接口变更\n- `POST /api/users` - create_user\n"));
        assert!(!report.suggestions.api_changelog.contains("### 新增接口"));
    }

    #[test]
    fn test_deleted_file_read_from_since_revision() {
        let analyzer = ChangeAnalyzer::new(DocsConfig::default()).unwrap();
        let source = users_source(ChangeStatus::Deleted);

        let report = analyzer.analyze(&source, Some("v1.2.0"), "2024-05-01");
        assert_eq!(*source.revisions_read.borrow(), vec!["v1.2.0".to_string()]);
        assert!(report.suggestions.api_changelog.contains("### 移除接口"));

        let source = users_source(ChangeStatus::Deleted);
        analyzer.analyze(&source, None, "2024-05-01");
        assert_eq!(*source.revisions_read.borrow(), vec!["HEAD".to_string()]);
    }

    #[test]
    fn test_empty_change_set() {
        let analyzer = ChangeAnalyzer::new(DocsConfig::default()).unwrap();
        let source = FakeSource {
            changes: Vec::new(),
            files: HashMap::new(),
            revisions_read: RefCell::new(Vec::new()),
        };
        let report = analyzer.analyze(&source, None, "2024-05-01");
        assert!(report.is_empty());
        assert!(report.suggestions.documents_to_update.is_empty());
    }

    #[test]
    fn test_invalid_config_pattern() {
        let mut config = DocsConfig::default();
        config.patterns.feature_files = vec!["[".to_string()];
        assert!(ChangeAnalyzer::new(config).is_err());
    }
}
