// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Changelog suggestion rendering.

use crate::analysis::{describe_change, ApiChange, Categories, ChangeCategory};
use crate::git::ChangeStatus;

/// Section of the API changelog an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiDisposition {
    New,
    Changed,
    Deprecated,
    Removed,
}

impl ApiDisposition {
    /// Derive the disposition from the status of the endpoint's source file.
    pub fn from_status(status: ChangeStatus) -> Self {
        match status {
            ChangeStatus::Added => ApiDisposition::New,
            ChangeStatus::Deleted => ApiDisposition::Removed,
            ChangeStatus::Modified | ChangeStatus::Renamed => ApiDisposition::Changed,
        }
    }

    /// Section title in the API changelog.
    pub fn title(&self) -> &'static str {
        match self {
            ApiDisposition::New => "新增接口",
            ApiDisposition::Changed => "接口变更",
            ApiDisposition::Deprecated => "废弃接口",
            ApiDisposition::Removed => "移除接口",
        }
    }

    /// Full section header line.
    pub fn header(&self) -> String {
        format!("### {}", self.title())
    }
}

/// Header line for a changelog category section.
pub fn category_header(category: ChangeCategory) -> String {
    format!("### {}", category.as_str())
}

/// Render the suggested changelog block.
///
/// Only non-empty categories get a section, always in the order Added,
/// Changed, Fixed, Removed.
pub fn render_changelog(categories: &Categories, date: &str) -> String {
    let mut lines = vec![format!("## [Unreleased] - {}", date), String::new()];

    for category in ChangeCategory::all() {
        let paths = categories.get(*category);
        if paths.is_empty() {
            continue;
        }

        lines.push(category_header(*category));
        for path in paths {
            lines.push(format!("- {}", describe_change(path, *category)));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the suggested API changelog block.
pub fn render_api_changelog(api_changes: &[ApiChange], date: &str) -> String {
    let mut new = Vec::new();
    let mut changed = Vec::new();
    let mut removed = Vec::new();

    for change in api_changes {
        let bucket = match ApiDisposition::from_status(change.status) {
            ApiDisposition::New => &mut new,
            ApiDisposition::Removed => &mut removed,
            ApiDisposition::Changed | ApiDisposition::Deprecated => &mut changed,
        };
        bucket.extend(change.endpoints.iter().map(|e| e.changelog_entry()));
    }

    let mut lines = vec![format!("## [Unreleased] - {}", date), String::new()];
    for (disposition, entries) in [
        (ApiDisposition::New, new),
        (ApiDisposition::Changed, changed),
        (ApiDisposition::Removed, removed),
    ] {
        if entries.is_empty() {
            continue;
        }
        lines.push(disposition.header());
        lines.extend(entries.into_iter().map(|entry| format!("- {}", entry)));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{EndpointRecord, HttpMethod};

    fn endpoint(method: HttpMethod, path: &str, handler: &str) -> EndpointRecord {
        EndpointRecord {
            method,
            path: path.to_string(),
            handler: handler.to_string(),
        }
    }

    #[test]
    fn test_render_changelog_skips_empty_categories() {
        let categories = Categories {
            added: vec!["src/api/users.py".to_string()],
            removed: vec!["old.py".to_string()],
            ..Categories::default()
        };

        let rendered = render_changelog(&categories, "2024-05-01");
        assert_eq!(
            rendered,
            "## [Unreleased] - 2024-05-01\n\n\
             ### Added\n\
             - 新增 users API接口 (`src/api/users.py`)\n\n\
             ### Removed\n\
             - 移除 old 模块 (`old.py`)\n"
        );
    }

    #[test]
    fn test_render_changelog_order() {
        let categories = Categories {
            added: vec!["a.py".to_string()],
            changed: vec!["b.py".to_string()],
            fixed: vec!["fix.py".to_string()],
            removed: vec!["c.py".to_string()],
        };
        let rendered = render_changelog(&categories, "2024-05-01");
        let added = rendered.find("### Added").unwrap();
        let changed = rendered.find("### Changed").unwrap();
        let fixed = rendered.find("### Fixed").unwrap();
        let removed = rendered.find("### Removed").unwrap();
        assert!(added < changed && changed < fixed && fixed < removed);
    }

    #[test]
    fn test_render_changelog_empty() {
        let rendered = render_changelog(&Categories::default(), "2024-05-01");
        assert_eq!(rendered, "## [Unreleased] - 2024-05-01\n");
    }

    #[test]
    fn test_render_api_changelog_dispositions() {
        let api_changes = vec![
            ApiChange {
                file: "src/api/users.py".to_string(),
                status: ChangeStatus::Modified,
                endpoints: vec![endpoint(HttpMethod::Get, "/users", "list_users")],
            },
            ApiChange {
                file: "src/api/orders.py".to_string(),
                status: ChangeStatus::Added,
                endpoints: vec![
                    endpoint(HttpMethod::Post, "/orders", "create_order"),
                    endpoint(HttpMethod::Get, "/orders", "list_orders"),
                ],
            },
            ApiChange {
                file: "src/api/legacy.py".to_string(),
                status: ChangeStatus::Deleted,
                endpoints: vec![endpoint(HttpMethod::Delete, "/legacy", "drop")],
            },
        ];

        let rendered = render_api_changelog(&api_changes, "2024-05-01");
        assert_eq!(
            rendered,
            "## [Unreleased] - 2024-05-01\n\n\
             ### 新增接口\n\
             - `POST /orders` - create_order\n\
             - `GET /orders` - list_orders\n\n\
             ### 接口变更\n\
             - `GET /users` - list_users\n\n\
             ### 移除接口\n\
             - `DELETE /legacy` - drop\n"
        );
    }

    #[test]
    fn test_renamed_file_is_changed() {
        assert_eq!(
            ApiDisposition::from_status(ChangeStatus::Renamed),
            ApiDisposition::Changed
        );
    }
}
