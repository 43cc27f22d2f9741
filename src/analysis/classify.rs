// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Changelog categorisation of change records.

use crate::git::{ChangeRecord, ChangeStatus};
use serde::Serialize;
use std::path::Path;

/// Keep a Changelog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChangeCategory {
    Added,
    Changed,
    Fixed,
    Removed,
}

impl ChangeCategory {
    /// All categories in rendering order.
    pub fn all() -> &'static [ChangeCategory] {
        &[
            ChangeCategory::Added,
            ChangeCategory::Changed,
            ChangeCategory::Fixed,
            ChangeCategory::Removed,
        ]
    }

    /// Get the section name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeCategory::Added => "Added",
            ChangeCategory::Changed => "Changed",
            ChangeCategory::Fixed => "Fixed",
            ChangeCategory::Removed => "Removed",
        }
    }

    /// Verb used when describing a change of this category.
    fn verb(&self) -> &'static str {
        match self {
            ChangeCategory::Added => "新增",
            ChangeCategory::Changed => "更新",
            ChangeCategory::Fixed => "修复",
            ChangeCategory::Removed => "移除",
        }
    }
}

impl std::str::FromStr for ChangeCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "added" | "add" => Ok(ChangeCategory::Added),
            "changed" | "change" => Ok(ChangeCategory::Changed),
            "fixed" | "fix" => Ok(ChangeCategory::Fixed),
            "removed" | "remove" => Ok(ChangeCategory::Removed),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Paths grouped by changelog category, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Categories {
    pub added: Vec<String>,
    pub changed: Vec<String>,
    pub fixed: Vec<String>,
    pub removed: Vec<String>,
}

impl Categories {
    /// Get the paths in a category.
    pub fn get(&self, category: ChangeCategory) -> &[String] {
        match category {
            ChangeCategory::Added => &self.added,
            ChangeCategory::Changed => &self.changed,
            ChangeCategory::Fixed => &self.fixed,
            ChangeCategory::Removed => &self.removed,
        }
    }

    fn get_mut(&mut self, category: ChangeCategory) -> &mut Vec<String> {
        match category {
            ChangeCategory::Added => &mut self.added,
            ChangeCategory::Changed => &mut self.changed,
            ChangeCategory::Fixed => &mut self.fixed,
            ChangeCategory::Removed => &mut self.removed,
        }
    }

    /// Total number of categorised paths.
    pub fn total(&self) -> usize {
        ChangeCategory::all().iter().map(|c| self.get(*c).len()).sum()
    }

    /// Whether every category is empty.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Decide the category of a single change.
///
/// The status is checked before the keywords, so a deleted `bugfix.py` is
/// still `Removed`.
pub fn categorize(change: &ChangeRecord, fix_keywords: &[String]) -> ChangeCategory {
    match change.status {
        ChangeStatus::Added => ChangeCategory::Added,
        ChangeStatus::Deleted => ChangeCategory::Removed,
        ChangeStatus::Modified | ChangeStatus::Renamed => {
            let path = change.path.to_lowercase();
            if fix_keywords
                .iter()
                .any(|kw| !kw.is_empty() && path.contains(&kw.to_lowercase()))
            {
                ChangeCategory::Fixed
            } else {
                ChangeCategory::Changed
            }
        }
    }
}

/// Partition changes into the four changelog categories.
pub fn classify(changes: &[ChangeRecord], fix_keywords: &[String]) -> Categories {
    let mut categories = Categories::default();
    for change in changes {
        categories
            .get_mut(categorize(change, fix_keywords))
            .push(change.path.clone());
    }
    categories
}

/// Describe a changed file as a changelog bullet.
///
/// Produces `<verb> <file stem> <area> (`path`)`, where the area is guessed
/// from path keywords.
pub fn describe_change(path: &str, category: ChangeCategory) -> String {
    let name = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string());

    let lower = path.to_lowercase();
    let area = if lower.contains("api") {
        "API接口"
    } else if lower.contains("component") {
        "组件"
    } else if lower.contains("view") {
        "页面"
    } else if lower.contains("service") {
        "服务"
    } else if lower.contains("model") {
        "数据模型"
    } else if lower.contains("test") {
        "测试"
    } else {
        "模块"
    };

    format!("{} {} {} (`{}`)", category.verb(), name, area, path)
}
