// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Change records parsed from `git diff --name-status` output.

use serde::Serialize;
use std::collections::HashSet;

/// Status of a changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl ChangeStatus {
    /// Map a `--name-status` status letter. Anything unrecognised (copies,
    /// type changes, unmerged entries) counts as a modification.
    pub fn from_code(code: char) -> Self {
        match code {
            'A' => ChangeStatus::Added,
            'M' => ChangeStatus::Modified,
            'D' => ChangeStatus::Deleted,
            'R' => ChangeStatus::Renamed,
            _ => ChangeStatus::Modified,
        }
    }

    /// Get the display name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::Added => "Added",
            ChangeStatus::Modified => "Modified",
            ChangeStatus::Deleted => "Deleted",
            ChangeStatus::Renamed => "Renamed",
        }
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One file's status in a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    /// Effective path (the new path for renames).
    #[serde(rename = "file")]
    pub path: String,
    /// Kind of change.
    pub status: ChangeStatus,
}

impl ChangeRecord {
    /// Create a new change record.
    pub fn new(path: impl Into<String>, status: ChangeStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Parse `git diff --name-status` output.
///
/// Lines look like `M\tpath` or `R100\told\tnew`; the last field is the
/// effective path. Malformed lines are skipped. The result is not deduplicated.
pub fn parse_name_status(output: &str) -> Vec<ChangeRecord> {
    output
        .lines()
        .filter_map(|line| {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                return None;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 {
                tracing::debug!("Skipping malformed status line: {:?}", line);
                return None;
            }

            let code = fields[0].chars().next()?;
            let path = fields[fields.len() - 1];
            if path.is_empty() {
                return None;
            }

            Some(ChangeRecord::new(path, ChangeStatus::from_code(code)))
        })
        .collect()
}

/// Drop records whose path was already seen, keeping first-seen order.
pub fn dedup_by_path(records: Vec<ChangeRecord>) -> Vec<ChangeRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.path.clone()))
        .collect()
}
