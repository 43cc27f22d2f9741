// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Route decorator extraction from source text.

use crate::config::PatternsConfig;
use crate::error::{ConfigError, DocsError, Result};
use crate::git::{ChangeRecord, ChangeSource, ChangeStatus};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::patterns::PatternSet;

lazy_static! {
    /// First quoted string literal on a line.
    static ref QUOTED_LITERAL: Regex = Regex::new(r#"["']([^"']+)["']"#).unwrap();
}

/// Route path recorded when the decorator line has no quoted literal.
pub const UNKNOWN_PATH: &str = "unknown";

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    /// Get the uppercase verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            "OPTIONS" => Ok(HttpMethod::Options),
            "HEAD" => Ok(HttpMethod::Head),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An HTTP endpoint found in source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointRecord {
    /// HTTP method.
    pub method: HttpMethod,
    /// Route path, or [`UNKNOWN_PATH`].
    pub path: String,
    /// Name of the decorated handler function.
    #[serde(rename = "function")]
    pub handler: String,
}

impl EndpointRecord {
    /// Format as `` `METHOD PATH` - handler ``.
    pub fn changelog_entry(&self) -> String {
        format!("`{} {}` - {}", self.method, self.path, self.handler)
    }
}

/// Endpoints extracted from one changed API file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiChange {
    /// Path of the source file.
    pub file: String,
    /// Status of the source file in the diff.
    pub status: ChangeStatus,
    /// Endpoints found in the file.
    pub endpoints: Vec<EndpointRecord>,
}

/// Scans source text for route decorators.
pub struct EndpointExtractor {
    decorators: Vec<Regex>,
    handler: Regex,
    lookahead: usize,
}

impl EndpointExtractor {
    /// Build an extractor from the configured patterns.
    pub fn new(config: &PatternsConfig) -> Result<Self> {
        let decorators = config
            .route_decorators
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            decorators,
            handler: compile(&config.handler)?,
            lookahead: config.lookahead,
        })
    }

    /// Extract every decorated endpoint from `text`.
    ///
    /// A decorator only yields a record when a handler definition follows
    /// within the lookahead window.
    pub fn extract(&self, text: &str) -> Vec<EndpointRecord> {
        let lines: Vec<&str> = text.lines().collect();
        let mut endpoints = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let Some(method) = self.match_decorator(line) else {
                continue;
            };

            let path = QUOTED_LITERAL
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| UNKNOWN_PATH.to_string());

            let end = (i + 1 + self.lookahead).min(lines.len());
            let handler = lines[i + 1..end].iter().find_map(|next| {
                self.handler
                    .captures(next)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().to_string())
            });

            match handler {
                Some(handler) => endpoints.push(EndpointRecord {
                    method,
                    path,
                    handler,
                }),
                None => tracing::debug!("No handler after decorator on line {}", i + 1),
            }
        }

        endpoints
    }

    /// Return the HTTP method if the line is a route decorator.
    fn match_decorator(&self, line: &str) -> Option<HttpMethod> {
        self.decorators.iter().find_map(|re| {
            let caps = re.captures(line)?;
            let verb = caps
                .name("method")
                .or_else(|| caps.iter().skip(1).flatten().last())?;
            verb.as_str().parse().ok()
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        DocsError::Config(ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
    })
}

/// Extract endpoints from every changed API file.
///
/// Only files matching `api_files` are read. Deleted files are read as they
/// were at `deleted_revision`; others from the working tree. Unreadable files
/// and files without endpoints are left out.
pub fn analyze_api_changes(
    changes: &[ChangeRecord],
    source: &dyn ChangeSource,
    api_files: &PatternSet,
    extractor: &EndpointExtractor,
    deleted_revision: &str,
) -> Vec<ApiChange> {
    changes
        .iter()
        .filter(|change| api_files.matches_any(&change.path))
        .filter_map(|change| {
            let content = match change.status {
                ChangeStatus::Deleted => source.read_at_revision(deleted_revision, &change.path),
                _ => source.read_current(&change.path),
            }?;

            let endpoints = extractor.extract(&content);
            tracing::debug!("{}: {} endpoint(s)", change.path, endpoints.len());

            if endpoints.is_empty() {
                None
            } else {
                Some(ApiChange {
                    file: change.path.clone(),
                    status: change.status,
                    endpoints,
                })
            }
        })
        .collect()
}
