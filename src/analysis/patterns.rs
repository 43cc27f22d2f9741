// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Compiled path pattern sets.

use crate::error::{ConfigError, DocsError, Result};
use regex::{Regex, RegexBuilder};

/// A set of case-insensitive path patterns anchored at the start of the path.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile a pattern set. Fails on the first invalid pattern.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                RegexBuilder::new(&format!("^(?:{})", p))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        DocsError::Config(ConfigError::InvalidPattern {
                            pattern: p.to_string(),
                            message: e.to_string(),
                        })
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Check whether any pattern matches the path.
    pub fn matches_any(&self, path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(path))
    }

    /// Whether the set has no patterns (and therefore matches nothing).
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatternsConfig;

    #[test]
    fn test_default_api_patterns() {
        let set = PatternSet::new(&PatternsConfig::default().api_files).unwrap();
        assert!(set.matches_any("src/api/users.py"));
        assert!(set.matches_any("app/routes.py"));
        assert!(set.matches_any("backend/controllers/order.py"));
        assert!(!set.matches_any("src/api/users.ts"));
        assert!(!set.matches_any("README.md"));
    }

    #[test]
    fn test_case_insensitive() {
        let set = PatternSet::new(&[r".*\.vue$"]).unwrap();
        assert!(set.matches_any("src/components/Header.VUE"));
    }

    #[test]
    fn test_anchored_at_start() {
        let set = PatternSet::new(&["api/"]).unwrap();
        assert!(set.matches_any("api/users.py"));
        assert!(!set.matches_any("src/api/users.py"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let set = PatternSet::new(&["docs|api"]).unwrap();
        assert!(set.matches_any("api/x.py"));
        assert!(!set.matches_any("src/api/x.py"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = PatternSet::new::<&str>(&[]).unwrap();
        assert!(set.is_empty());
        assert!(!set.matches_any("anything"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PatternSet::new(&["(unclosed"]);
        assert!(matches!(
            result,
            Err(DocsError::Config(ConfigError::InvalidPattern { .. }))
        ));
    }
}
