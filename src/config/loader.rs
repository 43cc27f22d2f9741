// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, DocsError, Result};
use std::path::{Path, PathBuf};

use super::schema::DocsConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["docsync.toml", ".docsync.toml", ".config/docsync.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let docsync_config = config_dir.join("docsync").join("config.toml");
        if docsync_config.is_file() {
            return Some(docsync_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<DocsConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(DocsConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<DocsConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(DocsError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        DocsError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<DocsConfig> {
    let config: DocsConfig = toml::from_str(content).map_err(|e| {
        DocsError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    if config.patterns.lookahead == 0 {
        return Err(DocsError::Config(ConfigError::InvalidValue {
            key: "patterns.lookahead".to_string(),
            message: "must be at least 1".to_string(),
        }));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.patterns.lookahead, 4);
        assert_eq!(config.paths.api_docs_dir, PathBuf::from("docs/api"));
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[paths]
docs_dir = "documentation"

[patterns]
api_files = [".*handlers?.*\\.py$"]
fix_keywords = ["hotfix"]

[project]
name = "Shop"
author = "Jordan"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.paths.docs_dir, PathBuf::from("documentation"));
        // Unset keys keep their defaults.
        assert_eq!(config.paths.api_docs_dir, PathBuf::from("docs/api"));
        assert_eq!(config.patterns.api_files, vec![".*handlers?.*\\.py$"]);
        assert_eq!(config.patterns.fix_keywords, vec!["hotfix"]);
        assert_eq!(config.project.name, "Shop");
        assert_eq!(config.project.author.as_deref(), Some("Jordan"));
    }

    #[test]
    fn test_zero_lookahead_rejected() {
        let result = parse_config("[patterns]\nlookahead = 0\n");
        assert!(matches!(
            result,
            Err(DocsError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let result = parse_config("[paths\n");
        assert!(matches!(
            result,
            Err(DocsError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config_from(Path::new("/nonexistent/docsync.toml"));
        assert!(matches!(
            result,
            Err(DocsError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("docsync.toml"), "").unwrap();
        let nested = dir.path().join("src").join("api");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join("docsync.toml"));
    }
}
