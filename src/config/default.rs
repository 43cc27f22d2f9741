// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# docsync configuration file
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Document layout, relative to the repository root
[paths]
docs_dir = "docs"
api_docs_dir = "docs/api"
requirements_dir = "docs/requirements"

# Patterns are case-insensitive and anchored at the start of the path
[patterns]
api_files = [
    ".*api.*\\.py$",
    ".*routes?.*\\.py$",
    ".*endpoints?.*\\.py$",
    ".*controllers?.*\\.py$",
    ".*views?.*\\.py$",
]
feature_files = [
    ".*\\.vue$",
    ".*\\.tsx?$",
    ".*\\.jsx?$",
    ".*models?.*\\.py$",
    ".*services?.*\\.py$",
    ".*core.*\\.py$",
]
route_decorators = [
    "@(app|router)\\.(?P<method>get|post|put|delete|patch|options|head)\\s*\\(",
    "@api_router\\.(?P<method>get|post|put|delete|patch|options|head)\\s*\\(",
]
handler = "^(?:async\\s+)?def\\s+(\\w+)"
lookahead = 4
fix_keywords = ["fix", "bug", "patch"]

# Values filled into generated documents
[project]
name = "Project"
repo_url = "https://github.com/your-repo/your-project"
base_url = "http://localhost:8000"
# author = "Your Name"

# UI configuration
[ui]
color = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DocsConfig, PatternsConfig};

    #[test]
    fn test_example_config_parseable() {
        let example = example_config();
        let config: DocsConfig = toml::from_str(example).expect("Example config should parse");
        let defaults = PatternsConfig::default();
        assert_eq!(config.patterns.api_files, defaults.api_files);
        assert_eq!(config.patterns.route_decorators, defaults.route_decorators);
        assert_eq!(config.patterns.handler, defaults.handler);
    }
}
