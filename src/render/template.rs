// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Placeholder substitution for document templates.

use crate::error::{DocsError, Result, TemplateError};
use handlebars::Handlebars;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

use super::templates::DocTemplate;

lazy_static! {
    /// A `{{name}}` placeholder.
    static ref PLACEHOLDER: Regex =
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap();
}

/// Placeholder values keyed by name.
pub type TemplateFields = BTreeMap<String, String>;

/// List the placeholders referenced by a template, in order of first use.
pub fn placeholders(source: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(source) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Renders templates with every placeholder required up front.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer. Output is not HTML-escaped.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    /// Render a built-in template.
    pub fn render(&self, template: DocTemplate, fields: &TemplateFields) -> Result<String> {
        self.render_source(template.name(), template.source(), fields)
    }

    /// Render an arbitrary template source.
    ///
    /// Fails with `MissingField` naming the first placeholder that has no
    /// value. Values for names the template does not use are ignored.
    pub fn render_source(
        &self,
        name: &str,
        source: &str,
        fields: &TemplateFields,
    ) -> Result<String> {
        if let Some(missing) = placeholders(source)
            .into_iter()
            .find(|p| !fields.contains_key(p))
        {
            return Err(DocsError::Template(TemplateError::MissingField {
                template: name.to_string(),
                field: missing,
            }));
        }

        self.registry.render_template(source, fields).map_err(|e| {
            DocsError::Template(TemplateError::Render {
                message: e.to_string(),
            })
        })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a built-in template with a fresh renderer.
pub fn render_template(template: DocTemplate, fields: &TemplateFields) -> Result<String> {
    TemplateRenderer::new().render(template, fields)
}

/// Build a field map from `(name, value)` pairs.
pub fn fields<K, V, I>(pairs: I) -> TemplateFields
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_fields(template: DocTemplate) -> TemplateFields {
        fields(
            placeholders(template.source())
                .into_iter()
                .map(|p| (p.clone(), format!("<{}>", p))),
        )
    }

    #[test]
    fn test_placeholders_in_order() {
        let names = placeholders("{{b}} {{ a }} {{b}} {c}");
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_requirement_placeholders() {
        let names = placeholders(DocTemplate::Requirement.source());
        assert_eq!(names.len(), 32);
        assert_eq!(&names[..4], &["title", "number", "date", "author"]);
    }

    #[test]
    fn test_render_all_templates_leaves_no_markers() {
        let renderer = TemplateRenderer::new();
        for template in DocTemplate::all() {
            let rendered = renderer.render(*template, &all_fields(*template)).unwrap();
            assert!(!rendered.contains("{{"), "{} kept a marker", template.name());
            assert!(placeholders(&rendered).is_empty());
        }
    }

    #[test]
    fn test_render_substitutes_values() {
        let rendered = render_template(
            DocTemplate::Changelog,
            &fields([("repo_url", "https://example.com/shop")]),
        )
        .unwrap();
        assert!(rendered.contains("[Unreleased]: https://example.com/shop/compare/v1.0.0...HEAD"));
        assert!(rendered.starts_with("# Changelog\n"));
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let mut values = all_fields(DocTemplate::ApiDoc);
        values.insert("project_name".to_string(), "R&D <Shop>".to_string());
        let rendered = render_template(DocTemplate::ApiDoc, &values).unwrap();
        assert!(rendered.starts_with("# R&D <Shop> API 接口文档"));
        assert!(rendered.contains("Authorization: Bearer {token}"));
    }

    #[test]
    fn test_missing_field() {
        let mut values = all_fields(DocTemplate::Requirement);
        values.remove("goal2");
        let result = render_template(DocTemplate::Requirement, &values);
        match result {
            Err(DocsError::Template(TemplateError::MissingField { template, field })) => {
                assert_eq!(template, "requirement");
                assert_eq!(field, "goal2");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let rendered = render_template(
            DocTemplate::ApiChangelog,
            &fields([("unused", "value")]),
        )
        .unwrap();
        assert!(rendered.starts_with("# API Changelog"));
    }
}
