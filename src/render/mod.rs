// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering of suggestions and document templates.

mod changelog;
mod suggest;
mod template;
mod templates;

pub use changelog::{category_header, render_api_changelog, render_changelog, ApiDisposition};
pub use suggest::{suggest_documents, API_CHANGELOG_FILE, API_DOC_FILE, CHANGELOG_FILE};
pub use template::{fields, placeholders, render_template, TemplateFields, TemplateRenderer};
pub use templates::{DocTemplate, EMPTY_SECTION};
