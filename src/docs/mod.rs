// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Markdown document store.
//!
//! Creates the documentation layout, edits sections of existing documents
//! and numbers requirement documents.

mod numbering;
mod section;
mod store;

pub use numbering::{format_requirement_number, next_requirement_number, requirement_number};
pub use section::upsert_section;
pub use store::DocumentStore;
