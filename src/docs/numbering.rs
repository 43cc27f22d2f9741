// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Requirement document numbering.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The document number row of the requirement template.
    static ref NUMBER_ROW: Regex = Regex::new(r"文档编号\s*\|\s*REQ-(\d+)").unwrap();
    /// Any embedded requirement identifier.
    static ref NUMBER_ANY: Regex = Regex::new(r"REQ-(\d+)").unwrap();
}

/// Extract the requirement number embedded in a document.
pub fn requirement_number(doc: &str) -> Option<u32> {
    NUMBER_ROW
        .captures(doc)
        .or_else(|| NUMBER_ANY.captures(doc))
        .and_then(|caps| caps[1].parse().ok())
}

/// Pick the number for a new requirement document.
///
/// One past the highest embedded number; one past the document count when
/// no document carries a number; 1 when there are no documents. Concurrent
/// runs can pick the same number.
pub fn next_requirement_number(existing_docs: &[String]) -> u32 {
    if existing_docs.is_empty() {
        return 1;
    }

    match existing_docs.iter().filter_map(|d| requirement_number(d)).max() {
        Some(max) => max.saturating_add(1),
        None => existing_docs.len() as u32 + 1,
    }
}

/// Format a requirement number as three zero-padded digits.
pub fn format_requirement_number(number: u32) -> String {
    format!("{:03}", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(number: &str) -> String {
        format!(
            "# Login - 需求文档\n\n| 属性 | 值 |\n|------|-----|\n| 文档编号 | REQ-{} |\n",
            number
        )
    }

    #[test]
    fn test_no_documents() {
        assert_eq!(next_requirement_number(&[]), 1);
    }

    #[test]
    fn test_max_plus_one() {
        assert_eq!(next_requirement_number(&[doc("001"), doc("003")]), 4);
    }

    #[test]
    fn test_unnumbered_documents_fall_back_to_count() {
        let docs = vec!["# A\n".to_string(), "# B\n".to_string()];
        assert_eq!(next_requirement_number(&docs), 3);
    }

    #[test]
    fn test_mixed_documents() {
        let docs = vec!["no number".to_string(), doc("007")];
        assert_eq!(next_requirement_number(&docs), 8);
    }

    #[test]
    fn test_number_row_preferred() {
        let text = format!("See REQ-042 for context.\n{}", doc("005"));
        assert_eq!(requirement_number(&text), Some(5));
        assert_eq!(requirement_number("Depends on REQ-042"), Some(42));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_requirement_number(1), "001");
        assert_eq!(format_requirement_number(42), "042");
        assert_eq!(format_requirement_number(1234), "1234");
    }
}
