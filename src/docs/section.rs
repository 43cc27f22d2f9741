// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Section-scoped edits of Markdown documents.

use crate::render::EMPTY_SECTION;

/// Insert a bullet at the top of a section.
///
/// The section is the first line equal to `header` that is directly followed
/// by a bullet line or the empty-section placeholder. The placeholder is
/// replaced by the new bullet; otherwise the bullet goes above the existing
/// ones. Returns `None` when no such section exists. Everything outside the
/// touched line is returned unchanged.
pub fn upsert_section(text: &str, header: &str, entry: &str) -> Option<String> {
    let entry = entry.replace(&['\r', '\n'][..], " ");
    let lines: Vec<&str> = text.split_inclusive('\n').collect();

    for (i, window) in lines.windows(2).enumerate() {
        let (head, next) = (window[0], window[1]);
        if strip_eol(head) != header || !head.ends_with('\n') {
            continue;
        }

        let body = strip_eol(next);
        let eol = if next.ends_with("\r\n") {
            "\r\n"
        } else {
            "\n"
        };
        let bullet = format!("- {}", entry);

        let replacement = if is_placeholder(body) {
            format!("{}{}", bullet, &next[body.len()..])
        } else if body.starts_with("- ") {
            format!("{}{}{}", bullet, eol, next)
        } else {
            continue;
        };

        let mut out = String::with_capacity(text.len() + replacement.len());
        out.extend(lines[..=i].iter().copied());
        out.push_str(&replacement);
        out.extend(lines[i + 2..].iter().copied());
        return Some(out);
    }

    None
}

fn strip_eol(line: &str) -> &str {
    line.trim_end_matches('\n').trim_end_matches('\r')
}

fn is_placeholder(line: &str) -> bool {
    let line = line.trim_end();
    line == EMPTY_SECTION || line.strip_prefix("- ").map(str::trim) == Some(EMPTY_SECTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# Changelog\n\n## [Unreleased]\n\n### Added\n- 无\n\n### Changed\n- 无\n\n---\n";

    #[test]
    fn test_replaces_placeholder() {
        let updated = upsert_section(DOC, "### Added", "新增登录功能").unwrap();
        assert_eq!(
            updated,
            "# Changelog\n\n## [Unreleased]\n\n### Added\n- 新增登录功能\n\n### Changed\n- 无\n\n---\n"
        );
    }

    #[test]
    fn test_second_upsert_prepends() {
        let once = upsert_section(DOC, "### Added", "first").unwrap();
        let twice = upsert_section(&once, "### Added", "second").unwrap();
        assert!(twice.contains("### Added\n- second\n- first\n\n### Changed"));
        assert_eq!(twice.matches("- first").count(), 1);
    }

    #[test]
    fn test_bare_placeholder() {
        let doc = "### Fixed\n无\n";
        assert_eq!(
            upsert_section(doc, "### Fixed", "crash on start").unwrap(),
            "### Fixed\n- crash on start\n"
        );
    }

    #[test]
    fn test_other_sections_untouched() {
        let updated = upsert_section(DOC, "### Changed", "x").unwrap();
        assert!(updated.contains("### Added\n- 无\n"));
        assert!(updated.contains("### Changed\n- x\n"));
        assert!(updated.ends_with("\n---\n"));
    }

    #[test]
    fn test_missing_header() {
        assert!(upsert_section(DOC, "### Security", "x").is_none());
        // Header must match the whole line.
        assert!(upsert_section(DOC, "### Add", "x").is_none());
    }

    #[test]
    fn test_header_without_bullets_is_skipped() {
        let doc = "### Added\n\nsome prose\n### Added\n- 无\n";
        assert_eq!(
            upsert_section(doc, "### Added", "x").unwrap(),
            "### Added\n\nsome prose\n### Added\n- x\n"
        );
        assert!(upsert_section("### Added\n\ntext\n", "### Added", "x").is_none());
    }

    #[test]
    fn test_crlf_document() {
        let doc = "### Added\r\n- old\r\n";
        assert_eq!(
            upsert_section(doc, "### Added", "new").unwrap(),
            "### Added\r\n- new\r\n- old\r\n"
        );
    }

    #[test]
    fn test_multiline_entry_is_flattened() {
        let updated = upsert_section("### Added\n- 无\n", "### Added", "a\nb").unwrap();
        assert_eq!(updated, "### Added\n- a b\n");
    }
}
