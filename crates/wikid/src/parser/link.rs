//! Bracketed links: `[...]`.
//!
//! The bracketed text is matched against each link form in order; the first
//! match wins.
//!
//! | Form                 | Kind                |
//! |----------------------|---------------------|
//! | `[attach:file]`      | attachment          |
//! | `[a:name]`           | anchor definition   |
//! | `[goto:text\|name]`  | anchor reference    |
//! | `[mailto:address]`   | email               |
//! | `[text\|url]`        | external, with text |
//! | `[url]`              | external            |

use std::sync::LazyLock;

use regex::Regex;

use super::special_char;
use crate::ast::{Link, LinkKind};
use crate::cursor::Cursor;

static ATTACHMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\s*attach:\s*([^\]]+?)\s*\]$").unwrap());

static ANCHOR_DEFINITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\s*a:\s*([^\]]+?)\s*\]$").unwrap());

static ANCHOR_REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\s*goto:\s*([^\]]+?)\s*\|\s*([^\]|]+?)\s*\]$").unwrap()
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\s*mailto:\s*([^\]]+?)\s*\]$").unwrap());

static TITLED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\s*([^\]]+?)\s*\|\s*([^\]|]+?)\s*\]$").unwrap());

static BARE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[\s*([^\]]+?)\s*\]$").unwrap());

/// Classify raw link text, brackets included.
///
/// Returns `None` when no link form matches. Targets are not validated here;
/// the renderer decides whether a target is usable.
#[must_use]
pub fn parse_link(raw: &str) -> Option<Link> {
    if let Some(caps) = ATTACHMENT_RE.captures(raw) {
        return Some(Link::new(LinkKind::Attachment, &caps[1], &caps[1]));
    }
    if let Some(caps) = ANCHOR_DEFINITION_RE.captures(raw) {
        return Some(Link::new(LinkKind::AnchorDefinition, &caps[1], ""));
    }
    if let Some(caps) = ANCHOR_REFERENCE_RE.captures(raw) {
        return Some(Link::new(LinkKind::AnchorReference, &caps[2], &caps[1]));
    }
    if let Some(caps) = EMAIL_RE.captures(raw) {
        return Some(Link::new(LinkKind::Email, &caps[1], &caps[1]));
    }
    if let Some(caps) = TITLED_RE.captures(raw) {
        return Some(Link::new(LinkKind::External, &caps[2], &caps[1]));
    }
    BARE_RE
        .captures(raw)
        .map(|caps| Link::new(LinkKind::External, &caps[1], &caps[1]))
}

/// A link starting at the cursor, closed by `]` on the same line.
pub(super) fn try_link(cursor: &mut Cursor) -> Option<Link> {
    if special_char(cursor.peek()) != Some('[') {
        return None;
    }

    cursor.attempt(|c| {
        let mut raw = String::new();
        loop {
            if c.eof() || c.peek().is_newline() {
                return None;
            }
            let token = c.consume();
            raw.push_str(&token.text);
            if token.is_special_char(']') {
                break;
            }
        }
        let link = parse_link(&raw);
        if link.is_none() {
            tracing::trace!(raw = %raw, "Bracketed text is not a link");
        }
        link
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::create_cursor;

    #[test]
    fn test_bare_external() {
        assert_eq!(
            parse_link("[http://test.com]"),
            Some(Link::new(
                LinkKind::External,
                "http://test.com",
                "http://test.com"
            ))
        );
    }

    #[test]
    fn test_titled_external() {
        assert_eq!(
            parse_link("[ Test | http://test.com ]"),
            Some(Link::new(LinkKind::External, "http://test.com", "Test"))
        );
    }

    #[test]
    fn test_attachment() {
        assert_eq!(
            parse_link("[attach: file.txt]"),
            Some(Link::new(LinkKind::Attachment, "file.txt", "file.txt"))
        );
    }

    #[test]
    fn test_anchor_definition() {
        assert_eq!(
            parse_link("[a:section-1]"),
            Some(Link::new(LinkKind::AnchorDefinition, "section-1", ""))
        );
    }

    #[test]
    fn test_anchor_name_not_checked_when_parsing() {
        assert_eq!(
            parse_link("[a:bad name]"),
            Some(Link::new(LinkKind::AnchorDefinition, "bad name", ""))
        );
        assert_eq!(
            parse_link("[goto:My Title|bad name]"),
            Some(Link::new(LinkKind::AnchorReference, "bad name", "My Title"))
        );
    }

    #[test]
    fn test_anchor_reference() {
        assert_eq!(
            parse_link("[goto: Section 1 | section-1]"),
            Some(Link::new(LinkKind::AnchorReference, "section-1", "Section 1"))
        );
    }

    #[test]
    fn test_email() {
        assert_eq!(
            parse_link("[mailto:test@test.com]"),
            Some(Link::new(LinkKind::Email, "test@test.com", "test@test.com"))
        );
    }

    #[test]
    fn test_empty_brackets() {
        assert_eq!(parse_link("[]"), None);
    }

    #[test]
    fn test_try_link_consumes_through_bracket() {
        let mut cursor = create_cursor("[a:top] after");
        let link = try_link(&mut cursor).unwrap();
        assert_eq!(link.kind, LinkKind::AnchorDefinition);
        assert_eq!(cursor.peek().text, " ");
    }

    #[test]
    fn test_try_link_unclosed() {
        let mut cursor = create_cursor("[http://test.com\n]");
        assert!(try_link(&mut cursor).is_none());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_try_link_requires_open_bracket() {
        let mut cursor = create_cursor("http://test.com]");
        assert!(try_link(&mut cursor).is_none());
    }

    #[test]
    fn test_try_link_empty_rolls_back() {
        let mut cursor = create_cursor("[]");
        assert!(try_link(&mut cursor).is_none());
        assert_eq!(cursor.index(), 0);
    }
}
