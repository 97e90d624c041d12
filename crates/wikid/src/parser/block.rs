//! Paragraph-level attempt rules.
//!
//! Line-shaped rules consume a whole line, then match its text against a
//! pattern. On mismatch the cursor is rolled back to the start of the line.

use std::sync::LazyLock;

use regex::Regex;

use super::consume_line;
use super::inline::parse_text_parts;
use crate::ast::{Heading, Image, ImageKind, List, ListItem, ListKind, Quote, TextParagraph};
use crate::cursor::Cursor;
use crate::lexer::create_cursor;

static RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-{4}\s*$").unwrap());

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*h([1-6])\.\s+(.+)\s*$").unwrap());

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.+)$").unwrap());

static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+(.+)$").unwrap());

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*!([^!|]+)(?:\|([^!|]+))?!\s*$").unwrap());

static EXTERNAL_IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?:)?//").unwrap());

static BLOCKQUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*bq\.\s+(.+)\s*$").unwrap());

/// Blank line: zero or more spaces, then a newline or end of input.
pub(super) fn try_blank(cursor: &mut Cursor) -> bool {
    cursor
        .attempt(|c| {
            c.consume_spaces();
            if c.eof() || c.peek().is_newline() {
                c.consume();
                Some(())
            } else {
                None
            }
        })
        .is_some()
}

/// Horizontal rule: exactly four hyphens, optionally surrounded by spaces.
pub(super) fn try_rule(cursor: &mut Cursor) -> bool {
    cursor
        .attempt(|c| RULE_RE.is_match(&consume_line(c)).then_some(()))
        .is_some()
}

/// Heading: `h<1-6>. <text>`. The text is kept literally.
pub(super) fn try_heading(cursor: &mut Cursor) -> Option<Heading> {
    cursor.attempt(|c| {
        let line = consume_line(c);
        let caps = HEADING_RE.captures(&line)?;
        let level = caps[1].parse().ok()?;
        let text = caps[2].trim();
        if text.is_empty() {
            return None;
        }
        Some(Heading {
            level,
            text: text.to_owned(),
        })
    })
}

/// List: consecutive unordered (`-`/`*`) lines, or else consecutive ordered
/// (`#`) lines.
pub(super) fn try_list(cursor: &mut Cursor) -> Option<List> {
    try_list_of(cursor, &UNORDERED_ITEM_RE, ListKind::Unordered)
        .or_else(|| try_list_of(cursor, &ORDERED_ITEM_RE, ListKind::Ordered))
}

fn try_list_of(cursor: &mut Cursor, item_re: &Regex, kind: ListKind) -> Option<List> {
    cursor.attempt(|c| {
        let mut items = Vec::new();
        while let Some(item) = c.attempt(|c| try_list_item(c, item_re)) {
            items.push(item);
        }
        if items.is_empty() {
            return None;
        }
        Some(List { kind, items })
    })
}

/// A single list line. The item text is tokenized again and parsed as
/// inline parts on its own cursor.
fn try_list_item(cursor: &mut Cursor, item_re: &Regex) -> Option<ListItem> {
    let line = consume_line(cursor);
    let caps = item_re.captures(&line)?;
    let mut nested = create_cursor(caps[1].trim());
    Some(ListItem {
        parts: parse_text_parts(&mut nested),
    })
}

/// Block image: `!path!` or `!path|alt!`.
pub(super) fn try_image(cursor: &mut Cursor) -> Option<Image> {
    cursor.attempt(|c| {
        let line = consume_line(c);
        let caps = IMAGE_RE.captures(&line)?;
        let path = caps[1].to_owned();
        let alt = caps.get(2).map(|m| m.as_str().to_owned()).unwrap_or_default();
        let kind = if EXTERNAL_IMAGE_RE.is_match(&path) {
            ImageKind::External
        } else {
            ImageKind::Relative
        };
        Some(Image { kind, path, alt })
    })
}

/// Block quote: `bq. <text>`.
pub(super) fn try_blockquote(cursor: &mut Cursor) -> Option<Quote> {
    cursor.attempt(|c| {
        let line = consume_line(c);
        let caps = BLOCKQUOTE_RE.captures(&line)?;
        Some(Quote {
            text: caps[1].trim().to_owned(),
        })
    })
}

/// Tables are reserved syntax and never match.
pub(super) fn try_table(_cursor: &mut Cursor) -> bool {
    false
}

/// Text paragraph: inline parts up to the end of the line.
pub(super) fn try_text(cursor: &mut Cursor) -> Option<TextParagraph> {
    cursor.attempt(|c| {
        let parts = parse_text_parts(c);
        if parts.is_empty() {
            return None;
        }
        Some(TextParagraph { parts })
    })
}
