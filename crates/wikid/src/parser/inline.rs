//! Inline content: plain text runs, formatting spans and links.

use super::link::try_link;
use super::special_char;
use crate::ast::{Style, TextPart};
use crate::cursor::Cursor;
use crate::token::Token;

/// Parse inline parts up to the end of the current line.
///
/// The terminating newline is consumed. Adjacent plain runs are merged into
/// one part. Formatting spans nest; an unclosed delimiter is plain text.
pub fn parse_text_parts(cursor: &mut Cursor) -> Vec<TextPart> {
    let mut parts: Vec<TextPart> = Vec::new();

    loop {
        if cursor.eof() {
            break;
        }
        if cursor.peek().is_newline() {
            cursor.consume();
            break;
        }

        if let Some(part) = try_formatted(cursor) {
            parts.push(part);
            continue;
        }
        if let Some(link) = try_link(cursor) {
            parts.push(TextPart::Link(link));
            continue;
        }

        let mut text = cursor.consume().text.clone();
        text.push_str(&cursor.consume_concatenated_while(is_plain));
        if text.is_empty() {
            continue;
        }

        match parts.last_mut() {
            Some(TextPart::Plain { text: prev }) => prev.push_str(&text),
            _ => parts.push(TextPart::Plain { text }),
        }
    }

    parts
}

fn is_plain(token: &Token) -> bool {
    !token.is_special() && !token.is_newline()
}

/// A span opened and closed by the same style delimiter on one line.
///
/// Tokens between the delimiters are parsed again as inline content, which
/// allows spans of other styles to nest.
fn try_formatted(cursor: &mut Cursor) -> Option<TextPart> {
    let style = special_char(cursor.peek()).and_then(Style::from_delimiter)?;
    let delimiter = style.delimiter();

    cursor.attempt(|c| {
        c.consume();
        let mut inner = Vec::new();
        loop {
            if c.eof() || c.peek().is_newline() {
                return None;
            }
            let token = c.consume();
            if token.is_special_char(delimiter) {
                break;
            }
            inner.push(token.clone());
        }
        let parts = parse_text_parts(&mut Cursor::new(inner));
        Some(TextPart::formatted(style, parts))
    })
}
