//! Backtracking recursive-descent parser.
//!
//! The grammar is a set of attempt rules. Each rule either consumes the input
//! it matches and returns `Some`, or returns `None` without net consumption
//! (see [`Cursor::attempt`]). Paragraph rules are tried in a fixed priority
//! order at each paragraph boundary; the first match wins.
//!
//! # Paragraph Rules
//!
//! | Priority | Rule       | Syntax                        |
//! |----------|------------|-------------------------------|
//! | 1        | Blank      | whitespace-only line          |
//! | 2        | Rule       | `----`                        |
//! | 3        | Heading    | `h1. Title` … `h6. Title`     |
//! | 4        | List       | `- item`, `* item`, `# item`  |
//! | 5        | Image      | `!path!`, `!path\|alt!`       |
//! | 6        | Blockquote | `bq. text`                    |
//! | 7        | Table      | reserved, never matches       |
//! | 8        | Text       | inline parts to end of line   |

mod block;
mod inline;
mod link;

use crate::ast::{Article, Paragraph};
use crate::cursor::Cursor;
use crate::lexer::create_cursor;
use crate::token::Token;

pub use inline::parse_text_parts;
pub use link::parse_link;

/// Parse the tokens behind the cursor into an article.
///
/// Parsing stops at end of input, or at the first position where no
/// paragraph rule matches. Content after that point is dropped.
pub fn parse(cursor: &mut Cursor) -> Article {
    let mut paragraphs = Vec::new();

    while !cursor.eof() {
        let Some(paragraph) = parse_paragraph(cursor) else {
            tracing::debug!(
                remaining = cursor.remaining_count(),
                "No paragraph rule matched, dropping remaining tokens"
            );
            break;
        };
        paragraphs.push(paragraph);
    }

    tracing::debug!(
        tokens = cursor.len(),
        paragraphs = paragraphs.len(),
        "Parsed article"
    );

    Article { paragraphs }
}

/// Tokenize and parse markup text.
#[must_use]
pub fn parse_text(text: &str) -> Article {
    parse(&mut create_cursor(text))
}

/// Try each paragraph rule in priority order.
fn parse_paragraph(cursor: &mut Cursor) -> Option<Paragraph> {
    if block::try_blank(cursor) {
        return Some(Paragraph::Blank);
    }
    if block::try_rule(cursor) {
        return Some(Paragraph::Rule);
    }
    if let Some(heading) = block::try_heading(cursor) {
        return Some(Paragraph::Heading(heading));
    }
    if let Some(list) = block::try_list(cursor) {
        return Some(Paragraph::List(list));
    }
    if let Some(image) = block::try_image(cursor) {
        return Some(Paragraph::Image(image));
    }
    if let Some(quote) = block::try_blockquote(cursor) {
        return Some(Paragraph::Blockquote(quote));
    }
    if block::try_table(cursor) {
        return Some(Paragraph::Table);
    }
    block::try_text(cursor).map(Paragraph::Text)
}

/// Consume the rest of the current line and return its text.
///
/// The terminating newline is consumed but not included.
fn consume_line(cursor: &mut Cursor) -> String {
    let line = cursor.consume_concatenated_while(|t| !t.is_newline());
    if cursor.peek().is_newline() {
        cursor.consume();
    }
    line
}

/// Single character of a special token, if the token is one.
fn special_char(token: &Token) -> Option<char> {
    if !token.is_special() {
        return None;
    }
    let mut chars = token.text.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
