//! Wiki markup to sanitized HTML.
//!
//! Conversion is a three-stage pipeline:
//! - [`tokenize`] classifies the text into a flat [`Token`] stream
//! - [`parse`] walks a [`Cursor`] over the tokens with backtracking attempt
//!   rules and builds an [`Article`]
//! - [`render`] turns the article into an HTML fragment
//!
//! Conversion never fails. Markup that does not match any construct comes out
//! as escaped literal text.
//!
//! # Example
//!
//! ```
//! use wikid::{RenderSettings, to_html};
//!
//! let html = to_html("h1. Hello\n*Bold* text", &RenderSettings::default());
//! assert_eq!(html, "<h1>Hello</h1><b>Bold</b> text");
//! ```

pub mod ast;
mod cursor;
mod escape;
mod html;
mod lexer;
mod parser;
mod settings;
mod token;

pub use ast::Article;
pub use cursor::Cursor;
pub use escape::escape_html;
pub use html::{render, style_tag};
pub use lexer::{SPECIAL_CHARS, create_cursor, normalize, tokenize};
pub use parser::{parse, parse_link, parse_text, parse_text_parts};
pub use settings::RenderSettings;
pub use token::{Token, TokenKind};

/// Convert wiki markup to an HTML fragment.
#[must_use]
pub fn to_html(text: &str, settings: &RenderSettings) -> String {
    if text.is_empty() {
        return String::new();
    }
    let article = parse(&mut create_cursor(text));
    render(&article, settings)
}
