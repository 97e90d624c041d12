//! Lexer: classifies raw markup text into a flat token stream.
//!
//! The lexer knows nothing about the markup grammar. It normalizes line
//! endings, then scans codepoint by codepoint. Only letter and digit runs are
//! munched; every other token is exactly one source character.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Markup control characters, emitted as [`TokenKind::Special`].
pub const SPECIAL_CHARS: &[char] = &[
    '*', '[', ']', '#', '+', '_', '^', '-', '~', '.', '<', '>', '!', ':',
];

static LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{L}$").unwrap());
static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{S}$").unwrap());
static PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{P}$").unwrap());

/// Tokenize the text.
///
/// Never fails: codepoints that fit no class become [`TokenKind::Unknown`]
/// placeholders with empty text.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let normalized = normalize(text);
    let chars: Vec<char> = normalized.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];

        if is_letter(c) || c.is_ascii_digit() {
            let start = index;
            let mut kind = if is_letter(c) {
                TokenKind::Word
            } else {
                TokenKind::Number
            };

            while index + 1 < chars.len() && is_letter_or_digit(chars[index + 1]) {
                // Numbers adjacent to letters are words (`1st`, `3d`)
                if is_letter(chars[index + 1]) {
                    kind = TokenKind::Word;
                }
                index += 1;
            }

            let run: String = chars[start..=index].iter().collect();
            tokens.push(Token::new(kind, run));
        } else if SPECIAL_CHARS.contains(&c) {
            tokens.push(Token::new(TokenKind::Special, c));
        } else if is_whitespace(c) {
            tokens.push(Token::new(TokenKind::Space, " "));
        } else if c == '\n' {
            tokens.push(Token::new(TokenKind::Newline, "\n"));
        } else if is_symbol(c) {
            tokens.push(Token::new(TokenKind::Symbol, c));
        } else if is_punctuation(c) {
            tokens.push(Token::new(TokenKind::Punctuation, c));
        } else {
            tokens.push(Token::new(TokenKind::Unknown, ""));
        }

        index += 1;
    }

    tokens
}

/// Tokenize the text and wrap the tokens in a [`Cursor`].
#[must_use]
pub fn create_cursor(text: &str) -> Cursor {
    Cursor::new(tokenize(text))
}

/// Normalize line endings to `\n` and strip a byte order mark at the start of
/// each line.
///
/// Recognized line endings: `\r\n`, `\r`, U+2028 (line separator) and U+2029
/// (paragraph separator).
#[must_use]
pub fn normalize(text: &str) -> Cow<'_, str> {
    if !text.contains(['\r', '\u{2028}', '\u{2029}', '\u{feff}']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut line_start = true;

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
                line_start = true;
            }
            '\n' | '\u{2028}' | '\u{2029}' => {
                out.push('\n');
                line_start = true;
            }
            '\u{feff}' if line_start => {
                line_start = false;
            }
            _ => {
                out.push(c);
                line_start = false;
            }
        }
    }

    Cow::Owned(out)
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (c >= '\u{aa}' && matches_char(&LETTER_RE, c))
}

fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || c.is_ascii_digit()
}

fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\u{a0}'
            | '\u{0b}'
            | '\u{200b}'
            | '\u{180e}'
            | '\u{2000}'..='\u{200a}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

fn is_symbol(c: char) -> bool {
    matches_char(&SYMBOL_RE, c)
}

fn is_punctuation(c: char) -> bool {
    matches_char(&PUNCTUATION_RE, c)
}

fn matches_char(re: &Regex, c: char) -> bool {
    let mut buf = [0; 4];
    re.is_match(c.encode_utf8(&mut buf))
}
