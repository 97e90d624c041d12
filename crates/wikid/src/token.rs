//! Token types produced by the lexer.

/// Classification of a single token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// Not a token. Returned when peeking past the end of the stream.
    None,
    /// Letters, optionally mixed with digits (`hello`, `h1`, `3d`).
    Word,
    /// A run of ASCII digits.
    Number,
    /// Unicode symbol category (`$`, `=`, `|`).
    Symbol,
    /// Unicode punctuation category (`;`, `,`, `"`).
    Punctuation,
    /// A single whitespace character, canonicalized to `" "`.
    Space,
    /// A line feed.
    Newline,
    /// One of the markup control characters `* [ ] # + _ ^ - ~ . < > ! :`.
    Special,
    /// Unrecognized codepoint. Carries no text.
    Unknown,
}

/// A classified lexical unit.
///
/// Equality is structural: two tokens are equal when both kind and text match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Create a token of the given kind.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The synthetic token returned for out-of-range positions.
    #[must_use]
    pub fn none() -> Self {
        Self::new(TokenKind::None, "")
    }

    #[must_use]
    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::Newline
    }

    #[must_use]
    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.kind == TokenKind::Special
    }

    /// Check whether this token is the given special character.
    #[must_use]
    pub fn is_special_char(&self, c: char) -> bool {
        self.is_special() && self.text.len() == c.len_utf8() && self.text.starts_with(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_tokens() {
        let a = Token::new(TokenKind::Word, "hello");
        let b = Token::new(TokenKind::Word, "hello");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_kind_not_equal() {
        let a = Token::new(TokenKind::Word, "1");
        let b = Token::new(TokenKind::Number, "1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_different_text_not_equal() {
        let a = Token::new(TokenKind::Word, "hello");
        let b = Token::new(TokenKind::Word, "world");
        assert_ne!(a, b);
    }

    #[test]
    fn test_none_token_is_empty() {
        let token = Token::none();
        assert_eq!(token.kind, TokenKind::None);
        assert!(token.text.is_empty());
    }

    #[test]
    fn test_is_special_char() {
        let star = Token::new(TokenKind::Special, "*");
        assert!(star.is_special_char('*'));
        assert!(!star.is_special_char('+'));

        let symbol = Token::new(TokenKind::Symbol, "*");
        assert!(!symbol.is_special_char('*'));
    }
}
