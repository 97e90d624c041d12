//! Positional view over a token stream.
//!
//! The cursor is the substrate for the parser's backtracking: every attempt
//! rule runs inside [`Cursor::attempt`], which restores the saved offset when
//! the rule fails.

use crate::token::{Token, TokenKind};

/// Returned for any out-of-range position.
static NONE_TOKEN: Token = Token {
    kind: TokenKind::None,
    text: String::new(),
};

/// Token cursor with peek-ahead, consumption and save/restore.
///
/// The offset may move past the end of the stream (consuming at EOF still
/// advances). Peeking out of range yields a [`TokenKind::None`] token, so call
/// sites can do lookahead arithmetic without checking for EOF first.
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    tokens: Vec<Token>,
    index: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Current offset.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the given offset.
    ///
    /// Offsets beyond the end of the stream are ignored. Restoring to exactly
    /// the end is allowed, so a rollback to end-of-input is honoured.
    pub fn set_index(&mut self, index: usize) {
        if index <= self.tokens.len() {
            self.index = index;
        }
    }

    /// Total number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens left after the current offset.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.tokens.len().saturating_sub(self.index)
    }

    /// Whether all tokens have been consumed.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.remaining_count() == 0
    }

    /// Token at the current offset.
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Token `offset` positions ahead of the current one.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> &Token {
        self.index
            .checked_add(offset)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&NONE_TOKEN)
    }

    /// Consume one token and return it.
    pub fn consume(&mut self) -> &Token {
        self.advance(1)
    }

    /// Consume `count` tokens and return the last one consumed.
    pub fn advance(&mut self, count: usize) -> &Token {
        self.index = self.index.saturating_add(count);
        self.index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&NONE_TOKEN)
    }

    /// Consume tokens while the predicate holds.
    pub fn consume_while(&mut self, mut predicate: impl FnMut(&Token) -> bool) {
        while !self.eof() && predicate(self.peek()) {
            self.index += 1;
        }
    }

    /// Consume tokens while the predicate holds and return their joined text.
    pub fn consume_concatenated_while(
        &mut self,
        mut predicate: impl FnMut(&Token) -> bool,
    ) -> String {
        let mut text = String::new();
        while !self.eof() && predicate(self.peek()) {
            text.push_str(&self.consume().text);
        }
        text
    }

    /// Consume a run of space tokens.
    pub fn consume_spaces(&mut self) {
        self.consume_while(Token::is_space);
    }

    /// Run an attempt rule transactionally.
    ///
    /// The offset is saved before `rule` runs and restored if it returns
    /// `None`, so a failed attempt never consumes input.
    pub fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let saved = self.index;
        let result = rule(self);
        if result.is_none() {
            self.set_index(saved);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star_hello_star() -> Cursor {
        Cursor::new(vec![
            Token::new(TokenKind::Special, "*"),
            Token::new(TokenKind::Word, "hello"),
            Token::new(TokenKind::Special, "*"),
        ])
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(star_hello_star().index(), 0);
    }

    #[test]
    fn test_consume_increments_index() {
        let mut cursor = star_hello_star();
        let token = cursor.consume().clone();
        assert_eq!(token, Token::new(TokenKind::Special, "*"));
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_peek_does_not_move() {
        let cursor = star_hello_star();
        assert_eq!(cursor.peek().text, "*");
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_peek_at_offset() {
        let cursor = star_hello_star();
        assert_eq!(cursor.peek_at(1).text, "hello");
        assert_eq!(cursor.peek_at(3).kind, TokenKind::None);
    }

    #[test]
    fn test_set_index() {
        let mut cursor = star_hello_star();
        cursor.set_index(1);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_set_index_beyond_end_ignored() {
        let mut cursor = star_hello_star();
        cursor.set_index(1);
        cursor.set_index(10);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_set_index_to_end_allowed() {
        let mut cursor = star_hello_star();
        cursor.set_index(3);
        assert_eq!(cursor.index(), 3);
        assert!(cursor.eof());
    }

    #[test]
    fn test_remaining_count() {
        let mut cursor = star_hello_star();
        assert_eq!(cursor.remaining_count(), 3);
        cursor.consume();
        assert_eq!(cursor.remaining_count(), 2);
    }

    #[test]
    fn test_consume_past_end() {
        let mut cursor = star_hello_star();
        cursor.advance(3);
        assert!(cursor.eof());
        assert_eq!(cursor.consume().kind, TokenKind::None);
        assert_eq!(cursor.index(), 4);
        assert_eq!(cursor.remaining_count(), 0);
        assert_eq!(cursor.peek().kind, TokenKind::None);
    }

    #[test]
    fn test_advance_returns_last_consumed() {
        let mut cursor = star_hello_star();
        assert_eq!(cursor.advance(2).text, "hello");
    }

    #[test]
    fn test_consume_while() {
        let mut cursor = Cursor::new(vec![
            Token::new(TokenKind::Word, "hello"),
            Token::new(TokenKind::Space, " "),
            Token::new(TokenKind::Special, "*"),
            Token::new(TokenKind::Word, "world"),
            Token::new(TokenKind::Special, "*"),
        ]);
        cursor.consume_while(|t| !t.is_special());
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_consume_while_stops_at_eof() {
        let mut cursor = Cursor::new(vec![Token::new(TokenKind::Word, "a")]);
        cursor.consume_while(|_| true);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_consume_concatenated_while() {
        let mut cursor = Cursor::new(vec![
            Token::new(TokenKind::Word, "hello"),
            Token::new(TokenKind::Space, " "),
            Token::new(TokenKind::Word, "world"),
            Token::new(TokenKind::Special, "*"),
        ]);
        let text = cursor.consume_concatenated_while(|t| !t.is_special());
        assert_eq!(text, "hello world");
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn test_consume_spaces() {
        let mut cursor = Cursor::new(vec![
            Token::new(TokenKind::Space, " "),
            Token::new(TokenKind::Space, " "),
            Token::new(TokenKind::Word, "x"),
        ]);
        cursor.consume_spaces();
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_attempt_restores_on_failure() {
        let mut cursor = star_hello_star();
        let result: Option<()> = cursor.attempt(|c| {
            c.advance(2);
            None
        });
        assert!(result.is_none());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_attempt_keeps_progress_on_success() {
        let mut cursor = star_hello_star();
        let result = cursor.attempt(|c| Some(c.advance(2).text.clone()));
        assert_eq!(result.as_deref(), Some("hello"));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_attempt_rollback_from_past_end() {
        let mut cursor = star_hello_star();
        cursor.advance(3);
        let result: Option<()> = cursor.attempt(|c| {
            c.consume();
            None
        });
        assert!(result.is_none());
        assert_eq!(cursor.index(), 3);
    }
}
