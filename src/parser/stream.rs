//! Cursor over a finished token sequence.
//!
//! The stream never fails on lookahead: any position past the last token
//! reads as the `EOF` sentinel. Only `expect` and `advance_with` produce
//! errors.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// Returned for every read past the end of the token slice.
pub static END_OF_STREAM: Token = Token {
    kind: TokenKind::EOF,
    value: String::new(),
    position: Position::null(),
};

pub struct TokenStream<'a> {
    /// The tokens to parse
    tokens: &'a [Token],
    /// Index of the current token, never greater than `tokens.len()`
    cursor: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenStream { tokens, cursor: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &'a Token {
        self.lookahead(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token `offset` positions past the cursor without moving it.
    pub fn lookahead(&self, offset: usize) -> &'a Token {
        self.cursor
            .checked_add(offset)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&END_OF_STREAM)
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// At the end of the stream this is a no-op returning the sentinel.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current_token();
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    /// Fails unless the current token is of `kind`. Never consumes.
    pub fn expect(&self, kind: TokenKind) -> Result<(), Error> {
        if self.current_token_kind() != kind {
            return Err(self.unexpected(Some(kind)));
        }

        Ok(())
    }

    /// Consumes the current token if it is of `kind`, otherwise fails
    /// without moving the cursor.
    pub fn advance_with(&mut self, kind: TokenKind) -> Result<&'a Token, Error> {
        self.expect(kind)?;
        Ok(self.advance())
    }

    /// Builds the syntax error for the current token.
    pub fn unexpected(&self, expected: Option<TokenKind>) -> Error {
        let token = self.current_token();

        Error::new(
            ErrorImpl::UnexpectedToken {
                found: token.kind,
                value: token.value.clone(),
                expected,
            },
            token.position,
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, value: &str, column: u32) -> Token {
        Token::new(kind, value, Position::new(1, column))
    }

    // `a + 1`, without a trailing EOF token.
    fn sample() -> Vec<Token> {
        vec![
            token(TokenKind::Identifier, "a", 1),
            token(TokenKind::Plus, "+", 3),
            token(TokenKind::Number, "1", 5),
        ]
    }

    #[test]
    fn test_current_token() {
        let tokens = sample();
        let stream = TokenStream::new(&tokens);

        assert_eq!(stream.current_token().value, "a");
        assert_eq!(stream.current_token_kind(), TokenKind::Identifier);
        assert!(stream.has_tokens());
    }

    #[test]
    fn test_lookahead_does_not_move_cursor() {
        let tokens = sample();
        let stream = TokenStream::new(&tokens);

        assert_eq!(stream.lookahead(1).kind, TokenKind::Plus);
        assert_eq!(stream.lookahead(1), stream.lookahead(1));
        assert_eq!(stream.lookahead(2).value, "1");
        assert_eq!(stream.cursor(), 0);
    }

    #[test]
    fn test_lookahead_past_end_is_sentinel() {
        let tokens = sample();
        let stream = TokenStream::new(&tokens);

        assert_eq!(stream.lookahead(3).kind, TokenKind::EOF);
        assert_eq!(stream.lookahead(3).position, Position::null());
        assert_eq!(stream.lookahead(usize::MAX).kind, TokenKind::EOF);
    }

    #[test]
    fn test_advance_is_idempotent_at_end() {
        let tokens = sample();
        let mut stream = TokenStream::new(&tokens);

        assert_eq!(stream.advance().value, "a");
        stream.advance();
        stream.advance();
        assert_eq!(stream.cursor(), 3);
        assert!(!stream.has_tokens());

        assert_eq!(stream.advance().kind, TokenKind::EOF);
        assert_eq!(stream.cursor(), 3);
        assert_eq!(stream.current_token_kind(), TokenKind::EOF);
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = TokenStream::new(&[]);

        assert_eq!(stream.current_token_kind(), TokenKind::EOF);
        stream.advance();
        assert_eq!(stream.cursor(), 0);
    }

    #[test]
    fn test_expect_does_not_consume() {
        let tokens = sample();
        let stream = TokenStream::new(&tokens);

        assert!(stream.expect(TokenKind::Identifier).is_ok());
        assert!(stream.expect(TokenKind::Plus).is_err());
        assert_eq!(stream.cursor(), 0);
    }

    #[test]
    fn test_advance_with_match() {
        let tokens = sample();
        let mut stream = TokenStream::new(&tokens);

        let consumed = stream.advance_with(TokenKind::Identifier).unwrap();
        assert_eq!(consumed.value, "a");
        assert_eq!(stream.current_token_kind(), TokenKind::Plus);
    }

    #[test]
    fn test_advance_with_mismatch_leaves_cursor() {
        let tokens = sample();
        let mut stream = TokenStream::new(&tokens);
        stream.advance();

        let error = stream.advance_with(TokenKind::Semicolon).unwrap_err();
        assert_eq!(error.get_token_kind(), Some(TokenKind::Plus));
        assert_eq!(*error.get_position(), Position::new(1, 3));
        assert_eq!(stream.cursor(), 1);
    }

    #[test]
    fn test_advance_with_at_end_reports_sentinel() {
        let tokens = sample();
        let mut stream = TokenStream::new(&tokens[..1]);
        stream.advance();

        let error = stream.advance_with(TokenKind::Plus).unwrap_err();
        assert_eq!(error.get_token_kind(), Some(TokenKind::EOF));
        assert!(error.get_position().is_null());
    }
}
