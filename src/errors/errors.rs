use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The kind of the offending token, for errors raised by the parser.
    pub fn get_token_kind(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } => Some(*found),
            ErrorImpl::UnrecognisedToken { .. } => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "SyntaxError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken {
                found: TokenKind::EOF,
                expected,
                ..
            } => match expected {
                Some(expected) => ErrorTip::Suggestion(format!(
                    "Input ended early, expected {}",
                    expected
                )),
                None => ErrorTip::Suggestion(String::from(
                    "Input ended early, expected an expression",
                )),
            },
            ErrorImpl::UnexpectedToken {
                expected: Some(TokenKind::Semicolon),
                value,
                ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                value
            )),
            ErrorImpl::UnexpectedToken {
                expected: Some(expected),
                value,
                ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                value, expected
            )),
            ErrorImpl::UnexpectedToken {
                expected: None,
                value,
                ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, it does not start an expression or declaration",
                value
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("{}", unexpected_message(.found, .value, .expected))]
    UnexpectedToken {
        found: TokenKind,
        value: String,
        expected: Option<TokenKind>,
    },
}

fn unexpected_message(found: &TokenKind, value: &str, expected: &Option<TokenKind>) -> String {
    let found = match found {
        TokenKind::Identifier | TokenKind::Number => format!("{} `{}`", found, value),
        _ => found.to_string(),
    };

    match expected {
        Some(expected) => format!("expected {}, found {}", expected, found),
        None => format!("unexpected token {}", found),
    }
}
