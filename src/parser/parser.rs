//! Parser entry points.
//!
//! `parse` turns a finished token sequence into a `Unit`. Expressions are
//! handled by a Pratt parser driven by the static operator table in
//! `lookups`; declarations, blocks and loops by recursive descent in `stmt`.
//! Parsing stops at the first syntax error.

use tracing::debug;

use crate::{
    ast::{ast::Expr, statements::Unit},
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_expr, lookups::BindingPower, stmt::parse_decl, stream::TokenStream};

/// Parses a stream of tokens into a `Unit`.
///
/// Each top-level entry must be a `fn` or `var` declaration.
pub fn parse(tokens: &[Token]) -> Result<Unit, Error> {
    debug!(tokens = tokens.len(), "parsing unit");

    let mut stream = TokenStream::new(tokens);
    let result = parse_unit(&mut stream);

    match &result {
        Ok(unit) => debug!(declarations = unit.declarations.len(), "parsed unit"),
        Err(error) => debug!(%error, "syntax error"),
    }

    result
}

pub fn parse_unit(stream: &mut TokenStream) -> Result<Unit, Error> {
    let position = stream.current_token().position;

    let mut declarations = Vec::new();
    while stream.has_tokens() {
        declarations.push(parse_decl(stream)?);
    }

    Ok(Unit {
        declarations,
        position,
    })
}

/// Parses a single expression that must span all of `tokens`.
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, Error> {
    let mut stream = TokenStream::new(tokens);

    let expr = parse_expr(&mut stream, BindingPower::DEFAULT)?;
    stream.expect(TokenKind::EOF)?;

    Ok(expr)
}
