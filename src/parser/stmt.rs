use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        statements::{AssignStmt, BlockExpr, Decl, FnDecl, LoopMode, Step, VarDecl, WhileStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_if_expr, parse_separated},
    lookups::BindingPower,
    stream::TokenStream,
};

/// Parses a `fn` or `var` declaration; anything else is a syntax error.
pub fn parse_decl(stream: &mut TokenStream) -> Result<Decl, Error> {
    trace!(token = ?stream.current_token_kind(), position = %stream.current_token().position, "declaration");

    match stream.current_token_kind() {
        TokenKind::Fn => Ok(Decl::Function(parse_fn_decl(stream)?)),
        TokenKind::Var => Ok(Decl::Variable(parse_var_decl(stream)?)),
        _ => Err(stream.unexpected(None)),
    }
}

pub fn parse_fn_decl(stream: &mut TokenStream) -> Result<FnDecl, Error> {
    let start = stream.advance_with(TokenKind::Fn)?.position;

    let name = stream.advance_with(TokenKind::Identifier)?.value.clone();

    stream.advance_with(TokenKind::OpenParen)?;
    let parameters = parse_separated(stream, TokenKind::CloseParen, |stream| {
        Ok(stream.advance_with(TokenKind::Identifier)?.value.clone())
    })?;
    stream.advance_with(TokenKind::CloseParen)?;

    let body = parse_block(stream)?;

    Ok(FnDecl {
        name,
        parameters,
        body,
        position: start,
    })
}

pub fn parse_var_decl(stream: &mut TokenStream) -> Result<VarDecl, Error> {
    let start = stream.advance_with(TokenKind::Var)?.position;

    let name = stream.advance_with(TokenKind::Identifier)?.value.clone();

    let initializer = if stream.current_token_kind() == TokenKind::Assignment {
        stream.advance();
        Some(parse_expr(stream, BindingPower::DEFAULT)?)
    } else {
        None
    };

    stream.advance_with(TokenKind::Semicolon)?;

    Ok(VarDecl {
        name,
        initializer,
        position: start,
    })
}

pub fn parse_block(stream: &mut TokenStream) -> Result<BlockExpr, Error> {
    let start = stream.advance_with(TokenKind::OpenCurly)?.position;

    let mut steps = Vec::new();
    while !matches!(stream.current_token_kind(), TokenKind::CloseCurly | TokenKind::EOF) {
        steps.push(parse_step(stream)?);
    }

    stream.advance_with(TokenKind::CloseCurly)?;

    Ok(BlockExpr {
        steps,
        position: start,
    })
}

/// Classifies the next block entry by its first token (and, for an
/// identifier, the one after it).
pub fn parse_step(stream: &mut TokenStream) -> Result<Step, Error> {
    trace!(token = ?stream.current_token_kind(), position = %stream.current_token().position, "step");

    match stream.current_token_kind() {
        TokenKind::Fn | TokenKind::Var => Ok(Step::Declaration(parse_decl(stream)?)),
        TokenKind::While | TokenKind::Do => Ok(Step::Loop(parse_while_stmt(stream)?)),
        TokenKind::Identifier if stream.lookahead(1).kind == TokenKind::Assignment => {
            Ok(Step::Assignment(parse_assignment_stmt(stream)?))
        }
        // In statement position an `if` ends at its last block
        TokenKind::If => {
            let expr = Expr::If(parse_if_expr(stream)?);
            finish_expression_step(stream, expr)
        }
        _ => {
            let expr = parse_expr(stream, BindingPower::DEFAULT)?;
            finish_expression_step(stream, expr)
        }
    }
}

fn finish_expression_step(stream: &mut TokenStream, expr: Expr) -> Result<Step, Error> {
    match stream.current_token_kind() {
        TokenKind::Semicolon => {
            stream.advance();
            Ok(Step::Expression(expr))
        }
        TokenKind::CloseCurly => Ok(Step::Trailing(expr)),
        _ if expr.is_block_like() => Ok(Step::Expression(expr)),
        _ => Err(stream.unexpected(Some(TokenKind::Semicolon))),
    }
}

pub fn parse_assignment_stmt(stream: &mut TokenStream) -> Result<AssignStmt, Error> {
    let target = stream.advance_with(TokenKind::Identifier)?;
    stream.advance_with(TokenKind::Assignment)?;

    let value = parse_expr(stream, BindingPower::DEFAULT)?;

    stream.advance_with(TokenKind::Semicolon)?;

    Ok(AssignStmt {
        target: target.value.clone(),
        value,
        position: target.position,
    })
}

/// `while (cond) { .. }` or `do { .. } while (cond)`, the latter with an
/// optional trailing `;`.
pub fn parse_while_stmt(stream: &mut TokenStream) -> Result<WhileStmt, Error> {
    let start = stream.current_token().position;

    match stream.current_token_kind() {
        TokenKind::While => {
            stream.advance();
            let condition = parse_condition(stream)?;
            let body = parse_block(stream)?;

            Ok(WhileStmt {
                mode: LoopMode::While,
                condition,
                body,
                position: start,
            })
        }
        TokenKind::Do => {
            stream.advance();
            let body = parse_block(stream)?;
            stream.advance_with(TokenKind::While)?;
            let condition = parse_condition(stream)?;

            if stream.current_token_kind() == TokenKind::Semicolon {
                stream.advance();
            }

            Ok(WhileStmt {
                mode: LoopMode::DoWhile,
                condition,
                body,
                position: start,
            })
        }
        _ => Err(stream.unexpected(Some(TokenKind::While))),
    }
}

/// A parenthesised condition, as taken by `if` and both loop forms.
pub fn parse_condition(stream: &mut TokenStream) -> Result<Expr, Error> {
    stream.advance_with(TokenKind::OpenParen)?;
    let condition = parse_expr(stream, BindingPower::DEFAULT)?;
    stream.advance_with(TokenKind::CloseParen)?;

    Ok(condition)
}
