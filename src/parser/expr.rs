use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, CallExpr, ElseBranch, IfExpr, IndexExpr, NumberExpr, ReferenceExpr,
            UnaryExpr,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Position,
};

use super::{
    lookups::{infix_op, postfix_op, prefix_op, BindingPower, InfixInfo, PostfixInfo, PostfixOp, PrefixInfo},
    stmt::{parse_block, parse_condition},
    stream::TokenStream,
};

/// Parses an expression whose operators all bind at least as tightly as `bp`.
pub fn parse_expr(stream: &mut TokenStream, bp: BindingPower) -> Result<Expr, Error> {
    // Grouping parentheses leave no node, so composite nodes take this instead
    // of their left operand's position
    let start = stream.current_token().position;

    let mut left = match prefix_op(stream.current_token_kind()) {
        Some(prefix) => parse_prefix_expr(stream, prefix)?,
        None => parse_primary_expr(stream)?,
    };

    // Fold operators into `left` until one binds more loosely than `bp`
    loop {
        let token_kind = stream.current_token_kind();

        if let Some(postfix) = postfix_op(token_kind) {
            if postfix.bp < bp {
                break;
            }
            left = parse_postfix_expr(stream, left, postfix, start)?;
            continue;
        }

        match infix_op(token_kind) {
            Some(infix) if infix.lbp >= bp => {
                left = parse_binary_expr(stream, left, infix, start)?;
            }
            _ => break,
        }
    }

    Ok(left)
}

pub fn parse_primary_expr(stream: &mut TokenStream) -> Result<Expr, Error> {
    match stream.current_token_kind() {
        TokenKind::Number => {
            // Rejected number text is a syntax error at the token, which stays current
            let value = stream
                .current_token()
                .value
                .parse::<f64>()
                .map_err(|_| stream.unexpected(None))?;
            let token = stream.advance();

            Ok(Expr::Number(NumberExpr {
                value,
                position: token.position,
            }))
        }
        TokenKind::Identifier => {
            let token = stream.advance();

            Ok(Expr::Reference(ReferenceExpr {
                name: token.value.clone(),
                position: token.position,
            }))
        }
        TokenKind::If => Ok(Expr::If(parse_if_expr(stream)?)),
        TokenKind::OpenParen => parse_grouping_expr(stream),
        _ => Err(stream.unexpected(None)),
    }
}

pub fn parse_prefix_expr(stream: &mut TokenStream, prefix: PrefixInfo) -> Result<Expr, Error> {
    let operator_token = stream.advance();
    let operand = parse_expr(stream, prefix.bp)?;

    Ok(Expr::Unary(UnaryExpr {
        operator: prefix.op,
        operand: Box::new(operand),
        position: operator_token.position,
    }))
}

pub fn parse_binary_expr(
    stream: &mut TokenStream,
    left: Expr,
    infix: InfixInfo,
    start: Position,
) -> Result<Expr, Error> {
    stream.advance();
    let right = parse_expr(stream, infix.rbp)?;

    Ok(Expr::Binary(BinaryExpr {
        operator: infix.op,
        position: start,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_postfix_expr(
    stream: &mut TokenStream,
    left: Expr,
    postfix: PostfixInfo,
    start: Position,
) -> Result<Expr, Error> {
    match postfix.op {
        PostfixOp::Call => parse_call_expr(stream, left, start),
        PostfixOp::Index => parse_index_expr(stream, left, start),
    }
}

/// Parenthesised sub-expression. Leaves no node of its own in the tree.
pub fn parse_grouping_expr(stream: &mut TokenStream) -> Result<Expr, Error> {
    stream.advance_with(TokenKind::OpenParen)?;
    let expr = parse_expr(stream, BindingPower::DEFAULT)?;
    stream.advance_with(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(
    stream: &mut TokenStream,
    callee: Expr,
    start: Position,
) -> Result<Expr, Error> {
    stream.advance_with(TokenKind::OpenParen)?;
    let arguments = parse_separated(stream, TokenKind::CloseParen, |stream| {
        parse_expr(stream, BindingPower::DEFAULT)
    })?;
    stream.advance_with(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        position: start,
        callee: Box::new(callee),
        arguments,
    }))
}

pub fn parse_index_expr(
    stream: &mut TokenStream,
    target: Expr,
    start: Position,
) -> Result<Expr, Error> {
    stream.advance_with(TokenKind::OpenBracket)?;
    let index = parse_expr(stream, BindingPower::DEFAULT)?;
    stream.advance_with(TokenKind::CloseBracket)?;

    Ok(Expr::Index(IndexExpr {
        position: start,
        target: Box::new(target),
        index: Box::new(index),
    }))
}

/// `if (cond) { .. }`, optionally followed by `else { .. }` or `else if ..`.
pub fn parse_if_expr(stream: &mut TokenStream) -> Result<IfExpr, Error> {
    let start = stream.advance_with(TokenKind::If)?.position;

    let condition = parse_condition(stream)?;
    let then_block = parse_block(stream)?;

    let else_branch = if stream.current_token_kind() == TokenKind::Else {
        stream.advance();
        if stream.current_token_kind() == TokenKind::If {
            Some(ElseBranch::If(Box::new(parse_if_expr(stream)?)))
        } else {
            Some(ElseBranch::Block(parse_block(stream)?))
        }
    } else {
        None
    };

    Ok(IfExpr {
        condition: Box::new(condition),
        then_block,
        else_branch,
        position: start,
    })
}

/// Parses `item (, item)*` up to, but not including, `close`. An empty list
/// is allowed; a trailing comma is not.
pub fn parse_separated<'a, T>(
    stream: &mut TokenStream<'a>,
    close: TokenKind,
    mut item: impl FnMut(&mut TokenStream<'a>) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let mut items = Vec::new();

    if stream.current_token_kind() == close {
        return Ok(items);
    }

    loop {
        items.push(item(stream)?);

        if stream.current_token_kind() != TokenKind::Comma {
            break;
        }
        stream.advance();
    }

    Ok(items)
}
