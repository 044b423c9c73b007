use crate::Position;

use super::{ast::Expr, statements::BlockExpr};

/// Binary operator modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,
    And,
    Or,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Lt => "<",
            BinaryOp::Lte => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Gte => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

/// Prefix operator modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub position: Position,
}

/// Reference Expression
/// Represents an identifier in the AST. This includes called functions.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceExpr {
    pub name: String,
    pub position: Position,
}

// OPERATORS

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<Expr>,
    pub position: Position,
}

/// Binary Expression
/// Positioned at its first token, which is an opening `(` when the left
/// operand is grouped.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub target: Box<Expr>,
    pub index: Box<Expr>,
    pub position: Position,
}

// CONTROL FLOW

/// If Expression
/// Usable both as a block step and as an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_block: BlockExpr,
    pub else_branch: Option<ElseBranch>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    Block(BlockExpr),
    If(Box<IfExpr>),
}

impl ElseBranch {
    pub fn position(&self) -> Position {
        match self {
            ElseBranch::Block(block) => block.position,
            ElseBranch::If(if_expr) => if_expr.position,
        }
    }
}
