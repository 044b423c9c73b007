use std::slice::Iter;

use crate::Position;

use super::ast::Expr;

/// The root of a parsed source: its top-level declarations in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub declarations: Vec<Decl>,
    pub position: Position,
}

impl Unit {
    pub fn iter(&self) -> Iter<'_, Decl> {
        self.declarations.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Function(FnDecl),
    Variable(VarDecl),
}

impl Decl {
    pub fn position(&self) -> Position {
        match self {
            Decl::Function(function) => function.position,
            Decl::Variable(variable) => variable.position,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Decl::Function(function) => &function.name,
            Decl::Variable(variable) => &variable.name,
        }
    }
}

/// Parameter names are kept in order; duplicates are left for later passes.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: BlockExpr,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub initializer: Option<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    pub steps: Vec<Step>,
    pub position: Position,
}

impl BlockExpr {
    pub fn iter(&self) -> Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The value the block evaluates to, if it ends in an unterminated expression.
    pub fn trailing(&self) -> Option<&Expr> {
        match self.steps.last() {
            Some(Step::Trailing(expr)) => Some(expr),
            _ => None,
        }
    }
}

/// One entry of a block.
///
/// `Expression` is a statement (terminated by `;`, or an `if` in statement
/// position); `Trailing` is an unterminated final expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Declaration(Decl),
    Assignment(AssignStmt),
    Loop(WhileStmt),
    Expression(Expr),
    Trailing(Expr),
}

impl Step {
    pub fn position(&self) -> Position {
        match self {
            Step::Declaration(decl) => decl.position(),
            Step::Assignment(assign) => assign.position,
            Step::Loop(while_stmt) => while_stmt.position,
            Step::Expression(expr) | Step::Trailing(expr) => expr.position(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: String,
    pub value: Expr,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// `while (cond) { body }`, condition checked before each iteration.
    While,
    /// `do { body } while (cond)`, condition checked after each iteration.
    DoWhile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub mode: LoopMode,
    pub condition: Expr,
    pub body: BlockExpr,
    pub position: Position,
}
