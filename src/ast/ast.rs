use std::fmt::{Display, Formatter, Result};

use crate::Position;

use super::{
    expressions::{
        BinaryExpr, CallExpr, ElseBranch, IfExpr, IndexExpr, NumberExpr, ReferenceExpr, UnaryExpr,
    },
    statements::{AssignStmt, BlockExpr, Decl, FnDecl, LoopMode, Step, Unit, VarDecl, WhileStmt},
};

/// Expression nodes. Every composite node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Reference(ReferenceExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    Index(IndexExpr),
    If(IfExpr),
}

impl Expr {
    /// Location of the expression's first token.
    pub fn position(&self) -> Position {
        match self {
            Expr::Number(number) => number.position,
            Expr::Reference(reference) => reference.position,
            Expr::Unary(unary) => unary.position,
            Expr::Binary(binary) => binary.position,
            Expr::Call(call) => call.position,
            Expr::Index(index) => index.position,
            Expr::If(if_expr) => if_expr.position,
        }
    }

    /// Whether the expression ends in a block, and so may stand as a
    /// statement without a `;`.
    pub fn is_block_like(&self) -> bool {
        matches!(self, Expr::If(_))
    }
}

// The Display impls below render fully parenthesised S-expressions, so that
// `a + b * c` prints as `(+ a (* b c))`.

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::Reference(reference) => write!(f, "{}", reference.name),
            Expr::Unary(unary) => write!(f, "({} {})", unary.operator.symbol(), unary.operand),
            Expr::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.operator.symbol(),
                binary.left,
                binary.right
            ),
            Expr::Call(call) => {
                write!(f, "(call {}", call.callee)?;
                for argument in &call.arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
            Expr::Index(index) => write!(f, "(index {} {})", index.target, index.index),
            Expr::If(if_expr) => write!(f, "{}", if_expr),
        }
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(if {} {}", self.condition, self.then_block)?;
        match &self.else_branch {
            Some(ElseBranch::Block(block)) => write!(f, " {})", block),
            Some(ElseBranch::If(if_expr)) => write!(f, " {})", if_expr),
            None => write!(f, ")"),
        }
    }
}

impl Display for BlockExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{{")?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", step)?;
        }
        write!(f, "}}")
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Step::Declaration(decl) => write!(f, "{}", decl),
            Step::Assignment(assign) => write!(f, "{}", assign),
            Step::Loop(while_stmt) => write!(f, "{}", while_stmt),
            Step::Expression(expr) => write!(f, "{};", expr),
            Step::Trailing(expr) => write!(f, "{}", expr),
        }
    }
}

impl Display for AssignStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(= {} {})", self.target, self.value)
    }
}

impl Display for WhileStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let keyword = match self.mode {
            LoopMode::While => "while",
            LoopMode::DoWhile => "do-while",
        };
        write!(f, "({} {} {})", keyword, self.condition, self.body)
    }
}

impl Display for FnDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(fn {} ({}) {})", self.name, self.parameters.join(" "), self.body)
    }
}

impl Display for VarDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.initializer {
            Some(initializer) => write!(f, "(var {} {})", self.name, initializer),
            None => write!(f, "(var {})", self.name),
        }
    }
}

impl Display for Decl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Decl::Function(function) => write!(f, "{}", function),
            Decl::Variable(variable) => write!(f, "{}", variable),
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, decl) in self.declarations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", decl)?;
        }
        Ok(())
    }
}
