use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::expressions::{BinaryOp, UnaryOp},
    lexer::tokens::TokenKind,
};

/// Operator strength; higher binds tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct BindingPower(pub u8);

impl BindingPower {
    pub const DEFAULT: BindingPower = BindingPower(0);
    pub const LOGICAL_OR: BindingPower = BindingPower(20);
    pub const LOGICAL_AND: BindingPower = BindingPower(30);
    pub const EQUALITY: BindingPower = BindingPower(40);
    pub const RELATIONAL: BindingPower = BindingPower(50);
    pub const ADDITIVE: BindingPower = BindingPower(60);
    pub const MULTIPLICATIVE: BindingPower = BindingPower(70);
    pub const UNARY: BindingPower = BindingPower(80);
    pub const POSTFIX: BindingPower = BindingPower(90);

    /// Right binding power of a left-associative infix operator.
    pub const fn left_associative(self) -> BindingPower {
        BindingPower(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOp {
    Call,
    Index,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpInfo {
    Prefix {
        token: TokenKind,
        op: UnaryOp,
        bp: BindingPower,
    },
    Infix {
        token: TokenKind,
        op: BinaryOp,
        lbp: BindingPower,
        rbp: BindingPower,
    },
    Postfix {
        token: TokenKind,
        op: PostfixOp,
        bp: BindingPower,
    },
}

const fn prefix(token: TokenKind, op: UnaryOp) -> OpInfo {
    OpInfo::Prefix {
        token,
        op,
        bp: BindingPower::UNARY,
    }
}

const fn infix(token: TokenKind, op: BinaryOp, bp: BindingPower) -> OpInfo {
    OpInfo::Infix {
        token,
        op,
        lbp: bp,
        rbp: bp.left_associative(),
    }
}

const fn postfix(token: TokenKind, op: PostfixOp) -> OpInfo {
    OpInfo::Postfix {
        token,
        op,
        bp: BindingPower::POSTFIX,
    }
}

pub const OPERATOR_TABLE: &[OpInfo] = &[
    // Postfix
    postfix(TokenKind::OpenParen, PostfixOp::Call),
    postfix(TokenKind::OpenBracket, PostfixOp::Index),
    // Unary
    prefix(TokenKind::Not, UnaryOp::Not),
    prefix(TokenKind::Plus, UnaryOp::Plus),
    prefix(TokenKind::Dash, UnaryOp::Minus),
    // Multiplicative and additive
    infix(TokenKind::Star, BinaryOp::Mul, BindingPower::MULTIPLICATIVE),
    infix(TokenKind::Slash, BinaryOp::Div, BindingPower::MULTIPLICATIVE),
    infix(TokenKind::Percent, BinaryOp::Rem, BindingPower::MULTIPLICATIVE),
    infix(TokenKind::Plus, BinaryOp::Add, BindingPower::ADDITIVE),
    infix(TokenKind::Dash, BinaryOp::Sub, BindingPower::ADDITIVE),
    // Relational and equality
    infix(TokenKind::Less, BinaryOp::Lt, BindingPower::RELATIONAL),
    infix(TokenKind::LessEquals, BinaryOp::Lte, BindingPower::RELATIONAL),
    infix(TokenKind::Greater, BinaryOp::Gt, BindingPower::RELATIONAL),
    infix(TokenKind::GreaterEquals, BinaryOp::Gte, BindingPower::RELATIONAL),
    infix(TokenKind::Equals, BinaryOp::Eq, BindingPower::EQUALITY),
    infix(TokenKind::NotEquals, BinaryOp::Neq, BindingPower::EQUALITY),
    // Logical
    infix(TokenKind::And, BinaryOp::And, BindingPower::LOGICAL_AND),
    infix(TokenKind::Or, BinaryOp::Or, BindingPower::LOGICAL_OR),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixInfo {
    pub op: UnaryOp,
    pub bp: BindingPower,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfixInfo {
    pub op: BinaryOp,
    pub lbp: BindingPower,
    pub rbp: BindingPower,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostfixInfo {
    pub op: PostfixOp,
    pub bp: BindingPower,
}

pub type PrefixLookup = HashMap<TokenKind, PrefixInfo>;
pub type InfixLookup = HashMap<TokenKind, InfixInfo>;
pub type PostfixLookup = HashMap<TokenKind, PostfixInfo>;

/// Per-category views of `OPERATOR_TABLE`, keyed by token kind.
#[derive(Default)]
pub struct OperatorLookups {
    prefix_lookup: PrefixLookup,
    infix_lookup: InfixLookup,
    postfix_lookup: PostfixLookup,
}

impl OperatorLookups {
    pub fn prefix(&mut self, kind: TokenKind, op: UnaryOp, bp: BindingPower) {
        let previous = self.prefix_lookup.insert(kind, PrefixInfo { op, bp });
        debug_assert!(previous.is_none(), "duplicate prefix entry for {}", kind);
    }

    pub fn infix(&mut self, kind: TokenKind, op: BinaryOp, lbp: BindingPower, rbp: BindingPower) {
        let previous = self.infix_lookup.insert(kind, InfixInfo { op, lbp, rbp });
        debug_assert!(previous.is_none(), "duplicate infix entry for {}", kind);
    }

    pub fn postfix(&mut self, kind: TokenKind, op: PostfixOp, bp: BindingPower) {
        let previous = self.postfix_lookup.insert(kind, PostfixInfo { op, bp });
        debug_assert!(previous.is_none(), "duplicate postfix entry for {}", kind);
    }
}

pub fn create_operator_lookups(table: &[OpInfo]) -> OperatorLookups {
    let mut lookups = OperatorLookups::default();

    for entry in table {
        match *entry {
            OpInfo::Prefix { token, op, bp } => lookups.prefix(token, op, bp),
            OpInfo::Infix { token, op, lbp, rbp } => lookups.infix(token, op, lbp, rbp),
            OpInfo::Postfix { token, op, bp } => lookups.postfix(token, op, bp),
        }
    }

    lookups
}

lazy_static! {
    static ref LOOKUPS: OperatorLookups = create_operator_lookups(OPERATOR_TABLE);
}

pub fn prefix_op(kind: TokenKind) -> Option<PrefixInfo> {
    LOOKUPS.prefix_lookup.get(&kind).copied()
}

pub fn infix_op(kind: TokenKind) -> Option<InfixInfo> {
    LOOKUPS.infix_lookup.get(&kind).copied()
}

pub fn postfix_op(kind: TokenKind) -> Option<PostfixInfo> {
    LOOKUPS.postfix_lookup.get(&kind).copied()
}
