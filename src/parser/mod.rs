//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a sequence of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with binding powers for precedence and handles:
//!
//! - Token stream access with lookahead and an end-of-stream sentinel
//! - Declaration parsing (functions, variables)
//! - Block steps, assignments and loops
//! - Expression parsing (prefix, infix and postfix operators, `if`)

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod stream;
