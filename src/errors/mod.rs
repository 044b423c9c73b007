//! Error types and error handling for the front end.
//!
//! This module defines the errors produced while turning source text into
//! an AST. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexing and parsing phases
//! - Error formatting and helpful suggestions

pub mod errors;
