/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node enums and their S-expression rendering
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for declarations, blocks and statements
pub mod ast;
pub mod expressions;
pub mod statements;
