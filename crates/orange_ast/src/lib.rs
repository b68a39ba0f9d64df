//! orange_ast: token kinds and Abstract Syntax Tree definitions for Orange.
//!
//! This crate defines the TokenKind enum with its keyword and operator tables,
//! and the closed set of AST node types the parser produces.

pub mod node;
pub mod token_kind;

// Re-export key types
pub use node::*;
pub use token_kind::{TokenKind, OPERATORS};
