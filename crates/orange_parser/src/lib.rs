//! orange_parser: Recursive descent parser for Orange.
//!
//! Parses the lexemes produced by `orange_scanner` into the owned AST from
//! `orange_ast`. The free functions below parse a complete string; use
//! [`Parser`] directly to parse constructs one at a time.

mod error;
mod literals;
mod options;
mod parser;
mod precedence;
mod utilities;

pub use error::{Expected, ParseError, ParseErrorKind};
pub use options::{ParserOptions, DEFAULT_MAX_DEPTH};
pub use parser::Parser;

use orange_ast::{Expression, Statement, Type};

/// Parse a whole source unit into its top-level statements.
pub fn parse_source(text: &str) -> Result<Vec<Statement>, ParseError> {
    parse_source_with_options(text, ParserOptions::default())
}

pub fn parse_source_with_options(
    text: &str,
    options: ParserOptions,
) -> Result<Vec<Statement>, ParseError> {
    Parser::with_options(text, options).parse_source_unit()
}

/// Parse a string holding exactly one statement, optionally surrounded by separators.
pub fn parse_statement(text: &str) -> Result<Statement, ParseError> {
    let mut parser = Parser::new(text);
    parser.skip_separators()?;
    let statement = parser.parse_statement()?;
    parser.expect_end()?;
    Ok(statement)
}

/// Parse a string holding exactly one expression.
pub fn parse_expression(text: &str) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(text);
    let expr = parser.parse_expression()?;
    parser.expect_end()?;
    Ok(expr)
}

/// Parse a string holding exactly one type.
pub fn parse_type(text: &str) -> Result<Type, ParseError> {
    let mut parser = Parser::new(text);
    let ty = parser.parse_type()?;
    parser.expect_end()?;
    Ok(ty)
}
