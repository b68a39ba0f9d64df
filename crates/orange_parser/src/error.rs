//! Parse errors.
//!
//! Every failure in the parser, including lexical ones, is returned as a
//! [`ParseError`]. There is no recovery: the first error ends the parse.

use std::fmt;

use orange_ast::TokenKind;
use orange_core::text::TextRange;
use orange_diagnostics::{messages, Diagnostic};
use orange_scanner::LexError;
use thiserror::Error;

/// What a rule was looking for when it rejected a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    Type,
    Expression,
    Identifier,
    UnaryOperator,
    PostfixOperator,
    /// `,` or a newline between enum members.
    MemberSeparator,
    /// A newline, `;` or end of input after a statement.
    StatementEnd,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(TokenKind::Newline) => write!(f, "a newline"),
            Expected::Token(kind) => match kind.punctuation_text() {
                Some(text) => write!(f, "'{}'", text),
                None => write!(f, "'{}'", kind),
            },
            Expected::Type => write!(f, "a type"),
            Expected::Expression => write!(f, "an expression"),
            Expected::Identifier => write!(f, "an identifier"),
            Expected::UnaryOperator => write!(f, "a unary operator"),
            Expected::PostfixOperator => write!(f, "'++' or '--'"),
            Expected::MemberSeparator => write!(f, "',' or a newline"),
            Expected::StatementEnd => write!(f, "a newline or ';'"),
            Expected::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("expected {expected}, found {found} {text:?}")]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        text: String,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: Expected },
    #[error("integer literal {text:?} does not fit in {size} bits")]
    IntegerOutOfRange { text: String, size: u8 },
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: u32 },
}

/// A parse failure, with the grammar rule that rejected the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (in {rule} at {range:?})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub rule: &'static str,
    pub range: TextRange,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, rule: &'static str, range: TextRange) -> Self {
        Self { kind, rule, range }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.range.to_span();
        match &self.kind {
            ParseErrorKind::Lex(err) => err.to_diagnostic(),
            ParseErrorKind::UnexpectedToken { expected, text, .. } => {
                let expected = capitalize(&expected.to_string());
                let found = text.escape_default().to_string();
                Diagnostic::new(
                    &messages::_0_EXPECTED_IN_1_FOUND_2,
                    &[expected.as_str(), self.rule, found.as_str()],
                )
                .with_span(span)
            }
            ParseErrorKind::UnexpectedEndOfInput { expected } => Diagnostic::new(
                &messages::UNEXPECTED_END_OF_INPUT_IN_0_1_EXPECTED,
                &[self.rule, expected.to_string().as_str()],
            )
            .with_span(span),
            ParseErrorKind::IntegerOutOfRange { text, size } => Diagnostic::new(
                &messages::INTEGER_LITERAL_0_DOES_NOT_FIT_IN_1_BITS,
                &[text.as_str(), size.to_string().as_str()],
            )
            .with_span(span),
            ParseErrorKind::NestingTooDeep { limit } => Diagnostic::new(
                &messages::EXPRESSION_NESTING_EXCEEDS_0_LEVELS,
                &[limit.to_string().as_str()],
            )
            .with_span(span),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let range = err.range();
        ParseError::new(ParseErrorKind::Lex(err), "token", range)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
