//! Lexemes produced by the scanner.

use orange_ast::TokenKind;
use orange_core::text::TextRange;

/// A classified chunk of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: TokenKind,
    /// The literal source text. `"\n"` for newlines, empty at end of input.
    pub text: String,
    /// Code-point range in the source unit.
    pub range: TextRange,
}

impl Lexeme {
    pub fn new(kind: TokenKind, text: impl Into<String>, range: TextRange) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
        }
    }

    /// The end-of-input sentinel at a position.
    pub fn end_of_file(pos: u32) -> Self {
        Self::new(TokenKind::EndOfFile, String::new(), TextRange::empty(pos))
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {:?} {:?}", self.kind, self.text, self.range)
    }
}
