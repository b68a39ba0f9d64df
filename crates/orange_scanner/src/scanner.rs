//! The Orange scanner/lexer.
//!
//! Pulls code points from a [`CharStream`] and classifies them into
//! [`Lexeme`]s one call at a time. Newlines are tokens; every other kind of
//! whitespace and `//` comments are dropped.

use crate::char_codes::*;
use crate::char_stream::CharStream;
use crate::error::LexError;
use crate::token::Lexeme;
use orange_ast::token_kind::{TokenKind, OPERATORS};
use orange_core::text::{TextPos, TextRange};
use tracing::trace;

/// The scanner converts Orange source text into lexemes.
pub struct Scanner {
    stream: CharStream,
    /// Set once the iterator has yielded end of input or an error.
    finished: bool,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            stream: CharStream::new(text),
            finished: false,
        }
    }

    #[inline]
    fn pos(&self) -> TextPos {
        self.stream.pos() as TextPos
    }

    /// Skip ignorable space and line comments. Stops in front of a newline.
    fn skip_trivia(&mut self) {
        while let Some(ch) = self.stream.peek() {
            if is_ignorable_space(ch) {
                self.stream.next();
            } else if ch == SLASH && self.stream.peek_at(1) == Some(SLASH) {
                while self.stream.peek().is_some_and(|c| c != LINE_FEED) {
                    self.stream.next();
                }
            } else {
                return;
            }
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan the next lexeme.
    ///
    /// At end of input this returns the `EndOfFile` sentinel, and keeps
    /// returning it on every further call.
    pub fn lex(&mut self) -> Result<Lexeme, LexError> {
        self.skip_trivia();
        let start = self.pos();

        let Some(ch) = self.stream.peek() else {
            return Ok(Lexeme::end_of_file(start));
        };

        let lexeme = if is_digit(ch) {
            self.scan_number(start)?
        } else if is_word_start(ch) {
            self.scan_word(start)
        } else {
            self.scan_operator(start, ch)?
        };

        trace!(kind = ?lexeme.kind, text = %lexeme.text.escape_debug(), pos = start, "lexeme");
        Ok(lexeme)
    }

    /// Consume characters while `pred` holds, appending them to `buf`.
    fn take_while(&mut self, buf: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.stream.peek().filter(|&c| pred(c)) {
            buf.push(ch);
            self.stream.next();
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_number(&mut self, start: TextPos) -> Result<Lexeme, LexError> {
        let mut text = String::new();
        self.take_while(&mut text, is_digit);

        let mut kind = TokenKind::IntLiteral;
        if self.stream.peek() == Some(DOT) && self.stream.peek_at(1).is_some_and(is_digit) {
            kind = TokenKind::FloatLiteral;
            text.push(DOT);
            self.stream.next();
            self.take_while(&mut text, is_digit);
        }

        let digits_len = text.len();
        self.take_while(&mut text, is_identifier_char);
        let range = TextRange::new(start, self.pos());

        let allowed = match kind {
            TokenKind::FloatLiteral => FLOAT_SUFFIXES,
            _ => INTEGER_SUFFIXES,
        };
        if !allowed.contains(&&text[digits_len..]) {
            return Err(LexError::InvalidNumberSuffix { text, range });
        }
        Ok(Lexeme::new(kind, text, range))
    }

    fn scan_word(&mut self, start: TextPos) -> Lexeme {
        let mut text = String::new();
        self.take_while(&mut text, is_identifier_char);
        let kind = TokenKind::from_keyword(&text).unwrap_or(TokenKind::Identifier);
        Lexeme::new(kind, text, TextRange::new(start, self.pos()))
    }

    /// Maximal munch over the operator table, which is ordered longest first.
    fn scan_operator(&mut self, start: TextPos, ch: char) -> Result<Lexeme, LexError> {
        for &(text, kind) in OPERATORS {
            let len = text.chars().count();
            if text.chars().eq(self.stream.lookahead(len).iter().copied()) {
                for _ in 0..len {
                    self.stream.next();
                }
                return Ok(Lexeme::new(kind, text, TextRange::new(start, self.pos())));
            }
        }

        self.stream.next();
        Err(LexError::UnexpectedCharacter {
            ch,
            range: TextRange::new(start, self.pos()),
        })
    }
}

impl Iterator for Scanner {
    type Item = Result<Lexeme, LexError>;

    /// Yields every lexeme before end of input, or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.lex() {
            Ok(lexeme) if lexeme.is_eof() => {
                self.finished = true;
                None
            }
            Ok(lexeme) => Some(Ok(lexeme)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Scan a whole source unit, stopping at the first error.
pub fn tokenize(text: &str) -> Result<Vec<Lexeme>, LexError> {
    Scanner::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        let mut scanner = Scanner::new(text);
        let mut out = Vec::new();
        loop {
            let lexeme = scanner.lex().unwrap();
            if lexeme.is_eof() {
                return out;
            }
            out.push(lexeme.kind);
        }
    }

    #[test]
    fn test_scan_simple_tokens() {
        assert_eq!(
            kinds("( ) { } [ ] ; , : ."),
            vec![
                TokenKind::OpenParen,
                TokenKind::CloseParen,
                TokenKind::OpenCurly,
                TokenKind::CloseCurly,
                TokenKind::OpenBracket,
                TokenKind::CloseBracket,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Dot,
            ]
        );
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.lex().unwrap().kind, TokenKind::Identifier);
        let eof = scanner.lex().unwrap();
        assert!(eof.is_eof());
        assert_eq!(eof.text, "");
        assert_eq!(eof.range, TextRange::empty(1));
        assert!(scanner.lex().unwrap().is_eof());
    }

    #[test]
    fn test_ranges_count_code_points() {
        let tokens = tokenize("é + x").unwrap();
        let ranges: Vec<_> = tokens.iter().map(|l| l.range).collect();
        assert_eq!(ranges, vec![TextRange::new(0, 1), TextRange::new(2, 3), TextRange::new(4, 5)]);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut scanner = Scanner::new("a $ b");
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Err(LexError::UnexpectedCharacter { ch: '$', .. }))));
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_comment_keeps_newline() {
        assert_eq!(
            kinds("a // note\nb"),
            vec![TokenKind::Identifier, TokenKind::Newline, TokenKind::Identifier]
        );
    }
}
