//! Lexical errors.

use orange_core::text::TextRange;
use orange_diagnostics::{messages, Diagnostic};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character {ch:?} at {range:?}")]
    UnexpectedCharacter { ch: char, range: TextRange },
    #[error("invalid suffix on numeric literal {text:?} at {range:?}")]
    InvalidNumberSuffix { text: String, range: TextRange },
}

impl LexError {
    pub fn range(&self) -> TextRange {
        match self {
            LexError::UnexpectedCharacter { range, .. } => *range,
            LexError::InvalidNumberSuffix { range, .. } => *range,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = match self {
            LexError::UnexpectedCharacter { ch, .. } => {
                let text = ch.escape_default().to_string();
                Diagnostic::new(&messages::UNEXPECTED_CHARACTER_0, &[text.as_str()])
            }
            LexError::InvalidNumberSuffix { text, .. } => {
                let suffix = number_suffix(text);
                Diagnostic::new(
                    &messages::INVALID_SUFFIX_1_ON_NUMERIC_LITERAL_0,
                    &[text.as_str(), suffix],
                )
            }
        };
        diag.with_span(self.range().to_span())
    }
}

/// The trailing run after the digits (and optional fraction) of a literal.
pub(crate) fn number_suffix(text: &str) -> &str {
    let int_end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    let rest = &text[int_end..];
    let fraction = rest
        .strip_prefix('.')
        .filter(|frac| frac.starts_with(|c: char| c.is_ascii_digit()));
    match fraction {
        Some(frac) => {
            let frac_end = frac.find(|c: char| !c.is_ascii_digit()).unwrap_or(frac.len());
            &frac[frac_end..]
        }
        None => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orange_core::text::TextSpan;

    #[test]
    fn test_number_suffix() {
        assert_eq!(number_suffix("42"), "");
        assert_eq!(number_suffix("42u8"), "u8");
        assert_eq!(number_suffix("1.5f"), "f");
        assert_eq!(number_suffix("7xyz"), "xyz");
    }

    #[test]
    fn test_to_diagnostic() {
        let err = LexError::UnexpectedCharacter {
            ch: '$',
            range: TextRange::new(4, 5),
        };
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, 1001);
        assert_eq!(diag.span, Some(TextSpan::new(4, 1)));
        assert_eq!(diag.message_text, "Unexpected character '$'.");

        let err = LexError::InvalidNumberSuffix {
            text: "12q".to_string(),
            range: TextRange::new(0, 3),
        };
        assert_eq!(
            err.to_diagnostic().message_text,
            "Invalid suffix 'q' on numeric literal '12q'."
        );
    }
}
