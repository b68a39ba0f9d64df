//! Decoding of numeric literal tokens into expression nodes.
//!
//! The scanner has already checked that the suffix is one of the allowed
//! spellings; this module turns the digits into a value of the right width.

use orange_ast::{DoubleExpr, Expression, FloatExpr, IntExpr, UIntExpr};
use orange_scanner::{LexError, Lexeme};

use crate::error::ParseErrorKind;

/// Split a literal into its numeric part and its suffix.
fn split_suffix(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Signedness and bit width named by an integer suffix.
fn integer_suffix(suffix: &str) -> Option<(bool, u8)> {
    match suffix {
        "" | "i64" => Some((true, 64)),
        "i8" => Some((true, 8)),
        "i16" => Some((true, 16)),
        "i32" => Some((true, 32)),
        "u" | "u64" => Some((false, 64)),
        "u8" => Some((false, 8)),
        "u16" => Some((false, 16)),
        "u32" => Some((false, 32)),
        _ => None,
    }
}

fn invalid_suffix(lexeme: &Lexeme) -> ParseErrorKind {
    ParseErrorKind::Lex(LexError::InvalidNumberSuffix {
        text: lexeme.text.clone(),
        range: lexeme.range,
    })
}

/// Decode an `IntLiteral` token. Literals are never negative; a leading `-`
/// is a separate unary operator.
///
/// A signed literal is checked against the positive half of its type, so the
/// most negative value of a width has no literal spelling: `-128i8` and
/// `-9223372036854775808` are out of range. Write `-127i8 - 1i8` instead.
pub fn decode_integer(lexeme: &Lexeme) -> Result<Expression, ParseErrorKind> {
    let (digits, suffix) = split_suffix(&lexeme.text);
    let (signed, size) = integer_suffix(suffix).ok_or_else(|| invalid_suffix(lexeme))?;
    let out_of_range = || ParseErrorKind::IntegerOutOfRange {
        text: lexeme.text.clone(),
        size,
    };

    let value: u64 = digits.parse().map_err(|_| out_of_range())?;
    let max = match (signed, size) {
        (true, size) => (1u64 << (size - 1)) - 1,
        (false, 64) => u64::MAX,
        (false, size) => (1u64 << size) - 1,
    };
    if value > max {
        return Err(out_of_range());
    }

    if signed {
        let value = i64::try_from(value).map_err(|_| out_of_range())?;
        Ok(Expression::Int(IntExpr { value, size }))
    } else {
        Ok(Expression::UInt(UIntExpr { value, size }))
    }
}

/// Decode a `FloatLiteral` token: `f` gives a float, `d` or no suffix a double.
pub fn decode_float(lexeme: &Lexeme) -> Result<Expression, ParseErrorKind> {
    let (digits, suffix) = split_suffix(&lexeme.text);
    match suffix {
        "f" => {
            let value: f32 = digits.parse().map_err(|_| invalid_suffix(lexeme))?;
            Ok(Expression::Float(FloatExpr { value }))
        }
        "" | "d" => {
            let value: f64 = digits.parse().map_err(|_| invalid_suffix(lexeme))?;
            Ok(Expression::Double(DoubleExpr { value }))
        }
        _ => Err(invalid_suffix(lexeme)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orange_ast::TokenKind;
    use orange_core::text::TextRange;

    fn lexeme(kind: TokenKind, text: &str) -> Lexeme {
        Lexeme::new(kind, text, TextRange::new(0, text.len() as u32))
    }

    fn int(text: &str) -> Result<Expression, ParseErrorKind> {
        decode_integer(&lexeme(TokenKind::IntLiteral, text))
    }

    fn float(text: &str) -> Result<Expression, ParseErrorKind> {
        decode_float(&lexeme(TokenKind::FloatLiteral, text))
    }

    #[test]
    fn test_default_integer_is_signed_64() {
        assert_eq!(int("5"), Ok(Expression::Int(IntExpr { value: 5, size: 64 })));
        assert_eq!(int("9223372036854775807"), Ok(Expression::int(i64::MAX)));
    }

    #[test]
    fn test_sized_integers() {
        assert_eq!(int("127i8"), Ok(Expression::Int(IntExpr { value: 127, size: 8 })));
        assert_eq!(int("255u8"), Ok(Expression::UInt(UIntExpr { value: 255, size: 8 })));
        assert_eq!(int("7u"), Ok(Expression::UInt(UIntExpr { value: 7, size: 64 })));
        assert_eq!(
            int("18446744073709551615u64"),
            Ok(Expression::UInt(UIntExpr { value: u64::MAX, size: 64 }))
        );
    }

    #[test]
    fn test_integer_out_of_range() {
        assert_eq!(
            int("128i8"),
            Err(ParseErrorKind::IntegerOutOfRange { text: "128i8".to_string(), size: 8 })
        );
        assert!(matches!(int("256u8"), Err(ParseErrorKind::IntegerOutOfRange { size: 8, .. })));
        assert!(matches!(
            int("99999999999999999999u"),
            Err(ParseErrorKind::IntegerOutOfRange { .. })
        ));
    }

    #[test]
    fn test_minimum_signed_value_has_no_literal() {
        assert_eq!(
            int("9223372036854775808"),
            Err(ParseErrorKind::IntegerOutOfRange {
                text: "9223372036854775808".to_string(),
                size: 64,
            })
        );
        assert!(matches!(int("128i8"), Err(ParseErrorKind::IntegerOutOfRange { size: 8, .. })));
        assert_eq!(int("127i8"), Ok(Expression::Int(IntExpr { value: 127, size: 8 })));
    }

    #[test]
    fn test_floats() {
        assert_eq!(float("2.5f"), Ok(Expression::Float(FloatExpr { value: 2.5 })));
        assert_eq!(float("2.5"), Ok(Expression::Double(DoubleExpr { value: 2.5 })));
        assert_eq!(float("0.125d"), Ok(Expression::Double(DoubleExpr { value: 0.125 })));
    }

    #[test]
    fn test_unknown_suffix_is_reported_as_lex_error() {
        let invalid_suffix = |result: Result<Expression, ParseErrorKind>| {
            matches!(result, Err(ParseErrorKind::Lex(LexError::InvalidNumberSuffix { .. })))
        };
        assert!(invalid_suffix(int("1q")));
        assert!(invalid_suffix(float("1.0u")));
    }
}
