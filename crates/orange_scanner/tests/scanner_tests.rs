//! Scanner integration tests.
//!
//! Verifies that the scanner correctly tokenizes Orange constructs.

use orange_ast::TokenKind;
use orange_core::text::TextRange;
use orange_scanner::{tokenize, CharStream, LexError, Scanner};

/// Helper: scan all tokens from source and return as (kind, text) pairs.
fn scan_all(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .unwrap_or_else(|err| panic!("failed to scan {:?}: {}", source, err))
        .into_iter()
        .map(|l| (l.kind, l.text))
        .collect()
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

fn scan_error(source: &str) -> LexError {
    match tokenize(source) {
        Ok(tokens) => panic!("expected an error for {:?}, got {:?}", source, tokens),
        Err(err) => err,
    }
}

// ============================================================================
// Whitespace and newlines
// ============================================================================

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
}

#[test]
fn test_spaces_and_tabs_only() {
    assert!(scan_all("   \t  \r ").is_empty());
}

#[test]
fn test_newline_is_a_token() {
    assert_eq!(
        scan_all("a\n\nb"),
        vec![
            (TokenKind::Identifier, "a".to_string()),
            (TokenKind::Newline, "\n".to_string()),
            (TokenKind::Newline, "\n".to_string()),
            (TokenKind::Identifier, "b".to_string()),
        ]
    );
}

#[test]
fn test_crlf_is_one_newline() {
    assert_eq!(
        scan_kinds("1\r\n2"),
        vec![TokenKind::IntLiteral, TokenKind::Newline, TokenKind::IntLiteral]
    );
}

#[test]
fn test_line_comment() {
    assert_eq!(scan_kinds("// only a comment"), vec![]);
    assert_eq!(
        scan_kinds("var x // trailing\n"),
        vec![TokenKind::Var, TokenKind::Identifier, TokenKind::Newline]
    );
    // a single slash is still division
    assert_eq!(
        scan_kinds("a / b"),
        vec![TokenKind::Identifier, TokenKind::Divide, TokenKind::Identifier]
    );
}

// ============================================================================
// Keywords and identifiers
// ============================================================================

#[test]
fn test_keywords() {
    assert_eq!(
        scan_kinds("var enum alias package import class this"),
        vec![
            TokenKind::Var,
            TokenKind::Enum,
            TokenKind::Alias,
            TokenKind::Package,
            TokenKind::Import,
            TokenKind::Class,
            TokenKind::This,
        ]
    );
}

#[test]
fn test_type_keywords() {
    assert_eq!(
        scan_kinds("int int8 int16 int32 int64 uint uint8 uint16 uint32 uint64"),
        vec![
            TokenKind::Int,
            TokenKind::Int8,
            TokenKind::Int16,
            TokenKind::Int32,
            TokenKind::Int64,
            TokenKind::UInt,
            TokenKind::UInt8,
            TokenKind::UInt16,
            TokenKind::UInt32,
            TokenKind::UInt64,
        ]
    );
    assert_eq!(
        scan_kinds("float double char bool string void"),
        vec![
            TokenKind::Float,
            TokenKind::Double,
            TokenKind::Char,
            TokenKind::Bool,
            TokenKind::String,
            TokenKind::Void,
        ]
    );
}

#[test]
fn test_identifiers_are_not_keywords() {
    assert_eq!(
        scan_all("func variable int_ x1 naïve"),
        vec![
            (TokenKind::Identifier, "func".to_string()),
            (TokenKind::Identifier, "variable".to_string()),
            (TokenKind::Identifier, "int_".to_string()),
            (TokenKind::Identifier, "x1".to_string()),
            (TokenKind::Identifier, "naïve".to_string()),
        ]
    );
}

#[test]
fn test_keyword_text_is_kept() {
    assert_eq!(scan_all("uint16"), vec![(TokenKind::UInt16, "uint16".to_string())]);
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_shift_left_assign_is_one_token() {
    assert_eq!(scan_all("<<="), vec![(TokenKind::ShiftLeftAssign, "<<=".to_string())]);
    assert_eq!(scan_kinds(">>="), vec![TokenKind::ShiftRightAssign]);
}

#[test]
fn test_less_equal_is_not_split() {
    assert_eq!(scan_kinds("<="), vec![TokenKind::LE]);
    assert_eq!(scan_kinds(">="), vec![TokenKind::GE]);
}

#[test]
fn test_maximal_munch_sequences() {
    assert_eq!(
        scan_kinds("<<<="),
        vec![TokenKind::ShiftLeft, TokenKind::LE]
    );
    assert_eq!(
        scan_kinds("a+++b"),
        vec![TokenKind::Identifier, TokenKind::Increment, TokenKind::Plus, TokenKind::Identifier]
    );
    assert_eq!(scan_kinds("->"), vec![TokenKind::Arrow]);
    assert_eq!(scan_kinds("- >"), vec![TokenKind::Minus, TokenKind::GT]);
}

#[test]
fn test_all_operators() {
    let source = "+ - * / % | & ^ ~ ! ? = == != < > <= >= << >> && || ++ -- \
                  += -= *= /= %= |= &= ^= <<= >>= ->";
    assert_eq!(
        scan_kinds(source),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Times,
            TokenKind::Divide,
            TokenKind::Mod,
            TokenKind::BitOr,
            TokenKind::BitAnd,
            TokenKind::BitXor,
            TokenKind::BitNot,
            TokenKind::LogicalNot,
            TokenKind::Question,
            TokenKind::Assign,
            TokenKind::EQ,
            TokenKind::NEQ,
            TokenKind::LT,
            TokenKind::GT,
            TokenKind::LE,
            TokenKind::GE,
            TokenKind::ShiftLeft,
            TokenKind::ShiftRight,
            TokenKind::LogicalAnd,
            TokenKind::LogicalOr,
            TokenKind::Increment,
            TokenKind::Decrement,
            TokenKind::PlusAssign,
            TokenKind::MinusAssign,
            TokenKind::TimesAssign,
            TokenKind::DivideAssign,
            TokenKind::ModAssign,
            TokenKind::BitOrAssign,
            TokenKind::BitAndAssign,
            TokenKind::BitXorAssign,
            TokenKind::ShiftLeftAssign,
            TokenKind::ShiftRightAssign,
            TokenKind::Arrow,
        ]
    );
}

// ============================================================================
// Numeric literals
// ============================================================================

#[test]
fn test_integer_literals() {
    assert_eq!(scan_all("42"), vec![(TokenKind::IntLiteral, "42".to_string())]);
    assert_eq!(scan_all("42u8"), vec![(TokenKind::IntLiteral, "42u8".to_string())]);
    assert_eq!(
        scan_kinds("1u 1i8 1i16 1i32 1i64 1u16 1u32 1u64"),
        vec![TokenKind::IntLiteral; 8]
    );
}

#[test]
fn test_float_literals() {
    assert_eq!(scan_all("3.14"), vec![(TokenKind::FloatLiteral, "3.14".to_string())]);
    assert_eq!(scan_all("2.5f"), vec![(TokenKind::FloatLiteral, "2.5f".to_string())]);
    assert_eq!(scan_kinds("2.5d"), vec![TokenKind::FloatLiteral]);
}

#[test]
fn test_dot_after_integer_without_digit() {
    assert_eq!(
        scan_kinds("1.x"),
        vec![TokenKind::IntLiteral, TokenKind::Dot, TokenKind::Identifier]
    );
}

#[test]
fn test_invalid_number_suffix() {
    assert_eq!(
        scan_error("12abc"),
        LexError::InvalidNumberSuffix {
            text: "12abc".to_string(),
            range: TextRange::new(0, 5),
        }
    );
    // integer suffixes are not valid on floats
    assert!(matches!(scan_error("1.0u8"), LexError::InvalidNumberSuffix { .. }));
    assert!(matches!(scan_error("3f"), LexError::InvalidNumberSuffix { .. }));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unexpected_character() {
    assert_eq!(
        scan_error("x = @"),
        LexError::UnexpectedCharacter {
            ch: '@',
            range: TextRange::new(4, 5),
        }
    );
    assert!(matches!(scan_error("_x"), LexError::UnexpectedCharacter { ch: '_', .. }));
}

#[test]
fn test_identifiers_hold_only_letters_digits_and_underscore() {
    assert_eq!(
        scan_error("x²"),
        LexError::UnexpectedCharacter {
            ch: '²',
            range: TextRange::new(1, 2),
        }
    );
    assert!(matches!(scan_error("y½"), LexError::UnexpectedCharacter { ch: '½', .. }));
    assert_eq!(
        scan_error("Ⅻ"),
        LexError::UnexpectedCharacter {
            ch: 'Ⅻ',
            range: TextRange::new(0, 1),
        }
    );
    // decimal digits from other scripts still continue an identifier
    assert_eq!(scan_all("x٣"), vec![(TokenKind::Identifier, "x٣".to_string())]);
}

#[test]
fn test_scanner_iterator_collects_until_eof() {
    let lexemes: Vec<_> = Scanner::new("a;b").collect::<Result<_, _>>().unwrap();
    assert_eq!(lexemes.len(), 3);
    assert_eq!(lexemes[1].text, ";");
    assert_eq!(lexemes[2].range, TextRange::new(2, 3));
}

#[test]
fn test_char_stream_public_api() {
    let mut stream = CharStream::new("ab\n");
    assert_eq!(stream.lookahead(2), &['a', 'b']);
    assert_eq!(stream.next(), Some('a'));
    assert_eq!(stream.peek(), Some('b'));
    assert_eq!(stream.pos(), 1);
}
