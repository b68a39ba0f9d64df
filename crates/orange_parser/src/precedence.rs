//! Operator precedence for binary operators.

use orange_ast::TokenKind;

/// Operator precedence levels, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Assignment = 0,
    LogicalOr = 1,
    LogicalAnd = 2,
    BitwiseOr = 3,
    BitwiseXor = 4,
    BitwiseAnd = 5,
    Equality = 6,
    Relational = 7,
    Shift = 8,
    Additive = 9,
    Multiplicative = 10,
    Invalid = 255,
}

impl OperatorPrecedence {
    /// The lowest level, used to start parsing a full expression.
    pub const LOWEST: OperatorPrecedence = OperatorPrecedence::Assignment;

    /// The next tighter level. Operands of a left-associative operator are
    /// parsed at this level so equal-precedence operators group leftward.
    pub fn tighter(self) -> OperatorPrecedence {
        match self {
            OperatorPrecedence::Assignment => OperatorPrecedence::LogicalOr,
            OperatorPrecedence::LogicalOr => OperatorPrecedence::LogicalAnd,
            OperatorPrecedence::LogicalAnd => OperatorPrecedence::BitwiseOr,
            OperatorPrecedence::BitwiseOr => OperatorPrecedence::BitwiseXor,
            OperatorPrecedence::BitwiseXor => OperatorPrecedence::BitwiseAnd,
            OperatorPrecedence::BitwiseAnd => OperatorPrecedence::Equality,
            OperatorPrecedence::Equality => OperatorPrecedence::Relational,
            OperatorPrecedence::Relational => OperatorPrecedence::Shift,
            OperatorPrecedence::Shift => OperatorPrecedence::Additive,
            OperatorPrecedence::Additive => OperatorPrecedence::Multiplicative,
            OperatorPrecedence::Multiplicative | OperatorPrecedence::Invalid => {
                OperatorPrecedence::Invalid
            }
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == OperatorPrecedence::Assignment
    }
}

/// Get the binary operator precedence for a given token kind.
pub fn get_binary_operator_precedence(kind: TokenKind) -> OperatorPrecedence {
    match kind {
        _ if kind.is_assignment_operator() => OperatorPrecedence::Assignment,
        TokenKind::LogicalOr => OperatorPrecedence::LogicalOr,
        TokenKind::LogicalAnd => OperatorPrecedence::LogicalAnd,
        TokenKind::BitOr => OperatorPrecedence::BitwiseOr,
        TokenKind::BitXor => OperatorPrecedence::BitwiseXor,
        TokenKind::BitAnd => OperatorPrecedence::BitwiseAnd,
        TokenKind::EQ | TokenKind::NEQ => OperatorPrecedence::Equality,
        TokenKind::LT | TokenKind::GT | TokenKind::LE | TokenKind::GE => {
            OperatorPrecedence::Relational
        }
        TokenKind::ShiftLeft | TokenKind::ShiftRight => OperatorPrecedence::Shift,
        TokenKind::Plus | TokenKind::Minus => OperatorPrecedence::Additive,
        TokenKind::Times | TokenKind::Divide | TokenKind::Mod => OperatorPrecedence::Multiplicative,
        _ => OperatorPrecedence::Invalid,
    }
}
