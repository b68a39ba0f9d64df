//! Parser utility functions.

use orange_ast::TokenKind;

/// Tokens that may follow a complete statement.
pub fn is_statement_end(kind: TokenKind) -> bool {
    kind.is_statement_separator() || kind == TokenKind::EndOfFile
}

/// Tokens allowed between enum members.
pub fn is_member_separator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Comma | TokenKind::Newline)
}

/// Tokens that continue a postfix expression: a call or `++`/`--`.
pub fn is_postfix_continuation(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::OpenParen | TokenKind::Increment | TokenKind::Decrement)
}
