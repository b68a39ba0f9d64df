//! TokenKind enum - every lexical token kind of the Orange language.
//!
//! Also holds the two static classification tables the scanner consults:
//! the keyword table ([`TokenKind::from_keyword`]) and the operator table
//! ([`OPERATORS`]).

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // ========================================================================
    // Special
    // ========================================================================
    /// Sentinel returned once the input is exhausted.
    EndOfFile,
    Identifier,
    IntLiteral,
    FloatLiteral,

    // ========================================================================
    // Primitive type keywords
    // ========================================================================
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    Char,
    Bool,
    String,
    Void,

    // ========================================================================
    // Structural keywords
    // ========================================================================
    Var,
    Enum,
    Alias,
    Class,
    Public,
    Protected,
    Private,
    If,
    Elif,
    Else,
    For,
    While,
    Do,
    Break,
    Continue,
    Def,
    Extern,
    Interface,
    Package,
    Import,
    New,
    Delete,
    Get,
    Set,
    Virtual,
    Final,
    Where,
    Data,
    Extend,
    Const,
    Try,
    Catch,
    Finally,
    Throw,
    Of,
    Property,
    This,

    // ========================================================================
    // Punctuation
    // ========================================================================
    Newline,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Dot,
    Comma,
    Colon,
    Question,
    Arrow,

    // ========================================================================
    // Operators
    // ========================================================================
    Plus,
    Minus,
    Times,
    Divide,
    Mod,
    BitOr,
    BitAnd,
    BitXor,
    BitNot,
    LogicalNot,
    LogicalOr,
    LogicalAnd,
    ShiftLeft,
    ShiftRight,
    Increment,
    Decrement,
    LT,
    GT,
    LE,
    GE,
    EQ,
    NEQ,

    // ========================================================================
    // Assignments
    // ========================================================================
    Assign,
    PlusAssign,
    MinusAssign,
    TimesAssign,
    DivideAssign,
    ModAssign,
    BitOrAssign,
    BitAndAssign,
    BitXorAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
}

/// Operator and punctuation spellings, longest first.
///
/// The scanner walks this table in order and takes the first entry whose
/// text matches the upcoming characters, which yields maximal munch.
pub static OPERATORS: &[(&str, TokenKind)] = &[
    ("<<=", TokenKind::ShiftLeftAssign),
    (">>=", TokenKind::ShiftRightAssign),
    ("->", TokenKind::Arrow),
    ("||", TokenKind::LogicalOr),
    ("&&", TokenKind::LogicalAnd),
    ("==", TokenKind::EQ),
    ("!=", TokenKind::NEQ),
    ("<=", TokenKind::LE),
    (">=", TokenKind::GE),
    ("<<", TokenKind::ShiftLeft),
    (">>", TokenKind::ShiftRight),
    ("+=", TokenKind::PlusAssign),
    ("-=", TokenKind::MinusAssign),
    ("/=", TokenKind::DivideAssign),
    ("*=", TokenKind::TimesAssign),
    ("%=", TokenKind::ModAssign),
    ("|=", TokenKind::BitOrAssign),
    ("&=", TokenKind::BitAndAssign),
    ("^=", TokenKind::BitXorAssign),
    ("++", TokenKind::Increment),
    ("--", TokenKind::Decrement),
    ("\n", TokenKind::Newline),
    (";", TokenKind::Semicolon),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    (".", TokenKind::Dot),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
    ("!", TokenKind::LogicalNot),
    ("?", TokenKind::Question),
    ("<", TokenKind::LT),
    (">", TokenKind::GT),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("/", TokenKind::Divide),
    ("*", TokenKind::Times),
    ("%", TokenKind::Mod),
    ("|", TokenKind::BitOr),
    ("&", TokenKind::BitAnd),
    ("^", TokenKind::BitXor),
    ("~", TokenKind::BitNot),
    ("=", TokenKind::Assign),
];

impl TokenKind {
    /// Look up a keyword TokenKind from text.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "int" => Some(TokenKind::Int),
            "int8" => Some(TokenKind::Int8),
            "int16" => Some(TokenKind::Int16),
            "int32" => Some(TokenKind::Int32),
            "int64" => Some(TokenKind::Int64),
            "uint" => Some(TokenKind::UInt),
            "uint8" => Some(TokenKind::UInt8),
            "uint16" => Some(TokenKind::UInt16),
            "uint32" => Some(TokenKind::UInt32),
            "uint64" => Some(TokenKind::UInt64),
            "float" => Some(TokenKind::Float),
            "double" => Some(TokenKind::Double),
            "char" => Some(TokenKind::Char),
            "bool" => Some(TokenKind::Bool),
            "string" => Some(TokenKind::String),
            "void" => Some(TokenKind::Void),
            "var" => Some(TokenKind::Var),
            "enum" => Some(TokenKind::Enum),
            "alias" => Some(TokenKind::Alias),
            "class" => Some(TokenKind::Class),
            "public" => Some(TokenKind::Public),
            "protected" => Some(TokenKind::Protected),
            "private" => Some(TokenKind::Private),
            "if" => Some(TokenKind::If),
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            "for" => Some(TokenKind::For),
            "while" => Some(TokenKind::While),
            "do" => Some(TokenKind::Do),
            "break" => Some(TokenKind::Break),
            "continue" => Some(TokenKind::Continue),
            "def" => Some(TokenKind::Def),
            "extern" => Some(TokenKind::Extern),
            "interface" => Some(TokenKind::Interface),
            "package" => Some(TokenKind::Package),
            "import" => Some(TokenKind::Import),
            "new" => Some(TokenKind::New),
            "delete" => Some(TokenKind::Delete),
            "get" => Some(TokenKind::Get),
            "set" => Some(TokenKind::Set),
            "virtual" => Some(TokenKind::Virtual),
            "final" => Some(TokenKind::Final),
            "where" => Some(TokenKind::Where),
            "data" => Some(TokenKind::Data),
            "extend" => Some(TokenKind::Extend),
            "const" => Some(TokenKind::Const),
            "try" => Some(TokenKind::Try),
            "catch" => Some(TokenKind::Catch),
            "finally" => Some(TokenKind::Finally),
            "throw" => Some(TokenKind::Throw),
            "of" => Some(TokenKind::Of),
            "property" => Some(TokenKind::Property),
            "this" => Some(TokenKind::This),
            _ => None,
        }
    }

    /// Get the operator or punctuation text for this kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        OPERATORS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(text, _)| *text)
    }

    /// Whether this is one of the sixteen primitive type keywords.
    pub fn is_primitive_type(self) -> bool {
        self >= TokenKind::Int && self <= TokenKind::Void
    }

    /// Whether a type may begin with this token.
    pub fn is_type_start(self) -> bool {
        self.is_primitive_type() || self == TokenKind::Identifier
    }

    /// Bit width of an integer type keyword. Unsized `int`/`uint` are 64-bit.
    pub fn integer_size(self) -> Option<u8> {
        match self {
            TokenKind::Int8 | TokenKind::UInt8 => Some(8),
            TokenKind::Int16 | TokenKind::UInt16 => Some(16),
            TokenKind::Int32 | TokenKind::UInt32 => Some(32),
            TokenKind::Int | TokenKind::Int64 | TokenKind::UInt | TokenKind::UInt64 => Some(64),
            _ => None,
        }
    }

    /// Whether an integer type keyword is signed. False for every other kind.
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Int8
                | TokenKind::Int16
                | TokenKind::Int32
                | TokenKind::Int64
        )
    }

    /// Tokens that may start a prefix unary expression.
    pub fn is_unary_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Minus
                | TokenKind::LogicalNot
                | TokenKind::BitNot
                | TokenKind::BitAnd
                | TokenKind::Times
                | TokenKind::Increment
                | TokenKind::Decrement
        )
    }

    /// Tokens that separate top-level statements.
    pub fn is_statement_separator(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Semicolon)
    }

    pub fn is_assignment_operator(self) -> bool {
        self >= TokenKind::Assign && self <= TokenKind::ShiftRightAssign
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_table_is_longest_first() {
        let lengths: Vec<usize> = OPERATORS.iter().map(|(text, _)| text.chars().count()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]), "{:?}", lengths);
        assert!(lengths.iter().all(|&len| (1..=3).contains(&len)));
    }

    #[test]
    fn test_operator_table_has_no_duplicates() {
        for (i, (text, kind)) in OPERATORS.iter().enumerate() {
            for (other_text, other_kind) in &OPERATORS[i + 1..] {
                assert_ne!(text, other_text);
                assert_ne!(kind, other_kind);
            }
        }
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::from_keyword("uint16"), Some(TokenKind::UInt16));
        assert_eq!(TokenKind::from_keyword("alias"), Some(TokenKind::Alias));
        assert_eq!(TokenKind::from_keyword("this"), Some(TokenKind::This));
        assert_eq!(TokenKind::from_keyword("Int"), None);
        assert_eq!(TokenKind::from_keyword("return"), None);
    }

    #[test]
    fn test_classification() {
        assert!(TokenKind::Void.is_primitive_type());
        assert!(TokenKind::Identifier.is_type_start());
        assert!(!TokenKind::Var.is_type_start());
        assert!(TokenKind::ShiftLeftAssign.is_assignment_operator());
        assert!(!TokenKind::EQ.is_assignment_operator());
    }

    #[test]
    fn test_integer_sizes() {
        assert_eq!(TokenKind::Int.integer_size(), Some(64));
        assert_eq!(TokenKind::UInt.integer_size(), Some(64));
        assert_eq!(TokenKind::Int8.integer_size(), Some(8));
        assert_eq!(TokenKind::UInt32.integer_size(), Some(32));
        assert_eq!(TokenKind::Char.integer_size(), None);
        assert!(TokenKind::Int16.is_signed());
        assert!(!TokenKind::UInt16.is_signed());
    }

    #[test]
    fn test_punctuation_text() {
        assert_eq!(TokenKind::ShiftLeftAssign.punctuation_text(), Some("<<="));
        assert_eq!(TokenKind::Newline.punctuation_text(), Some("\n"));
        assert_eq!(TokenKind::Var.punctuation_text(), None);
    }
}
