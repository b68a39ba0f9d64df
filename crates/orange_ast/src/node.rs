//! AST node definitions for the Orange language.
//!
//! Types, expressions and declarations are closed sum types. Every node owns
//! its children through `Box` or `Vec`; nothing is shared and nothing points
//! back at its parent. Nodes carry no source positions, so two trees compare
//! equal when they have the same shape.

use crate::token_kind::TokenKind;
use std::fmt;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Int { size: u8, signed: bool },
    Float,
    Double,
    Char,
    Bool,
    Void,
    /// A user-defined type, or the built-in `string`.
    Named(String),
    Pointer(Box<Type>),
    Array(Box<Type>),
}

impl Type {
    pub fn int(size: u8, signed: bool) -> Type {
        Type::Int { size, signed }
    }

    pub fn named(name: impl Into<String>) -> Type {
        Type::Named(name.into())
    }

    pub fn pointer(inner: Type) -> Type {
        Type::Pointer(Box::new(inner))
    }

    pub fn array(inner: Type) -> Type {
        Type::Array(Box::new(inner))
    }

    /// Map a type keyword or identifier token to its base type.
    ///
    /// `text` is only consulted for identifiers.
    pub fn from_token(kind: TokenKind, text: &str) -> Option<Type> {
        if !kind.is_type_start() {
            return None;
        }
        let ty = match kind {
            TokenKind::Float => Type::Float,
            TokenKind::Double => Type::Double,
            TokenKind::Char => Type::Char,
            TokenKind::Bool => Type::Bool,
            TokenKind::Void => Type::Void,
            TokenKind::String => Type::named("string"),
            TokenKind::Identifier => Type::named(text),
            _ => Type::int(kind.integer_size()?, kind.is_signed()),
        };
        Some(ty)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int { size, signed: true } => write!(f, "int{}", size),
            Type::Int { size, signed: false } => write!(f, "uint{}", size),
            Type::Float => write!(f, "float"),
            Type::Double => write!(f, "double"),
            Type::Char => write!(f, "char"),
            Type::Bool => write!(f, "bool"),
            Type::Void => write!(f, "void"),
            Type::Named(name) => write!(f, "{}", name),
            Type::Pointer(inner) => write!(f, "{}*", inner),
            Type::Array(inner) => write!(f, "{}[]", inner),
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Int(IntExpr),
    UInt(UIntExpr),
    Float(FloatExpr),
    Double(DoubleExpr),
    NamedId(NamedIdExpr),
    Unary(UnaryExpr),
    Call(CallExpr),
    Binary(BinaryExpr),
}

/// A signed integer literal. `size` is the bit width named by its suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct IntExpr {
    pub value: i64,
    pub size: u8,
}

/// An unsigned integer literal (`u`, `u8` ... `u64` suffixes).
#[derive(Debug, Clone, PartialEq)]
pub struct UIntExpr {
    pub value: u64,
    pub size: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr {
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoubleExpr {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedIdExpr {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operand: Box<Expression>,
    pub operator: UnaryOperator,
    pub order: UnaryOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expression>,
    /// Empty, never absent, for a call without arguments.
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub lhs: Box<Expression>,
    pub operator: BinaryOperator,
    pub rhs: Box<Expression>,
}

impl Expression {
    /// A 64-bit signed integer literal.
    pub fn int(value: i64) -> Expression {
        Expression::Int(IntExpr { value, size: 64 })
    }

    pub fn named(name: impl Into<String>) -> Expression {
        Expression::NamedId(NamedIdExpr { name: name.into() })
    }

    pub fn unary(operator: UnaryOperator, order: UnaryOrder, operand: Expression) -> Expression {
        Expression::Unary(UnaryExpr {
            operand: Box::new(operand),
            operator,
            order,
        })
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
        Expression::Call(CallExpr {
            callee: Box::new(callee),
            arguments,
        })
    }

    pub fn binary(lhs: Expression, operator: BinaryOperator, rhs: Expression) -> Expression {
        Expression::Binary(BinaryExpr {
            lhs: Box::new(lhs),
            operator,
            rhs: Box::new(rhs),
        })
    }
}

// ============================================================================
// Operators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOrder {
    Prefix,
    Postfix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    LogicalNot,
    BitNot,
    AddressOf,
    Dereference,
    Increment,
    Decrement,
}

impl UnaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<UnaryOperator> {
        match kind {
            TokenKind::Minus => Some(UnaryOperator::Negate),
            TokenKind::LogicalNot => Some(UnaryOperator::LogicalNot),
            TokenKind::BitNot => Some(UnaryOperator::BitNot),
            TokenKind::BitAnd => Some(UnaryOperator::AddressOf),
            TokenKind::Times => Some(UnaryOperator::Dereference),
            TokenKind::Increment => Some(UnaryOperator::Increment),
            TokenKind::Decrement => Some(UnaryOperator::Decrement),
            _ => None,
        }
    }

    /// The operator's source symbol.
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::LogicalNot => "!",
            UnaryOperator::BitNot => "~",
            UnaryOperator::AddressOf => "&",
            UnaryOperator::Dereference => "*",
            UnaryOperator::Increment => "++",
            UnaryOperator::Decrement => "--",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    ShiftLeft,
    ShiftRight,
    BitAnd,
    BitOr,
    BitXor,
    LogicalAnd,
    LogicalOr,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<BinaryOperator> {
        let op = match kind {
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Minus => BinaryOperator::Subtract,
            TokenKind::Times => BinaryOperator::Multiply,
            TokenKind::Divide => BinaryOperator::Divide,
            TokenKind::Mod => BinaryOperator::Modulo,
            TokenKind::ShiftLeft => BinaryOperator::ShiftLeft,
            TokenKind::ShiftRight => BinaryOperator::ShiftRight,
            TokenKind::BitAnd => BinaryOperator::BitAnd,
            TokenKind::BitOr => BinaryOperator::BitOr,
            TokenKind::BitXor => BinaryOperator::BitXor,
            TokenKind::LogicalAnd => BinaryOperator::LogicalAnd,
            TokenKind::LogicalOr => BinaryOperator::LogicalOr,
            TokenKind::LT => BinaryOperator::Less,
            TokenKind::GT => BinaryOperator::Greater,
            TokenKind::LE => BinaryOperator::LessEqual,
            TokenKind::GE => BinaryOperator::GreaterEqual,
            TokenKind::EQ => BinaryOperator::Equal,
            TokenKind::NEQ => BinaryOperator::NotEqual,
            TokenKind::Assign => BinaryOperator::Assign,
            TokenKind::PlusAssign => BinaryOperator::AddAssign,
            TokenKind::MinusAssign => BinaryOperator::SubtractAssign,
            TokenKind::TimesAssign => BinaryOperator::MultiplyAssign,
            TokenKind::DivideAssign => BinaryOperator::DivideAssign,
            TokenKind::ModAssign => BinaryOperator::ModuloAssign,
            TokenKind::BitAndAssign => BinaryOperator::BitAndAssign,
            TokenKind::BitOrAssign => BinaryOperator::BitOrAssign,
            TokenKind::BitXorAssign => BinaryOperator::BitXorAssign,
            TokenKind::ShiftLeftAssign => BinaryOperator::ShiftLeftAssign,
            TokenKind::ShiftRightAssign => BinaryOperator::ShiftRightAssign,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Assign => "=",
            BinaryOperator::AddAssign => "+=",
            BinaryOperator::SubtractAssign => "-=",
            BinaryOperator::MultiplyAssign => "*=",
            BinaryOperator::DivideAssign => "/=",
            BinaryOperator::ModuloAssign => "%=",
            BinaryOperator::BitAndAssign => "&=",
            BinaryOperator::BitOrAssign => "|=",
            BinaryOperator::BitXorAssign => "^=",
            BinaryOperator::ShiftLeftAssign => "<<=",
            BinaryOperator::ShiftRightAssign => ">>=",
        }
    }

    pub fn is_assignment(self) -> bool {
        matches!(
            self,
            BinaryOperator::Assign
                | BinaryOperator::AddAssign
                | BinaryOperator::SubtractAssign
                | BinaryOperator::MultiplyAssign
                | BinaryOperator::DivideAssign
                | BinaryOperator::ModuloAssign
                | BinaryOperator::BitAndAssign
                | BinaryOperator::BitOrAssign
                | BinaryOperator::BitXorAssign
                | BinaryOperator::ShiftLeftAssign
                | BinaryOperator::ShiftRightAssign
        )
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Declarations and statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Enum(EnumDecl),
    Var(VarDecl),
    Alias(AliasDecl),
    Package(PackageDecl),
    Import(ImportDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    /// Members in source order. Duplicates are kept.
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub ty: Option<Type>,
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AliasDecl {
    pub name: String,
    pub ty: Type,
}

/// `package A.B`; the dotted path is stored as written.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDecl {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declaration(Declaration),
    Expression(Expression),
}

impl From<Declaration> for Statement {
    fn from(decl: Declaration) -> Self {
        Statement::Declaration(decl)
    }
}

impl From<Expression> for Statement {
    fn from(expr: Expression) -> Self {
        Statement::Expression(expr)
    }
}
