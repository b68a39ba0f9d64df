//! The Orange parser implementation.
//!
//! A recursive descent parser with one token of lookahead. It pulls lexemes
//! from the scanner on demand and builds an owned AST. The first error ends
//! the parse; nothing partial is returned.

use orange_ast::node::*;
use orange_ast::TokenKind;
use orange_core::text::TextRange;
use orange_scanner::{Lexeme, Scanner};
use tracing::{debug, trace};

use crate::error::{Expected, ParseError, ParseErrorKind};
use crate::literals::{decode_float, decode_integer};
use crate::options::ParserOptions;
use crate::precedence::{get_binary_operator_precedence, OperatorPrecedence};
use crate::utilities::*;

type ParseResult<T> = Result<T, ParseError>;

/// The parser produces AST nodes from Orange source text.
pub struct Parser {
    scanner: Scanner,
    /// The next significant lexeme, once it has been peeked.
    lookahead: Option<Lexeme>,
    options: ParserOptions,
    /// Current expression nesting, bounded by `options.max_depth`.
    recursion_depth: u32,
    /// Open parentheses and argument lists. Newlines are skipped while non-zero.
    paren_depth: u32,
}

impl Parser {
    pub fn new(source_text: &str) -> Self {
        Self::with_options(source_text, ParserOptions::default())
    }

    pub fn with_options(source_text: &str, options: ParserOptions) -> Self {
        Self {
            scanner: Scanner::new(source_text),
            lookahead: None,
            options,
            recursion_depth: 0,
            paren_depth: 0,
        }
    }

    /// Parse a whole source unit into its top-level statements.
    pub fn parse_source_unit(&mut self) -> ParseResult<Vec<Statement>> {
        trace!("parsing source unit");
        let mut statements = Vec::new();
        loop {
            self.skip_separators()?;
            if self.current_token()? == TokenKind::EndOfFile {
                break;
            }
            statements.push(self.parse_statement()?);
            self.expect_statement_end()?;
        }
        debug!(statements = statements.len(), "parsed source unit");
        Ok(statements)
    }

    /// Skip trailing separators and require end of input.
    pub fn expect_end(&mut self) -> ParseResult<()> {
        self.skip_separators()?;
        if self.current_token()? == TokenKind::EndOfFile {
            return Ok(());
        }
        let lexeme = self.next_token()?;
        Err(self.unexpected(&lexeme, Expected::EndOfInput, "source unit"))
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// Take the next significant lexeme, from the lookahead slot if filled.
    fn fill(&mut self) -> ParseResult<Lexeme> {
        loop {
            let lexeme = match self.lookahead.take() {
                Some(lexeme) => lexeme,
                None => self.scanner.lex()?,
            };
            if self.paren_depth > 0 && lexeme.is(TokenKind::Newline) {
                continue;
            }
            return Ok(lexeme);
        }
    }

    fn peek(&mut self) -> ParseResult<&Lexeme> {
        let lexeme = self.fill()?;
        Ok(self.lookahead.insert(lexeme))
    }

    #[inline]
    fn current_token(&mut self) -> ParseResult<TokenKind> {
        Ok(self.peek()?.kind)
    }

    #[inline]
    fn next_token(&mut self) -> ParseResult<Lexeme> {
        self.fill()
    }

    fn optional_token(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.current_token()? == kind {
            self.next_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_token(&mut self, kind: TokenKind, rule: &'static str) -> ParseResult<Lexeme> {
        let lexeme = self.next_token()?;
        if lexeme.is(kind) {
            Ok(lexeme)
        } else {
            Err(self.unexpected(&lexeme, Expected::Token(kind), rule))
        }
    }

    fn expect_identifier(&mut self, rule: &'static str) -> ParseResult<String> {
        let lexeme = self.next_token()?;
        if lexeme.is(TokenKind::Identifier) {
            Ok(lexeme.text)
        } else {
            Err(self.unexpected(&lexeme, Expected::Identifier, rule))
        }
    }

    /// Build the error for a lexeme the rule cannot use.
    fn unexpected(&self, lexeme: &Lexeme, expected: Expected, rule: &'static str) -> ParseError {
        let kind = if lexeme.is_eof() {
            ParseErrorKind::UnexpectedEndOfInput { expected }
        } else {
            ParseErrorKind::UnexpectedToken {
                expected,
                found: lexeme.kind,
                text: lexeme.text.clone(),
            }
        };
        ParseError::new(kind, rule, lexeme.range)
    }

    /// Skip any run of newlines and `;`.
    pub(crate) fn skip_separators(&mut self) -> ParseResult<()> {
        while self.current_token()?.is_statement_separator() {
            self.next_token()?;
        }
        Ok(())
    }

    /// Run `f` one nesting level deeper, failing past the configured limit.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.recursion_depth += 1;
        if self.recursion_depth > self.options.max_depth {
            self.recursion_depth -= 1;
            let range = self.peek()?.range;
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep {
                    limit: self.options.max_depth,
                },
                "expression",
                range,
            ));
        }
        let result = f(self);
        self.recursion_depth -= 1;
        result
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse one statement, without its terminating separator.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        trace!("parsing statement");
        let declaration = match self.current_token()? {
            TokenKind::Enum => Declaration::Enum(self.parse_enum_declaration()?),
            TokenKind::Var => Declaration::Var(self.parse_var_declaration()?),
            TokenKind::Alias => Declaration::Alias(self.parse_alias_declaration()?),
            TokenKind::Package => {
                self.next_token()?;
                let name = self.parse_dotted_name("package declaration")?;
                Declaration::Package(PackageDecl { name })
            }
            TokenKind::Import => {
                self.next_token()?;
                let name = self.parse_dotted_name("import declaration")?;
                Declaration::Import(ImportDecl { name })
            }
            _ => return Ok(Statement::Expression(self.parse_expression()?)),
        };
        Ok(Statement::Declaration(declaration))
    }

    fn expect_statement_end(&mut self) -> ParseResult<()> {
        if is_statement_end(self.current_token()?) {
            return Ok(());
        }
        let lexeme = self.next_token()?;
        Err(self.unexpected(&lexeme, Expected::StatementEnd, "statement"))
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// `enum Name { A, B \n C }`. Separators may repeat and may lead or trail.
    fn parse_enum_declaration(&mut self) -> ParseResult<EnumDecl> {
        const RULE: &str = "enum declaration";
        trace!("parsing {RULE}");
        self.expect_token(TokenKind::Enum, RULE)?;
        let name = self.expect_identifier(RULE)?;
        self.expect_token(TokenKind::OpenCurly, RULE)?;

        let mut members = Vec::new();
        self.skip_member_separators()?;
        while !self.optional_token(TokenKind::CloseCurly)? {
            members.push(self.expect_identifier(RULE)?);

            match self.current_token()? {
                TokenKind::CloseCurly => {}
                kind if is_member_separator(kind) => self.skip_member_separators()?,
                _ => {
                    let lexeme = self.next_token()?;
                    return Err(self.unexpected(&lexeme, Expected::MemberSeparator, RULE));
                }
            }
        }
        Ok(EnumDecl { name, members })
    }

    fn skip_member_separators(&mut self) -> ParseResult<()> {
        while is_member_separator(self.current_token()?) {
            self.next_token()?;
        }
        Ok(())
    }

    /// `var name [: Type] [= Expression]`
    fn parse_var_declaration(&mut self) -> ParseResult<VarDecl> {
        const RULE: &str = "var declaration";
        trace!("parsing {RULE}");
        self.expect_token(TokenKind::Var, RULE)?;
        let name = self.expect_identifier(RULE)?;

        let ty = if self.optional_token(TokenKind::Colon)? {
            Some(self.parse_type()?)
        } else {
            None
        };
        let value = if self.optional_token(TokenKind::Assign)? {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(VarDecl { name, ty, value })
    }

    /// `alias name = Type`
    fn parse_alias_declaration(&mut self) -> ParseResult<AliasDecl> {
        const RULE: &str = "alias declaration";
        trace!("parsing {RULE}");
        self.expect_token(TokenKind::Alias, RULE)?;
        let name = self.expect_identifier(RULE)?;
        self.expect_token(TokenKind::Assign, RULE)?;
        let ty = self.parse_type()?;
        Ok(AliasDecl { name, ty })
    }

    /// `A.B.C`, kept as one string.
    fn parse_dotted_name(&mut self, rule: &'static str) -> ParseResult<String> {
        let mut name = self.expect_identifier(rule)?;
        while self.optional_token(TokenKind::Dot)? {
            name.push('.');
            name.push_str(&self.expect_identifier(rule)?);
        }
        Ok(name)
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// `type := base-type ('*' | '[' ']')*`, suffixes applied left to right.
    pub fn parse_type(&mut self) -> ParseResult<Type> {
        const RULE: &str = "type";
        trace!("parsing {RULE}");
        let lexeme = self.next_token()?;
        let Some(mut ty) = Type::from_token(lexeme.kind, &lexeme.text) else {
            return Err(self.unexpected(&lexeme, Expected::Type, RULE));
        };

        loop {
            match self.current_token()? {
                TokenKind::Times => {
                    self.next_token()?;
                    ty = Type::pointer(ty);
                }
                TokenKind::OpenBracket => {
                    self.next_token()?;
                    self.expect_token(TokenKind::CloseBracket, RULE)?;
                    ty = Type::array(ty);
                }
                _ => return Ok(ty),
            }
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        trace!("parsing expression");
        self.parse_binary_expression(OperatorPrecedence::LOWEST)
    }

    /// Precedence climbing over operators at `min_precedence` or tighter.
    fn parse_binary_expression(
        &mut self,
        min_precedence: OperatorPrecedence,
    ) -> ParseResult<Expression> {
        self.nested(|this| {
            let mut lhs = this.parse_single_expression()?;
            loop {
                let kind = this.current_token()?;
                let precedence = get_binary_operator_precedence(kind);
                if precedence == OperatorPrecedence::Invalid || precedence < min_precedence {
                    return Ok(lhs);
                }
                let Some(operator) = BinaryOperator::from_token(kind) else {
                    return Ok(lhs);
                };
                this.next_token()?;

                let rhs_precedence = if precedence.is_right_associative() {
                    precedence
                } else {
                    precedence.tighter()
                };
                let rhs = this.parse_binary_expression(rhs_precedence)?;
                lhs = Expression::binary(lhs, operator, rhs);
            }
        })
    }

    /// A prefix unary expression or a postfix chain.
    fn parse_single_expression(&mut self) -> ParseResult<Expression> {
        if self.current_token()?.is_unary_operator() {
            self.parse_unary()
        } else {
            self.parse_postfix_expression()
        }
    }

    /// `op single` for one of `- ! ~ & * ++ --`.
    pub fn parse_unary(&mut self) -> ParseResult<Expression> {
        const RULE: &str = "unary expression";
        trace!("parsing {RULE}");
        let lexeme = self.next_token()?;
        let Some(operator) = UnaryOperator::from_token(lexeme.kind) else {
            return Err(self.unexpected(&lexeme, Expected::UnaryOperator, RULE));
        };
        let operand = self.nested(Self::parse_single_expression)?;
        Ok(Expression::unary(operator, UnaryOrder::Prefix, operand))
    }

    /// Wrap an already parsed expression in a postfix `++` or `--`.
    pub fn parse_unary_postfix(&mut self, lhs: Expression) -> ParseResult<Expression> {
        const RULE: &str = "postfix expression";
        trace!("parsing {RULE}");
        let lexeme = self.next_token()?;
        let operator = match lexeme.kind {
            TokenKind::Increment => UnaryOperator::Increment,
            TokenKind::Decrement => UnaryOperator::Decrement,
            _ => return Err(self.unexpected(&lexeme, Expected::PostfixOperator, RULE)),
        };
        Ok(Expression::unary(operator, UnaryOrder::Postfix, lhs))
    }

    fn parse_postfix_expression(&mut self) -> ParseResult<Expression> {
        let mut expr = self.parse_primary_expression()?;
        while is_postfix_continuation(self.current_token()?) {
            expr = match self.current_token()? {
                TokenKind::OpenParen => self.parse_call_expression(expr)?,
                _ => self.parse_unary_postfix(expr)?,
            };
        }
        Ok(expr)
    }

    /// `callee '(' [expr (',' expr)*] ')'`
    fn parse_call_expression(&mut self, callee: Expression) -> ParseResult<Expression> {
        const RULE: &str = "call expression";
        trace!("parsing {RULE}");
        self.expect_token(TokenKind::OpenParen, RULE)?;
        self.paren_depth += 1;

        let mut arguments = Vec::new();
        if self.current_token()? != TokenKind::CloseParen {
            loop {
                arguments.push(self.parse_expression()?);
                if !self.optional_token(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect_token(TokenKind::CloseParen, RULE)?;
        self.paren_depth -= 1;

        Ok(Expression::call(callee, arguments))
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        const RULE: &str = "primary expression";
        let lexeme = self.next_token()?;
        let at = |kind: ParseErrorKind, range: TextRange| ParseError::new(kind, RULE, range);

        match lexeme.kind {
            TokenKind::IntLiteral => decode_integer(&lexeme).map_err(|kind| at(kind, lexeme.range)),
            TokenKind::FloatLiteral => decode_float(&lexeme).map_err(|kind| at(kind, lexeme.range)),
            TokenKind::Identifier => Ok(Expression::NamedId(NamedIdExpr { name: lexeme.text })),
            TokenKind::OpenParen => {
                self.paren_depth += 1;
                let expr = self.parse_expression()?;
                self.expect_token(TokenKind::CloseParen, RULE)?;
                self.paren_depth -= 1;
                Ok(expr)
            }
            _ => Err(self.unexpected(&lexeme, Expected::Expression, RULE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn source(text: &str) -> ParseResult<Vec<Statement>> {
        Parser::new(text).parse_source_unit()
    }

    #[test]
    fn test_lookahead_skips_newlines_only_inside_parens() {
        let mut parser = Parser::new("(\n1\n)\n");
        assert_eq!(parser.parse_expression().unwrap(), Expression::int(1));
        assert_eq!(parser.current_token().unwrap(), TokenKind::Newline);
    }

    #[test]
    fn test_optional_token_does_not_consume_on_mismatch() {
        let mut parser = Parser::new("a:");
        assert!(!parser.optional_token(TokenKind::Colon).unwrap());
        assert_eq!(parser.next_token().unwrap().text, "a");
        assert!(parser.optional_token(TokenKind::Colon).unwrap());
        assert!(parser.peek().unwrap().is_eof());
    }

    #[test]
    fn test_recursion_depth_is_restored() {
        let mut parser = Parser::new("f((1), -(2))");
        parser.parse_expression().unwrap();
        assert_eq!(parser.recursion_depth, 0);
        assert_eq!(parser.paren_depth, 0);
    }

    #[test]
    fn test_nesting_limit() {
        let options = ParserOptions::default().with_max_depth(4);
        let mut parser = Parser::with_options("((((1))))", options);
        let err = parser.parse_expression().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 4 });

        let mut parser = Parser::with_options("((1))", options);
        assert_eq!(parser.parse_expression().unwrap(), Expression::int(1));
    }

    #[test]
    fn test_unary_chain_counts_toward_limit() {
        let options = ParserOptions::default().with_max_depth(3);
        let err = Parser::with_options("- - - -x", options).parse_expression().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NestingTooDeep { .. }));
    }

    #[test]
    fn test_statement_must_end_at_separator() {
        let err = source("var a b").unwrap_err();
        assert_eq!(err.rule, "statement");
        assert!(matches!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: Expected::StatementEnd,
                found: TokenKind::Identifier,
                ..
            }
        ));
        assert_eq!(err.range, TextRange::new(6, 7));
    }

    #[test]
    fn test_unknown_declaration_start_is_an_expression() {
        let err = source("class").unwrap_err();
        assert_eq!(err.rule, "primary expression");
    }
}
