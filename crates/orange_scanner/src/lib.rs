//! orange_scanner: Lexer/tokenizer for Orange source code.
//!
//! The scanner is pull-based: each call to [`Scanner::lex`] consumes just
//! enough characters for one lexeme. It handles:
//! - Keywords and Unicode identifiers
//! - Maximal-munch operators and punctuation
//! - Integer and float literals with width suffixes
//! - Significant newlines

mod char_codes;
mod char_stream;
mod error;
mod scanner;
mod token;

pub use char_stream::CharStream;
pub use error::LexError;
pub use scanner::{tokenize, Scanner};
pub use token::Lexeme;
