//! Lexical analysis module
//!
//! This module handles tokenization of Primer source text.

pub mod scanner;
pub mod token;

pub use scanner::Lexer;
pub use token::{Keyword, Token, TokenKind};

use crate::error::LexError;

/// Result type for the lexing phase
pub type LexResult<T> = Result<T, LexError>;

/// Tokenize a source text into an ordered token sequence.
///
/// The whole sequence materializes before parsing can begin; the first
/// scanning failure aborts with a [`LexError`] and no partial sequence.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}
