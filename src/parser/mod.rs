//! Parser module
//!
//! This module handles parsing a token sequence into an Abstract Syntax
//! Tree (AST).

pub mod ast;
pub mod parser;

pub use ast::{Block, Expr, Parameter, Program, Stmt};
pub use parser::Parser;

use crate::error::ParseError;
use crate::lexer::Token;

/// Result type for the parsing phase
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse a token sequence into a program AST.
///
/// Expects the complete output of [`crate::lexer::tokenize`]; the parser
/// never re-invokes the lexer. The first failure aborts with a
/// [`ParseError`] and no partial tree.
pub fn parse(tokens: Vec<Token>) -> ParseResult<Program> {
    Parser::new(tokens).parse()
}
