//! # Primer Language Front End
//!
//! The front end of Primer, a small C-like teaching language: it converts
//! source text into lexical tokens and then into an abstract syntax tree
//! (AST). Its contract is purely syntactic — no scoping, no type checking,
//! no execution. Given valid source it produces a structurally faithful
//! tree; given invalid source it fails with a single localized error.
//!
//! ## Architecture
//!
//! The implementation is organized into three modules:
//! - `lexer`: Tokenization of source text
//! - `parser`: Parsing tokens into an Abstract Syntax Tree (AST)
//! - `error`: Error handling and diagnostics
//!
//! The two phases run strictly in sequence: the whole token sequence exists
//! before parsing begins, and the parser never re-invokes the lexer. Each
//! call owns its own cursor state, so both phases are reentrant given fresh
//! inputs.
//!
//! ```
//! use primer_lang::{parse_source, Stmt};
//!
//! let program = parse_source("whole x = 10;").unwrap();
//! assert_eq!(program.declarations.len(), 1);
//! assert!(matches!(program.declarations[0], Stmt::VarDecl { .. }));
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use error::{Diagnostic, FrontendError, FrontendResult, LexError, ParseError, SourceLocation};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse, Expr, Parser, Program, Stmt};

/// Version of the Primer front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run both front-end phases on a source text.
///
/// Tokenizes `source` and parses the resulting sequence into a [`Program`].
/// The first error from either phase aborts the pipeline and is returned as
/// a [`FrontendError`].
pub fn parse_source(source: &str) -> FrontendResult<Program> {
    // Phase 1: lexical analysis
    let tokens = tokenize(source)?;

    // Phase 2: parsing
    let program = parse(tokens)?;

    Ok(program)
}
