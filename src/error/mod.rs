//! Error handling and diagnostics for the Primer front end
//!
//! Both front-end phases fail fast: the first error aborts the phase and is
//! surfaced to the caller as a typed value. No partial token list or partial
//! tree is ever returned, and no recovery is attempted.

use std::fmt;

use crate::lexer::TokenKind;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for operations spanning both front-end phases
pub type FrontendResult<T> = Result<T, FrontendError>;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl SourceLocation {
    /// Create a source location
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors raised while scanning source text.
///
/// Each variant records the position where the failing construct began, not
/// where the scanner gave up — an unterminated string is reported at its
/// opening quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// End of input before the closing `"` of a string literal
    UnterminatedString { location: SourceLocation },
    /// End of input before the `!)` closing a block comment
    UnterminatedComment { location: SourceLocation },
    /// A character that starts no token at all
    UnknownSymbol { symbol: char, location: SourceLocation },
}

impl LexError {
    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::UnterminatedString { .. } => "unterminated string literal".to_string(),
            Self::UnterminatedComment { .. } => "unterminated block comment".to_string(),
            Self::UnknownSymbol { symbol, .. } => format!("unknown symbol '{}'", symbol),
        }
    }

    /// Get the source location where the failing construct began
    pub fn location(&self) -> SourceLocation {
        match self {
            Self::UnterminatedString { location }
            | Self::UnterminatedComment { location }
            | Self::UnknownSymbol { location, .. } => *location,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message(), self.location())
    }
}

impl std::error::Error for LexError {}

/// Errors raised while parsing the token sequence.
///
/// `found: None` means the token sequence ran out; the location then falls
/// back to the last token of the sequence so every error stays localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A specific token text was required but absent or mismatched
    ExpectedValue {
        expected: String,
        found: Option<String>,
        location: SourceLocation,
    },
    /// A specific token kind was required but absent or mismatched
    ExpectedKind {
        expected: TokenKind,
        found: Option<TokenKind>,
        location: SourceLocation,
    },
    /// No expression production matches the current token
    UnexpectedToken {
        found: Option<String>,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::ExpectedValue { expected, found, .. } => match found {
                Some(text) => format!("expected '{}' but found '{}'", expected, text),
                None => format!("expected '{}' but found end of input", expected),
            },
            Self::ExpectedKind { expected, found, .. } => match found {
                Some(kind) => format!("expected {} but found {}", expected, kind),
                None => format!("expected {} but found end of input", expected),
            },
            Self::UnexpectedToken { found, .. } => match found {
                Some(text) => format!("unexpected token '{}'", text),
                None => "unexpected end of input".to_string(),
            },
        }
    }

    /// Get the source location of the offending token
    pub fn location(&self) -> SourceLocation {
        match self {
            Self::ExpectedValue { location, .. }
            | Self::ExpectedKind { location, .. }
            | Self::UnexpectedToken { location, .. } => *location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message(), self.location())
    }
}

impl std::error::Error for ParseError {}

/// Umbrella error covering both front-end phases.
///
/// The driver and [`Diagnostic`] render errors through this type so that both
/// phases report uniformly: kind, message, position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendError {
    Lex(LexError),
    Parse(ParseError),
}

impl FrontendError {
    /// Get the error kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lex(_) => "Lexer Error",
            Self::Parse(_) => "Parse Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::Lex(error) => error.message(),
            Self::Parse(error) => error.message(),
        }
    }

    /// Get the source location the error points at
    pub fn location(&self) -> SourceLocation {
        match self {
            Self::Lex(error) => error.location(),
            Self::Parse(error) => error.location(),
        }
    }
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.kind(), self.message(), self.location())
    }
}

impl std::error::Error for FrontendError {}

impl From<LexError> for FrontendError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for FrontendError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}
