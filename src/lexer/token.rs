//! Token definitions for the Primer language
//!
//! This module defines the token record produced by the lexer and the
//! reserved-word vocabulary shared by the lexer and the parser.

use crate::error::SourceLocation;
use std::fmt;

/// A classified, positioned lexeme.
///
/// Tokens are immutable once produced: the lexer builds them in source order
/// and nothing downstream mutates them. For string literals `text` holds the
/// resolved content — quotes stripped, escape sequences already applied. For
/// every other kind `text` is the exact source substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Position of the token's first character (1-based line and column)
    pub location: SourceLocation,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
}

/// Token classification.
///
/// `Comment` tokens are recognized during scanning but never emitted into the
/// sequence handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    StringLiteral,
    Operator,
    Punctuation,
    Comment,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword => "KEYWORD",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::StringLiteral => "STRING_LITERAL",
            Self::Operator => "OPERATOR",
            Self::Punctuation => "PUNCTUATION",
            Self::Comment => "COMMENT",
        };
        write!(f, "{}", name)
    }
}

/// Reserved words in the Primer language.
///
/// Primer spells its C-like vocabulary with plain English words: the four
/// type names plus the control-flow and return keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Type names
    Whole,    // integer type
    Fraction, // fractional type
    Letter,   // character type
    Text,     // string type

    // Control flow
    Check,     // if
    Otherwise, // else
    Loop,      // while
    Iterate,   // for

    // Return
    Output, // return
}

impl Keyword {
    /// Get keyword from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "whole" => Some(Self::Whole),
            "fraction" => Some(Self::Fraction),
            "letter" => Some(Self::Letter),
            "text" => Some(Self::Text),
            "check" => Some(Self::Check),
            "otherwise" => Some(Self::Otherwise),
            "loop" => Some(Self::Loop),
            "iterate" => Some(Self::Iterate),
            "output" => Some(Self::Output),
            _ => None,
        }
    }

    /// Get string representation of keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::Fraction => "fraction",
            Self::Letter => "letter",
            Self::Text => "text",
            Self::Check => "check",
            Self::Otherwise => "otherwise",
            Self::Loop => "loop",
            Self::Iterate => "iterate",
            Self::Output => "output",
        }
    }

    /// True for the keywords that name a type and may open a variable
    /// declaration (`whole`, `fraction`, `letter`, `text`)
    pub fn is_type_name(&self) -> bool {
        matches!(self, Self::Whole | Self::Fraction | Self::Letter | Self::Text)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
