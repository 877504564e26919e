//! Lexer implementation for the Primer language
//!
//! This module implements lexical analysis, converting source text into
//! tokens in a single left-to-right pass.

use super::token::{Keyword, Token, TokenKind};
use super::LexResult;
use crate::error::{LexError, SourceLocation};

/// Lexer for Primer source text.
///
/// The cursor tracks a 1-based line and column alongside the character
/// offset; `advance` is the only place position bookkeeping happens, so every
/// scan path stays in sync across newlines.
///
/// One dispatch rule is easy to miss: `(!` opens a block comment wherever a
/// token could start, even where `(` punctuation would otherwise be expected,
/// and `!` on its own is not a token at all.
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the source text.
    ///
    /// Consumes the lexer and returns the tokens in source order. Comments
    /// are scanned but not included. An empty or comment-only source yields
    /// an empty sequence.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        Ok(self.tokens)
    }

    /// Scan a single token
    fn scan_token(&mut self) -> LexResult<()> {
        let location = self.current_location();
        let c = self.advance();

        match c {
            // Whitespace carries no tokens; advance() already tracked any
            // newline
            c if c.is_whitespace() => Ok(()),

            // '(' opens a block comment when followed by '!', otherwise it
            // is plain punctuation
            '(' => {
                if self.match_char('!') {
                    let _comment = self.scan_block_comment(location)?;
                    Ok(())
                } else {
                    self.add_token(TokenKind::Punctuation, location)
                }
            }
            ')' | '{' | '}' | ',' | ';' => self.add_token(TokenKind::Punctuation, location),

            // '!' starts a line comment or '!=', never a token of its own
            '!' => {
                if self.match_char('!') {
                    let _comment = self.scan_line_comment(location);
                    Ok(())
                } else if self.match_char('=') {
                    self.add_token(TokenKind::Operator, location)
                } else {
                    Err(LexError::UnknownSymbol { symbol: c, location })
                }
            }

            // '+' and '-' double as increment/decrement and compound
            // assignment
            '+' | '-' => {
                if !self.match_char(c) {
                    self.match_char('=');
                }
                self.add_token(TokenKind::Operator, location)
            }

            // Compound assignment exists for '*' and '/' but not '%'
            '*' | '/' => {
                self.match_char('=');
                self.add_token(TokenKind::Operator, location)
            }
            '%' => self.add_token(TokenKind::Operator, location),

            '=' | '<' | '>' => {
                self.match_char('=');
                self.add_token(TokenKind::Operator, location)
            }

            // String literals
            '"' => self.scan_string(location),

            // Number literals
            c if c.is_ascii_digit() => self.scan_number(location),

            // Identifiers and keywords
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(location),

            _ => Err(LexError::UnknownSymbol { symbol: c, location }),
        }
    }

    /// Scan a string literal.
    ///
    /// The opening quote has already been consumed; `location` points at it.
    /// The token text is the resolved content: `\n` becomes a newline, any
    /// other escaped character stands for itself with the backslash dropped.
    /// Raw newlines are legal inside a literal.
    fn scan_string(&mut self, location: SourceLocation) -> LexResult<()> {
        let mut value = String::new();

        while !self.is_at_end() && self.peek() != '"' {
            let c = self.advance();
            if c == '\\' {
                if self.is_at_end() {
                    break;
                }
                let escaped = self.advance();
                match escaped {
                    'n' => value.push('\n'),
                    // '\"' and '\\' resolve here as well
                    other => value.push(other),
                }
            } else {
                value.push(c);
            }
        }

        if self.is_at_end() {
            return Err(LexError::UnterminatedString { location });
        }

        // Consume closing quote
        self.advance();

        self.tokens
            .push(Token::new(TokenKind::StringLiteral, value, location));
        Ok(())
    }

    /// Scan a number literal.
    ///
    /// Consumes digits and at most one decimal point. A second `.` ends the
    /// literal immediately and is left for the next scan step, where it fails
    /// as an unknown symbol. The text is kept verbatim, so `5.` is a valid
    /// NUMBER token.
    fn scan_number(&mut self, location: SourceLocation) -> LexResult<()> {
        let mut has_decimal_point = false;

        loop {
            let c = self.peek();
            if c == '.' {
                if has_decimal_point {
                    break;
                }
                has_decimal_point = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(TokenKind::Number, text, location));
        Ok(())
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self, location: SourceLocation) -> LexResult<()> {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let kind = if Keyword::from_str(&text).is_some() {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        self.tokens.push(Token::new(kind, text, location));
        Ok(())
    }

    /// Scan a line comment after its `!!` opener.
    ///
    /// Consumes through (not including) the next newline. The token is built
    /// like any other, with the body trimmed of surrounding whitespace, and
    /// the caller drops it.
    fn scan_line_comment(&mut self, location: SourceLocation) -> Token {
        let body_start = self.current;

        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }

        let body: String = self.source[body_start..self.current].iter().collect();
        Token::new(TokenKind::Comment, body.trim(), location)
    }

    /// Scan a block comment after its `(!` opener.
    ///
    /// Consumes until the first `!)`; block comments do not nest. Reaching
    /// end of input first is an error reported at the opening `(`.
    fn scan_block_comment(&mut self, location: SourceLocation) -> LexResult<Token> {
        let body_start = self.current;

        loop {
            if self.is_at_end() {
                return Err(LexError::UnterminatedComment { location });
            }
            if self.peek() == '!' && self.peek_next() == ')' {
                break;
            }
            self.advance();
        }

        let body: String = self.source[body_start..self.current].iter().collect();

        // Consume closing `!)`
        self.advance();
        self.advance();

        Ok(Token::new(TokenKind::Comment, body.trim(), location))
    }

    /// Add a token spanning from the scan start to the cursor
    fn add_token(&mut self, kind: TokenKind, location: SourceLocation) -> LexResult<()> {
        let text: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, text, location));
        Ok(())
    }

    /// Consume and return the next character, tracking line and column
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Consume the next character only if it matches
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Peek at the next character without consuming it
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Get the current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::at(self.line, self.column)
    }
}
