//! Parser implementation
//!
//! This module implements the recursive-descent parser for the Primer
//! language. It consumes the token sequence produced by the lexer with one
//! token of lookahead and fails fast: the first error aborts the parse and
//! surfaces to the caller, with no recovery and no partial tree.

use super::ast::{Block, Expr, Parameter, Program, Stmt};
use super::ParseResult;
use crate::error::{ParseError, SourceLocation};
use crate::lexer::{Keyword, Token, TokenKind};

/// Parser for Primer token sequences.
///
/// Terminals are matched by token text, so the grammar reads the way it is
/// written: `expect_value(";")` rather than a dedicated semicolon kind. Kind
/// checks are reserved for the places the grammar names a kind (KEYWORD and
/// IDENTIFIER slots in declarations).
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Create a new parser from tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse the token sequence into a program.
    ///
    /// Consumes the parser. An empty sequence is a valid program with zero
    /// declarations.
    pub fn parse(mut self) -> ParseResult<Program> {
        let mut declarations = Vec::new();

        while !self.is_at_end() {
            declarations.push(self.declaration()?);
        }

        Ok(Program { declarations })
    }

    // ===== Declarations =====

    /// Parse a top-level declaration: a function if the name is followed by
    /// `(`, otherwise a global variable.
    ///
    /// Any keyword may open a declaration; the parser records whichever one
    /// appeared as the declared type and leaves judging it to later stages.
    fn declaration(&mut self) -> ParseResult<Stmt> {
        let decl_type = self.expect_kind(TokenKind::Keyword)?.text.clone();
        let name = self.expect_kind(TokenKind::Identifier)?.text.clone();

        if self.check_value("(") {
            self.function_declaration(decl_type, name)
        } else {
            self.global_variable_declaration(decl_type, name)
        }
    }

    fn function_declaration(&mut self, return_type: String, name: String) -> ParseResult<Stmt> {
        self.expect_value("(")?;

        let parameters = if self.peek().is_some_and(|token| token.text != ")") {
            self.parameter_list()?
        } else {
            Vec::new()
        };

        self.expect_value(")")?;
        let body = self.block_statement()?;

        Ok(Stmt::FunctionDecl {
            return_type,
            name,
            parameters,
            body,
        })
    }

    fn parameter_list(&mut self) -> ParseResult<Vec<Parameter>> {
        let mut parameters = Vec::new();

        loop {
            let param_type = self.expect_kind(TokenKind::Keyword)?.text.clone();
            let name = self.expect_kind(TokenKind::Identifier)?.text.clone();
            parameters.push(Parameter { param_type, name });

            if !self.match_value(",") {
                break;
            }
        }

        Ok(parameters)
    }

    fn global_variable_declaration(&mut self, var_type: String, name: String) -> ParseResult<Stmt> {
        let initializer = if self.match_value("=") {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect_value(";")?;

        Ok(Stmt::VarDecl {
            var_type,
            name,
            initializer,
        })
    }

    // ===== Statements =====

    /// Dispatch on the leading token: a type-name keyword opens a variable
    /// declaration, the control-flow keywords open their statements, `{`
    /// opens a block, and anything else falls through to an expression
    /// statement.
    fn statement(&mut self) -> ParseResult<Stmt> {
        let leading = match self.peek() {
            Some(token) if token.kind == TokenKind::Keyword => Keyword::from_str(&token.text),
            _ => None,
        };

        match leading {
            Some(keyword) if keyword.is_type_name() => self.variable_declaration(),
            Some(Keyword::Output) => self.return_statement(),
            Some(Keyword::Check) => self.if_statement(),
            Some(Keyword::Loop) => self.while_statement(),
            Some(Keyword::Iterate) => self.for_statement(),
            _ => {
                if self.check_value("{") {
                    Ok(Stmt::Block(self.block_statement()?))
                } else {
                    self.expression_statement()
                }
            }
        }
    }

    fn variable_declaration(&mut self) -> ParseResult<Stmt> {
        let var_type = self.expect_kind(TokenKind::Keyword)?.text.clone();
        let name = self.expect_kind(TokenKind::Identifier)?.text.clone();

        let initializer = if self.match_value("=") {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect_value(";")?;

        Ok(Stmt::VarDecl {
            var_type,
            name,
            initializer,
        })
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        // Consume 'output'
        self.advance();

        let expression = if self.peek().is_some_and(|token| token.text != ";") {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect_value(";")?;

        Ok(Stmt::Return { expression })
    }

    /// Parse `check (cond) stmt (otherwise stmt)?`. Branches are arbitrary
    /// statements, so braces around them are optional.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        // Consume 'check'
        self.advance();

        self.expect_value("(")?;
        let condition = self.expression()?;
        self.expect_value(")")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_value("otherwise") {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        // Consume 'loop'
        self.advance();

        self.expect_value("(")?;
        let condition = self.expression()?;
        self.expect_value(")")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// Parse `iterate (init?; cond?; step?) stmt`. Every header slot is
    /// optional; each holds a plain expression, since assignment is not part
    /// of the expression grammar.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        // Consume 'iterate'
        self.advance();

        self.expect_value("(")?;

        let init = if self.peek().is_some_and(|token| token.text != ";") {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect_value(";")?;

        let condition = if self.peek().is_some_and(|token| token.text != ";") {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect_value(";")?;

        let increment = if self.peek().is_some_and(|token| token.text != ")") {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect_value(")")?;

        let body = Box::new(self.statement()?);

        Ok(Stmt::For {
            init,
            condition,
            increment,
            body,
        })
    }

    fn block_statement(&mut self) -> ParseResult<Block> {
        self.expect_value("{")?;

        let mut statements = Vec::new();
        while self.peek().is_some_and(|token| token.text != "}") {
            statements.push(self.statement()?);
        }

        self.expect_value("}")?;
        Ok(Block { statements })
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expression = self.expression()?;
        self.expect_value(";")?;

        Ok(Stmt::Expression { expression })
    }

    // ===== Expressions =====

    /// Parse an expression.
    ///
    /// The grammar has two tiers, comparison over additive, both
    /// left-associative. `* / %` and the assignment forms lex as operators
    /// but have no production here, so they end an expression and fail at
    /// whatever terminal the caller expects next.
    fn expression(&mut self) -> ParseResult<Expr> {
        self.comparison()
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.additive()?;

        while let Some(operator) = self.match_any(&["==", "!=", "<", ">", "<=", ">="]) {
            let right = self.additive()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn additive(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;

        while let Some(operator) = self.match_any(&["+", "-"]) {
            let right = self.primary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        let token = match self.peek() {
            Some(token) => token.clone(),
            None => {
                return Err(ParseError::UnexpectedToken {
                    found: None,
                    location: self.error_location(),
                })
            }
        };

        match token.kind {
            TokenKind::Number => {
                self.advance();
                Ok(Expr::Number { text: token.text })
            }
            TokenKind::StringLiteral => {
                self.advance();
                Ok(Expr::String { value: token.text })
            }
            TokenKind::Identifier => {
                self.advance();
                // A call only when the very next token is '('
                if self.check_value("(") {
                    self.function_call(token.text)
                } else {
                    Ok(Expr::Identifier { name: token.text })
                }
            }
            _ if token.text == "(" => {
                self.advance();
                let expr = self.expression()?;
                self.expect_value(")")?;
                Ok(expr)
            }
            _ => Err(ParseError::UnexpectedToken {
                found: Some(token.text),
                location: token.location,
            }),
        }
    }

    fn function_call(&mut self, name: String) -> ParseResult<Expr> {
        self.expect_value("(")?;

        let mut arguments = Vec::new();
        if self.peek().is_some_and(|token| token.text != ")") {
            loop {
                arguments.push(self.expression()?);
                if !self.match_value(",") {
                    break;
                }
            }
        }

        self.expect_value(")")?;
        Ok(Expr::Call { name, arguments })
    }

    // ===== Helpers =====

    /// Peek at the current token without consuming it
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Consume and return the current token, if any
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.current);
        if token.is_some() {
            self.current += 1;
        }
        token
    }

    /// Check whether the current token has the given text
    fn check_value(&self, value: &str) -> bool {
        self.peek().is_some_and(|token| token.text == value)
    }

    /// Consume the current token if its text matches
    fn match_value(&mut self, value: &str) -> bool {
        if self.check_value(value) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// If the current token's text is among `values`, consume it and return
    /// the text
    fn match_any(&mut self, values: &[&str]) -> Option<String> {
        let text = self
            .peek()
            .filter(|token| values.contains(&token.text.as_str()))
            .map(|token| token.text.clone())?;
        self.current += 1;
        Some(text)
    }

    /// Require the current token to have the given text
    fn expect_value(&mut self, value: &str) -> ParseResult<&Token> {
        if self.check_value(value) {
            self.current += 1;
            Ok(&self.tokens[self.current - 1])
        } else {
            Err(ParseError::ExpectedValue {
                expected: value.to_string(),
                found: self.peek().map(|token| token.text.clone()),
                location: self.error_location(),
            })
        }
    }

    /// Require the current token to have the given kind
    fn expect_kind(&mut self, kind: TokenKind) -> ParseResult<&Token> {
        if self.peek().is_some_and(|token| token.kind == kind) {
            self.current += 1;
            Ok(&self.tokens[self.current - 1])
        } else {
            Err(ParseError::ExpectedKind {
                expected: kind,
                found: self.peek().map(|token| token.kind),
                location: self.error_location(),
            })
        }
    }

    /// Check if all tokens have been consumed
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Location for an error at the current position.
    ///
    /// Points at the current token, or at the last token of the sequence
    /// when input ran out, so end-of-input errors still carry a position
    /// near the failure.
    fn error_location(&self) -> SourceLocation {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(SourceLocation::at(1, 1), |token| token.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn parse_source(source: &str) -> ParseResult<Program> {
        let tokens = tokenize(source).unwrap_or_else(|e| panic!("lexing failed: {}", e));
        Parser::new(tokens).parse()
    }

    /// Parse a single statement by wrapping it in a function body
    fn parse_statement(source: &str) -> Stmt {
        let program = parse_source(&format!("whole test() {{ {} }}", source)).unwrap();
        match program.declarations.into_iter().next() {
            Some(Stmt::FunctionDecl { body, .. }) => body
                .statements
                .into_iter()
                .next()
                .expect("function body is empty"),
            other => panic!("expected a function declaration, got {:?}", other),
        }
    }

    fn ident(name: &str) -> Expr {
        Expr::Identifier {
            name: name.to_string(),
        }
    }

    fn number(text: &str) -> Expr {
        Expr::Number {
            text: text.to_string(),
        }
    }

    fn binary(left: Expr, operator: &str, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            operator: operator.to_string(),
            right: Box::new(right),
        }
    }

    #[test]
    fn test_empty_program() {
        let program = parse_source("").unwrap();
        assert_eq!(program, Program { declarations: vec![] });
    }

    #[test]
    fn test_comment_only_program() {
        let program = parse_source("!! just a comment").unwrap();
        assert!(program.declarations.is_empty());
    }

    #[test]
    fn test_global_variable_declaration() {
        let program = parse_source("whole x = 10;").unwrap();
        assert_eq!(
            program.declarations,
            vec![Stmt::VarDecl {
                var_type: "whole".to_string(),
                name: "x".to_string(),
                initializer: Some(number("10")),
            }]
        );
    }

    #[test]
    fn test_global_variable_without_initializer() {
        let program = parse_source("whole x;").unwrap();
        assert_eq!(
            program.declarations,
            vec![Stmt::VarDecl {
                var_type: "whole".to_string(),
                name: "x".to_string(),
                initializer: None,
            }]
        );
    }

    #[test]
    fn test_string_variable_declaration() {
        let program = parse_source(r#"text message = "The result is: ";"#).unwrap();
        assert_eq!(
            program.declarations,
            vec![Stmt::VarDecl {
                var_type: "text".to_string(),
                name: "message".to_string(),
                initializer: Some(Expr::String {
                    value: "The result is: ".to_string(),
                }),
            }]
        );
    }

    #[test]
    fn test_any_keyword_opens_a_declaration() {
        // Top-level declarations accept every keyword as a type
        let program = parse_source("output foo;").unwrap();
        assert_eq!(
            program.declarations,
            vec![Stmt::VarDecl {
                var_type: "output".to_string(),
                name: "foo".to_string(),
                initializer: None,
            }]
        );
    }

    #[test]
    fn test_function_declaration() {
        let program = parse_source("whole add(whole a, whole b) { output a + b; }").unwrap();
        assert_eq!(
            program.declarations,
            vec![Stmt::FunctionDecl {
                return_type: "whole".to_string(),
                name: "add".to_string(),
                parameters: vec![
                    Parameter {
                        param_type: "whole".to_string(),
                        name: "a".to_string(),
                    },
                    Parameter {
                        param_type: "whole".to_string(),
                        name: "b".to_string(),
                    },
                ],
                body: Block {
                    statements: vec![Stmt::Return {
                        expression: Some(binary(ident("a"), "+", ident("b"))),
                    }],
                },
            }]
        );
    }

    #[test]
    fn test_function_without_parameters() {
        let program = parse_source("whole main() { }").unwrap();
        assert_eq!(
            program.declarations,
            vec![Stmt::FunctionDecl {
                return_type: "whole".to_string(),
                name: "main".to_string(),
                parameters: vec![],
                body: Block { statements: vec![] },
            }]
        );
    }

    #[test]
    fn test_local_variable_with_call_initializer() {
        let stmt = parse_statement("whole result = add(5, 10);");
        assert_eq!(
            stmt,
            Stmt::VarDecl {
                var_type: "whole".to_string(),
                name: "result".to_string(),
                initializer: Some(Expr::Call {
                    name: "add".to_string(),
                    arguments: vec![number("5"), number("10")],
                }),
            }
        );
    }

    #[test]
    fn test_return_without_expression() {
        let stmt = parse_statement("output;");
        assert_eq!(stmt, Stmt::Return { expression: None });
    }

    #[test]
    fn test_if_otherwise_statement() {
        let stmt = parse_statement("check (a < b) { output a; } otherwise { output b; }");
        assert_eq!(
            stmt,
            Stmt::If {
                condition: binary(ident("a"), "<", ident("b")),
                then_branch: Box::new(Stmt::Block(Block {
                    statements: vec![Stmt::Return {
                        expression: Some(ident("a")),
                    }],
                })),
                else_branch: Some(Box::new(Stmt::Block(Block {
                    statements: vec![Stmt::Return {
                        expression: Some(ident("b")),
                    }],
                }))),
            }
        );
    }

    #[test]
    fn test_if_without_otherwise() {
        let stmt = parse_statement("check (x == 1) { }");
        assert_eq!(
            stmt,
            Stmt::If {
                condition: binary(ident("x"), "==", number("1")),
                then_branch: Box::new(Stmt::Block(Block { statements: vec![] })),
                else_branch: None,
            }
        );
    }

    #[test]
    fn test_branches_need_no_braces() {
        let stmt = parse_statement("check (a < b) output a; otherwise output b;");
        assert_eq!(
            stmt,
            Stmt::If {
                condition: binary(ident("a"), "<", ident("b")),
                then_branch: Box::new(Stmt::Return {
                    expression: Some(ident("a")),
                }),
                else_branch: Some(Box::new(Stmt::Return {
                    expression: Some(ident("b")),
                })),
            }
        );
    }

    #[test]
    fn test_while_statement() {
        let stmt = parse_statement("loop (run()) step();");
        assert_eq!(
            stmt,
            Stmt::While {
                condition: Expr::Call {
                    name: "run".to_string(),
                    arguments: vec![],
                },
                body: Box::new(Stmt::Expression {
                    expression: Expr::Call {
                        name: "step".to_string(),
                        arguments: vec![],
                    },
                }),
            }
        );
    }

    #[test]
    fn test_for_statement() {
        let stmt = parse_statement("iterate (start(); i < 3; step()) { output i; }");
        assert_eq!(
            stmt,
            Stmt::For {
                init: Some(Expr::Call {
                    name: "start".to_string(),
                    arguments: vec![],
                }),
                condition: Some(binary(ident("i"), "<", number("3"))),
                increment: Some(Expr::Call {
                    name: "step".to_string(),
                    arguments: vec![],
                }),
                body: Box::new(Stmt::Block(Block {
                    statements: vec![Stmt::Return {
                        expression: Some(ident("i")),
                    }],
                })),
            }
        );
    }

    #[test]
    fn test_for_statement_empty_slots() {
        let stmt = parse_statement("iterate (;;) { }");
        assert_eq!(
            stmt,
            Stmt::For {
                init: None,
                condition: None,
                increment: None,
                body: Box::new(Stmt::Block(Block { statements: vec![] })),
            }
        );
    }

    #[test]
    fn test_additive_is_left_associative() {
        let stmt = parse_statement("a - b + c;");
        assert_eq!(
            stmt,
            Stmt::Expression {
                expression: binary(binary(ident("a"), "-", ident("b")), "+", ident("c")),
            }
        );
    }

    #[test]
    fn test_comparison_is_left_associative() {
        let stmt = parse_statement("a < b == c;");
        assert_eq!(
            stmt,
            Stmt::Expression {
                expression: binary(binary(ident("a"), "<", ident("b")), "==", ident("c")),
            }
        );
    }

    #[test]
    fn test_additive_binds_tighter_than_comparison() {
        let stmt = parse_statement("a + b < c + d;");
        assert_eq!(
            stmt,
            Stmt::Expression {
                expression: binary(
                    binary(ident("a"), "+", ident("b")),
                    "<",
                    binary(ident("c"), "+", ident("d")),
                ),
            }
        );
    }

    #[test]
    fn test_parentheses_group_subexpressions() {
        let stmt = parse_statement("(a < b) + c;");
        assert_eq!(
            stmt,
            Stmt::Expression {
                expression: binary(binary(ident("a"), "<", ident("b")), "+", ident("c")),
            }
        );
    }

    #[test]
    fn test_call_arguments_take_full_expressions() {
        let stmt = parse_statement("show(message + result);");
        assert_eq!(
            stmt,
            Stmt::Expression {
                expression: Expr::Call {
                    name: "show".to_string(),
                    arguments: vec![binary(ident("message"), "+", ident("result"))],
                },
            }
        );
    }

    #[test]
    fn test_nested_calls() {
        let stmt = parse_statement("f(g(1), 2);");
        assert_eq!(
            stmt,
            Stmt::Expression {
                expression: Expr::Call {
                    name: "f".to_string(),
                    arguments: vec![
                        Expr::Call {
                            name: "g".to_string(),
                            arguments: vec![number("1")],
                        },
                        number("2"),
                    ],
                },
            }
        );
    }

    #[test]
    fn test_complete_program() {
        let source = r#"
whole add(whole a, whole b) {
    output a + b;
}

(!
multi-line
commentary
!)

whole main() {
    text message = "The result is: ";
    whole result = add(5, 10);
    show(message + result);
}
"#;
        let program = parse_source(source).unwrap();
        assert_eq!(
            program.declarations,
            vec![
                Stmt::FunctionDecl {
                    return_type: "whole".to_string(),
                    name: "add".to_string(),
                    parameters: vec![
                        Parameter {
                            param_type: "whole".to_string(),
                            name: "a".to_string(),
                        },
                        Parameter {
                            param_type: "whole".to_string(),
                            name: "b".to_string(),
                        },
                    ],
                    body: Block {
                        statements: vec![Stmt::Return {
                            expression: Some(binary(ident("a"), "+", ident("b"))),
                        }],
                    },
                },
                Stmt::FunctionDecl {
                    return_type: "whole".to_string(),
                    name: "main".to_string(),
                    parameters: vec![],
                    body: Block {
                        statements: vec![
                            Stmt::VarDecl {
                                var_type: "text".to_string(),
                                name: "message".to_string(),
                                initializer: Some(Expr::String {
                                    value: "The result is: ".to_string(),
                                }),
                            },
                            Stmt::VarDecl {
                                var_type: "whole".to_string(),
                                name: "result".to_string(),
                                initializer: Some(Expr::Call {
                                    name: "add".to_string(),
                                    arguments: vec![number("5"), number("10")],
                                }),
                            },
                            Stmt::Expression {
                                expression: Expr::Call {
                                    name: "show".to_string(),
                                    arguments: vec![binary(
                                        ident("message"),
                                        "+",
                                        ident("result"),
                                    )],
                                },
                            },
                        ],
                    },
                },
            ]
        );
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let source = "whole add(whole a, whole b) { output a + b; } whole x = 10;";
        let first = parse_source(source).unwrap();
        let second = parse_source(source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_declaration_count_matches_source() {
        let program = parse_source("whole x;\nwhole y = 2;\nwhole main() { }").unwrap();
        assert_eq!(program.declarations.len(), 3);
    }

    #[test]
    fn test_error_missing_semicolon() {
        let result = parse_source("whole x = 10");
        assert_eq!(
            result,
            Err(ParseError::ExpectedValue {
                expected: ";".to_string(),
                found: None,
                location: SourceLocation::at(1, 11),
            })
        );
    }

    #[test]
    fn test_error_declaration_requires_keyword() {
        let result = parse_source("x = 1;");
        assert_eq!(
            result,
            Err(ParseError::ExpectedKind {
                expected: TokenKind::Keyword,
                found: Some(TokenKind::Identifier),
                location: SourceLocation::at(1, 1),
            })
        );
    }

    #[test]
    fn test_error_declaration_requires_name() {
        let result = parse_source("whole 5;");
        assert_eq!(
            result,
            Err(ParseError::ExpectedKind {
                expected: TokenKind::Identifier,
                found: Some(TokenKind::Number),
                location: SourceLocation::at(1, 7),
            })
        );
    }

    #[test]
    fn test_error_unexpected_token_in_expression() {
        let result = parse_source("whole x = ;");
        assert_eq!(
            result,
            Err(ParseError::UnexpectedToken {
                found: Some(";".to_string()),
                location: SourceLocation::at(1, 11),
            })
        );
    }

    #[test]
    fn test_error_expression_hits_end_of_input() {
        let result = parse_source("whole x =");
        assert_eq!(
            result,
            Err(ParseError::UnexpectedToken {
                found: None,
                location: SourceLocation::at(1, 9),
            })
        );
    }

    #[test]
    fn test_error_star_has_no_expression_production() {
        // '*' lexes as an operator but no grammar rule consumes it
        let result = parse_source("whole x = 2 * 3;");
        assert_eq!(
            result,
            Err(ParseError::ExpectedValue {
                expected: ";".to_string(),
                found: Some("*".to_string()),
                location: SourceLocation::at(1, 13),
            })
        );
    }

    #[test]
    fn test_error_unclosed_block() {
        let result = parse_source("whole main() {");
        assert_eq!(
            result,
            Err(ParseError::ExpectedValue {
                expected: "}".to_string(),
                found: None,
                location: SourceLocation::at(1, 14),
            })
        );
    }

    #[test]
    fn test_error_unclosed_group() {
        let result = parse_source("whole x = (1 + 2;");
        assert_eq!(
            result,
            Err(ParseError::ExpectedValue {
                expected: ")".to_string(),
                found: Some(";".to_string()),
                location: SourceLocation::at(1, 17),
            })
        );
    }

    #[test]
    fn test_error_condition_requires_parentheses() {
        let result = parse_source("whole f() { check x; }");
        assert_eq!(
            result,
            Err(ParseError::ExpectedValue {
                expected: "(".to_string(),
                found: Some("x".to_string()),
                location: SourceLocation::at(1, 19),
            })
        );
    }

    #[test]
    fn test_error_stray_keyword_in_statement_position() {
        let result = parse_source("whole f() { otherwise; }");
        assert_eq!(
            result,
            Err(ParseError::UnexpectedToken {
                found: Some("otherwise".to_string()),
                location: SourceLocation::at(1, 13),
            })
        );
    }
}
