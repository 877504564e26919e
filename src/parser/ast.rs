//! Abstract Syntax Tree definitions
//!
//! This module defines the AST node types for the Primer language. Nodes are
//! pure data: immutable once built, owned exclusively by their parent, and
//! inspected by exhaustive matching so downstream consumers can be added
//! without touching the node types.
//!
//! Type names travel as plain text (`"whole"`, `"text"`, ...) because the
//! parser records whichever keyword opened a declaration without judging it;
//! deciding whether a type name makes sense is semantic analysis, which is
//! out of scope for the front end.

/// Root AST node representing a complete program
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<Stmt>,
}

/// A typed function parameter: `whole a`
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub param_type: String,
    pub name: String,
}

/// A brace-delimited statement sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// Statement node
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Function declaration: whole add(whole a, whole b) { ... }
    FunctionDecl {
        return_type: String,
        name: String,
        parameters: Vec<Parameter>,
        body: Block,
    },

    /// Variable declaration: whole x = 42;
    VarDecl {
        var_type: String,
        name: String,
        initializer: Option<Expr>,
    },

    /// Return statement: output a + b;
    Return { expression: Option<Expr> },

    /// If statement: check (cond) stmt otherwise stmt
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// While loop: loop (cond) stmt
    While { condition: Expr, body: Box<Stmt> },

    /// For loop: iterate (init; cond; step) stmt
    For {
        init: Option<Expr>,
        condition: Option<Expr>,
        increment: Option<Expr>,
        body: Box<Stmt>,
    },

    /// Expression in statement position: f(x);
    Expression { expression: Expr },

    /// Block statement: { ... }
    Block(Block),
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Number literal; the text is kept verbatim, not parsed to a numeric
    /// type at this stage
    Number { text: String },

    /// String literal with escapes already resolved
    String { value: String },

    /// Variable reference
    Identifier { name: String },

    /// Binary operation; the operator travels as its lexeme text
    Binary {
        left: Box<Expr>,
        operator: String,
        right: Box<Expr>,
    },

    /// Function call: name(arguments)
    Call { name: String, arguments: Vec<Expr> },
}
