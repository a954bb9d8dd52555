//! # sqlpp-core
//!
//! A parser and pretty-printer for a restricted dialect of SQL `SELECT`
//! statements.
//!
//! This crate provides:
//! - A scanner that keeps whitespace as tokens and supports pushback
//! - A hand-written recursive descent parser producing a closed syntax tree
//! - A formatter that renders the tree as canonically laid out SQL
//!
//! ## Formatting a query
//!
//! ```rust
//! use sqlpp_core::{format_select, parse, FormatOptions};
//!
//! let select = parse("select a, b from t where x > 5 and y < 2").unwrap();
//! let sql = format_select(&select, FormatOptions::default());
//!
//! assert_eq!(sql, "SELECT a, b\nFROM t\nWHERE x > 5\nAND y < 2\n");
//! ```
//!
//! ## Inspecting expressions
//!
//! ```rust
//! use sqlpp_core::ast::{Atom, BinaryOp, Node};
//! use sqlpp_core::parse_expression;
//!
//! let expr = parse_expression("x in (1, 2, 3)").unwrap();
//! let Node::Expr(expr) = expr else { panic!("expected a binary expression") };
//!
//! assert_eq!(expr.op, BinaryOp::In);
//! assert!(matches!(*expr.right, Node::Atom(Atom::List(ref items)) if items.len() == 3));
//! ```
//!
//! Parsing recurses once per nesting level, so extremely deep expressions are
//! limited by the thread's stack size.

pub mod ast;
pub mod formatter;
pub mod lexer;
pub mod parser;

pub use ast::{Node, Select};
pub use formatter::{FormatOptions, Formatter, ProjectionLayout};
pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser, Result};

/// Creates a scanner over `input`.
#[must_use]
pub const fn tokenize(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

/// Parses a complete SELECT statement.
///
/// # Errors
///
/// Returns a [`ParseError`] on malformed or non-SELECT input.
pub fn parse(input: &str) -> Result<Select> {
    Parser::new(input).parse()
}

/// Parses `input` as a single expression.
///
/// # Errors
///
/// Returns a [`ParseError`] unless the whole input is one expression.
pub fn parse_expression(input: &str) -> Result<Node> {
    Parser::new(input).parse_expression()
}

/// Parses `input` as a single FROM entry, joins included.
///
/// # Errors
///
/// Returns a [`ParseError`] unless the whole input is one from-expression.
pub fn parse_from(input: &str) -> Result<Node> {
    Parser::new(input).parse_from()
}

/// Parses `input` as a SELECT statement.
///
/// # Errors
///
/// Returns a [`ParseError`] unless the whole input is one SELECT.
pub fn parse_select(input: &str) -> Result<Select> {
    Parser::new(input).parse_select()
}

/// Formats a node with the given options.
#[must_use]
pub fn format(node: &Node, options: FormatOptions) -> String {
    Formatter::new(options).format(node)
}

/// Formats a SELECT statement with the given options.
#[must_use]
pub fn format_select(select: &Select, options: FormatOptions) -> String {
    Formatter::new(options).format_select(select)
}
