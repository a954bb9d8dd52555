#![allow(dead_code)]

use sqlpp_core::ast::{Expr, Join, Node, Select};
use sqlpp_core::{FormatOptions, ParseError, ProjectionLayout};

pub fn parse(sql: &str) -> Select {
    sqlpp_core::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    sqlpp_core::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> Select {
    sqlpp_core::parse_select(sql)
        .unwrap_or_else(|e| panic!("Failed to parse select: {sql}\nError: {e:?}"))
}

pub fn expr(sql: &str) -> Node {
    sqlpp_core::parse_expression(sql)
        .unwrap_or_else(|e| panic!("Failed to parse expression: {sql}\nError: {e:?}"))
}

pub fn expr_err(sql: &str) -> ParseError {
    sqlpp_core::parse_expression(sql).expect_err(&format!("Expected expression error for: {sql}"))
}

pub fn from(sql: &str) -> Node {
    sqlpp_core::parse_from(sql)
        .unwrap_or_else(|e| panic!("Failed to parse from: {sql}\nError: {e:?}"))
}

pub fn binary(node: &Node) -> &Expr {
    node.as_expr()
        .unwrap_or_else(|| panic!("Expected binary expression, got {node:?}"))
}

pub fn join(node: &Node) -> &Join {
    node.as_join()
        .unwrap_or_else(|| panic!("Expected join, got {node:?}"))
}

pub fn pretty(sql: &str) -> String {
    sqlpp_core::format_select(&parse(sql), FormatOptions::default())
}

pub fn pretty_wrapped(sql: &str) -> String {
    let options = FormatOptions::new().with_projections(ProjectionLayout::Wrap);
    sqlpp_core::format_select(&parse(sql), options)
}

/// Verifies that formatting is lossless: parse(format(parse(sql))) equals
/// parse(sql), and formatting the re-parsed tree is a fixed point.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = sqlpp_core::format_select(&ast1, FormatOptions::default());
    let ast2 = parse(&rendered1);
    assert_eq!(
        ast1, ast2,
        "Round-trip changed the tree.\n  Input:    {sql}\n  Rendered: {rendered1}"
    );
    let rendered2 = sqlpp_core::format_select(&ast2, FormatOptions::default());
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
