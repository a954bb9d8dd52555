//! Syntax tree types for parsed SELECT statements.

mod expression;
mod statement;

pub use expression::{
    Alias, As, Atom, BinaryOp, Case, Expr, Node, Subscript, TypeCast, Unary, UnaryOp, When,
};
pub use statement::{Join, JoinType, Limit, Offset, Select, SortKey, SortOption};
