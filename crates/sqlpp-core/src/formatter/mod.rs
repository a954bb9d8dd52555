//! SQL pretty-printer.
//!
//! Renders a syntax tree back to canonically formatted SQL.

#[allow(clippy::module_inception)]
mod formatter;
mod options;

pub use formatter::Formatter;
pub use options::{FormatOptions, ProjectionLayout, UnknownLayout};
