//! SQL Parser
//!
//! A hand-written recursive descent parser over the whitespace-preserving token
//! stream, with one token of pushback.

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::{ParseError, Result};
pub use parser::Parser;
