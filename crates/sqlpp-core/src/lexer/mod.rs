//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written scanner that produces a stream of tokens,
//! whitespace included, with pushback for the parser's one-token lookahead.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::LexError;
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
