//! Lexer error types.

use thiserror::Error;

/// Errors raised while scanning input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unexpected character at {position}: {rest:?}")]
    UnexpectedCharacter {
        /// Byte offset of the offending character.
        position: usize,
        /// The remaining unscanned input, starting with the offending character.
        rest: String,
    },

    /// A quoted literal or identifier with no closing delimiter.
    #[error("end of input reached in string started at {position} with {delimiter:?}")]
    UnterminatedQuote {
        /// Byte offset of the opening delimiter.
        position: usize,
        /// The opening delimiter.
        delimiter: char,
    },
}
