//! Parser error types.

use thiserror::Error;

use crate::lexer::{LexError, Token};

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The scanner rejected the input.
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    /// A token of the wrong kind or text where a specific one was required.
    #[error("unexpected token: {}{found}", expected_prefix(.expected.as_deref()))]
    UnexpectedToken {
        /// The offending token.
        found: Token,
        /// What the grammar required at this point, if known.
        expected: Option<String>,
    },

    /// Input left over after a complete parse.
    #[error("trailing tokens after complete parse: {found}")]
    TrailingTokens {
        /// The first leftover token.
        found: Token,
    },
}

fn expected_prefix(expected: Option<&str>) -> String {
    expected.map_or_else(String::new, |e| format!("expected {e}, got "))
}

impl ParseError {
    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: Token) -> Self {
        Self::UnexpectedToken {
            found,
            expected: Some(expected.into()),
        }
    }

    /// The token the error points at, if it came from the parser.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        match self {
            Self::Lex(_) => None,
            Self::UnexpectedToken { found, .. } | Self::TrailingTokens { found } => Some(found),
        }
    }

    /// Byte offset of the error in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(
                LexError::UnexpectedCharacter { position, .. }
                | LexError::UnterminatedQuote { position, .. },
            ) => *position,
            Self::UnexpectedToken { found, .. } | Self::TrailingTokens { found } => {
                found.position()
            }
        }
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;
