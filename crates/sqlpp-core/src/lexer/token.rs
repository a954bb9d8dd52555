//! Token types for the SQL lexer.

use core::fmt;

use super::Span;

/// Reserved words recognized by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Clauses
    Select,
    From,
    Where,
    Group,
    By,
    Order,
    Having,
    Limit,
    Offset,
    Distinct,

    // Predicates and connectives
    And,
    Or,
    Is,
    Not,
    Between,
    In,
    Like,
    Ilike,
    Null,

    // Aliasing
    As,

    // Ordering
    Asc,
    Desc,
    Nulls,
    First,
    Last,

    // CASE
    Case,
    When,
    Then,
    Else,
    End,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    On,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 38] = [
        Self::Select,
        Self::From,
        Self::Where,
        Self::Group,
        Self::By,
        Self::Order,
        Self::Having,
        Self::Limit,
        Self::Offset,
        Self::Distinct,
        Self::And,
        Self::Or,
        Self::Is,
        Self::Not,
        Self::Between,
        Self::In,
        Self::Like,
        Self::Ilike,
        Self::Null,
        Self::As,
        Self::Asc,
        Self::Desc,
        Self::Nulls,
        Self::First,
        Self::Last,
        Self::Case,
        Self::When,
        Self::Then,
        Self::Else,
        Self::End,
        Self::Join,
        Self::Inner,
        Self::Left,
        Self::Right,
        Self::Full,
        Self::Outer,
        Self::Cross,
        Self::On,
    ];

    /// Attempts to parse a keyword from a word (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(s))
    }

    /// Returns the lower-case spelling used as the token text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::From => "from",
            Self::Where => "where",
            Self::Group => "group",
            Self::By => "by",
            Self::Order => "order",
            Self::Having => "having",
            Self::Limit => "limit",
            Self::Offset => "offset",
            Self::Distinct => "distinct",
            Self::And => "and",
            Self::Or => "or",
            Self::Is => "is",
            Self::Not => "not",
            Self::Between => "between",
            Self::In => "in",
            Self::Like => "like",
            Self::Ilike => "ilike",
            Self::Null => "null",
            Self::As => "as",
            Self::Asc => "asc",
            Self::Desc => "desc",
            Self::Nulls => "nulls",
            Self::First => "first",
            Self::Last => "last",
            Self::Case => "case",
            Self::When => "when",
            Self::Then => "then",
            Self::Else => "else",
            Self::End => "end",
            Self::Join => "join",
            Self::Inner => "inner",
            Self::Left => "left",
            Self::Right => "right",
            Self::Full => "full",
            Self::Outer => "outer",
            Self::Cross => "cross",
            Self::On => "on",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A reserved word.
    Keyword(Keyword),
    /// A bare or delimited identifier.
    Identifier,
    /// A numeric or single-quoted string literal.
    Literal,
    /// An operator or structural punctuation.
    Punct,
    /// A run of whitespace.
    Space,
    /// End of input. Returned repeatedly once reached.
    Eof,
}

impl TokenKind {
    /// Short description used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "keyword",
            Self::Identifier => "identifier",
            Self::Literal => "literal",
            Self::Punct => "punctuation",
            Self::Space => "whitespace",
            Self::Eof => "end of input",
        }
    }
}

/// A token with its source text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The token text. Keywords are lower-cased, everything else is verbatim.
    /// Empty for [`TokenKind::Eof`].
    pub text: String,
    /// The source location.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates the end-of-input token at `pos`.
    #[must_use]
    pub const fn eof(pos: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            span: Span::at(pos),
        }
    }

    /// Byte offset of the token start.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_space(&self) -> bool {
        matches!(self.kind, TokenKind::Space)
    }

    /// Returns true if this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Returns true if this token is the given punctuation.
    #[must_use]
    pub fn is_punct(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == punct
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input at {}", self.position()),
            kind => write!(
                f,
                "{} {:?} at {}",
                kind.describe(),
                self.text,
                self.position()
            ),
        }
    }
}
