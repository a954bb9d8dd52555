//! SQL Tokenizer implementation.

use tracing::trace;

use super::{Keyword, LexError, Span, Token, TokenKind};

/// Two-character operators, matched before single characters.
const MULTI_CHAR_PUNCT: [&str; 5] = ["<=", "<>", "!=", ">=", "::"];

/// Single-character operators and structural punctuation.
const SINGLE_CHAR_PUNCT: &str = "<>=().*,/+-[]";

/// A scanner that tokenizes SQL input.
///
/// Whitespace is returned as [`TokenKind::Space`] tokens rather than skipped;
/// callers consume it explicitly. Tokens handed back with [`Lexer::push`] are
/// returned again before any new input is scanned.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// Tokens pushed back by the caller, last in first out.
    buffer: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            buffer: Vec::new(),
        }
    }

    /// Returns the next token and advances past it.
    ///
    /// Once the input is exhausted every call returns an [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] on an unrecognized character or an unterminated
    /// quoted literal or identifier.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Token, LexError> {
        match self.buffer.pop() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }

    /// Returns the next token without advancing.
    ///
    /// # Errors
    ///
    /// Same as [`Lexer::next`].
    pub fn peek(&mut self) -> Result<Token, LexError> {
        let token = self.next()?;
        self.push(token.clone());
        Ok(token)
    }

    /// Puts a token back so the next call to [`Lexer::next`] returns it.
    pub fn push(&mut self, token: Token) {
        self.buffer.push(token);
    }

    /// Tokenizes the remaining input, up to and including the first end-of-input token.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered.
    pub fn tokenize_all(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Returns the current character without advancing.
    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances while `pred` holds for the current character.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Creates a token spanning from the token start to the current position.
    fn make_token(&self, kind: TokenKind) -> Token {
        let text = &self.input[self.start..self.pos];
        let token = match kind {
            TokenKind::Keyword(keyword) => {
                Token::new(kind, keyword.as_str(), Span::new(self.start, self.pos))
            }
            _ => Token::new(kind, text, Span::new(self.start, self.pos)),
        };
        trace!(kind = ?token.kind, text = %token.text, position = token.position(), "scanned token");
        token
    }

    /// Scans the next token from the input.
    fn scan(&mut self) -> Result<Token, LexError> {
        self.start = self.pos;

        let Some(c) = self.peek_char() else {
            return Ok(Token::eof(self.pos));
        };

        if c.is_ascii_digit() {
            return Ok(self.scan_number());
        }
        if is_word_char(c) {
            return Ok(self.scan_word());
        }
        if c.is_whitespace() {
            self.advance_while(char::is_whitespace);
            return Ok(self.make_token(TokenKind::Space));
        }

        let input = self.input;
        let rest = &input[self.pos..];
        if let Some(punct) = MULTI_CHAR_PUNCT.iter().find(|p| rest.starts_with(**p)) {
            self.pos += punct.len();
            return Ok(self.make_token(TokenKind::Punct));
        }
        if SINGLE_CHAR_PUNCT.contains(c) {
            self.advance();
            return Ok(self.make_token(TokenKind::Punct));
        }

        match c {
            '"' | '`' => self.scan_quoted(c, TokenKind::Identifier),
            '\'' => self.scan_quoted(c, TokenKind::Literal),
            _ => Err(LexError::UnexpectedCharacter {
                position: self.pos,
                rest: rest.to_string(),
            }),
        }
    }

    /// Scans an integer or decimal literal.
    fn scan_number(&mut self) -> Token {
        self.advance_while(|c| c.is_ascii_digit());

        let mut chars = self.input[self.pos..].chars();
        if chars.next() == Some('.') && chars.next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume .
            self.advance_while(|c| c.is_ascii_digit());
        }

        self.make_token(TokenKind::Literal)
    }

    /// Scans a bare word, which is either a keyword or an identifier.
    fn scan_word(&mut self) -> Token {
        self.advance_while(is_word_char);

        match Keyword::from_str(&self.input[self.start..self.pos]) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Scans a delimited token, keeping delimiters and escapes verbatim.
    ///
    /// Inside `"` and `` ` `` a backslash escapes the next character. A doubled
    /// `'` inside a string literal, or a doubled `` ` `` inside a back-tick
    /// identifier, stands for the delimiter itself.
    fn scan_quoted(&mut self, delimiter: char, kind: TokenKind) -> Result<Token, LexError> {
        let unterminated = LexError::UnterminatedQuote {
            position: self.start,
            delimiter,
        };

        self.advance(); // consume opening delimiter
        loop {
            match self.advance() {
                None => return Err(unterminated),
                Some('\\') if delimiter != '\'' => {
                    if self.advance().is_none() {
                        return Err(unterminated);
                    }
                }
                Some(c) if c == delimiter => {
                    if delimiter != '"' && self.peek_char() == Some(delimiter) {
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(_) => {}
            }
        }

        Ok(self.make_token(kind))
    }
}

/// Characters allowed in a bare word.
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize_all().unwrap()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn token_texts(input: &str) -> Vec<String> {
        tokenize(input)
            .into_iter()
            .filter(|t| !t.is_space() && !t.is_eof())
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_whitespace_is_a_token() {
        assert_eq!(
            token_kinds("   \n\t  "),
            vec![TokenKind::Space, TokenKind::Eof]
        );
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            token_kinds("select * from table"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Space,
                TokenKind::Punct,
                TokenKind::Space,
                TokenKind::Keyword(Keyword::From),
                TokenKind::Space,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_case_insensitive_and_lower_cased() {
        let tokens = tokenize("SeLeCt");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Select));
        assert_eq!(tokens[0].text, "select");
    }

    #[test]
    fn test_keywords_match_whole_words_only() {
        let tokens = tokenize("selection from_date order_by");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "selection");
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[4].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(token_texts("1 123 0.5 123.456"), vec!["1", "123", "0.5", "123.456"]);
        assert_eq!(token_kinds("1.")[0], TokenKind::Literal);
        assert_eq!(token_texts("1.x"), vec!["1", ".", "x"]);
    }

    #[test]
    fn test_multichar_punct_is_greedy() {
        assert_eq!(token_texts("a<=b<>c!=d>=e::f"), vec![
            "a", "<=", "b", "<>", "c", "!=", "d", ">=", "e", "::", "f"
        ]);
    }

    #[test]
    fn test_single_char_punct() {
        assert_eq!(token_texts("< > = ( ) . * , / + - [ ]"), vec![
            "<", ">", "=", "(", ")", ".", "*", ",", "/", "+", "-", "[", "]"
        ]);
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("SELECT id");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(6, 7));
        assert_eq!(tokens[2].span, Span::new(7, 9));
        assert_eq!(tokens[3].span, Span::at(9));
    }

    #[test]
    fn test_backtick_doubling() {
        let tokens = tokenize("`a``b`");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "`a``b`");
    }

    #[test]
    fn test_unexpected_character_carries_rest() {
        let err = Lexer::new("a ; b").tokenize_all().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                position: 2,
                rest: String::from("; b"),
            }
        );
    }

    #[test]
    fn test_dangling_backslash_is_unterminated() {
        let err = Lexer::new("\"abc\\").tokenize_all().unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedQuote {
                position: 0,
                delimiter: '"',
            }
        );
    }

    #[test]
    fn test_pushback_is_last_in_first_out() {
        let mut lexer = Lexer::new("a b");
        let a = lexer.next().unwrap();
        let space = lexer.next().unwrap();
        lexer.push(space.clone());
        lexer.push(a.clone());
        assert_eq!(lexer.next().unwrap(), a);
        assert_eq!(lexer.next().unwrap(), space);
        assert_eq!(lexer.next().unwrap().text, "b");
    }
}
