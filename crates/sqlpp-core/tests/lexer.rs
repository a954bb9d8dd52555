//! Tests for the scanner: token kinds, escapes, pushback and errors.

use sqlpp_core::lexer::{Keyword, LexError, Lexer, Token, TokenKind};
use sqlpp_core::tokenize;

fn assert_token(token: &Token, kind: TokenKind, text: &str) {
    assert_eq!(token.kind, kind, "kind of {token:?}");
    assert_eq!(token.text, text, "text of {token:?}");
}

fn skip(lexer: &mut Lexer<'_>, kind: TokenKind) {
    let token = lexer.next().unwrap();
    assert_eq!(token.kind, kind, "skipped {token:?}");
}

#[test]
fn next_returns_tokens_in_order() {
    let mut lexer = tokenize("select * from table");
    let kinds: Vec<TokenKind> = (0..8).map(|_| lexer.next().unwrap().kind).collect();
    assert_eq!(
        kinds,
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
fn peek_does_not_advance() {
    let mut lexer = tokenize("select * from table");
    let first = lexer.peek().unwrap();
    let second = lexer.peek().unwrap();
    assert_eq!(first, second);
    assert_eq!(lexer.next().unwrap(), first);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Space);
}

#[test]
fn push_puts_token_back_into_stream() {
    let mut lexer = tokenize("select * from table");
    let token = lexer.next().unwrap();
    lexer.push(token);
    assert_token(
        &lexer.next().unwrap(),
        TokenKind::Keyword(Keyword::Select),
        "select",
    );
}

#[test]
fn recognizes_every_keyword() {
    for keyword in Keyword::ALL {
        let upper = keyword.as_str().to_ascii_uppercase();
        let token = tokenize(&upper).next().unwrap();
        assert_token(&token, TokenKind::Keyword(keyword), keyword.as_str());
    }
}

#[test]
fn recognizes_identifiers() {
    let mut lexer = tokenize(
        r#"word word123 "quoted word" "with \"escape\" word" `mysql word` `mysql \`escape\` word`"#,
    );

    assert_token(&lexer.next().unwrap(), TokenKind::Identifier, "word");
    skip(&mut lexer, TokenKind::Space);
    assert_token(&lexer.next().unwrap(), TokenKind::Identifier, "word123");
    skip(&mut lexer, TokenKind::Space);
    assert_token(&lexer.next().unwrap(), TokenKind::Identifier, r#""quoted word""#);
    skip(&mut lexer, TokenKind::Space);
    assert_token(
        &lexer.next().unwrap(),
        TokenKind::Identifier,
        r#""with \"escape\" word""#,
    );
    skip(&mut lexer, TokenKind::Space);
    assert_token(&lexer.next().unwrap(), TokenKind::Identifier, "`mysql word`");
    skip(&mut lexer, TokenKind::Space);
    assert_token(
        &lexer.next().unwrap(),
        TokenKind::Identifier,
        r"`mysql \`escape\` word`",
    );
}

#[test]
fn recognizes_number_literals() {
    let mut lexer = tokenize("1 123 0.5 123.456");
    assert_token(&lexer.next().unwrap(), TokenKind::Literal, "1");
    skip(&mut lexer, TokenKind::Space);
    assert_token(&lexer.next().unwrap(), TokenKind::Literal, "123");
    skip(&mut lexer, TokenKind::Space);
    assert_token(&lexer.next().unwrap(), TokenKind::Literal, "0.5");
    skip(&mut lexer, TokenKind::Space);
    assert_token(&lexer.next().unwrap(), TokenKind::Literal, "123.456");
}

#[test]
fn recognizes_string_literals() {
    let mut lexer = tokenize("'hello' 'quoted ''string'' here'");
    assert_token(&lexer.next().unwrap(), TokenKind::Literal, "'hello'");
    skip(&mut lexer, TokenKind::Space);
    assert_token(
        &lexer.next().unwrap(),
        TokenKind::Literal,
        "'quoted ''string'' here'",
    );
    skip(&mut lexer, TokenKind::Eof);
}

#[test]
fn backslash_is_literal_inside_strings() {
    let token = tokenize(r"'a\b'").next().unwrap();
    assert_token(&token, TokenKind::Literal, r"'a\b'");
}

#[test]
fn recognizes_whitespace() {
    let mut lexer = tokenize("     space\n  ");
    assert_token(&lexer.next().unwrap(), TokenKind::Space, "     ");
    skip(&mut lexer, TokenKind::Identifier);
    assert_token(&lexer.next().unwrap(), TokenKind::Space, "\n  ");
}

#[test]
fn recognizes_multichar_punctuation() {
    let mut lexer = tokenize("<= <> != >= ::");
    for expected in ["<=", "<>", "!=", ">="] {
        assert_token(&lexer.next().unwrap(), TokenKind::Punct, expected);
        skip(&mut lexer, TokenKind::Space);
    }
    assert_token(&lexer.next().unwrap(), TokenKind::Punct, "::");
}

#[test]
fn recognizes_punctuation() {
    let mut lexer = tokenize("< > = ( ) . * , / + - [ ]");
    let expected = ["<", ">", "=", "(", ")", ".", "*", ",", "/", "+", "-", "[", "]"];
    for (i, punct) in expected.iter().enumerate() {
        assert_token(&lexer.next().unwrap(), TokenKind::Punct, punct);
        if i + 1 < expected.len() {
            skip(&mut lexer, TokenKind::Space);
        }
    }
}

#[test]
fn end_of_file_repeats() {
    let mut lexer = tokenize("done");
    skip(&mut lexer, TokenKind::Identifier);
    let eof = lexer.next().unwrap();
    assert!(eof.is_eof());
    assert_eq!(eof.position(), 4);
    assert!(lexer.next().unwrap().is_eof());
    assert!(lexer.next().unwrap().is_eof());
}

#[test]
fn positions_are_byte_offsets() {
    let tokens = tokenize("a  'b'").tokenize_all().unwrap();
    let positions: Vec<usize> = tokens.iter().map(Token::position).collect();
    assert_eq!(positions, vec![0, 1, 3, 6]);
}

#[test]
fn unterminated_string_is_an_error() {
    let err = tokenize("select 'abc").tokenize_all().unwrap_err();
    assert_eq!(
        err,
        LexError::UnterminatedQuote {
            position: 7,
            delimiter: '\'',
        }
    );
}

#[test]
fn unterminated_identifier_is_an_error() {
    let err = tokenize("`abc").tokenize_all().unwrap_err();
    assert!(matches!(
        err,
        LexError::UnterminatedQuote {
            position: 0,
            delimiter: '`'
        }
    ));
}

#[test]
fn unexpected_character_is_an_error() {
    let err = tokenize("a ? b").tokenize_all().unwrap_err();
    match err {
        LexError::UnexpectedCharacter { position, rest } => {
            assert_eq!(position, 2);
            assert_eq!(rest, "? b");
        }
        other => panic!("Expected UnexpectedCharacter, got {other:?}"),
    }
}

#[test]
fn lone_bang_and_colon_are_errors() {
    assert!(tokenize("!").next().is_err());
    assert!(tokenize(":").next().is_err());
}
