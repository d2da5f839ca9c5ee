use php_lexer::config::{KeywordMatching, LexerConfig};
use php_lexer::{tokenize, LexError, Lexer, SourceBuffer, Token, TokenKind};
use pretty_assertions::assert_eq;

fn lex_with(source: &str, config: LexerConfig) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::new(source);
    Lexer::with_config(&buffer, config).scan_all()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn pairs(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source).unwrap().into_iter().map(|t| (t.kind, t.text)).collect()
}

#[test]
fn identifier_and_punctuation() {
    let tokens = tokenize("abc123 { } ( ) ;").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::SemiColon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[0].text, "abc123");

    let columns: Vec<_> = tokens.iter().map(|t| (t.position.line, t.position.column)).collect();
    assert_eq!(columns, vec![(1, 1), (1, 8), (1, 10), (1, 12), (1, 14), (1, 16), (1, 17)]);
}

#[test]
fn variable_assignment() {
    assert_eq!(
        pairs("$x = 5;"),
        vec![
            (TokenKind::Variable, "$x".to_string()),
            (TokenKind::Eq, "=".to_string()),
            (TokenKind::LNumber, "5".to_string()),
            (TokenKind::SemiColon, ";".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn dash_compounds_consume_two_chars() {
    let tokens = tokenize("-> -= -- -< -: -").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Arrow,
            TokenKind::MinusEq,
            TokenKind::Dec,
            TokenKind::MinusLt,
            TokenKind::MinusColon,
            TokenKind::Minus,
            TokenKind::Eof,
        ]
    );
    for token in &tokens[..5] {
        assert_eq!(token.position.length, 2, "{token}");
    }
    assert_eq!(tokens[5].position.length, 1);
}

#[test]
fn comment_stops_before_newline() {
    assert_eq!(
        pairs("# a comment\nclass"),
        vec![
            (TokenKind::Comment, "# a comment".to_string()),
            (TokenKind::Class, "class".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn equals_extend_greedily() {
    assert_eq!(
        kinds("= == === ===="),
        vec![
            TokenKind::Eq,
            TokenKind::EqEq,
            TokenKind::EqEqEq,
            TokenKind::EqEqEq,
            TokenKind::Eq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn single_and_double_operators() {
    assert_eq!(
        kinds("a & b | c && d || e"),
        vec![
            TokenKind::Identifier,
            TokenKind::Ampersand,
            TokenKind::Identifier,
            TokenKind::Pipe,
            TokenKind::Identifier,
            TokenKind::AmpersandAmpersand,
            TokenKind::Identifier,
            TokenKind::PipePipe,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("+ += ! != : :: :::"),
        vec![
            TokenKind::Plus,
            TokenKind::PlusEq,
            TokenKind::Bang,
            TokenKind::BangEq,
            TokenKind::Colon,
            TokenKind::DoubleColon,
            TokenKind::DoubleColon,
            TokenKind::Colon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lone_ampersand_at_end_of_input_advances() {
    assert_eq!(kinds("&"), vec![TokenKind::Ampersand, TokenKind::Eof]);
    assert_eq!(kinds("|"), vec![TokenKind::Pipe, TokenKind::Eof]);
}

#[test]
fn structural_tokens() {
    assert_eq!(
        pairs("namespace App\\Models;"),
        vec![
            (TokenKind::Namespace, "namespace".to_string()),
            (TokenKind::Identifier, "App".to_string()),
            (TokenKind::NsSeparator, "\\".to_string()),
            (TokenKind::Identifier, "Models".to_string()),
            (TokenKind::SemiColon, ";".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
    assert_eq!(
        kinds("f(a, b.c)"),
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn open_tag() {
    assert_eq!(kinds("<?php $a;"), vec![TokenKind::OpenTag, TokenKind::Variable, TokenKind::SemiColon, TokenKind::Eof]);

    match tokenize("<?ph") {
        Err(LexError::UnexpectedCharacter { ch, line, column }) => assert_eq!((ch, line, column), ('<', 1, 1)),
        other => panic!("expected UnexpectedCharacter, got {other:?}"),
    }
}

#[test]
fn keywords_need_a_word_boundary() {
    assert_eq!(
        pairs("classify class newer new"),
        vec![
            (TokenKind::Identifier, "classify".to_string()),
            (TokenKind::Class, "class".to_string()),
            (TokenKind::Identifier, "newer".to_string()),
            (TokenKind::New, "new".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
    assert_eq!(
        kinds("extends implements public protected private true truely"),
        vec![
            TokenKind::Extends,
            TokenKind::Implements,
            TokenKind::Public,
            TokenKind::Protected,
            TokenKind::Private,
            TokenKind::True,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn only_null_ignores_case() {
    assert_eq!(
        kinds("null NULL Null Class TRUE"),
        vec![
            TokenKind::Null,
            TokenKind::Null,
            TokenKind::Null,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn prefix_matching_splits_words() {
    let config = LexerConfig { keywords: KeywordMatching::Prefix, ..LexerConfig::default() };
    let tokens = lex_with("classify truely NULLABLE", config).unwrap();
    let pairs: Vec<_> = tokens.into_iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        pairs,
        vec![
            (TokenKind::Class, "class".to_string()),
            (TokenKind::Identifier, "ify".to_string()),
            (TokenKind::True, "true".to_string()),
            (TokenKind::Identifier, "ly".to_string()),
            (TokenKind::Null, "NULL".to_string()),
            (TokenKind::Identifier, "ABLE".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn numbers_are_integers_only() {
    assert_eq!(
        pairs("12.5 7x"),
        vec![
            (TokenKind::LNumber, "12".to_string()),
            (TokenKind::Dot, ".".to_string()),
            (TokenKind::LNumber, "5".to_string()),
            (TokenKind::LNumber, "7".to_string()),
            (TokenKind::Identifier, "x".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn strings_keep_their_quotes_and_ignore_escapes() {
    assert_eq!(
        pairs(r#"$s = "hello world";"#),
        vec![
            (TokenKind::Variable, "$s".to_string()),
            (TokenKind::Eq, "=".to_string()),
            (TokenKind::StringLiteral, "\"hello world\"".to_string()),
            (TokenKind::SemiColon, ";".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );

    let tokens = lex_with(r#""a\"b""#, LexerConfig::default().lenient()).unwrap();
    let pairs: Vec<_> = tokens.into_iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        pairs,
        vec![
            (TokenKind::StringLiteral, r#""a\""#.to_string()),
            (TokenKind::Identifier, "b".to_string()),
            (TokenKind::StringLiteral, "\"".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn unterminated_string_strict() {
    match tokenize("$a = \"abc") {
        Err(LexError::UnterminatedString { line, column }) => assert_eq!((line, column), (1, 6)),
        other => panic!("expected UnterminatedString, got {other:?}"),
    }
}

#[test]
fn unterminated_string_lenient() {
    let tokens = lex_with("\"abc", LexerConfig::default().lenient()).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text, "\"abc");
    assert_eq!(tokens[0].position.length, 4);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn unterminated_comment() {
    match tokenize("$a; # trailing") {
        Err(LexError::UnterminatedComment { line, column }) => assert_eq!((line, column), (1, 5)),
        other => panic!("expected UnterminatedComment, got {other:?}"),
    }

    let tokens = lex_with("$a; # trailing", LexerConfig::default().lenient()).unwrap();
    assert_eq!(tokens[2].kind, TokenKind::Comment);
    assert_eq!(tokens[2].text, "# trailing");
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn unexpected_character_reports_location() {
    match tokenize("$a;\n  @") {
        Err(LexError::UnexpectedCharacter { ch, line, column }) => assert_eq!((ch, line, column), ('@', 2, 3)),
        other => panic!("expected UnexpectedCharacter, got {other:?}"),
    }
}

#[test]
fn whitespace_only_input() {
    for source in ["", " ", "\n\n", " \t\r\n  "] {
        assert_eq!(kinds(source), vec![TokenKind::Eof], "{source:?}");
    }
}

#[test]
fn unicode_identifiers() {
    let tokens = tokenize("$café = naïve;").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].text, "$café");
    assert_eq!(tokens[0].position.length, 5);
    assert_eq!(tokens[0].span.len(), 6);
    assert_eq!(tokens[1].position.column, 7);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].text, "naïve");
}

#[test]
fn eof_is_idempotent() {
    let buffer = SourceBuffer::new("a ");
    let mut lexer = Lexer::new(&buffer);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);

    let first = lexer.next_token().unwrap();
    assert_eq!(first.kind, TokenKind::Eof);
    let offset = lexer.offset();
    for _ in 0..3 {
        let again = lexer.next_token().unwrap();
        assert_eq!(again, first);
        assert_eq!(lexer.offset(), offset);
    }
}

#[test]
fn errors_are_sticky() {
    let buffer = SourceBuffer::new("a @ b");
    let mut lexer = Lexer::new(&buffer);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert!(matches!(lexer.next_token(), Err(LexError::UnexpectedCharacter { ch: '@', .. })));
    let offset = lexer.offset();
    assert!(matches!(lexer.next_token(), Err(LexError::UnexpectedCharacter { ch: '@', .. })));
    assert_eq!(lexer.offset(), offset);
}

#[test]
fn iterator_stops_after_eof_or_error() {
    let buffer = SourceBuffer::new("$a;");
    let results: Vec<_> = Lexer::new(&buffer).collect();
    assert_eq!(results.len(), 3);
    assert!(matches!(results.last(), Some(Ok(token)) if token.kind == TokenKind::Eof));

    let buffer = SourceBuffer::new("$a @ $b");
    let results: Vec<_> = Lexer::new(&buffer).collect();
    assert_eq!(results.len(), 2);
    assert!(results[1].is_err());
}

#[test]
fn one_buffer_many_lexers() {
    let buffer = SourceBuffer::new("class A {}");
    let mut first = Lexer::new(&buffer);
    let mut second = Lexer::new(&buffer);
    first.next_token().unwrap();
    first.next_token().unwrap();
    assert_eq!(second.next_token().unwrap().kind, TokenKind::Class);
    assert_eq!(first.next_token().unwrap().kind, TokenKind::OpenBrace);
}

#[test]
fn tokens_serialize_to_json() {
    let tokens = tokenize("$x").unwrap();
    let json = serde_json::to_value(&tokens[0]).unwrap();
    assert_eq!(json["kind"], "Variable");
    assert_eq!(json["text"], "$x");
    assert_eq!(json["position"]["line"], 1);
    assert_eq!(json["position"]["length"], 2);
    assert_eq!(json["span"]["end"], 2);
}
