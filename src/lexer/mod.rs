pub mod classify;
pub mod cursor;
pub mod token;

use memchr::memchr;

use classify::{is_alpha, is_comment_start, is_digit, is_identifier_char, is_quote, is_whitespace};
use cursor::Cursor;
use token::{Token, TokenKind};
use crate::config::{KeywordMatching, LexerConfig, PositionAnchor, UnterminatedPolicy};
use crate::error::LexError;
use crate::source::SourceBuffer;
use crate::span::{Position, Span};

/// Reserved words in the order fixed-length probing tries them.
const PREFIX_KEYWORDS: [(&str, TokenKind); 10] = [
    ("namespace", TokenKind::Namespace),
    ("class", TokenKind::Class),
    ("extends", TokenKind::Extends),
    ("implements", TokenKind::Implements),
    ("public", TokenKind::Public),
    ("protected", TokenKind::Protected),
    ("private", TokenKind::Private),
    ("new", TokenKind::New),
    ("null", TokenKind::Null),
    ("true", TokenKind::True),
];

fn keyword_kind(text: &str) -> Option<TokenKind> {
    match text {
        "namespace" => Some(TokenKind::Namespace),
        "class" => Some(TokenKind::Class),
        "extends" => Some(TokenKind::Extends),
        "implements" => Some(TokenKind::Implements),
        "public" => Some(TokenKind::Public),
        "protected" => Some(TokenKind::Protected),
        "private" => Some(TokenKind::Private),
        "new" => Some(TokenKind::New),
        "true" => Some(TokenKind::True),
        _ if text.eq_ignore_ascii_case("null") => Some(TokenKind::Null),
        _ => None,
    }
}

fn keyword_matches(keyword: &str, kind: TokenKind, probe: &str) -> bool {
    if kind == TokenKind::Null {
        keyword.eq_ignore_ascii_case(probe)
    } else {
        keyword == probe
    }
}

pub struct Lexer<'src> {
    source: &'src SourceBuffer,
    cursor: Cursor<'src>,
    config: LexerConfig,
    error: Option<LexError>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src SourceBuffer) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src SourceBuffer, config: LexerConfig) -> Self {
        tracing::debug!(?config, bytes = source.len(), "creating lexer");
        Self {
            source,
            cursor: Cursor::new(source.as_str(), config.newlines),
            config,
            error: None,
            finished: false,
        }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    /// Produce the next token. Once the end of input is reached every call
    /// returns another `Eof` without moving. Once an error is returned every
    /// call returns that error again.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(error) = &self.error {
            return Err(error.duplicate());
        }

        self.skip_whitespace();

        let start = self.cursor.offset();
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();

        let (kind, length) = match self.lex_kind(start_line, start_column) {
            Ok(lexed) => lexed,
            Err(error) => {
                tracing::debug!(%error, "lexing failed");
                self.error = Some(error.duplicate());
                return Err(error);
            }
        };

        if kind == TokenKind::Eof {
            return Ok(Token {
                kind,
                text: String::new(),
                position: self.cursor.position(1),
                span: Span::new(start, start),
            });
        }

        let end = self.cursor.offset();
        debug_assert!(end > start, "{kind} token did not advance the cursor");

        let position = match self.config.anchor {
            PositionAnchor::Start => Position::new(start_line, start_column, length),
            PositionAnchor::End => self.cursor.position(length),
        };
        let span = Span::new(start, end);
        let token = Token {
            kind,
            text: self.source.as_str()[start..end].to_string(),
            position,
            span,
        };
        tracing::trace!(kind = %token.kind, line = position.line, column = position.column, "token");
        Ok(token)
    }

    /// Drain the lexer. The last element is always the single `Eof` token.
    pub fn scan_all(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tracing::debug!(tokens = tokens.len(), "scan finished");
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while is_whitespace(self.cursor.current()) {
            self.cursor.advance(1);
        }
    }

    fn consume_while(&mut self, predicate: fn(Option<char>) -> bool) -> usize {
        let mut consumed = 0;
        while predicate(self.cursor.current()) {
            consumed += self.cursor.advance(1);
        }
        consumed
    }

    /// Classify and consume one token, returning its kind and length in chars.
    fn lex_kind(&mut self, line: usize, column: usize) -> Result<(TokenKind, usize), LexError> {
        let Some(c) = self.cursor.current() else {
            return Ok((TokenKind::Eof, 0));
        };

        if is_alpha(Some(c)) {
            return Ok(self.read_word());
        }
        if c == '$' {
            let length = self.cursor.advance(1) + self.consume_while(is_identifier_char);
            return Ok((TokenKind::Variable, length));
        }
        if is_digit(Some(c)) {
            return Ok((TokenKind::LNumber, self.consume_while(is_digit)));
        }
        if is_quote(Some(c)) {
            return self.read_string(line, column);
        }
        if is_comment_start(Some(c)) {
            return self.read_comment(line, column);
        }

        let (kind, width) = match c {
            '{' => (TokenKind::OpenBrace, 1),
            '}' => (TokenKind::CloseBrace, 1),
            '(' => (TokenKind::OpenParen, 1),
            ')' => (TokenKind::CloseParen, 1),
            ';' => (TokenKind::SemiColon, 1),
            '\\' => (TokenKind::NsSeparator, 1),
            ',' => (TokenKind::Comma, 1),
            '.' => (TokenKind::Dot, 1),
            ':' => {
                if self.cursor.peek(2) == "::" {
                    (TokenKind::DoubleColon, 2)
                } else {
                    (TokenKind::Colon, 1)
                }
            }
            '-' => match self.cursor.peek(2) {
                "-=" => (TokenKind::MinusEq, 2),
                "->" => (TokenKind::Arrow, 2),
                "--" => (TokenKind::Dec, 2),
                "-<" => (TokenKind::MinusLt, 2),
                "-:" => (TokenKind::MinusColon, 2),
                _ => (TokenKind::Minus, 1),
            },
            '&' => {
                if self.cursor.peek(2) == "&&" {
                    (TokenKind::AmpersandAmpersand, 2)
                } else {
                    (TokenKind::Ampersand, 1)
                }
            }
            '|' => {
                if self.cursor.peek(2) == "||" {
                    (TokenKind::PipePipe, 2)
                } else {
                    (TokenKind::Pipe, 1)
                }
            }
            '+' => {
                if self.cursor.peek(2) == "+=" {
                    (TokenKind::PlusEq, 2)
                } else {
                    (TokenKind::Plus, 1)
                }
            }
            '=' => {
                if self.cursor.peek(3) == "===" {
                    (TokenKind::EqEqEq, 3)
                } else if self.cursor.peek(2) == "==" {
                    (TokenKind::EqEq, 2)
                } else {
                    (TokenKind::Eq, 1)
                }
            }
            '!' => {
                if self.cursor.peek(2) == "!=" {
                    (TokenKind::BangEq, 2)
                } else {
                    (TokenKind::Bang, 1)
                }
            }
            '<' if self.cursor.peek(5) == "<?php" => (TokenKind::OpenTag, 5),
            _ => return Err(LexError::UnexpectedCharacter { ch: c, line, column }),
        };

        Ok((kind, self.cursor.advance(width)))
    }

    fn read_word(&mut self) -> (TokenKind, usize) {
        match self.config.keywords {
            KeywordMatching::WholeWord => {
                let start = self.cursor.offset();
                let length = self.consume_while(is_identifier_char);
                let text = &self.source.as_str()[start..self.cursor.offset()];
                (keyword_kind(text).unwrap_or(TokenKind::Identifier), length)
            }
            KeywordMatching::Prefix => {
                for (keyword, kind) in PREFIX_KEYWORDS {
                    // Keywords are ASCII, so byte length is char length.
                    let probe = self.cursor.peek(keyword.len());
                    if keyword_matches(keyword, kind, probe) {
                        return (kind, self.cursor.advance(keyword.len()));
                    }
                }
                (TokenKind::Identifier, self.consume_while(is_identifier_char))
            }
        }
    }

    fn read_string(&mut self, line: usize, column: usize) -> Result<(TokenKind, usize), LexError> {
        let open = self.cursor.advance(1);
        match memchr(b'"', self.cursor.rest().as_bytes()) {
            Some(close) => {
                let length = open + self.cursor.advance_bytes(close + 1);
                Ok((TokenKind::StringLiteral, length))
            }
            None => match self.config.unterminated {
                UnterminatedPolicy::Strict => Err(LexError::UnterminatedString { line, column }),
                UnterminatedPolicy::Lenient => {
                    tracing::warn!(line, column, "unterminated string literal runs to end of input");
                    Ok((TokenKind::StringLiteral, open + self.cursor.advance_to_end()))
                }
            },
        }
    }

    /// `#` up to, not including, the next `\n`.
    fn read_comment(&mut self, line: usize, column: usize) -> Result<(TokenKind, usize), LexError> {
        match memchr(b'\n', self.cursor.rest().as_bytes()) {
            Some(newline) => Ok((TokenKind::Comment, self.cursor.advance_bytes(newline))),
            None => match self.config.unterminated {
                UnterminatedPolicy::Strict => Err(LexError::UnterminatedComment { line, column }),
                UnterminatedPolicy::Lenient => {
                    tracing::warn!(line, column, "comment runs to end of input");
                    Ok((TokenKind::Comment, self.cursor.advance_to_end()))
                }
            },
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token, LexError>;

    /// Yields `Eof` (or the first error) once, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        if matches!(&result, Ok(token) if token.kind == TokenKind::Eof) || result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}

/// Lex `source` with the default configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::new(source);
    Lexer::new(&buffer).scan_all()
}
