use serde::Serialize;

use crate::span::{Position, Span};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text; empty for `Eof`.
    pub text: String,
    pub position: Position,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Serialize)]
pub enum TokenKind {
    // Keywords
    Class, Extends, Implements,
    Public, Protected, Private,
    Namespace, New,
    Null, // case-insensitive
    True,

    // Identifiers & Literals
    Identifier,
    LNumber,
    StringLiteral,
    Variable,
    NsSeparator, // \

    Comment,

    // Symbols
    Arrow, // ->
    DoubleColon, // ::
    Dot,

    Plus, Minus,
    Dec, // --
    MinusLt, // -<
    MinusColon, // -:

    Eq, // =
    PlusEq, MinusEq,

    EqEq, // ==
    EqEqEq, // ===
    Bang, // !
    BangEq, // !=

    Ampersand, // &
    Pipe, // |
    AmpersandAmpersand, // &&
    PipePipe, // ||

    SemiColon,
    Colon,
    Comma,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,

    OpenTag, // <?php

    Eof,
}

impl TokenKind {
    /// Stable display name, used by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Class => "Class",
            TokenKind::Extends => "Extends",
            TokenKind::Implements => "Implements",
            TokenKind::Public => "Public",
            TokenKind::Protected => "Protected",
            TokenKind::Private => "Private",
            TokenKind::Namespace => "Namespace",
            TokenKind::New => "New",
            TokenKind::Null => "Null",
            TokenKind::True => "True",
            TokenKind::Identifier => "Identifier",
            TokenKind::LNumber => "LNumber",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Variable => "Variable",
            TokenKind::NsSeparator => "NsSeparator",
            TokenKind::Comment => "Comment",
            TokenKind::Arrow => "Arrow",
            TokenKind::DoubleColon => "DoubleColon",
            TokenKind::Dot => "Dot",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Dec => "Dec",
            TokenKind::MinusLt => "MinusLt",
            TokenKind::MinusColon => "MinusColon",
            TokenKind::Eq => "Eq",
            TokenKind::PlusEq => "PlusEq",
            TokenKind::MinusEq => "MinusEq",
            TokenKind::EqEq => "EqEq",
            TokenKind::EqEqEq => "EqEqEq",
            TokenKind::Bang => "Bang",
            TokenKind::BangEq => "BangEq",
            TokenKind::Ampersand => "Ampersand",
            TokenKind::Pipe => "Pipe",
            TokenKind::AmpersandAmpersand => "AmpersandAmpersand",
            TokenKind::PipePipe => "PipePipe",
            TokenKind::SemiColon => "SemiColon",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::OpenBrace => "OpenBrace",
            TokenKind::CloseBrace => "CloseBrace",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::OpenTag => "OpenTag",
            TokenKind::Eof => "Eof",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Extends
                | TokenKind::Implements
                | TokenKind::Public
                | TokenKind::Protected
                | TokenKind::Private
                | TokenKind::Namespace
                | TokenKind::New
                | TokenKind::Null
                | TokenKind::True
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:?}", self.kind, self.text)
    }
}
