use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a scan. All variants are fatal: the lexer does
/// not resynchronise after reporting one.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("cannot read source file {}: {source}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    UnexpectedCharacter { ch: char, line: usize, column: usize },

    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },

    #[error("unterminated comment starting at line {line}, column {column}")]
    UnterminatedComment { line: usize, column: usize },
}

impl LexError {
    /// Line/column the error points at, if it has one.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            LexError::UnreadableSource { .. } => None,
            LexError::UnexpectedCharacter { line, column, .. }
            | LexError::UnterminatedString { line, column }
            | LexError::UnterminatedComment { line, column } => Some((*line, *column)),
        }
    }

    // io::Error is not Clone, so poisoned lexers rebuild the error by hand.
    pub(crate) fn duplicate(&self) -> LexError {
        match self {
            LexError::UnreadableSource { path, source } => LexError::UnreadableSource {
                path: path.clone(),
                source: std::io::Error::new(source.kind(), source.to_string()),
            },
            LexError::UnexpectedCharacter { ch, line, column } => LexError::UnexpectedCharacter {
                ch: *ch,
                line: *line,
                column: *column,
            },
            LexError::UnterminatedString { line, column } => LexError::UnterminatedString {
                line: *line,
                column: *column,
            },
            LexError::UnterminatedComment { line, column } => LexError::UnterminatedComment {
                line: *line,
                column: *column,
            },
        }
    }
}
