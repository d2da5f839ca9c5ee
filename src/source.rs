//! Immutable source text handed to the lexer.
//!
//! A `SourceBuffer` is built once, never mutated, and may be shared by any
//! number of lexers at the same time since they only ever borrow it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LexError;
use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    text: String,
    path: Option<PathBuf>,
}

impl SourceBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    /// Load a file into memory. This is the only fallible way to build a
    /// buffer; a missing or non-UTF-8 file is reported as `UnreadableSource`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source");
        Ok(Self {
            text,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The char starting at byte `offset`, or `None` past the end or inside
    /// a multi-byte char.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(offset..)?.chars().next()
    }

    pub fn slice(&self, span: Span) -> Option<&str> {
        span.as_str(&self.text)
    }
}

impl From<&str> for SourceBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceBuffer {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
