//! Read position within a source buffer.
//!
//! The cursor only ever moves forward, one char at a time, through
//! [`Cursor::advance`]. Line and column bookkeeping happens there and nowhere
//! else, so every token sees the same rules.

use crate::config::NewlineTiming;
use crate::span::Position;

#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    input: &'src str,
    offset: usize,
    line: usize,
    column: usize,
    newlines: NewlineTiming,
}

impl<'src> Cursor<'src> {
    pub fn new(input: &'src str, newlines: NewlineTiming) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 1,
            newlines,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub fn position(&self, length: usize) -> Position {
        Position::new(self.line, self.column, length)
    }

    /// The char under the cursor.
    pub fn current(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// The next `n` chars starting at the cursor, or `""` unless all `n`
    /// are in bounds.
    pub fn peek(&self, n: usize) -> &'src str {
        let rest = &self.input[self.offset..];
        let mut chars = rest.char_indices();
        match chars.nth(n) {
            Some((end, _)) => &rest[..end],
            None if rest.chars().count() == n => rest,
            None => "",
        }
    }

    /// The input from the cursor to the end.
    pub fn rest(&self) -> &'src str {
        &self.input[self.offset..]
    }

    /// Move forward by up to `n` chars, stopping at end of input. Returns
    /// how many chars were actually consumed.
    pub fn advance(&mut self, n: usize) -> usize {
        let mut consumed = 0;
        while consumed < n {
            let Some(c) = self.current() else { break };
            self.offset += c.len_utf8();
            consumed += 1;

            match self.newlines {
                NewlineTiming::OnConsume => {
                    if c == '\n' {
                        self.line += 1;
                        self.column = 1;
                    } else {
                        self.column += 1;
                    }
                }
                NewlineTiming::Lookahead => {
                    self.column += 1;
                    if self.current() == Some('\n') {
                        self.line += 1;
                        self.column = 1;
                    }
                }
            }
        }
        consumed
    }

    /// Move forward `bytes` bytes (which must land on a char boundary).
    /// Returns the number of chars consumed.
    pub fn advance_bytes(&mut self, bytes: usize) -> usize {
        let end = (self.offset + bytes).min(self.input.len());
        let chars = self.input.get(self.offset..end).map_or(0, |s| s.chars().count());
        self.advance(chars)
    }

    pub fn advance_to_end(&mut self) -> usize {
        self.advance_bytes(self.input.len() - self.offset)
    }
}
