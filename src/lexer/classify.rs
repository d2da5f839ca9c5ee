//! Character classes used by the dispatcher. `None` stands for "no char"
//! (end of input) and never belongs to any class.
//!
//! Classes follow Unicode properties, so `é` is alphabetic and U+00A0 is
//! whitespace.

pub fn is_whitespace(c: Option<char>) -> bool {
    c.is_some_and(char::is_whitespace)
}

pub fn is_digit(c: Option<char>) -> bool {
    c.is_some_and(char::is_numeric)
}

pub fn is_alpha(c: Option<char>) -> bool {
    c.is_some_and(char::is_alphabetic)
}

/// Alphanumeric or underscore.
pub fn is_identifier_char(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_alphanumeric() || c == '_')
}

pub fn is_quote(c: Option<char>) -> bool {
    c == Some('"')
}

pub fn is_comment_start(c: Option<char>) -> bool {
    c == Some('#')
}
