pub mod config;
pub mod error;
pub mod lexer;
pub mod logging;
pub mod source;
pub mod span;

pub use config::LexerConfig;
pub use error::LexError;
pub use lexer::token::{Token, TokenKind};
pub use lexer::{tokenize, Lexer};
pub use source::SourceBuffer;
pub use span::{Position, Span};
