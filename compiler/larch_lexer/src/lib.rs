//! Tokenizer for the Larch surface language.
//!
//! Larch source is a minimal S-expression notation. This crate turns an
//! in-memory source string into a pull-based sequence of classified
//! [`Token`] values:
//!
//! ```text
//! &str ──► SourceBuffer (sentinel-terminated bytes)
//!              │
//!              ▼
//!          Cursor (monotone byte position)
//!              │
//!              ▼
//!          Scanner::next_token() ──► Token { kind, text }
//! ```
//!
//! The scanner is hand-written: the grammar folds pointer/reference sigils
//! into identifier tokens depending on the following character, which is a
//! poor fit for derive-based lexers. Whitespace and newlines are skipped
//! with no token produced. After end-of-input the scanner keeps returning
//! [`TokenKind::Eof`] tokens forever.

pub mod cursor;
pub mod lex_error;
pub mod scanner;
pub mod source_buffer;
pub mod token;

pub use cursor::Cursor;
pub use lex_error::LexError;
pub use scanner::Scanner;
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenKind};

/// Tokenize an entire source string.
///
/// Convenience for token dumps and tests; the translator itself pulls
/// tokens one at a time from a [`Scanner`]. The returned sequence always
/// ends with exactly one [`TokenKind::Eof`] token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::new(source);
    let mut scanner = Scanner::new(&buffer);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
