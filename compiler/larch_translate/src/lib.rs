//! Larch translator: S-expression surface syntax to C++ text.
//!
//! # Architecture
//!
//! ```text
//! &str (whole program)
//!     │
//!     ▼
//! Scanner::next_token() ──► Token
//!     │                       │ pulled one at a time
//!     ▼                       ▼
//! Parser (recursive descent) ──► Emitter::push(text)
//!     │
//!     ▼
//! String (whole C++ output) -- or the first fatal error
//! ```
//!
//! There is no intermediate AST: each grammar construct is translated the
//! moment it is recognized, so output fragments appear in exactly the
//! order constructs are recognized (left-to-right, depth-first). A run
//! either completes with the accumulated output or aborts on the first
//! error; partial output is dropped inside [`translate`] and never reaches
//! the caller.
//!
//! Input acquisition and output persistence are the caller's business --
//! nothing here touches the filesystem.

pub mod emitter;
pub mod error;
pub mod parser;

pub use emitter::Emitter;
pub use error::TranslateError;
pub use parser::Parser;

use larch_lexer::{Scanner, SourceBuffer};

/// Translate one complete Larch program into C++ source text.
///
/// The single-threaded, single-pass entry point: builds the tokenizer over
/// `source`, runs the parser to completion, and returns the emitter's
/// accumulated output.
pub fn translate(source: &str) -> Result<String, TranslateError> {
    let buffer = SourceBuffer::new(source);
    let scanner = Scanner::new(&buffer);
    Parser::new(scanner).run()
}
