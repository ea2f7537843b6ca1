//! Tokenizer error types.
//!
//! Each failure mode is a distinct case of one error enum, returned from
//! every scanner operation. The host decides what to do with the first
//! error; the translator treats each as immediately fatal.

use thiserror::Error;

/// Errors the scanner can raise.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal reached end-of-input before its closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// `&` not followed by a letter cannot start any token.
    #[error("invalid character: `&` must be followed by a letter")]
    InvalidCharacter,
}
