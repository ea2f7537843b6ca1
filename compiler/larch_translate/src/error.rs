//! Translation error types.
//!
//! One result/error union is returned from every parser operation. Every
//! kind is unconditionally fatal for the run: nothing is caught, retried,
//! or downgraded, and output accumulated before the failure point is
//! dropped. A host that wants richer tooling can still match on the
//! individual cases.

use larch_lexer::{LexError, Token, TokenKind};
use thiserror::Error;

/// Errors the parser/translator can raise.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The tokenizer failed underneath the parser.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token sequence violated the expected grammar production.
    #[error("syntax error: expected {expected}, found {found}")]
    Syntax {
        /// What the active grammar production required.
        expected: &'static str,
        /// Rendering of the offending token.
        found: String,
    },

    /// The reserved `cMethod` constructor form. Recognized syntactically,
    /// rejected always -- an intentionally incomplete feature.
    #[error("constructor forms (`cMethod`) are not supported")]
    UnsupportedConstruct,
}

impl TranslateError {
    /// Build a syntax error against the token that violated the grammar.
    pub(crate) fn syntax(expected: &'static str, found: &Token) -> Self {
        let found = if found.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            format!("`{}`", found.text)
        };
        TranslateError::Syntax { expected, found }
    }
}
