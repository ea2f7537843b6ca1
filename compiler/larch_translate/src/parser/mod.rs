//! Recursive-descent parser/translator.
//!
//! The parser pulls one token at a time from the scanner and emits C++
//! text the moment each construct is recognized -- there is no AST. The
//! grammar is context-sensitive at the token level (reserved operator
//! names, the sentinel double-close), so each production is one method
//! and the emitted strings are exact output contracts.
//!
//! Top-level grammar:
//!
//! ```text
//! program   = "(" { class-decl | function-decl } ")"
//! class-decl = "class" ident [ "(" block { block } ] ")"
//! block     = ("public" | "private") call-form...
//! call-form = "(" operator operand operand
//! function-decl = "fn" ident "(" params ")" body
//! ```
//!
//! Every grammar violation is immediately fatal; there is no backtracking
//! and no recovery. Already-emitted output is abandoned by the caller on
//! failure.

use crate::emitter::Emitter;
use crate::error::TranslateError;
use larch_lexer::{Scanner, Token, TokenKind};
use tracing::trace;

/// Recursive-descent consumer of the token stream.
///
/// Owns both halves of the run's mutable state -- the scanner (cursor) and
/// the emitter (output buffer) -- so the whole parse threads state by
/// exclusive ownership rather than through globals.
pub struct Parser<'a> {
    tokens: Scanner<'a>,
    out: Emitter,
}

impl<'a> Parser<'a> {
    /// Create a parser over a token stream with a fresh emitter.
    pub fn new(tokens: Scanner<'a>) -> Self {
        Self {
            tokens,
            out: Emitter::new(),
        }
    }

    /// Run the parse to completion and hand back the accumulated output.
    pub fn run(mut self) -> Result<String, TranslateError> {
        self.program()?;
        Ok(self.out.into_output())
    }

    // ─── Token plumbing ──────────────────────────────────────────────────

    /// Pull the next token, converting tokenizer failures.
    fn next(&mut self) -> Result<Token, TranslateError> {
        Ok(self.tokens.next_token()?)
    }

    /// Pull the next token and require an exact kind.
    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, TranslateError> {
        let token = self.next()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(TranslateError::syntax(expected, &token))
        }
    }

    /// Pull a call-form operand: any token except end-of-input.
    fn operand(&mut self) -> Result<Token, TranslateError> {
        let token = self.next()?;
        if token.kind == TokenKind::Eof {
            Err(TranslateError::syntax("a call-form operand", &token))
        } else {
            Ok(token)
        }
    }

    // ─── Top level ───────────────────────────────────────────────────────

    /// program = "(" { class-decl | function-decl } ")"
    ///
    /// Declarations are recognized by their leading keyword. Non-identifier
    /// tokens at this level -- the outer list's own closing parenthesis and
    /// surfaced comment tokens -- carry no translation and are skipped; an
    /// identifier that is neither `class` nor `fn` is fatal.
    fn program(&mut self) -> Result<(), TranslateError> {
        let first = self.next()?;
        match first.kind {
            TokenKind::OpenParen => {}
            // A lone leading `)` yields an empty translation.
            TokenKind::CloseParen => return Ok(()),
            _ => return Err(TranslateError::syntax("`(`", &first)),
        }
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Eof => return Ok(()),
                TokenKind::Ident => match token.text.as_str() {
                    "class" => self.class_decl()?,
                    "fn" => self.function_decl()?,
                    _ => return Err(TranslateError::syntax("`class` or `fn`", &token)),
                },
                _ => {}
            }
        }
    }

    // ─── Classes ─────────────────────────────────────────────────────────

    /// class-decl = "class" ident [ "(" block { block } ] ")"
    ///
    /// Emits `class <name> { \n`, the member blocks, then `}; \n`. An
    /// immediately-closed declaration emits an empty class shell. At most
    /// one `public` and one `private` block are recognized, in either
    /// order; `public` twice or any other keyword is fatal.
    fn class_decl(&mut self) -> Result<(), TranslateError> {
        trace!("class_decl");
        self.out.push("class ");
        let name = self.expect(TokenKind::Ident, "a class name")?;
        self.out.push(&name.text);
        self.out.push(" { \n");

        let token = self.next()?;
        match token.kind {
            TokenKind::CloseParen => {
                // Empty class shell: `(class Empty)`.
                self.out.push("}; \n");
                return Ok(());
            }
            TokenKind::OpenParen => {}
            _ => return Err(TranslateError::syntax("`(` or `)`", &token)),
        }

        let keyword = self.expect(TokenKind::Ident, "`public` or `private`")?;
        match keyword.text.as_str() {
            "public" => {
                self.out.push("public: \n");
                self.block_body()?;
                let token = self.next()?;
                match token.kind {
                    TokenKind::CloseParen => {
                        self.out.push("}; \n");
                        Ok(())
                    }
                    TokenKind::OpenParen => {
                        let keyword = self.next()?;
                        if keyword.kind == TokenKind::Ident && keyword.text == "private" {
                            self.out.push("private: \n");
                            self.block_body()?;
                            self.expect(TokenKind::CloseParen, "`)` to close the class")?;
                            self.out.push("}; \n");
                            Ok(())
                        } else {
                            Err(TranslateError::syntax("`private`", &keyword))
                        }
                    }
                    _ => Err(TranslateError::syntax("`(` or `)`", &token)),
                }
            }
            "private" => {
                self.out.push("private: \n");
                self.block_body()?;
                self.expect(TokenKind::CloseParen, "`)` to close the class")?;
                self.out.push("}; \n");
                Ok(())
            }
            _ => Err(TranslateError::syntax("`public` or `private`", &keyword)),
        }
    }

    // ─── Call-forms ──────────────────────────────────────────────────────

    /// Body of a public/private block: consumes the opening parenthesis of
    /// the first call-form, then the call-form sequence.
    fn block_body(&mut self) -> Result<(), TranslateError> {
        // The grammar never validates this token; it is the `(` opening
        // the block's first call-form.
        self.next()?;
        self.call_sequence()
    }

    /// One or more call-forms, terminated by the sentinel double-close:
    /// after a call-form, two consecutive `)` tokens close the form's own
    /// grouping and the enclosing block in one step.
    ///
    /// The loop always consumes at least one call-form; empty bodies are
    /// reachable only through the immediate-close short-circuits in the
    /// callers, a structural limitation of the accepted language.
    fn call_sequence(&mut self) -> Result<(), TranslateError> {
        loop {
            self.call_form()?;
            let first = self.next()?;
            let second = self.next()?;
            if first.kind == TokenKind::Eof || second.kind == TokenKind::Eof {
                let at = if first.kind == TokenKind::Eof {
                    first
                } else {
                    second
                };
                return Err(TranslateError::syntax("`)` to close the body", &at));
            }
            if first.kind == TokenKind::CloseParen && second.kind == TokenKind::CloseParen {
                return Ok(());
            }
        }
    }

    /// call-form: the stream is positioned just past the form's opening
    /// parenthesis; reads the operator and both operands.
    ///
    /// `(init <type> <name>)` emits a declaration, `<type> <name> ; \n`.
    /// Any other operator is a binary/assignment call `(<op> <lhs> <rhs>)`
    /// emitting `<lhs> <op><rhs>; \n` -- no space between the operator and
    /// the right operand; the exact spacing is part of the output contract.
    fn call_form(&mut self) -> Result<(), TranslateError> {
        let op = self.next()?;
        if op.kind == TokenKind::Eof {
            return Err(TranslateError::syntax("a call-form operator", &op));
        }
        if op.kind == TokenKind::Ident && op.text == "cMethod" {
            // Recognized, never translated.
            return Err(TranslateError::UnsupportedConstruct);
        }
        if op.kind == TokenKind::Ident && op.text == "init" {
            trace!("call_form: init");
            let ty = self.operand()?;
            let name = self.operand()?;
            self.out.push(&ty.text);
            self.out.push(" ");
            self.out.push(&name.text);
            self.out.push(" ; \n");
        } else {
            trace!(operator = %op.text, "call_form: binary");
            let lhs = self.operand()?;
            let rhs = self.operand()?;
            self.out.push(&lhs.text);
            self.out.push(" ");
            self.out.push(&op.text);
            self.out.push(&rhs.text);
            self.out.push("; \n");
        }
        Ok(())
    }

    // ─── Functions ───────────────────────────────────────────────────────

    /// function-decl = "fn" ident ... -- `main` gets the entry rule, every
    /// other name the generic rule.
    fn function_decl(&mut self) -> Result<(), TranslateError> {
        let name = self.expect(TokenKind::Ident, "a function name")?;
        if name.text == "main" {
            self.main_entry()
        } else {
            self.generic_function(&name.text)
        }
    }

    /// main-entry: requires an empty parameter list and emits
    /// `int main() { `; the body always ends with `return 0;} `, whether
    /// or not any call-forms were present.
    fn main_entry(&mut self) -> Result<(), TranslateError> {
        trace!("main_entry");
        self.out.push("int main");
        self.expect(TokenKind::OpenParen, "`(` after `main`")?;
        self.expect(TokenKind::CloseParen, "`)`: main takes no parameters")?;
        self.out.push("() { ");

        let token = self.next()?;
        if token.kind == TokenKind::CloseParen {
            self.out.push("return 0;} ");
            return Ok(());
        }
        // `token` was the `(` opening the first call-form.
        self.call_sequence()?;
        self.out.push("return 0;} ");
        Ok(())
    }

    /// generic-function: emits `void <name>(`, copies parameter tokens
    /// verbatim (each followed by one space, no validation) up to the
    /// closing parenthesis, then `) {`, the body, and `}` -- no implicit
    /// return.
    fn generic_function(&mut self, name: &str) -> Result<(), TranslateError> {
        trace!(name = %name, "generic_function");
        self.out.push("void ");
        self.out.push(name);
        self.expect(TokenKind::OpenParen, "`(` to open the parameter list")?;
        self.out.push("(");

        let mut token = self.next()?;
        while token.kind != TokenKind::CloseParen {
            if token.kind == TokenKind::Eof {
                return Err(TranslateError::syntax(
                    "`)` to close the parameter list",
                    &token,
                ));
            }
            self.out.push(&token.text);
            self.out.push(" ");
            token = self.next()?;
        }
        self.out.push(") {");

        let token = self.next()?;
        if token.kind == TokenKind::CloseParen {
            self.out.push("}");
            return Ok(());
        }
        // `token` was the `(` opening the first call-form.
        self.call_sequence()?;
        self.out.push("}");
        Ok(())
    }
}
