use super::*;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(&buf);
    let mut tokens = Vec::new();
    loop {
        let tok = match scanner.next_token() {
            Ok(tok) => tok,
            Err(e) => panic!("unexpected lex error for {source:?}: {e}"),
        };
        if tok.kind == TokenKind::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

/// Helper: scan and return kinds only.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan(source).iter().map(|t| t.kind).collect()
}

/// Helper: scan a source expected to fail, returning the error.
fn scan_err(source: &str) -> LexError {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(&buf);
    loop {
        match scanner.next_token() {
            Ok(tok) if tok.kind == TokenKind::Eof => {
                panic!("expected lex error for {source:?}, got clean EOF")
            }
            Ok(_) => {}
            Err(e) => return e,
        }
    }
}

// === Identifiers ===

#[test]
fn plain_identifier() {
    let tokens = scan("hello");
    assert_eq!(tokens, vec![Token::new(TokenKind::Ident, "hello")]);
}

#[test]
fn identifier_with_digits_and_underscore() {
    let tokens = scan("my_var2");
    assert_eq!(tokens, vec![Token::new(TokenKind::Ident, "my_var2")]);
}

#[test]
fn dotted_qualified_identifier() {
    let tokens = scan("std.vector");
    assert_eq!(tokens, vec![Token::new(TokenKind::Ident, "std.vector")]);
}

#[test]
fn identifier_with_trailing_sigils() {
    // Sigils fuse into the run when it starts with a letter.
    let tokens = scan("buf*");
    assert_eq!(tokens, vec![Token::new(TokenKind::Ident, "buf*")]);
    let tokens = scan("val&");
    assert_eq!(tokens, vec![Token::new(TokenKind::Ident, "val&")]);
}

#[test]
fn multi_sigil_identifier_accepted_unvalidated() {
    let tokens = scan("a*&b");
    assert_eq!(tokens, vec![Token::new(TokenKind::Ident, "a*&b")]);
}

// === Numeric literals ===

#[test]
fn integer_literal() {
    let tokens = scan("42");
    assert_eq!(tokens, vec![Token::new(TokenKind::Number, "42")]);
}

#[test]
fn decimal_literal() {
    let tokens = scan("2.5");
    assert_eq!(tokens, vec![Token::new(TokenKind::Number, "2.5")]);
}

#[test]
fn multi_dot_literal_accepted_unvalidated() {
    // Documented tolerance: dot arrangement is not checked here.
    let tokens = scan("1.2.3");
    assert_eq!(tokens, vec![Token::new(TokenKind::Number, "1.2.3")]);
}

// === String literals ===

#[test]
fn string_literal_keeps_quotes() {
    let tokens = scan("\"abc\"");
    assert_eq!(tokens, vec![Token::new(TokenKind::Str, "\"abc\"")]);
}

#[test]
fn empty_string_literal() {
    let tokens = scan("\"\"");
    assert_eq!(tokens, vec![Token::new(TokenKind::Str, "\"\"")]);
}

#[test]
fn string_may_span_lines() {
    let tokens = scan("\"a\nb\"");
    assert_eq!(tokens, vec![Token::new(TokenKind::Str, "\"a\nb\"")]);
}

#[test]
fn unterminated_string_fails() {
    assert_eq!(scan_err("\"abc"), LexError::UnterminatedString);
}

#[test]
fn unterminated_string_after_valid_tokens_fails() {
    assert_eq!(scan_err("(= a \"abc"), LexError::UnterminatedString);
}

// === Punctuation ===

#[test]
fn parens_comma_dot() {
    assert_eq!(
        scan_kinds("( ) , ."),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Comma,
            TokenKind::Dot,
        ]
    );
}

#[test]
fn assign_vs_equality() {
    assert_eq!(scan_kinds("="), vec![TokenKind::Assign]);
    assert_eq!(scan_kinds("=="), vec![TokenKind::EqualEqual]);
    // Three '=' read as '==' then '='.
    assert_eq!(
        scan_kinds("==="),
        vec![TokenKind::EqualEqual, TokenKind::Assign]
    );
}

#[test]
fn minus_vs_arrow() {
    assert_eq!(scan_kinds("-"), vec![TokenKind::Minus]);
    assert_eq!(scan_kinds("->"), vec![TokenKind::Arrow]);
    assert_eq!(
        scan("- >").iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Minus, TokenKind::Symbol]
    );
}

#[test]
fn plus_and_slash() {
    assert_eq!(scan_kinds("+ /"), vec![TokenKind::Plus, TokenKind::Slash]);
}

// === Sigils ===

#[test]
fn star_before_letter_folds_into_identifier() {
    let tokens = scan("*buf");
    assert_eq!(tokens, vec![Token::new(TokenKind::Ident, "*buf")]);
}

#[test]
fn star_alone_is_marker() {
    let tokens = scan("*");
    assert_eq!(tokens, vec![Token::new(TokenKind::Star, "*")]);
    assert_eq!(scan_kinds("* 1"), vec![TokenKind::Star, TokenKind::Number]);
}

#[test]
fn ampersand_before_letter_folds_into_identifier() {
    let tokens = scan("&ref");
    assert_eq!(tokens, vec![Token::new(TokenKind::Ident, "&ref")]);
}

#[test]
fn ampersand_alone_fails() {
    assert_eq!(scan_err("&"), LexError::InvalidCharacter);
    assert_eq!(scan_err("& 1"), LexError::InvalidCharacter);
    assert_eq!(scan_err("&1"), LexError::InvalidCharacter);
}

// === Comments ===

#[test]
fn line_comment_surfaced_as_token() {
    let tokens = scan("; a comment\nx");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::LineComment, "; a comment"),
            Token::new(TokenKind::Ident, "x"),
        ]
    );
}

#[test]
fn comment_at_end_of_input() {
    let tokens = scan("; trailing");
    assert_eq!(tokens, vec![Token::new(TokenKind::LineComment, "; trailing")]);
}

// === Catch-all symbols ===

#[test]
fn unknown_ascii_becomes_symbol() {
    let tokens = scan("@ #");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Symbol, "@"),
            Token::new(TokenKind::Symbol, "#"),
        ]
    );
}

#[test]
fn unknown_multibyte_becomes_one_symbol() {
    let tokens = scan("é");
    assert_eq!(tokens, vec![Token::new(TokenKind::Symbol, "é")]);
}

// === Whitespace ===

#[test]
fn whitespace_and_newlines_produce_no_tokens() {
    assert_eq!(scan("  \t \n\n \r\n "), vec![]);
}

#[test]
fn whitespace_between_tokens_is_invisible() {
    let dense = scan("(= a 1)");
    let airy = scan("(\n  =\t a\n\n   1\n)");
    assert_eq!(dense, airy);
}

// === End-of-input stability ===

#[test]
fn eof_is_stable_across_repeated_calls() {
    let buf = SourceBuffer::new("x");
    let mut scanner = Scanner::new(&buf);
    let first = scanner.next_token();
    assert_eq!(first, Ok(Token::new(TokenKind::Ident, "x")));
    for _ in 0..8 {
        assert_eq!(scanner.next_token(), Ok(Token::eof()));
    }
}

#[test]
fn empty_input_yields_eof_immediately() {
    let buf = SourceBuffer::new("");
    let mut scanner = Scanner::new(&buf);
    assert_eq!(scanner.next_token(), Ok(Token::eof()));
    assert_eq!(scanner.next_token(), Ok(Token::eof()));
}

#[test]
fn interior_null_reads_as_end_of_input() {
    let buf = SourceBuffer::new("a\0b");
    let mut scanner = Scanner::new(&buf);
    assert_eq!(scanner.next_token(), Ok(Token::new(TokenKind::Ident, "a")));
    assert_eq!(scanner.next_token(), Ok(Token::eof()));
    assert_eq!(scanner.next_token(), Ok(Token::eof()));
}

// === Whole-program shapes ===

#[test]
fn class_program_token_sequence() {
    assert_eq!(
        scan_kinds("(class A(public(init int a)(= a 1)))"),
        vec![
            TokenKind::OpenParen,
            TokenKind::Ident, // class
            TokenKind::Ident, // A
            TokenKind::OpenParen,
            TokenKind::Ident, // public
            TokenKind::OpenParen,
            TokenKind::Ident, // init
            TokenKind::Ident, // int
            TokenKind::Ident, // a
            TokenKind::CloseParen,
            TokenKind::OpenParen,
            TokenKind::Assign,
            TokenKind::Ident, // a
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::CloseParen,
            TokenKind::CloseParen,
        ]
    );
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    /// Generator for small token-shaped fragments that never lex-error.
    fn fragment() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("ident"),
            Just("x1"),
            Just("std.vec"),
            Just("*p"),
            Just("&r"),
            Just("42"),
            Just("2.5"),
            Just("\"s\""),
            Just("("),
            Just(")"),
            Just(","),
            Just("="),
            Just("=="),
            Just("->"),
            Just("-"),
            Just("+"),
            Just("/"),
        ]
    }

    /// Generator for inter-token whitespace runs.
    fn gap() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just(" "), Just("  "), Just("\t"), Just("\n"), Just(" \n  ")]
    }

    proptest! {
        #[test]
        fn retokenizing_identical_input_is_deterministic(
            fragments in proptest::collection::vec(fragment(), 0..24),
        ) {
            let source = fragments.join(" ");
            let first = scan(&source);
            let second = scan(&source);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn token_sequence_is_whitespace_insensitive(
            fragments in proptest::collection::vec(fragment(), 0..24),
            gaps in proptest::collection::vec(gap(), 24),
        ) {
            let plain = fragments.join(" ");
            let mut airy = String::new();
            for (i, frag) in fragments.iter().enumerate() {
                airy.push_str(gaps[i]);
                airy.push_str(frag);
                airy.push(' ');
            }
            prop_assert_eq!(scan(&plain), scan(&airy));
        }

        #[test]
        fn scanner_never_panics_on_arbitrary_input(source in "\\PC*") {
            let buf = SourceBuffer::new(&source);
            let mut scanner = Scanner::new(&buf);
            // Bounded loop: every token consumes input or is Eof/Err.
            for _ in 0..=source.len() + 1 {
                match scanner.next_token() {
                    Ok(tok) if tok.kind == TokenKind::Eof => break,
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        }
    }
}
