//! Debug commands: `lex` for inspecting the token stream.

use super::read_source;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let source = read_source(path);

    match larch_lexer::tokenize(&source) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for tok in &tokens {
                println!("  {:?} `{}`", tok.kind, tok.text);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
