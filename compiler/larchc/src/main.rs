//! Larch translator CLI.
//!
//! The external collaborators around the translation core: source
//! acquisition (file path or `-` for stdin), output persistence (`-o`
//! path or stdout), and success/failure reporting with process exit
//! codes. The core itself never touches any of these.

mod commands;

use commands::{lex_file, translate_file};
use std::path::PathBuf;
use std::sync::Once;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "translate" => {
            if args.len() < 3 {
                eprintln!("Usage: larchc translate <file.larch | -> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  -o <path>    Write the C++ output to <path> instead of stdout");
                std::process::exit(1);
            }

            // Parse options, handling -o specially (needs lookahead)
            let mut output: Option<PathBuf> = None;
            let mut input: Option<String> = None;
            let mut i = 2;
            while i < args.len() {
                if args[i] == "-o" && i + 1 < args.len() {
                    output = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else if input.is_none() {
                    input = Some(args[i].clone());
                    i += 1;
                } else {
                    eprintln!("error: unexpected argument '{}'", args[i]);
                    std::process::exit(1);
                }
            }

            let Some(input) = input else {
                eprintln!("error: missing input path");
                eprintln!("Usage: larchc translate <file.larch | -> [-o <path>]");
                std::process::exit(1);
            };

            translate_file(&input, output.as_deref());
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: larchc lex <file.larch | ->");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Larch translator");
    eprintln!();
    eprintln!("Usage: larchc <command> [arguments]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  translate <file.larch | -> [-o <path>]   Translate a program to C++ text");
    eprintln!("  lex <file.larch | ->                     Dump the token stream");
    eprintln!("  help                                     Show this message");
    eprintln!();
    eprintln!("Pass '-' as the file to read the program from stdin.");
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=larch_translate=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
