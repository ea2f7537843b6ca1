//! CLI command implementations.

mod debug;
mod translate;

pub use debug::lex_file;
pub use translate::translate_file;

use std::io::Read;

/// Read the program text from a file path, or from stdin for `-`.
///
/// Exits the process with a friendly message on IO failure -- by the time
/// translation starts, the source is a plain in-memory string.
pub(super) fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("error reading stdin: {e}");
            std::process::exit(1);
        }
        return source;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
