//! The `translate` command: turn a Larch program into C++ text.

use std::path::Path;

use super::read_source;

/// Translate `path` and persist the result.
///
/// On success the whole output goes to `-o` (with a confirmation on
/// stderr) or to stdout. On failure nothing is written anywhere: the
/// partial output is not well-formed and must not be persisted.
pub fn translate_file(path: &str, output: Option<&Path>) {
    let source = read_source(path);

    match larch_translate::translate(&source) {
        Ok(text) => match output {
            Some(out_path) => {
                if let Err(e) = std::fs::write(out_path, &text) {
                    eprintln!("error: cannot write '{}': {e}", out_path.display());
                    std::process::exit(1);
                }
                eprintln!("Translation completed successfully: {}", out_path.display());
            }
            None => print!("{text}"),
        },
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
