//! Command-line entry parsing (ambient stack; spec.md §6).
//!
//! The teacher has no argument-parsing module at all — `Editor::with_file`
//! takes an `Option<String>` built by `main.rs` from `std::env::args()`
//! directly (confirmed: no `clap` dependency, no `env::args` parsing code
//! beyond what a caller does ad hoc). This crate has exactly one optional
//! positional argument, so manual parsing matches that minimalism rather
//! than pulling in a parser crate for one flag.

use crate::document::Document;
use crate::error::{EditorError, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, EditorError> {
    let mut iter = args.into_iter();
    iter.next(); // argv[0]
    let path = match iter.next() {
        Some(arg) if arg == "-h" || arg == "--help" => {
            return Err(EditorError::new(ErrorKind::Other, "USAGE", usage()));
        }
        Some(arg) => Some(PathBuf::from(arg)),
        None => None,
    };
    if let Some(extra) = iter.next() {
        return Err(EditorError::new(
            ErrorKind::Other,
            "TOO_MANY_ARGS",
            format!("unexpected extra argument: {extra}"),
        ));
    }
    Ok(CliArgs { path })
}

pub fn usage() -> String {
    "usage: ruled-editor [FILE]".to_string()
}

/// Load a document from `path`, or an empty one if `path` is `None`, absent,
/// or a directory (spec.md §6: a directory binds as a future browsing root
/// but starts with an empty document, since the browsing UI itself is out
/// of scope; CRLF/CR normalization happens inside `Document::from_bytes`).
pub fn load_document(path: Option<&Path>) -> Result<Document, EditorError> {
    match path {
        None => Ok(Document::new()),
        Some(path) if path.is_dir() => Ok(Document::new()),
        Some(path) if path.exists() => {
            let bytes = std::fs::read(path)?;
            Ok(Document::from_bytes(bytes))
        }
        Some(_) => Ok(Document::new()),
    }
}

/// Write the document's raw bytes to `path` unmodified (spec.md §6: no
/// re-normalization on save — what the user typed is what gets written).
pub fn save_document(document: &mut Document, path: &Path) -> Result<(), EditorError> {
    let bytes = document.bytes(0, document.len());
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
