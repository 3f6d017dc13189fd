//! ruled-editor - entry point

use ruled_editor::cli::{load_document, parse_args};
use ruled_editor::editor::Editor;
use ruled_editor::term::CrosstermBackend;

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(if e.code == "USAGE" { 0 } else { 2 });
        }
    };

    let document = match load_document(args.path.as_deref()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let backend = match CrosstermBackend::new() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("failed to create terminal backend: {e}");
            std::process::exit(1);
        }
    };

    let mut editor = Editor::new(backend, document);
    if let Err(e) = editor.run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
