//! Single-threaded cooperative frame loop (spec.md §6; ambient stack).
//!
//! Grounded on `examples/Monster0506-rift/src/editor/mod.rs`'s `Editor::run`
//! shape — poll with a timeout, read one event, translate, dispatch, render
//! — but with the teacher's job manager, modal stack, and multi-document
//! manager cut: spec.md scopes this crate to one document's editing core,
//! and a background job queue has no purpose without long-running jobs
//! (syntax parsing, LSP) to feed it.

use crate::action::{self, Intent};
use crate::clipboard::{ClipboardProvider, NullClipboard, SystemClipboard};
use crate::document::Document;
use crate::error::{EditorError, ErrorKind, Status};
use crate::keymap::{KeyCode, KeyMap, Mode, Modifiers};
use crate::term::{InputEvent, TerminalBackend};
use std::time::{Duration, Instant};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub struct Editor<T: TerminalBackend> {
    term: T,
    document: Document,
    keymap: KeyMap,
    clipboard: Box<dyn ClipboardProvider>,
    mode: Mode,
    started_at: Instant,
    should_quit: bool,
}

impl<T: TerminalBackend> Editor<T> {
    pub fn new(term: T, document: Document) -> Self {
        let clipboard: Box<dyn ClipboardProvider> = match SystemClipboard::new() {
            Ok(clip) => Box::new(clip),
            Err(e) => {
                log::warn!("system clipboard unavailable, falling back to in-memory: {e}");
                Box::new(NullClipboard::default())
            }
        };
        Self {
            term,
            document,
            keymap: KeyMap::default_table(),
            clipboard,
            mode: Mode::Text,
            started_at: Instant::now(),
            should_quit: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn now(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Resolve one input event to an `Intent`, handling the un-bound
    /// plain-character case the keymap's table deliberately omits.
    fn resolve_intent(&self, code: KeyCode, modifiers: Modifiers) -> Option<Intent> {
        if let Some(intent) = self.keymap.lookup(code, modifiers, self.mode) {
            return Some(intent);
        }
        if let KeyCode::Char(ch) = code {
            if !modifiers.contains(Modifiers::CTRL) && !modifiers.contains(Modifiers::ALT) {
                let mut buf = [0u8; 4];
                return Some(Intent::InsertChar(ch.encode_utf8(&mut buf).as_bytes().to_vec()));
            }
        }
        None
    }

    fn handle_event(&mut self, event: InputEvent) -> Status {
        match event {
            InputEvent::Key(code, modifiers) => match self.resolve_intent(code, modifiers) {
                Some(Intent::Quit) => {
                    self.should_quit = true;
                    Status::Ok
                }
                // Entering/leaving the command palette is a frontend mode
                // switch, not a Document mutation, so it's handled here
                // rather than falling through to the dispatcher.
                Some(Intent::OpenCommandPalette) => {
                    self.mode = Mode::Command;
                    Status::Ok
                }
                Some(Intent::Cancel) if self.mode == Mode::Command => {
                    self.mode = Mode::Text;
                    Status::Ok
                }
                Some(intent) => {
                    let now = self.now();
                    action::dispatch(&mut self.document, &intent, self.clipboard.as_mut(), now)
                }
                None => Status::NoOp,
            },
            InputEvent::Resize(_, _) => Status::Ok,
        }
    }

    /// Run until `Intent::Quit` is dispatched or the terminal backend fails
    /// fatally.
    pub fn run(&mut self) -> Result<(), EditorError> {
        self.term
            .init()
            .map_err(|e| EditorError::new(ErrorKind::Io, "TERM_INIT_FAILED", e))?;

        let result = self.run_loop();
        self.term.deinit();
        result
    }

    fn run_loop(&mut self) -> Result<(), EditorError> {
        while !self.should_quit {
            let ready = self
                .term
                .poll(POLL_TIMEOUT)
                .map_err(|e| EditorError::new(ErrorKind::Io, "POLL_FAILED", e))?;
            if !ready {
                continue;
            }
            let event = self
                .term
                .read_event()
                .map_err(|e| EditorError::new(ErrorKind::Io, "READ_EVENT_FAILED", e))?;
            if let Some(event) = event {
                if let Status::Fatal(err) = self.handle_event(event) {
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
