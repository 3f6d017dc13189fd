//! Clipboard interface (spec.md §5, §6).
//!
//! The clipboard is a system-wide mutable resource external to the editing
//! core; the core only ever talks to it through this trait boundary
//! (`get_text`/`set_text`), never assuming exclusive access.

use crate::error::{EditorError, ErrorKind};

pub trait ClipboardProvider {
    fn get_text(&mut self) -> Option<Vec<u8>>;
    fn set_text(&mut self, bytes: &[u8]);
}

/// In-memory clipboard, used in tests and as a fallback when no system
/// clipboard is reachable.
#[derive(Default)]
pub struct NullClipboard {
    contents: Option<Vec<u8>>,
}

impl ClipboardProvider for NullClipboard {
    fn get_text(&mut self) -> Option<Vec<u8>> {
        self.contents.clone()
    }

    fn set_text(&mut self, bytes: &[u8]) {
        self.contents = Some(bytes.to_vec());
    }
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, EditorError> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| EditorError::new(ErrorKind::Clipboard, "CLIPBOARD_INIT_FAILED", e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Option<Vec<u8>> {
        self.inner.get_text().ok().map(String::into_bytes)
    }

    fn set_text(&mut self, bytes: &[u8]) {
        if let Ok(text) = String::from_utf8(bytes.to_vec()) {
            let _ = self.inner.set_text(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_clipboard_roundtrips() {
        let mut clip = NullClipboard::default();
        assert_eq!(clip.get_text(), None);
        clip.set_text(b"hello");
        assert_eq!(clip.get_text(), Some(b"hello".to_vec()));
    }
}
