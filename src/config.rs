//! Editor configuration (ambient stack; spec.md §9's coalescing window and
//! §3's undo cap made adjustable rather than hardcoded).
//!
//! No config-file parsing — persistence across sessions is an explicit
//! spec.md non-goal, and the only two knobs in scope are numbers the CLI
//! could plausibly expose as flags later.

use crate::history::{COALESCE_WINDOW, DEFAULT_CAP};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub undo_cap: usize,
    pub coalesce_window: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_cap: DEFAULT_CAP,
            coalesce_window: COALESCE_WINDOW,
        }
    }
}
