//! Input binding: `(key, modifiers, mode) -> Intent` (spec.md §4.6).
//!
//! Grounded on the teacher's `keymap::KeyMap` (`examples/Monster0506-rift/
//! src/keymap/mod.rs`) for the wrapper-struct-over-a-map shape, generalized
//! away from its sequence trie — spec.md §4.6 only asks for single-keypress
//! binding, not vim-style chords — and from the teacher's `Key` enum
//! (`src/key.rs`), which bakes Ctrl into separate variants (`CtrlArrowUp`,
//! `Ctrl(u8)`) rather than carrying a generic modifier bitset.

use crate::action::Intent;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(1 << 0);
    pub const SHIFT: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    pub const SUPER: Modifiers = Modifiers(1 << 3);

    pub fn contains(self, bit: Modifiers) -> bool {
        self.0 & bit.0 == bit.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Text,
    Command,
}

/// `(key, modifier bitset, mode) -> Intent` lookup table (spec.md §4.6).
/// Plain character input is not a table entry — the editor loop turns an
/// un-bound `KeyCode::Char` with no Ctrl/Alt/Super modifier directly into
/// `Intent::InsertChar`.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: HashMap<(KeyCode, Modifiers, Mode), Intent>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, code: KeyCode, modifiers: Modifiers, mode: Mode, intent: Intent) {
        self.bindings.insert((code, modifiers, mode), intent);
    }

    pub fn lookup(&self, code: KeyCode, modifiers: Modifiers, mode: Mode) -> Option<Intent> {
        self.bindings.get(&(code, modifiers, mode)).cloned()
    }

    /// The default TEXT-mode bindings named in spec.md §6.
    pub fn default_table() -> Self {
        let mut map = Self::new();
        use KeyCode::*;
        use Mode::Text;

        let plain = Modifiers::NONE;
        let shift = Modifiers::SHIFT;
        let ctrl = Modifiers::CTRL;
        let ctrl_shift = Modifiers::CTRL | Modifiers::SHIFT;

        let arrows = [
            (ArrowLeft, Intent::CursorLeft, Intent::SelectLeft, Intent::CursorWordLeft, Intent::SelectWordLeft),
            (ArrowRight, Intent::CursorRight, Intent::SelectRight, Intent::CursorWordRight, Intent::SelectWordRight),
            (ArrowUp, Intent::CursorUp, Intent::SelectUp, Intent::CursorUp, Intent::SelectUp),
            (ArrowDown, Intent::CursorDown, Intent::SelectDown, Intent::CursorDown, Intent::SelectDown),
        ];
        for (key, plain_intent, shift_intent, ctrl_intent, ctrl_shift_intent) in arrows {
            map.bind(key, plain, Text, plain_intent);
            map.bind(key, shift, Text, shift_intent);
            map.bind(key, ctrl, Text, ctrl_intent);
            map.bind(key, ctrl_shift, Text, ctrl_shift_intent);
        }

        map.bind(Enter, plain, Text, Intent::InsertNewline);
        map.bind(Tab, plain, Text, Intent::InsertTab);
        map.bind(Backspace, plain, Text, Intent::DeleteBackward);
        map.bind(Delete, plain, Text, Intent::DeleteForward);

        map.bind(Char('a'), ctrl, Text, Intent::SelectAll);
        map.bind(Char('c'), ctrl, Text, Intent::Copy);
        map.bind(Char('x'), ctrl, Text, Intent::Cut);
        map.bind(Char('v'), ctrl, Text, Intent::Paste);
        map.bind(Char('z'), ctrl, Text, Intent::Undo);
        map.bind(Char('y'), ctrl, Text, Intent::Redo);
        map.bind(Char('z'), ctrl_shift, Text, Intent::Redo);
        map.bind(Char('f'), ctrl, Text, Intent::Search);
        map.bind(Char('q'), ctrl, Text, Intent::Quit);
        map.bind(Char('p'), ctrl, Text, Intent::OpenCommandPalette);
        map.bind(Escape, plain, Text, Intent::Cancel);

        // COMMAND mode's own grammar (what gets typed, how it's parsed
        // and executed) is out of scope; only entering and leaving it is
        // wired through the closed Intent set.
        map.bind(Escape, plain, Mode::Command, Intent::Cancel);

        map
    }
}

#[cfg(test)]
#[path = "keymap_tests.rs"]
mod tests;
