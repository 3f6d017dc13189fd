//! Action dispatcher: typed intents to Document mutations (spec.md §4.5).
//!
//! The dispatcher is a stateless mapping from `Intent` to the `Document`
//! operation it names. Intents form a closed set per spec.md §4.5;
//! extending the movement vocabulary (e.g. for sentence/paragraph motion
//! carried over from the original C implementation, see SPEC_FULL.md §4.4)
//! is done on `Document` directly rather than widening this enum.

use crate::clipboard::ClipboardProvider;
use crate::document::{Direction, Document};
use crate::error::Status;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorWordLeft,
    CursorWordRight,
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    SelectWordLeft,
    SelectWordRight,
    SelectAll,
    InsertChar(Vec<u8>),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
    Search,
    Cancel,
    Quit,
    OpenCommandPalette,
}

fn direction_of(intent: &Intent) -> Option<Direction> {
    match intent {
        Intent::CursorLeft | Intent::SelectLeft => Some(Direction::Left),
        Intent::CursorRight | Intent::SelectRight => Some(Direction::Right),
        Intent::CursorUp | Intent::SelectUp => Some(Direction::Up),
        Intent::CursorDown | Intent::SelectDown => Some(Direction::Down),
        Intent::CursorWordLeft | Intent::SelectWordLeft => Some(Direction::WordLeft),
        Intent::CursorWordRight | Intent::SelectWordRight => Some(Direction::WordRight),
        _ => None,
    }
}

fn is_select(intent: &Intent) -> bool {
    matches!(
        intent,
        Intent::SelectLeft
            | Intent::SelectRight
            | Intent::SelectUp
            | Intent::SelectDown
            | Intent::SelectWordLeft
            | Intent::SelectWordRight
    )
}

/// Dispatch one intent onto `document`. `now` is the monotonic clock
/// reading used for undo coalescing (spec.md §9: the Document never calls
/// wall-clock functions itself, to keep tests deterministic).
pub fn dispatch(
    document: &mut Document,
    intent: &Intent,
    clipboard: &mut dyn ClipboardProvider,
    now: Duration,
) -> Status {
    if let Some(direction) = direction_of(intent) {
        return if is_select(intent) {
            document.selection_extend(direction)
        } else {
            document.cursor_move(direction)
        };
    }

    match intent {
        Intent::SelectAll => document.select_all(),
        Intent::InsertChar(bytes) => document.insert(bytes, now),
        Intent::InsertNewline => document.insert_newline(now),
        Intent::InsertTab => document.insert_tab(now),
        Intent::DeleteBackward => document.delete_backward(now),
        Intent::DeleteForward => document.delete_forward(now),
        Intent::Copy => document.copy(clipboard),
        Intent::Cut => document.cut(clipboard, now),
        Intent::Paste => {
            let bytes = clipboard.get_text();
            match bytes {
                Some(bytes) => document.paste(&bytes, now),
                None => Status::NoOp,
            }
        }
        Intent::Undo => document.undo(),
        Intent::Redo => document.redo(),
        Intent::Search | Intent::Cancel | Intent::Quit | Intent::OpenCommandPalette => {
            log::warn!("intent {intent:?} has no core document effect; handled by the frontend");
            Status::NoOp
        }
        Intent::CursorLeft
        | Intent::CursorRight
        | Intent::CursorUp
        | Intent::CursorDown
        | Intent::CursorWordLeft
        | Intent::CursorWordRight
        | Intent::SelectLeft
        | Intent::SelectRight
        | Intent::SelectUp
        | Intent::SelectDown
        | Intent::SelectWordLeft
        | Intent::SelectWordRight => unreachable!("handled by direction_of above"),
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
