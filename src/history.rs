//! Coalescing undo log (spec.md §3, §4.3).
//!
//! A linear array of `EditRecord`s plus a `current` pointer — NOT the
//! teacher's branching `UndoTree` (`examples/Monster0506-rift/src/history/
//! mod.rs`). spec.md's invariant "pushing a new record truncates records
//! at `current`" is a linear, redo-branch-discarding design; grafting in
//! branch navigation would violate it. The naming style (record
//! `description`-free here since no UI renders it, `estimated_size`-style
//! cap accounting) and the 1-second coalescing window are grounded on the
//! teacher's history module and on `old_main.c`'s
//! `time_since_last_edit < 1.0` check.

use std::time::Duration;

pub const COALESCE_WINDOW: Duration = Duration::from_secs(1);
pub const DEFAULT_CAP: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    pub kind: EditKind,
    pub position: usize,
    pub text: Vec<u8>,
    pub cursor_before: usize,
    pub cursor_after: usize,
    /// The selection anchor active immediately before this edit, if any
    /// (spec.md §8 P2: undo restores bytes, cursor, and selection). `None`
    /// means no selection was active; `Some(anchor)` pairs with
    /// `cursor_before` to reconstruct the pre-edit selection on undo.
    pub selection_before: Option<usize>,
}

impl EditRecord {
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// The record that undoes `self`, per spec.md §3's Edit Record
    /// reversibility rule: INSERT at p of text t undoes to DELETE at p of
    /// length |t|; DELETE at p of text t undoes to INSERT at p of text t.
    fn inverse(&self) -> EditRecord {
        match self.kind {
            EditKind::Insert => EditRecord {
                kind: EditKind::Delete,
                position: self.position,
                text: self.text.clone(),
                cursor_before: self.cursor_after,
                cursor_after: self.cursor_before,
                selection_before: None,
            },
            EditKind::Delete => EditRecord {
                kind: EditKind::Insert,
                position: self.position,
                text: self.text.clone(),
                cursor_before: self.cursor_after,
                cursor_after: self.cursor_before,
                selection_before: None,
            },
        }
    }
}

/// What the caller must do to a `PieceTable` to apply a record's inverse.
pub enum Inverse {
    Insert { position: usize, text: Vec<u8> },
    Delete { position: usize, length: usize },
}

pub struct UndoLog {
    records: Vec<EditRecord>,
    current: usize,
    cap: usize,
    coalesce_window: Duration,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self::with_config(cap, COALESCE_WINDOW)
    }

    pub fn with_config(cap: usize, coalesce_window: Duration) -> Self {
        Self {
            records: Vec::new(),
            current: 0,
            cap,
            coalesce_window,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current < self.records.len()
    }

    /// Push a new record, discarding any redo branch and evicting the
    /// oldest record once `cap` is exceeded (spec.md §3 invariants iii,
    /// iv).
    pub fn push(&mut self, record: EditRecord) {
        self.records.truncate(self.current);
        self.records.push(record);
        self.current = self.records.len();

        if self.records.len() > self.cap {
            self.records.remove(0);
            self.current -= 1;
        }
    }

    /// Try to merge `bytes` typed at `position` into the previous INSERT
    /// record. Returns `true` if merged (no new record should be pushed).
    pub fn try_coalesce_insert(&mut self, position: usize, bytes: &[u8], now: Duration, last_edit: Duration) -> bool {
        if bytes.contains(&b'\n') {
            return false;
        }
        // Any new edit discards a pending redo branch, whether or not it
        // ends up coalescing with the tip record (spec.md §3 invariant
        // iii).
        self.records.truncate(self.current);
        if self.current == 0 || now.saturating_sub(last_edit) >= self.coalesce_window {
            return false;
        }
        let idx = self.current - 1;
        let record = &mut self.records[idx];
        if record.kind != EditKind::Insert
            || record.position + record.length() != position
            || record.text.contains(&b'\n')
        {
            return false;
        }
        record.text.extend_from_slice(bytes);
        record.cursor_after = position + bytes.len();
        true
    }

    /// Try to merge a single backspaced byte at `position` into the
    /// previous DELETE record. Returns `true` if merged.
    pub fn try_coalesce_backspace(&mut self, position: usize, deleted_byte: u8, now: Duration, last_edit: Duration) -> bool {
        self.records.truncate(self.current);
        if self.current == 0 || now.saturating_sub(last_edit) >= self.coalesce_window {
            return false;
        }
        let idx = self.current - 1;
        let record = &mut self.records[idx];
        if record.kind != EditKind::Delete || record.position != position + 1 {
            return false;
        }
        record.text.insert(0, deleted_byte);
        record.position = position;
        record.cursor_after = position;
        true
    }

    /// Apply the inverse of the most recently applied record and move
    /// `current` back one slot. Returns the inverse operation, the cursor
    /// to restore, and the selection anchor to restore (if the edit
    /// replaced an active selection), or `None` if there is nothing to
    /// undo.
    pub fn undo(&mut self) -> Option<(Inverse, usize, Option<usize>)> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        let record = &self.records[self.current];
        let inverse = record.inverse();
        let cursor = record.cursor_before;
        let selection_anchor = record.selection_before;
        let op = match inverse.kind {
            EditKind::Insert => Inverse::Insert {
                position: inverse.position,
                text: inverse.text,
            },
            EditKind::Delete => Inverse::Delete {
                position: inverse.position,
                length: inverse.text.len(),
            },
        };
        Some((op, cursor, selection_anchor))
    }

    /// Re-apply the next record and move `current` forward one slot.
    /// Returns the forward operation and the cursor to restore, or `None`
    /// if there is nothing to redo.
    pub fn redo(&mut self) -> Option<(Inverse, usize)> {
        if self.current >= self.records.len() {
            return None;
        }
        let record = self.records[self.current].clone();
        self.current += 1;
        let cursor = record.cursor_after;
        let op = match record.kind {
            EditKind::Insert => Inverse::Insert {
                position: record.position,
                text: record.text,
            },
            EditKind::Delete => Inverse::Delete {
                position: record.position,
                length: record.text.len(),
            },
        };
        Some((op, cursor))
    }

    #[cfg(test)]
    pub(crate) fn record_count(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub(crate) fn current(&self) -> usize {
        self.current
    }
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
