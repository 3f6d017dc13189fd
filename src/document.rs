//! The coherent facade binding piece table, line cache, undo log, and the
//! cursor/selection state machine (spec.md §3, §4.4).
//!
//! `Document` is the single owned value a host program holds — no
//! process-wide globals, unlike the source material's module-level
//! mutable state (`org_buffer`, `pieces`, `pointerPosition`, ... in
//! `examples/original_source/old_main.c`). The dispatcher in `action.rs`
//! takes a `&mut Document`.

use crate::clipboard::ClipboardProvider;
use crate::config::EditorConfig;
use crate::error::Status;
use crate::history::{EditKind, EditRecord, Inverse, UndoLog};
use crate::line_cache::LineCache;
use crate::piece_table::PieceTable;
use std::cell::Cell;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    WordLeft,
    WordRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteClass {
    Word,
    Punct,
    Space,
    Newline,
}

fn classify(b: u8) -> ByteClass {
    match b {
        b'\n' => ByteClass::Newline,
        b' ' | b'\t' => ByteClass::Space,
        b if b.is_ascii_alphanumeric() || b == b'_' => ByteClass::Word,
        _ => ByteClass::Punct,
    }
}

pub struct Document {
    table: PieceTable,
    line_cache: LineCache,
    undo_log: UndoLog,
    cursor: usize,
    selection_anchor: usize,
    selection_active: bool,
    scroll_line: usize,
    scroll_column_px: usize,
    last_edit_time: Duration,
    /// Memoized (cursor, line, col) projection; invalidated whenever the
    /// piece table is mutated or the cursor moves (spec.md §9).
    cursor_projection_cache: Cell<Option<(usize, usize, usize)>>,
}

impl Document {
    pub fn new() -> Self {
        Self::from_bytes(Vec::new())
    }

    /// Load a document from bytes, normalising CRLF/CR to LF (spec.md §6).
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::with_config(bytes, EditorConfig::default())
    }

    pub fn with_config(bytes: Vec<u8>, config: EditorConfig) -> Self {
        let normalized = normalize_line_endings(&bytes);
        Self {
            table: PieceTable::new(normalized),
            line_cache: LineCache::new(),
            undo_log: UndoLog::with_config(config.undo_cap, config.coalesce_window),
            cursor: 0,
            selection_anchor: 0,
            selection_active: false,
            scroll_line: 0,
            scroll_column_px: 0,
            last_edit_time: Duration::ZERO,
            cursor_projection_cache: Cell::new(None),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection_range(&self) -> Option<(usize, usize)> {
        if self.selection_active {
            Some((
                self.selection_anchor.min(self.cursor),
                self.selection_anchor.max(self.cursor),
            ))
        } else {
            None
        }
    }

    pub fn selection_active(&self) -> bool {
        self.selection_active
    }

    fn invalidate_after_mutation(&mut self) {
        self.line_cache.invalidate();
        self.cursor_projection_cache.set(None);
    }

    fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.table.len());
        self.cursor_projection_cache.set(None);
    }

    // ---- Renderer interface (spec.md §6) ----

    pub fn line_count(&mut self) -> usize {
        self.line_cache.line_count(&self.table)
    }

    pub fn line(&mut self, i: usize) -> Option<(usize, usize)> {
        self.line_cache
            .line(&self.table, i)
            .map(|e| (e.start, e.length))
    }

    pub fn bytes(&self, start: usize, length: usize) -> Vec<u8> {
        self.table.read_range(start, start + length)
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    pub fn scroll_line(&self) -> usize {
        self.scroll_line
    }

    pub fn scroll_column_px(&self) -> usize {
        self.scroll_column_px
    }

    pub fn advance_scroll(&mut self, new_line: usize, new_px: usize) {
        self.scroll_line = new_line;
        self.scroll_column_px = new_px;
    }

    /// `(line, col)` for `byte_offset`, via the line cache (spec.md §4.4).
    pub fn line_of(&mut self, byte_offset: usize) -> (usize, usize) {
        let byte_offset = byte_offset.min(self.table.len());
        self.line_cache.line_of(&self.table, byte_offset)
    }

    fn cursor_projection(&mut self) -> (usize, usize) {
        if let Some((cached_cursor, line, col)) = self.cursor_projection_cache.get() {
            if cached_cursor == self.cursor {
                return (line, col);
            }
        }
        let (line, col) = self.line_cache.line_of(&self.table, self.cursor);
        self.cursor_projection_cache.set(Some((self.cursor, line, col)));
        (line, col)
    }

    // ---- Movement ----

    fn move_one(&self, direction: Direction) -> usize {
        match direction {
            Direction::Left => self.cursor.saturating_sub(1),
            Direction::Right => (self.cursor + 1).min(self.table.len()),
            _ => self.cursor,
        }
    }

    fn move_vertical(&mut self, up: bool) -> usize {
        let (line, col) = self.cursor_projection();
        let target_line = if up {
            match line.checked_sub(1) {
                Some(l) => l,
                None => return self.cursor,
            }
        } else {
            let count = self.line_cache.line_count(&self.table);
            if line + 1 >= count {
                return self.cursor;
            }
            line + 1
        };
        let entry = self
            .line_cache
            .line(&self.table, target_line)
            .expect("target_line computed from line_count");
        entry.start + col.min(entry.length)
    }

    fn word_right(&self) -> usize {
        let len = self.table.len();
        let mut pos = self.cursor;
        if pos >= len {
            return pos;
        }
        let start_class = classify(self.table.read(pos));
        match start_class {
            ByteClass::Space => {
                while pos < len {
                    let c = classify(self.table.read(pos));
                    if c == ByteClass::Newline || c != ByteClass::Space {
                        break;
                    }
                    pos += 1;
                }
                // After skipping whitespace up to (but not past) a
                // newline, consume contiguous punct on the same line.
                while pos < len {
                    let c = classify(self.table.read(pos));
                    if c != ByteClass::Punct {
                        break;
                    }
                    pos += 1;
                }
            }
            ByteClass::Newline => {
                pos += 1;
            }
            ByteClass::Word | ByteClass::Punct => {
                while pos < len && classify(self.table.read(pos)) == start_class {
                    pos += 1;
                }
            }
        }
        pos
    }

    fn word_left(&self) -> usize {
        let mut pos = self.cursor;
        if pos == 0 {
            return pos;
        }
        pos -= 1;
        // Skip trailing spaces/tabs moving left, stopping at a '\n' (open
        // question resolved in spec.md §9: never cross a newline going
        // left).
        while pos > 0 && classify(self.table.read(pos)) == ByteClass::Space {
            pos -= 1;
        }
        if classify(self.table.read(pos)) == ByteClass::Newline {
            return pos + 1;
        }
        let class = classify(self.table.read(pos));
        while pos > 0 && classify(self.table.read(pos - 1)) == class {
            pos -= 1;
        }
        pos
    }

    pub fn cursor_move(&mut self, direction: Direction) -> Status {
        let before = self.cursor;
        let target = match direction {
            Direction::Left | Direction::Right => self.move_one(direction),
            Direction::Up => self.move_vertical(true),
            Direction::Down => self.move_vertical(false),
            Direction::WordRight => self.word_right(),
            Direction::WordLeft => self.word_left(),
        };
        if self.selection_active {
            self.selection_active = false;
        }
        self.set_cursor(target);
        if self.cursor == before {
            Status::NoOp
        } else {
            Status::Ok
        }
    }

    pub fn selection_extend(&mut self, direction: Direction) -> Status {
        if !self.selection_active {
            self.selection_anchor = self.cursor;
            self.selection_active = true;
        }
        let target = match direction {
            Direction::Left | Direction::Right => self.move_one(direction),
            Direction::Up => self.move_vertical(true),
            Direction::Down => self.move_vertical(false),
            Direction::WordRight => self.word_right(),
            Direction::WordLeft => self.word_left(),
        };
        self.set_cursor(target);
        if self.cursor == self.selection_anchor {
            self.selection_active = false;
        }
        Status::Ok
    }

    pub fn select_all(&mut self) -> Status {
        let len = self.table.len();
        self.selection_anchor = 0;
        self.set_cursor(len);
        self.selection_active = len > 0;
        Status::Ok
    }

    /// Select `[lo, hi)` directly, landing the cursor at `lo` (spec.md §9:
    /// a match lands the cursor at its start, with the selection covering
    /// the match). Used by features outside the closed `Intent` set (e.g. a
    /// future search command) that still need to drive selection through
    /// `Document` rather than poking its fields.
    pub fn select_range(&mut self, lo: usize, hi: usize) -> Status {
        let len = self.table.len();
        let lo = lo.min(len);
        let hi = hi.min(len);
        if lo == hi {
            self.selection_active = false;
            self.set_cursor(lo);
            return Status::NoOp;
        }
        self.selection_anchor = hi;
        self.set_cursor(lo);
        self.selection_active = true;
        Status::Ok
    }

    fn paragraph_boundary(&self, forward: bool) -> usize {
        let len = self.table.len();
        let mut pos = self.cursor;
        let is_blank_line_at = |p: usize| -> bool {
            p < len && self.table.read(p) == b'\n' && (p == 0 || self.table.read(p - 1) == b'\n')
        };
        if forward {
            while pos < len && !is_blank_line_at(pos) {
                pos += 1;
            }
            pos.min(len)
        } else {
            if pos > 0 {
                pos -= 1;
            }
            while pos > 0 && !is_blank_line_at(pos) {
                pos -= 1;
            }
            pos
        }
    }

    /// Move to the next blank line (or end of document), carried over from
    /// the original implementation's paragraph motion; not wired into the
    /// closed `Intent` set.
    pub fn move_paragraph_forward(&mut self) -> Status {
        let before = self.cursor;
        let target = self.paragraph_boundary(true);
        self.selection_active = false;
        self.set_cursor(target);
        if self.cursor == before {
            Status::NoOp
        } else {
            Status::Ok
        }
    }

    /// Move to the previous blank line (or start of document).
    pub fn move_paragraph_backward(&mut self) -> Status {
        let before = self.cursor;
        let target = self.paragraph_boundary(false);
        self.selection_active = false;
        self.set_cursor(target);
        if self.cursor == before {
            Status::NoOp
        } else {
            Status::Ok
        }
    }

    // ---- Mutation ----

    fn delete_selection(&mut self, now: Duration) {
        let (lo, hi) = self.selection_range().expect("caller checked selection_active");
        let text = self.table.read_range(lo, hi);
        let cursor_before = self.cursor;
        let selection_before = Some(self.selection_anchor);
        self.table.delete(lo, hi - lo);
        self.undo_log.push(EditRecord {
            kind: EditKind::Delete,
            position: lo,
            text,
            cursor_before,
            cursor_after: lo,
            selection_before,
        });
        self.selection_active = false;
        self.set_cursor(lo);
        self.last_edit_time = now;
        self.invalidate_after_mutation();
    }

    /// Insert `bytes` at the cursor, coalescing with the previous INSERT
    /// record when possible (spec.md §4.3, §4.4).
    pub fn insert(&mut self, bytes: &[u8], now: Duration) -> Status {
        if bytes.is_empty() {
            return Status::NoOp;
        }
        if self.selection_active {
            self.delete_selection(now);
        }
        let position = self.cursor;
        let coalesced = self
            .undo_log
            .try_coalesce_insert(position, bytes, now, self.last_edit_time);
        if !coalesced {
            self.undo_log.push(EditRecord {
                kind: EditKind::Insert,
                position,
                text: bytes.to_vec(),
                cursor_before: position,
                cursor_after: position + bytes.len(),
                selection_before: None,
            });
        }
        self.table.insert(position, bytes);
        self.set_cursor(position + bytes.len());
        self.last_edit_time = now;
        self.invalidate_after_mutation();
        Status::Ok
    }

    /// Insert a single `\n`; never coalesced (spec.md §4.4).
    pub fn insert_newline(&mut self, now: Duration) -> Status {
        if self.selection_active {
            self.delete_selection(now);
        }
        let position = self.cursor;
        self.undo_log.push(EditRecord {
            kind: EditKind::Insert,
            position,
            text: vec![b'\n'],
            cursor_before: position,
            cursor_after: position + 1,
            selection_before: None,
        });
        self.table.insert(position, b"\n");
        self.set_cursor(position + 1);
        self.last_edit_time = now;
        self.invalidate_after_mutation();
        Status::Ok
    }

    /// Insert two spaces; coalescing allowed (spec.md §4.4).
    pub fn insert_tab(&mut self, now: Duration) -> Status {
        self.insert(b"  ", now)
    }

    pub fn delete_backward(&mut self, now: Duration) -> Status {
        if self.selection_active {
            self.delete_selection(now);
            return Status::Ok;
        }
        if self.cursor == 0 {
            return Status::NoOp;
        }
        let position = self.cursor - 1;
        let byte = self.table.read(position);
        let coalesced = self
            .undo_log
            .try_coalesce_backspace(position, byte, now, self.last_edit_time);
        if !coalesced {
            self.undo_log.push(EditRecord {
                kind: EditKind::Delete,
                position,
                text: vec![byte],
                cursor_before: self.cursor,
                cursor_after: position,
                selection_before: None,
            });
        }
        self.table.delete(position, 1);
        self.set_cursor(position);
        self.last_edit_time = now;
        self.invalidate_after_mutation();
        Status::Ok
    }

    pub fn delete_forward(&mut self, now: Duration) -> Status {
        if self.selection_active {
            self.delete_selection(now);
            return Status::Ok;
        }
        if self.cursor >= self.table.len() {
            return Status::NoOp;
        }
        let position = self.cursor;
        let byte = self.table.read(position);
        self.undo_log.push(EditRecord {
            kind: EditKind::Delete,
            position,
            text: vec![byte],
            cursor_before: self.cursor,
            cursor_after: self.cursor,
            selection_before: None,
        });
        self.table.delete(position, 1);
        self.last_edit_time = now;
        self.invalidate_after_mutation();
        Status::Ok
    }

    pub fn copy(&self, clipboard: &mut dyn ClipboardProvider) -> Status {
        match self.selection_range() {
            Some((lo, hi)) => {
                clipboard.set_text(&self.table.read_range(lo, hi));
                Status::Ok
            }
            None => Status::NoOp,
        }
    }

    pub fn cut(&mut self, clipboard: &mut dyn ClipboardProvider, now: Duration) -> Status {
        if self.selection_range().is_none() {
            return Status::NoOp;
        }
        self.copy(clipboard);
        self.delete_selection(now);
        Status::Ok
    }

    /// Normalise CR-containing bytes to LF and insert them (spec.md §4.4,
    /// §6, §8 P9).
    pub fn paste(&mut self, bytes: &[u8], now: Duration) -> Status {
        let normalized = normalize_line_endings(bytes);
        if normalized.is_empty() {
            return Status::NoOp;
        }
        self.insert(&normalized, now)
    }

    /// Undo the most recent edit, restoring bytes, cursor, and selection to
    /// their pre-edit state (spec.md §8 P2). An edit that replaced an
    /// active selection records that selection's anchor; restoring it here
    /// is what makes `SELECT_ALL` → `DELETE_BACKWARD` → `UNDO` land back on
    /// the original selection rather than a bare cursor.
    pub fn undo(&mut self) -> Status {
        match self.undo_log.undo() {
            Some((inverse, cursor, selection_anchor)) => {
                self.apply_inverse(inverse);
                self.set_cursor(cursor);
                match selection_anchor {
                    Some(anchor) => {
                        self.selection_anchor = anchor;
                        self.selection_active = anchor != cursor;
                    }
                    None => self.selection_active = false,
                }
                self.invalidate_after_mutation();
                Status::Ok
            }
            None => Status::NoOp,
        }
    }

    pub fn redo(&mut self) -> Status {
        match self.undo_log.redo() {
            Some((inverse, cursor)) => {
                self.apply_inverse(inverse);
                self.set_cursor(cursor);
                self.selection_active = false;
                self.invalidate_after_mutation();
                Status::Ok
            }
            None => Status::NoOp,
        }
    }

    fn apply_inverse(&mut self, inverse: Inverse) {
        match inverse {
            Inverse::Insert { position, text } => self.table.insert(position, &text),
            Inverse::Delete { position, length } => self.table.delete(position, length),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-and-scroll-only facade over a `Document` for a renderer (spec.md
/// §6). Mutating bindings (`insert`, `delete_backward`, ...) are
/// deliberately absent from this type's surface; a renderer only ever
/// needs to query what to paint and remember where it scrolled to.
pub struct RendererView<'a> {
    document: &'a mut Document,
}

impl<'a> RendererView<'a> {
    pub fn new(document: &'a mut Document) -> Self {
        Self { document }
    }

    pub fn line_count(&mut self) -> usize {
        self.document.line_count()
    }

    pub fn line(&mut self, i: usize) -> Option<(usize, usize)> {
        self.document.line(i)
    }

    pub fn bytes(&self, start: usize, length: usize) -> Vec<u8> {
        self.document.bytes(start, length)
    }

    pub fn cursor_index(&self) -> usize {
        self.document.cursor_index()
    }

    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.document.selection_range()
    }

    pub fn scroll_line(&self) -> usize {
        self.document.scroll_line()
    }

    pub fn scroll_column_px(&self) -> usize {
        self.document.scroll_column_px()
    }

    pub fn advance_scroll(&mut self, new_line: usize, new_px: usize) {
        self.document.advance_scroll(new_line, new_px)
    }
}

/// Drop every `\r` byte, converging CRLF and bare-CR line endings to LF
/// (spec.md §6).
fn normalize_line_endings(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().copied().filter(|&b| b != b'\r').collect()
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
