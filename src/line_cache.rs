//! Derived line index over a `PieceTable` (spec.md §3, §4.2).
//!
//! A `LineCache` is invalidated by every mutation and rebuilt lazily on the
//! next query by one left-to-right pass, grounded on `RebuildLineCache` in
//! `examples/original_source/old_main.c`. Incremental updates are not
//! required by spec.md §4.2 and are not implemented here.

use crate::piece_table::PieceTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEntry {
    pub start: usize,
    pub length: usize,
}

pub struct LineCache {
    entries: Vec<LineEntry>,
    valid: bool,
}

impl LineCache {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            valid: false,
        }
    }

    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    fn ensure_valid(&mut self, table: &PieceTable) {
        if self.valid {
            return;
        }
        self.entries.clear();

        let total = table.len();
        let bytes = table.read_range(0, total);
        let mut line_start = 0usize;
        for (i, &b) in bytes.iter().enumerate() {
            if b == b'\n' {
                self.entries.push(LineEntry {
                    start: line_start,
                    length: i - line_start,
                });
                line_start = i + 1;
            }
        }
        self.entries.push(LineEntry {
            start: line_start,
            length: total - line_start,
        });

        self.valid = true;
    }

    pub fn line_count(&mut self, table: &PieceTable) -> usize {
        self.ensure_valid(table);
        self.entries.len()
    }

    pub fn line(&mut self, table: &PieceTable, i: usize) -> Option<LineEntry> {
        self.ensure_valid(table);
        self.entries.get(i).copied()
    }

    /// Binary search for the line containing byte offset `pos`.
    pub fn line_of(&mut self, table: &PieceTable, pos: usize) -> (usize, usize) {
        self.ensure_valid(table);
        let idx = match self.entries.binary_search_by(|e| {
            if pos < e.start {
                std::cmp::Ordering::Greater
            } else if pos > e.start + e.length {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        }) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1).min(self.entries.len().saturating_sub(1)),
        };
        let entry = self.entries[idx];
        (idx, pos.saturating_sub(entry.start))
    }
}

impl Default for LineCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "line_cache_tests.rs"]
mod tests;
