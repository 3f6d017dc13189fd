//! Append-only piece table storage for the document (spec.md §3, §4.1).
//!
//! The document's bytes live in two regions: an immutable `original`
//! region (the bytes the document was loaded with) and an append-only
//! `add` region (everything typed or pasted since). The document itself is
//! an ordered sequence of `Piece`s, each a span into one of those regions;
//! concatenating the pieces' bytes yields the current document.
//!
//! This is a flat `Vec<Piece>`, not a balanced tree: spec.md §4.1/§9
//! explicitly license starting here ("Implementers may start with a flat
//! vector and later swap in a balanced tree without any interface
//! change"), and the byte-indexed, non-UTF-8-aware scope of this crate
//! doesn't need the teacher's AVL-tree `Character` rope.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferSource {
    Original,
    Add,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub source: BufferSource,
    pub start: usize,
    pub length: usize,
}

/// Ordered sequence of pieces whose concatenation is the document.
pub struct PieceTable {
    original: Vec<u8>,
    add: Vec<u8>,
    pieces: Vec<Piece>,
}

impl PieceTable {
    /// Build a table over `original` bytes with no edits yet applied.
    pub fn new(original: Vec<u8>) -> Self {
        let pieces = if original.is_empty() {
            Vec::new()
        } else {
            vec![Piece {
                source: BufferSource::Original,
                start: 0,
                length: original.len(),
            }]
        };
        Self {
            original,
            add: Vec::new(),
            pieces,
        }
    }

    pub fn len(&self) -> usize {
        self.pieces.iter().map(|p| p.length).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    fn source_bytes(&self, source: BufferSource) -> &[u8] {
        match source {
            BufferSource::Original => &self.original,
            BufferSource::Add => &self.add,
        }
    }

    /// Read the byte at document offset `i`. Panics if `i >= len()`, as do
    /// the teacher's piece accessors (`char_at`) — callers validate bounds
    /// first per spec.md §4.1 ("callers must validate").
    pub fn read(&self, i: usize) -> u8 {
        let mut base = 0;
        for piece in &self.pieces {
            if i < base + piece.length {
                let bytes = self.source_bytes(piece.source);
                return bytes[piece.start + (i - base)];
            }
            base += piece.length;
        }
        panic!("piece table read index {i} out of bounds (len {})", self.len());
    }

    /// Concatenation of bytes in `[lo, hi)`.
    pub fn read_range(&self, lo: usize, hi: usize) -> Vec<u8> {
        if lo >= hi {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(hi - lo);
        let mut base = 0;
        for piece in &self.pieces {
            let piece_end = base + piece.length;
            if piece_end > lo && base < hi {
                let start_in_piece = lo.saturating_sub(base);
                let end_in_piece = (hi - base).min(piece.length);
                let bytes = self.source_bytes(piece.source);
                out.extend_from_slice(
                    &bytes[piece.start + start_in_piece..piece.start + end_in_piece],
                );
            }
            base = piece_end;
            if base >= hi {
                break;
            }
        }
        out
    }

    /// Insert `bytes` at document offset `position`.
    ///
    /// Appends to the ADD region (which only ever grows, per spec.md §3
    /// invariant iv) and splices a new piece into the piece sequence,
    /// splitting whichever existing piece straddles `position` if needed.
    pub fn insert(&mut self, position: usize, bytes: &[u8]) {
        let len = self.len();
        assert!(position <= len, "insert position {position} out of bounds (len {len})");
        if bytes.is_empty() {
            return;
        }

        let add_start = self.add.len();
        self.add.extend_from_slice(bytes);
        let new_piece = Piece {
            source: BufferSource::Add,
            start: add_start,
            length: bytes.len(),
        };

        let mut base = 0;
        let mut insert_at = self.pieces.len();
        let mut split: Option<(usize, usize)> = None;
        for (idx, piece) in self.pieces.iter().enumerate() {
            if position == base {
                insert_at = idx;
                break;
            }
            if position < base + piece.length {
                split = Some((idx, position - base));
                break;
            }
            base += piece.length;
        }

        if let Some((idx, offset)) = split {
            let piece = self.pieces[idx];
            let left = Piece {
                source: piece.source,
                start: piece.start,
                length: offset,
            };
            let right = Piece {
                source: piece.source,
                start: piece.start + offset,
                length: piece.length - offset,
            };
            self.pieces.splice(idx..=idx, [left, new_piece, right]);
        } else {
            self.pieces.insert(insert_at, new_piece);
        }
    }

    /// Delete the byte range `[position, position + length)`.
    ///
    /// Wholly-contained pieces are dropped; pieces overlapping only one end
    /// of the range are narrowed. Source bytes are never reclaimed.
    pub fn delete(&mut self, position: usize, length: usize) {
        if length == 0 {
            return;
        }
        let total = self.len();
        assert!(
            position + length <= total,
            "delete range [{position}, {}) out of bounds (len {total})",
            position + length
        );

        let end = position + length;
        let mut base = 0;
        let mut new_pieces = Vec::with_capacity(self.pieces.len());
        for piece in &self.pieces {
            let piece_start = base;
            let piece_end = base + piece.length;
            base = piece_end;

            if piece_end <= position || piece_start >= end {
                new_pieces.push(*piece);
                continue;
            }

            // Keep the prefix before `position`, if any.
            if piece_start < position {
                new_pieces.push(Piece {
                    source: piece.source,
                    start: piece.start,
                    length: position - piece_start,
                });
            }
            // Keep the suffix after `end`, if any.
            if piece_end > end {
                let cut = end - piece_start;
                new_pieces.push(Piece {
                    source: piece.source,
                    start: piece.start + cut,
                    length: piece_end - end,
                });
            }
        }
        self.pieces = new_pieces;
    }
}

#[cfg(test)]
#[path = "piece_table_tests.rs"]
mod tests;
