use super::*;
use crate::piece_table::PieceTable;

#[test]
fn empty_document_has_one_line() {
    let table = PieceTable::new(Vec::new());
    let mut cache = LineCache::new();
    assert_eq!(cache.line_count(&table), 1);
    assert_eq!(cache.line(&table, 0), Some(LineEntry { start: 0, length: 0 }));
}

#[test]
fn line_count_matches_newline_count_plus_one() {
    let table = PieceTable::new(b"ab\ncd\nef".to_vec());
    let mut cache = LineCache::new();
    assert_eq!(cache.line_count(&table), 3);
    assert_eq!(cache.line(&table, 0), Some(LineEntry { start: 0, length: 2 }));
    assert_eq!(cache.line(&table, 1), Some(LineEntry { start: 3, length: 2 }));
    assert_eq!(cache.line(&table, 2), Some(LineEntry { start: 6, length: 2 }));
}

#[test]
fn trailing_newline_adds_empty_last_line() {
    let table = PieceTable::new(b"ab\n".to_vec());
    let mut cache = LineCache::new();
    assert_eq!(cache.line_count(&table), 2);
    assert_eq!(cache.line(&table, 1), Some(LineEntry { start: 3, length: 0 }));
}

#[test]
fn invalidate_forces_rebuild_after_mutation() {
    let mut table = PieceTable::new(b"ab".to_vec());
    let mut cache = LineCache::new();
    assert_eq!(cache.line_count(&table), 1);

    table.insert(2, b"\ncd");
    cache.invalidate();
    assert_eq!(cache.line_count(&table), 2);
}

#[test]
fn line_of_locates_containing_line_and_column() {
    let table = PieceTable::new(b"ab\ncd\nef".to_vec());
    let mut cache = LineCache::new();
    assert_eq!(cache.line_of(&table, 0), (0, 0));
    assert_eq!(cache.line_of(&table, 4), (1, 1));
    assert_eq!(cache.line_of(&table, 8), (2, 2));
}
