use super::*;

#[test]
fn empty_table_has_zero_length() {
    let t = PieceTable::new(Vec::new());
    assert_eq!(t.len(), 0);
    assert!(t.is_empty());
}

#[test]
fn reads_original_bytes() {
    let t = PieceTable::new(b"hello".to_vec());
    assert_eq!(t.read(0), b'h');
    assert_eq!(t.read(4), b'o');
    assert_eq!(t.read_range(1, 4), b"ell");
}

#[test]
fn insert_at_end() {
    let mut t = PieceTable::new(b"ab".to_vec());
    t.insert(2, b"cd");
    assert_eq!(t.read_range(0, 4), b"abcd");
}

#[test]
fn insert_at_start() {
    let mut t = PieceTable::new(b"bc".to_vec());
    t.insert(0, b"a");
    assert_eq!(t.read_range(0, 3), b"abc");
}

#[test]
fn insert_splits_piece() {
    let mut t = PieceTable::new(b"ad".to_vec());
    t.insert(1, b"bc");
    assert_eq!(t.read_range(0, 4), b"abcd");
}

#[test]
fn insert_into_empty_document() {
    let mut t = PieceTable::new(Vec::new());
    t.insert(0, b"hi");
    assert_eq!(t.len(), 2);
    assert_eq!(t.read_range(0, 2), b"hi");
}

#[test]
fn delete_wholly_contained_piece() {
    let mut t = PieceTable::new(b"hello".to_vec());
    t.insert(5, b" world");
    // Delete " world" entirely (its own whole piece).
    t.delete(5, 6);
    assert_eq!(t.read_range(0, t.len()), b"hello");
}

#[test]
fn delete_narrows_overlapping_pieces() {
    let mut t = PieceTable::new(b"hello world".to_vec());
    t.delete(3, 5); // remove "lo wo" -> "helrld"
    assert_eq!(t.read_range(0, t.len()), b"helrld");
}

#[test]
fn delete_across_split_pieces() {
    let mut t = PieceTable::new(b"ad".to_vec());
    t.insert(1, b"bc"); // "abcd" as 3 pieces: a | bc | d
    t.delete(1, 2); // remove "bc" -> "ad"
    assert_eq!(t.read_range(0, t.len()), b"ad");
}

#[test]
fn sequential_edits_match_flat_buffer_reference() {
    // P1 round-trip property over a short insert/delete sequence.
    let mut t = PieceTable::new(Vec::new());
    let mut reference: Vec<u8> = Vec::new();

    t.insert(0, b"hello");
    reference.splice(0..0, b"hello".iter().copied());

    t.insert(5, b" world");
    reference.splice(5..5, b" world".iter().copied());

    t.delete(0, 6);
    reference.splice(0..6, []);

    t.insert(0, b"goodbye ");
    reference.splice(0..0, b"goodbye ".iter().copied());

    assert_eq!(t.read_range(0, t.len()), reference.as_slice());
}

#[test]
#[should_panic]
fn insert_out_of_bounds_panics() {
    let mut t = PieceTable::new(b"abc".to_vec());
    t.insert(4, b"x");
}

#[test]
#[should_panic]
fn delete_out_of_bounds_panics() {
    let mut t = PieceTable::new(b"abc".to_vec());
    t.delete(2, 5);
}
