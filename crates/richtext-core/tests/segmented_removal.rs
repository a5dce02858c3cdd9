use richtext_core::{
    RemovalDirection, Segment, SegmentKind, SegmentOptions, SegmentRemoval, SegmentedRemoval,
    Segmenter, TextRange,
};

use RemovalDirection::{Backward, Forward};

fn removal(start: usize, end: usize, text: &str, base: usize, dir: RemovalDirection) -> TextRange {
    SegmentedRemoval::new().removal_range(start, end, text, base, dir)
}

#[test]
fn test_caret_backward_removes_previous_segment() {
    // "#draft" at block offset 4: segments "#" [4,5) and "draft" [5,10).
    assert_eq!(removal(5, 5, "#draft", 4, Backward), TextRange::new(4, 5));
    assert_eq!(removal(8, 8, "#draft", 4, Backward), TextRange::new(5, 10));
    assert_eq!(removal(10, 10, "#draft", 4, Backward), TextRange::new(5, 10));
}

#[test]
fn test_caret_forward_removes_next_segment() {
    assert_eq!(removal(4, 4, "#draft", 4, Forward), TextRange::new(4, 5));
    assert_eq!(removal(5, 5, "#draft", 4, Forward), TextRange::new(5, 10));
    assert_eq!(removal(7, 7, "#draft", 4, Forward), TextRange::new(5, 10));
}

#[test]
fn test_caret_at_entity_edge_stays_collapsed() {
    assert_eq!(removal(4, 4, "#draft", 4, Backward), TextRange::new(4, 4));
    assert_eq!(removal(10, 10, "#draft", 4, Forward), TextRange::new(10, 10));
}

#[test]
fn test_range_expands_to_overlapped_segments() {
    // "New York City": New [0,3) ' ' [3,4) York [4,8) ' ' [8,9) City [9,13)
    assert_eq!(
        removal(5, 6, "New York City", 0, Forward),
        TextRange::new(4, 8)
    );
    assert_eq!(
        removal(2, 5, "New York City", 0, Backward),
        TextRange::new(0, 8)
    );
}

#[test]
fn test_whitespace_is_absorbed_at_entity_edges() {
    // Removing the last word takes the space before it.
    assert_eq!(
        removal(10, 13, "New York City", 0, Backward),
        TextRange::new(8, 13)
    );
    // Removing the first word takes the space after it.
    assert_eq!(
        removal(0, 2, "New York City", 0, Forward),
        TextRange::new(0, 4)
    );
    // Removal touching both edges is left alone.
    assert_eq!(
        removal(0, 13, "New York City", 0, Backward),
        TextRange::new(0, 13)
    );
}

#[test]
fn test_caret_after_space_takes_previous_word() {
    assert_eq!(removal(5, 5, "John Smith", 0, Backward), TextRange::new(0, 5));
    assert_eq!(removal(4, 4, "John Smith", 0, Forward), TextRange::new(4, 10));
}

#[test]
fn test_without_whitespace_absorption() {
    let plain = SegmentedRemoval::new().with_options(SegmentOptions {
        absorb_whitespace: false,
    });
    assert_eq!(
        plain.removal_range(10, 10, "John Smith", 0, Backward),
        TextRange::new(5, 10)
    );
    assert_eq!(
        plain.removal_range(5, 5, "John Smith", 0, Backward),
        TextRange::new(4, 5)
    );
}

#[test]
fn test_multibyte_entity_text_uses_char_offsets() {
    // "café olé" at block offset 3: café [3,7) ' ' [7,8) olé [8,11)
    let text = "caf\u{e9} ol\u{e9}";
    assert_eq!(removal(11, 11, text, 3, Backward), TextRange::new(7, 11));
    assert_eq!(removal(5, 5, text, 3, Forward), TextRange::new(3, 8));
}

#[test]
fn test_requested_range_outside_entity_is_clamped() {
    assert_eq!(removal(0, 20, "#draft", 4, Backward), TextRange::new(4, 10));
}

/// Every character is its own segment.
struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn segments(&self, text: &str) -> Vec<Segment> {
        text.chars()
            .enumerate()
            .map(|(idx, ch)| Segment::new(idx, idx + 1, SegmentKind::of_char(ch)))
            .collect()
    }
}

#[test]
fn test_custom_segmenter() {
    let per_char = SegmentedRemoval::with_segmenter(CharSegmenter);
    assert_eq!(
        per_char.removal_range(8, 8, "#draft", 4, Backward),
        TextRange::new(7, 8)
    );
    assert_eq!(
        per_char.removal_range(5, 7, "#draft", 4, Forward),
        TextRange::new(5, 7)
    );
}
