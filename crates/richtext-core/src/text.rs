use unicode_segmentation::UnicodeSegmentation;

pub(crate) fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Slice `text` by character offsets, clamping both ends to the text.
pub(crate) fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    let start_byte = char_to_byte(text, start);
    let end_byte = char_to_byte(text, end.max(start));
    &text[start_byte..end_byte]
}

/// Grapheme cluster boundaries of `text`, as character offsets.
///
/// Always includes `0` and the character length of `text`.
pub(crate) fn grapheme_boundaries(text: &str) -> Vec<usize> {
    let mut boundaries = Vec::with_capacity(text.len() + 1);
    let mut offset = 0usize;
    boundaries.push(0);
    for grapheme in text.graphemes(true) {
        offset += grapheme.chars().count();
        boundaries.push(offset);
    }
    boundaries
}
