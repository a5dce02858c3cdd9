use richtext_core::{Segment, SegmentKind, Segmenter};
use unicode_segmentation::UnicodeSegmentation;

/// Segments text at Unicode word boundaries (UAX #29).
///
/// Each boundary piece becomes one segment, classified with [`SegmentKind::of_text`]. Adjacent
/// whitespace pieces (UAX #29 keeps line breaks apart from spaces) are merged so whitespace
/// always forms a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordBoundarySegmenter;

impl Segmenter for WordBoundarySegmenter {
    fn segments(&self, text: &str) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut offset = 0usize;

        for piece in text.split_word_bounds() {
            let len = piece.chars().count();
            let kind = SegmentKind::of_text(piece);
            match segments.last_mut() {
                Some(last) if kind == SegmentKind::Whitespace && last.kind == kind => {
                    last.end += len;
                }
                _ => segments.push(Segment::new(offset, offset + len, kind)),
            }
            offset += len;
        }

        segments
    }
}
