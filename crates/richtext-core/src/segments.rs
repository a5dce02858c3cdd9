//! Segment-wise removal inside `SEGMENTED` entities.
//!
//! A segmented entity (a multi-word name, a hashtag) is removed one segment at a time. This
//! module splits the entity text into [`Segment`]s and snaps a requested removal range to segment
//! boundaries.
//!
//! The pieces are pluggable:
//!
//! - [`Segmenter`] decides where segments are (the default [`SeparatorSegmenter`] splits on runs
//!   of word characters, whitespace and punctuation; `richtext-core-segments` provides Unicode
//!   word-boundary and regex-based alternatives).
//! - [`SegmentRemoval`] is the full "requested range -> removal range" function. It is implemented
//!   by [`SegmentedRemoval`] and by any closure with the matching signature.

use crate::text;

/// Which way a removal travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalDirection {
    /// Delete key: consume what follows the caret.
    Forward,
    /// Backspace key: consume what precedes the caret.
    Backward,
}

/// A half-open character range (`start..end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl TextRange {
    /// Create a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// `true` if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Coarse classification of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Letters, digits and `_`.
    Word,
    /// Whitespace only.
    Whitespace,
    /// Anything else (`#`, `@`, `-`, ...).
    Punctuation,
}

impl SegmentKind {
    /// Classify a single character.
    pub fn of_char(ch: char) -> Self {
        if ch == '_' || ch.is_alphanumeric() {
            Self::Word
        } else if ch.is_whitespace() {
            Self::Whitespace
        } else {
            Self::Punctuation
        }
    }

    /// Classify a piece of text: whitespace if it is all whitespace, a word if it contains any
    /// word character, punctuation otherwise.
    pub fn of_text(text: &str) -> Self {
        if !text.is_empty() && text.chars().all(char::is_whitespace) {
            Self::Whitespace
        } else if text.chars().any(|ch| Self::of_char(ch) == Self::Word) {
            Self::Word
        } else {
            Self::Punctuation
        }
    }
}

/// One segment of an entity's text, in character offsets relative to that text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
    /// Classification.
    pub kind: SegmentKind,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start: usize, end: usize, kind: SegmentKind) -> Self {
        Self { start, end, kind }
    }
}

/// Splits entity text into segments.
///
/// Implementations must return non-empty segments, sorted, that tile the text exactly
/// (the first starts at `0`, each starts where the previous one ends, the last ends at the
/// character length of `text`).
pub trait Segmenter {
    /// Segment `text`.
    fn segments(&self, text: &str) -> Vec<Segment>;
}

/// Default segmenter: maximal runs of characters sharing one [`SegmentKind`].
///
/// `"#draft"` becomes `#` and `draft`; `"John Smith"` becomes `John`, ` ` and `Smith`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeparatorSegmenter;

impl Segmenter for SeparatorSegmenter {
    fn segments(&self, text: &str) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();
        for (offset, ch) in text.chars().enumerate() {
            let kind = SegmentKind::of_char(ch);
            match segments.last_mut() {
                Some(last) if last.kind == kind => last.end = offset + 1,
                _ => segments.push(Segment::new(offset, offset + 1, kind)),
            }
        }
        segments
    }
}

/// Options for [`SegmentedRemoval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// If `true`, whitespace next to a removed word is removed with it:
    ///
    /// - a caret removal whose target is whitespace also takes the adjacent word in the
    ///   direction of travel;
    /// - a removal touching exactly one edge of the entity absorbs one whitespace segment on
    ///   its interior side (before it when going backward, after it when going forward), so
    ///   removing the last word of `"John Smith"` leaves `"John"` rather than `"John "`.
    pub absorb_whitespace: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            absorb_whitespace: true,
        }
    }
}

/// Computes the removal range inside a segmented entity.
pub trait SegmentRemoval {
    /// Snap `start..end` (block offsets) to segment boundaries of `entity_text`.
    ///
    /// `entity_start` is the block offset of the first character of `entity_text`. The returned
    /// range is in block offsets too.
    fn removal_range(
        &self,
        start: usize,
        end: usize,
        entity_text: &str,
        entity_start: usize,
        direction: RemovalDirection,
    ) -> TextRange;
}

impl<F> SegmentRemoval for F
where
    F: Fn(usize, usize, &str, usize, RemovalDirection) -> TextRange,
{
    fn removal_range(
        &self,
        start: usize,
        end: usize,
        entity_text: &str,
        entity_start: usize,
        direction: RemovalDirection,
    ) -> TextRange {
        self(start, end, entity_text, entity_start, direction)
    }
}

/// [`SegmentRemoval`] built from a [`Segmenter`] and [`SegmentOptions`].
#[derive(Debug, Clone, Default)]
pub struct SegmentedRemoval<S = SeparatorSegmenter> {
    segmenter: S,
    options: SegmentOptions,
}

impl SegmentedRemoval<SeparatorSegmenter> {
    /// Default segmenter and options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Segmenter> SegmentedRemoval<S> {
    /// Use a custom segmenter with default options.
    pub fn with_segmenter(segmenter: S) -> Self {
        Self {
            segmenter,
            options: SegmentOptions::default(),
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: SegmentOptions) -> Self {
        self.options = options;
        self
    }

    /// The segmenter in use.
    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// The options in use.
    pub fn options(&self) -> SegmentOptions {
        self.options
    }

    /// Removal range in offsets relative to the entity text.
    fn local_removal_range(
        &self,
        segments: &[Segment],
        len: usize,
        start: usize,
        end: usize,
        direction: RemovalDirection,
    ) -> TextRange {
        let absorb = self.options.absorb_whitespace;

        let targeted = if start == end {
            caret_target(segments, len, start, direction, absorb)
        } else {
            overlapped(segments, start, end)
        };
        let Some((lo, hi)) = targeted else {
            return TextRange::new(start, end);
        };

        let mut removal = TextRange::new(segments[lo].start, segments[hi].end);
        let at_start = removal.start == 0;
        let at_end = removal.end == len;
        if absorb && at_start != at_end {
            match direction {
                RemovalDirection::Backward if !at_start => {
                    if let Some(prev) = lo.checked_sub(1).map(|idx| segments[idx])
                        && prev.kind == SegmentKind::Whitespace
                    {
                        removal.start = prev.start;
                    }
                }
                RemovalDirection::Forward if !at_end => {
                    if let Some(next) = segments.get(hi + 1)
                        && next.kind == SegmentKind::Whitespace
                    {
                        removal.end = next.end;
                    }
                }
                _ => {}
            }
        }
        removal
    }
}

impl<S: Segmenter> SegmentRemoval for SegmentedRemoval<S> {
    fn removal_range(
        &self,
        start: usize,
        end: usize,
        entity_text: &str,
        entity_start: usize,
        direction: RemovalDirection,
    ) -> TextRange {
        let len = text::char_count(entity_text);
        let local_start = start.saturating_sub(entity_start).min(len);
        let local_end = end.saturating_sub(entity_start).clamp(local_start, len);

        let segments = self.segmenter.segments(entity_text);
        let local = self.local_removal_range(&segments, len, local_start, local_end, direction);
        TextRange::new(entity_start + local.start, entity_start + local.end)
    }
}

/// Index of the segment containing character `offset`.
fn segment_at(segments: &[Segment], offset: usize) -> Option<usize> {
    let idx = segments.partition_point(|seg| seg.end <= offset);
    segments
        .get(idx)
        .filter(|seg| seg.start <= offset)
        .map(|_| idx)
}

/// Segment indices (first, last) a caret at `offset` removes.
fn caret_target(
    segments: &[Segment],
    len: usize,
    offset: usize,
    direction: RemovalDirection,
    absorb: bool,
) -> Option<(usize, usize)> {
    match direction {
        RemovalDirection::Backward => {
            let idx = segment_at(segments, offset.checked_sub(1)?)?;
            let lo = match idx.checked_sub(1) {
                Some(prev)
                    if absorb
                        && segments[idx].kind == SegmentKind::Whitespace
                        && segments[prev].kind == SegmentKind::Word =>
                {
                    prev
                }
                _ => idx,
            };
            Some((lo, idx))
        }
        RemovalDirection::Forward => {
            if offset >= len {
                return None;
            }
            let idx = segment_at(segments, offset)?;
            let hi = match segments.get(idx + 1) {
                Some(next)
                    if absorb
                        && segments[idx].kind == SegmentKind::Whitespace
                        && next.kind == SegmentKind::Word =>
                {
                    idx + 1
                }
                _ => idx,
            };
            Some((idx, hi))
        }
    }
}

/// Segment indices (first, last) overlapping `start..end`.
fn overlapped(segments: &[Segment], start: usize, end: usize) -> Option<(usize, usize)> {
    let first = segments.partition_point(|seg| seg.end <= start);
    let past_last = segments.partition_point(|seg| seg.start < end);
    (first < past_last).then(|| (first, past_last - 1))
}
