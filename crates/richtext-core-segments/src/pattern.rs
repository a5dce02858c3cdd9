use regex::Regex;
use richtext_core::{Segment, SegmentKind, Segmenter};
use thiserror::Error;

/// Errors produced when building a [`PatternSegmenter`].
#[derive(Debug, Error)]
pub enum SegmenterError {
    /// The separator pattern failed to compile.
    #[error("invalid separator pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// The separator pattern matches the empty string.
    #[error("separator pattern '{0}' matches the empty string")]
    MatchesEmpty(String),
}

/// Segments text with a separator regex.
///
/// Every match of the pattern is a separator segment (whitespace if it is all whitespace,
/// punctuation otherwise); the text between matches forms word segments.
#[derive(Debug, Clone)]
pub struct PatternSegmenter {
    separator: Regex,
}

impl PatternSegmenter {
    /// Compile a separator pattern.
    ///
    /// Patterns that can match the empty string are rejected: they would produce empty
    /// separators.
    pub fn new(pattern: &str) -> Result<Self, SegmenterError> {
        let separator = Regex::new(pattern)?;
        if separator.is_match("") {
            return Err(SegmenterError::MatchesEmpty(pattern.to_string()));
        }
        Ok(Self { separator })
    }

    /// The separator pattern.
    pub fn pattern(&self) -> &str {
        self.separator.as_str()
    }
}

impl Segmenter for PatternSegmenter {
    fn segments(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut offset = 0usize;
        let mut last_byte = 0usize;

        for m in self.separator.find_iter(text) {
            if m.start() > last_byte {
                let len = text[last_byte..m.start()].chars().count();
                segments.push(Segment::new(offset, offset + len, SegmentKind::Word));
                offset += len;
            }

            let separator = m.as_str();
            let len = separator.chars().count();
            let kind = if separator.chars().all(char::is_whitespace) {
                SegmentKind::Whitespace
            } else {
                SegmentKind::Punctuation
            };
            segments.push(Segment::new(offset, offset + len, kind));
            offset += len;
            last_byte = m.end();
        }

        if last_byte < text.len() {
            let len = text[last_byte..].chars().count();
            segments.push(Segment::new(offset, offset + len, SegmentKind::Word));
        }

        segments
    }
}
