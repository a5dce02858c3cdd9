//! Content blocks and entity ranges.
//!
//! A block is one unit of document text (typically a paragraph). Every character offset maps
//! to at most one entity key. [`ContentBlock`] stores that mapping as a sorted list of disjoint
//! spans, so point lookups are a binary search and range reports are a linear scan.

use thiserror::Error;

use crate::entity::EntityKey;
use crate::selection::BlockKey;
use crate::text;

/// A half-open character range (`start..end`) occupied by one entity within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityRange {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl EntityRange {
    /// Create a new entity range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// `true` if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// `true` if `offset` lies in `[start, end]` (both ends inclusive).
    ///
    /// A caret sitting right before or right after an entity still "touches" it.
    pub fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// Errors produced when editing a block's entity mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// The range ends past the end of the block text.
    #[error("range {start}..{end} is out of bounds for block of length {len}")]
    RangeOutOfBounds {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
        /// Block length in characters.
        len: usize,
    },
    /// `start > end`.
    #[error("inverted range {start}..{end}")]
    InvertedRange {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
    },
}

/// What the removal core needs to know about a block.
pub trait BlockEntities {
    /// Key of this block.
    fn key(&self) -> &BlockKey;

    /// Full block text.
    fn text(&self) -> &str;

    /// Entity covering the character at `offset`, if any.
    fn entity_at(&self, offset: usize) -> Option<&EntityKey>;

    /// All maximal ranges covered by `key`, in document order.
    fn entity_ranges(&self, key: &EntityKey) -> Vec<EntityRange>;

    /// Length of the block text in characters.
    fn char_len(&self) -> usize {
        text::char_count(self.text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EntitySpan {
    start: usize,
    end: usize,
    key: EntityKey,
}

/// A block of text with its entity mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    key: BlockKey,
    text: String,
    char_len: usize,
    /// Sorted by `start`, pairwise disjoint, never empty, adjacent spans never share a key.
    spans: Vec<EntitySpan>,
}

impl ContentBlock {
    /// Create a block without entities.
    pub fn new(key: impl Into<BlockKey>, text: impl Into<String>) -> Self {
        let text = text.into();
        let char_len = text::char_count(&text);
        Self {
            key: key.into(),
            text,
            char_len,
            spans: Vec::new(),
        }
    }

    /// Builder form of [`ContentBlock::apply_entity`] with a key.
    pub fn with_entity(
        mut self,
        start: usize,
        end: usize,
        key: impl Into<EntityKey>,
    ) -> Result<Self, BlockError> {
        self.apply_entity(start, end, Some(key.into()))?;
        Ok(self)
    }

    /// Map every character in `start..end` to `key` (or to no entity when `key` is `None`).
    ///
    /// Whatever was mapped there before is overwritten; spans partially covered are trimmed or
    /// split.
    pub fn apply_entity(
        &mut self,
        start: usize,
        end: usize,
        key: Option<EntityKey>,
    ) -> Result<(), BlockError> {
        if start > end {
            return Err(BlockError::InvertedRange { start, end });
        }
        if end > self.char_len {
            return Err(BlockError::RangeOutOfBounds {
                start,
                end,
                len: self.char_len,
            });
        }
        if start == end {
            return Ok(());
        }

        let mut spans = Vec::with_capacity(self.spans.len() + 2);
        for span in self.spans.drain(..) {
            if span.end <= start || span.start >= end {
                spans.push(span);
                continue;
            }
            if span.start < start {
                spans.push(EntitySpan {
                    start: span.start,
                    end: start,
                    key: span.key.clone(),
                });
            }
            if span.end > end {
                spans.push(EntitySpan {
                    start: end,
                    end: span.end,
                    key: span.key,
                });
            }
        }
        if let Some(key) = key {
            spans.push(EntitySpan { start, end, key });
        }
        spans.sort_by_key(|span| span.start);

        // Coalesce so that every span is a maximal run.
        let mut merged: Vec<EntitySpan> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if last.end == span.start && last.key == span.key => {
                    last.end = span.end;
                }
                _ => merged.push(span),
            }
        }
        self.spans = merged;
        Ok(())
    }

    /// Key of this block.
    pub fn key(&self) -> &BlockKey {
        &self.key
    }

    /// Full block text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the block text in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Text between two character offsets (clamped to the block).
    pub fn slice(&self, start: usize, end: usize) -> &str {
        text::slice_chars(&self.text, start, end)
    }

    /// Entity covering the character at `offset`, if any.
    pub fn entity_at(&self, offset: usize) -> Option<&EntityKey> {
        let idx = self.spans.partition_point(|span| span.end <= offset);
        self.spans
            .get(idx)
            .filter(|span| span.start <= offset)
            .map(|span| &span.key)
    }

    /// All maximal ranges covered by `key`, in document order.
    pub fn entity_ranges(&self, key: &EntityKey) -> Vec<EntityRange> {
        self.spans
            .iter()
            .filter(|span| &span.key == key)
            .map(|span| EntityRange::new(span.start, span.end))
            .collect()
    }

    /// Every entity span in the block as `(range, key)` pairs, in document order.
    pub fn entity_spans(&self) -> impl Iterator<Item = (EntityRange, &EntityKey)> + '_ {
        self.spans
            .iter()
            .map(|span| (EntityRange::new(span.start, span.end), &span.key))
    }
}

impl BlockEntities for ContentBlock {
    fn key(&self) -> &BlockKey {
        ContentBlock::key(self)
    }

    fn text(&self) -> &str {
        ContentBlock::text(self)
    }

    fn entity_at(&self, offset: usize) -> Option<&EntityKey> {
        ContentBlock::entity_at(self, offset)
    }

    fn entity_ranges(&self, key: &EntityKey) -> Vec<EntityRange> {
        ContentBlock::entity_ranges(self, key)
    }

    fn char_len(&self) -> usize {
        self.char_len
    }
}
