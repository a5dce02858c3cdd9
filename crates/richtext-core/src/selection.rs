//! Immutable selection values.
//!
//! A [`Selection`] is an anchor/focus pair of character offsets, each qualified by the key of the
//! block it lives in. Selections are never mutated in place: every adjustment goes through
//! [`Selection::merge`] (or one of the helpers built on it) and yields a new value, so a selection
//! handed to several independent computations cannot be affected by any of them.

use std::fmt;

/// Identifier of a content block (one paragraph-like unit of text).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockKey(String);

impl BlockKey {
    /// Create a block key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for BlockKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A text selection expressed as anchor/focus character offsets.
///
/// `is_backward` records whether the focus precedes the anchor in document order. The start/end
/// accessors are derived from it, which keeps them meaningful for selections spanning two blocks
/// (where the raw offsets of different blocks are not comparable). For a single-block selection
/// built with [`Selection::within`], `start_offset() == min(anchor, focus)` and
/// `end_offset() == max(anchor, focus)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    anchor_key: BlockKey,
    anchor_offset: usize,
    focus_key: BlockKey,
    focus_offset: usize,
    is_backward: bool,
}

/// A set of field overrides applied by [`Selection::merge`].
///
/// Fields left as `None` are copied from the selection being merged into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPatch {
    /// New anchor block key.
    pub anchor_key: Option<BlockKey>,
    /// New anchor offset.
    pub anchor_offset: Option<usize>,
    /// New focus block key.
    pub focus_key: Option<BlockKey>,
    /// New focus offset.
    pub focus_offset: Option<usize>,
    /// New direction flag.
    pub is_backward: Option<bool>,
}

impl Selection {
    /// A collapsed selection (caret) at `offset` in block `key`.
    pub fn collapsed(key: impl Into<BlockKey>, offset: usize) -> Self {
        let key = key.into();
        Self {
            anchor_key: key.clone(),
            anchor_offset: offset,
            focus_key: key,
            focus_offset: offset,
            is_backward: false,
        }
    }

    /// A selection inside a single block; the direction is derived from the offsets.
    pub fn within(key: impl Into<BlockKey>, anchor_offset: usize, focus_offset: usize) -> Self {
        let key = key.into();
        Self {
            anchor_key: key.clone(),
            anchor_offset,
            focus_key: key,
            focus_offset,
            is_backward: focus_offset < anchor_offset,
        }
    }

    /// A selection spanning two blocks.
    ///
    /// Block order is not known to the selection itself, so the caller supplies `is_backward`.
    pub fn across(
        anchor_key: impl Into<BlockKey>,
        anchor_offset: usize,
        focus_key: impl Into<BlockKey>,
        focus_offset: usize,
        is_backward: bool,
    ) -> Self {
        Self {
            anchor_key: anchor_key.into(),
            anchor_offset,
            focus_key: focus_key.into(),
            focus_offset,
            is_backward,
        }
    }

    /// Anchor block key.
    pub fn anchor_key(&self) -> &BlockKey {
        &self.anchor_key
    }

    /// Anchor offset (where the selection started).
    pub fn anchor_offset(&self) -> usize {
        self.anchor_offset
    }

    /// Focus block key.
    pub fn focus_key(&self) -> &BlockKey {
        &self.focus_key
    }

    /// Focus offset (where the selection currently ends).
    pub fn focus_offset(&self) -> usize {
        self.focus_offset
    }

    /// `true` if the focus precedes the anchor.
    pub fn is_backward(&self) -> bool {
        self.is_backward
    }

    /// Key of the block containing the start of the selection.
    pub fn start_key(&self) -> &BlockKey {
        if self.is_backward {
            &self.focus_key
        } else {
            &self.anchor_key
        }
    }

    /// Offset of the start of the selection.
    pub fn start_offset(&self) -> usize {
        if self.is_backward {
            self.focus_offset
        } else {
            self.anchor_offset
        }
    }

    /// Key of the block containing the end of the selection.
    pub fn end_key(&self) -> &BlockKey {
        if self.is_backward {
            &self.anchor_key
        } else {
            &self.focus_key
        }
    }

    /// Offset of the end of the selection.
    pub fn end_offset(&self) -> usize {
        if self.is_backward {
            self.anchor_offset
        } else {
            self.focus_offset
        }
    }

    /// `true` if anchor and focus are at the same place.
    pub fn is_collapsed(&self) -> bool {
        self.anchor_key == self.focus_key && self.anchor_offset == self.focus_offset
    }

    /// `true` if anchor and focus are in the same block.
    pub fn is_single_block(&self) -> bool {
        self.anchor_key == self.focus_key
    }

    /// Derive a new selection with the fields present in `patch` overridden.
    pub fn merge(&self, patch: SelectionPatch) -> Self {
        Self {
            anchor_key: patch.anchor_key.unwrap_or_else(|| self.anchor_key.clone()),
            anchor_offset: patch.anchor_offset.unwrap_or(self.anchor_offset),
            focus_key: patch.focus_key.unwrap_or_else(|| self.focus_key.clone()),
            focus_offset: patch.focus_offset.unwrap_or(self.focus_offset),
            is_backward: patch.is_backward.unwrap_or(self.is_backward),
        }
    }

    /// Derive a forward selection from `start_offset` (in the start block) to `end_offset`
    /// (in the end block).
    pub fn forward_span(&self, start_offset: usize, end_offset: usize) -> Self {
        self.merge(SelectionPatch {
            anchor_key: Some(self.start_key().clone()),
            anchor_offset: Some(start_offset),
            focus_key: Some(self.end_key().clone()),
            focus_offset: Some(end_offset),
            is_backward: Some(false),
        })
    }
}
