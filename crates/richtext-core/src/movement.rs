//! Keystroke helpers.
//!
//! Backspace and delete act on a caret, but removal ranges are computed from selections. A host
//! first extends the caret by one grapheme cluster with [`extend_collapsed_selection`], then
//! resolves the result with [`crate::removal::RemovalRangeResolver`].

use crate::block::BlockEntities;
use crate::segments::RemovalDirection;
use crate::selection::{Selection, SelectionPatch};
use crate::text;

/// Extend a collapsed selection by one grapheme cluster in `direction`, staying inside `block`.
///
/// Non-collapsed selections, selections in another block, and carets already at the block edge
/// in the direction of travel are returned unchanged. An offset that falls inside a grapheme
/// cluster extends to the cluster boundary.
pub fn extend_collapsed_selection<B>(
    block: &B,
    selection: &Selection,
    direction: RemovalDirection,
) -> Selection
where
    B: BlockEntities + ?Sized,
{
    if !selection.is_collapsed() || selection.anchor_key() != block.key() {
        return selection.clone();
    }

    let offset = selection.anchor_offset();
    let boundaries = text::grapheme_boundaries(block.text());
    let target = match direction {
        RemovalDirection::Backward => boundaries.iter().rev().find(|&&b| b < offset).copied(),
        RemovalDirection::Forward => boundaries.iter().find(|&&b| b > offset).copied(),
    };
    let Some(target) = target else {
        return selection.clone();
    };

    let (start, end) = match direction {
        RemovalDirection::Backward => (target, offset),
        RemovalDirection::Forward => (offset, target),
    };
    selection.merge(SelectionPatch {
        anchor_offset: Some(start),
        focus_offset: Some(end),
        is_backward: Some(false),
        ..SelectionPatch::default()
    })
}
