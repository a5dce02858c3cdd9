//! Entity-aware removal ranges.
//!
//! Given the selection a removal (backspace, delete, cut, typing over a selection) would act on,
//! [`RemovalRangeResolver::resolve`] widens or snaps its boundaries so that the entities it
//! touches are removed according to their [`Mutability`]:
//!
//! - `Mutable` entities behave like plain text;
//! - `Immutable` entities are removed as a whole;
//! - `Segmented` entities are removed segment by segment (see [`crate::segments`]).
//!
//! The resolver never edits the document: it only returns the selection a separate removal step
//! should delete.

use thiserror::Error;

use crate::block::{BlockEntities, EntityRange};
use crate::entity::{EntityKey, EntityLookup, Mutability};
use crate::segments::{RemovalDirection, SegmentRemoval, SegmentedRemoval, TextRange};
use crate::selection::{BlockKey, Selection, SelectionPatch};
use crate::text;

/// Errors returned by removal range resolution.
///
/// All of them indicate an inconsistent document model or mismatched inputs. None of them is
/// resolved by guessing, since a wrong guess would delete user content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemovalError {
    /// The block does not have exactly one range of `key` touching `offset`.
    #[error(
        "expected exactly one range of entity {key} touching offset {offset} in block {block}, found {matches}"
    )]
    InconsistentEntityRange {
        /// Entity whose ranges were inspected.
        key: EntityKey,
        /// Block that was inspected.
        block: BlockKey,
        /// Boundary offset under consideration.
        offset: usize,
        /// Number of matching ranges (anything but one).
        matches: usize,
    },
    /// A block references an entity the registry does not know.
    #[error("entity {key} is not registered")]
    UnknownEntity {
        /// The missing key.
        key: EntityKey,
    },
    /// The supplied block is not the one the selection boundary lives in.
    #[error("selection boundary is in block {expected}, but block {actual} was supplied")]
    BlockMismatch {
        /// Block key recorded in the selection.
        expected: BlockKey,
        /// Key of the block that was supplied.
        actual: BlockKey,
    },
    /// A selection boundary lies past the end of its block.
    #[error("offset {offset} is out of bounds for block {block} of length {len}")]
    OffsetOutOfBounds {
        /// Block the offset refers to.
        block: BlockKey,
        /// Offending offset.
        offset: usize,
        /// Block length in characters.
        len: usize,
    },
}

/// Which part of the selection an entity adjustment is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityBoundary {
    /// Both ends of the selection touch the same entity in the same block.
    Enclosing,
    /// Only the start of the selection is being adjusted.
    Start,
    /// Only the end of the selection is being adjusted.
    End,
}

/// Resolves removal ranges, using `R` for segmented entities.
#[derive(Debug, Clone, Default)]
pub struct RemovalRangeResolver<R = SegmentedRemoval> {
    segment_removal: R,
}

impl RemovalRangeResolver<SegmentedRemoval> {
    /// Resolver with the default segment removal.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: SegmentRemoval> RemovalRangeResolver<R> {
    /// Resolver with a custom segment removal (a [`SegmentedRemoval`] with another segmenter,
    /// or any closure implementing [`SegmentRemoval`]).
    pub fn with_segment_removal(segment_removal: R) -> Self {
        Self { segment_removal }
    }

    /// The segment removal in use.
    pub fn segment_removal(&self) -> &R {
        &self.segment_removal
    }

    /// Compute the selection a removal of `selection` in `direction` should delete.
    ///
    /// `start_block` must hold the start of the selection and `end_block` its end; they are the
    /// same block for a single-line removal. The entity covering the first selected character
    /// and the one covering the last selected character (not the one just past the end) decide
    /// the outcome:
    ///
    /// - neither side touches an entity: `selection` is returned unchanged;
    /// - both sides touch the same entity of the same block: that entity alone decides;
    /// - both sides touch different entities: each side is adjusted independently from
    ///   `selection` and the result spans from the adjusted start to the adjusted end;
    /// - only one side touches an entity: only that side moves, the other keeps its offset.
    ///
    /// Whenever a boundary was recomputed the result is a forward selection.
    pub fn resolve<M, B>(
        &self,
        entity_map: &M,
        start_block: &B,
        end_block: &B,
        selection: &Selection,
        direction: RemovalDirection,
    ) -> Result<Selection, RemovalError>
    where
        M: EntityLookup + ?Sized,
        B: BlockEntities + ?Sized,
    {
        check_block(start_block, selection.start_key(), selection.start_offset())?;
        check_block(end_block, selection.end_key(), selection.end_offset())?;

        let start = selection.start_offset();
        let end = selection.end_offset();
        let start_entity = start_block.entity_at(start);
        let end_entity = end
            .checked_sub(1)
            .and_then(|last| end_block.entity_at(last));

        let resolved = match (start_entity, end_entity) {
            (None, None) => {
                tracing::trace!(start, end, "removal touches no entity");
                return Ok(selection.clone());
            }
            (Some(start_key), Some(end_key))
                if start_key == end_key && start_block.key() == end_block.key() =>
            {
                tracing::trace!(entity = %start_key, start, end, "removal within one entity");
                self.entity_removal_range(
                    entity_map,
                    start_block,
                    selection,
                    direction,
                    start_key,
                    EntityBoundary::Enclosing,
                )?
            }
            (Some(start_key), Some(end_key)) => {
                tracing::trace!(
                    start_entity = %start_key,
                    end_entity = %end_key,
                    start,
                    end,
                    "removal touches an entity on each side"
                );
                // Both sides are derived from the caller's selection, never from each other.
                let start_side = self.entity_removal_range(
                    entity_map,
                    start_block,
                    selection,
                    direction,
                    start_key,
                    EntityBoundary::Start,
                )?;
                let end_side = self.entity_removal_range(
                    entity_map,
                    end_block,
                    selection,
                    direction,
                    end_key,
                    EntityBoundary::End,
                )?;
                selection.forward_span(start_side.start_offset(), end_side.end_offset())
            }
            (Some(start_key), None) => {
                tracing::trace!(entity = %start_key, start, end, "removal starts in an entity");
                let start_side = self.entity_removal_range(
                    entity_map,
                    start_block,
                    selection,
                    direction,
                    start_key,
                    EntityBoundary::Start,
                )?;
                selection.forward_span(start_side.start_offset(), end)
            }
            (None, Some(end_key)) => {
                tracing::trace!(entity = %end_key, start, end, "removal ends in an entity");
                let end_side = self.entity_removal_range(
                    entity_map,
                    end_block,
                    selection,
                    direction,
                    end_key,
                    EntityBoundary::End,
                )?;
                selection.forward_span(start, end_side.end_offset())
            }
        };

        Ok(resolved)
    }

    /// Adjust `selection` for the single entity `entity_key` in `block`.
    ///
    /// `boundary` says which selection boundary is known to touch the entity. The returned
    /// selection is `selection` itself for mutable entities; otherwise it is a forward selection
    /// inside `block`:
    ///
    /// - immutable: exactly the entity range touching the boundary;
    /// - segmented: the segment-snapped removal range. When only one side is being adjusted, the
    ///   other side is first clamped to the entity range so text outside the entity does not
    ///   take part in segmentation.
    ///
    /// Fails with [`RemovalError::InconsistentEntityRange`] unless exactly one range of the
    /// entity touches the boundary (both range ends inclusive).
    pub fn entity_removal_range<M, B>(
        &self,
        entity_map: &M,
        block: &B,
        selection: &Selection,
        direction: RemovalDirection,
        entity_key: &EntityKey,
        boundary: EntityBoundary,
    ) -> Result<Selection, RemovalError>
    where
        M: EntityLookup + ?Sized,
        B: BlockEntities + ?Sized,
    {
        let entity = entity_map
            .entity(entity_key)
            .ok_or_else(|| RemovalError::UnknownEntity {
                key: entity_key.clone(),
            })?;

        let mut start = selection.start_offset();
        let mut end = selection.end_offset();
        let side_to_consider = match boundary {
            EntityBoundary::Enclosing | EntityBoundary::Start => start,
            EntityBoundary::End => end,
        };

        if entity.mutability == Mutability::Mutable {
            return Ok(selection.clone());
        }

        let range = sole_range_touching(block, entity_key, side_to_consider)?;

        if entity.mutability == Mutability::Immutable {
            tracing::debug!(
                entity = %entity_key,
                range_start = range.start,
                range_end = range.end,
                "removing immutable entity as a whole"
            );
            return Ok(span_in_block(selection, block.key(), range.start, range.end));
        }

        match boundary {
            EntityBoundary::Enclosing => {}
            EntityBoundary::Start => end = range.end,
            EntityBoundary::End => start = range.start,
        }

        let entity_text = text::slice_chars(block.text(), range.start, range.end);
        let removal =
            self.segment_removal
                .removal_range(start, end, entity_text, range.start, direction);
        let clamped = clamp_to(removal, range);
        if clamped != removal {
            tracing::warn!(
                entity = %entity_key,
                removal_start = removal.start,
                removal_end = removal.end,
                range_start = range.start,
                range_end = range.end,
                "segment removal escaped its entity; clamping"
            );
        }
        tracing::debug!(
            entity = %entity_key,
            start,
            end,
            removal_start = clamped.start,
            removal_end = clamped.end,
            "removing segments of entity"
        );

        Ok(span_in_block(
            selection,
            block.key(),
            clamped.start,
            clamped.end,
        ))
    }
}

/// Resolve with the default [`RemovalRangeResolver`].
pub fn resolve_removal_range<M, B>(
    entity_map: &M,
    start_block: &B,
    end_block: &B,
    selection: &Selection,
    direction: RemovalDirection,
) -> Result<Selection, RemovalError>
where
    M: EntityLookup + ?Sized,
    B: BlockEntities + ?Sized,
{
    RemovalRangeResolver::new().resolve(entity_map, start_block, end_block, selection, direction)
}

fn check_block<B>(block: &B, expected: &BlockKey, offset: usize) -> Result<(), RemovalError>
where
    B: BlockEntities + ?Sized,
{
    if block.key() != expected {
        return Err(RemovalError::BlockMismatch {
            expected: expected.clone(),
            actual: block.key().clone(),
        });
    }
    let len = block.char_len();
    if offset > len {
        return Err(RemovalError::OffsetOutOfBounds {
            block: expected.clone(),
            offset,
            len,
        });
    }
    Ok(())
}

fn sole_range_touching<B>(
    block: &B,
    key: &EntityKey,
    offset: usize,
) -> Result<EntityRange, RemovalError>
where
    B: BlockEntities + ?Sized,
{
    let matches: Vec<EntityRange> = block
        .entity_ranges(key)
        .into_iter()
        .filter(|range| range.touches(offset))
        .collect();

    match matches.as_slice() {
        [range] => Ok(*range),
        _ => Err(RemovalError::InconsistentEntityRange {
            key: key.clone(),
            block: block.key().clone(),
            offset,
            matches: matches.len(),
        }),
    }
}

fn span_in_block(selection: &Selection, block: &BlockKey, start: usize, end: usize) -> Selection {
    selection.merge(SelectionPatch {
        anchor_key: Some(block.clone()),
        anchor_offset: Some(start),
        focus_key: Some(block.clone()),
        focus_offset: Some(end),
        is_backward: Some(false),
    })
}

fn clamp_to(removal: TextRange, range: EntityRange) -> TextRange {
    let start = removal.start.clamp(range.start, range.end);
    let end = removal.end.clamp(start, range.end);
    TextRange::new(start, end)
}
