#![warn(missing_docs)]
//! Rich Text Core - entity-aware removal ranges for rich-text documents
//!
//! # Overview
//!
//! `richtext-core` computes which characters a removal (backspace, delete, cut, typing over a
//! selection) must delete when the selection touches *entities*: links, mentions, hashtags and
//! other metadata attached to spans of block text. Each entity carries a [`Mutability`]:
//!
//! - **Mutable**: edited like plain text, the selection is left alone;
//! - **Immutable**: removed atomically, the selection grows to cover the whole entity;
//! - **Segmented**: removed segment by segment (e.g. word by word), the selection snaps to
//!   segment boundaries.
//!
//! The crate is headless and pure: it never edits the document, it returns the [`Selection`]
//! a separate removal step should delete.
//!
//! # Quick Start
//!
//! ```rust
//! use richtext_core::{
//!     ContentBlock, Entity, EntityMap, Mutability, RemovalDirection, Selection,
//!     extend_collapsed_selection, resolve_removal_range,
//! };
//!
//! let mut entities = EntityMap::new();
//! let mention = entities.create(Entity::new("MENTION", Mutability::Immutable));
//! let block = ContentBlock::new("b1", "see @alice here")
//!     .with_entity(4, 10, mention)
//!     .unwrap();
//!
//! // Caret right after "@alice", backspace pressed.
//! let caret = Selection::collapsed("b1", 10);
//! let stroke = extend_collapsed_selection(&block, &caret, RemovalDirection::Backward);
//! let removal =
//!     resolve_removal_range(&entities, &block, &block, &stroke, RemovalDirection::Backward)
//!         .unwrap();
//!
//! assert_eq!((removal.start_offset(), removal.end_offset()), (4, 10));
//! assert!(!removal.is_backward());
//! ```
//!
//! # Module Description
//!
//! - [`selection`] - immutable selection values and field-override merging
//! - [`entity`] - entity records, mutability and the entity registry
//! - [`block`] - content blocks and their entity ranges
//! - [`segments`] - segmentation and segment-snapped removal for segmented entities
//! - [`removal`] - the removal range resolver
//! - [`movement`] - caret-to-selection helpers for backspace/delete
//!
//! All offsets are character offsets (Unicode scalar values), ranges are half-open.

pub mod block;
pub mod entity;
pub mod movement;
pub mod removal;
pub mod segments;
pub mod selection;
mod text;

pub use block::{BlockEntities, BlockError, ContentBlock, EntityRange};
pub use entity::{Entity, EntityKey, EntityLookup, EntityMap, Mutability};
pub use movement::extend_collapsed_selection;
pub use removal::{EntityBoundary, RemovalError, RemovalRangeResolver, resolve_removal_range};
pub use segments::{
    RemovalDirection, Segment, SegmentKind, SegmentOptions, SegmentRemoval, SegmentedRemoval,
    Segmenter, SeparatorSegmenter, TextRange,
};
pub use selection::{BlockKey, Selection, SelectionPatch};
