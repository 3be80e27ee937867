//! Capability contracts for element types.
//!
//! An element type opts into the container by implementing a subset of these
//! traits. `Mergeable + Spanning` unlocks append and positional lookup;
//! adding `Sliceable` unlocks split and range queries.
//!
//! # Merge Semantics
//!
//! Batch construction cascades merges strictly left-to-right: once two
//! elements merge, earlier boundaries are never re-examined. This is what
//! keeps batch construction O(n). Implementations must behave consistently
//! enough under cascades that re-examination is never needed.

use crate::error::Result;

/// Elements that can absorb an adjacent element into a single run.
pub trait Mergeable {
    /// Whether `other` can be absorbed into `self`.
    fn can_merge(&self, other: &Self) -> bool;

    /// Absorb `other` into `self`. Called only where `can_merge` holds.
    fn merge(&mut self, other: Self);
}

/// Elements with a measurable size.
pub trait HasLength {
    /// Number of atomic units in this element.
    fn len(&self) -> usize;

    /// Whether this element holds no units.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Elements that occupy index space.
///
/// `span` is the size in index/position space; `logical_len` is the visible
/// payload, which may be smaller (tombstoned regions in a CRDT backing store,
/// gaps in a gap buffer). Both default to `len`.
pub trait Spanning: HasLength {
    /// Size in index space.
    fn span(&self) -> usize {
        self.len()
    }

    /// Visible payload size.
    fn logical_len(&self) -> usize {
        self.span()
    }
}

/// Elements that can be cut at internal boundaries.
pub trait Sliceable: Sized {
    /// Produce the `[start, end)` sub-element, in this element's own
    /// coordinate space.
    ///
    /// Fails with [`RleError::InvalidSlice`](crate::RleError::InvalidSlice)
    /// when the bounds do not align to a valid internal boundary, e.g.
    /// splitting inside a multi-byte character.
    fn slice(&self, start: usize, end: usize) -> Result<Self>;
}
