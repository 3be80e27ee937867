//! The user-facing encoded sequence.
//!
//! [`RleSeq`] wraps a [`RunVec`] with two pieces of bookkeeping:
//!
//! 1. **Lazy prefix index**: an `OnceCell<PrefixIndex>` rebuilt on the first
//!    read that needs it. Eager maintenance would make a batch of m mutations
//!    O(m·n); dropping the cell instead keeps mutation cost independent of
//!    sequence length.
//! 2. **Version counter**: bumped on every mutation. Cursors capture the
//!    version at creation and compare it on every operation, which is how
//!    they detect staleness without re-scanning data.
//!
//! Invalidation and the version bump happen together in one private helper,
//! [`touch`](RleSeq::touch). Every mutating entry point goes through it;
//! nothing else does either half, so the two can never desynchronize.

use std::cell::OnceCell;

use crate::cursor::Cursor;
use crate::error::{Result, RleError};
use crate::prefix::PrefixIndex;
use crate::runs::RunVec;
use crate::slice::RangeIter;
use crate::traits::{Mergeable, Sliceable, Spanning};

/// A run-length-encoded sequence with O(log n) positional lookup.
#[derive(Debug, Clone)]
pub struct RleSeq<T> {
    runs: RunVec<T>,
    /// Absent exactly when the index is stale.
    index: OnceCell<PrefixIndex>,
    version: u64,
}

impl<T: Mergeable + Spanning> RleSeq<T> {
    /// Create an empty sequence.
    pub fn new() -> RleSeq<T> {
        RleSeq::from_runs(RunVec::new())
    }

    /// Build a sequence from elements in one pass. Zero-span elements are
    /// skipped; mergeable neighbors cascade into single runs.
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> RleSeq<T> {
        RleSeq::from_runs(RunVec::from_elements(elements))
    }

    fn from_runs(runs: RunVec<T>) -> RleSeq<T> {
        RleSeq {
            runs,
            index: OnceCell::new(),
            version: 0,
        }
    }

    /// Invalidate the index and bump the version, as one unit.
    fn touch(&mut self) {
        self.index.take();
        self.version += 1;
    }

    /// The prefix index for the current runs, rebuilding it if absent.
    fn index(&self) -> &PrefixIndex {
        self.index.get_or_init(|| PrefixIndex::build(self.runs.runs()))
    }

    /// Current version. Bumped by every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Total span. O(1) after the first read since the last mutation.
    pub fn span(&self) -> usize {
        self.index().span()
    }

    /// Total visible length. O(1) after the first read since the last
    /// mutation.
    pub fn logical_len(&self) -> usize {
        self.index().logical_len()
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The runs as a slice.
    pub fn runs(&self) -> &[T] {
        self.runs.runs()
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.runs.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.runs.iter()
    }

    /// Locate the run containing span position `pos`. O(log n).
    ///
    /// Returns `(run index, offset within run)`, or `None` past the end.
    pub fn find(&self, pos: usize) -> Option<(usize, usize)> {
        self.runs.find_fast(pos, self.index())
    }

    /// Append one element, merging into the tail run when possible.
    pub fn append(&mut self, elem: T) -> Result<()> {
        self.runs.append(elem)?;
        self.touch();
        Ok(())
    }

    /// In-place concatenation, cascading merges across the seam.
    pub fn extend(&mut self, other: RleSeq<T>) {
        self.runs.extend(other.runs);
        self.touch();
    }

    /// Concatenate into a new sequence. The result starts at version 0 and
    /// shares no cursors with either operand.
    pub fn concat(&self, other: &RleSeq<T>) -> RleSeq<T>
    where
        T: Clone,
    {
        RleSeq::from_runs(self.runs.concat(&other.runs))
    }

    /// Reset to the empty sequence.
    pub fn clear(&mut self) {
        self.runs = RunVec::new();
        self.touch();
    }

    /// Lazy views over the runs intersecting `[start, end)`.
    ///
    /// The prefix index locates the first intersecting run, so the iterator
    /// never walks runs before the range.
    pub fn range(&self, start: usize, end: usize) -> Result<RangeIter<'_, T>> {
        if start > end {
            return Err(RleError::InvalidRange { start, end });
        }
        let span = self.span();
        if end > span {
            return Err(RleError::PositionOutOfBounds {
                position: end,
                span,
            });
        }
        Ok(self.range_from(start, end))
    }

    /// Like [`range`](RleSeq::range), but bounds are clamped into the
    /// sequence instead of failing.
    pub fn range_clamped(&self, start: usize, end: usize) -> RangeIter<'_, T> {
        let end = end.min(self.span());
        let start = start.min(end);
        self.range_from(start, end)
    }

    /// Build a range iterator starting at the run containing `start`.
    /// Caller guarantees `start <= end <= span`.
    fn range_from(&self, start: usize, end: usize) -> RangeIter<'_, T> {
        match self.index().find(start) {
            Some((idx, offset)) => {
                RangeIter::new(self.runs.runs(), idx, start - offset, start, end)
            }
            // start == span: nothing intersects.
            None => RangeIter::new(self.runs.runs(), self.runs.len(), self.span(), start, end),
        }
    }

    /// A cursor at position 0, bound to the current version.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.version)
    }

    /// A cursor at span position `pos`, bound to the current version.
    /// `None` when `pos` is past the end of the sequence (`pos > span`).
    pub fn cursor_at(&self, pos: usize) -> Option<Cursor> {
        let mut cursor = self.cursor();
        cursor.seek(self, pos).then_some(cursor)
    }
}

impl<T: Mergeable + Spanning + Sliceable> RleSeq<T> {
    /// Split into two sequences at span position `pos`.
    ///
    /// Content is preserved exactly; the run count of a later concat of the
    /// halves may differ from the original, since seam runs can re-merge
    /// differently.
    pub fn split(self, pos: usize) -> Result<(RleSeq<T>, RleSeq<T>)> {
        let (left, right) = self.runs.split(pos)?;
        Ok((RleSeq::from_runs(left), RleSeq::from_runs(right)))
    }
}

impl<T: Mergeable + Spanning> Default for RleSeq<T> {
    fn default() -> RleSeq<T> {
        RleSeq::new()
    }
}

impl<T: Mergeable + Spanning> FromIterator<T> for RleSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> RleSeq<T> {
        RleSeq::from_elements(iter)
    }
}
