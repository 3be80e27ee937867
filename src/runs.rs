//! The run array and its merge invariant.
//!
//! A [`RunVec`] is an ordered array of runs where no two adjacent runs
//! satisfy `can_merge` and every run has a positive span. Every constructor
//! and mutation below re-establishes that invariant locally, so it holds for
//! any sequence reachable through the public API.
//!
//! Merging cascades strictly left-to-right. After an element is absorbed the
//! boundary it closed is never re-examined, which is what keeps batch
//! construction a single O(n) pass.

use smallvec::SmallVec;

use crate::error::{Result, RleError};
use crate::prefix::PrefixIndex;
use crate::slice::RangeIter;
use crate::traits::{Mergeable, Sliceable, Spanning};

/// Runs kept inline before spilling to the heap. Sequences with heavy
/// merging often stay this short.
const INLINE_RUNS: usize = 4;

/// An ordered array of runs with no two adjacent runs mergeable.
#[derive(Debug, Clone)]
pub struct RunVec<T> {
    runs: SmallVec<[T; INLINE_RUNS]>,
}

impl<T: Mergeable + Spanning> RunVec<T> {
    /// Create an empty sequence.
    pub fn new() -> RunVec<T> {
        RunVec {
            runs: SmallVec::new(),
        }
    }

    /// Build a sequence from elements in one pass.
    ///
    /// Zero-span elements are skipped; mergeable neighbors cascade into
    /// single runs as they arrive. No re-scanning happens afterwards.
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> RunVec<T> {
        let mut out = RunVec::new();
        for elem in elements {
            if elem.span() == 0 {
                continue;
            }
            out.push_run(elem);
        }
        out
    }

    /// Merge `run` into the last run, or push it as a new one.
    ///
    /// Caller guarantees `run.span() > 0`.
    fn push_run(&mut self, run: T) {
        debug_assert!(run.span() > 0);
        match self.runs.last_mut() {
            Some(last) if last.can_merge(&run) => last.merge(run),
            _ => self.runs.push(run),
        }
    }

    /// Append one element, merging into the tail run when possible.
    ///
    /// Amortized O(1). Fails with [`RleError::ZeroSpan`] for elements that
    /// occupy no index space.
    pub fn append(&mut self, elem: T) -> Result<()> {
        if elem.span() == 0 {
            return Err(RleError::ZeroSpan);
        }
        self.push_run(elem);
        Ok(())
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total span, by summing every run. O(n); the encoded-sequence wrapper
    /// caches this through its prefix index.
    pub fn span(&self) -> usize {
        self.runs.iter().map(|run| run.span()).sum()
    }

    /// Total visible length, by summing every run. O(n).
    pub fn logical_len(&self) -> usize {
        self.runs.iter().map(|run| run.logical_len()).sum()
    }

    /// The runs as a slice.
    pub fn runs(&self) -> &[T] {
        &self.runs
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.runs.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.runs.iter()
    }

    /// Locate the run containing span position `pos` by linear accumulation.
    ///
    /// Returns `(run index, offset within run)`, or `None` past the end. O(n);
    /// see [`find_fast`](RunVec::find_fast) for the indexed variant.
    pub fn find(&self, pos: usize) -> Option<(usize, usize)> {
        let mut before = 0;
        for (idx, run) in self.runs.iter().enumerate() {
            if before + run.span() > pos {
                return Some((idx, pos - before));
            }
            before += run.span();
        }
        None
    }

    /// Locate the run containing `pos` through a prefix index. O(log n).
    ///
    /// `index` must have been built from this sequence's current runs.
    pub fn find_fast(&self, pos: usize, index: &PrefixIndex) -> Option<(usize, usize)> {
        debug_assert_eq!(index.len(), self.runs.len());
        index.find(pos)
    }

    /// Concatenate two sequences into a new one, cascading merges across
    /// the seam.
    pub fn concat(&self, other: &RunVec<T>) -> RunVec<T>
    where
        T: Clone,
    {
        RunVec::from_elements(self.runs.iter().chain(other.runs.iter()).cloned())
    }

    /// In-place concatenation.
    pub fn extend(&mut self, other: RunVec<T>) {
        for run in other.runs {
            self.push_run(run);
        }
    }

    /// Lazy views over the runs intersecting `[start, end)`.
    ///
    /// Fails with [`RleError::InvalidRange`] when `start > end` and
    /// [`RleError::PositionOutOfBounds`] when `end` is past the total span.
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
        Ok(RangeIter::new(&self.runs, 0, 0, start, end))
    }

    /// Like [`range`](RunVec::range), but bounds are clamped into the
    /// sequence instead of failing.
    pub fn range_clamped(&self, start: usize, end: usize) -> RangeIter<'_, T> {
        let end = end.min(self.span());
        let start = start.min(end);
        RangeIter::new(&self.runs, 0, 0, start, end)
    }
}

impl<T: Mergeable + Spanning + Sliceable> RunVec<T> {
    /// Split into two sequences at span position `pos`.
    ///
    /// The boundary run, if cut, is sliced into two pieces; both halves are
    /// rebuilt through the same merge path as `append`, so the invariant is
    /// restored on each side. Content is preserved exactly. A later concat of
    /// the halves may produce a different run count than the original, since
    /// the seam runs can re-merge differently.
    pub fn split(self, pos: usize) -> Result<(RunVec<T>, RunVec<T>)> {
        let span = self.span();
        if pos > span {
            return Err(RleError::PositionOutOfBounds {
                position: pos,
                span,
            });
        }
        let mut left = RunVec::new();
        let mut right = RunVec::new();
        let mut before = 0;
        for run in self.runs {
            let run_span = run.span();
            if before + run_span <= pos {
                left.push_run(run);
            } else if before >= pos {
                right.push_run(run);
            } else {
                let cut = pos - before;
                let head = run.slice(0, cut)?;
                let tail = run.slice(cut, run_span)?;
                left.push_run(head);
                right.push_run(tail);
            }
            before += run_span;
        }
        Ok((left, right))
    }
}

impl<T: Mergeable + Spanning> Default for RunVec<T> {
    fn default() -> RunVec<T> {
        RunVec::new()
    }
}

impl<T: Mergeable + Spanning> FromIterator<T> for RunVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> RunVec<T> {
        RunVec::from_elements(iter)
    }
}
