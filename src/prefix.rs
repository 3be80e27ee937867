//! Prefix sum index over a run array.
//!
//! Two cumulative arrays, one entry per run: entry `i` is the sum over
//! `runs[0..=i]` of `span` and `logical_len` respectively. Spans are strictly
//! positive so the span array is strictly increasing, which makes positional
//! lookup a single `partition_point` binary search.
//!
//! The index is valid only for the exact run array it was built from. It is
//! never maintained incrementally; the owning sequence drops it on every
//! mutation and rebuilds on the next read that needs it.

use crate::traits::Spanning;

/// Cumulative span/logical-length arrays for one run array state.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    spans: Vec<usize>,
    logical: Vec<usize>,
}

impl PrefixIndex {
    /// Build the index in one O(n) pass.
    pub fn build<T: Spanning>(runs: &[T]) -> PrefixIndex {
        let mut spans = Vec::with_capacity(runs.len());
        let mut logical = Vec::with_capacity(runs.len());
        let mut span_sum = 0;
        let mut logical_sum = 0;
        for run in runs {
            span_sum += run.span();
            logical_sum += run.logical_len();
            spans.push(span_sum);
            logical.push(logical_sum);
        }
        PrefixIndex { spans, logical }
    }

    /// Number of indexed runs.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total span of the indexed runs.
    pub fn span(&self) -> usize {
        self.spans.last().copied().unwrap_or(0)
    }

    /// Total visible length of the indexed runs.
    pub fn logical_len(&self) -> usize {
        self.logical.last().copied().unwrap_or(0)
    }

    /// Span of all runs before run `idx`.
    pub fn span_before(&self, idx: usize) -> usize {
        if idx == 0 { 0 } else { self.spans[idx - 1] }
    }

    /// Locate the run containing span position `pos`.
    ///
    /// Returns `(run index, offset within run)`, or `None` when `pos` is past
    /// the end. O(log n).
    pub fn find(&self, pos: usize) -> Option<(usize, usize)> {
        if pos >= self.span() {
            return None;
        }
        // First run whose cumulative span exceeds pos.
        let idx = self.spans.partition_point(|&sum| sum <= pos);
        Some((idx, pos - self.span_before(idx)))
    }
}
