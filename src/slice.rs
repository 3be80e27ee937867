//! Lazy views into run sub-ranges.
//!
//! A [`SliceView`] borrows a single run together with `[start, end)` bounds
//! in that run's own coordinate space. Nothing is copied until [`to_inner`]
//! materializes the sub-element through the run's `Sliceable` impl. Views
//! carry no staleness protection; they are meant to be consumed immediately
//! after the range query that produced them.
//!
//! [`to_inner`]: SliceView::to_inner

use crate::error::Result;
use crate::traits::{Sliceable, Spanning};

/// An immutable reference to the `[start, end)` portion of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceView<'a, T> {
    run: &'a T,
    start: usize,
    end: usize,
}

impl<'a, T> SliceView<'a, T> {
    pub(crate) fn new(run: &'a T, start: usize, end: usize) -> SliceView<'a, T> {
        debug_assert!(start < end);
        SliceView { run, start, end }
    }

    /// The borrowed run.
    pub fn run(&self) -> &'a T {
        self.run
    }

    /// Start of the view, in the run's own coordinates.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End of the view (exclusive), in the run's own coordinates.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of positions covered by the view.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<T: Sliceable> SliceView<'_, T> {
    /// Materialize the viewed portion as an owned element.
    pub fn to_inner(&self) -> Result<T> {
        self.run.slice(self.start, self.end)
    }
}

impl<T: Spanning> SliceView<'_, T> {
    /// Whether the view covers the whole run.
    pub fn is_full(&self) -> bool {
        self.start == 0 && self.end == self.run.span()
    }
}

/// Lazy iterator over the runs intersecting a `[start, end)` range.
///
/// Yields one [`SliceView`] per intersecting run. Bounds are validated by the
/// range query that constructs the iterator; iteration itself cannot fail,
/// though each view's materialization can.
#[derive(Debug, Clone)]
pub struct RangeIter<'a, T> {
    runs: &'a [T],
    /// Next run to examine.
    idx: usize,
    /// Span of all runs before `runs[idx]`.
    before: usize,
    start: usize,
    end: usize,
}

impl<'a, T> RangeIter<'a, T> {
    pub(crate) fn new(
        runs: &'a [T],
        idx: usize,
        before: usize,
        start: usize,
        end: usize,
    ) -> RangeIter<'a, T> {
        RangeIter {
            runs,
            idx,
            before,
            start,
            end,
        }
    }
}

impl<'a, T: Spanning> Iterator for RangeIter<'a, T> {
    type Item = SliceView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.runs.len() {
            let run = &self.runs[self.idx];
            let run_start = self.before;
            let run_end = run_start + run.span();
            self.idx += 1;
            self.before = run_end;

            if run_end <= self.start {
                continue;
            }
            if run_start >= self.end {
                return None;
            }
            let lo = self.start.saturating_sub(run_start);
            let hi = (self.end - run_start).min(run.span());
            if lo >= hi {
                return None;
            }
            return Some(SliceView::new(run, lo, hi));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RleError;
    use crate::testutil::Lit;

    #[test]
    fn view_accessors() {
        let run = Lit::new(b'x', 10);
        let view = SliceView::new(&run, 2, 7);
        assert_eq!(view.start(), 2);
        assert_eq!(view.end(), 7);
        assert_eq!(view.len(), 5);
        assert!(!view.is_empty());
        assert!(!view.is_full());
        assert!(SliceView::new(&run, 0, 10).is_full());
    }

    #[test]
    fn materialize() {
        let run = Lit::new(b'x', 10);
        let view = SliceView::new(&run, 2, 7);
        assert_eq!(view.to_inner().unwrap(), Lit::new(b'x', 5));
    }

    #[test]
    fn materialize_reports_bad_cut() {
        let run = String::from("héllo");
        // Byte 2 is inside the two-byte 'é'.
        let view = SliceView::new(&run, 0, 2);
        assert_eq!(
            view.to_inner(),
            Err(RleError::InvalidSlice { start: 0, end: 2 })
        );
    }

    #[test]
    fn range_iter_clips_boundary_runs() {
        let runs = [Lit::new(b'a', 3), Lit::new(b'b', 4), Lit::new(b'c', 2)];
        let views: Vec<_> = RangeIter::new(&runs, 0, 0, 2, 8).collect();
        assert_eq!(views.len(), 3);
        assert_eq!((views[0].start(), views[0].end()), (2, 3));
        assert_eq!((views[1].start(), views[1].end()), (0, 4));
        assert_eq!((views[2].start(), views[2].end()), (0, 1));
    }

    #[test]
    fn range_iter_empty_window() {
        let runs = [Lit::new(b'a', 3), Lit::new(b'b', 4)];
        assert_eq!(RangeIter::new(&runs, 0, 0, 3, 3).count(), 0);
        assert_eq!(RangeIter::new(&runs, 0, 0, 7, 7).count(), 0);
    }
}
