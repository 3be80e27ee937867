//! Staleness-aware traversal cursors.
//!
//! A [`Cursor`] is a detached handle: `(run, offset, position)` plus the
//! owner's version captured at creation. It holds no borrow of its sequence;
//! instead every operation takes the sequence as an argument and starts with
//! a version-equality check. A mutation of the owner after the cursor was
//! created makes the check fail forever after — there is no resynchronization,
//! a stale cursor stays stale and every operation on it answers `None` or
//! `false`. Create a new cursor to resume.
//!
//! A cursor must be presented to the sequence it was created from; the
//! version guard is what makes misuse detectable, not a licence to mix
//! sequences.

use crate::seq::RleSeq;
use crate::traits::{Mergeable, Spanning};

/// A traversal position inside one [`RleSeq`] snapshot.
///
/// Position is tracked in span coordinates over `[0, span]`; `position ==
/// span` is the end cursor, one past the last unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    version: u64,
    /// Run containing the cursor, or run count when at the end.
    run: usize,
    /// Offset within `run`, in the run's span coordinates.
    offset: usize,
    /// Global span position. Always `span_before(run) + offset`.
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(version: u64) -> Cursor {
        Cursor {
            version,
            run: 0,
            offset: 0,
            pos: 0,
        }
    }

    /// Whether the owner has mutated since this cursor was created.
    pub fn is_stale<T: Mergeable + Spanning>(&self, seq: &RleSeq<T>) -> bool {
        self.version != seq.version()
    }

    /// The version this cursor was captured at.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Current global position. `None` once stale.
    pub fn position<T: Mergeable + Spanning>(&self, seq: &RleSeq<T>) -> Option<usize> {
        if self.is_stale(seq) {
            return None;
        }
        Some(self.pos)
    }

    /// Current `(item, offset within item)` without moving. `None` once
    /// stale or at the end.
    pub fn current<'a, T: Mergeable + Spanning>(
        &self,
        seq: &'a RleSeq<T>,
    ) -> Option<(&'a T, usize)> {
        if self.is_stale(seq) {
            return None;
        }
        seq.get(self.run).map(|item| (item, self.offset))
    }

    /// Current item without moving. `None` once stale or at the end.
    pub fn current_item<'a, T: Mergeable + Spanning>(&self, seq: &'a RleSeq<T>) -> Option<&'a T> {
        self.current(seq).map(|(item, _)| item)
    }

    /// Relocate to span position `pos` by binary search. `false` once stale
    /// or when `pos > span`.
    pub fn seek<T: Mergeable + Spanning>(&mut self, seq: &RleSeq<T>, pos: usize) -> bool {
        if self.is_stale(seq) {
            return false;
        }
        self.place(seq, pos)
    }

    /// Move forward `n` positions. `false` (and no movement) once stale or
    /// when the move would pass the end.
    pub fn advance<T: Mergeable + Spanning>(&mut self, seq: &RleSeq<T>, n: usize) -> bool {
        if self.is_stale(seq) {
            return false;
        }
        match self.pos.checked_add(n) {
            Some(target) => self.place(seq, target),
            None => false,
        }
    }

    /// Move backward `n` positions. `false` (and no movement) once stale or
    /// when the move would pass the start.
    pub fn retreat<T: Mergeable + Spanning>(&mut self, seq: &RleSeq<T>, n: usize) -> bool {
        if self.is_stale(seq) {
            return false;
        }
        match self.pos.checked_sub(n) {
            Some(target) => self.place(seq, target),
            None => false,
        }
    }

    /// Yield the current `(item, offset)` and step forward one position.
    /// `None` once stale or at the end.
    pub fn next<'a, T: Mergeable + Spanning>(
        &mut self,
        seq: &'a RleSeq<T>,
    ) -> Option<(&'a T, usize)> {
        let (item, offset) = self.current(seq)?;
        self.pos += 1;
        self.offset += 1;
        if self.offset >= item.span() {
            self.run += 1;
            self.offset = 0;
        }
        Some((item, offset))
    }

    /// Step backward one position and yield the `(item, offset)` just
    /// crossed. `None` once stale or at the start. Mirrors [`next`]: a
    /// `next` followed by a `prev` yields the same pair.
    ///
    /// [`next`]: Cursor::next
    pub fn prev<'a, T: Mergeable + Spanning>(
        &mut self,
        seq: &'a RleSeq<T>,
    ) -> Option<(&'a T, usize)> {
        if self.is_stale(seq) || self.pos == 0 {
            return None;
        }
        if self.offset > 0 {
            self.offset -= 1;
        } else {
            self.run -= 1;
            self.offset = seq.get(self.run)?.span() - 1;
        }
        self.pos -= 1;
        seq.get(self.run).map(|item| (item, self.offset))
    }

    /// Lazy stream of `(item, offset, global position)` from the cursor's
    /// location to the end of the sequence. Non-restartable; stops the
    /// instant the version check fails.
    pub fn iter_forward<'a, T: Mergeable + Spanning>(
        &self,
        seq: &'a RleSeq<T>,
    ) -> CursorIter<'a, T> {
        CursorIter { seq, cursor: *self }
    }

    /// Jump straight to `target`, maintaining `pos == span_before(run) +
    /// offset`. `false` when `target > span`.
    fn place<T: Mergeable + Spanning>(&mut self, seq: &RleSeq<T>, target: usize) -> bool {
        match seq.find(target) {
            Some((run, offset)) => {
                self.run = run;
                self.offset = offset;
                self.pos = target;
                true
            }
            None if target == seq.span() => {
                self.run = seq.len();
                self.offset = 0;
                self.pos = target;
                true
            }
            None => false,
        }
    }
}

/// Iterator handed out by [`Cursor::iter_forward`].
#[derive(Debug, Clone)]
pub struct CursorIter<'a, T> {
    seq: &'a RleSeq<T>,
    cursor: Cursor,
}

impl<'a, T: Mergeable + Spanning> Iterator for CursorIter<'a, T> {
    type Item = (&'a T, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.cursor.position(self.seq)?;
        let (item, offset) = self.cursor.next(self.seq)?;
        Some((item, offset, pos))
    }
}
