//! Element types shared by the unit tests.

use crate::error::{Result, RleError};
use crate::traits::{HasLength, Mergeable, Sliceable, Spanning};

/// Classic byte-run element: `count` repeats of `byte`.
///
/// Adjacent runs merge only when they carry the same byte, which makes merge
/// boundaries easy to steer in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lit {
    pub byte: u8,
    pub count: usize,
}

impl Lit {
    pub fn new(byte: u8, count: usize) -> Lit {
        Lit { byte, count }
    }
}

impl Mergeable for Lit {
    fn can_merge(&self, other: &Self) -> bool {
        self.byte == other.byte
    }

    fn merge(&mut self, other: Self) {
        self.count += other.count;
    }
}

impl HasLength for Lit {
    fn len(&self) -> usize {
        self.count
    }
}

impl Spanning for Lit {}

impl Sliceable for Lit {
    fn slice(&self, start: usize, end: usize) -> Result<Self> {
        if start > end || end > self.count {
            return Err(RleError::InvalidSlice { start, end });
        }
        Ok(Lit {
            byte: self.byte,
            count: end - start,
        })
    }
}

/// Tombstone-style element: occupies `len` positions, visible only while live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tomb {
    pub len: usize,
    pub live: bool,
}

impl Tomb {
    pub fn live(len: usize) -> Tomb {
        Tomb { len, live: true }
    }

    pub fn dead(len: usize) -> Tomb {
        Tomb { len, live: false }
    }
}

impl Mergeable for Tomb {
    fn can_merge(&self, other: &Self) -> bool {
        self.live == other.live
    }

    fn merge(&mut self, other: Self) {
        self.len += other.len;
    }
}

impl HasLength for Tomb {
    fn len(&self) -> usize {
        self.len
    }
}

impl Spanning for Tomb {
    fn logical_len(&self) -> usize {
        if self.live { self.len } else { 0 }
    }
}

impl Sliceable for Tomb {
    fn slice(&self, start: usize, end: usize) -> Result<Self> {
        if start > end || end > self.len {
            return Err(RleError::InvalidSlice { start, end });
        }
        Ok(Tomb {
            len: end - start,
            live: self.live,
        })
    }
}
