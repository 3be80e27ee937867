//! The canonical element type: UTF-8 text.
//!
//! `String` runs measure in bytes and merge unconditionally, so a text
//! sequence built by repeated appends collapses to a single run. Slicing is
//! byte-indexed and refuses cuts that land inside a multi-byte character.

use std::fmt;

use crate::error::{Result, RleError};
use crate::seq::RleSeq;
use crate::traits::{HasLength, Mergeable, Sliceable, Spanning};

impl Mergeable for String {
    fn can_merge(&self, _other: &Self) -> bool {
        true
    }

    fn merge(&mut self, other: Self) {
        self.push_str(&other);
    }
}

impl HasLength for String {
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl Spanning for String {}

impl Sliceable for String {
    fn slice(&self, start: usize, end: usize) -> Result<Self> {
        if start > end
            || end > self.len()
            || !self.is_char_boundary(start)
            || !self.is_char_boundary(end)
        {
            return Err(RleError::InvalidSlice { start, end });
        }
        Ok(self[start..end].to_owned())
    }
}

impl RleSeq<String> {
    /// A text sequence holding `text` as its only run (none for empty input).
    pub fn from_text(text: &str) -> RleSeq<String> {
        if text.is_empty() {
            return RleSeq::new();
        }
        RleSeq::from_elements([text.to_owned()])
    }
}

impl fmt::Display for RleSeq<String> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in self.runs() {
            f.write_str(run)?;
        }
        Ok(())
    }
}
