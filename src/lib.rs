//! Runic - a run-length-encoded sequence container.
//!
//! An ordered collection where adjacent mergeable elements collapse into
//! single runs, with O(log n) positional lookup through a lazily rebuilt
//! prefix sum index. Useful as compact backing storage for text buffers,
//! CRDT sequences, gap buffers, and scanline encodings.
//!
//! # Quick Start
//!
//! ```
//! use runic::RleSeq;
//!
//! // Build a text sequence
//! let mut doc = RleSeq::from_text("hello");
//! doc.append(String::from(" world")).unwrap();
//!
//! // Adjacent text merges into a single run
//! assert_eq!(doc.len(), 1);
//! assert_eq!(doc.span(), 11);
//! assert_eq!(doc.to_string(), "hello world");
//!
//! // O(log n) positional lookup
//! assert_eq!(doc.find(6), Some((0, 6)));
//! ```
//!
//! Element types participate by implementing the capability traits in
//! [`traits`]: `Mergeable + Spanning` unlocks append and lookup, adding
//! `Sliceable` unlocks split and range queries.

pub mod cursor;
pub mod error;
pub mod prefix;
pub mod runs;
pub mod seq;
pub mod slice;
pub mod text;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

pub use cursor::{Cursor, CursorIter};
pub use error::{Result, RleError};
pub use prefix::PrefixIndex;
pub use runs::RunVec;
pub use seq::RleSeq;
pub use slice::{RangeIter, SliceView};
pub use traits::{HasLength, Mergeable, Sliceable, Spanning};
