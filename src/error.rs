//! Error taxonomy for the container.
//!
//! Every fallible public operation returns [`Result`]. The library never
//! panics on input reachable through the public API; [`RleError::Internal`]
//! is reserved for invariant violations that indicate a bug in the container
//! itself.

use thiserror::Error;

/// Errors surfaced by sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RleError {
    /// A position past the end of the sequence.
    #[error("position {position} is outside the sequence (span: {span})")]
    PositionOutOfBounds { position: usize, span: usize },

    /// Malformed range bounds.
    #[error("invalid range: start {start} is past end {end}")]
    InvalidRange { start: usize, end: usize },

    /// A `Sliceable` implementation could not honor the requested cut.
    #[error("cannot slice at {start}..{end}: bounds do not fall on an element boundary")]
    InvalidSlice { start: usize, end: usize },

    /// An element with zero span was handed to `append`.
    #[error("element has zero span")]
    ZeroSpan,

    /// Container invariant violation. Unreachable from valid public input.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}

pub type Result<T> = std::result::Result<T, RleError>;
