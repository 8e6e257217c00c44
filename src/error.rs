//! Error types for bidi reordering.

use thiserror::Error;

/// Errors raised by the line-aware reordering entry points.
///
/// The algorithm itself is total; only malformed caller input (line break
/// positions) is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidiError {
    #[error("line break positions must be strictly increasing: {prev} followed by {next}")]
    UnorderedLineBreaks { prev: usize, next: usize },

    #[error("line break position {pos} is out of range for a paragraph of {len} code points")]
    LineBreakOutOfRange { pos: usize, len: usize },
}

/// Result type alias
pub type BidiResult<T> = Result<T, BidiError>;
