//! Cursor repositioning errors.

use thiserror::Error;

/// Requested cursor position lies outside the subject.
///
/// Raised only by [`Scanner::set_pos`](crate::Scanner::set_pos). The scanner
/// is left untouched, so the caller may clamp, retry, or give up.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("index out of range: {requested} (subject length {len})")]
pub struct PositionError {
    /// Position as passed by the caller, before negative-offset resolution.
    pub requested: isize,
    /// Codepoint length of the subject.
    pub len: usize,
}
