//! Error types for rich text construction.

use std::fmt;

/// Result type alias for rich text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for fallible rich text operations.
///
/// Index-based editing (`RichIndex` ranges) treats misuse as a programmer
/// error and panics, like slice indexing. The variants here cover the
/// constructors and offset-based helpers that validate their input instead.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// A range is reversed, overlaps a previous run, or exceeds the length.
    InvalidRange { start: usize, end: usize, len: usize },
    /// A byte offset does not fall on a UTF-8 character boundary.
    NotCharBoundary(usize),
    /// Font sizes must be finite and strictly positive.
    InvalidFontSize(f64),
    /// Baseline shrink ratios must lie in `(0, 1]`.
    InvalidShrinkRatio(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidRange { start, end, len } => {
                write!(f, "invalid range {start}..{end} for text of length {len}")
            }
            Self::NotCharBoundary(offset) => {
                write!(f, "byte offset {offset} is not on a char boundary")
            }
            Self::InvalidFontSize(size) => write!(f, "invalid font size: {size}"),
            Self::InvalidShrinkRatio(ratio) => {
                write!(f, "baseline shrink ratio {ratio} is outside (0, 1]")
            }
        }
    }
}

impl std::error::Error for Error {}
