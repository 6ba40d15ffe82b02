//! Error types for diff encoding and decoding.

use std::fmt;

/// Result type for stemdiff operations.
pub type Result<T> = std::result::Result<T, StemDiffError>;

/// Errors that can occur while decoding a stored diff.
///
/// Encoding never fails: for any pair of byte sequences there is always a
/// representable diff (in the worst case the whole target carried as literal
/// bytes). Decoding fails only on structurally invalid diffs, which indicates
/// a corrupted dictionary or a variant selector mismatch between build and
/// lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StemDiffError {
    /// The diff bytes are corrupted or inconsistent with the source form.
    MalformedDiff(String),

    /// The diff ended before its header or literal fragments were complete.
    UnexpectedEndOfData,
}

impl fmt::Display for StemDiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StemDiffError::MalformedDiff(msg) => write!(f, "Malformed diff: {}", msg),
            StemDiffError::UnexpectedEndOfData => write!(f, "Unexpected end of diff data"),
        }
    }
}

impl std::error::Error for StemDiffError {}
