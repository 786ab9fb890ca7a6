//! Error types for observation normalization.

use std::error::Error;
use std::fmt;

/// Errors from the strict (length-checked) normalization path.
///
/// The permissive default path never constructs one of these: short
/// input skips unfilled bounds, out-of-range values clamp, and
/// degenerate bounds resolve to the fixed midpoint. Only the opt-in
/// `normalize_checked` entry point rejects malformed vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NormalizeError {
    /// Input length does not match the configured layout
    /// (`17 + 14 + 12 * n_cells`).
    LengthMismatch {
        /// Length implied by the layout.
        expected: usize,
        /// Length of the vector actually supplied.
        actual: usize,
    },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "observation length {actual} does not match layout length {expected}"
                )
            }
        }
    }
}

impl Error for NormalizeError {}
