//! Structured error type for validating construction.

use thiserror::Error;

/// Error returned by [`crate::IntervalIndex::validated`].
///
/// The unchecked constructors never fail; malformed bounds passed to them
/// produce incorrect query results rather than errors.
#[derive(Debug, Error)]
pub enum IntreeError {
    /// An interval with `lower > upper`.
    #[error("inverted bounds at position {position}: lower {lower} > upper {upper}")]
    Inverted {
        /// Position of the offending interval in the input sequence.
        position: usize,
        /// The interval's lower limit.
        lower: f64,
        /// The interval's upper limit.
        upper: f64,
    },

    /// An interval with a NaN or infinite limit.
    #[error("non-finite bounds at position {position}")]
    NonFinite {
        /// Position of the offending interval in the input sequence.
        position: usize,
    },
}

/// Convenience alias for fallible `intree` operations.
pub type Result<T> = std::result::Result<T, IntreeError>;
