//! Error types for puzzlr
//!
//! Only genuine precondition violations surface as errors: dimensions that
//! make a matrix product undefined, rows that break the rectangularity
//! invariant, or a radix outside the representable range. Every other "bad"
//! input in this crate degrades into a negative, empty, or undetermined
//! result rather than an error.

use thiserror::Error;

/// Result type alias using puzzlr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in puzzlr operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Matrix dimensions are incompatible for multiplication
    #[error("Shape mismatch: cannot multiply a {lhs:?} matrix by a {rhs:?} matrix")]
    ShapeMismatch {
        /// Shape of the left operand as `[rows, cols]`
        lhs: [usize; 2],
        /// Shape of the right operand as `[rows, cols]`
        rhs: [usize; 2],
    },

    /// A nested-row matrix constructor received rows of unequal length
    #[error("Ragged matrix: row {row} has {got} columns, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row
        row: usize,
        /// Column count established by the first row
        expected: usize,
        /// Column count actually found
        got: usize,
    },

    /// Radix outside the supported range for textual conversion
    #[error("Invalid radix {radix}: supported range is 2..=36")]
    InvalidRadix {
        /// The rejected radix
        radix: u32,
    },
}

impl Error {
    /// Create a shape mismatch error from two `[rows, cols]` pairs
    pub fn shape_mismatch(lhs: [usize; 2], rhs: [usize; 2]) -> Self {
        Self::ShapeMismatch { lhs, rhs }
    }

    /// Create a ragged matrix error
    pub fn ragged_matrix(row: usize, expected: usize, got: usize) -> Self {
        Self::RaggedMatrix { row, expected, got }
    }
}
