//! Error types for matrix operations.

use thiserror::Error;

/// Result type for matrix operations.
pub type MathResult<T> = Result<T, MathError>;

/// Matrix kernel failure.
///
/// Both variants indicate malformed input (bad registry data or a bad call
/// site). They are never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// Operand dimensions are incompatible with the operation.
    #[error("shape mismatch in {op}: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    Shape {
        /// Operation that rejected the operands.
        op: &'static str,
        /// Rows of the left operand (or of the declared shape).
        left_rows: usize,
        /// Columns of the left operand (or of the declared shape).
        left_cols: usize,
        /// Rows of the right operand (or of the supplied data).
        right_rows: usize,
        /// Columns of the right operand (or of the supplied data).
        right_cols: usize,
    },

    /// Matrix cannot be inverted.
    #[error("singular matrix (determinant {determinant:e})")]
    SingularMatrix {
        /// Determinant that fell below the singularity threshold.
        determinant: f64,
    },
}
