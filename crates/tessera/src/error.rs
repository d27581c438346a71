//! Error types for matrix access.

use thiserror::Error;

/// Errors surfaced by checked matrix operations.
///
/// A singular matrix is not an error: inversion reports it through `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatError {
    /// A row, column or linear index outside `[0, size)`.
    /// Raised before any mutation; the matrix is left unchanged.
    #[error("index {index} out of bounds for size {size}")]
    OutOfBounds { index: usize, size: usize },
    /// A flat buffer whose length is not `N * N`.
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    /// Attempted write through a read-only [`FloatBuffer`](crate::FloatBuffer).
    #[error("buffer view is read-only")]
    ReadOnly,
}

/// Check `index < size`, logging the rejected access.
#[inline]
pub(crate) fn check_index(op: &'static str, index: usize, size: usize) -> Result<usize, MatError> {
    if index < size {
        Ok(index)
    } else {
        tracing::debug!(op, index, size, "index out of bounds");
        Err(MatError::OutOfBounds { index, size })
    }
}
