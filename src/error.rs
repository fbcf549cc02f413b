//! Error types for the dense solvers
//!
//! Two failure kinds exist: a precondition violation rejected before any
//! mutation ([`InvalidDimensionsError`]) and numerical singularity surfaced by
//! the solve-time validation ([`SingularMatrixError`]). Both are terminal for
//! the call; no partial solution is ever returned.

use thiserror::Error;

/// Precondition violation on the shape of the inputs.
///
/// Raised before any mutation of the matrix or right-hand side.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDimensionsError {
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix must have at least one row")]
    Empty,
    #[error("right-hand side has length {got}, expected {expected}")]
    RhsLength { expected: usize, got: usize },
}

/// The matrix is numerically singular under partial pivoting.
///
/// Detected after back substitution, when the computed solution contains NaN
/// (the downstream signature of a zero or near-zero pivot divisor).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("matrix is numerically singular")]
pub struct SingularMatrixError;

/// Combined error for the one-shot solve facade.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearSolveError {
    #[error(transparent)]
    InvalidDimensions(#[from] InvalidDimensionsError),
    #[error(transparent)]
    Singular(#[from] SingularMatrixError),
}
