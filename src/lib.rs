//! Dense direct linear solvers
//!
//! This crate solves `A·x = b` for dense, square, real-valued systems using LU
//! decomposition with partial pivoting followed by forward and backward
//! substitution. It is the classical O(n³) textbook algorithm: no blocking, no
//! tiling, no BLAS — suitable for the small-to-medium systems that show up in
//! geometric fitting and interpolation pipelines.
//!
//! # Contract
//!
//! Factorization is destructive: the input matrix is overwritten in place with
//! the combined L/U factors, so callers that need the original coefficients
//! afterwards must supply a copy. Row swaps performed for pivoting are recorded
//! in a [`RowPermutation`].
//!
//! Singularity is detected, not prevented: a zero pivot is allowed to propagate
//! `Inf`/`NaN` through elimination, and the solve step rejects any solution
//! containing NaN with [`SingularMatrixError`].
//!
//! # Example
//!
//! ```
//! use dense_solvers::solve_linear_system;
//! use ndarray::array;
//!
//! let mut a = array![[4.0_f64, 1.0], [1.0, 3.0]];
//! let b = array![1.0_f64, 2.0];
//!
//! // `a` is consumed as scratch storage for the factors.
//! let x = solve_linear_system(&mut a, &b).unwrap();
//!
//! assert!((4.0 * x[0] + 1.0 * x[1] - 1.0).abs() < 1e-12);
//! assert!((1.0 * x[0] + 3.0 * x[1] - 2.0).abs() < 1e-12);
//! ```

pub mod direct;
pub mod error;
pub mod permutation;
pub mod traits;

// Re-export the solver entry points
pub use direct::{factorize, solve_factored, solve_linear_system, LuFactors};

// Re-export error types
pub use error::{InvalidDimensionsError, LinearSolveError, SingularMatrixError};

pub use permutation::RowPermutation;
pub use traits::RealField;
