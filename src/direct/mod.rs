//! Direct solvers for dense linear systems
//!
//! This module provides the LU-based direct solver:
//! - [`solve_linear_system`]: one-shot pivoted LU solve (destructive on the matrix)
//! - [`LuFactors`]: reusable factorization for repeated right-hand sides
//! - [`factorize`] / [`solve_factored`]: the underlying kernel steps

mod lu;

pub use lu::{factorize, solve_factored, solve_linear_system, LuFactors};
