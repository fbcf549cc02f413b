//! Scalar abstraction for the dense solvers
//!
//! The solvers are generic over the real floating-point type via [`RealField`].
//! Complex matrices are deliberately out of scope for this crate.

use num_traits::{Float, NumAssign};
use std::fmt::Debug;

/// Trait for real scalar types usable in dense factorization and substitution.
///
/// Implemented for:
/// - `f64` (default for geometric applications)
/// - `f32` (for memory-constrained applications)
///
/// The `Send + Sync` bounds allow independent solves over disjoint data to run
/// on parallel threads.
pub trait RealField: Float + NumAssign + Debug + Send + Sync + 'static {}

impl RealField for f64 {}
impl RealField for f32 {}

#[cfg(test)]
mod tests {
    use super::*;

    // Pivot selection and singularity detection only need abs() and is_nan()
    // from the Float supertrait; exercise them through the generic bound.
    fn pivot_candidate<T: RealField>(x: T) -> T {
        x.abs()
    }

    fn nan<T: RealField>() -> T {
        T::nan()
    }

    #[test]
    fn test_real_field_f64() {
        assert_eq!(pivot_candidate(-3.0_f64), 3.0);
        assert!(nan::<f64>().is_nan());
    }

    #[test]
    fn test_real_field_f32() {
        assert_eq!(pivot_candidate(-3.0_f32), 3.0);
        assert!(nan::<f32>().is_nan());
    }
}
