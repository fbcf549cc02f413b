//! LU decomposition with partial pivoting
//!
//! Classical O(n³) Gaussian elimination over dense storage. The matrix is
//! factored in place: after [`factorize`] the upper triangle (diagonal
//! included) holds U and the strict lower triangle holds the multipliers of
//! the unit-lower-triangular L. Row swaps chosen by the pivot scan are
//! recorded in a [`RowPermutation`], so that `L·U` equals the row-permuted
//! input within floating-point tolerance.
//!
//! A zero pivot column is not rejected during elimination: the resulting
//! `Inf`/`NaN` values propagate through the factors and are surfaced by the
//! NaN validation at the end of [`solve_factored`].

use crate::error::{InvalidDimensionsError, LinearSolveError, SingularMatrixError};
use crate::permutation::RowPermutation;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

#[cfg(feature = "native")]
use rayon::prelude::*;

/// Factor a square matrix in place using partial pivoting.
///
/// On success `a` is overwritten with the combined factors and the returned
/// permutation records the row swaps. On a dimension error `a` is untouched.
pub fn factorize<T: RealField>(
    a: &mut Array2<T>,
) -> Result<RowPermutation, InvalidDimensionsError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(InvalidDimensionsError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(InvalidDimensionsError::Empty);
    }

    let n = rows;
    let mut perm = RowPermutation::identity(n);

    for c in 0..n - 1 {
        // Pivot scan over column c. The running maximum is seeded with the
        // absolute value of the diagonal entry; seeding with the signed value
        // would mis-select the pivot whenever the diagonal is negative.
        let mut max_val = a[[c, c]].abs();
        let mut pivot_row = c;
        for r in (c + 1)..n {
            let val = a[[r, c]].abs();
            if val > max_val {
                max_val = val;
                pivot_row = r;
            }
        }

        if pivot_row != c {
            log::trace!("column {}: swapping rows {} and {}", c, c, pivot_row);
            for k in 0..n {
                let tmp = a[[c, k]];
                a[[c, k]] = a[[pivot_row, k]];
                a[[pivot_row, k]] = tmp;
            }
            perm.swap(c, pivot_row);
        }

        // Eliminate below the pivot. A zero pivot divides through to Inf/NaN
        // here; singularity is caught later at solve time.
        let pivot = a[[c, c]];
        for r in (c + 1)..n {
            let m = -(a[[r, c]] / pivot);
            for k in c..n {
                let update = m * a[[c, k]];
                a[[r, k]] += update;
            }
            // The row update zeroed a[r][c]; store the L multiplier there.
            a[[r, c]] = -m;
        }
    }

    Ok(perm)
}

/// Solve `A·x = b` given the factored matrix and its row permutation.
///
/// Reorders `b` to match the permutation, forward-substitutes against the
/// unit-lower triangle, back-substitutes against the upper triangle, and
/// rejects any solution containing NaN as singular.
///
/// Shapes are the caller's contract: `lu` is `n × n` and `b` has length `n`
/// (the facade and [`LuFactors::solve`] validate this before reaching here).
pub fn solve_factored<T: RealField>(
    lu: &Array2<T>,
    perm: &RowPermutation,
    b: &Array1<T>,
) -> Result<Array1<T>, SingularMatrixError> {
    let n = lu.nrows();
    debug_assert_eq!(lu.ncols(), n);
    debug_assert_eq!(perm.len(), n);
    debug_assert_eq!(b.len(), n);

    // Align b with the row swaps applied during factorization.
    let mut y = perm.apply(b);

    // Forward substitution: L·y = P·b (unit diagonal, not stored).
    for i in 0..n {
        for k in 0..i {
            let l_ik = lu[[i, k]];
            y[i] = y[i] - l_ik * y[k];
        }
    }

    // Back substitution: U·x = y.
    let mut x = Array1::from_elem(n, T::zero());
    for i in (0..n).rev() {
        let mut sum = y[i];
        for k in (i + 1)..n {
            sum = sum - x[k] * lu[[i, k]];
        }
        x[i] = sum / lu[[i, i]];
    }

    // NaN in the solution is the downstream signature of a zero pivot.
    if x.iter().any(|v| v.is_nan()) {
        log::warn!("solution contains NaN, matrix is numerically singular");
        return Err(SingularMatrixError);
    }

    Ok(x)
}

/// Solve `A·x = b` in one shot.
///
/// Destructive on `a`: the matrix is overwritten with its LU factors, so a
/// caller that still needs the original coefficients must pass a copy. All
/// shape preconditions are checked before any mutation. Each call performs a
/// fresh factorization; to reuse factors across right-hand sides, use
/// [`LuFactors`].
pub fn solve_linear_system<T: RealField>(
    a: &mut Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, LinearSolveError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(InvalidDimensionsError::NotSquare { rows, cols }.into());
    }
    if rows == 0 {
        return Err(InvalidDimensionsError::Empty.into());
    }
    if b.len() != rows {
        return Err(InvalidDimensionsError::RhsLength {
            expected: rows,
            got: b.len(),
        }
        .into());
    }

    let perm = factorize(a)?;
    let x = solve_factored(a, &perm, b)?;
    Ok(x)
}

/// Reusable LU factorization of a dense square matrix.
///
/// Owns the combined factors and the row permutation, so several right-hand
/// sides can be solved against one factorization.
#[derive(Debug, Clone)]
pub struct LuFactors<T: RealField> {
    lu: Array2<T>,
    perm: RowPermutation,
}

impl<T: RealField> LuFactors<T> {
    /// Factor `a`, consuming it as storage for the factors.
    pub fn new(mut a: Array2<T>) -> Result<Self, InvalidDimensionsError> {
        let perm = factorize(&mut a)?;
        Ok(Self { lu: a, perm })
    }

    /// Matrix dimension `n`.
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// The combined factors: U on and above the diagonal, L's multipliers below.
    pub fn lu(&self) -> &Array2<T> {
        &self.lu
    }

    /// The row permutation applied during factorization.
    pub fn permutation(&self) -> &RowPermutation {
        &self.perm
    }

    /// Solve `A·x = b` for one right-hand side.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, LinearSolveError> {
        if b.len() != self.dim() {
            return Err(InvalidDimensionsError::RhsLength {
                expected: self.dim(),
                got: b.len(),
            }
            .into());
        }
        Ok(solve_factored(&self.lu, &self.perm, b)?)
    }

    /// Solve against many independent right-hand sides.
    ///
    /// The factors are shared immutably, so with the `native` feature the
    /// solves run on rayon worker threads; otherwise they run sequentially.
    pub fn solve_many(&self, bs: &[Array1<T>]) -> Result<Vec<Array1<T>>, LinearSolveError> {
        #[cfg(feature = "native")]
        {
            bs.par_iter().map(|b| self.solve(b)).collect()
        }

        #[cfg(not(feature = "native"))]
        {
            bs.iter().map(|b| self.solve(b)).collect()
        }
    }
}
