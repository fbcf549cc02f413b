//! Row-permutation bookkeeping for pivoted factorizations
//!
//! Partial pivoting reorders matrix rows as it goes; [`RowPermutation`] records
//! that reordering as a flat index array maintained through pairwise swaps.
//! Entry `p[i]` names the original row that currently occupies logical row `i`.

use ndarray::Array1;

/// A permutation of row indices `[0, n)`.
///
/// Invariant: the underlying array is a bijection on `[0, n)` — every index
/// appears exactly once. Starting from [`RowPermutation::identity`] and only
/// mutating through [`RowPermutation::swap`] preserves this by construction;
/// [`RowPermutation::is_bijection`] makes the invariant checkable in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPermutation {
    order: Vec<usize>,
}

impl RowPermutation {
    /// The identity permutation `[0, 1, ..., n-1]`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Number of rows covered by the permutation.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Exchange entries `i` and `j`, mirroring a physical row swap.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.order.swap(i, j);
    }

    /// The permutation as a flat index slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Check the bijection invariant: every index in `[0, n)` appears exactly once.
    pub fn is_bijection(&self) -> bool {
        let n = self.order.len();
        let mut seen = vec![false; n];
        for &p in &self.order {
            if p >= n || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        true
    }

    /// Produce the reordered vector `out[i] = v[p[i]]`.
    pub fn apply<T: Copy>(&self, v: &Array1<T>) -> Array1<T> {
        debug_assert_eq!(v.len(), self.order.len());
        Array1::from_iter(self.order.iter().map(|&p| v[p]))
    }
}

impl std::ops::Index<usize> for RowPermutation {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.order[i]
    }
}
