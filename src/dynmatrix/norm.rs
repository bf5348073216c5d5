use crate::traits::{FloatScalar, Scalar};

use super::vector::DynVector;
use super::DynMatrix;

// ── Vector norms ────────────────────────────────────────────────────

impl<T: Scalar> DynVector<T> {
    /// Squared L2 norm (dot product with self). No sqrt, works with integers.
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar> DynVector<T> {
    /// L2 (Euclidean) norm.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// L1 norm (sum of absolute values).
    pub fn norm_l1(&self) -> T {
        let mut sum = T::zero();
        for i in 0..self.len() {
            sum = sum + self[i].abs();
        }
        sum
    }

    /// Return a unit vector in the same direction.
    ///
    /// The vector must be non-zero.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        assert!(n > T::zero(), "cannot normalize a zero-length vector");
        self * (T::one() / n)
    }
}

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Squared Frobenius norm (sum of all elements squared). No sqrt.
    pub fn frobenius_norm_squared(&self) -> T {
        let mut sum = T::zero();
        for x in self.iter() {
            sum = sum + *x * *x;
        }
        sum
    }
}

impl<T: FloatScalar> DynMatrix<T> {
    /// Frobenius norm (square root of sum of squared elements).
    pub fn frobenius_norm(&self) -> T {
        self.frobenius_norm_squared().sqrt()
    }

    /// Infinity norm (maximum absolute row sum).
    pub fn norm_inf(&self) -> T {
        let mut max = T::zero();
        for i in 0..self.nrows() {
            let mut row_sum = T::zero();
            for j in 0..self.ncols() {
                row_sum = row_sum + self[(i, j)].abs();
            }
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }

    /// One norm (maximum absolute column sum).
    pub fn norm_one(&self) -> T {
        let mut max = T::zero();
        for j in 0..self.ncols() {
            let mut col_sum = T::zero();
            for i in 0..self.nrows() {
                col_sum = col_sum + self[(i, j)].abs();
            }
            if col_sum > max {
                max = col_sum;
            }
        }
        max
    }
}
