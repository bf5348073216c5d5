use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, Scalar};

use super::vector::DynVector;
use super::DynMatrix;

impl<T: Scalar> DynMatrix<T> {
    /// Sum of diagonal elements (square matrices only).
    pub fn trace(&self) -> T {
        assert!(self.is_square(), "trace requires a square matrix");
        let mut sum = T::zero();
        for i in 0..self.nrows() {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Extract the diagonal as a vector.
    pub fn diag(&self) -> DynVector<T> {
        assert!(self.is_square(), "diag requires a square matrix");
        let n = self.nrows();
        let mut v = DynVector::zeros(n, T::zero());
        for i in 0..n {
            v[i] = self[(i, i)];
        }
        v
    }

    /// Create a diagonal matrix from a vector.
    pub fn from_diag(v: &DynVector<T>) -> Self {
        let n = v.len();
        let mut m = Self::zeros(n, n, T::zero());
        for i in 0..n {
            m[(i, i)] = v[i];
        }
        m
    }

    /// Check if the matrix is symmetric (A == A^T).
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows();
        for i in 0..n {
            for j in (i + 1)..n {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: FloatScalar> DynMatrix<T> {
    /// Determinant via Gaussian elimination with partial pivoting.
    pub fn det(&self) -> T {
        assert!(self.is_square(), "determinant requires a square matrix");
        let n = self.nrows();
        let mut a = self.clone();
        let mut sign = T::one();

        for col in 0..n {
            let mut max_row = col;
            let mut max_val = a[(col, col)].abs();
            for row in (col + 1)..n {
                let val = a[(row, col)].abs();
                if val > max_val {
                    max_val = val;
                    max_row = row;
                }
            }

            if max_val < T::epsilon() {
                return T::zero();
            }

            if max_row != col {
                a.swap_rows(col, max_row);
                sign = T::zero() - sign;
            }

            let pivot = a[(col, col)];
            for row in (col + 1)..n {
                let factor = a[(row, col)] / pivot;
                for j in (col + 1)..n {
                    let val = a[(col, j)];
                    a[(row, j)] = a[(row, j)] - factor * val;
                }
                a[(row, col)] = T::zero();
            }
        }

        let mut det = sign;
        for i in 0..n {
            det = det * a[(i, i)];
        }
        det
    }

    /// Matrix inverse via Gauss-Jordan elimination with partial pivoting.
    ///
    /// Returns `Err(Singular)` if a pivot falls below machine epsilon.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        self.inverse_det(T::epsilon()).map(|(inv, _)| inv)
    }

    /// Matrix inverse together with the determinant, using an explicit
    /// pivot-degeneracy tolerance.
    ///
    /// ```
    /// use lineal::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let (inv, det) = m.inverse_det(1e-12).unwrap();
    /// assert!((det - 10.0).abs() < 1e-12);
    /// let id = &m * &inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// ```
    pub fn inverse_det(&self, pivot_tol: T) -> Result<(Self, T), LinalgError> {
        assert!(self.is_square(), "inverse requires a square matrix");
        let n = self.nrows();
        let mut a = self.clone();
        let mut inv = Self::eye(n, T::zero());
        let mut det = T::one();

        for col in 0..n {
            let mut max_row = col;
            let mut max_val = a[(col, col)].abs();
            for row in (col + 1)..n {
                let val = a[(row, col)].abs();
                if val > max_val {
                    max_val = val;
                    max_row = row;
                }
            }

            if max_val <= pivot_tol {
                return Err(LinalgError::Singular);
            }

            if max_row != col {
                a.swap_rows(col, max_row);
                inv.swap_rows(col, max_row);
                det = T::zero() - det;
            }

            let pivot = a[(col, col)];
            det = det * pivot;

            for j in 0..n {
                a[(col, j)] = a[(col, j)] / pivot;
                inv[(col, j)] = inv[(col, j)] / pivot;
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = a[(row, col)];
                if factor == T::zero() {
                    continue;
                }
                for j in 0..n {
                    let av = a[(col, j)];
                    let iv = inv[(col, j)];
                    a[(row, j)] = a[(row, j)] - factor * av;
                    inv[(row, j)] = inv[(row, j)] - factor * iv;
                }
            }
        }

        Ok((inv, det))
    }
}
