use crate::linalg::LinalgError;
use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Extract the diagonal as a vector.
    pub fn diag(&self) -> Vector<T, N> {
        let mut v = Vector::zeros();
        for i in 0..N {
            v[i] = self[(i, i)];
        }
        v
    }

    /// Create a diagonal matrix from a vector.
    pub fn from_diag(v: &Vector<T, N>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m[(i, i)] = v[i];
        }
        m
    }

    /// Integer matrix power via repeated squaring.
    ///
    /// `pow(0)` returns the identity matrix.
    pub fn pow(&self, mut n: u32) -> Self {
        let mut result = Self::eye();
        let mut base = *self;
        while n > 0 {
            if n & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            n >>= 1;
        }
        result
    }

    /// Check if the matrix is symmetric (A == A^T).
    pub fn is_symmetric(&self) -> bool {
        for i in 0..N {
            for j in (i + 1)..N {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Determinant via Gaussian elimination with partial pivoting.
    pub fn det(&self) -> T {
        let mut a = *self;
        let mut sign = T::one();

        for col in 0..N {
            // Partial pivoting: find row with largest magnitude
            let mut max_row = col;
            let mut max_val = a[(col, col)].abs();
            for row in (col + 1)..N {
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

            // Eliminate below pivot
            let pivot = a[(col, col)];
            for row in (col + 1)..N {
                let factor = a[(row, col)] / pivot;
                for j in (col + 1)..N {
                    let val = a[(col, j)];
                    a[(row, j)] = a[(row, j)] - factor * val;
                }
                a[(row, col)] = T::zero();
            }
        }

        // Product of diagonal
        let mut det = sign;
        for i in 0..N {
            det = det * a[(i, i)];
        }
        det
    }

    /// Matrix inverse via Gauss-Jordan elimination with partial pivoting.
    ///
    /// Returns `Err(Singular)` if a pivot falls below machine epsilon.
    ///
    /// ```
    /// use lineal::Matrix;
    /// let m = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let inv = m.inverse().unwrap();
    /// let id = m * inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((id[(0, 1)]).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        self.inverse_det(T::epsilon()).map(|(inv, _)| inv)
    }

    /// Matrix inverse together with the determinant, using an explicit
    /// pivot-degeneracy tolerance.
    ///
    /// A pivot of magnitude below `pivot_tol` (after partial pivoting) makes
    /// the matrix singular for the purposes of this call; callers wanting the
    /// near-zero determinant anyway can read it from the error path via
    /// [`Matrix::det`].
    pub fn inverse_det(&self, pivot_tol: T) -> Result<(Self, T), LinalgError> {
        let mut a = *self;
        let mut inv = Self::eye();
        let mut det = T::one();

        for col in 0..N {
            let mut max_row = col;
            let mut max_val = a[(col, col)].abs();
            for row in (col + 1)..N {
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

            // Scale the pivot row
            for j in 0..N {
                a[(col, j)] = a[(col, j)] / pivot;
                inv[(col, j)] = inv[(col, j)] / pivot;
            }

            // Eliminate the pivot column from every other row
            for row in 0..N {
                if row == col {
                    continue;
                }
                let factor = a[(row, col)];
                if factor == T::zero() {
                    continue;
                }
                for j in 0..N {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.trace(), 5.0);

        let id: Matrix<f64, 3, 3> = Matrix::eye();
        assert_eq!(id.trace(), 3.0);
    }

    #[test]
    fn trace_integer() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.trace(), 15);
    }

    #[test]
    fn diag_and_from_diag() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let d = m.diag();
        assert_eq!(d[0], 1.0);
        assert_eq!(d[1], 5.0);
        assert_eq!(d[2], 9.0);

        let m2 = Matrix::from_diag(&d);
        assert_eq!(m2[(0, 0)], 1.0);
        assert_eq!(m2[(1, 1)], 5.0);
        assert_eq!(m2[(2, 2)], 9.0);
        assert_eq!(m2[(0, 1)], 0.0);
    }

    #[test]
    fn pow() {
        let m = Matrix::new([[1.0, 1.0], [0.0, 1.0]]);

        let m0 = m.pow(0);
        assert_eq!(m0, Matrix::eye());

        let m1 = m.pow(1);
        assert_eq!(m1, m);

        let m3 = m.pow(3);
        assert_eq!(m3[(0, 0)], 1.0);
        assert_eq!(m3[(0, 1)], 3.0);
        assert_eq!(m3[(1, 0)], 0.0);
        assert_eq!(m3[(1, 1)], 1.0);
    }

    #[test]
    fn is_symmetric() {
        let sym = Matrix::new([[1.0, 2.0, 3.0], [2.0, 5.0, 6.0], [3.0, 6.0, 9.0]]);
        assert!(sym.is_symmetric());

        let asym = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert!(!asym.is_symmetric());
    }

    #[test]
    fn det_2x2() {
        let m = Matrix::new([[3.0_f64, 8.0], [4.0, 6.0]]);
        let d = m.det();
        assert!((d - (-14.0)).abs() < 1e-12);
    }

    #[test]
    fn det_3x3() {
        let m = Matrix::new([[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        let d = m.det();
        assert!((d - (-306.0)).abs() < 1e-10);
    }

    #[test]
    fn det_identity() {
        let id: Matrix<f64, 4, 4> = Matrix::eye();
        assert!((id.det() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn det_singular() {
        let m = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        assert!(m.det().abs() < 1e-12);
    }

    #[test]
    fn inverse_2x2() {
        let m = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
        let inv = m.inverse().unwrap();
        assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
        assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
        assert!((inv[(1, 0)] + 0.2).abs() < 1e-12);
        assert!((inv[(1, 1)] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let m = Matrix::new([
            [2.0_f64, -1.0, 0.0],
            [-1.0, 2.0, -1.0],
            [0.0, -1.0, 2.0],
        ]);
        let inv = m.inverse().unwrap();
        let id = m * inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((id[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn inverse_det_matches_det() {
        let m = Matrix::new([[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        let (_, d) = m.inverse_det(1e-12).unwrap();
        assert!((d - m.det()).abs() < 1e-9);
    }

    #[test]
    fn inverse_singular() {
        let m = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        assert_eq!(m.inverse().unwrap_err(), LinalgError::Singular);
    }

    #[test]
    fn inverse_needs_pivoting() {
        // Zero on the leading diagonal forces a row swap
        let m = Matrix::new([[0.0_f64, 1.0], [1.0, 0.0]]);
        let inv = m.inverse().unwrap();
        assert_eq!(inv, m);
    }
}
