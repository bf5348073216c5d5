use alloc::vec;
use alloc::vec::Vec;

use crate::dynmatrix::{DynMatrix, DynVector};
use crate::traits::{FloatScalar, MatrixMut};

/// QR decomposition in place using left Householder reflections.
///
/// On return, `a` contains the packed factorization:
/// - Upper triangle (including diagonal): R
/// - Lower triangle (excluding diagonal): Householder vectors (scaled)
///
/// `tau` is filled with the Householder scalar factors (length N). A zero
/// `tau` entry marks a column whose sub-diagonal part was already zero —
/// the reflection is skipped as an identity step rather than dividing by
/// zero, so rank-deficient input is not an error here.
///
/// Works on rectangular matrices (M >= N). Returns the product of the
/// reflection sign flips: each applied reflection contributes -1, so the
/// return value is det(Q) for callers needing the determinant sign.
pub fn qr_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>, tau: &mut [T]) -> T {
    let m = a.nrows();
    let n = a.ncols();
    assert!(m >= n, "QR decomposition requires M >= N");
    assert_eq!(tau.len(), n, "tau length must equal N");

    let mut sign = T::one();

    for col in 0..n {
        // Squared norm of the sub-column a[col:m, col]
        let mut norm_sq = T::zero();
        for i in col..m {
            let v = *a.get(i, col);
            norm_sq = norm_sq + v * v;
        }

        if norm_sq <= T::epsilon() * T::epsilon() {
            // Nothing to reflect; identity step
            tau[col] = T::zero();
            continue;
        }

        let norm = norm_sq.sqrt();
        let a_col_col = *a.get(col, col);

        // sigma = sign(a[col,col]) * ||x||, so that v0 = a + sigma avoids
        // cancellation
        let sigma = if a_col_col.abs() < T::epsilon() {
            norm
        } else {
            norm * a_col_col.signum()
        };

        // v[col] = a[col,col] + sigma; rest of v is a[col+1:m, col]
        let v0 = a_col_col + sigma;
        *a.get_mut(col, col) = v0;

        let tau_val = v0 / sigma;
        tau[col] = tau_val;

        // Scale the sub-diagonal entries by 1/v0 for storage
        for i in (col + 1)..m {
            let val = *a.get(i, col) / v0;
            *a.get_mut(i, col) = val;
        }

        // Apply H to trailing columns: A[col:m, col+1:n] -= tau * v * (v^T * A)
        // where v = [1, a[col+1,col], ..., a[m-1,col]] (stored values)
        for j in (col + 1)..n {
            let mut dot = *a.get(col, j); // v[0] = 1
            for i in (col + 1)..m {
                dot = dot + *a.get(i, col) * *a.get(i, j);
            }
            dot = dot * tau_val;

            *a.get_mut(col, j) = *a.get(col, j) - dot;
            for i in (col + 1)..m {
                let vi = *a.get(i, col);
                let old = *a.get(i, j);
                *a.get_mut(i, j) = old - dot * vi;
            }
        }

        // Store -sigma (the R diagonal entry) in a[col, col]
        *a.get_mut(col, col) = T::zero() - sigma;
        sign = T::zero() - sign;
    }

    sign
}

/// QR factorization of a dynamically-sized matrix (M >= N).
///
/// The constructor consumes the input — the factorization overwrites it in
/// place, and the move makes the destructive contract explicit.
///
/// # Example
///
/// ```
/// use lineal::DynMatrix;
/// use lineal::linalg::Qr;
///
/// let a = DynMatrix::from_rows(3, 3, &[
///     12.0_f64, -51.0, 4.0,
///     6.0, 167.0, -68.0,
///     -4.0, 24.0, -41.0,
/// ]);
/// let qr = Qr::new(a.clone());
/// let recon = &qr.q() * &qr.r();
/// assert!((&recon - &a).frobenius_norm() < 1e-10);
/// ```
#[derive(Debug)]
pub struct Qr<T> {
    qr: DynMatrix<T>,
    tau: Vec<T>,
    sign: T,
}

impl<T: FloatScalar> Qr<T> {
    /// Factor a matrix, consuming it. Requires M >= N.
    ///
    /// Rank deficiency is not an error: a column with a zero sub-diagonal
    /// part takes an identity step and leaves a zero on R's diagonal.
    pub fn new(a: DynMatrix<T>) -> Self {
        let m = a.nrows();
        let n = a.ncols();
        assert!(m >= n, "QR decomposition requires M >= N");
        let mut qr = a;
        let mut tau = vec![T::zero(); n];
        let sign = qr_in_place(&mut qr, &mut tau);
        Self { qr, tau, sign }
    }

    /// Product of the reflection sign flips: det(Q) = ±1.
    ///
    /// Callers needing the determinant sign of the original matrix combine
    /// this with the signs of R's diagonal.
    #[inline]
    pub fn sign(&self) -> T {
        self.sign
    }

    /// Extract the upper-triangular R factor (N × N).
    pub fn r(&self) -> DynMatrix<T> {
        let n = self.qr.ncols();
        let mut r = DynMatrix::zeros(n, n, T::zero());
        for i in 0..n {
            for j in i..n {
                r[(i, j)] = self.qr[(i, j)];
            }
        }
        r
    }

    /// Compute the thin Q factor (M × N, orthonormal columns).
    ///
    /// Applies the Householder reflections in reverse to the first N
    /// columns of the identity matrix.
    pub fn q(&self) -> DynMatrix<T> {
        let m = self.qr.nrows();
        let n = self.qr.ncols();

        // Start with the M×N "thin identity": e_0..e_{N-1}
        let mut q = DynMatrix::zeros(m, n, T::zero());
        for i in 0..n {
            q[(i, i)] = T::one();
        }

        // Apply reflections in reverse order
        for col in (0..n).rev() {
            let tau_val = self.tau[col];
            if tau_val == T::zero() {
                continue; // identity step
            }

            // v = [1, qr[col+1,col], ..., qr[M-1,col]]
            // H = I - tau * v * v^T, applied to Q[col:M, col:N]
            for j in col..n {
                let mut dot = q[(col, j)];
                for i in (col + 1)..m {
                    dot = dot + self.qr[(i, col)] * q[(i, j)];
                }
                dot = dot * tau_val;

                q[(col, j)] = q[(col, j)] - dot;
                for i in (col + 1)..m {
                    q[(i, j)] = q[(i, j)] - dot * self.qr[(i, col)];
                }
            }
        }

        q
    }

    /// Solve the least-squares problem min ||Ax - b|| for x.
    ///
    /// Computes x = R^{-1} Q^T b via Householder application and back
    /// substitution. Requires full column rank (no zero on R's diagonal).
    pub fn solve(&self, b: &DynVector<T>) -> DynVector<T> {
        let m = self.qr.nrows();
        let n = self.qr.ncols();
        assert_eq!(b.len(), m, "rhs length mismatch");

        // Apply Q^T to b by applying each reflection in order
        let mut qtb: Vec<T> = (0..m).map(|i| b[i]).collect();
        for col in 0..n {
            let tau_val = self.tau[col];
            if tau_val == T::zero() {
                continue;
            }
            let mut dot = qtb[col];
            for i in (col + 1)..m {
                dot = dot + self.qr[(i, col)] * qtb[i];
            }
            dot = dot * tau_val;

            qtb[col] = qtb[col] - dot;
            for i in (col + 1)..m {
                qtb[i] = qtb[i] - dot * self.qr[(i, col)];
            }
        }

        // Back substitution with R (upper triangle of qr, first N rows)
        let mut x = vec![T::zero(); n];
        for i in (0..n).rev() {
            let mut sum = qtb[i];
            for j in (i + 1)..n {
                sum = sum - self.qr[(i, j)] * x[j];
            }
            x[i] = sum / self.qr[(i, i)];
        }

        DynVector::from_vec(x)
    }

    /// Determinant of the original matrix (square only).
    pub fn det(&self) -> T {
        assert!(
            self.qr.is_square(),
            "determinant requires a square matrix"
        );
        let mut d = self.sign;
        for i in 0..self.qr.ncols() {
            d = d * self.qr[(i, i)];
        }
        d
    }
}

/// Convenience method on dynamic matrices.
impl<T: FloatScalar> DynMatrix<T> {
    /// QR factorization via Householder reflections, consuming the matrix.
    pub fn qr(self) -> Qr<T> {
        Qr::new(self)
    }
}
