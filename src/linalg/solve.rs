use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::LinalgError;
use crate::sparse::SparseMat;
use crate::traits::{FloatScalar, Scalar};

/// Coefficient-matrix access needed by the iterative solvers.
///
/// Implemented by [`DynMatrix`] and [`SparseMat`]; the solvers are generic
/// over this seam, so dense and sparse systems share all solver logic.
pub trait MatVec<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;

    /// Matrix-vector product `A * x`.
    fn mul_vec(&self, x: &DynVector<T>) -> DynVector<T>;

    /// Dot product of row `i` with `x` (includes the diagonal term).
    fn row_dot(&self, i: usize, x: &DynVector<T>) -> T;

    /// Diagonal entry `A[i][i]`.
    fn diag(&self, i: usize) -> T;
}

impl<T: Scalar> MatVec<T> for DynMatrix<T> {
    fn nrows(&self) -> usize {
        DynMatrix::nrows(self)
    }

    fn ncols(&self) -> usize {
        DynMatrix::ncols(self)
    }

    fn mul_vec(&self, x: &DynVector<T>) -> DynVector<T> {
        self.vecmul(x)
    }

    fn row_dot(&self, i: usize, x: &DynVector<T>) -> T {
        let mut sum = T::zero();
        for j in 0..DynMatrix::ncols(self) {
            sum = sum + self[(i, j)] * x[j];
        }
        sum
    }

    fn diag(&self, i: usize) -> T {
        self[(i, i)]
    }
}

impl<T: Scalar> MatVec<T> for SparseMat<T> {
    fn nrows(&self) -> usize {
        SparseMat::nrows(self)
    }

    fn ncols(&self) -> usize {
        SparseMat::ncols(self)
    }

    fn mul_vec(&self, x: &DynVector<T>) -> DynVector<T> {
        SparseMat::mul_vec(self, x)
    }

    fn row_dot(&self, i: usize, x: &DynVector<T>) -> T {
        self[i].dot_dense(x)
    }

    fn diag(&self, i: usize) -> T {
        self.get(i, i)
    }
}

/// Outcome of an iterative solve: the final residual (or update) magnitude
/// and the number of sweeps/steps actually used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveStats<T> {
    /// Final residual norm (CG) or per-sweep update magnitude (SOR).
    pub residual: T,
    /// Sweeps (SOR) or steps (CG) performed.
    pub steps: usize,
}

// A sweep-update blowup by this factor over the first sweep reads as
// divergence rather than slow convergence.
fn divergence_cap<T: FloatScalar>() -> T {
    let two = T::one() + T::one();
    two.powi(20)
}

/// Solve `A x = b` by successive over-relaxation, updating `x` in place.
///
/// Each sweep updates every component of `x` using the most recently
/// updated neighbors (Gauss-Seidel order), relaxed by `omega`; `omega = 1`
/// is plain Gauss-Seidel. Iterates until the per-sweep update magnitude
/// drops below `epsilon`, `max_steps` sweeps elapse, or the update
/// magnitude diverges (reported as `Err(Diverged)` rather than looping
/// silently). With `max_steps = None` the sweep count is unbounded.
///
/// Convergence requires a spectral radius below 1 for the given `A` and
/// `omega`; for symmetric positive-definite `A` any `0 < omega < 2` works.
///
/// # Example
///
/// ```
/// use lineal::{DynMatrix, DynVector};
/// use lineal::linalg::solve_over_relax;
///
/// let a = DynMatrix::from_rows(2, 2, &[16.0_f64, 3.0, 7.0, -11.0]);
/// let b = DynVector::from_slice(&[11.0, 13.0]);
/// let mut x = DynVector::zeros(2, 0.0);
/// let stats = solve_over_relax(&a, &mut x, &b, 1e-6, 1.0, Some(50)).unwrap();
/// assert!(stats.steps < 50);
/// assert!((x[0] - 160.0 / 197.0).abs() < 1e-5);
/// assert!((x[1] + 131.0 / 197.0).abs() < 1e-5);
/// ```
pub fn solve_over_relax<T: FloatScalar, A: MatVec<T>>(
    a: &A,
    x: &mut DynVector<T>,
    b: &DynVector<T>,
    epsilon: T,
    omega: T,
    max_steps: Option<usize>,
) -> Result<SolveStats<T>, LinalgError> {
    let n = a.nrows();
    assert_eq!(a.ncols(), n, "SOR requires a square coefficient matrix");
    assert_eq!(x.len(), n, "solution length mismatch");
    assert_eq!(b.len(), n, "rhs length mismatch");

    let mut steps = 0usize;
    let mut first_update: Option<T> = None;
    let cap = divergence_cap::<T>();

    loop {
        let mut update_sq = T::zero();
        for i in 0..n {
            // Residual of row i at the current (partially updated) x
            let num = b[i] - a.row_dot(i, x);
            let delta = omega * num / a.diag(i);
            x[i] = x[i] + delta;
            update_sq = update_sq + delta * delta;
        }
        let update = update_sq.sqrt();
        steps += 1;

        if !update.is_finite() {
            return Err(LinalgError::Diverged);
        }
        match first_update {
            None => first_update = Some(update),
            Some(first) => {
                if update > first * cap {
                    return Err(LinalgError::Diverged);
                }
            }
        }

        if update < epsilon {
            return Ok(SolveStats {
                residual: update,
                steps,
            });
        }
        if let Some(max) = max_steps {
            if steps >= max {
                return Ok(SolveStats {
                    residual: update,
                    steps,
                });
            }
        }
    }
}

/// Solve `A x = b` by the conjugate gradient method, updating `x` in place.
///
/// `A` must be symmetric positive-definite — this is a precondition, not a
/// runtime check; behavior on other matrices is unspecified. Terminates
/// when the residual norm drops below `epsilon` or after `max_steps` steps
/// (default: the problem dimension, within which exact arithmetic would
/// converge). Non-finite iterates are reported as `Err(Diverged)`.
///
/// # Example
///
/// ```
/// use lineal::{DynMatrix, DynVector};
/// use lineal::linalg::solve_conj_grad;
///
/// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 1.0, 3.0]);
/// let b = DynVector::from_slice(&[1.0, 2.0]);
/// let mut x = DynVector::zeros(2, 0.0);
/// let stats = solve_conj_grad(&a, &mut x, &b, 1e-12, None).unwrap();
/// assert!(stats.residual < 1e-12);
/// ```
pub fn solve_conj_grad<T: FloatScalar, A: MatVec<T>>(
    a: &A,
    x: &mut DynVector<T>,
    b: &DynVector<T>,
    epsilon: T,
    max_steps: Option<usize>,
) -> Result<SolveStats<T>, LinalgError> {
    let n = a.nrows();
    assert_eq!(a.ncols(), n, "CG requires a square coefficient matrix");
    assert_eq!(x.len(), n, "solution length mismatch");
    assert_eq!(b.len(), n, "rhs length mismatch");

    let max = max_steps.unwrap_or(n);

    // r = b - A x, d = r
    let mut r = b - &a.mul_vec(x);
    let mut d = r.clone();
    let mut rs_old = r.dot(&r);
    let mut steps = 0usize;

    while steps < max && rs_old.sqrt() >= epsilon {
        let q = a.mul_vec(&d);
        let dq = d.dot(&q);
        let alpha = rs_old / dq;
        if !alpha.is_finite() {
            return Err(LinalgError::Diverged);
        }

        for i in 0..n {
            x[i] = x[i] + alpha * d[i];
            r[i] = r[i] - alpha * q[i];
        }

        let rs_new = r.dot(&r);
        let beta = rs_new / rs_old;
        for i in 0..n {
            d[i] = r[i] + beta * d[i];
        }
        rs_old = rs_new;
        steps += 1;
    }

    let residual = rs_old.sqrt();
    if !residual.is_finite() {
        return Err(LinalgError::Diverged);
    }
    Ok(SolveStats { residual, steps })
}
