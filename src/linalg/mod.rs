//! Factorizations and iterative solvers.
//!
//! [`Qr`] and [`Svd`] consume their input matrix — the factorization
//! algorithms are destructive, and the move makes that explicit in the
//! signature. The [`solve_over_relax`] and [`solve_conj_grad`] solvers are
//! generic over the [`MatVec`] seam, so dense and sparse coefficient
//! matrices share all solver logic.

#[cfg(feature = "alloc")]
pub(crate) mod qr;
#[cfg(feature = "alloc")]
pub(crate) mod solve;
#[cfg(feature = "alloc")]
pub(crate) mod svd;

#[cfg(feature = "alloc")]
pub use qr::{qr_in_place, Qr};
#[cfg(feature = "alloc")]
pub use solve::{solve_conj_grad, solve_over_relax, MatVec, SolveStats};
#[cfg(feature = "alloc")]
pub use svd::Svd;

use num_traits::{Float, Zero};

/// Errors from linear algebra operations.
///
/// Returned by inverses, factorizations, and the iterative solvers.
///
/// ```
/// use lineal::Matrix;
/// use lineal::linalg::LinalgError;
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Matrix is singular or nearly singular.
    Singular,
    /// Iterative algorithm did not converge within the iteration budget.
    ConvergenceFailure,
    /// Iterative solver diverged (update magnitude exploded or went
    /// non-finite).
    Diverged,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::ConvergenceFailure => {
                write!(f, "iterative algorithm did not converge")
            }
            LinalgError::Diverged => write!(f, "iterative solver diverged"),
        }
    }
}

/// Compute a Givens rotation (c, s) such that the rotation zeroes `b`
/// against `a`. Numerically stable form: divides by the larger magnitude.
#[cfg_attr(not(feature = "alloc"), allow(dead_code))]
pub(crate) fn givens<R: Float + Zero>(a: R, b: R) -> (R, R) {
    if b == R::zero() {
        (R::one(), R::zero())
    } else if b.abs() > a.abs() {
        let t = a / b;
        let s = R::one() / (R::one() + t * t).sqrt();
        (s * t, s)
    } else {
        let t = b / a;
        let c = R::one() / (R::one() + t * t).sqrt();
        (c, c * t)
    }
}
