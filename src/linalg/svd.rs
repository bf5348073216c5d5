use alloc::vec;

use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::{givens, LinalgError};
use crate::traits::{FloatScalar, MatrixMut};

// ── Householder bidiagonalization ───────────────────────────────────

/// Householder bidiagonalization: reduce an M×N matrix (M ≥ N) to upper
/// bidiagonal form via alternating left and right reflections.
///
/// On return:
/// - `diag[0..n]` contains the bidiagonal diagonal
/// - `off_diag[0..n-1]` contains the bidiagonal superdiagonal
/// - `u` (M×M) accumulates the left reflections
/// - `v` (N×N) accumulates the right reflections
///
/// The result satisfies `A = U · B · V^T` where B = bidiag(diag, off_diag).
pub(crate) fn bidiagonalize<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    diag: &mut [T],
    off_diag: &mut [T],
    u: &mut impl MatrixMut<T>,
    v: &mut impl MatrixMut<T>,
) {
    let m = a.nrows();
    let n = a.ncols();
    assert!(m >= n, "bidiagonalize requires M >= N");
    assert!(diag.len() >= n);
    assert!(off_diag.len() + 1 >= n);

    // Initialize U = I_m, V = I_n
    for i in 0..m {
        for j in 0..m {
            *u.get_mut(i, j) = if i == j { T::one() } else { T::zero() };
        }
    }
    for i in 0..n {
        for j in 0..n {
            *v.get_mut(i, j) = if i == j { T::one() } else { T::zero() };
        }
    }

    for k in 0..n {
        // ── Left Householder: zero out a[k+1:m, k] ──
        let mut norm_sq = T::zero();
        for i in k..m {
            let val = *a.get(i, k);
            norm_sq = norm_sq + val * val;
        }

        if norm_sq > T::epsilon() * T::epsilon() {
            let norm = norm_sq.sqrt();
            let akk = *a.get(k, k);

            let sigma = if akk.abs() < T::epsilon() {
                norm
            } else {
                norm * akk.signum()
            };

            let v0 = akk + sigma;
            *a.get_mut(k, k) = v0;

            // Scale sub-diagonal entries
            for i in (k + 1)..m {
                let val = *a.get(i, k) / v0;
                *a.get_mut(i, k) = val;
            }

            let tau = v0 / sigma;

            // Apply to trailing columns: A[k:m, k+1:n] -= tau * v * (v^T * A)
            for j in (k + 1)..n {
                let mut dot = *a.get(k, j); // v[0] = 1 (implicit)
                for i in (k + 1)..m {
                    dot = dot + *a.get(i, k) * *a.get(i, j);
                }
                dot = dot * tau;

                *a.get_mut(k, j) = *a.get(k, j) - dot;
                for i in (k + 1)..m {
                    let vi = *a.get(i, k);
                    *a.get_mut(i, j) = *a.get(i, j) - dot * vi;
                }
            }

            // Accumulate U = U * H_L
            for row in 0..m {
                let mut dot = *u.get(row, k);
                for i in (k + 1)..m {
                    dot = dot + *u.get(row, i) * *a.get(i, k);
                }
                dot = dot * tau;

                *u.get_mut(row, k) = *u.get(row, k) - dot;
                for i in (k + 1)..m {
                    let vi = *a.get(i, k);
                    *u.get_mut(row, i) = *u.get(row, i) - dot * vi;
                }
            }

            diag[k] = T::zero() - sigma;
        } else {
            diag[k] = *a.get(k, k);
        }

        // ── Right Householder: zero out a[k, k+2:n] ──
        if k + 2 <= n.saturating_sub(1) {
            let mut norm_sq = T::zero();
            for j in (k + 1)..n {
                let val = *a.get(k, j);
                norm_sq = norm_sq + val * val;
            }

            if norm_sq > T::epsilon() * T::epsilon() {
                let norm = norm_sq.sqrt();
                let ak_k1 = *a.get(k, k + 1);

                let sigma = if ak_k1.abs() < T::epsilon() {
                    norm
                } else {
                    norm * ak_k1.signum()
                };

                let v0 = ak_k1 + sigma;
                *a.get_mut(k, k + 1) = v0;

                for j in (k + 2)..n {
                    let val = *a.get(k, j) / v0;
                    *a.get_mut(k, j) = val;
                }

                let tau = v0 / sigma;

                // Apply from the right to rows k+1..m
                for i in (k + 1)..m {
                    let mut dot = *a.get(i, k + 1);
                    for j in (k + 2)..n {
                        dot = dot + *a.get(i, j) * *a.get(k, j);
                    }
                    dot = dot * tau;

                    *a.get_mut(i, k + 1) = *a.get(i, k + 1) - dot;
                    for j in (k + 2)..n {
                        let vj = *a.get(k, j);
                        *a.get_mut(i, j) = *a.get(i, j) - dot * vj;
                    }
                }

                // Accumulate V = V * H_R
                for row in 0..n {
                    let mut dot = *v.get(row, k + 1);
                    for j in (k + 2)..n {
                        dot = dot + *v.get(row, j) * *a.get(k, j);
                    }
                    dot = dot * tau;

                    *v.get_mut(row, k + 1) = *v.get(row, k + 1) - dot;
                    for j in (k + 2)..n {
                        let vj = *a.get(k, j);
                        *v.get_mut(row, j) = *v.get(row, j) - dot * vj;
                    }
                }

                off_diag[k] = T::zero() - sigma;
            } else {
                off_diag[k] = *a.get(k, k + 1);
            }
        } else if k + 1 < n {
            off_diag[k] = *a.get(k, k + 1);
        }
    }
}

// ── Golub-Kahan bidiagonal QR ───────────────────────────────────────

/// Implicit-shift QR iteration on a bidiagonal matrix (Golub-Kahan).
///
/// On entry `diag`/`off_diag` hold the bidiagonal form and `u`/`v` the
/// accumulated transforms from [`bidiagonalize`]. On return `diag` holds
/// non-negative singular values sorted descending, `off_diag` is zeroed,
/// and every rotation has been folded into `u` and `v`.
///
/// A superdiagonal entry deflates once its magnitude drops below machine
/// epsilon times the magnitudes of its neighboring diagonal entries.
pub(crate) fn bidiagonal_qr<T: FloatScalar>(
    diag: &mut [T],
    off_diag: &mut [T],
    u: &mut impl MatrixMut<T>,
    v: &mut impl MatrixMut<T>,
    max_iter: usize,
) -> Result<(), LinalgError> {
    let n = diag.len();
    if n <= 1 {
        if n == 1 && diag[0] < T::zero() {
            diag[0] = T::zero() - diag[0];
            let m = u.nrows();
            for i in 0..m {
                let val = *u.get(i, 0);
                *u.get_mut(i, 0) = T::zero() - val;
            }
        }
        return Ok(());
    }

    let eps = T::epsilon();
    let mut iter = 0usize;
    let mut hi = n - 1;

    while hi > 0 {
        // Deflation: check if trailing off_diag is negligible
        {
            let threshold = eps * (diag[hi - 1].abs() + diag[hi].abs());
            if off_diag[hi - 1].abs() <= threshold {
                off_diag[hi - 1] = T::zero();
                hi -= 1;
                continue;
            }
        }

        // Find lo: start of the unreduced block
        let mut lo = hi - 1;
        while lo > 0 {
            let threshold = eps * (diag[lo - 1].abs() + diag[lo].abs());
            if off_diag[lo - 1].abs() <= threshold {
                off_diag[lo - 1] = T::zero();
                break;
            }
            lo -= 1;
        }

        iter += 1;
        if iter > max_iter {
            return Err(LinalgError::ConvergenceFailure);
        }

        // Zero diagonal entries break the shift formula; chase the
        // corresponding off-diagonal entry off the bottom with left Givens
        // rotations, which decouples the block.
        {
            let mut found_zero = false;
            for idx in lo..hi {
                if diag[idx].abs() <= eps {
                    diag[idx] = T::zero();
                    let mut z = off_diag[idx];
                    off_diag[idx] = T::zero();
                    for j in (idx + 1)..=hi {
                        let (c, s) = givens(diag[j], z);
                        diag[j] = c * diag[j] + s * z;
                        if j < hi {
                            z = T::zero() - s * off_diag[j];
                            off_diag[j] = c * off_diag[j];
                        }
                        let mu = u.nrows();
                        for row in 0..mu {
                            let uj = *u.get(row, j);
                            let ui = *u.get(row, idx);
                            *u.get_mut(row, j) = c * uj + s * ui;
                            *u.get_mut(row, idx) = c * ui - s * uj;
                        }
                    }
                    found_zero = true;
                    break;
                }
            }
            if found_zero {
                continue;
            }
        }

        // Wilkinson shift from the trailing 2×2 of B^T B
        let d_hi = diag[hi];
        let d_hi1 = diag[hi - 1];
        let e_hi1 = off_diag[hi - 1];
        let e_hi2 = if hi >= 2 && hi - 2 >= lo {
            off_diag[hi - 2]
        } else {
            T::zero()
        };

        let t11 = d_hi1 * d_hi1 + e_hi2 * e_hi2;
        let t12 = d_hi1 * e_hi1;
        let t22 = d_hi * d_hi + e_hi1 * e_hi1;

        let two = T::one() + T::one();
        let d = (t11 - t22) / two;
        let sign_d = if d >= T::zero() {
            T::one()
        } else {
            T::zero() - T::one()
        };
        let mu = t22 - t12 * t12 / (d + sign_d * (d * d + t12 * t12).sqrt());

        // Implicit QR chase
        let mut x = diag[lo] * diag[lo] - mu;
        let mut z = diag[lo] * off_diag[lo];

        for k in lo..hi {
            // Right Givens rotation: zero z
            let (c, s) = givens(x, z);

            if k > lo {
                off_diag[k - 1] = c * x + s * z;
            }

            // Right rotation on columns k, k+1 of B; the bulge appears at
            // B[k+1, k]
            let dk = diag[k];
            let ek = off_diag[k];
            let dk1 = diag[k + 1];

            diag[k] = c * dk + s * ek;
            off_diag[k] = c * ek - s * dk;
            let bulge = s * dk1;
            diag[k + 1] = c * dk1;

            let nv = v.nrows();
            for row in 0..nv {
                let vk = *v.get(row, k);
                let vk1 = *v.get(row, k + 1);
                *v.get_mut(row, k) = c * vk + s * vk1;
                *v.get_mut(row, k + 1) = c * vk1 - s * vk;
            }

            // Left Givens rotation: zero the bulge at B[k+1, k]
            let (c2, s2) = givens(diag[k], bulge);

            diag[k] = c2 * diag[k] + s2 * bulge;
            let old_ek = off_diag[k];
            let old_dk1 = diag[k + 1];
            off_diag[k] = c2 * old_ek + s2 * old_dk1;
            diag[k + 1] = c2 * old_dk1 - s2 * old_ek;

            if k + 1 < hi {
                let old_ek1 = off_diag[k + 1];
                // The fill-in at B[k, k+2] drives the next right rotation
                x = off_diag[k];
                z = s2 * old_ek1;
                off_diag[k + 1] = c2 * old_ek1;
            }

            let mu_rows = u.nrows();
            for row in 0..mu_rows {
                let uk = *u.get(row, k);
                let uk1 = *u.get(row, k + 1);
                *u.get_mut(row, k) = c2 * uk + s2 * uk1;
                *u.get_mut(row, k + 1) = c2 * uk1 - s2 * uk;
            }
        }
    }

    // Make all singular values non-negative
    for i in 0..n {
        if diag[i] < T::zero() {
            diag[i] = T::zero() - diag[i];
            let m = u.nrows();
            for row in 0..m {
                let val = *u.get(row, i);
                *u.get_mut(row, i) = T::zero() - val;
            }
        }
    }

    // Sort singular values descending, permuting U and V columns to match
    for i in 0..n {
        let mut max_idx = i;
        for j in (i + 1)..n {
            if diag[j] > diag[max_idx] {
                max_idx = j;
            }
        }
        if max_idx != i {
            diag.swap(i, max_idx);

            let m = u.nrows();
            for row in 0..m {
                let tmp = *u.get(row, i);
                *u.get_mut(row, i) = *u.get(row, max_idx);
                *u.get_mut(row, max_idx) = tmp;
            }

            let nv = v.nrows();
            for row in 0..nv {
                let tmp = *v.get(row, i);
                *v.get_mut(row, i) = *v.get(row, max_idx);
                *v.get_mut(row, max_idx) = tmp;
            }
        }
    }

    Ok(())
}

// ── Svd wrapper ─────────────────────────────────────────────────────

/// Singular value decomposition of a dynamically-sized matrix (M ≥ N).
///
/// The constructor consumes the input — bidiagonalization overwrites it in
/// place, and the move makes the destructive contract explicit. Produces
/// thin U (M×N, orthonormal columns), the singular values (length N,
/// sorted descending), and V (N×N, orthogonal) such that
/// `A = U · diag(σ) · V^T`.
///
/// # Example
///
/// ```
/// use lineal::DynMatrix;
/// use lineal::linalg::Svd;
///
/// let a = DynMatrix::from_rows(3, 2, &[1.0_f64, 0.0, 0.0, 2.0, 0.0, 0.0]);
/// let svd = Svd::new(a).unwrap();
/// let s = svd.singular_values();
/// assert!((s[0] - 2.0).abs() < 1e-10);
/// assert!((s[1] - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Svd<T> {
    u: DynMatrix<T>,
    sigma: DynVector<T>,
    v: DynMatrix<T>,
}

impl<T: FloatScalar> Svd<T> {
    /// Compute the SVD, consuming the input matrix.
    ///
    /// Requires `M >= N`; transpose first for wide matrices (and swap the
    /// roles of U and V). Returns `Err(ConvergenceFailure)` if the
    /// bidiagonal QR iteration exceeds its budget of 30·max(M,N) sweeps.
    pub fn new(a: DynMatrix<T>) -> Result<Self, LinalgError> {
        let m = a.nrows();
        let n = a.ncols();
        assert!(m >= n, "SVD requires M >= N; transpose first for wide matrices");

        let mut work = a;
        let mut u_full = DynMatrix::zeros(m, m, T::zero());
        let mut v = DynMatrix::zeros(n, n, T::zero());
        let mut diag = vec![T::zero(); n];
        let mut off_diag = vec![T::zero(); n]; // only first n-1 used

        bidiagonalize(&mut work, &mut diag, &mut off_diag, &mut u_full, &mut v);
        bidiagonal_qr(
            &mut diag,
            &mut off_diag[..n.saturating_sub(1)],
            &mut u_full,
            &mut v,
            30 * m.max(n),
        )?;

        // Thin U: the first N columns carry the column-space basis
        let u = u_full.block(0, 0, m, n);

        Ok(Self {
            u,
            sigma: DynVector::from_vec(diag),
            v,
        })
    }

    /// The left singular vectors U (M×N, orthonormal columns).
    #[inline]
    pub fn u(&self) -> &DynMatrix<T> {
        &self.u
    }

    /// The singular values, sorted descending.
    #[inline]
    pub fn singular_values(&self) -> &DynVector<T> {
        &self.sigma
    }

    /// The right singular vectors V (N×N, orthogonal). Columns of V are
    /// the right singular vectors; `A = U diag(σ) V^T`.
    #[inline]
    pub fn v(&self) -> &DynMatrix<T> {
        &self.v
    }

    /// Numerical rank: number of singular values above `tol`.
    pub fn rank(&self, tol: T) -> usize {
        (0..self.sigma.len()).filter(|&i| self.sigma[i] > tol).count()
    }

    /// Condition number: σ_max / σ_min. Infinity when σ_min is zero.
    pub fn condition_number(&self) -> T {
        let n = self.sigma.len();
        let s_max = self.sigma[0];
        let s_min = self.sigma[n - 1];
        if s_min == T::zero() {
            T::infinity()
        } else {
            s_max / s_min
        }
    }
}

/// Convenience method on dynamic matrices.
impl<T: FloatScalar> DynMatrix<T> {
    /// Singular value decomposition, consuming the matrix. Requires M >= N.
    pub fn svd(self) -> Result<Svd<T>, LinalgError> {
        Svd::new(self)
    }
}
