//! Algebraic property tests spanning the dense, sparse, factorization, and
//! solver layers.

use lineal::linalg::{solve_conj_grad, solve_over_relax, Qr, Svd};
use lineal::{DynMatrix, DynVector, Matrix, Matrix3, SparseMat, SparseVec, Vector};

const TOL: f64 = 1e-10;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

// ── Dense vector properties ─────────────────────────────────────────

#[test]
fn norm_is_sqrt_of_self_dot() {
    let vectors = [
        Vector::from_array([1.0, 2.0, 3.0, 4.0]),
        Vector::from_array([-0.5, 0.0, 2.5, 1e-3]),
        Vector::from_array([1e3, -2e3, 5.0, 0.1]),
    ];
    for v in vectors {
        assert_near(v.norm(), v.dot(&v).sqrt(), TOL, "norm vs sqrt(dot)");
    }
}

#[test]
fn normalized_vector_has_unit_dot() {
    let v = Vector::from_array([3.0, -4.0, 12.0]);
    let u = v.normalize();
    assert_near(u.dot(&u), 1.0, TOL, "dot(normalize, normalize)");
}

// ── Dense matrix properties ─────────────────────────────────────────

#[test]
fn inverse_product_is_identity() {
    let m = Matrix::new([
        [4.0_f64, 1.0, 2.0],
        [1.0, 5.0, 3.0],
        [2.0, 3.0, 6.0],
    ]);
    assert!(m.det().abs() > 1e-9);
    let inv = m.inverse().unwrap();
    let id = m * inv;
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_near(id[(i, j)], expected, 1e-10, "M * M^-1");
        }
    }
}

#[test]
fn transpose_is_involutive() {
    let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert_eq!(m.transpose().transpose(), m);

    let d = DynMatrix::from_fn(4, 7, |i, j| (i * 7 + j) as f64);
    assert_eq!(d.transpose().transpose(), d);
}

// ── Sparse properties ───────────────────────────────────────────────

#[test]
fn sparse_dense_roundtrip_replaces_subfuzz_with_zero() {
    let fuzz = 1e-6;
    let d = DynVector::from_slice(&[0.0f64, 1.0, 1e-9, -3.0, -1e-8, 0.5]);
    let s = SparseVec::from_dense(&d, fuzz);
    let back = s.to_dense();
    for i in 0..d.len() {
        if d[i].abs() > fuzz {
            assert_eq!(back[i], d[i]);
        } else {
            assert_eq!(back[i], 0.0);
        }
    }
}

#[test]
fn sparse_dot_matches_dense_dot_at_high_sparsity() {
    // >50% sparsity: 3 non-zeros out of 10
    let a = SparseVec::from_pairs(10, &[(0, 1.5), (4, -2.0), (9, 3.0)]);
    let b = SparseVec::from_pairs(10, &[(1, 7.0), (4, 0.5), (9, -1.0)]);
    let dense = a.to_dense().dot(&b.to_dense());
    assert_near(a.dot(&b), dense, TOL, "sparse vs dense dot");
}

#[test]
fn sparse_pairs_match_dense_layout() {
    // Pairs (1, 5.0), (4, 2.0) over length 5 equal [0, 5, 0, 0, 2]
    let v = SparseVec::from_pairs(5, &[(1, 5.0), (4, 2.0)]);
    assert_eq!(v.to_dense().as_slice(), &[0.0, 5.0, 0.0, 0.0, 2.0]);
    assert_eq!(v.get(2), 0.0);
}

// ── Factorization properties ────────────────────────────────────────

#[test]
fn svd_reconstructs_input() {
    let a = DynMatrix::from_rows(
        4,
        3,
        &[
            2.0_f64, -1.0, 0.5, 1.0, 3.0, -2.0, 0.0, 1.0, 1.0, -1.0, 0.5, 2.0,
        ],
    );
    let norm_a = a.frobenius_norm();
    let svd = Svd::new(a.clone()).unwrap();
    let (u, s, v) = (svd.u(), svd.singular_values(), svd.v());

    for i in 0..4 {
        for j in 0..3 {
            let mut sum = 0.0;
            for k in 0..3 {
                sum += u[(i, k)] * s[k] * v[(j, k)];
            }
            assert_near(sum, a[(i, j)], 1e-9 * norm_a.max(1.0), "UΣV^T vs A");
        }
    }
}

#[test]
fn qr_factors_are_orthogonal_and_triangular() {
    let a = DynMatrix::from_rows(
        4,
        4,
        &[
            4.0_f64, 1.0, -2.0, 2.0, 1.0, 2.0, 0.0, 1.0, -2.0, 0.0, 3.0, -2.0, 2.0, 1.0, -2.0,
            -1.0,
        ],
    );
    let qr = Qr::new(a.clone());
    let q = qr.q();
    let r = qr.r();

    // Q^T Q ≈ I
    let qtq = &q.transpose() * &q;
    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_near(qtq[(i, j)], expected, TOL, "Q^T Q");
        }
    }

    // R strictly upper triangular below the diagonal
    for i in 1..4 {
        for j in 0..i {
            assert_near(r[(i, j)], 0.0, TOL, "R sub-diagonal");
        }
    }

    // Q R ≈ A
    let recon = &q * &r;
    for i in 0..4 {
        for j in 0..4 {
            assert_near(recon[(i, j)], a[(i, j)], TOL, "QR vs A");
        }
    }
}

#[test]
fn qr_of_identity_is_identity() {
    let id = DynMatrix::eye(3, 0.0_f64);
    let qr = Qr::new(id);
    let q = qr.q();
    let r = qr.r();
    // Up to matching sign flips
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_near(q[(i, j)].abs(), expected, TOL, "Q");
            assert_near(r[(i, j)].abs(), expected, TOL, "R");
        }
    }
    let prod = &q * &r;
    for i in 0..3 {
        assert_near(prod[(i, i)], 1.0, TOL, "QR diagonal");
    }
}

// ── Solver scenarios ────────────────────────────────────────────────

#[test]
fn gauss_seidel_converges_within_fifty_sweeps() {
    // Diagonally dominant 2x2 with omega = 1 (plain Gauss-Seidel):
    // reaches the exact solution [160/197, -131/197] within 1e-6 in well
    // under 50 sweeps
    let a = DynMatrix::from_rows(2, 2, &[16.0, 3.0, 7.0, -11.0]);
    let b = DynVector::from_slice(&[11.0, 13.0]);
    let mut x = DynVector::zeros(2, 0.0);

    let stats = solve_over_relax(&a, &mut x, &b, 1e-6, 1.0, Some(50)).unwrap();
    assert!(stats.steps < 50);
    assert_near(x[0], 160.0 / 197.0, 1e-4, "x[0]");
    assert_near(x[1], -131.0 / 197.0, 1e-4, "x[1]");
}

#[test]
fn gauss_seidel_divergence_is_reported() {
    // Gauss-Seidel grows the update by 1.5x per sweep on this matrix
    // (Jacobi spectral radius > 1); the solver reports divergence instead
    // of looping silently
    let a = DynMatrix::from_rows(2, 2, &[4.0, 3.0, 6.0, 3.0]);
    let b = DynVector::from_slice(&[1.0, 1.0]);
    let mut x = DynVector::zeros(2, 0.0);
    assert!(solve_over_relax(&a, &mut x, &b, 1e-6, 1.0, None).is_err());
}

#[test]
fn cg_and_sor_agree_on_sparse_system() {
    // Tridiagonal SPD system in both representations
    let n = 8;
    let dense = DynMatrix::from_fn(n, n, |i, j| {
        if i == j {
            2.0
        } else if i.abs_diff(j) == 1 {
            -1.0
        } else {
            0.0
        }
    });
    let sparse = SparseMat::from_dense(&dense, 0.0);
    let b = DynVector::fill(n, 1.0);

    let mut x_cg = DynVector::zeros(n, 0.0);
    let mut x_sor = DynVector::zeros(n, 0.0);
    solve_conj_grad(&sparse, &mut x_cg, &b, 1e-12, None).unwrap();
    solve_over_relax(&sparse, &mut x_sor, &b, 1e-12, 1.5, Some(10_000)).unwrap();

    for i in 0..n {
        assert_near(x_cg[i], x_sor[i], 1e-7, "CG vs SOR");
    }

    // And the dense solve agrees too
    let mut x_dense = DynVector::zeros(n, 0.0);
    solve_conj_grad(&dense, &mut x_dense, &b, 1e-12, None).unwrap();
    for i in 0..n {
        assert_near(x_cg[i], x_dense[i], 1e-9, "sparse vs dense CG");
    }
}

// ── Textual round-trips ─────────────────────────────────────────────

#[test]
fn textual_roundtrips() {
    let v = DynVector::from_slice(&[1.5, -2.0, 0.0, 3.25]);
    let parsed: DynVector<f64> = format!("{v}").parse().unwrap();
    assert_eq!(parsed, v);

    let m = DynMatrix::from_rows(2, 3, &[1.0, 0.5, -2.0, 3.0, 0.0, 9.0]);
    let parsed: DynMatrix<f64> = format!("{m}").parse().unwrap();
    assert_eq!(parsed, m);

    let fixed: Matrix3<f64> = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    let parsed: Matrix3<f64> = format!("{fixed}").parse().unwrap();
    assert_eq!(parsed, fixed);

    let sv = SparseVec::from_pairs(6, &[(1, 2.5), (5, -1.0)]);
    let parsed: SparseVec<f64> = format!("{sv}").parse().unwrap();
    assert_eq!(parsed, sv);
    let parsed: SparseVec<f64> = format!("{}", sv.display_compact()).parse().unwrap();
    assert_eq!(parsed, sv);

    let sm = SparseMat::from_dense(&DynMatrix::from_rows(2, 2, &[0.0, 1.0, 2.0, 0.0]), 0.0);
    let parsed: SparseMat<f64> = format!("{sm}").parse().unwrap();
    assert_eq!(parsed, sm);
}
