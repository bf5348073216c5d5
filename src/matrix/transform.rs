//! Transformation constructors and the matrix-vector transform helper.
//!
//! The orientation convention is fixed per build: column vectors on the
//! right by default (`y = M * x`), row vectors on the left with the
//! `row-vectors` feature (`y = x * M`). Rotation matrices and the placement
//! of the translation component in homogeneous matrices follow the selected
//! convention, so `xform` composes the same way in either build.

use crate::matrix::aliases::{Matrix2, Matrix3, Matrix4};
use crate::matrix::vector::{Vector, Vector2, Vector3};
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

// ── Transform application ───────────────────────────────────────────

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Apply this matrix to a vector under the configured convention.
    ///
    /// Column convention: `M * v`. Row convention: `v * M`.
    #[cfg(not(feature = "row-vectors"))]
    #[inline]
    pub fn xform(&self, v: &Vector<T, N>) -> Vector<T, N> {
        self.vecmul(v)
    }

    /// Apply this matrix to a vector under the configured convention.
    ///
    /// Column convention: `M * v`. Row convention: `v * M`.
    #[cfg(feature = "row-vectors")]
    #[inline]
    pub fn xform(&self, v: &Vector<T, N>) -> Vector<T, N> {
        *v * *self
    }
}

impl<T: Scalar> Matrix4<T> {
    /// Transform a 3-D point through a homogeneous 4×4 matrix:
    /// lift to `w = 1`, apply, project.
    #[inline]
    pub fn xform_point(&self, p: &Vector3<T>) -> Vector3<T> {
        self.xform(&p.homogeneous()).project()
    }
}

impl<T: Scalar> Matrix3<T> {
    /// Transform a 2-D point through a homogeneous 3×3 matrix.
    #[inline]
    pub fn xform_point(&self, p: &Vector2<T>) -> Vector2<T> {
        self.xform(&p.homogeneous()).project()
    }
}

// ── Homogeneous embedding of smaller fixed matrices ─────────────────

impl<T: Scalar> Matrix2<T> {
    /// Embed into a homogeneous 3×3 matrix (identity last row/column).
    pub fn homogeneous(&self) -> Matrix3<T> {
        let mut out = Matrix3::eye();
        for i in 0..2 {
            for j in 0..2 {
                out[(i, j)] = self[(i, j)];
            }
        }
        out
    }
}

impl<T: Scalar> Matrix3<T> {
    /// Embed into a homogeneous 4×4 matrix (identity last row/column).
    pub fn homogeneous(&self) -> Matrix4<T> {
        let mut out = Matrix4::eye();
        for i in 0..3 {
            for j in 0..3 {
                out[(i, j)] = self[(i, j)];
            }
        }
        out
    }
}

// Orient a matrix written for the column convention: identity for column
// builds, transpose for row builds.
#[cfg(not(feature = "row-vectors"))]
fn orient<T: Scalar, const N: usize>(m: Matrix<T, N, N>) -> Matrix<T, N, N> {
    m
}

#[cfg(feature = "row-vectors")]
fn orient<T: Scalar, const N: usize>(m: Matrix<T, N, N>) -> Matrix<T, N, N> {
    m.transpose()
}

// ── 2-D transforms ──────────────────────────────────────────────────

impl<T: FloatScalar> Matrix2<T> {
    /// Rotation by `theta` radians.
    ///
    /// ```
    /// use lineal::{Matrix2, Vector2};
    /// let r = Matrix2::rotation(core::f64::consts::FRAC_PI_2);
    /// let v = r.xform(&Vector2::from_array([1.0, 0.0]));
    /// assert!((v[0]).abs() < 1e-12);
    /// assert!((v[1] - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotation(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        orient(Matrix::new([[c, T::zero() - s], [s, c]]))
    }

    /// Non-uniform scaling along the axes.
    pub fn scaling(s: &Vector2<T>) -> Self {
        Matrix::new([[s[0], T::zero()], [T::zero(), s[1]]])
    }
}

// ── 3-D transforms ──────────────────────────────────────────────────

impl<T: FloatScalar> Matrix3<T> {
    /// Rotation by `theta` radians about a unit-length `axis`
    /// (Rodrigues' formula).
    ///
    /// The axis must be normalized.
    pub fn rotation(axis: &Vector3<T>, theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let t = T::one() - c;
        let (x, y, z) = (axis[0], axis[1], axis[2]);
        orient(Matrix::new([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ]))
    }

    /// Non-uniform scaling along the axes.
    pub fn scaling(s: &Vector3<T>) -> Self {
        Self::from_diag(&Vector3::from_array([s[0], s[1], s[2]]))
    }

    /// Homogeneous 2-D rotation.
    pub fn h_rotation(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let z = T::zero();
        orient(Matrix::new([
            [c, z - s, z],
            [s, c, z],
            [z, z, T::one()],
        ]))
    }

    /// Homogeneous 2-D scaling.
    pub fn h_scaling(s: &Vector2<T>) -> Self {
        Self::from_diag(&Vector3::from_array([s[0], s[1], T::one()]))
    }

    /// Homogeneous 2-D translation.
    ///
    /// ```
    /// use lineal::{Matrix3, Vector2};
    /// let t = Matrix3::h_translation(&Vector2::from_array([5.0, -1.0]));
    /// let p = t.xform_point(&Vector2::from_array([1.0, 1.0]));
    /// assert_eq!(p[0], 6.0);
    /// assert_eq!(p[1], 0.0);
    /// ```
    pub fn h_translation(t: &Vector2<T>) -> Self {
        let z = T::zero();
        let o = T::one();
        orient(Matrix::new([
            [o, z, t[0]],
            [z, o, t[1]],
            [z, z, o],
        ]))
    }
}

// ── Homogeneous 3-D transforms ──────────────────────────────────────

impl<T: FloatScalar> Matrix4<T> {
    /// Homogeneous rotation about a unit-length `axis` by `theta` radians.
    pub fn h_rotation(axis: &Vector3<T>, theta: T) -> Self {
        Matrix3::rotation(axis, theta).homogeneous()
    }

    /// Homogeneous non-uniform scaling.
    pub fn h_scaling(s: &Vector3<T>) -> Self {
        Self::from_diag(&crate::matrix::vector::Vector4::from_array([
            s[0],
            s[1],
            s[2],
            T::one(),
        ]))
    }

    /// Homogeneous translation.
    pub fn h_translation(t: &Vector3<T>) -> Self {
        let z = T::zero();
        let o = T::one();
        orient(Matrix::new([
            [o, z, z, t[0]],
            [z, o, z, t[1]],
            [z, z, o, t[2]],
            [z, z, z, o],
        ]))
    }
}
