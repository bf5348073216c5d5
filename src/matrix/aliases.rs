//! Pre-defined type aliases for the fixed matrix and vector sizes, plus the
//! build-wide default precision.

use crate::matrix::vector::{Vector2, Vector3, Vector4};
use crate::Matrix;

/// The build-wide default precision: `f64`, or `f32` with the `single`
/// feature. Pick one per deployment; both generic instantiations remain
/// available regardless.
#[cfg(not(feature = "single"))]
pub type Real = f64;
/// The build-wide default precision: `f64`, or `f32` with the `single`
/// feature.
#[cfg(feature = "single")]
pub type Real = f32;

// ── Square matrix aliases ──────────────────────────────────────────

/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

/// 2×2 single-precision matrix.
pub type Matrix2f = Matrix2<f32>;
/// 3×3 single-precision matrix.
pub type Matrix3f = Matrix3<f32>;
/// 4×4 single-precision matrix.
pub type Matrix4f = Matrix4<f32>;

/// 2×2 double-precision matrix.
pub type Matrix2d = Matrix2<f64>;
/// 3×3 double-precision matrix.
pub type Matrix3d = Matrix3<f64>;
/// 4×4 double-precision matrix.
pub type Matrix4d = Matrix4<f64>;

// ── Concrete vector aliases ────────────────────────────────────────

/// 2-element single-precision vector.
pub type Vector2f = Vector2<f32>;
/// 3-element single-precision vector.
pub type Vector3f = Vector3<f32>;
/// 4-element single-precision vector.
pub type Vector4f = Vector4<f32>;

/// 2-element double-precision vector.
pub type Vector2d = Vector2<f64>;
/// 3-element double-precision vector.
pub type Vector3d = Vector3<f64>;
/// 4-element double-precision vector.
pub type Vector4d = Vector4<f64>;
