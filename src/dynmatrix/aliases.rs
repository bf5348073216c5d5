//! Pre-defined type aliases for concrete dynamic matrix and vector scalars.

use crate::matrix::aliases::Real;

use super::vector::DynVector;
use super::DynMatrix;

/// Single-precision dynamic matrix.
pub type DynMatrixf32 = DynMatrix<f32>;
/// Double-precision dynamic matrix.
pub type DynMatrixf64 = DynMatrix<f64>;

/// Single-precision dynamic vector.
pub type DynVectorf32 = DynVector<f32>;
/// Double-precision dynamic vector.
pub type DynVectorf64 = DynVector<f64>;

/// Dynamic matrix at the build-wide default precision.
pub type RealDynMatrix = DynMatrix<Real>;
/// Dynamic vector at the build-wide default precision.
pub type RealDynVector = DynVector<Real>;
