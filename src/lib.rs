//! # lineal
//!
//! Pure-Rust dense and sparse linear algebra kernel, no-std compatible.
//! Fixed-size and dynamically-sized vectors and matrices, strided views over
//! existing storage, a compact sparse row encoding, QR/SVD factorization, and
//! iterative linear solvers.
//!
//! ## Quick start
//!
//! ```
//! use lineal::{DynMatrix, DynVector};
//! use lineal::linalg::solve_conj_grad;
//!
//! // Solve a symmetric positive-definite system Ax = b with conjugate gradient
//! let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 1.0, 3.0]);
//! let b = DynVector::from_slice(&[1.0, 2.0]);
//! let mut x = DynVector::zeros(2, 0.0);
//! solve_conj_grad(&a, &mut x, &b, 1e-12, None).unwrap();
//! assert!((x[0] - 1.0 / 11.0).abs() < 1e-9);
//! assert!((x[1] - 7.0 / 11.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Fixed-size `Matrix<T, M, N>` with const-generic dimensions.
//!   Stack-allocated `[[T; N]; M]` row-major storage. Arithmetic, indexing,
//!   norms, block operations, cross/outer products, and rotation/scaling
//!   transform constructors. [`Vector<T, N>`](matrix::vector::Vector) and
//!   [`ColumnVector<T, N>`](matrix::vector::ColumnVector) are type aliases
//!   for 1-row and 1-column matrices.
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions
//!   (requires `alloc` feature, included with `std`). `Vec<T>` row-major
//!   storage; `resize` discards contents. [`DynVector<T>`](dynmatrix::DynVector)
//!   newtype for single-index vector access. Strided
//!   [`VecView`](dynmatrix::VecView) / [`MatView`](dynmatrix::MatView) proxies
//!   alias rows, columns, diagonals, and rectangular blocks in place.
//!
//! - [`sparse`] — [`SparseVec<T>`](sparse::SparseVec): ordered (index, value)
//!   pairs with an explicit fuzz threshold for zero suppression, a cursor
//!   supporting dense co-iteration and binary-search jumps, and one-pass
//!   merge arithmetic. [`SparseMat<T>`](sparse::SparseMat) stores one sparse
//!   row per matrix row.
//!
//! - [`linalg`] — Householder QR and Golub-Kahan SVD, both consuming their
//!   input matrix, plus successive over-relaxation and conjugate-gradient
//!   solvers generic over dense or sparse coefficient matrices.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), required by norms,
//!     factorizations, and solvers
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Transform convention
//!
//! Matrix-vector transforms use the column-vector-on-the-right convention
//! (`y = M * x`). Enabling the `row-vectors` feature switches every transform
//! helper to row-vector-on-the-left (`y = x * M`), including the placement of
//! the translation component in homogeneous matrices. The convention is fixed
//! per build and propagated consistently; it is never a per-call option.
//!
//! ## Cargo features
//!
//! | Feature       | Default  | Description |
//! |---------------|----------|-------------|
//! | `std`         | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`       | via std  | `DynMatrix` / `DynVector` / sparse types |
//! | `libm`        | no       | Pure-Rust software float fallback |
//! | `single`      | no       | [`Real`] alias is `f32` instead of `f64` |
//! | `row-vectors` | no       | Row-vector-on-the-left transform convention |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dynmatrix;
pub mod linalg;
pub mod matrix;
#[cfg(feature = "alloc")]
pub mod sparse;
pub mod traits;

pub use matrix::vector::{
    ColumnVector, ColumnVector2, ColumnVector3, ColumnVector4, Vector, Vector2, Vector3, Vector4,
};
pub use matrix::Matrix;
pub use matrix::aliases::{
    Matrix2, Matrix2d, Matrix2f, Matrix3, Matrix3d, Matrix3f, Matrix4, Matrix4d, Matrix4f, Real,
    Vector2d, Vector2f, Vector3d, Vector3f, Vector4d, Vector4f,
};
#[cfg(feature = "alloc")]
pub use dynmatrix::{
    DynMatrix, DynMatrixf32, DynMatrixf64, DynVector, DynVectorf32, DynVectorf64, MatView,
    MatViewMut, VecView, VecViewMut,
};
#[cfg(feature = "alloc")]
pub use sparse::{SparseMat, SparsePair, SparseVec, SparseVecBuilder};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
