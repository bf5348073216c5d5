use core::fmt;
use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};
use core::str::FromStr;

use alloc::vec::Vec;

use crate::dynmatrix::{DynMatrix, DynVector};
use crate::matrix::util::ParseMatrixError;
use crate::traits::{FloatScalar, Scalar};

use super::{SparseVec, SparseVecBuilder};

/// Sparse matrix: one [`SparseVec`] per row, plus the column count.
///
/// Invariant: every row has logical length `ncols`, so every stored pair
/// index is below the column count.
///
/// # Examples
///
/// ```
/// use lineal::{DynVector, SparseMat};
///
/// let mut m = SparseMat::zeros(3, 3, 0.0_f64);
/// m[0].set(0, 2.0);
/// m[1].set(1, 3.0);
/// m[2].set(0, 1.0);
///
/// let x = DynVector::from_slice(&[1.0, 1.0, 1.0]);
/// let y = m.mul_vec(&x);
/// assert_eq!(y.as_slice(), &[2.0, 3.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMat<T> {
    rows: Vec<SparseVec<T>>,
    nrows: usize,
    ncols: usize,
}

impl<T: Scalar> SparseMat<T> {
    /// Create an `nrows x ncols` zero matrix.
    ///
    /// The `_zero` parameter is only used for type inference.
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Self {
        assert!(nrows > 0 && ncols > 0, "matrix dimensions must be positive");
        Self {
            rows: (0..nrows).map(|_| SparseVec::zeros(ncols)).collect(),
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    pub fn eye(n: usize, _zero: T) -> Self {
        Self::scaled_eye(n, T::one())
    }

    /// Create an `n x n` scaled identity matrix `k * I`.
    pub fn scaled_eye(n: usize, k: T) -> Self {
        assert!(n > 0, "matrix dimensions must be positive");
        Self {
            rows: (0..n).map(|i| SparseVec::unit(n, i, k)).collect(),
            nrows: n,
            ncols: n,
        }
    }

    /// Create a matrix with every element equal to `k`.
    pub fn fill(nrows: usize, ncols: usize, k: T) -> Self {
        assert!(nrows > 0 && ncols > 0, "matrix dimensions must be positive");
        Self {
            rows: (0..nrows).map(|_| SparseVec::fill(ncols, k)).collect(),
            nrows,
            ncols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Read element `(i, j)`; absent entries read as zero.
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.nrows, "row {i} out of range for {} rows", self.nrows);
        self.rows[i].get(j)
    }

    /// Write element `(i, j)`. O(nnz of the row); not for hot loops.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.nrows, "row {i} out of range for {} rows", self.nrows);
        self.rows[i].set(j, value);
    }

    /// The rows as a slice of sparse vectors.
    #[inline]
    pub fn rows(&self) -> &[SparseVec<T>] {
        &self.rows
    }

    /// Replace row `i`. The new row's logical length must equal the
    /// column count.
    pub fn set_row(&mut self, i: usize, row: SparseVec<T>) {
        assert!(i < self.nrows, "row {i} out of range for {} rows", self.nrows);
        assert_eq!(row.len(), self.ncols, "row length mismatch");
        self.rows[i] = row;
    }

    /// Expand into an owning dense matrix.
    pub fn to_dense(&self) -> DynMatrix<T> {
        let mut m = DynMatrix::zeros(self.nrows, self.ncols, T::zero());
        for (i, row) in self.rows.iter().enumerate() {
            for p in row.pairs() {
                m[(i, p.index)] = p.value;
            }
        }
        m
    }

    /// Sparse matrix-vector product.
    pub fn mul_vec(&self, x: &DynVector<T>) -> DynVector<T> {
        assert_eq!(
            self.ncols,
            x.len(),
            "matvec shape mismatch: {}x{} * vec({})",
            self.nrows,
            self.ncols,
            x.len()
        );
        let mut y = DynVector::zeros(self.nrows, T::zero());
        for (i, row) in self.rows.iter().enumerate() {
            y[i] = row.dot_dense(x);
        }
        y
    }

    /// Transpose: rebuilds the row encoding column-by-column.
    pub fn transpose(&self) -> Self {
        let mut cols: Vec<Vec<(usize, T)>> = (0..self.ncols).map(|_| Vec::new()).collect();
        for (i, row) in self.rows.iter().enumerate() {
            for p in row.pairs() {
                cols[p.index].push((i, p.value));
            }
        }
        let rows = cols
            .into_iter()
            .map(|entries| {
                // Entries arrive in increasing source-row order
                let mut v = SparseVec::zeros(self.nrows);
                v.pairs = entries
                    .into_iter()
                    .map(|(i, value)| super::SparsePair::new(i, value))
                    .collect();
                v
            })
            .collect();
        Self {
            rows,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }
}

impl<T: FloatScalar> SparseMat<T> {
    /// Build from a dense matrix, suppressing entries with |x| <= `fuzz`.
    pub fn from_dense(m: &DynMatrix<T>, fuzz: T) -> Self {
        let rows = (0..m.nrows())
            .map(|i| {
                let mut b = SparseVecBuilder::with_fuzz(m.ncols(), fuzz);
                for j in 0..m.ncols() {
                    b.push(j, m[(i, j)]);
                }
                b.finish()
            })
            .collect();
        Self {
            rows,
            nrows: m.nrows(),
            ncols: m.ncols(),
        }
    }

    /// Sparse matrix-matrix product.
    ///
    /// Each output row is the fuzz-free merge of the rhs rows selected and
    /// scaled by this matrix's stored entries.
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        assert_eq!(
            self.ncols, rhs.nrows,
            "matmul shape mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols
        );
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut acc = SparseVec::zeros(rhs.ncols);
                for p in row.pairs() {
                    acc += &(&rhs.rows[p.index] * p.value);
                }
                acc
            })
            .collect();
        Self {
            rows,
            nrows: self.nrows,
            ncols: rhs.ncols,
        }
    }
}

// ── Row indexing ────────────────────────────────────────────────────

impl<T> Index<usize> for SparseMat<T> {
    type Output = SparseVec<T>;

    #[inline]
    fn index(&self, i: usize) -> &SparseVec<T> {
        &self.rows[i]
    }
}

impl<T> IndexMut<usize> for SparseMat<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut SparseVec<T> {
        &mut self.rows[i]
    }
}

// ── Arithmetic (row-wise merges) ────────────────────────────────────

fn assert_same_shape<T>(a: &SparseMat<T>, b: &SparseMat<T>) {
    assert!(
        a.nrows == b.nrows && a.ncols == b.ncols,
        "shape mismatch: {}x{} vs {}x{}",
        a.nrows,
        a.ncols,
        b.nrows,
        b.ncols
    );
}

impl<T: Scalar> Add for &SparseMat<T> {
    type Output = SparseMat<T>;

    fn add(self, rhs: Self) -> SparseMat<T> {
        assert_same_shape(self, rhs);
        SparseMat {
            rows: self
                .rows
                .iter()
                .zip(rhs.rows.iter())
                .map(|(a, b)| a + b)
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> AddAssign<&SparseMat<T>> for SparseMat<T> {
    fn add_assign(&mut self, rhs: &SparseMat<T>) {
        *self = &*self + rhs;
    }
}

impl<T: Scalar> Sub for &SparseMat<T> {
    type Output = SparseMat<T>;

    fn sub(self, rhs: Self) -> SparseMat<T> {
        assert_same_shape(self, rhs);
        SparseMat {
            rows: self
                .rows
                .iter()
                .zip(rhs.rows.iter())
                .map(|(a, b)| a - b)
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> SubAssign<&SparseMat<T>> for SparseMat<T> {
    fn sub_assign(&mut self, rhs: &SparseMat<T>) {
        *self = &*self - rhs;
    }
}

impl<T: Scalar> Neg for &SparseMat<T> {
    type Output = SparseMat<T>;

    fn neg(self) -> SparseMat<T> {
        SparseMat {
            rows: self.rows.iter().map(|r| -r).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Mul<T> for &SparseMat<T> {
    type Output = SparseMat<T>;

    fn mul(self, rhs: T) -> SparseMat<T> {
        SparseMat {
            rows: self.rows.iter().map(|r| r * rhs).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Div<T> for &SparseMat<T> {
    type Output = SparseMat<T>;

    fn div(self, rhs: T) -> SparseMat<T> {
        SparseMat {
            rows: self.rows.iter().map(|r| r / rhs).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> SparseMat<T> {
    /// Element-wise (Hadamard) product, row by row.
    pub fn element_mul(&self, rhs: &Self) -> Self {
        assert_same_shape(self, rhs);
        Self {
            rows: self
                .rows
                .iter()
                .zip(rhs.rows.iter())
                .map(|(a, b)| a.element_mul(b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise division over stored entries, row by row.
    pub fn element_div(&self, rhs: &Self) -> Self {
        assert_same_shape(self, rhs);
        Self {
            rows: self
                .rows
                .iter()
                .zip(rhs.rows.iter())
                .map(|(a, b)| a.element_div(b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Textual I/O ─────────────────────────────────────────────────────

impl<T: Scalar + fmt::Display> fmt::Display for SparseMat<T> {
    /// Dense bracketed style, one bracketed row per matrix row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in &self.rows {
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}

impl<T: FloatScalar + FromStr> FromStr for SparseMat<T> {
    type Err = ParseMatrixError;

    /// Parse from the dense bracketed style `[[0 2][3 0]]`; exact zeros
    /// are not stored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dense: DynMatrix<T> = s.parse()?;
        Ok(Self::from_dense(&dense, T::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> SparseMat<f64> {
        // [[2 0 0], [0 3 0], [1 0 4]]
        let mut m = SparseMat::zeros(3, 3, 0.0);
        m.set(0, 0, 2.0);
        m.set(1, 1, 3.0);
        m.set(2, 0, 1.0);
        m.set(2, 2, 4.0);
        m
    }

    #[test]
    fn zeros_and_eye() {
        let z = SparseMat::zeros(2, 3, 0.0_f64);
        assert_eq!(z.nrows(), 2);
        assert_eq!(z.ncols(), 3);
        assert_eq!(z.get(1, 2), 0.0);

        let id = SparseMat::eye(3, 0.0_f64);
        assert_eq!(id.get(1, 1), 1.0);
        assert_eq!(id.get(0, 1), 0.0);

        let s = SparseMat::scaled_eye(2, 5.0);
        assert_eq!(s.get(0, 0), 5.0);
    }

    #[test]
    fn row_indexing() {
        let m = small();
        assert_eq!(m[2].get(0), 1.0);
        assert_eq!(m[2].nnz(), 2);
    }

    #[test]
    fn row_invariant_on_set_row() {
        let mut m = SparseMat::zeros(2, 4, 0.0);
        m.set_row(0, SparseVec::from_pairs(4, &[(3, 1.0)]));
        assert_eq!(m.get(0, 3), 1.0);
    }

    #[test]
    #[should_panic(expected = "row length mismatch")]
    fn set_row_wrong_length() {
        let mut m = SparseMat::zeros(2, 4, 0.0);
        m.set_row(0, SparseVec::from_pairs(3, &[(1, 1.0)]));
    }

    #[test]
    fn dense_roundtrip() {
        let m = small();
        let d = m.to_dense();
        assert_eq!(d[(0, 0)], 2.0);
        assert_eq!(d[(2, 2)], 4.0);
        assert_eq!(d[(0, 1)], 0.0);

        let back = SparseMat::from_dense(&d, 0.0);
        assert_eq!(back, m);
    }

    #[test]
    fn matvec() {
        let m = small();
        let x = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        let y = m.mul_vec(&x);
        assert_eq!(y.as_slice(), &[2.0, 6.0, 13.0]);
    }

    #[test]
    fn matvec_matches_dense() {
        let m = small();
        let x = DynVector::from_slice(&[0.5, -1.0, 2.0]);
        let dense = m.to_dense().vecmul(&x);
        let sparse = m.mul_vec(&x);
        for i in 0..3 {
            assert!((dense[i] - sparse[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn transpose_roundtrip() {
        let m = small();
        let t = m.transpose();
        assert_eq!(t.get(0, 2), 1.0);
        assert_eq!(t.get(2, 2), 4.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn add_sub_neg() {
        let m = small();
        let s = &m + &m;
        assert_eq!(s.get(0, 0), 4.0);
        let z = &s - &m;
        assert_eq!(z, m);
        let n = -&m;
        assert_eq!(n.get(2, 2), -4.0);
    }

    #[test]
    fn scalar_mul_div() {
        let m = &small() * 2.0;
        assert_eq!(m.get(1, 1), 6.0);
        let d = &m / 2.0;
        assert_eq!(d, small());
    }

    #[test]
    fn element_mul_rowwise() {
        let m = small();
        let sq = m.element_mul(&m);
        assert_eq!(sq.get(0, 0), 4.0);
        assert_eq!(sq.get(2, 2), 16.0);
        assert_eq!(sq.get(0, 1), 0.0);
    }

    #[test]
    fn matmul_matches_dense() {
        let a = small();
        let id = SparseMat::eye(3, 0.0);
        assert_eq!(a.mul_mat(&id), a);

        let b = SparseMat::from_dense(
            &DynMatrix::from_rows(3, 2, &[1.0, 0.0, 0.0, 2.0, 1.0, 1.0]),
            0.0,
        );
        let c = a.mul_mat(&b);
        let expected = &a.to_dense() * &b.to_dense();
        assert_eq!(c.to_dense(), expected);
    }

    #[test]
    fn display_parse_roundtrip() {
        let m = small();
        let s = format!("{}", m);
        assert_eq!(s, "[[2 0 0][0 3 0][1 0 4]]");
        let parsed: SparseMat<f64> = s.parse().unwrap();
        assert_eq!(parsed, m);
    }
}
