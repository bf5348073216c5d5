//! Sparse vectors and matrices.
//!
//! A [`SparseVec`] stores an ordered, strictly-increasing-by-index sequence
//! of (index, value) pairs over a fixed logical length. Values with
//! magnitude at or below an explicit *fuzz* threshold are suppressed at
//! construction and pruning sites; the threshold is always passed in
//! (defaulting to exact zero), never global state. A [`SparseMat`] stores
//! one sparse row per matrix row.

mod builder;
mod cursor;
mod matrix;
mod ops;

pub use builder::SparseVecBuilder;
pub use cursor::SparseCursor;
pub use matrix::SparseMat;
pub use ops::CompactSparseVec;

use alloc::vec::Vec;

use crate::dynmatrix::DynVector;
use crate::traits::{FloatScalar, Scalar};

/// One stored non-zero element of a sparse vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparsePair<T> {
    /// Logical index of the element.
    pub index: usize,
    /// The element value.
    pub value: T,
}

impl<T> SparsePair<T> {
    #[inline]
    pub fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }
}

/// Sparse vector: logical length plus a sorted list of non-zero pairs.
///
/// Invariants: pair indices are strictly increasing and below `len`; no
/// stored value equals zero (values below a caller-supplied fuzz are
/// suppressed where a fuzz is threaded through).
///
/// # Examples
///
/// ```
/// use lineal::SparseVec;
///
/// let v = SparseVec::from_pairs(5, &[(1, 5.0), (4, 2.0)]);
/// assert_eq!(v.get(1), 5.0);
/// assert_eq!(v.get(2), 0.0); // absent index reads as zero
/// assert_eq!(v.nnz(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVec<T> {
    pub(crate) len: usize,
    pub(crate) pairs: Vec<SparsePair<T>>,
}

impl<T: Scalar> SparseVec<T> {
    /// Zero vector of logical length `n`.
    pub fn zeros(n: usize) -> Self {
        assert!(n > 0, "vector length must be positive");
        Self {
            len: n,
            pairs: Vec::new(),
        }
    }

    /// Vector of logical length `n` with every element equal to `k`.
    ///
    /// A zero `k` produces an empty pair list.
    pub fn fill(n: usize, k: T) -> Self {
        assert!(n > 0, "vector length must be positive");
        let pairs = if k == T::zero() {
            Vec::new()
        } else {
            (0..n).map(|i| SparsePair::new(i, k)).collect()
        };
        Self { len: n, pairs }
    }

    /// Unit vector of length `n` along `axis`, scaled by `k`.
    pub fn unit(n: usize, axis: usize, k: T) -> Self {
        assert!(axis < n, "unit axis {axis} out of range for length {n}");
        let pairs = if k == T::zero() {
            Vec::new()
        } else {
            alloc::vec![SparsePair::new(axis, k)]
        };
        Self { len: n, pairs }
    }

    /// Logical element count.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true; sparse vectors have positive logical length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of stored non-zero pairs.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.pairs.len()
    }

    /// The stored pairs, sorted by index.
    #[inline]
    pub fn pairs(&self) -> &[SparsePair<T>] {
        &self.pairs
    }

    /// Read element `i`; absent indices read as zero.
    ///
    /// O(log n) via binary search. Use a [`SparseCursor`] for traversals —
    /// per-element `get` in a loop costs a search each call.
    pub fn get(&self, i: usize) -> T {
        assert!(i < self.len, "index {i} out of range for length {}", self.len);
        match self.pairs.binary_search_by_key(&i, |p| p.index) {
            Ok(pos) => self.pairs[pos].value,
            Err(_) => T::zero(),
        }
    }

    /// Write element `i`. Exact zeros remove the stored pair.
    ///
    /// O(n) on insert/remove; not for hot loops — use the builder for bulk
    /// construction.
    pub fn set(&mut self, i: usize, value: T) {
        assert!(i < self.len, "index {i} out of range for length {}", self.len);
        match self.pairs.binary_search_by_key(&i, |p| p.index) {
            Ok(pos) => {
                if value == T::zero() {
                    self.pairs.remove(pos);
                } else {
                    self.pairs[pos].value = value;
                }
            }
            Err(pos) => {
                if value != T::zero() {
                    self.pairs.insert(pos, SparsePair::new(i, value));
                }
            }
        }
    }

    /// Overlay: `other`'s entries win wherever present, else this vector's.
    ///
    /// ```
    /// use lineal::SparseVec;
    /// let a = SparseVec::from_pairs(4, &[(0, 1.0), (2, 3.0)]);
    /// let b = SparseVec::from_pairs(4, &[(2, 9.0), (3, 4.0)]);
    /// let c = a.overlay(&b);
    /// assert_eq!(c.get(0), 1.0);
    /// assert_eq!(c.get(2), 9.0);
    /// assert_eq!(c.get(3), 4.0);
    /// ```
    pub fn overlay(&self, other: &Self) -> Self {
        assert_eq!(self.len, other.len, "vector length mismatch");
        let mut out = Vec::with_capacity(self.pairs.len() + other.pairs.len());
        let (mut i, mut j) = (0, 0);
        while i < self.pairs.len() || j < other.pairs.len() {
            if j >= other.pairs.len() {
                out.push(self.pairs[i]);
                i += 1;
            } else if i >= self.pairs.len() {
                out.push(other.pairs[j]);
                j += 1;
            } else if self.pairs[i].index < other.pairs[j].index {
                out.push(self.pairs[i]);
                i += 1;
            } else if self.pairs[i].index > other.pairs[j].index {
                out.push(other.pairs[j]);
                j += 1;
            } else {
                out.push(other.pairs[j]);
                i += 1;
                j += 1;
            }
        }
        Self {
            len: self.len,
            pairs: out,
        }
    }

    /// Expand into an owning dense vector; absent indices become exact zero.
    pub fn to_dense(&self) -> DynVector<T> {
        let mut v = DynVector::zeros(self.len, T::zero());
        for p in &self.pairs {
            v[p.index] = p.value;
        }
        v
    }
}

impl<T: FloatScalar> SparseVec<T> {
    /// Build from (index, value) pairs in strictly increasing index order.
    ///
    /// Exact zeros are skipped. Panics on out-of-order or out-of-range
    /// indices.
    pub fn from_pairs(n: usize, pairs: &[(usize, T)]) -> Self {
        let mut b = SparseVecBuilder::new(n);
        for &(i, v) in pairs {
            b.push(i, v);
        }
        b.finish()
    }

    /// Build from a dense vector, suppressing entries with |x| <= `fuzz`.
    ///
    /// ```
    /// use lineal::{DynVector, SparseVec};
    /// let d = DynVector::from_slice(&[0.0, 5.0, 1e-9, 0.0, 2.0]);
    /// let s = SparseVec::from_dense(&d, 1e-6);
    /// assert_eq!(s.nnz(), 2);
    /// assert_eq!(s.get(2), 0.0);
    /// ```
    pub fn from_dense(v: &DynVector<T>, fuzz: T) -> Self {
        let mut b = SparseVecBuilder::with_fuzz(v.len(), fuzz);
        for i in 0..v.len() {
            b.push(i, v[i]);
        }
        b.finish()
    }

    /// Copy with entries of magnitude <= `fuzz` removed.
    pub fn prune(&self, fuzz: T) -> Self {
        Self {
            len: self.len,
            pairs: self
                .pairs
                .iter()
                .filter(|p| p.value.abs() > fuzz)
                .copied()
                .collect(),
        }
    }
}
