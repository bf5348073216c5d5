use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use alloc::vec::Vec;

use crate::dynmatrix::DynVector;
use crate::matrix::util::ParseMatrixError;
use crate::traits::{FloatScalar, Scalar};

use super::{SparsePair, SparseVec, SparseVecBuilder};

// ── One-pass merge over two sorted pair lists ───────────────────────

/// Merge two sparse vectors element-wise through `f`, treating absent
/// entries as zero. The result is sorted and pruned of exact zeros.
fn merge<T: Scalar>(a: &SparseVec<T>, b: &SparseVec<T>, f: impl Fn(T, T) -> T) -> SparseVec<T> {
    assert_eq!(a.len, b.len, "vector length mismatch");
    let mut out: Vec<SparsePair<T>> = Vec::with_capacity(a.pairs.len() + b.pairs.len());
    let (mut i, mut j) = (0, 0);
    while i < a.pairs.len() || j < b.pairs.len() {
        let (index, value) = if j >= b.pairs.len()
            || (i < a.pairs.len() && a.pairs[i].index < b.pairs[j].index)
        {
            let p = a.pairs[i];
            i += 1;
            (p.index, f(p.value, T::zero()))
        } else if i >= a.pairs.len() || b.pairs[j].index < a.pairs[i].index {
            let p = b.pairs[j];
            j += 1;
            (p.index, f(T::zero(), p.value))
        } else {
            let (pa, pb) = (a.pairs[i], b.pairs[j]);
            i += 1;
            j += 1;
            (pa.index, f(pa.value, pb.value))
        };
        if value != T::zero() {
            out.push(SparsePair::new(index, value));
        }
    }
    SparseVec {
        len: a.len,
        pairs: out,
    }
}

// ── Element-wise arithmetic ─────────────────────────────────────────

impl<T: Scalar> Add for &SparseVec<T> {
    type Output = SparseVec<T>;

    fn add(self, rhs: Self) -> SparseVec<T> {
        merge(self, rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Add for SparseVec<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> AddAssign<&SparseVec<T>> for SparseVec<T> {
    fn add_assign(&mut self, rhs: &SparseVec<T>) {
        *self = &*self + rhs;
    }
}

impl<T: Scalar> Sub for &SparseVec<T> {
    type Output = SparseVec<T>;

    fn sub(self, rhs: Self) -> SparseVec<T> {
        merge(self, rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Sub for SparseVec<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> SubAssign<&SparseVec<T>> for SparseVec<T> {
    fn sub_assign(&mut self, rhs: &SparseVec<T>) {
        *self = &*self - rhs;
    }
}

impl<T: Scalar> Neg for &SparseVec<T> {
    type Output = SparseVec<T>;

    fn neg(self) -> SparseVec<T> {
        SparseVec {
            len: self.len,
            pairs: self
                .pairs
                .iter()
                .map(|p| SparsePair::new(p.index, T::zero() - p.value))
                .collect(),
        }
    }
}

impl<T: Scalar> Neg for SparseVec<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<T: Scalar> SparseVec<T> {
    /// Element-wise (Hadamard) product. Only indices stored in both
    /// operands can survive.
    pub fn element_mul(&self, rhs: &Self) -> Self {
        merge(self, rhs, |a, b| a * b)
    }

    /// Element-wise division over the stored entries of either operand.
    ///
    /// Indices absent from both operands stay (logically) zero; a stored
    /// entry divided by an absent one produces the float division-by-zero
    /// result.
    pub fn element_div(&self, rhs: &Self) -> Self {
        merge(self, rhs, |a, b| a / b)
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar> Mul<T> for &SparseVec<T> {
    type Output = SparseVec<T>;

    fn mul(self, rhs: T) -> SparseVec<T> {
        SparseVec {
            len: self.len,
            pairs: self
                .pairs
                .iter()
                .map(|p| SparsePair::new(p.index, p.value * rhs))
                .filter(|p| p.value != T::zero())
                .collect(),
        }
    }
}

impl<T: Scalar> Mul<T> for SparseVec<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> MulAssign<T> for SparseVec<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = &*self * rhs;
    }
}

impl<T: Scalar> Div<T> for &SparseVec<T> {
    type Output = SparseVec<T>;

    fn div(self, rhs: T) -> SparseVec<T> {
        SparseVec {
            len: self.len,
            pairs: self
                .pairs
                .iter()
                .map(|p| SparsePair::new(p.index, p.value / rhs))
                .filter(|p| p.value != T::zero())
                .collect(),
        }
    }
}

impl<T: Scalar> Div<T> for SparseVec<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

impl<T: Scalar> DivAssign<T> for SparseVec<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = &*self / rhs;
    }
}

// ── Dot products and norms ──────────────────────────────────────────

impl<T: Scalar> SparseVec<T> {
    /// Dot product of two sparse vectors.
    ///
    /// Walks the shorter pair list, binary-jumping through the other via
    /// the cursor protocol.
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len, rhs.len, "vector length mismatch");
        let (walk, probe) = if self.pairs.len() <= rhs.pairs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut cursor = probe.cursor();
        let mut sum = T::zero();
        for p in walk.pairs() {
            if cursor.advance_to(p.index) {
                sum = sum + p.value * cursor.value();
            }
        }
        sum
    }

    /// Dot product against a dense vector.
    pub fn dot_dense(&self, rhs: &DynVector<T>) -> T {
        assert_eq!(self.len, rhs.len(), "vector length mismatch");
        let mut sum = T::zero();
        for p in self.pairs() {
            sum = sum + p.value * rhs[p.index];
        }
        sum
    }

    /// Squared L2 norm.
    pub fn norm_squared(&self) -> T {
        let mut sum = T::zero();
        for p in self.pairs() {
            sum = sum + p.value * p.value;
        }
        sum
    }
}

impl<T: FloatScalar> SparseVec<T> {
    /// L2 (Euclidean) norm.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Return a unit vector in the same direction.
    ///
    /// The vector must be non-zero.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        assert!(n > T::zero(), "cannot normalize a zero-length vector");
        self * (T::one() / n)
    }
}

// ── Textual I/O ─────────────────────────────────────────────────────
//
// The dense style round-trips through the same grammar as DynVector; the
// compact style prints `len:[index:value ...]`. Both parse.

impl<T: Scalar + fmt::Display> fmt::Display for SparseVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut cursor = self.cursor();
        for i in 0..self.len {
            if i > 0 {
                write!(f, " ")?;
            }
            cursor.step(i);
            if cursor.exists(i) {
                write!(f, "{}", cursor.value())?;
            } else {
                write!(f, "0")?;
            }
        }
        write!(f, "]")
    }
}

/// Adapter printing only the non-zero pairs: `5:[1:5 4:2]`.
///
/// Obtained from [`SparseVec::display_compact`]; parses back via the same
/// `FromStr` as the dense style.
pub struct CompactSparseVec<'a, T>(&'a SparseVec<T>);

impl<T: fmt::Display> fmt::Display for CompactSparseVec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:[", self.0.len)?;
        for (k, p) in self.0.pairs.iter().enumerate() {
            if k > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", p.index, p.value)?;
        }
        write!(f, "]")
    }
}

impl<T> SparseVec<T> {
    /// Display adapter for the compact non-zero-pairs style.
    pub fn display_compact(&self) -> CompactSparseVec<'_, T> {
        CompactSparseVec(self)
    }
}

impl<T: FloatScalar + FromStr> FromStr for SparseVec<T> {
    type Err = ParseMatrixError;

    /// Parse either style: dense `[0 5 0 0 2]` or compact `5:[1:5 4:2]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(body) = s.strip_prefix('[') {
            // Dense style
            let body = body.strip_suffix(']').ok_or(ParseMatrixError)?;
            let mut elts = Vec::new();
            for tok in body.split_whitespace() {
                elts.push(tok.parse::<T>().map_err(|_| ParseMatrixError)?);
            }
            if elts.is_empty() {
                return Err(ParseMatrixError);
            }
            let mut b = SparseVecBuilder::new(elts.len());
            for (i, v) in elts.into_iter().enumerate() {
                b.push(i, v);
            }
            return Ok(b.finish());
        }

        // Compact style: len:[i:v ...]
        let (len_str, rest) = s.split_once(':').ok_or(ParseMatrixError)?;
        let len: usize = len_str.trim().parse().map_err(|_| ParseMatrixError)?;
        if len == 0 {
            return Err(ParseMatrixError);
        }
        let body = rest
            .trim()
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'))
            .ok_or(ParseMatrixError)?;
        let mut b = SparseVecBuilder::new(len);
        for tok in body.split_whitespace() {
            let (i_str, v_str) = tok.split_once(':').ok_or(ParseMatrixError)?;
            let i: usize = i_str.parse().map_err(|_| ParseMatrixError)?;
            let v: T = v_str.parse().map_err(|_| ParseMatrixError)?;
            if i >= len {
                return Err(ParseMatrixError);
            }
            b.push(i, v);
        }
        Ok(b.finish())
    }
}
