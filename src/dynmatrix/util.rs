use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::matrix::util::{bracket_body, ParseMatrixError};
use crate::traits::{FloatScalar, Scalar};

use super::vector::DynVector;
use super::DynMatrix;

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        let mut s = T::zero();
        for x in self.iter() {
            s = s + *x;
        }
        s
    }
}

// ── Element-wise operations ─────────────────────────────────────────

impl<T> DynMatrix<T> {
    /// Apply a function to every element, producing a new matrix.
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> DynMatrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.iter().map(|&x| f(x)).collect();
        DynMatrix::<U> {
            data,
            nrows: self.nrows(),
            ncols: self.ncols(),
        }
    }
}

impl<T: FloatScalar> DynMatrix<T> {
    /// Element-wise absolute value.
    pub fn abs(&self) -> Self {
        self.map(|x| x.abs())
    }
}

// ── Row / Column manipulation ───────────────────────────────────────

impl<T: Copy> DynMatrix<T> {
    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            for j in 0..self.ncols() {
                let tmp = self[(a, j)];
                self[(a, j)] = self[(b, j)];
                self[(b, j)] = tmp;
            }
        }
    }

    /// Swap two columns in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        if a != b {
            for i in 0..self.nrows() {
                let tmp = self[(i, a)];
                self[(i, a)] = self[(i, b)];
                self[(i, b)] = tmp;
            }
        }
    }
}

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Extract row `i` as a vector.
    pub fn row(&self, i: usize) -> DynVector<T> {
        DynVector::from_slice(self.row_slice(i))
    }

    /// Set row `i` from a vector.
    pub fn set_row(&mut self, i: usize, v: &DynVector<T>) {
        assert_eq!(v.len(), self.ncols(), "row length mismatch");
        self.row_slice_mut(i).copy_from_slice(v.as_slice());
    }

    /// Extract column `j` as a vector.
    pub fn col(&self, j: usize) -> DynVector<T> {
        let mut v = DynVector::zeros(self.nrows(), T::zero());
        for i in 0..self.nrows() {
            v[i] = self[(i, j)];
        }
        v
    }

    /// Set column `j` from a vector.
    pub fn set_col(&mut self, j: usize, v: &DynVector<T>) {
        assert_eq!(v.len(), self.nrows(), "column length mismatch");
        for i in 0..self.nrows() {
            self[(i, j)] = v[i];
        }
    }
}

// ── Textual I/O ─────────────────────────────────────────────────────
//
// Same bracketed grammar as the fixed types; the runtime dimensions are
// recovered from the literal itself.

impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.nrows() {
            write!(f, "[")?;
            for j in 0..self.ncols() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self[(i, j)])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Display> fmt::Display for DynVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.inner.ncols() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self[i])?;
        }
        write!(f, "]")
    }
}

impl<T: Scalar + FromStr> FromStr for DynVector<T> {
    type Err = ParseMatrixError;

    /// Parse a vector from `[1 2 3]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = bracket_body(s).ok_or(ParseMatrixError)?;
        let mut elts = Vec::new();
        for tok in body.split_whitespace() {
            elts.push(tok.parse().map_err(|_| ParseMatrixError)?);
        }
        if elts.is_empty() {
            return Err(ParseMatrixError);
        }
        Ok(DynVector::from_vec(elts))
    }
}

impl<T: Scalar + FromStr> FromStr for DynMatrix<T> {
    type Err = ParseMatrixError;

    /// Parse a matrix from `[[1 2][3 4]]`. All rows must have the same
    /// number of elements.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = bracket_body(s).ok_or(ParseMatrixError)?;
        let mut rows: Vec<Vec<T>> = Vec::new();
        let mut rest = body.trim();
        while !rest.is_empty() {
            let open = rest.find('[').ok_or(ParseMatrixError)?;
            let close = rest.find(']').ok_or(ParseMatrixError)?;
            if open != 0 || close < open {
                return Err(ParseMatrixError);
            }
            let mut row = Vec::new();
            for tok in rest[open + 1..close].split_whitespace() {
                row.push(tok.parse().map_err(|_| ParseMatrixError)?);
            }
            rows.push(row);
            rest = rest[close + 1..].trim_start();
        }
        let nrows = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        if nrows == 0 || ncols == 0 || rows.iter().any(|r| r.len() != ncols) {
            return Err(ParseMatrixError);
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend(row);
        }
        Ok(DynMatrix::from_vec(nrows, ncols, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum() {
        let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.sum(), 10.0);
    }

    #[test]
    fn map_and_abs() {
        let m = DynMatrix::from_rows(2, 2, &[1.0_f64, -2.0, -3.0, 4.0]);
        let a = m.abs();
        assert_eq!(a[(0, 1)], 2.0);
        assert_eq!(a[(1, 0)], 3.0);

        let doubled = m.map(|x| x * 2.0);
        assert_eq!(doubled[(1, 1)], 8.0);
    }

    #[test]
    fn swap_rows_cols() {
        let mut m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.swap_rows(0, 1);
        assert_eq!(m[(0, 0)], 3.0);
        m.swap_cols(0, 1);
        assert_eq!(m[(0, 0)], 4.0);
    }

    #[test]
    fn row_col_access() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let r = m.row(1);
        assert_eq!(r.as_slice(), &[4.0, 5.0, 6.0]);
        let c = m.col(2);
        assert_eq!(c.as_slice(), &[3.0, 6.0]);
    }

    #[test]
    fn set_row_col() {
        let mut m = DynMatrix::zeros(2, 2, 0.0_f64);
        m.set_row(0, &DynVector::from_slice(&[1.0, 2.0]));
        m.set_col(1, &DynVector::from_slice(&[7.0, 8.0]));
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 7.0);
        assert_eq!(m[(1, 1)], 8.0);
    }

    #[test]
    fn display_matrix() {
        let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.5]);
        assert_eq!(format!("{}", m), "[[1 2][3 4.5]]");
    }

    #[test]
    fn display_vector() {
        let v = DynVector::from_slice(&[1.0, -2.0, 3.0]);
        assert_eq!(format!("{}", v), "[1 -2 3]");
    }

    #[test]
    fn parse_matrix_roundtrip() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.5, -3.0, 4.0, 5.0, 6.0]);
        let parsed: DynMatrix<f64> = format!("{}", m).parse().unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn parse_vector_roundtrip() {
        let v = DynVector::from_slice(&[1.5, -2.0, 0.0]);
        let parsed: DynVector<f64> = format!("{}", v).parse().unwrap();
        assert_eq!(parsed, v);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let r: Result<DynMatrix<f64>, _> = "[[1 2][3]]".parse();
        assert!(r.is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("[1 x 3]".parse::<DynVector<f64>>().is_err());
        assert!("1 2 3".parse::<DynVector<f64>>().is_err());
    }
}
