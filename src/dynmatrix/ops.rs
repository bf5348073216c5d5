use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::vector::DynVector;
use super::DynMatrix;

fn assert_same_shape<T>(a: &DynMatrix<T>, b: &DynMatrix<T>) {
    assert!(
        a.nrows() == b.nrows() && a.ncols() == b.ncols(),
        "shape mismatch: {}x{} vs {}x{}",
        a.nrows(),
        a.ncols(),
        b.nrows(),
        b.ncols()
    );
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add for DynMatrix<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        assert_same_shape(&self, &rhs);
        for (a, b) in self.iter_mut().zip(rhs.iter()) {
            *a = *a + *b;
        }
        self
    }
}

impl<T: Scalar> Add<&DynMatrix<T>> for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn add(mut self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_same_shape(&self, rhs);
        for (a, b) in self.iter_mut().zip(rhs.iter()) {
            *a = *a + *b;
        }
        self
    }
}

impl<T: Scalar> Add<DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn add(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        rhs + self
    }
}

impl<T: Scalar> Add<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn add(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        self.clone() + rhs
    }
}

impl<T: Scalar> AddAssign for DynMatrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

impl<T: Scalar> AddAssign<&DynMatrix<T>> for DynMatrix<T> {
    fn add_assign(&mut self, rhs: &DynMatrix<T>) {
        assert_same_shape(self, rhs);
        for (a, b) in self.iter_mut().zip(rhs.iter()) {
            *a = *a + *b;
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub for DynMatrix<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        assert_same_shape(&self, &rhs);
        for (a, b) in self.iter_mut().zip(rhs.iter()) {
            *a = *a - *b;
        }
        self
    }
}

impl<T: Scalar> Sub<&DynMatrix<T>> for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn sub(mut self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_same_shape(&self, rhs);
        for (a, b) in self.iter_mut().zip(rhs.iter()) {
            *a = *a - *b;
        }
        self
    }
}

impl<T: Scalar> Sub<DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn sub(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        self.clone() - rhs
    }
}

impl<T: Scalar> Sub<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn sub(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        self.clone() - rhs
    }
}

impl<T: Scalar> SubAssign for DynMatrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

impl<T: Scalar> SubAssign<&DynMatrix<T>> for DynMatrix<T> {
    fn sub_assign(&mut self, rhs: &DynMatrix<T>) {
        assert_same_shape(self, rhs);
        for (a, b) in self.iter_mut().zip(rhs.iter()) {
            *a = *a - *b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for DynMatrix<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for a in self.iter_mut() {
            *a = T::zero() - *a;
        }
        self
    }
}

impl<T: Scalar> Neg for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        self.clone().neg()
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul for DynMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&DynMatrix<T>> for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            self.ncols(),
            rhs.nrows(),
            "matmul shape mismatch: {}x{} * {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols()
        );
        let m = self.nrows();
        let n = self.ncols();
        let p = rhs.ncols();
        let mut out = DynMatrix::zeros(m, p, T::zero());
        for i in 0..m {
            for j in 0..p {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum + self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        out
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar> Mul<T> for DynMatrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        for a in self.iter_mut() {
            *a = *a * rhs;
        }
        self
    }
}

impl<T: Scalar> Mul<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: T) -> DynMatrix<T> {
        self.clone() * rhs
    }
}

impl<T: Scalar> MulAssign<T> for DynMatrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for a in self.iter_mut() {
            *a = *a * rhs;
        }
    }
}

impl<T: Scalar> Div<T> for DynMatrix<T> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        for a in self.iter_mut() {
            *a = *a / rhs;
        }
        self
    }
}

impl<T: Scalar> Div<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn div(self, rhs: T) -> DynMatrix<T> {
        self.clone() / rhs
    }
}

impl<T: Scalar> DivAssign<T> for DynMatrix<T> {
    fn div_assign(&mut self, rhs: T) {
        for a in self.iter_mut() {
            *a = *a / rhs;
        }
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul_dyn {
    ($($t:ty),*) => {
        $(
            impl Mul<DynMatrix<$t>> for $t {
                type Output = DynMatrix<$t>;

                fn mul(self, rhs: DynMatrix<$t>) -> DynMatrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&DynMatrix<$t>> for $t {
                type Output = DynMatrix<$t>;

                fn mul(self, rhs: &DynMatrix<$t>) -> DynMatrix<$t> {
                    rhs.clone() * self
                }
            }
        )*
    };
}

impl_scalar_mul_dyn!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Element-wise multiplication / division, transpose, vecmul ───────

impl<T: Scalar> DynMatrix<T> {
    /// Element-wise (Hadamard) product: `c[i][j] = a[i][j] * b[i][j]`.
    pub fn element_mul(&self, rhs: &Self) -> Self {
        assert_same_shape(self, rhs);
        let mut out = self.clone();
        for (a, b) in out.iter_mut().zip(rhs.iter()) {
            *a = *a * *b;
        }
        out
    }

    /// Element-wise division: `c[i][j] = a[i][j] / b[i][j]`.
    pub fn element_div(&self, rhs: &Self) -> Self {
        assert_same_shape(self, rhs);
        let mut out = self.clone();
        for (a, b) in out.iter_mut().zip(rhs.iter()) {
            *a = *a / *b;
        }
        out
    }

    /// Transpose: (M×N) → (N×M).
    pub fn transpose(&self) -> Self {
        DynMatrix::from_fn(self.ncols(), self.nrows(), |i, j| self[(j, i)])
    }

    /// Matrix-vector product: A * v → result.
    pub fn vecmul(&self, v: &DynVector<T>) -> DynVector<T> {
        assert_eq!(
            self.ncols(),
            v.len(),
            "matvec shape mismatch: {}x{} * vec({})",
            self.nrows(),
            self.ncols(),
            v.len()
        );
        let mut out = DynVector::zeros(self.nrows(), T::zero());
        for i in 0..self.nrows() {
            let mut sum = T::zero();
            for j in 0..self.ncols() {
                sum = sum + self[(i, j)] * v[j];
            }
            out[i] = sum;
        }
        out
    }
}

// ── DynVector arithmetic ────────────────────────────────────────────

fn assert_same_len<T>(a: &DynVector<T>, b: &DynVector<T>) {
    assert_eq!(
        a.inner.ncols(),
        b.inner.ncols(),
        "vector length mismatch: {} vs {}",
        a.inner.ncols(),
        b.inner.ncols()
    );
}

impl<T: Scalar> Add for DynVector<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        assert_same_len(&self, &rhs);
        Self {
            inner: self.inner + rhs.inner,
        }
    }
}

impl<T: Scalar> Add<&DynVector<T>> for DynVector<T> {
    type Output = DynVector<T>;

    fn add(self, rhs: &DynVector<T>) -> DynVector<T> {
        assert_same_len(&self, rhs);
        DynVector {
            inner: self.inner + &rhs.inner,
        }
    }
}

impl<T: Scalar> Add<&DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;

    fn add(self, rhs: &DynVector<T>) -> DynVector<T> {
        self.clone() + rhs
    }
}

impl<T: Scalar> AddAssign<&DynVector<T>> for DynVector<T> {
    fn add_assign(&mut self, rhs: &DynVector<T>) {
        assert_same_len(self, rhs);
        self.inner += &rhs.inner;
    }
}

impl<T: Scalar> Sub for DynVector<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        assert_same_len(&self, &rhs);
        Self {
            inner: self.inner - rhs.inner,
        }
    }
}

impl<T: Scalar> Sub<&DynVector<T>> for DynVector<T> {
    type Output = DynVector<T>;

    fn sub(self, rhs: &DynVector<T>) -> DynVector<T> {
        assert_same_len(&self, rhs);
        DynVector {
            inner: self.inner - &rhs.inner,
        }
    }
}

impl<T: Scalar> Sub<&DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;

    fn sub(self, rhs: &DynVector<T>) -> DynVector<T> {
        self.clone() - rhs
    }
}

impl<T: Scalar> SubAssign<&DynVector<T>> for DynVector<T> {
    fn sub_assign(&mut self, rhs: &DynVector<T>) {
        assert_same_len(self, rhs);
        self.inner -= &rhs.inner;
    }
}

impl<T: Scalar> Neg for DynVector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            inner: -self.inner,
        }
    }
}

impl<T: Scalar> Mul<T> for DynVector<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            inner: self.inner * rhs,
        }
    }
}

impl<T: Scalar> Mul<T> for &DynVector<T> {
    type Output = DynVector<T>;

    fn mul(self, rhs: T) -> DynVector<T> {
        self.clone() * rhs
    }
}

impl<T: Scalar> MulAssign<T> for DynVector<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.inner *= rhs;
    }
}

impl<T: Scalar> Div<T> for DynVector<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            inner: self.inner / rhs,
        }
    }
}

impl<T: Scalar> DivAssign<T> for DynVector<T> {
    fn div_assign(&mut self, rhs: T) {
        self.inner /= rhs;
    }
}
