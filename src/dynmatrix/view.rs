//! Non-owning strided views over vector and matrix storage.
//!
//! A view is a `{data, length, stride}` (vectors) or `{data, rows, cols,
//! span}` (matrices) proxy into a backing buffer: reads and writes go
//! straight through to the backing storage, and the borrow checker ties the
//! view's lifetime to it. Views compose — a sub-view of a view is a view —
//! and cover rows, columns, generalized diagonals, and rectangular blocks.

use core::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, SubAssign};

use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

use super::vector::DynVector;
use super::DynMatrix;

// ── VecView ─────────────────────────────────────────────────────────

/// Read-only strided view of `len` elements over a backing buffer.
///
/// Element `i` lives at `data[i * stride]`.
#[derive(Debug, Clone, Copy)]
pub struct VecView<'a, T> {
    data: &'a [T],
    len: usize,
    stride: usize,
}

impl<'a, T> VecView<'a, T> {
    /// Build a view over `data`, starting at its first element.
    ///
    /// Panics if the buffer is too short for `len` elements at `stride`.
    pub fn new(data: &'a [T], len: usize, stride: usize) -> Self {
        assert!(len > 0, "view length must be positive");
        assert!(stride > 0, "view stride must be positive");
        assert!(
            (len - 1) * stride < data.len(),
            "view of {len} elements at stride {stride} exceeds buffer of {}",
            data.len()
        );
        Self { data, len, stride }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; views cannot be empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The element stride of this view in the backing buffer.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Sub-view of `len` elements starting at `start`. Views compose.
    pub fn sub(&self, start: usize, len: usize) -> VecView<'a, T> {
        assert!(
            len > 0 && start + len <= self.len,
            "sub-view [{start}..{}] exceeds view of {} elements",
            start + len,
            self.len
        );
        VecView::new(&self.data[start * self.stride..], len, self.stride)
    }

    /// The first `len` elements.
    pub fn first(&self, len: usize) -> VecView<'a, T> {
        self.sub(0, len)
    }

    /// The last `len` elements.
    pub fn last(&self, len: usize) -> VecView<'a, T> {
        self.sub(self.len - len, len)
    }

    /// Iterate over the viewed elements.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        let data = self.data;
        let stride = self.stride;
        (0..self.len).map(move |i| &data[i * stride])
    }
}

impl<T: Scalar> VecView<'_, T> {
    /// Copy the viewed elements into an owning vector.
    pub fn to_dense(&self) -> DynVector<T> {
        let mut v = DynVector::zeros(self.len, T::zero());
        for i in 0..self.len {
            v[i] = self[i];
        }
        v
    }

    /// Dot product with another view.
    pub fn dot(&self, rhs: &VecView<'_, T>) -> T {
        assert_eq!(self.len, rhs.len, "vector length mismatch");
        let mut sum = T::zero();
        for i in 0..self.len {
            sum = sum + self[i] * rhs[i];
        }
        sum
    }

    /// Squared L2 norm.
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar> VecView<'_, T> {
    /// L2 (Euclidean) norm.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }
}

impl<T> Index<usize> for VecView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        debug_assert!(i < self.len, "index {i} out of range for view of {}", self.len);
        &self.data[i * self.stride]
    }
}

// ── VecViewMut ──────────────────────────────────────────────────────

/// Mutable strided view of `len` elements over a backing buffer.
///
/// Writes through the view are visible to the backing storage owner.
#[derive(Debug)]
pub struct VecViewMut<'a, T> {
    data: &'a mut [T],
    len: usize,
    stride: usize,
}

impl<'a, T> VecViewMut<'a, T> {
    /// Build a mutable view over `data`, starting at its first element.
    ///
    /// Panics if the buffer is too short for `len` elements at `stride`.
    pub fn new(data: &'a mut [T], len: usize, stride: usize) -> Self {
        assert!(len > 0, "view length must be positive");
        assert!(stride > 0, "view stride must be positive");
        assert!(
            (len - 1) * stride < data.len(),
            "view of {len} elements at stride {stride} exceeds buffer of {}",
            data.len()
        );
        Self { data, len, stride }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; views cannot be empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> VecView<'_, T> {
        VecView::new(self.data, self.len, self.stride)
    }

    /// Mutable sub-view of `len` elements starting at `start`.
    pub fn sub_mut(&mut self, start: usize, len: usize) -> VecViewMut<'_, T> {
        assert!(
            len > 0 && start + len <= self.len,
            "sub-view [{start}..{}] exceeds view of {} elements",
            start + len,
            self.len
        );
        VecViewMut::new(&mut self.data[start * self.stride..], len, self.stride)
    }
}

impl<T: Scalar> VecViewMut<'_, T> {
    /// Copy a dense vector into the backing storage element-by-element.
    pub fn copy_from(&mut self, src: &DynVector<T>) {
        assert_eq!(self.len, src.len(), "vector length mismatch");
        for i in 0..self.len {
            self[i] = src[i];
        }
    }

    /// Copy another view's elements into the backing storage.
    pub fn copy_from_view(&mut self, src: &VecView<'_, T>) {
        assert_eq!(self.len, src.len(), "vector length mismatch");
        for i in 0..self.len {
            self[i] = src[i];
        }
    }

    /// Copy the viewed elements into an owning vector.
    pub fn to_dense(&self) -> DynVector<T> {
        self.as_view().to_dense()
    }
}

impl<T> Index<usize> for VecViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        debug_assert!(i < self.len, "index {i} out of range for view of {}", self.len);
        &self.data[i * self.stride]
    }
}

impl<T> IndexMut<usize> for VecViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len, "index {i} out of range for view of {}", self.len);
        &mut self.data[i * self.stride]
    }
}

// In-place compound assignment, matching the owning types

impl<T: Scalar> AddAssign<&VecView<'_, T>> for VecViewMut<'_, T> {
    fn add_assign(&mut self, rhs: &VecView<'_, T>) {
        assert_eq!(self.len, rhs.len(), "vector length mismatch");
        for i in 0..self.len {
            self[i] = self[i] + rhs[i];
        }
    }
}

impl<T: Scalar> AddAssign<&DynVector<T>> for VecViewMut<'_, T> {
    fn add_assign(&mut self, rhs: &DynVector<T>) {
        assert_eq!(self.len, rhs.len(), "vector length mismatch");
        for i in 0..self.len {
            self[i] = self[i] + rhs[i];
        }
    }
}

impl<T: Scalar> SubAssign<&VecView<'_, T>> for VecViewMut<'_, T> {
    fn sub_assign(&mut self, rhs: &VecView<'_, T>) {
        assert_eq!(self.len, rhs.len(), "vector length mismatch");
        for i in 0..self.len {
            self[i] = self[i] - rhs[i];
        }
    }
}

impl<T: Scalar> SubAssign<&DynVector<T>> for VecViewMut<'_, T> {
    fn sub_assign(&mut self, rhs: &DynVector<T>) {
        assert_eq!(self.len, rhs.len(), "vector length mismatch");
        for i in 0..self.len {
            self[i] = self[i] - rhs[i];
        }
    }
}

impl<T: Scalar> MulAssign<T> for VecViewMut<'_, T> {
    fn mul_assign(&mut self, rhs: T) {
        for i in 0..self.len {
            self[i] = self[i] * rhs;
        }
    }
}

impl<T: Scalar> DivAssign<T> for VecViewMut<'_, T> {
    fn div_assign(&mut self, rhs: T) {
        for i in 0..self.len {
            self[i] = self[i] / rhs;
        }
    }
}

/// Element-wise compound multiply/divide against another view.
impl<T: Scalar> MulAssign<&VecView<'_, T>> for VecViewMut<'_, T> {
    fn mul_assign(&mut self, rhs: &VecView<'_, T>) {
        assert_eq!(self.len, rhs.len(), "vector length mismatch");
        for i in 0..self.len {
            self[i] = self[i] * rhs[i];
        }
    }
}

impl<T: Scalar> DivAssign<&VecView<'_, T>> for VecViewMut<'_, T> {
    fn div_assign(&mut self, rhs: &VecView<'_, T>) {
        assert_eq!(self.len, rhs.len(), "vector length mismatch");
        for i in 0..self.len {
            self[i] = self[i] / rhs[i];
        }
    }
}

// ── MatView ─────────────────────────────────────────────────────────

/// Read-only rectangular view over a backing matrix buffer.
///
/// Element `(i, j)` lives at `data[i * span + j]`, where `span` is the
/// row pitch of the backing matrix (its full column count).
#[derive(Debug, Clone, Copy)]
pub struct MatView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    span: usize,
}

impl<'a, T> MatView<'a, T> {
    /// Build a view over `data`, starting at its first element.
    pub fn new(data: &'a [T], rows: usize, cols: usize, span: usize) -> Self {
        assert!(rows > 0 && cols > 0, "view dimensions must be positive");
        assert!(cols <= span, "view columns exceed row span");
        assert!(
            (rows - 1) * span + cols <= data.len(),
            "{rows}×{cols} view at span {span} exceeds buffer of {}",
            data.len()
        );
        Self {
            data,
            rows,
            cols,
            span,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Row `i` as a contiguous vector view.
    pub fn row(&self, i: usize) -> VecView<'a, T> {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        VecView::new(&self.data[i * self.span..], self.cols, 1)
    }

    /// Column `j` as a strided vector view.
    pub fn col(&self, j: usize) -> VecView<'a, T> {
        assert!(j < self.cols, "column {j} out of range for {} columns", self.cols);
        VecView::new(&self.data[j..], self.rows, self.span)
    }

    /// Generalized diagonal as a strided vector view.
    ///
    /// `k >= 0` selects the diagonal starting at column `k`; `k < 0` the
    /// diagonal starting at row `-k`.
    pub fn diag(&self, k: isize) -> VecView<'a, T> {
        if k >= 0 {
            let k = k as usize;
            assert!(k < self.cols, "diagonal {k} out of range for {} columns", self.cols);
            let len = self.rows.min(self.cols - k);
            VecView::new(&self.data[k..], len, self.span + 1)
        } else {
            let k = (-k) as usize;
            assert!(k < self.rows, "diagonal -{k} out of range for {} rows", self.rows);
            let len = (self.rows - k).min(self.cols);
            VecView::new(&self.data[k * self.span..], len, self.span + 1)
        }
    }

    /// Rectangular sub-view. Views compose.
    pub fn sub(&self, top: usize, left: usize, height: usize, width: usize) -> MatView<'a, T> {
        assert!(
            top + height <= self.rows && left + width <= self.cols,
            "sub-view ({top},{left}) size {height}×{width} exceeds {}×{} view",
            self.rows,
            self.cols
        );
        MatView::new(
            &self.data[top * self.span + left..],
            height,
            width,
            self.span,
        )
    }
}

impl<T: Scalar> MatView<'_, T> {
    /// Copy the viewed block into an owning matrix.
    pub fn to_dense(&self) -> DynMatrix<T> {
        DynMatrix::from_fn(self.rows, self.cols, |i, j| self[(i, j)])
    }
}

impl<T> Index<(usize, usize)> for MatView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(
            i < self.rows && j < self.cols,
            "index ({i},{j}) out of range for {}×{} view",
            self.rows,
            self.cols
        );
        &self.data[i * self.span + j]
    }
}

// ── MatViewMut ──────────────────────────────────────────────────────

/// Mutable rectangular view over a backing matrix buffer.
#[derive(Debug)]
pub struct MatViewMut<'a, T> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    span: usize,
}

impl<'a, T> MatViewMut<'a, T> {
    /// Build a mutable view over `data`, starting at its first element.
    pub fn new(data: &'a mut [T], rows: usize, cols: usize, span: usize) -> Self {
        assert!(rows > 0 && cols > 0, "view dimensions must be positive");
        assert!(cols <= span, "view columns exceed row span");
        assert!(
            (rows - 1) * span + cols <= data.len(),
            "{rows}×{cols} view at span {span} exceeds buffer of {}",
            data.len()
        );
        Self {
            data,
            rows,
            cols,
            span,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> MatView<'_, T> {
        MatView::new(self.data, self.rows, self.cols, self.span)
    }

    /// Mutable row view.
    pub fn row_mut(&mut self, i: usize) -> VecViewMut<'_, T> {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        VecViewMut::new(&mut self.data[i * self.span..], self.cols, 1)
    }

    /// Mutable column view.
    pub fn col_mut(&mut self, j: usize) -> VecViewMut<'_, T> {
        assert!(j < self.cols, "column {j} out of range for {} columns", self.cols);
        VecViewMut::new(&mut self.data[j..], self.rows, self.span)
    }

    /// Mutable rectangular sub-view.
    pub fn sub_mut(
        &mut self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> MatViewMut<'_, T> {
        assert!(
            top + height <= self.rows && left + width <= self.cols,
            "sub-view ({top},{left}) size {height}×{width} exceeds {}×{} view",
            self.rows,
            self.cols
        );
        MatViewMut::new(
            &mut self.data[top * self.span + left..],
            height,
            width,
            self.span,
        )
    }
}

impl<T: Scalar> MatViewMut<'_, T> {
    /// Copy a dense matrix into the backing storage element-by-element.
    pub fn copy_from(&mut self, src: &DynMatrix<T>) {
        assert!(
            self.rows == src.nrows() && self.cols == src.ncols(),
            "shape mismatch: {}x{} vs {}x{}",
            self.rows,
            self.cols,
            src.nrows(),
            src.ncols()
        );
        for i in 0..self.rows {
            for j in 0..self.cols {
                self[(i, j)] = src[(i, j)];
            }
        }
    }

    /// Copy the viewed block into an owning matrix.
    pub fn to_dense(&self) -> DynMatrix<T> {
        self.as_view().to_dense()
    }
}

impl<T> Index<(usize, usize)> for MatViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(
            i < self.rows && j < self.cols,
            "index ({i},{j}) out of range for {}×{} view",
            self.rows,
            self.cols
        );
        &self.data[i * self.span + j]
    }
}

impl<T> IndexMut<(usize, usize)> for MatViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(
            i < self.rows && j < self.cols,
            "index ({i},{j}) out of range for {}×{} view",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.span + j]
    }
}

impl<T: Scalar> AddAssign<&MatView<'_, T>> for MatViewMut<'_, T> {
    fn add_assign(&mut self, rhs: &MatView<'_, T>) {
        assert!(
            self.rows == rhs.nrows() && self.cols == rhs.ncols(),
            "shape mismatch"
        );
        for i in 0..self.rows {
            for j in 0..self.cols {
                self[(i, j)] = self[(i, j)] + rhs[(i, j)];
            }
        }
    }
}

impl<T: Scalar> AddAssign<&DynMatrix<T>> for MatViewMut<'_, T> {
    fn add_assign(&mut self, rhs: &DynMatrix<T>) {
        assert!(
            self.rows == rhs.nrows() && self.cols == rhs.ncols(),
            "shape mismatch"
        );
        for i in 0..self.rows {
            for j in 0..self.cols {
                self[(i, j)] = self[(i, j)] + rhs[(i, j)];
            }
        }
    }
}

impl<T: Scalar> SubAssign<&MatView<'_, T>> for MatViewMut<'_, T> {
    fn sub_assign(&mut self, rhs: &MatView<'_, T>) {
        assert!(
            self.rows == rhs.nrows() && self.cols == rhs.ncols(),
            "shape mismatch"
        );
        for i in 0..self.rows {
            for j in 0..self.cols {
                self[(i, j)] = self[(i, j)] - rhs[(i, j)];
            }
        }
    }
}

impl<T: Scalar> SubAssign<&DynMatrix<T>> for MatViewMut<'_, T> {
    fn sub_assign(&mut self, rhs: &DynMatrix<T>) {
        assert!(
            self.rows == rhs.nrows() && self.cols == rhs.ncols(),
            "shape mismatch"
        );
        for i in 0..self.rows {
            for j in 0..self.cols {
                self[(i, j)] = self[(i, j)] - rhs[(i, j)];
            }
        }
    }
}

impl<T: Scalar> MulAssign<T> for MatViewMut<'_, T> {
    fn mul_assign(&mut self, rhs: T) {
        for i in 0..self.rows {
            for j in 0..self.cols {
                self[(i, j)] = self[(i, j)] * rhs;
            }
        }
    }
}

impl<T: Scalar> DivAssign<T> for MatViewMut<'_, T> {
    fn div_assign(&mut self, rhs: T) {
        for i in 0..self.rows {
            for j in 0..self.cols {
                self[(i, j)] = self[(i, j)] / rhs;
            }
        }
    }
}

// ── View producers on the owning types ──────────────────────────────

impl<T> DynVector<T> {
    /// View the whole vector.
    pub fn view(&self) -> VecView<'_, T> {
        VecView::new(self.as_slice_raw(), self.as_slice_raw().len(), 1)
    }

    /// View `len` elements starting at `start`.
    pub fn sub(&self, start: usize, len: usize) -> VecView<'_, T> {
        self.view().sub(start, len)
    }

    /// Mutable view of `len` elements starting at `start`.
    pub fn sub_mut(&mut self, start: usize, len: usize) -> VecViewMut<'_, T> {
        let total = self.as_slice_raw().len();
        assert!(
            len > 0 && start + len <= total,
            "sub-view [{start}..{}] exceeds vector of {total} elements",
            start + len
        );
        VecViewMut::new(&mut self.as_mut_slice_raw()[start..], len, 1)
    }

    /// The first `len` elements as a view.
    pub fn first(&self, len: usize) -> VecView<'_, T> {
        self.view().first(len)
    }

    /// The last `len` elements as a view.
    pub fn last(&self, len: usize) -> VecView<'_, T> {
        self.view().last(len)
    }

    #[inline]
    fn as_slice_raw(&self) -> &[T] {
        self.inner.as_slice()
    }

    #[inline]
    fn as_mut_slice_raw(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }
}

impl<T> DynMatrix<T> {
    /// View the whole matrix.
    pub fn view(&self) -> MatView<'_, T> {
        MatView::new(self.as_slice(), self.nrows(), self.ncols(), self.ncols())
    }

    /// Mutable view of the whole matrix.
    pub fn view_mut(&mut self) -> MatViewMut<'_, T> {
        let (r, c) = (self.nrows(), self.ncols());
        MatViewMut::new(self.as_mut_slice(), r, c, c)
    }

    /// Rectangular sub-view.
    pub fn sub_mat(&self, top: usize, left: usize, height: usize, width: usize) -> MatView<'_, T> {
        self.view().sub(top, left, height, width)
    }

    /// Mutable rectangular sub-view.
    pub fn sub_mat_mut(
        &mut self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> MatViewMut<'_, T> {
        let (r, c) = (self.nrows(), self.ncols());
        assert!(
            top + height <= r && left + width <= c,
            "sub-view ({top},{left}) size {height}×{width} exceeds {r}×{c} matrix"
        );
        MatViewMut::new(&mut self.as_mut_slice()[top * c + left..], height, width, c)
    }

    /// Row `i` as a contiguous view.
    pub fn row_view(&self, i: usize) -> VecView<'_, T> {
        self.view().row(i)
    }

    /// Mutable row view.
    pub fn row_view_mut(&mut self, i: usize) -> VecViewMut<'_, T> {
        let c = self.ncols();
        assert!(i < self.nrows(), "row {i} out of range");
        VecViewMut::new(&mut self.as_mut_slice()[i * c..], c, 1)
    }

    /// Column `j` as a strided view.
    pub fn col_view(&self, j: usize) -> VecView<'_, T> {
        self.view().col(j)
    }

    /// Mutable column view.
    pub fn col_view_mut(&mut self, j: usize) -> VecViewMut<'_, T> {
        let (r, c) = (self.nrows(), self.ncols());
        assert!(j < c, "column {j} out of range");
        VecViewMut::new(&mut self.as_mut_slice()[j..], r, c)
    }

    /// Generalized diagonal as a strided view.
    ///
    /// `k >= 0` selects the diagonal starting at column `k`; `k < 0` the
    /// diagonal starting at row `-k`.
    pub fn diag_view(&self, k: isize) -> VecView<'_, T> {
        self.view().diag(k)
    }
}

// Fixed-size matrices expose the same views over their inline storage.
impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// View the whole matrix.
    pub fn view(&self) -> MatView<'_, T> {
        MatView::new(self.as_slice(), M, N, N)
    }

    /// Mutable view of the whole matrix.
    pub fn view_mut(&mut self) -> MatViewMut<'_, T> {
        MatViewMut::new(self.as_mut_slice(), M, N, N)
    }

    /// Rectangular sub-view (runtime-sized, unlike [`Matrix::block`]).
    pub fn sub_mat(&self, top: usize, left: usize, height: usize, width: usize) -> MatView<'_, T> {
        self.view().sub(top, left, height, width)
    }

    /// Generalized diagonal as a strided view.
    pub fn diag_view(&self, k: isize) -> VecView<'_, T> {
        self.view().diag(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m3x4() -> DynMatrix<f64> {
        DynMatrix::from_fn(3, 4, |i, j| (i * 4 + j) as f64)
    }

    // ── VecView ─────────────────────────────────────────────────

    #[test]
    fn vec_view_basic() {
        let v = DynVector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let sub = v.sub(1, 3);
        assert_eq!(sub.len(), 3);
        assert_eq!(sub[0], 2.0);
        assert_eq!(sub[2], 4.0);
    }

    #[test]
    fn vec_view_composes() {
        let v = DynVector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let sub = v.sub(1, 4).sub(1, 2);
        assert_eq!(sub[0], 3.0);
        assert_eq!(sub[1], 4.0);
    }

    #[test]
    fn vec_view_first_last() {
        let v = DynVector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.first(2)[1], 2.0);
        assert_eq!(v.last(2)[0], 3.0);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn vec_view_out_of_bounds() {
        let v = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        let _ = v.sub(2, 2);
    }

    #[test]
    fn vec_view_dot_and_norm() {
        let v = DynVector::from_slice(&[3.0f64, 4.0, 9.0]);
        let head = v.sub(0, 2);
        assert_eq!(head.norm_squared(), 25.0);
        assert!((head.norm() - 5.0).abs() < 1e-12);
        assert_eq!(head.dot(&head), 25.0);
    }

    #[test]
    fn vec_view_mut_writes_through() {
        let mut v = DynVector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        {
            let mut sub = v.sub_mut(1, 2);
            sub[0] = 20.0;
            sub *= 2.0;
        }
        assert_eq!(v.as_slice(), &[1.0, 40.0, 6.0, 4.0]);
    }

    #[test]
    fn vec_view_mut_copy_from() {
        let mut v = DynVector::zeros(4, 0.0_f64);
        v.sub_mut(1, 2).copy_from(&DynVector::from_slice(&[7.0, 8.0]));
        assert_eq!(v.as_slice(), &[0.0, 7.0, 8.0, 0.0]);
    }

    #[test]
    fn vec_view_mut_compound_ops() {
        let mut v = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        let w = DynVector::from_slice(&[10.0, 10.0, 10.0]);
        {
            let mut view = v.sub_mut(0, 3);
            view += &w;
        }
        assert_eq!(v.as_slice(), &[11.0, 12.0, 13.0]);
        {
            let mut view = v.sub_mut(0, 3);
            view -= &w;
            view /= 2.0;
        }
        assert_eq!(v.as_slice(), &[0.5, 1.0, 1.5]);
    }

    // ── Matrix views ────────────────────────────────────────────

    #[test]
    fn row_view_is_contiguous() {
        let m = m3x4();
        let r = m.row_view(1);
        assert_eq!(r.len(), 4);
        assert_eq!(r.stride(), 1);
        assert_eq!(r[0], 4.0);
        assert_eq!(r[3], 7.0);
    }

    #[test]
    fn col_view_is_strided() {
        let m = m3x4();
        let c = m.col_view(2);
        assert_eq!(c.len(), 3);
        assert_eq!(c.stride(), 4);
        assert_eq!(c[0], 2.0);
        assert_eq!(c[2], 10.0);
    }

    #[test]
    fn diag_views() {
        let m = m3x4();
        // Main diagonal: 0, 5, 10
        let d = m.diag_view(0);
        assert_eq!(d.len(), 3);
        assert_eq!(d[0], 0.0);
        assert_eq!(d[1], 5.0);
        assert_eq!(d[2], 10.0);

        // Diagonal starting at column 1: 1, 6, 11
        let d = m.diag_view(1);
        assert_eq!(d.len(), 3);
        assert_eq!(d[0], 1.0);
        assert_eq!(d[2], 11.0);

        // Diagonal starting at row 1: 4, 9
        let d = m.diag_view(-1);
        assert_eq!(d.len(), 2);
        assert_eq!(d[0], 4.0);
        assert_eq!(d[1], 9.0);
    }

    #[test]
    fn sub_mat_block() {
        let m = m3x4();
        let b = m.sub_mat(1, 1, 2, 2);
        assert_eq!(b[(0, 0)], 5.0);
        assert_eq!(b[(1, 1)], 10.0);
        assert_eq!(b.to_dense(), DynMatrix::from_rows(2, 2, &[5.0, 6.0, 9.0, 10.0]));
    }

    #[test]
    fn sub_mat_composes() {
        let m = m3x4();
        let b = m.sub_mat(0, 1, 3, 3).sub(1, 1, 2, 2);
        assert_eq!(b[(0, 0)], 6.0);
        assert_eq!(b[(1, 1)], 11.0);
    }

    #[test]
    fn sub_mat_rows_and_cols() {
        let m = m3x4();
        let b = m.sub_mat(1, 1, 2, 3);
        let r = b.row(1);
        assert_eq!(r[0], 9.0);
        let c = b.col(0);
        assert_eq!(c[0], 5.0);
        assert_eq!(c[1], 9.0);
        let d = b.diag(0);
        assert_eq!(d[0], 5.0);
        assert_eq!(d[1], 10.0);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn sub_mat_out_of_bounds() {
        let m = m3x4();
        let _ = m.sub_mat(2, 2, 2, 2);
    }

    #[test]
    fn mat_view_mut_writes_through() {
        let mut m = m3x4();
        {
            let mut b = m.sub_mat_mut(1, 1, 2, 2);
            b[(0, 0)] = 50.0;
            b *= 2.0;
        }
        assert_eq!(m[(1, 1)], 100.0);
        assert_eq!(m[(2, 2)], 20.0);
        assert_eq!(m[(0, 0)], 0.0); // outside the view, untouched
    }

    #[test]
    fn mat_view_mut_copy_from() {
        let mut m = DynMatrix::zeros(3, 3, 0.0_f64);
        let patch = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.sub_mat_mut(1, 1, 2, 2).copy_from(&patch);
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(2, 2)], 4.0);
        assert_eq!(m[(0, 0)], 0.0);
    }

    #[test]
    fn mat_view_mut_compound_assign() {
        let mut m = DynMatrix::fill(2, 2, 1.0_f64);
        let other = DynMatrix::fill(2, 2, 2.0_f64);
        {
            let mut v = m.view_mut();
            v += &other;
        }
        assert_eq!(m[(0, 0)], 3.0);
        {
            let mut v = m.view_mut();
            v -= &other;
        }
        assert_eq!(m[(1, 1)], 1.0);
    }

    #[test]
    fn row_col_view_mut() {
        let mut m = m3x4();
        {
            let mut r = m.row_view_mut(0);
            r *= 10.0;
        }
        assert_eq!(m[(0, 1)], 10.0);
        {
            let mut c = m.col_view_mut(3);
            c[0] = -1.0;
        }
        assert_eq!(m[(0, 3)], -1.0);
    }

    #[test]
    fn fixed_matrix_views() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let d = m.diag_view(0);
        assert_eq!(d[0], 1.0);
        assert_eq!(d[1], 5.0);
        assert_eq!(d[2], 9.0);

        let b = m.sub_mat(1, 0, 2, 2);
        assert_eq!(b[(0, 0)], 4.0);
        assert_eq!(b[(1, 1)], 8.0);
    }

    #[test]
    fn fixed_matrix_view_mut() {
        let mut m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        {
            let mut v = m.view_mut();
            v[(0, 1)] = 20.0;
        }
        assert_eq!(m[(0, 1)], 20.0);
    }

    #[test]
    fn view_assignment_into_matrix_column() {
        // Writing a dense vector into a column view aliases the matrix
        let mut m = DynMatrix::zeros(3, 3, 0.0_f64);
        m.col_view_mut(1).copy_from(&DynVector::from_slice(&[1.0, 2.0, 3.0]));
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m[(1, 1)], 2.0);
        assert_eq!(m[(2, 1)], 3.0);
    }
}
