use crate::traits::Scalar;

use super::DynMatrix;

impl<T: Scalar> DynMatrix<T> {
    /// Extract a `rows x cols` sub-matrix starting at position `(i, j)`.
    ///
    /// Panics if the block extends beyond the matrix bounds.
    ///
    /// ```
    /// use lineal::DynMatrix;
    /// let m = DynMatrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// let b = m.block(1, 1, 2, 2);
    /// assert_eq!(b[(0, 0)], 5.0);
    /// assert_eq!(b[(1, 1)], 9.0);
    /// ```
    pub fn block(&self, i: usize, j: usize, rows: usize, cols: usize) -> Self {
        assert!(
            i + rows <= self.nrows() && j + cols <= self.ncols(),
            "block ({i},{j}) size {rows}×{cols} out of bounds for {}×{} matrix",
            self.nrows(),
            self.ncols()
        );
        Self::from_fn(rows, cols, |r, c| self[(i + r, j + c)])
    }

    /// Write a sub-matrix into self starting at position `(i, j)`.
    ///
    /// Panics if the block extends beyond the matrix bounds.
    pub fn set_block(&mut self, i: usize, j: usize, src: &DynMatrix<T>) {
        assert!(
            i + src.nrows() <= self.nrows() && j + src.ncols() <= self.ncols(),
            "set_block ({i},{j}) size {}×{} out of bounds for {}×{} matrix",
            src.nrows(),
            src.ncols(),
            self.nrows(),
            self.ncols()
        );
        for r in 0..src.nrows() {
            for c in 0..src.ncols() {
                self[(i + r, j + c)] = src[(r, c)];
            }
        }
    }

    /// Extract the top-left `rows x cols` corner.
    pub fn top_left(&self, rows: usize, cols: usize) -> Self {
        self.block(0, 0, rows, cols)
    }

    /// Extract the bottom-right `rows x cols` corner.
    pub fn bottom_right(&self, rows: usize, cols: usize) -> Self {
        self.block(self.nrows() - rows, self.ncols() - cols, rows, cols)
    }
}
