//! Dense rectangular matrices and their product
//!
//! Matrices are stored row-major in a flat buffer next to their
//! `[rows, cols]` shape. Multiplication is the canonical triple loop with a
//! fixed inner summation order (`k = 0..cols`, left to right), which keeps
//! floating-point results bit-identical across runs and across the
//! sequential and `rayon` code paths: the parallel path only distributes
//! whole output rows, never the accumulation inside a cell.

use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Trait for types that can be matrix cells.
///
/// Implemented for every `Copy` numeric type via the blanket impl:
/// `Zero` supplies addition and the empty-product identity, `One` supplies
/// multiplication and the diagonal of [`Matrix::identity`]. `Send + Sync`
/// let the `rayon` feature distribute rows across threads.
pub trait Element: Copy + Send + Sync + 'static + Zero + One {}

impl<T> Element for T where T: Copy + Send + Sync + 'static + Zero + One {}

/// A rectangular matrix with row-major storage.
///
/// The rectangularity invariant (all rows equally long) is enforced at
/// construction; a well-formed value can always be multiplied by any
/// shape-compatible partner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Build a matrix from nested rows.
    ///
    /// The first row fixes the column count; an empty outer vector yields
    /// the 0x0 matrix.
    ///
    /// # Errors
    ///
    /// [`Error::RaggedMatrix`] when any later row's length differs from the
    /// first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::ragged_matrix(i, cols, row.len()));
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: row_count,
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `[rows, cols]`, the form carried by shape errors.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics when `i >= self.rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// The flat row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Element> Matrix<T> {
    /// An all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// The n-by-n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.data[i * n + i] = T::one();
        }
        matrix
    }

    /// Matrix product `self x rhs`.
    ///
    /// Cell `(i, j)` of the result is the dot product of `self` row `i` and
    /// `rhs` column `j`, accumulated in ascending inner-index order. A zero
    /// inner dimension produces an all-zero result (empty dot products).
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] when `self.cols() != rhs.rows()`; no partial
    /// result is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlr::matrix::Matrix;
    ///
    /// let row = Matrix::from_rows(vec![vec![1, 2, 3]])?;
    /// let col = Matrix::from_rows(vec![vec![4], vec![5], vec![6]])?;
    /// assert_eq!(row.multiply(&col)?, Matrix::from_rows(vec![vec![32]])?);
    /// # Ok::<(), puzzlr::error::Error>(())
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(Error::shape_mismatch(self.shape(), rhs.shape()));
        }

        let mut out = Self::zeros(self.rows, rhs.cols);
        if out.data.is_empty() {
            return Ok(out);
        }

        multiply_into(&self.data, &rhs.data, &mut out.data, self.cols, rhs.cols);
        Ok(out)
    }
}

/// One output row: `out_row[j] = sum_k lhs_row[k] * rhs[k][j]`.
///
/// The inner loop runs over `k` in ascending order on every code path;
/// cross-path float parity depends on it.
fn product_row<T: Element>(lhs_row: &[T], rhs: &[T], cols: usize, out_row: &mut [T]) {
    for (j, cell) in out_row.iter_mut().enumerate() {
        let mut acc = T::zero();
        for (k, &a) in lhs_row.iter().enumerate() {
            acc = acc + a * rhs[k * cols + j];
        }
        *cell = acc;
    }
}

/// Row-parallel product: whole output rows are distributed, each computed
/// by the same sequential kernel as the fallback path.
#[cfg(feature = "rayon")]
fn multiply_into<T: Element>(lhs: &[T], rhs: &[T], out: &mut [T], inner: usize, cols: usize) {
    use rayon::prelude::*;

    out.par_chunks_mut(cols)
        .enumerate()
        .for_each(|(i, out_row)| {
            product_row(&lhs[i * inner..(i + 1) * inner], rhs, cols, out_row);
        });
}

/// Sequential product over the output rows.
#[cfg(not(feature = "rayon"))]
fn multiply_into<T: Element>(lhs: &[T], rhs: &[T], out: &mut [T], inner: usize, cols: usize) {
    for (i, out_row) in out.chunks_mut(cols).enumerate() {
        product_row(&lhs[i * inner..(i + 1) * inner], rhs, cols, out_row);
    }
}
