//! Row-major numeric matrices.
//!
//! [`Matrix`] is the common currency between the conversion, transform and
//! convolution stages: pixel data becomes a `Matrix<f64>` or
//! `Matrix<Complex64>`, gets transformed or filtered, and is converted back.
//!
//! Matrices are ephemeral value objects — created per operation, never shared
//! mutably, and discarded once the producing call returns.
//!
//! # Example
//!
//! ```rust
//! use spektr_core::matrix::RealMatrix;
//!
//! let m = RealMatrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! assert_eq!(m[(1, 2)], 6.0);
//! ```

use crate::error::{Error, Result};
use num_complex::Complex64;
use std::ops::{Index, IndexMut};

/// Matrix of bytes, usually a single image channel.
pub type ByteMatrix = Matrix<u8>;
/// Matrix of double-precision reals.
pub type RealMatrix = Matrix<f64>;
/// Matrix of complex values, the working type of the Fourier engines.
pub type ComplexMatrix = Matrix<Complex64>;

/// Row-major 2D array with explicit row and column counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Matrix<T> {
    /// Creates a matrix filled with the default element value.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Matrix<T> {
    /// Creates a matrix from a row-major element vector.
    ///
    /// Returns [`Error::SizeMismatch`] when `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::size_mismatch(rows * cols, data.len()));
        }
        Ok(Self { rows, cols, data })
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

    /// `true` when the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major element slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns the row-major element vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Borrow of a single row.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Mutable borrow of a single row.
    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        &mut self.data[r * self.cols..(r + 1) * self.cols]
    }
}

impl<T: Copy> Matrix<T> {
    /// Copies column `c` into a fresh vector.
    pub fn column(&self, c: usize) -> Vec<T> {
        (0..self.rows).map(|r| self.data[r * self.cols + c]).collect()
    }

    /// Writes `values` into column `c`.
    ///
    /// Callers pass columns produced by [`Matrix::column`], so the length is
    /// an internal invariant rather than a user-facing error.
    pub fn set_column(&mut self, c: usize, values: &[T]) {
        debug_assert_eq!(values.len(), self.rows);
        for (r, v) in values.iter().enumerate() {
            self.data[r * self.cols + c] = *v;
        }
    }

    /// Maps every element through `f`, preserving geometry.
    pub fn map<U, F: FnMut(T) -> U>(&self, mut f: F) -> Matrix<U> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        &mut self.data[r * self.cols + c]
    }
}

impl RealMatrix {
    /// Widens to a complex matrix with zero imaginary parts.
    pub fn to_complex(&self) -> ComplexMatrix {
        self.map(|v| Complex64::new(v, 0.0))
    }
}

impl ComplexMatrix {
    /// Real parts of every element, geometry preserved.
    pub fn re(&self) -> RealMatrix {
        self.map(|v| v.re)
    }
}
