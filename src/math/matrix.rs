use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::math::Element;

/// Dense row-major 2D matrix with value semantics.
///
/// Cloning a `Matrix` copies its buffer; arithmetic never aliases or mutates
/// its operands. The shape is fixed at construction and rectangularity is
/// checked once, in [`Matrix::from_rows`] — nothing after construction can
/// make a row the wrong length.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Build a matrix from nested rows, rejecting ragged input.
    ///
    /// Every row must have the same length as the first; otherwise the
    /// construction fails with [`ShapeError::Ragged`] and no matrix is
    /// produced. An empty `Vec` yields the 0×0 matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let cols = rows.first().map_or(0, Vec::len);
        let nrows = rows.len();
        let mut data = Vec::with_capacity(nrows * cols);

        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(ShapeError::Ragged {
                    row: idx,
                    len: row.len(),
                    expected: cols,
                });
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: nrows,
            cols,
        })
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError::Length {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Lazy iterator over row slices, top to bottom. Restartable: each call
    /// starts a fresh pass over the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| self.row_slice(row))
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Matrix<T>
where
    T: Copy,
{
    /// Read the element at `(row, col)`.
    ///
    /// Out-of-range coordinates are a precondition violation and panic.
    /// Unlike [`Matrix::set`] there is no bounds-checked fallback: callers
    /// that can produce out-of-range coordinates (convolution, notably)
    /// clamp them before calling `get`.
    pub fn get(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    /// Write `value` at `(row, col)`, reporting success.
    ///
    /// An out-of-range write is a no-op that returns `false` rather than
    /// panicking. This asymmetry with [`Matrix::get`] is a deliberate part
    /// of the contract: reads have a hard precondition, writes report.
    /// A caller that ignores the returned flag silently loses the write.
    #[must_use]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.data[row * self.cols + col] = value;
        true
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    /// Zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Matrix<T>
where
    T: Element,
{
    /// Elementwise sum, failing when the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, ShapeMismatchError> {
        if self.shape() != other.shape() {
            return Err(ShapeMismatchError::new(self.shape(), other.shape()));
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Scale every element by the integer scalar `k`.
    pub fn mul_scalar(&self, k: i32) -> Self {
        self.mapv(|&v| v * T::from_scalar(k))
    }

    /// Elementwise difference, failing when the shapes differ.
    ///
    /// Defined as `self + (-1) * other` so that subtracting a matrix from
    /// itself always yields an exact zero matrix.
    pub fn sub(&self, other: &Self) -> Result<Self, ShapeMismatchError> {
        self.add(&other.mul_scalar(-1))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

/// Diagnostic print: space-separated values, one row per line.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (idx, value) in row.iter().enumerate() {
                if idx > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Raw data handed to a constructor does not form a rectangular matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A flat buffer's length does not match the requested shape.
    Length {
        rows: usize,
        cols: usize,
        len: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Ragged { row, len, expected } => write!(
                f,
                "row {} has {} elements where the first row has {}",
                row, len, expected
            ),
            ShapeError::Length { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
        }
    }
}

impl Error for ShapeError {}

/// Elementwise arithmetic invoked on matrices of different shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMismatchError {
    left: (usize, usize),
    right: (usize, usize),
}

impl ShapeMismatchError {
    pub(crate) fn new(left: (usize, usize), right: (usize, usize)) -> Self {
        Self { left, right }
    }
}

impl fmt::Display for ShapeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix shapes do not match: {}x{} vs {}x{}",
            self.left.0, self.left.1, self.right.0, self.right.1
        )
    }
}

impl Error for ShapeMismatchError {}
