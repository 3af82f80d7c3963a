//! Spatial convolution over [`Matrix`] values.
//!
//! Slides an odd-sized kernel across a source matrix and produces a result
//! of the same shape. Out-of-range sample coordinates are clamped to the
//! nearest in-bounds index (edge replication), never zero-padded or wrapped.
//! The kernel is applied in cross-correlation orientation, without flipping,
//! which is what directional edge kernels are authored for.

use std::error::Error;
use std::fmt;

use crate::math::{Element, Matrix};

/// Convolve `source` with `kernel`, producing a matrix of the same shape as
/// `source`.
///
/// Both kernel dimensions must be odd so the kernel has a unique center
/// cell; an even dimension fails with [`InvalidKernelError`] before any
/// computation. Neither operand is mutated.
///
/// Accumulation happens in `f64` for both element types; integer results
/// truncate toward zero on write-back.
pub fn convolve<T: Element>(
    source: &Matrix<T>,
    kernel: &Matrix<T>,
) -> Result<Matrix<T>, InvalidKernelError> {
    let (krows, kcols) = kernel.shape();
    if krows % 2 == 0 || kcols % 2 == 0 {
        return Err(InvalidKernelError {
            rows: krows,
            cols: kcols,
        });
    }

    let (rows, cols) = source.shape();
    if rows == 0 || cols == 0 {
        return Ok(Matrix::zeros(rows, cols));
    }

    log::debug!(
        "convolving {}x{} source with {}x{} kernel",
        rows,
        cols,
        krows,
        kcols
    );

    let pad_rows = krows / 2;
    let pad_cols = kcols / 2;

    let mut result = Matrix::zeros(rows, cols);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        result
            .as_mut_slice()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = convolve_cell(source, kernel, i, j, pad_rows, pad_cols);
                }
            });
    }
    #[cfg(not(feature = "parallel"))]
    {
        for i in 0..rows {
            for j in 0..cols {
                let written = result.set(i, j, convolve_cell(source, kernel, i, j, pad_rows, pad_cols));
                debug_assert!(written);
            }
        }
    }

    Ok(result)
}

/// One output cell: the sum over all kernel cells of `kernel[(k, l)] *
/// source[(clamp(i + k - pad_rows), clamp(j + l - pad_cols))]`, accumulated
/// in `f64`.
fn convolve_cell<T: Element>(
    source: &Matrix<T>,
    kernel: &Matrix<T>,
    i: usize,
    j: usize,
    pad_rows: usize,
    pad_cols: usize,
) -> T {
    let (rows, cols) = source.shape();
    let mut acc = 0.0f64;

    for k in 0..kernel.nrows() {
        for l in 0..kernel.ncols() {
            let r = clamp_index(i as isize + k as isize - pad_rows as isize, rows);
            let c = clamp_index(j as isize + l as isize - pad_cols as isize, cols);
            acc += kernel.get(k, l).to_accum() * source.get(r, c).to_accum();
        }
    }

    T::from_accum(acc)
}

/// Clamp a possibly out-of-range index into `[0, len - 1]`.
///
/// This is the edge-replicate policy: a coordinate two cells beyond the
/// top-left corner reads the corner itself, not zero and not the opposite
/// edge. Applied before every source read; no padded copy is ever built.
fn clamp_index(value: isize, len: usize) -> usize {
    if value < 0 {
        return 0;
    }
    let value = value as usize;
    if value < len {
        value
    } else {
        len - 1
    }
}

/// Convolution was invoked with a kernel having an even dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidKernelError {
    rows: usize,
    cols: usize,
}

impl fmt::Display for InvalidKernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kernel must have odd size, got {}x{}",
            self.rows, self.cols
        )
    }
}

impl Error for InvalidKernelError {}
