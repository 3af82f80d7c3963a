//! Packed-pixel helpers for filtering raster channels.
//!
//! Converts between packed `0xAARRGGBB` pixel buffers and per-channel
//! `Matrix<f64>` planes, and applies one kernel uniformly across the three
//! color channels. Decoding and encoding raster *files* stays with callers;
//! this module only moves samples between pixels and matrices.

use crate::convolve::{convolve, InvalidKernelError};
use crate::math::{Matrix, ShapeError, ShapeMismatchError};

/// Unpack packed ARGB pixels into red, green and blue channel matrices.
///
/// Pixels are row-major with `width` pixels per row; samples land in
/// `[0, 255]`. Fails when the buffer length does not match the shape.
pub fn channels_from_pixels(
    pixels: &[u32],
    width: usize,
    height: usize,
) -> Result<[Matrix<f64>; 3], ShapeError> {
    let mut red = Vec::with_capacity(pixels.len());
    let mut green = Vec::with_capacity(pixels.len());
    let mut blue = Vec::with_capacity(pixels.len());

    for &pixel in pixels {
        red.push(((pixel >> 16) & 0xFF) as f64);
        green.push(((pixel >> 8) & 0xFF) as f64);
        blue.push((pixel & 0xFF) as f64);
    }

    Ok([
        Matrix::from_shape_vec((height, width), red)?,
        Matrix::from_shape_vec((height, width), green)?,
        Matrix::from_shape_vec((height, width), blue)?,
    ])
}

/// Pack red, green and blue channel matrices into opaque ARGB pixels.
///
/// Every sample is saturated into the display range with
/// [`clamp_channel`] before packing. Fails when the channel shapes differ.
pub fn pixels_from_channels(
    channels: &[Matrix<f64>; 3],
) -> Result<Vec<u32>, ShapeMismatchError> {
    let (rows, cols) = channels[0].shape();
    for channel in &channels[1..] {
        if channel.shape() != (rows, cols) {
            return Err(ShapeMismatchError::new((rows, cols), channel.shape()));
        }
    }

    let planes: Vec<Matrix<u8>> = channels
        .iter()
        .map(|channel| channel.mapv(|&v| clamp_channel(v)))
        .collect();

    let mut pixels = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            let r = planes[0].get(i, j) as u32;
            let g = planes[1].get(i, j) as u32;
            let b = planes[2].get(i, j) as u32;
            pixels.push(0xFF00_0000 | (r << 16) | (g << 8) | b);
        }
    }

    Ok(pixels)
}

/// Saturate a sample into the displayable range `[0, 255]`.
///
/// Values below 0 become 0, values at or above 256 become 255, values in
/// between truncate toward zero. This is value clamping, not the index
/// clamping convolution uses for edge replication; the two are separate on
/// purpose.
pub fn clamp_channel(value: f64) -> u8 {
    let value = value as i64;
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Apply one kernel to all three channels, producing filtered channels of
/// the same shapes.
pub fn filter_channels(
    channels: &[Matrix<f64>; 3],
    kernel: &Matrix<f64>,
) -> Result<[Matrix<f64>; 3], InvalidKernelError> {
    log::debug!(
        "filtering 3 channels with a {}x{} kernel",
        kernel.nrows(),
        kernel.ncols()
    );
    Ok([
        convolve(&channels[0], kernel)?,
        convolve(&channels[1], kernel)?,
        convolve(&channels[2], kernel)?,
    ])
}
