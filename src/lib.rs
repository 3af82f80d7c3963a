//! rasterlin: dense 2D matrices and spatial convolution for raster filtering.
//!
//! This crate provides a small row-major `Matrix<T>` with value-semantics
//! arithmetic, an edge-replicating `convolve` operator for applying linear
//! filters (blur, sharpen, edge kernels) to channel data, and helpers for
//! moving between packed pixels and per-channel matrices.
//!
//! The design favors small, testable modules with an optional `parallel`
//! feature to avoid requiring rayon unless explicitly enabled. Raster file
//! decoding and encoding stay with callers, which interact with the core
//! only through matrix construction, convolution, and element access.
pub mod convolve;
pub mod math;
pub mod raster;
