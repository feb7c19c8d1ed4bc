//! Filter operations
//!
//! Zero-padded 3x3 neighborhood filters: a weighted median for denoising and
//! an integer convolution used by the edge kernels.

/// Filter kernels
pub mod kernels;

/// Convolution and correlation
mod convolution;
pub use convolution::*;

/// Median (rank) filter
mod median;
pub use median::*;
