#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// gradient based edge detection module.
pub mod edges;

/// image filtering module.
pub mod filter;

/// image comparison metrics module.
pub mod metrics;

/// operations to normalize images.
pub mod normalize;

/// image padding module.
pub mod padding;

/// module containing parallization utilities.
pub mod parallel;

/// 3x3 neighborhood extraction.
pub mod window;
