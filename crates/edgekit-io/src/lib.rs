#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access and PNG encoding/decoding failures.
pub mod error;

/// PNG image encoding and decoding.
///
/// Read and write 8-bit single channel PNG images.
pub mod png;
