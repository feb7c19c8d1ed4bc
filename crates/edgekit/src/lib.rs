//! Grayscale denoising and directional edge detection.
//!
//! Re-exports the image container, the processing operations and the PNG I/O.

#[doc(inline)]
pub use edgekit_image as image;

#[doc(inline)]
pub use edgekit_imgproc as imgproc;

#[doc(inline)]
pub use edgekit_io as io;
