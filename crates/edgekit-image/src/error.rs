/// An error type for the image and image processing crates.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the image has zero rows or columns.
    #[error("Image is empty: width {0}, height {1}")]
    EmptyImage(usize, usize),

    /// Error when two images are expected to have a compatible size.
    #[error("Invalid image size ({0}x{1}), expected ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a kernel is not 3x3.
    #[error("Kernel must be 3x3, got {0}x{1}")]
    KernelShapeMismatch(usize, usize),

    /// Error when a pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the image data has not been initialized.
    #[error("Image data is not initialized")]
    ImageDataNotInitialized,

    /// Error when a 3x3 filter could overflow its `i32` accumulator.
    #[error("Filter may overflow i32: max |pixel| {0} times kernel bound {1}")]
    AccumulatorOverflow(i64, i64),

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast image data")]
    CastError,
}
