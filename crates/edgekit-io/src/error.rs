/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File is does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] edgekit_image::ImageError),

    /// The PNG is not 8-bit grayscale.
    #[error("Unsupported png format: {0:?} with bit depth {1:?}, expected 8-bit grayscale")]
    UnsupportedPngFormat(png::ColorType, png::BitDepth),

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),

    /// Error to decode the PNG image.
    #[error("Failed to decode the png image. {0}")]
    PngDecodeError(String),
}
