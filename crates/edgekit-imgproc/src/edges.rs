use edgekit_image::{Image, ImageError};

use crate::{
    filter::{
        convolve2d,
        kernels::{DIAG_135, DIAG_45, SOBEL_X, SOBEL_Y},
    },
    normalize::normalize_to_u8,
    parallel,
};

/// Normalized edge maps along x and y, plus their combined magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMaps {
    /// Response to the horizontal Sobel kernel.
    pub x: Image<u8>,
    /// Response to the vertical Sobel kernel.
    pub y: Image<u8>,
    /// Gradient magnitude, computed from the raw responses.
    pub magnitude: Image<u8>,
}

/// Normalized edge maps along both diagonals.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagonalEdges {
    /// Response to the 45 degree kernel.
    pub d45: Image<u8>,
    /// Response to the 135 degree kernel.
    pub d135: Image<u8>,
}

/// Per-pixel Euclidean norm of two raw gradient images.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if `gx` has zero rows or columns and
/// [`ImageError::InvalidImageSize`] if the two gradients differ in size.
pub fn gradient_magnitude(gx: &Image<i32>, gy: &Image<i32>) -> Result<Image<f64>, ImageError> {
    if gx.size().is_empty() {
        return Err(ImageError::EmptyImage(gx.width(), gx.height()));
    }

    if gx.size() != gy.size() {
        return Err(ImageError::InvalidImageSize(
            gy.cols(),
            gy.rows(),
            gx.cols(),
            gx.rows(),
        ));
    }

    let mut magnitude = Image::from_size_val(gx.size(), 0.0f64)?;
    parallel::par_iter_rows_two(gx, gy, &mut magnitude, |&x, &y, m| {
        let (x, y) = (x as f64, y as f64);
        *m = (x * x + y * y).sqrt();
    });

    Ok(magnitude)
}

/// Detect edges along x and y with the Sobel kernels.
///
/// The magnitude is combined from the raw signed responses before any normalization.
/// Each of the three outputs is then stretched onto `[0, 255]` with its own range.
///
/// # Arguments
///
/// * `src` - The (denoised) source image with shape (H, W).
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if the image has zero rows or columns.
///
/// # Example
///
/// ```rust
/// use edgekit_image::Image;
/// use edgekit_imgproc::edges::edge_detect;
///
/// let src = Image::<i32>::new([3, 3].into(), vec![0, 0, 9, 0, 0, 9, 0, 0, 9]).unwrap();
/// let edges = edge_detect(&src).unwrap();
///
/// assert_eq!(edges.x.size(), src.size());
/// assert_eq!(edges.magnitude.size(), src.size());
/// ```
pub fn edge_detect(src: &Image<i32>) -> Result<EdgeMaps, ImageError> {
    let raw_x = convolve2d(src, &SOBEL_X)?;
    let raw_y = convolve2d(src, &SOBEL_Y)?;
    let raw_magnitude = gradient_magnitude(&raw_x, &raw_y)?;

    Ok(EdgeMaps {
        x: normalize_to_u8(&raw_x)?,
        y: normalize_to_u8(&raw_y)?,
        magnitude: normalize_to_u8(&raw_magnitude)?,
    })
}

/// Detect edges along the 45 and 135 degree diagonals.
///
/// Each response is normalized independently; no magnitude is combined.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if the image has zero rows or columns.
pub fn edge_diagonal(src: &Image<i32>) -> Result<DiagonalEdges, ImageError> {
    log::debug!("diagonal kernel 45: {}", DIAG_45);
    log::debug!("diagonal kernel 135: {}", DIAG_135);

    let raw_45 = convolve2d(src, &DIAG_45)?;
    let raw_135 = convolve2d(src, &DIAG_135)?;

    Ok(DiagonalEdges {
        d45: normalize_to_u8(&raw_45)?,
        d135: normalize_to_u8(&raw_135)?,
    })
}
