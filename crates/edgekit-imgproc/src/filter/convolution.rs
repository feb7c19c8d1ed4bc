use edgekit_image::{Image, ImageError};

use super::kernels::Kernel3;
use crate::{
    padding::pad,
    parallel,
    window::{window_at, Window3},
};

/// Sum of the element-wise products of a window and a kernel.
#[inline]
fn multiply_accumulate(window: &Window3<i32>, kernel: &[[i32; 3]; 3]) -> i32 {
    let mut sum = 0i32;
    for (w_row, k_row) in window.iter().zip(kernel.iter()) {
        for (&w, &k) in w_row.iter().zip(k_row.iter()) {
            sum += w * k;
        }
    }
    sum
}

/// Check that `max |pixel| * bound` fits in `i32`.
///
/// With that bound every product and partial sum of a 3x3 window stays in range.
/// It always holds for 8-bit inputs with the stock kernels.
pub(crate) fn check_accumulator_range(src: &Image<i32>, bound: i64) -> Result<(), ImageError> {
    let max_abs = src
        .as_slice()
        .iter()
        .map(|&v| i64::from(v).abs())
        .max()
        .unwrap_or(0);

    if max_abs.saturating_mul(bound) > i64::from(i32::MAX) {
        return Err(ImageError::AccumulatorOverflow(max_abs, bound));
    }

    Ok(())
}

/// Correlate an image with a 3x3 kernel using zero padding.
///
/// Each output pixel is `sum_{a,b} window[a][b] * kernel[a][b]`, where `window` is
/// the zero-padded 3x3 neighborhood of the pixel. The kernel is applied as is.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `kernel` - The kernel to apply.
///
/// # Returns
///
/// The raw signed response with shape (H, W). No clamping is applied.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if the image has zero rows or columns, and
/// [`ImageError::AccumulatorOverflow`] if the pixel values times the absolute kernel sum
/// do not fit in `i32`.
pub fn correlate2d(src: &Image<i32>, kernel: &Kernel3) -> Result<Image<i32>, ImageError> {
    let padded = pad(src)?;
    check_accumulator_range(src, kernel.abs_sum())?;
    let padded_cols = padded.cols();
    let padded_data = padded.as_slice();
    let k = kernel.rows();

    let mut dst = Image::from_size_val(src.size(), 0i32)?;
    parallel::par_fill_indexed(&mut dst, |r, c| {
        multiply_accumulate(&window_at(padded_data, padded_cols, r, c), k)
    });

    Ok(dst)
}

/// Convolve an image with a 3x3 kernel using zero padding.
///
/// The kernel is rotated by 180 degrees before the multiply-accumulate, so this is a
/// true convolution: `convolve2d(src, k) == correlate2d(src, &k.flipped())`.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `kernel` - The kernel to convolve with.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if the image has zero rows or columns.
///
/// # Example
///
/// ```rust
/// use edgekit_image::Image;
/// use edgekit_imgproc::filter::{convolve2d, kernels::SOBEL_X};
///
/// let src = Image::<i32>::new([3, 1].into(), vec![0, 10, 20]).unwrap();
/// let gx = convolve2d(&src, &SOBEL_X).unwrap();
///
/// assert_eq!(gx.as_slice(), &[20, 40, -20]);
/// ```
pub fn convolve2d(src: &Image<i32>, kernel: &Kernel3) -> Result<Image<i32>, ImageError> {
    log::debug!("convolve2d {} with kernel {}", src.size(), kernel);
    correlate2d(src, &kernel.flipped())
}
