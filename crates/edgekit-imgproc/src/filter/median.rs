use edgekit_image::{Image, ImageError};

use super::{
    convolution::check_accumulator_range,
    kernels::{Kernel3, ONES},
};
use crate::{padding::pad, parallel, window::window_at};

/// Apply a 3x3 weighted median filter with zero padding.
///
/// For each pixel the zero-padded 3x3 neighborhood is multiplied element-wise by
/// `weights`, the nine products are sorted ascending and the one at index 4 is kept.
/// Border pixels see the padding zeros as regular neighbours.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `weights` - Per-tap weights applied before ranking.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if the image has zero rows or columns, and
/// [`ImageError::AccumulatorOverflow`] if a weighted sample may not fit in `i32`.
pub fn median_filter(src: &Image<i32>, weights: &Kernel3) -> Result<Image<i32>, ImageError> {
    let padded = pad(src)?;
    check_accumulator_range(src, weights.max_abs())?;
    let padded_cols = padded.cols();
    let padded_data = padded.as_slice();
    let weights = weights.rows();

    let mut dst = Image::from_size_val(src.size(), 0i32)?;
    parallel::par_fill_indexed(&mut dst, |r, c| {
        let window = window_at(padded_data, padded_cols, r, c);

        let mut values = [0i32; 9];
        for (a, (w_row, k_row)) in window.iter().zip(weights.iter()).enumerate() {
            for (b, (&w, &k)) in w_row.iter().zip(k_row.iter()).enumerate() {
                values[a * 3 + b] = w * k;
            }
        }

        values.sort_unstable();
        values[4]
    });

    Ok(dst)
}

/// Remove salt-and-pepper noise with a plain 3x3 median filter.
///
/// Equivalent to [`median_filter`] with all-ones weights.
///
/// # Example
///
/// ```rust
/// use edgekit_image::Image;
/// use edgekit_imgproc::filter::median_denoise;
///
/// let src = Image::<i32>::new([3, 3].into(), vec![1, 1, 1, 1, 9, 1, 1, 1, 1]).unwrap();
/// let denoised = median_denoise(&src).unwrap();
///
/// assert_eq!(denoised.get([1, 1]), Some(&1));
/// ```
pub fn median_denoise(src: &Image<i32>) -> Result<Image<i32>, ImageError> {
    log::debug!("median_denoise {}", src.size());
    median_filter(src, &ONES)
}
