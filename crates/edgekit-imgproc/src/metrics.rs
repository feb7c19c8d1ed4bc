use edgekit_image::{Image, ImageError};

/// Compute the summed absolute difference between two 8-bit images.
///
/// ```text
/// L1(a, b) = sum_i |a_i - b_i|
/// ```
///
/// Unlike a loss, the sum is not averaged. It is meant to compare a result against a
/// stored reference with an absolute tolerance.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W).
/// * `image2` - The second input image with shape (H, W).
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the two images have different shapes.
///
/// # Example
///
/// ```
/// use edgekit_image::Image;
/// use edgekit_imgproc::metrics::l1_distance;
///
/// let image1 = Image::<u8>::new([3, 1].into(), vec![0, 10, 255]).unwrap();
/// let image2 = Image::<u8>::new([3, 1].into(), vec![5, 10, 250]).unwrap();
///
/// assert_eq!(l1_distance(&image1, &image2).unwrap(), 10);
/// ```
pub fn l1_distance(image1: &Image<u8>, image2: &Image<u8>) -> Result<u64, ImageError> {
    if image1.size() != image2.size() {
        return Err(ImageError::InvalidImageSize(
            image1.cols(),
            image1.rows(),
            image2.cols(),
            image2.rows(),
        ));
    }

    Ok(image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .map(|(&a, &b)| u64::from(a.abs_diff(b)))
        .sum())
}
