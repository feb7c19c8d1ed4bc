//! Dynamic-range normalization.
//!
//! Raw filter responses live in an arbitrary signed range. To store them as 8-bit
//! samples they are stretched linearly so that the observed minimum maps to 0 and the
//! observed maximum maps to 255:
//!
//! ```text
//! out = trunc(255 * ((v - min) / (max - min)))
//! ```
//!
//! The computation runs in `f64` in exactly that order and the cast to `u8` truncates.
//! A constant image has `max == min`; it is mapped to all zeros.

use num_traits::ToPrimitive;

use edgekit_image::{Image, ImageError};

use crate::parallel;

/// Find the minimum and maximum values in an image.
///
/// # Arguments
///
/// * `image` - The input image of shape (height, width).
///
/// # Returns
///
/// A tuple containing the minimum and maximum values in the image.
///
/// # Errors
///
/// If the image has no pixels, an error is returned.
///
/// # Example
///
/// ```
/// use edgekit_image::{Image, ImageSize};
/// use edgekit_imgproc::normalize::find_min_max;
///
/// let image = Image::<i32>::new(
///   ImageSize {
///     width: 3,
///     height: 2,
///   },
///   vec![0, -4, 0, 1, 2, 3],
/// )
/// .unwrap();
///
/// let (min, max) = find_min_max(&image).unwrap();
/// assert_eq!(min, -4);
/// assert_eq!(max, 3);
/// ```
pub fn find_min_max<T>(image: &Image<T>) -> Result<(T, T), ImageError>
where
    T: Copy + PartialOrd,
{
    // get the first element in the image
    let first_element = match image.as_slice().first() {
        Some(x) => *x,
        None => return Err(ImageError::ImageDataNotInitialized),
    };

    Ok(image
        .as_slice()
        .iter()
        .fold((first_element, first_element), |(min, max), &x| {
            (
                if x < min { x } else { min },
                if x > max { x } else { max },
            )
        }))
}

/// Stretch an image onto `[0, 255]` using its own minimum and maximum.
///
/// # Arguments
///
/// * `src` - The raw image of shape (height, width), e.g. a gradient response.
///
/// # Returns
///
/// An 8-bit image of the same shape. For a non-constant input its minimum is 0 and its
/// maximum is 255. A constant input yields an all-zero image.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if the image has zero rows or columns, and
/// [`ImageError::CastError`] if a value is not representable as `f64`.
///
/// # Example
///
/// ```
/// use edgekit_image::Image;
/// use edgekit_imgproc::normalize::normalize_to_u8;
///
/// let raw = Image::<i32>::new([3, 1].into(), vec![-10, 0, 10]).unwrap();
/// let out = normalize_to_u8(&raw).unwrap();
///
/// assert_eq!(out.as_slice(), &[0, 127, 255]);
/// ```
pub fn normalize_to_u8<T>(src: &Image<T>) -> Result<Image<u8>, ImageError>
where
    T: ToPrimitive,
{
    if src.size().is_empty() {
        return Err(ImageError::EmptyImage(src.width(), src.height()));
    }

    let values = src
        .as_slice()
        .iter()
        .map(|v| v.to_f64().ok_or(ImageError::CastError))
        .collect::<Result<Vec<f64>, ImageError>>()?;
    let values = Image::new(src.size(), values)?;

    let (min, max) = find_min_max(&values)?;
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    let range = max - min;

    if range == 0.0 {
        log::warn!(
            "normalize_to_u8: constant image ({}) of value {}, output set to zero",
            src.size(),
            min
        );
        return Ok(dst);
    }

    parallel::par_iter_rows(&values, &mut dst, |&v, out| {
        *out = (255.0 * ((v - min) / range)) as u8;
    });

    Ok(dst)
}
