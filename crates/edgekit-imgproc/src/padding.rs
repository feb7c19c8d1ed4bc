use edgekit_image::{Image, ImageError, ImageSize};

/// Represents 2D padding with top, bottom, left, and right values (in pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding2D {
    /// Amount of padding to add on the top side.
    pub top: usize,
    /// Amount of padding to add on the bottom side.
    pub bottom: usize,
    /// Amount of padding to add on the left side.
    pub left: usize,
    /// Amount of padding to add on the right side.
    pub right: usize,
}

impl Padding2D {
    /// Same padding on all four sides.
    pub const fn uniform(n: usize) -> Self {
        Self {
            top: n,
            bottom: n,
            left: n,
            right: n,
        }
    }

    /// The size of an image of `size` once this padding is applied.
    pub fn padded_size(&self, size: ImageSize) -> ImageSize {
        ImageSize {
            width: size.width + self.left + self.right,
            height: size.height + self.top + self.bottom,
        }
    }

    /// Validates that a new image size correctly matches the expected dimensions
    /// after applying this padding to an existing image.
    ///
    /// # Example
    /// ```rust
    /// use edgekit_image::ImageSize;
    /// use edgekit_imgproc::padding::Padding2D;
    /// let padding = Padding2D { top: 1, bottom: 1, left: 2, right: 2 };
    /// let old_size = ImageSize { width: 4, height: 4 };
    /// let new_size = ImageSize { width: 8, height: 6 };
    ///
    /// assert!(padding.validate_size(old_size, new_size));
    /// ```
    pub fn validate_size(&self, old_size: ImageSize, new_size: ImageSize) -> bool {
        self.padded_size(old_size) == new_size
    }
}

/// Copies `src` into the center of `dst` and fills the border with `constant_value`.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `dst` - The destination image where the padded output will be stored.
/// * `padding` - The amount of padding (in pixels) for all four sides.
/// * `constant_value` - The value written to every border cell.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the size of `dst` does not match
/// `src` grown by `padding`.
///
/// # Example
///
/// ```rust
/// use edgekit_image::{Image, ImageSize};
/// use edgekit_imgproc::padding::{spatial_padding, Padding2D};
///
/// let src = Image::<u8>::new(ImageSize { width: 2, height: 2 }, vec![1u8; 4]).unwrap();
/// let mut dst = Image::<u8>::from_size_val(ImageSize { width: 4, height: 4 }, 0).unwrap();
///
/// spatial_padding(&src, &mut dst, Padding2D::uniform(1), 0u8).unwrap();
///
/// assert_eq!(dst.get([0, 0]), Some(&0));
/// assert_eq!(dst.get([1, 1]), Some(&1));
/// ```
pub fn spatial_padding<T>(
    src: &Image<T>,
    dst: &mut Image<T>,
    padding: Padding2D,
    constant_value: T,
) -> Result<(), ImageError>
where
    T: Copy,
{
    if !padding.validate_size(src.size(), dst.size()) {
        let expected = padding.padded_size(src.size());
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            expected.width,
            expected.height,
        ));
    }

    let old_stride = src.width();
    let new_stride = dst.width();

    let new_data = dst.as_slice_mut();
    new_data.fill(constant_value);

    // copy old image data as center of new image data
    if old_stride > 0 {
        let row_offset = padding.top * new_stride + padding.left;
        for (src_row, dst_row) in src
            .as_slice()
            .chunks_exact(old_stride)
            .zip(new_data[row_offset..].chunks_mut(new_stride))
        {
            dst_row[..old_stride].copy_from_slice(src_row);
        }
    }

    Ok(())
}

/// Wraps an image with a one-cell zero border on all four sides.
///
/// The result has size `(H + 2, W + 2)` and `padded[i + 1][j + 1] == image[i][j]`.
/// The input is left untouched.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if the image has zero rows or columns.
pub fn pad<T>(src: &Image<T>) -> Result<Image<T>, ImageError>
where
    T: Copy + num_traits::Zero,
{
    if src.size().is_empty() {
        return Err(ImageError::EmptyImage(src.width(), src.height()));
    }

    let padding = Padding2D::uniform(1);
    let mut dst = Image::from_size_val(padding.padded_size(src.size()), T::zero())?;
    spatial_padding(src, &mut dst, padding, T::zero())?;

    Ok(dst)
}
