use edgekit_image::{Image, ImageError};

/// A 3x3 neighborhood, indexed as `window[a][b]` with `a` the row offset.
pub type Window3<T> = [[T; 3]; 3];

/// Extract the 3x3 neighborhood centered at `[center_row, center_col]` of a padded image.
///
/// The addressing law is `window[a][b] = padded[center_row - 1 + a][center_col - 1 + b]`.
/// For a one-cell padded image of an `(H, W)` source, valid centers are `[1, H]` x `[1, W]`.
///
/// # Errors
///
/// Returns [`ImageError::PixelIndexOutOfBounds`] if the window would read outside `padded`.
///
/// # Example
///
/// ```rust
/// use edgekit_image::Image;
/// use edgekit_imgproc::{padding::pad, window::window3x3};
///
/// let src = Image::<i32>::new([2, 2].into(), vec![1, 2, 3, 4]).unwrap();
/// let padded = pad(&src).unwrap();
///
/// let w = window3x3(&padded, 1, 1).unwrap();
/// assert_eq!(w, [[0, 0, 0], [0, 1, 2], [0, 3, 4]]);
/// ```
pub fn window3x3<T: Copy>(
    padded: &Image<T>,
    center_row: usize,
    center_col: usize,
) -> Result<Window3<T>, ImageError> {
    if center_row == 0
        || center_col == 0
        || center_row + 1 >= padded.rows()
        || center_col + 1 >= padded.cols()
    {
        return Err(ImageError::PixelIndexOutOfBounds(
            center_col,
            center_row,
            padded.cols(),
            padded.rows(),
        ));
    }

    Ok(window_at(
        padded.as_slice(),
        padded.cols(),
        center_row - 1,
        center_col - 1,
    ))
}

/// Read the 3x3 block whose top-left corner is `[top, left]` in a row-major buffer.
///
/// With a one-cell padded buffer, `[top, left]` equals the unpadded output coordinate.
/// The caller guarantees the block lies inside `data`.
#[inline]
pub(crate) fn window_at<T: Copy>(data: &[T], cols: usize, top: usize, left: usize) -> Window3<T> {
    let row = |a: usize| {
        let start = (top + a) * cols + left;
        [data[start], data[start + 1], data[start + 2]]
    };
    [row(0), row(1), row(2)]
}
