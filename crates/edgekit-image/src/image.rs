use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use edgekit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the size has zero rows or columns.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents a single-channel image with pixel data.
///
/// The pixels are stored row-major: the sample at row `y` and column `x`
/// lives at offset `y * width + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, row-major.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgekit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.area() {
            return Err(ImageError::InvalidDataLength(data.len(), size.area()));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and a constant pixel value.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgekit_image::{Image, ImageSize};
    ///
    /// let image = Image::<i32>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        Image::new(size, vec![val; size.area()])
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the pixel data as a row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the pixel at `[row, col]`, or `None` if the index is out of bounds.
    pub fn get(&self, index: [usize; 2]) -> Option<&T> {
        let [row, col] = index;
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.data.get(row * self.cols() + col)
    }

    /// Get a mutable reference to the pixel at `[row, col]`.
    pub fn get_mut(&mut self, index: [usize; 2]) -> Option<&mut T> {
        let [row, col] = index;
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        let cols = self.cols();
        self.data.get_mut(row * cols + col)
    }

    /// Get one row of the image.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows() {
            return None;
        }
        let start = row * self.cols();
        Some(&self.data[start..start + self.cols()])
    }

    /// Apply `f` to every pixel and return a new image of the same size.
    pub fn map<U, F>(&self, f: F) -> Image<U>
    where
        F: Fn(&T) -> U,
    {
        Image {
            size: self.size,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::CastError`] if any value is not representable in `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgekit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new([2, 1].into(), vec![3, 250]).unwrap();
    /// let image_i32 = image.cast::<i32>().unwrap();
    ///
    /// assert_eq!(image_i32.as_slice(), &[3, 250]);
    /// ```
    pub fn cast<U>(&self) -> Result<Image<U>, ImageError>
    where
        T: num_traits::NumCast + Copy,
        U: num_traits::NumCast,
    {
        let data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, data)
    }
}
