use edgekit_image::ImageError;

/// An immutable 3x3 integer kernel, stored row-major with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel3([[i32; 3]; 3]);

/// Horizontal Sobel kernel, responds to edges along x.
pub const SOBEL_X: Kernel3 = Kernel3::new([[1, 0, -1], [2, 0, -2], [1, 0, -1]]);

/// Vertical Sobel kernel, responds to edges along y.
pub const SOBEL_Y: Kernel3 = Kernel3::new([[1, 2, 1], [0, 0, 0], [-1, -2, -1]]);

/// 45 degree diagonal kernel.
pub const DIAG_45: Kernel3 = Kernel3::new([[0, 1, 2], [-1, 0, 1], [-2, -1, 0]]);

/// 135 degree diagonal kernel.
pub const DIAG_135: Kernel3 = Kernel3::new([[-2, -1, 0], [-1, 0, 1], [0, 1, 2]]);

/// All-ones weights, turns the weighted median into a plain median.
pub const ONES: Kernel3 = Kernel3::new([[1; 3]; 3]);

impl Kernel3 {
    /// Create a kernel from its rows.
    pub const fn new(rows: [[i32; 3]; 3]) -> Self {
        Self(rows)
    }

    /// The kernel coefficients, row-major.
    pub fn rows(&self) -> &[[i32; 3]; 3] {
        &self.0
    }

    /// The kernel rotated by 180 degrees, i.e. reversed along both axes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgekit_imgproc::filter::kernels::{Kernel3, DIAG_45};
    ///
    /// assert_eq!(
    ///     DIAG_45.flipped(),
    ///     Kernel3::new([[0, -1, -2], [1, 0, -1], [2, 1, 0]])
    /// );
    /// ```
    pub fn flipped(&self) -> Self {
        let mut out = [[0; 3]; 3];
        for (a, row) in self.0.iter().enumerate() {
            for (b, &k) in row.iter().enumerate() {
                out[2 - a][2 - b] = k;
            }
        }
        Self(out)
    }

    /// Sum of the absolute coefficients, the largest gain of a multiply-accumulate.
    pub fn abs_sum(&self) -> i64 {
        self.0.iter().flatten().map(|&k| i64::from(k).abs()).sum()
    }

    /// Largest absolute coefficient.
    pub fn max_abs(&self) -> i64 {
        self.0
            .iter()
            .flatten()
            .map(|&k| i64::from(k).abs())
            .max()
            .unwrap_or(0)
    }
}

impl std::fmt::Display for Kernel3 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rows = self
            .0
            .iter()
            .map(|r| format!("[{}, {}, {}]", r[0], r[1], r[2]))
            .collect::<Vec<_>>();
        write!(f, "[{}]", rows.join(", "))
    }
}

impl TryFrom<&[Vec<i32>]> for Kernel3 {
    type Error = ImageError;

    fn try_from(rows: &[Vec<i32>]) -> Result<Self, Self::Error> {
        let cols = rows.first().map_or(0, |r| r.len());
        if rows.len() != 3 || rows.iter().any(|r| r.len() != 3) {
            return Err(ImageError::KernelShapeMismatch(rows.len(), cols));
        }

        let mut out = [[0; 3]; 3];
        for (dst, src) in out.iter_mut().zip(rows.iter()) {
            dst.copy_from_slice(src);
        }
        Ok(Self(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flipped_twice_is_identity() {
        for k in [SOBEL_X, SOBEL_Y, DIAG_45, DIAG_135, ONES] {
            assert_eq!(k.flipped().flipped(), k);
        }
    }

    #[test]
    fn test_flipped_sobel() {
        assert_eq!(
            SOBEL_X.flipped(),
            Kernel3::new([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]])
        );
        assert_eq!(
            SOBEL_Y.flipped(),
            Kernel3::new([[-1, -2, -1], [0, 0, 0], [1, 2, 1]])
        );
    }

    #[test]
    fn test_try_from_rows() -> Result<(), ImageError> {
        let rows = vec![vec![0, 1, 2], vec![-1, 0, 1], vec![-2, -1, 0]];
        let k = Kernel3::try_from(rows.as_slice())?;
        assert_eq!(k, DIAG_45);
        Ok(())
    }

    #[test]
    fn test_try_from_wrong_shape() {
        let rows = vec![vec![1, 0, -1, 0], vec![2, 0, -2, 0], vec![1, 0, -1, 0]];
        assert_eq!(
            Kernel3::try_from(rows.as_slice()),
            Err(ImageError::KernelShapeMismatch(3, 4))
        );

        let rows = vec![vec![1, 0, -1], vec![2, 0, -2]];
        assert_eq!(
            Kernel3::try_from(rows.as_slice()),
            Err(ImageError::KernelShapeMismatch(2, 3))
        );

        let rows: Vec<Vec<i32>> = vec![];
        assert_eq!(
            Kernel3::try_from(rows.as_slice()),
            Err(ImageError::KernelShapeMismatch(0, 0))
        );
    }

    #[test]
    fn test_abs_bounds() {
        assert_eq!(SOBEL_X.abs_sum(), 8);
        assert_eq!(DIAG_45.abs_sum(), 8);
        assert_eq!(ONES.abs_sum(), 9);
        assert_eq!(DIAG_135.max_abs(), 2);
        assert_eq!(ONES.max_abs(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            DIAG_135.to_string(),
            "[[-2, -1, 0], [-1, 0, 1], [0, 1, 2]]"
        );
    }
}
