use rayon::prelude::*;

use edgekit_image::Image;

/// Apply a function to each pixel in the image in parallel, row by row.
///
/// PRECONDITION: `src` and `dst` must have the same size.
pub fn par_iter_rows<T1, T2>(
    src: &Image<T1>,
    dst: &mut Image<T2>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    if cols == 0 {
        return;
    }

    src.as_slice()
        .par_chunks_exact(cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(cols))
        .for_each(|(src_row, dst_row)| {
            src_row
                .iter()
                .zip(dst_row.iter_mut())
                .for_each(|(src_pixel, dst_pixel)| f(src_pixel, dst_pixel));
        });
}

/// Apply a function to each pixel of a pair of images in parallel, row by row.
///
/// PRECONDITION: `src1`, `src2` and `dst` must have the same size.
pub fn par_iter_rows_two<T1, T2, T3>(
    src1: &Image<T1>,
    src2: &Image<T2>,
    dst: &mut Image<T3>,
    f: impl Fn(&T1, &T2, &mut T3) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
    T3: Send + Sync,
{
    let cols = src1.cols();
    if cols == 0 {
        return;
    }

    src1.as_slice()
        .par_chunks_exact(cols)
        .zip(src2.as_slice().par_chunks_exact(cols))
        .zip(dst.as_slice_mut().par_chunks_exact_mut(cols))
        .for_each(|((src1_row, src2_row), dst_row)| {
            src1_row
                .iter()
                .zip(src2_row.iter())
                .zip(dst_row.iter_mut())
                .for_each(|((a, b), c)| f(a, b, c));
        });
}

/// Fill every pixel of `dst` in parallel from its `(row, col)` coordinate.
///
/// Used by the sliding-window filters, where each output pixel is computed
/// from a neighborhood of a source image captured by `f`.
pub fn par_fill_indexed<T>(dst: &mut Image<T>, f: impl Fn(usize, usize) -> T + Send + Sync)
where
    T: Send + Sync,
{
    let cols = dst.cols();
    if cols == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(r, dst_row)| {
            dst_row
                .iter_mut()
                .enumerate()
                .for_each(|(c, dst_pixel)| *dst_pixel = f(r, c));
        });
}
