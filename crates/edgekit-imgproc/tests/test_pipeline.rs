use edgekit_image::{Image, ImageError, ImageSize};
use edgekit_imgproc::{
    edges::{edge_detect, edge_diagonal, gradient_magnitude},
    filter::{
        convolve2d, correlate2d,
        kernels::{Kernel3, DIAG_135, DIAG_45, SOBEL_X, SOBEL_Y},
        median_denoise,
    },
    normalize::{find_min_max, normalize_to_u8},
    padding::pad,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_image(size: ImageSize, seed: u64) -> Result<Image<i32>, ImageError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..size.area()).map(|_| rng.random_range(0..=255)).collect();
    Image::new(size, data)
}

#[test]
fn test_shape_preservation() -> Result<(), ImageError> {
    for (i, size) in [[1, 1], [1, 7], [7, 1], [2, 3], [16, 9]].into_iter().enumerate() {
        let src = random_image(size.into(), i as u64)?;

        assert_eq!(pad(&src)?.size(), ImageSize::from([size[0] + 2, size[1] + 2]));
        assert_eq!(median_denoise(&src)?.size(), src.size());
        assert_eq!(convolve2d(&src, &DIAG_45)?.size(), src.size());

        let edges = edge_detect(&src)?;
        assert_eq!(edges.x.size(), src.size());
        assert_eq!(edges.y.size(), src.size());
        assert_eq!(edges.magnitude.size(), src.size());

        let diag = edge_diagonal(&src)?;
        assert_eq!(diag.d45.size(), src.size());
        assert_eq!(diag.d135.size(), src.size());
    }

    Ok(())
}

#[test]
fn test_flip_law_random_images() -> Result<(), ImageError> {
    let kernel = Kernel3::new([[3, -1, 0], [5, 2, -7], [0, 4, 1]]);

    for seed in 0..4 {
        let src = random_image([13, 11].into(), seed)?;
        assert_eq!(
            convolve2d(&src, &kernel)?,
            correlate2d(&src, &kernel.flipped())?
        );
    }

    Ok(())
}

#[test]
fn test_uniform_image_end_to_end() -> Result<(), ImageError> {
    let src = Image::<i32>::from_size_val([5, 5].into(), 100)?;

    let denoised = median_denoise(&src)?;
    for [r, c] in [[0, 0], [0, 4], [4, 0], [4, 4]] {
        assert_eq!(denoised.get([r, c]), Some(&0), "corner ({r}, {c})");
    }
    for r in 1..4 {
        for c in 1..4 {
            assert_eq!(denoised.get([r, c]), Some(&100));
        }
    }

    // a flat region has no gradient; only the zero-padded border responds
    for kernel in [SOBEL_X, SOBEL_Y, DIAG_45, DIAG_135] {
        let raw = convolve2d(&src, &kernel)?;
        for r in 1..4 {
            for c in 1..4 {
                assert_eq!(raw.get([r, c]), Some(&0), "{kernel} at ({r}, {c})");
            }
        }
        assert_ne!(find_min_max(&raw)?.0, find_min_max(&raw)?.1);
    }

    Ok(())
}

#[test]
fn test_all_zero_image_end_to_end() -> Result<(), ImageError> {
    let src = Image::<i32>::from_size_val([5, 5].into(), 0)?;

    let denoised = median_denoise(&src)?;
    assert!(denoised.as_slice().iter().all(|&v| v == 0));

    let edges = edge_detect(&denoised)?;
    for out in [&edges.x, &edges.y, &edges.magnitude] {
        assert!(out.as_slice().iter().all(|&v| v == 0));
    }

    Ok(())
}

#[test]
fn test_normalized_outputs_span_full_range() -> Result<(), ImageError> {
    let src = random_image([20, 15].into(), 42)?;
    let denoised = median_denoise(&src)?;

    let edges = edge_detect(&denoised)?;
    let diag = edge_diagonal(&denoised)?;
    for out in [&edges.x, &edges.y, &edges.magnitude, &diag.d45, &diag.d135] {
        assert_eq!(find_min_max(out)?, (0, 255));
    }

    Ok(())
}

#[test]
fn test_magnitude_combined_before_normalization() -> Result<(), ImageError> {
    // strong horizontal ramp, weak vertical ramp: the raw x and y ranges differ a lot
    let size = ImageSize {
        width: 6,
        height: 5,
    };
    let data = (0..size.height)
        .flat_map(|r| (0..size.width).map(move |c| (c * 40 + r * 3) as i32))
        .collect();
    let src = Image::<i32>::new(size, data)?;

    let edges = edge_detect(&src)?;

    let raw_x = convolve2d(&src, &SOBEL_X)?;
    let raw_y = convolve2d(&src, &SOBEL_Y)?;
    let expected = normalize_to_u8(&gradient_magnitude(&raw_x, &raw_y)?)?;
    assert_eq!(edges.magnitude, expected);

    // combining the already normalized components gives a different image
    let nx = normalize_to_u8(&raw_x)?.cast::<i32>()?;
    let ny = normalize_to_u8(&raw_y)?.cast::<i32>()?;
    let wrong_order = normalize_to_u8(&gradient_magnitude(&nx, &ny)?)?;
    assert_ne!(edges.magnitude, wrong_order);

    Ok(())
}

#[test]
fn test_u8_input_round_trip_through_i32() -> Result<(), ImageError> {
    let src = Image::<u8>::new([3, 3].into(), vec![10, 10, 10, 10, 255, 10, 10, 10, 10])?;

    let denoised = median_denoise(&src.cast::<i32>()?)?;
    let denoised_u8 = denoised.cast::<u8>()?;

    assert_eq!(denoised_u8.get([1, 1]), Some(&10));
    assert_eq!(denoised_u8.get([0, 0]), Some(&0));

    Ok(())
}
