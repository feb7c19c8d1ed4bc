use std::{fs, fs::File, path::Path};

use edgekit_image::{Image, ImageSize};
use png::{BitDepth, ColorType, Decoder, Encoder};

use crate::error::IoError;

/// Read a PNG image with a single channel (mono8).
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A grayscale image with a single channel (mono8).
///
/// # Errors
///
/// Fails if the file is missing, is not a `.png`, cannot be decoded, or is not 8-bit grayscale.
pub fn read_image_png_mono8(file_path: impl AsRef<Path>) -> Result<Image<u8>, IoError> {
    let (buf, size) = read_png_impl(file_path)?;
    Ok(Image::new(size, buf)?)
}

/// Decodes a PNG image with a single channel (mono8) from raw bytes.
///
/// # Arguments
///
/// - `bytes` - Raw bytes of the png file
pub fn decode_image_png_mono8(bytes: &[u8]) -> Result<Image<u8>, IoError> {
    let (buf, size) = decode_png_impl(bytes)?;
    Ok(Image::new(size, buf)?)
}

/// Writes the given PNG _(grayscale 8-bit)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image to encode.
pub fn write_image_png_gray8(
    file_path: impl AsRef<Path>,
    image: &Image<u8>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(file, image.width() as u32, image.height() as u32);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image.as_slice())
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    log::debug!("wrote {} to {}", image.size(), file_path.display());

    Ok(())
}

// utility function to read the png file
fn read_png_impl(file_path: impl AsRef<Path>) -> Result<(Vec<u8>, ImageSize), IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    match file_path.extension() {
        Some(extension) if extension.eq_ignore_ascii_case("png") => {}
        _ => return Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }

    let bytes = fs::read(file_path)?;
    decode_png_impl(&bytes)
}

// decode an 8-bit grayscale png from memory
fn decode_png_impl(bytes: &[u8]) -> Result<(Vec<u8>, ImageSize), IoError> {
    let mut reader = Decoder::new(bytes)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if color_type != ColorType::Grayscale || bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedPngFormat(color_type, bit_depth));
    }

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    Ok((
        buf,
        ImageSize {
            width: info.width as usize,
            height: info.height as usize,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoError;

    #[test]
    fn read_write_png_gray8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let image = Image::<u8>::new([4, 3].into(), (0..12).map(|v| v * 20).collect())?;
        write_image_png_gray8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_png_mono8(&file_path)?;
        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn decode_png_from_bytes() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("bytes.png");

        let image = Image::<u8>::from_size_val([5, 2].into(), 77)?;
        write_image_png_gray8(&file_path, &image)?;

        let bytes = fs::read(&file_path)?;
        let decoded = decode_image_png_mono8(&bytes)?;
        assert_eq!(decoded, image);

        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let res = read_image_png_mono8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_wrong_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.jpg");
        fs::write(&file_path, [0u8; 4])?;

        let res = read_image_png_mono8(&file_path);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));

        Ok(())
    }

    #[test]
    fn read_rgb_png_is_rejected() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("rgb.png");

        let file = File::create(&file_path)?;
        let mut encoder = Encoder::new(file, 2, 2);
        encoder.set_color(ColorType::Rgb);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
        writer
            .write_image_data(&[0u8; 12])
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

        let res = read_image_png_mono8(&file_path);
        assert!(matches!(
            res,
            Err(IoError::UnsupportedPngFormat(ColorType::Rgb, BitDepth::Eight))
        ));

        Ok(())
    }

    #[test]
    fn decode_garbage_bytes() {
        let res = decode_image_png_mono8(b"definitely not a png");
        assert!(matches!(res, Err(IoError::PngDecodeError(_))));
    }
}
