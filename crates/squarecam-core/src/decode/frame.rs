//! Decoding of the still frame delivered by the camera.
//!
//! The camera hands over an encoded buffer (JPEG on most hardware). EXIF
//! orientation is deliberately not applied here: the capture pipeline
//! computes the rotation itself from the camera and device orientation.

use std::io::Cursor;

use image::ImageReader;

use super::{CapturedImage, DecodeError};

/// Decode captured frame bytes into an RGB image.
///
/// # Errors
///
/// Returns `DecodeError::Empty` for a zero-length buffer and
/// `DecodeError::CorruptedFile` if the bytes cannot be decoded.
pub fn decode_frame(bytes: &[u8]) -> Result<CapturedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(CapturedImage::from_rgb_image(img.into_rgb8()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    /// Encode a solid-color PNG in memory.
    pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]));
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, ImageFormat::Png)
            .unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_decode_png_frame() {
        let bytes = png_bytes(8, 6);
        let img = decode_frame(&bytes).unwrap();

        assert_eq!(img.width, 8);
        assert_eq!(img.height, 6);
        assert_eq!(img.pixels.len(), 8 * 6 * 3);
        // Pixel (3, 2) encodes its own coordinates
        let idx = ((2 * 8 + 3) * 3) as usize;
        assert_eq!(&img.pixels[idx..idx + 3], &[3, 2, 7]);
    }

    #[test]
    fn test_decode_jpeg_frame() {
        let img = RgbImage::from_pixel(16, 12, Rgb([200, 100, 50]));
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, ImageFormat::Jpeg)
            .unwrap();

        let decoded = decode_frame(&cursor.into_inner()).unwrap();
        assert_eq!((decoded.width, decoded.height), (16, 12));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(matches!(decode_frame(&[]), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_decode_garbage() {
        let result = decode_frame(&[0x00, 0x01, 0x02, 0x03]);
        match result {
            Err(DecodeError::CorruptedFile(_)) => {}
            Err(e) => panic!("Expected CorruptedFile error, got: {:?}", e),
            Ok(_) => panic!("Expected error, got success"),
        }
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(8, 8);
        let truncated = &bytes[0..bytes.len() / 2];
        assert!(decode_frame(truncated).is_err());
    }
}
