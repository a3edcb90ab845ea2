//! Core types for captured frames.

use thiserror::Error;

/// Error types for frame decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The camera delivered an empty buffer.
    #[error("Captured frame is empty")]
    Empty,

    /// The bytes are not a recognized image or are truncated.
    #[error("Corrupted or incomplete frame: {0}")]
    CorruptedFile(String),
}

/// A decoded capture with RGB pixel data.
///
/// The buffer is moved through the capture pipeline rather than copied:
/// rotation consumes the image and returns a new one, and cropping does the
/// same. Once the pipeline returns, the caller owns the final square image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl CapturedImage {
    /// Create a new CapturedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a CapturedImage from an image::RgbImage without copying.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Hand the buffer to the image crate.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn into_rgb_image(self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}
