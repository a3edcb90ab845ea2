//! The capture pipeline: decode, rotate, crop.

use tracing::debug;

use crate::decode::{decode_frame, CapturedImage};
use crate::error::CaptureError;
use crate::transform::{crop_to_square, rotate_capture, LandscapeAnchor, ViewportGeometry};

/// Turns one encoded frame into the square photo the user framed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapturePipeline {
    landscape_anchor: LandscapeAnchor,
}

impl CapturePipeline {
    pub fn new(landscape_anchor: LandscapeAnchor) -> Self {
        Self { landscape_anchor }
    }

    pub fn landscape_anchor(&self) -> LandscapeAnchor {
        self.landscape_anchor
    }

    /// Decode `bytes`, rotate by `capture_orientation` and crop to a square.
    ///
    /// # Errors
    ///
    /// Any decode or transform failure ends this capture; there is no retry.
    pub fn process(
        &self,
        bytes: &[u8],
        capture_orientation: u32,
        viewport: &ViewportGeometry,
    ) -> Result<CapturedImage, CaptureError> {
        let image = decode_frame(bytes)?;
        debug!(
            width = image.width,
            height = image.height,
            capture_orientation,
            "Decoded captured frame"
        );

        let image = rotate_capture(image, capture_orientation)?;
        let square = crop_to_square(image, viewport, self.landscape_anchor)?;

        debug!(side = square.width, "Cropped capture to square");
        Ok(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{png_bytes, DecodeError};

    #[test]
    fn test_landscape_frame_rotated_to_portrait() {
        // A 128x96 sensor frame rotated 90 degrees becomes 96x128
        let bytes = png_bytes(128, 96);
        let viewport = ViewportGeometry::without_chrome(96, 128);
        let pipeline = CapturePipeline::default();

        let square = pipeline.process(&bytes, 90, &viewport).unwrap();
        assert_eq!((square.width, square.height), (96, 96));
        assert!(square.is_square());
    }

    #[test]
    fn test_zero_orientation_skips_rotation() {
        let bytes = png_bytes(40, 30);
        let viewport = ViewportGeometry::without_chrome(40, 30);
        let square = CapturePipeline::default()
            .process(&bytes, 0, &viewport)
            .unwrap();

        // Landscape origin anchor keeps the top-left pixel
        assert_eq!(square.width, 30);
        assert_eq!(&square.pixels[0..3], &[0, 0, 7]);
    }

    #[test]
    fn test_unaligned_orientation_still_square() {
        let bytes = png_bytes(32, 24);
        let viewport = ViewportGeometry::without_chrome(32, 24);
        let square = CapturePipeline::default()
            .process(&bytes, 30, &viewport)
            .unwrap();
        assert!(square.is_square());
    }

    #[test]
    fn test_decode_failure_is_terminal() {
        let viewport = ViewportGeometry::without_chrome(10, 10);
        let result = CapturePipeline::default().process(b"not an image", 90, &viewport);
        assert!(matches!(
            result,
            Err(CaptureError::Decode(DecodeError::CorruptedFile(_)))
        ));
    }

    #[test]
    fn test_pipeline_uses_configured_anchor() {
        let pipeline = CapturePipeline::new(LandscapeAnchor::ChromeAdjusted);
        assert_eq!(pipeline.landscape_anchor(), LandscapeAnchor::ChromeAdjusted);

        let bytes = png_bytes(40, 20);
        let viewport = ViewportGeometry::without_chrome(40, 20);
        let square = pipeline.process(&bytes, 0, &viewport).unwrap();
        // centered: 20 - 10 = 10
        assert_eq!(&square.pixels[0..3], &[10, 0, 7]);
    }
}
