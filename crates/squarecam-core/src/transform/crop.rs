//! Square cropping that matches the on-screen mask.
//!
//! The preview shows a square window over a larger frame. The captured
//! frame has a different resolution than the screen, so the crop is derived
//! from screen-to-image scale factors:
//!
//! ```text
//! aspect_x = image_width  / visible_width
//! aspect_y = image_height / visible_height
//! ```
//!
//! Part of the real display may be hidden behind system chrome (status or
//! navigation bars). That hidden strip, scaled into image pixels, shifts the
//! crop so the result lines up with what the user saw.

use serde::{Deserialize, Serialize};

use super::rotation::validate_buffer;
use crate::decode::CapturedImage;
use crate::error::CaptureError;

/// Visible and real display dimensions in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewportGeometry {
    /// Width of the area the app renders into.
    pub visible_width: u32,
    /// Height of the area the app renders into.
    pub visible_height: u32,
    /// Full panel width, including chrome.
    pub real_width: u32,
    /// Full panel height, including chrome.
    pub real_height: u32,
}

impl ViewportGeometry {
    pub fn new(visible_width: u32, visible_height: u32, real_width: u32, real_height: u32) -> Self {
        Self {
            visible_width,
            visible_height,
            real_width,
            real_height,
        }
    }

    /// A display with no hidden chrome.
    pub fn without_chrome(width: u32, height: u32) -> Self {
        Self::new(width, height, width, height)
    }

    /// Horizontal strip hidden behind chrome.
    pub fn offset_width(&self) -> u32 {
        self.real_width.saturating_sub(self.visible_width)
    }

    /// Vertical strip hidden behind chrome.
    pub fn offset_height(&self) -> u32 {
        self.real_height.saturating_sub(self.visible_height)
    }

    /// Screen-to-image scale factors for an image of the given size.
    ///
    /// A zero visible dimension yields a zero factor, which disables the
    /// chrome correction on that axis.
    pub fn scale_factors(&self, image_width: u32, image_height: u32) -> (f64, f64) {
        let scale = |image: u32, visible: u32| {
            if visible == 0 {
                0.0
            } else {
                image as f64 / visible as f64
            }
        };
        (
            scale(image_width, self.visible_width),
            scale(image_height, self.visible_height),
        )
    }
}

/// Placement of the square when the frame is wider than tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandscapeAnchor {
    /// Take the square at the left edge.
    #[default]
    Origin,
    /// Center the square horizontally and shift it by the scaled chrome
    /// width, mirroring the portrait correction.
    ChromeAdjusted,
}

/// A square region in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub side: u32,
}

/// Compute the square region of a `width` x `height` image to keep.
///
/// The side is always `min(width, height)` and the region always lies
/// inside the image.
pub fn compute_square_crop(
    width: u32,
    height: u32,
    viewport: &ViewportGeometry,
    anchor: LandscapeAnchor,
) -> CropRect {
    let (aspect_x, aspect_y) = viewport.scale_factors(width, height);

    if width >= height {
        let left = match anchor {
            LandscapeAnchor::Origin => 0,
            LandscapeAnchor::ChromeAdjusted => shifted_origin(
                width / 2 - height / 2,
                viewport.offset_width() as f64 * aspect_x,
                width - height,
            ),
        };
        CropRect {
            left,
            top: 0,
            side: height,
        }
    } else {
        let top = shifted_origin(
            height / 2 - width / 2,
            viewport.offset_height() as f64 * aspect_y,
            height - width,
        );
        CropRect {
            left: 0,
            top,
            side: width,
        }
    }
}

/// Centered origin plus a scaled chrome offset, truncated and kept in `[0, max]`.
fn shifted_origin(centered: u32, offset: f64, max: u32) -> u32 {
    let origin = (centered as f64 + offset) as u32;
    origin.min(max)
}

/// Crop a captured frame to the square the overlay showed.
///
/// Consumes the source; the returned image always has `width == height`.
///
/// # Errors
///
/// Returns `CaptureError::InvalidBuffer` if the pixel buffer does not match
/// the image dimensions.
pub fn crop_to_square(
    image: CapturedImage,
    viewport: &ViewportGeometry,
    anchor: LandscapeAnchor,
) -> Result<CapturedImage, CaptureError> {
    let rect = compute_square_crop(image.width, image.height, viewport, anchor);
    crop_region(image, rect)
}

/// Extract a square region, consuming the source.
///
/// A region covering the whole image returns the source buffer as is.
/// The region is clamped to the image bounds.
///
/// # Errors
///
/// Returns `CaptureError::InvalidBuffer` if the pixel buffer does not match
/// the image dimensions.
pub fn crop_region(image: CapturedImage, rect: CropRect) -> Result<CapturedImage, CaptureError> {
    validate_buffer(&image)?;

    if rect.left == 0 && rect.top == 0 && rect.side == image.width && rect.side == image.height {
        return Ok(image);
    }

    let side = rect
        .side
        .min(image.width.saturating_sub(rect.left))
        .min(image.height.saturating_sub(rect.top));

    let row_bytes = side as usize * 3;
    let mut output = vec![0u8; row_bytes * side as usize];

    // Copy pixel data row by row
    for y in 0..side as usize {
        let src_y = rect.top as usize + y;
        let src_start = (src_y * image.width as usize + rect.left as usize) * 3;
        let dst_start = y * row_bytes;
        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    Ok(CapturedImage::new(side, side, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::rotation::tests::test_image;

    fn first_pixel(image: &CapturedImage) -> (u8, u8) {
        (image.pixels[0], image.pixels[1])
    }

    #[test]
    fn test_viewport_offsets() {
        let viewport = ViewportGeometry::new(1080, 1794, 1080, 1920);
        assert_eq!(viewport.offset_width(), 0);
        assert_eq!(viewport.offset_height(), 126);

        // Real smaller than visible never underflows
        let odd = ViewportGeometry::new(100, 100, 90, 90);
        assert_eq!(odd.offset_width(), 0);
        assert_eq!(odd.offset_height(), 0);
    }

    #[test]
    fn test_landscape_crops_left_square() {
        let img = test_image(200, 150);
        let viewport = ViewportGeometry::without_chrome(100, 75);
        let result = crop_to_square(img, &viewport, LandscapeAnchor::Origin).unwrap();

        assert_eq!((result.width, result.height), (150, 150));
        assert_eq!(first_pixel(&result), (0, 0));
    }

    #[test]
    fn test_landscape_origin_ignores_chrome() {
        let viewport = ViewportGeometry::new(100, 75, 120, 75);
        let rect = compute_square_crop(200, 150, &viewport, LandscapeAnchor::Origin);
        assert_eq!(rect, CropRect { left: 0, top: 0, side: 150 });
    }

    #[test]
    fn test_landscape_chrome_adjusted() {
        // aspect_x = 2.0, offset_w = 10 -> shift 20; centered = 100 - 75 = 25
        let viewport = ViewportGeometry::new(100, 75, 110, 75);
        let rect = compute_square_crop(200, 150, &viewport, LandscapeAnchor::ChromeAdjusted);
        assert_eq!(rect, CropRect { left: 45, top: 0, side: 150 });
    }

    #[test]
    fn test_landscape_chrome_adjusted_clamps() {
        let viewport = ViewportGeometry::new(100, 75, 400, 75);
        let rect = compute_square_crop(200, 150, &viewport, LandscapeAnchor::ChromeAdjusted);
        assert_eq!(rect.left, 50);
        assert_eq!(rect.side, 150);
    }

    #[test]
    fn test_portrait_centered_without_chrome() {
        let img = test_image(60, 100);
        let viewport = ViewportGeometry::without_chrome(60, 100);
        let result = crop_to_square(img, &viewport, LandscapeAnchor::Origin).unwrap();

        assert_eq!((result.width, result.height), (60, 60));
        // 100/2 - 60/2 = 20
        assert_eq!(first_pixel(&result), (0, 20));
    }

    #[test]
    fn test_portrait_shifted_by_chrome() {
        // 960x1280 capture shown on a 480x800 viewport with a 40px bar hidden
        let viewport = ViewportGeometry::new(480, 800, 480, 840);
        let rect = compute_square_crop(960, 1280, &viewport, LandscapeAnchor::Origin);

        // centered = 640 - 480 = 160, aspect_y = 1.6, shift = 64
        assert_eq!(rect, CropRect { left: 0, top: 224, side: 960 });
    }

    #[test]
    fn test_portrait_shift_clamped_to_image() {
        let viewport = ViewportGeometry::new(60, 100, 60, 1000);
        let rect = compute_square_crop(60, 100, &viewport, LandscapeAnchor::Origin);
        assert_eq!(rect.top, 40);
    }

    #[test]
    fn test_square_input_reuses_buffer() {
        let img = test_image(50, 50);
        let ptr = img.pixels.as_ptr();
        let viewport = ViewportGeometry::new(50, 50, 60, 70);
        let result = crop_to_square(img, &viewport, LandscapeAnchor::ChromeAdjusted).unwrap();

        assert_eq!(result.pixels.as_ptr(), ptr);
        assert!(result.is_square());
    }

    #[test]
    fn test_zero_viewport_disables_correction() {
        let viewport = ViewportGeometry::new(0, 0, 100, 100);
        let rect = compute_square_crop(60, 100, &viewport, LandscapeAnchor::Origin);
        assert_eq!(rect.top, 20);
    }

    #[test]
    fn test_crop_region_clamps() {
        let img = test_image(10, 10);
        let result = crop_region(img, CropRect { left: 6, top: 2, side: 8 }).unwrap();
        assert_eq!((result.width, result.height), (4, 4));
        assert_eq!(first_pixel(&result), (6, 2));
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let img = CapturedImage {
            width: 10,
            height: 20,
            pixels: vec![0; 12],
        };
        let viewport = ViewportGeometry::without_chrome(10, 20);
        let result = crop_to_square(img, &viewport, LandscapeAnchor::Origin);

        match result {
            Err(CaptureError::InvalidBuffer {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 600);
                assert_eq!(actual, 12);
            }
            other => panic!("Expected InvalidBuffer, got: {:?}", other),
        }
    }

    #[test]
    fn test_full_region_with_bad_buffer_is_rejected() {
        let img = CapturedImage {
            width: 4,
            height: 4,
            pixels: vec![0; 47],
        };
        let rect = CropRect { left: 0, top: 0, side: 4 };
        assert!(matches!(
            crop_region(img, rect),
            Err(CaptureError::InvalidBuffer { .. })
        ));
    }
}
