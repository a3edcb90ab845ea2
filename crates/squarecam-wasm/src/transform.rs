//! WASM bindings for capture transforms.

use crate::js_error;
use crate::types::JsCapturedImage;
use squarecam_core::transform::{self, LandscapeAnchor, ViewportGeometry};
use wasm_bindgen::prelude::*;

pub(crate) fn anchor(chrome_adjusted: bool) -> LandscapeAnchor {
    if chrome_adjusted {
        LandscapeAnchor::ChromeAdjusted
    } else {
        LandscapeAnchor::Origin
    }
}

/// Rotate an image clockwise by `degrees`.
///
/// Multiples of 90 are exact; other angles expand the canvas.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const upright = rotate_capture(image, 90);
/// ```
#[wasm_bindgen]
pub fn rotate_capture(image: &JsCapturedImage, degrees: u32) -> Result<JsCapturedImage, JsValue> {
    transform::rotate_capture(image.to_captured(), degrees)
        .map(JsCapturedImage::from_captured)
        .map_err(js_error)
}

/// Crop an image to the square shown by the preview mask.
///
/// Throws if the pixel buffer does not match the image dimensions.
///
/// # Arguments
///
/// * `visible_width`/`visible_height` - Area the page renders into
/// * `real_width`/`real_height` - Full screen, including browser/system chrome
/// * `chrome_adjusted` - Shift landscape crops by the chrome width
///
/// # Example (TypeScript)
///
/// ```typescript
/// const square = crop_to_square(image, innerWidth, innerHeight, screen.width, screen.height, false);
/// ```
#[wasm_bindgen]
pub fn crop_to_square(
    image: &JsCapturedImage,
    visible_width: u32,
    visible_height: u32,
    real_width: u32,
    real_height: u32,
    chrome_adjusted: bool,
) -> Result<JsCapturedImage, JsValue> {
    let viewport = ViewportGeometry::new(visible_width, visible_height, real_width, real_height);
    transform::crop_to_square(image.to_captured(), &viewport, anchor(chrome_adjusted))
        .map(JsCapturedImage::from_captured)
        .map_err(js_error)
}
