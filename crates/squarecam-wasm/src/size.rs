//! WASM bindings for size selection.

use squarecam_core::size;
use squarecam_core::{AspectRatio, Size};
use wasm_bindgen::prelude::*;

use crate::js_error;
use crate::types::JsSizeChoice;

/// Pair up parallel width/height arrays into sizes.
pub(crate) fn zip_sizes(widths: &[u32], heights: &[u32]) -> Vec<Size> {
    widths
        .iter()
        .zip(heights)
        .map(|(&w, &h)| Size::new(w, h))
        .collect()
}

/// Choose the best supported size for a 4:3 stream.
///
/// Sizes are passed as parallel `widths`/`heights` arrays, in the order the
/// camera reports them.
///
/// # Errors
///
/// Throws if the lists are empty.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const choice = select_best_size([1920, 640, 320], [1080, 480, 240], 640);
/// if (choice.fallback) reportCameraError();
/// ```
#[wasm_bindgen]
pub fn select_best_size(
    widths: Vec<u32>,
    heights: Vec<u32>,
    max_width: u32,
) -> Result<JsSizeChoice, JsValue> {
    let candidates = zip_sizes(&widths, &heights);
    size::select_best_size(&candidates, max_width, AspectRatio::FOUR_THREE)
        .map(JsSizeChoice::from)
        .map_err(js_error)
}
