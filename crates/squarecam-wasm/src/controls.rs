//! WASM bindings for flash, camera-switch and overlay controls.
//!
//! Flash modes cross the boundary as their camera parameter strings
//! (`"off"`, `"auto"`, `"on"`, `"red-eye"`, `"torch"`).

use squarecam_core::controls::UnknownFlashMode;
use squarecam_core::{controls, FlashMode, OverlayMask};
use wasm_bindgen::prelude::*;

use crate::js_error;

/// Parse the modes a camera reports, skipping ones this crate doesn't know.
pub(crate) fn parse_supported(supported: &[String]) -> Vec<FlashMode> {
    supported
        .iter()
        .filter_map(|mode| mode.parse().ok())
        .collect()
}

fn parse_current(current: &str) -> Result<FlashMode, UnknownFlashMode> {
    current.parse()
}

/// Next flash mode for the flash button.
///
/// # Example (TypeScript)
///
/// ```typescript
/// flashMode = next_flash_mode(flashMode, capabilities.flashModes);
/// ```
#[wasm_bindgen]
pub fn next_flash_mode(current: &str, supported: Vec<String>) -> Result<String, JsValue> {
    let current = parse_current(current).map_err(js_error)?;
    let next = controls::next_flash_mode(current, &parse_supported(&supported));
    Ok(next.as_str().to_string())
}

/// Flash button visibility and icon as `{ visible, icon }`.
#[wasm_bindgen]
pub fn flash_button_state(supported: Vec<String>, current: &str) -> Result<JsValue, JsValue> {
    let current = parse_current(current).map_err(js_error)?;
    let state = controls::flash_button_state(&parse_supported(&supported), current);
    serde_wasm_bindgen::to_value(&state).map_err(js_error)
}

#[wasm_bindgen]
pub fn switch_camera_visible(camera_count: u32) -> bool {
    controls::switch_camera_visible(camera_count)
}

#[wasm_bindgen]
pub fn next_camera_id(current: u32, camera_count: u32) -> u32 {
    controls::next_camera_id(current, camera_count)
}

/// Square window and surrounding shades for a `width` x `height` preview.
#[wasm_bindgen]
pub fn overlay_mask(width: u32, height: u32) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&OverlayMask::for_viewport(width, height)).map_err(js_error)
}
