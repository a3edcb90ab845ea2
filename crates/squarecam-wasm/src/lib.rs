//! SquareCam WASM - WebAssembly bindings for SquareCam
//!
//! This crate exposes squarecam-core to the JavaScript shell that owns the
//! real camera. The shell feeds in camera metadata, device rotation, display
//! geometry and the captured frame; the bindings hand back orientations,
//! chosen sizes and the final square image.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data and sizes
//! - `orientation` - display orientation computation
//! - `size` - preview/picture size selection
//! - `transform` - rotation and square crop of single images
//! - `session` - stateful capture session (remember orientation, process frame)
//! - `controls` - flash cycle, button state and overlay geometry
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCaptureSession } from '@squarecam/wasm';
//!
//! await init();
//!
//! const session = new JsCaptureSession({ picture_max_width: 1280 });
//! session.configure(info.facing === 'front', info.orientation, screen.orientation.angle);
//! session.request_capture();
//! // ... later, when the camera delivers the JPEG
//! const square = session.on_frame_captured(bytes, innerWidth, innerHeight, screen.width, screen.height);
//! ```

use wasm_bindgen::prelude::*;

mod controls;
mod orientation;
mod session;
mod size;
mod transform;
mod types;

pub use controls::{
    flash_button_state, next_camera_id, next_flash_mode, overlay_mask, switch_camera_visible,
};
pub use orientation::compute_display_orientation;
pub use session::JsCaptureSession;
pub use size::select_best_size;
pub use transform::{crop_to_square, rotate_capture};
pub use types::{JsCapturedImage, JsSizeChoice};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log an error to the browser console and wrap it as a JS `Error`.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    let message = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}
