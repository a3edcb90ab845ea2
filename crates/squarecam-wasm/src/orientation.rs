//! WASM bindings for orientation math.

use squarecam_core::orientation;
use squarecam_core::{CameraFacing, Rotation};
use wasm_bindgen::prelude::*;

use crate::js_error;

pub(crate) fn facing(front: bool) -> CameraFacing {
    if front {
        CameraFacing::Front
    } else {
        CameraFacing::Back
    }
}

/// Parse a device rotation in degrees (0, 90, 180 or 270).
pub(crate) fn rotation_from_degrees(degrees: u32) -> Result<Rotation, String> {
    Rotation::from_degrees(degrees)
        .ok_or_else(|| format!("Device rotation must be a multiple of 90, got {}", degrees))
}

/// Compute the preview rotation for a camera.
///
/// # Arguments
///
/// * `front` - Whether the camera faces the user
/// * `sensor_orientation` - Sensor mounting angle in degrees
/// * `rotation_degrees` - Device rotation (0, 90, 180 or 270)
///
/// # Example (TypeScript)
///
/// ```typescript
/// const degrees = compute_display_orientation(false, 90, screen.orientation.angle);
/// ```
#[wasm_bindgen]
pub fn compute_display_orientation(
    front: bool,
    sensor_orientation: u32,
    rotation_degrees: u32,
) -> Result<u32, JsValue> {
    let rotation = rotation_from_degrees(rotation_degrees).map_err(js_error)?;
    Ok(orientation::compute_display_orientation(
        facing(front),
        sensor_orientation,
        rotation,
    ))
}
