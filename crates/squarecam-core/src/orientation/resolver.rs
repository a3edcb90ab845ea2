//! Display and capture orientation math.

use super::{CameraFacing, RememberedOrientation, Rotation};

/// Compute the rotation that makes the live preview upright.
///
/// `sensor_orientation` is the hardware-reported angle of the sensor's pixel
/// rows relative to the device's natural orientation. Values of 360 or more
/// are reduced modulo 360.
///
/// ```text
/// Back:  (sensor - rotation + 360) % 360
/// Front: (360 - (sensor + rotation) % 360) % 360
/// ```
pub fn compute_display_orientation(
    facing: CameraFacing,
    sensor_orientation: u32,
    rotation: Rotation,
) -> u32 {
    let sensor = sensor_orientation % 360;
    let degrees = rotation.degrees();

    match facing {
        CameraFacing::Front => (360 - (sensor + degrees) % 360) % 360,
        CameraFacing::Back => (sensor + 360 - degrees) % 360,
    }
}

/// Tracks the orientation the preview was configured with.
///
/// [`resolve`](Self::resolve) runs on every (re)configuration of the camera.
/// The stored display orientation and layout rotation are later combined with
/// the rotation remembered at capture time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrientationResolver {
    display_orientation: u32,
    layout_rotation: Rotation,
}

impl OrientationResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute and retain the display orientation for the active camera.
    pub fn resolve(
        &mut self,
        facing: CameraFacing,
        sensor_orientation: u32,
        rotation: Rotation,
    ) -> u32 {
        self.display_orientation = compute_display_orientation(facing, sensor_orientation, rotation);
        self.layout_rotation = rotation;
        self.display_orientation
    }

    /// Last computed display orientation.
    pub fn display_orientation(&self) -> u32 {
        self.display_orientation
    }

    /// Device rotation at the time of the last [`resolve`](Self::resolve).
    pub fn layout_rotation(&self) -> Rotation {
        self.layout_rotation
    }

    /// Rotation to apply to a captured still.
    ///
    /// Consumes the remembered orientation so each capture request is
    /// resolved exactly once.
    pub fn capture_orientation(&self, remembered: RememberedOrientation) -> u32 {
        (self.display_orientation + remembered.rotation().degrees() + self.layout_rotation.degrees())
            % 360
    }
}
