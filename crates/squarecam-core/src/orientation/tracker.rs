//! Device orientation tracking for capture requests.
//!
//! The device may rotate between the moment the shutter is pressed and the
//! moment the camera delivers the frame. The tracker records the quadrant
//! synchronously at request time into a [`RememberedOrientation`], which the
//! completion handler consumes.

use tracing::trace;

use super::Rotation;

/// Snap a raw orientation sensor reading to the nearest quadrant.
///
/// ```text
/// (315, 360) and [0, 45]  -> 0
/// (45, 135]               -> 90
/// (135, 225]              -> 180
/// (225, 315]              -> 270
/// ```
pub fn normalize_orientation(degrees: u32) -> Rotation {
    match degrees % 360 {
        0..=45 => Rotation::Deg0,
        46..=135 => Rotation::Deg90,
        136..=225 => Rotation::Deg180,
        226..=315 => Rotation::Deg270,
        _ => Rotation::Deg0,
    }
}

/// Device quadrant captured when a picture was requested.
///
/// Deliberately neither `Clone` nor `Copy`: it is produced once per request
/// and consumed once by the completion handler.
#[derive(Debug, PartialEq, Eq)]
pub struct RememberedOrientation(Rotation);

impl RememberedOrientation {
    pub fn new(rotation: Rotation) -> Self {
        Self(rotation)
    }

    pub fn rotation(&self) -> Rotation {
        self.0
    }
}

/// Follows orientation sensor events while the camera is active.
#[derive(Debug, Clone, Default)]
pub struct OrientationTracker {
    enabled: bool,
    current: Rotation,
}

impl OrientationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start applying orientation events.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop applying orientation events. The last quadrant is kept.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Feed a sensor reading. `None` means the orientation is unknown
    /// (device lying flat) and leaves the current quadrant unchanged.
    pub fn on_orientation_changed(&mut self, degrees: Option<u32>) {
        if !self.enabled {
            return;
        }
        if let Some(degrees) = degrees {
            let quadrant = normalize_orientation(degrees);
            if quadrant != self.current {
                trace!(degrees, ?quadrant, "Device orientation changed");
            }
            self.current = quadrant;
        }
    }

    /// Current normalized device quadrant.
    pub fn current(&self) -> Rotation {
        self.current
    }

    /// Record the current quadrant for a capture request.
    pub fn remember(&self) -> RememberedOrientation {
        RememberedOrientation(self.current)
    }
}
