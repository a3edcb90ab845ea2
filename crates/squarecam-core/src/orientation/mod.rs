//! Sensor-to-display orientation.
//!
//! Three angles meet when a still is captured:
//!
//! - the **display orientation**, which makes the live preview upright for the
//!   current camera and device rotation,
//! - the **layout rotation**, the device rotation the preview was configured
//!   for,
//! - the **remembered rotation**, the device quadrant recorded when the
//!   capture was requested.
//!
//! The capture orientation is their sum modulo 360.
//!
//! # Angles
//!
//! All angles are whole degrees, clockwise, in `[0, 360)`.

mod resolver;
mod tracker;

pub use resolver::{compute_display_orientation, OrientationResolver};
pub use tracker::{normalize_orientation, OrientationTracker, RememberedOrientation};

use serde::{Deserialize, Serialize};

/// Physical rotation of the device relative to its natural orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// All four rotations in ascending order.
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// The rotation in degrees.
    #[inline]
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Map an exact multiple of 90 (modulo 360) to a rotation.
    ///
    /// Returns `None` for angles that are not a whole quadrant.
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// Map the display subsystem's surface-rotation index (0-3).
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Which physical camera is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraFacing {
    #[default]
    Back,
    /// Front cameras deliver mirrored frames, which flips the correction
    /// direction.
    Front,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_degrees() {
        let degrees: Vec<u32> = Rotation::ALL.iter().map(|r| r.degrees()).collect();
        assert_eq!(degrees, vec![0, 90, 180, 270]);
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::from_degrees(0), Some(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(270), Some(Rotation::Deg270));
        assert_eq!(Rotation::from_degrees(450), Some(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(45), None);
    }

    #[test]
    fn test_rotation_from_index() {
        assert_eq!(Rotation::from_index(0), Some(Rotation::Deg0));
        assert_eq!(Rotation::from_index(3), Some(Rotation::Deg270));
        assert_eq!(Rotation::from_index(4), None);
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        assert!(!Rotation::Deg0.swaps_dimensions());
        assert!(Rotation::Deg90.swaps_dimensions());
        assert!(!Rotation::Deg180.swaps_dimensions());
        assert!(Rotation::Deg270.swaps_dimensions());
    }
}
