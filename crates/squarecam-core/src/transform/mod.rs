//! Capture transforms: rotation and square cropping.
//!
//! # Transform Order
//!
//! A captured frame goes through:
//! 1. Rotation by the capture orientation (skipped at 0°)
//! 2. Square crop matching the on-screen mask
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise
//! - Crop rectangles are in pixels of the rotated image
//! - Origin is top-left corner

mod crop;
mod rotation;

pub use crop::{
    compute_square_crop, crop_region, crop_to_square, CropRect, LandscapeAnchor, ViewportGeometry,
};
pub use rotation::{compute_rotated_bounds, rotate_capture};
