//! SquareCam Core - capture orientation and square normalization
//!
//! This crate turns a still frame from a phone camera into the square photo
//! the user saw framed by the on-screen mask. It decides how the preview must
//! be rotated for the active camera, which preview and picture sizes to use,
//! and how to rotate and crop the captured frame.
//!
//! # Module Structure
//!
//! - `orientation` - display/capture orientation math and device tracking
//! - `size` - preview and picture size selection
//! - `transform` - rotation and square cropping of captured frames
//! - `pipeline` - decode, rotate and crop for one capture
//! - `controller` - camera session orchestration around capture requests
//! - `controls` - flash and camera-switch button state
//! - `overlay` - geometry of the square preview mask
//!
//! Camera hardware and the display are reached through the traits in
//! `session`, so everything here runs without a device.

pub mod config;
pub mod controller;
pub mod controls;
pub mod decode;
pub mod error;
pub mod orientation;
pub mod overlay;
pub mod pipeline;
pub mod session;
pub mod size;
pub mod transform;

pub use config::CameraConfig;
pub use controller::{CameraController, Configuration};
pub use controls::{
    flash_button_state, next_camera_id, next_flash_mode, switch_camera_visible, FlashButton,
    FlashIcon, FlashMode, UiState,
};
pub use decode::{decode_frame, CapturedImage, DecodeError};
pub use error::{CameraError, CaptureError};
pub use orientation::{
    compute_display_orientation, CameraFacing, OrientationResolver, OrientationTracker, Rotation,
};
pub use overlay::OverlayMask;
pub use pipeline::CapturePipeline;
pub use session::{CameraInfo, CameraListener, CameraParameters, CameraSession, DisplaySource};
pub use size::{select_best_size, AspectRatio, Size, SizeChoice};
pub use transform::{crop_to_square, rotate_capture, LandscapeAnchor, ViewportGeometry};
