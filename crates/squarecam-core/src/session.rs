//! Collaborator interfaces.
//!
//! The core never touches camera hardware or the window system directly.
//! Hosts implement these traits over their platform APIs; every call is a
//! synchronous request/response.

use crate::controls::FlashMode;
use crate::decode::CapturedImage;
use crate::error::CameraError;
use crate::orientation::{CameraFacing, Rotation};
use crate::size::Size;
use crate::transform::ViewportGeometry;

/// Static description of one camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraInfo {
    pub facing: CameraFacing,
    /// Sensor orientation in degrees.
    pub orientation: u32,
}

/// Readable and writable parameters of the open camera.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraParameters {
    pub supported_preview_sizes: Vec<Size>,
    pub supported_picture_sizes: Vec<Size>,
    pub preview_size: Option<Size>,
    pub picture_size: Option<Size>,
    /// Empty when the camera has no flash.
    pub supported_flash_modes: Vec<FlashMode>,
    pub flash_mode: FlashMode,
}

/// The hardware camera session.
///
/// At most one camera is open at a time. [`take_picture`](Self::take_picture)
/// returns immediately; the host later hands the encoded frame to
/// [`CameraController::on_frame_captured`](crate::CameraController::on_frame_captured).
pub trait CameraSession {
    /// Number of cameras on the device.
    fn camera_count(&self) -> u32;

    fn camera_info(&self, camera_id: u32) -> Result<CameraInfo, CameraError>;

    fn open(&mut self, camera_id: u32) -> Result<(), CameraError>;

    fn parameters(&self) -> Result<CameraParameters, CameraError>;

    fn set_parameters(&mut self, parameters: &CameraParameters) -> Result<(), CameraError>;

    /// Rotate the live preview by `degrees` clockwise.
    fn set_display_orientation(&mut self, degrees: u32) -> Result<(), CameraError>;

    /// Bind the preview surface and start streaming.
    fn start_preview(&mut self) -> Result<(), CameraError>;

    fn stop_preview(&mut self) -> Result<(), CameraError>;

    /// Release the open camera. Must be safe to call after a failed stop.
    fn release(&mut self);

    /// Ask the camera for one still frame.
    fn take_picture(&mut self) -> Result<(), CameraError>;
}

/// Current display state, queried on demand.
pub trait DisplaySource {
    fn rotation(&self) -> Rotation;

    fn viewport(&self) -> ViewportGeometry;
}

/// Receives finished pictures and the single "camera error" signal.
///
/// Both methods may be called from the thread that delivered the frame.
pub trait CameraListener {
    fn on_camera_error(&self, error: &CameraError);

    /// The square picture produced by a completed capture.
    fn on_picture_taken(&self, _image: &CapturedImage) {}
}

/// A bare closure only listens for errors.
impl<F> CameraListener for F
where
    F: Fn(&CameraError),
{
    fn on_camera_error(&self, error: &CameraError) {
        self(error)
    }
}
