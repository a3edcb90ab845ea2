//! Stateful capture session for JavaScript hosts.
//!
//! The JS shell owns the camera. It calls [`JsCaptureSession::configure`]
//! whenever the camera or screen rotation changes, forwards orientation
//! sensor readings, arms a capture right before triggering the shutter, and
//! hands the encoded frame back once it arrives.

use squarecam_core::orientation::{OrientationResolver, OrientationTracker, RememberedOrientation};
use squarecam_core::{CameraConfig, CameraError, CapturePipeline, ViewportGeometry};
use wasm_bindgen::prelude::*;

use crate::js_error;
use crate::orientation::{facing, rotation_from_degrees};
use crate::types::JsCapturedImage;

#[wasm_bindgen]
pub struct JsCaptureSession {
    config: CameraConfig,
    resolver: OrientationResolver,
    tracker: OrientationTracker,
    pipeline: CapturePipeline,
    pending: Option<RememberedOrientation>,
}

#[wasm_bindgen]
impl JsCaptureSession {
    /// Create a session. `config` is an optional partial `CameraConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsCaptureSession, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            CameraConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(js_error)?
        };
        Ok(Self::from_config(config))
    }

    /// Resolve and store the display orientation for the active camera.
    ///
    /// Returns the rotation to apply to the live preview.
    pub fn configure(
        &mut self,
        front: bool,
        sensor_orientation: u32,
        rotation_degrees: u32,
    ) -> Result<u32, JsValue> {
        let rotation = rotation_from_degrees(rotation_degrees).map_err(js_error)?;
        Ok(self
            .resolver
            .resolve(facing(front), sensor_orientation, rotation))
    }

    #[wasm_bindgen(getter)]
    pub fn preview_max_width(&self) -> u32 {
        self.config.preview_max_width
    }

    #[wasm_bindgen(getter)]
    pub fn picture_max_width(&self) -> u32 {
        self.config.picture_max_width
    }

    pub fn enable_tracking(&mut self) {
        self.tracker.enable();
    }

    pub fn disable_tracking(&mut self) {
        self.tracker.disable();
    }

    /// Forward an orientation sensor reading. Negative values mean unknown.
    pub fn on_orientation_changed(&mut self, degrees: i32) {
        self.tracker
            .on_orientation_changed(u32::try_from(degrees).ok());
    }

    /// Remember the device orientation for the next frame.
    ///
    /// # Errors
    ///
    /// Throws if a capture is already pending.
    pub fn request_capture(&mut self) -> Result<(), JsValue> {
        if self.pending.is_some() {
            return Err(js_error(CameraError::CaptureInProgress));
        }
        self.pending = Some(self.tracker.remember());
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn capture_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Rotate and crop the captured frame to the square the user saw.
    ///
    /// The pending request is consumed even if processing fails.
    pub fn on_frame_captured(
        &mut self,
        bytes: &[u8],
        visible_width: u32,
        visible_height: u32,
        real_width: u32,
        real_height: u32,
    ) -> Result<JsCapturedImage, JsValue> {
        let remembered = self
            .pending
            .take()
            .ok_or_else(|| js_error(CameraError::NoPendingCapture))?;
        let orientation = self.resolver.capture_orientation(remembered);
        let viewport = ViewportGeometry::new(visible_width, visible_height, real_width, real_height);

        self.pipeline
            .process(bytes, orientation, &viewport)
            .map(JsCapturedImage::from_captured)
            .map_err(js_error)
    }
}

impl JsCaptureSession {
    pub(crate) fn from_config(config: CameraConfig) -> Self {
        Self {
            pipeline: CapturePipeline::new(config.landscape_anchor),
            config,
            resolver: OrientationResolver::new(),
            tracker: OrientationTracker::new(),
            pending: None,
        }
    }
}
