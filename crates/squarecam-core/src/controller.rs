//! Camera session orchestration.
//!
//! [`CameraController`] owns the single active camera session and serializes
//! every reconfiguration through `&mut self`. The still frame arrives on a
//! hardware thread; hosts that need that share the controller behind a
//! `Mutex`.
//!
//! # Capture flow
//!
//! 1. [`request_capture`](CameraController::request_capture) snapshots the
//!    device quadrant into a single pending slot and asks the camera for a
//!    picture. It returns immediately.
//! 2. [`on_frame_captured`](CameraController::on_frame_captured) takes the
//!    slot, combines it with the orientation the preview was configured for,
//!    and runs the [`CapturePipeline`].
//!
//! While the slot is occupied, camera swaps, flash changes and
//! reconfiguration are rejected with [`CameraError::CaptureInProgress`].

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::CameraConfig;
use crate::controls::{
    flash_button_state, next_camera_id, next_flash_mode, switch_camera_visible, FlashMode, UiState,
};
use crate::decode::CapturedImage;
use crate::error::CameraError;
use crate::orientation::{OrientationResolver, OrientationTracker, RememberedOrientation};
use crate::pipeline::CapturePipeline;
use crate::session::{CameraListener, CameraSession, DisplaySource};
use crate::size::{select_best_size, Size, SizeChoice};

/// What the session was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub camera_id: u32,
    pub preview_size: Size,
    pub capture_size: Size,
    pub display_orientation: u32,
    /// At least one size is a fallback that misses the aspect or width constraint.
    pub fell_back: bool,
    /// False if the preview failed to start; the error was already reported.
    pub preview_running: bool,
}

/// Drives one camera session from open to captured square picture.
///
/// Generic over the hardware session `S`, the display `D` and the listener
/// `L` that receives pictures and camera errors.
pub struct CameraController<S: CameraSession, D, L> {
    session: S,
    display: D,
    listener: L,
    config: CameraConfig,
    camera_id: u32,
    open: bool,
    resolver: OrientationResolver,
    tracker: OrientationTracker,
    pipeline: CapturePipeline,
    pending: Option<RememberedOrientation>,
    configuration: Option<Configuration>,
}

impl<S, D, L> CameraController<S, D, L>
where
    S: CameraSession,
    D: DisplaySource,
    L: CameraListener,
{
    pub fn new(session: S, display: D, listener: L, config: CameraConfig) -> Self {
        Self {
            session,
            display,
            listener,
            camera_id: config.default_camera_id,
            pipeline: CapturePipeline::new(config.landscape_anchor),
            config,
            open: false,
            resolver: OrientationResolver::new(),
            tracker: OrientationTracker::new(),
            pending: None,
            configuration: None,
        }
    }

    /// Enable orientation tracking and open the current camera.
    pub fn start(&mut self) -> Result<Configuration, CameraError> {
        self.tracker.enable();
        self.configure(self.camera_id)
    }

    /// Disable orientation tracking and release the camera.
    ///
    /// A capture still in flight is abandoned.
    pub fn stop(&mut self) {
        self.tracker.disable();
        if self.pending.take().is_some() {
            warn!("Camera stopped with a capture in flight");
        }
        self.close_session();
    }

    /// Open `camera_id` and configure preview and capture parameters.
    ///
    /// Any previous session is stopped and released first. A size fallback
    /// or a preview that fails to start is reported to the listener and
    /// reflected in the returned [`Configuration`]; other failures are
    /// reported and returned, and leave the camera released.
    pub fn configure(&mut self, camera_id: u32) -> Result<Configuration, CameraError> {
        self.ensure_idle()?;
        self.close_session();

        if let Err(err) = self.session.open(camera_id) {
            let reason = match err {
                CameraError::CameraOpenFailure { reason, .. } => reason,
                other => other.to_string(),
            };
            return Err(self.report(CameraError::CameraOpenFailure { camera_id, reason }));
        }
        self.open = true;
        self.camera_id = camera_id;

        match self.setup_camera(camera_id) {
            Ok(configuration) => {
                self.configuration = Some(configuration);
                Ok(configuration)
            }
            Err(err) => {
                self.close_session();
                Err(self.report(err))
            }
        }
    }

    /// Reconfigure the current camera, e.g. after the display rotated.
    pub fn reconfigure(&mut self) -> Result<Configuration, CameraError> {
        self.configure(self.camera_id)
    }

    /// Cycle to the next camera, wrapping to the back camera.
    pub fn swap_camera(&mut self) -> Result<Configuration, CameraError> {
        self.ensure_idle()?;
        let next = next_camera_id(self.camera_id, self.session.camera_count());
        info!(from = self.camera_id, to = next, "Swapping camera");
        self.configure(next)
    }

    /// Advance the flash mode and apply it. Returns the mode now in effect.
    pub fn swap_flash(&mut self) -> Result<FlashMode, CameraError> {
        self.ensure_idle()?;
        self.ensure_open()?;

        let mut params = self.session.parameters()?;
        if params.supported_flash_modes.is_empty() {
            return Ok(params.flash_mode);
        }

        let next = next_flash_mode(params.flash_mode, &params.supported_flash_modes);
        debug!(from = %params.flash_mode, to = %next, "Swapping flash mode");
        params.flash_mode = next;
        self.session.set_parameters(&params)?;
        Ok(next)
    }

    /// Button state for the open camera.
    pub fn ui_state(&self) -> Result<UiState, CameraError> {
        self.ensure_open()?;
        let params = self.session.parameters()?;
        Ok(UiState {
            flash: flash_button_state(&params.supported_flash_modes, params.flash_mode),
            switch_camera_visible: switch_camera_visible(self.session.camera_count()),
        })
    }

    /// Forward an orientation sensor reading (`None` when unknown).
    pub fn on_orientation_changed(&mut self, degrees: Option<u32>) {
        self.tracker.on_orientation_changed(degrees);
    }

    /// Remember the device orientation and ask the camera for a picture.
    ///
    /// Returns as soon as the request is issued. Exactly one
    /// [`on_frame_captured`](Self::on_frame_captured) call completes it.
    pub fn request_capture(&mut self) -> Result<(), CameraError> {
        self.ensure_open()?;
        if self.pending.is_some() {
            return Err(CameraError::CaptureInProgress);
        }

        let remembered = self.tracker.remember();
        debug!(rotation = ?remembered.rotation(), "Capture requested");
        self.pending = Some(remembered);

        if let Err(err) = self.session.take_picture() {
            self.pending = None;
            error!(error = %err, "Camera refused to take a picture");
            return Err(err);
        }
        Ok(())
    }

    /// Complete the pending capture with the encoded frame.
    ///
    /// The square picture is handed to the listener and returned. The pending
    /// slot is cleared whether or not processing succeeds, so a failed
    /// capture leaves the session ready for the next request.
    pub fn on_frame_captured(&mut self, bytes: &[u8]) -> Result<CapturedImage, CameraError> {
        let remembered = self.pending.take().ok_or(CameraError::NoPendingCapture)?;
        let orientation = self.resolver.capture_orientation(remembered);
        let viewport = self.display.viewport();

        debug!(orientation, ?viewport, "Processing captured frame");
        let image = self
            .pipeline
            .process(bytes, orientation, &viewport)
            .map_err(|err| {
                warn!(error = %err, "Capture failed");
                CameraError::from(err)
            })?;

        self.listener.on_picture_taken(&image);
        Ok(image)
    }

    pub fn is_capture_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn camera_id(&self) -> u32 {
        self.camera_id
    }

    /// Configuration of the open camera, if any.
    pub fn configuration(&self) -> Option<Configuration> {
        self.configuration
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn setup_camera(&mut self, camera_id: u32) -> Result<Configuration, CameraError> {
        let info = self.session.camera_info(camera_id)?;
        let rotation = self.display.rotation();
        let display_orientation = self.resolver.resolve(info.facing, info.orientation, rotation);
        self.session.set_display_orientation(display_orientation)?;

        let mut params = self.session.parameters()?;
        let preview = self.choose_size(
            &params.supported_preview_sizes,
            self.config.preview_max_width,
        )?;
        let capture = self.choose_size(
            &params.supported_picture_sizes,
            self.config.picture_max_width,
        )?;

        params.preview_size = Some(preview.size());
        params.picture_size = Some(capture.size());
        self.session.set_parameters(&params)?;

        let preview_running = match self.session.start_preview() {
            Ok(()) => true,
            Err(err) => {
                let reason = match err {
                    CameraError::PreviewStartFailure(reason) => reason,
                    other => other.to_string(),
                };
                self.report(CameraError::PreviewStartFailure(reason));
                false
            }
        };

        let configuration = Configuration {
            camera_id,
            preview_size: preview.size(),
            capture_size: capture.size(),
            display_orientation,
            fell_back: preview.is_fallback() || capture.is_fallback(),
            preview_running,
        };
        info!(
            camera_id,
            facing = ?info.facing,
            sensor_orientation = info.orientation,
            display_orientation,
            preview = %configuration.preview_size,
            capture = %configuration.capture_size,
            "Camera configured"
        );
        Ok(configuration)
    }

    fn choose_size(&self, candidates: &[Size], max_width: u32) -> Result<SizeChoice, CameraError> {
        let aspect = self.config.aspect;
        let choice = select_best_size(candidates, max_width, aspect)?;
        if let SizeChoice::Fallback(fallback) = choice {
            self.report(CameraError::NoQualifyingSize {
                aspect,
                max_width,
                fallback,
            });
        }
        Ok(choice)
    }

    fn close_session(&mut self) {
        if !self.open {
            return;
        }
        if let Err(err) = self.session.stop_preview() {
            info!(error = %err, "Error while stopping camera preview");
        }
        self.session.release();
        self.open = false;
        self.configuration = None;
    }

    fn ensure_idle(&self) -> Result<(), CameraError> {
        if self.pending.is_some() {
            return Err(CameraError::CaptureInProgress);
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), CameraError> {
        if !self.open {
            return Err(CameraError::NotStarted);
        }
        Ok(())
    }

    /// Log and signal a camera error, handing it back for propagation.
    fn report(&self, err: CameraError) -> CameraError {
        match &err {
            CameraError::NoQualifyingSize { .. } => warn!(error = %err, "Camera setup fallback"),
            _ => error!(camera_id = self.camera_id, error = %err, "Camera error"),
        }
        self.listener.on_camera_error(&err);
        err
    }
}

impl<S: CameraSession, D, L> Drop for CameraController<S, D, L> {
    fn drop(&mut self) {
        if self.open {
            let _ = self.session.stop_preview();
            self.session.release();
        }
    }
}
