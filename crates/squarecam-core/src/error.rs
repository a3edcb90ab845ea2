//! Error types for camera configuration and capture.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::size::{AspectRatio, Size};

/// Errors that end a single capture request.
///
/// The camera session stays usable after any of these.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The frame bytes could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The decoded buffer does not match its declared dimensions.
    #[error("Invalid pixel buffer: expected {expected} bytes for {width}x{height}, got {actual}")]
    InvalidBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Errors surfaced to the host as the single "camera error" signal.
#[derive(Debug, Error)]
pub enum CameraError {
    /// No supported size matched the aspect constraint within the width bound.
    /// Non-fatal: configuration continues with `fallback`.
    #[error("No supported size matches {aspect} within {max_width}px, falling back to {fallback}")]
    NoQualifyingSize {
        aspect: AspectRatio,
        max_width: u32,
        fallback: Size,
    },

    /// The camera reported an empty size list, so there is nothing to fall back to.
    #[error("Camera reported no supported sizes")]
    NoCandidateSizes,

    /// The camera could not be opened.
    #[error("Can't open camera with id {camera_id}: {reason}")]
    CameraOpenFailure { camera_id: u32, reason: String },

    /// The preview could not be bound or started.
    #[error("Can't start camera preview: {0}")]
    PreviewStartFailure(String),

    /// Any other failure reported by the hardware session.
    #[error("Camera session error: {0}")]
    Session(String),

    /// Reconfiguration or a second capture was requested while a frame is pending.
    #[error("A capture is already in progress")]
    CaptureInProgress,

    /// A frame arrived without a matching capture request.
    #[error("No capture was requested")]
    NoPendingCapture,

    /// The operation needs an open camera.
    #[error("Camera is not started")]
    NotStarted,

    /// Processing the captured frame failed.
    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_qualifying_size_display() {
        let err = CameraError::NoQualifyingSize {
            aspect: AspectRatio::FOUR_THREE,
            max_width: 640,
            fallback: Size::new(100, 100),
        };
        assert_eq!(
            err.to_string(),
            "No supported size matches 4:3 within 640px, falling back to 100x100"
        );
    }

    #[test]
    fn test_open_failure_display() {
        let err = CameraError::CameraOpenFailure {
            camera_id: 1,
            reason: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "Can't open camera with id 1: busy");
    }

    #[test]
    fn test_capture_error_conversion() {
        let err: CameraError = CaptureError::from(DecodeError::Empty).into();
        assert!(matches!(err, CameraError::Capture(CaptureError::Decode(DecodeError::Empty))));
        assert_eq!(err.to_string(), "Capture failed: Captured frame is empty");
    }
}
