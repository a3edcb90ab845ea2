//! Camera configuration.
//!
//! Every field has a default, so hosts only pass what they want to change.

use serde::{Deserialize, Serialize};

use crate::controls::BACK_CAMERA_ID;
use crate::size::AspectRatio;
use crate::transform::LandscapeAnchor;

/// Widest preview stream considered by default.
pub const PREVIEW_SIZE_MAX_WIDTH: u32 = 640;

/// Widest still-capture stream considered by default.
pub const PICTURE_SIZE_MAX_WIDTH: u32 = 1280;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Width bound for the preview stream.
    pub preview_max_width: u32,
    /// Width bound for captured stills.
    pub picture_max_width: u32,
    /// Aspect family both streams must belong to.
    pub aspect: AspectRatio,
    /// Camera opened on start.
    pub default_camera_id: u32,
    /// Square placement for landscape frames.
    pub landscape_anchor: LandscapeAnchor,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            preview_max_width: PREVIEW_SIZE_MAX_WIDTH,
            picture_max_width: PICTURE_SIZE_MAX_WIDTH,
            aspect: AspectRatio::FOUR_THREE,
            default_camera_id: BACK_CAMERA_ID,
            landscape_anchor: LandscapeAnchor::Origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CameraConfig::default();
        assert_eq!(config.preview_max_width, 640);
        assert_eq!(config.picture_max_width, 1280);
        assert_eq!(config.aspect, AspectRatio::new(4, 3));
        assert_eq!(config.default_camera_id, 0);
        assert_eq!(config.landscape_anchor, LandscapeAnchor::Origin);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CameraConfig = serde_json::from_str(
            r#"{ "picture_max_width": 2048, "landscape_anchor": "chrome_adjusted" }"#,
        )
        .unwrap();

        assert_eq!(config.picture_max_width, 2048);
        assert_eq!(config.landscape_anchor, LandscapeAnchor::ChromeAdjusted);
        assert_eq!(config.preview_max_width, PREVIEW_SIZE_MAX_WIDTH);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let mut config = CameraConfig::default();
        config.aspect = AspectRatio::new(16, 9);
        let json = serde_json::to_string(&config).unwrap();
        let back: CameraConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
