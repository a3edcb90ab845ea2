//! Flash and camera-switch button state.
//!
//! Everything here is a pure function of what the hardware reports, so the
//! host UI can render buttons without holding any camera state itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the back-facing camera, where camera cycling wraps to.
pub const BACK_CAMERA_ID: u32 = 0;

/// Flash modes as named by the camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlashMode {
    #[default]
    Off,
    Auto,
    On,
    RedEye,
    Torch,
}

impl FlashMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashMode::Off => "off",
            FlashMode::Auto => "auto",
            FlashMode::On => "on",
            FlashMode::RedEye => "red-eye",
            FlashMode::Torch => "torch",
        }
    }
}

impl fmt::Display for FlashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flash mode name the camera reported that we don't know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown flash mode: {0}")]
pub struct UnknownFlashMode(pub String);

impl FromStr for FlashMode {
    type Err = UnknownFlashMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(FlashMode::Off),
            "auto" => Ok(FlashMode::Auto),
            "on" => Ok(FlashMode::On),
            "red-eye" => Ok(FlashMode::RedEye),
            "torch" => Ok(FlashMode::Torch),
            other => Err(UnknownFlashMode(other.to_string())),
        }
    }
}

/// Next mode in the Off -> Auto -> On -> Off cycle.
///
/// Modes the hardware does not support are skipped. With no supported modes,
/// or from a mode outside the cycle, the current mode is kept.
pub fn next_flash_mode(current: FlashMode, supported: &[FlashMode]) -> FlashMode {
    let has = |mode: FlashMode| supported.contains(&mode);

    match current {
        FlashMode::Off if has(FlashMode::Auto) => FlashMode::Auto,
        FlashMode::Off if has(FlashMode::On) => FlashMode::On,
        FlashMode::Auto if has(FlashMode::On) => FlashMode::On,
        FlashMode::Auto if has(FlashMode::Off) => FlashMode::Off,
        FlashMode::On if has(FlashMode::Off) => FlashMode::Off,
        FlashMode::On if has(FlashMode::Auto) => FlashMode::Auto,
        other => other,
    }
}

/// Icon shown on the flash button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashIcon {
    FlashOff,
    FlashAuto,
    FlashOn,
}

/// Visibility and icon of the flash button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashButton {
    pub visible: bool,
    /// `None` keeps whatever icon the button already shows.
    pub icon: Option<FlashIcon>,
}

/// Project the supported and current flash modes onto the flash button.
pub fn flash_button_state(supported: &[FlashMode], current: FlashMode) -> FlashButton {
    if supported.is_empty() {
        return FlashButton {
            visible: false,
            icon: None,
        };
    }

    let icon = match current {
        FlashMode::Off => Some(FlashIcon::FlashOff),
        FlashMode::Auto => Some(FlashIcon::FlashAuto),
        FlashMode::On => Some(FlashIcon::FlashOn),
        FlashMode::RedEye | FlashMode::Torch => None,
    };

    FlashButton {
        visible: true,
        icon,
    }
}

/// Whether the camera-switch button should be shown.
pub fn switch_camera_visible(camera_count: u32) -> bool {
    camera_count > 1
}

/// Next camera id when the user taps the switch button.
pub fn next_camera_id(current: u32, camera_count: u32) -> u32 {
    if camera_count > 1 && current < camera_count - 1 {
        current + 1
    } else {
        BACK_CAMERA_ID
    }
}

/// Button state derived from the active camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub flash: FlashButton,
    pub switch_camera_visible: bool,
}
