//! Geometry of the square mask drawn over the live preview.
//!
//! The mask leaves a `min(w, h)` square visible, centered horizontally and
//! anchored to the top of the viewport, and shades the rest: a strip on the
//! left, a strip on the right, and everything below the square.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen pixels, right/bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// The visible square and the shaded regions around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayMask {
    pub window: Rect,
    /// Non-empty shaded rectangles, in left, right, bottom order.
    pub shades: Vec<Rect>,
}

impl OverlayMask {
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let side = width.min(height);
        let left = (width - side) / 2;
        let window = Rect::new(left, 0, left + side, side);

        let shades = [
            Rect::new(0, window.top, window.left, window.bottom),
            Rect::new(window.right, window.top, width, window.bottom),
            Rect::new(0, window.bottom, width, height),
        ]
        .into_iter()
        .filter(|r| !r.is_empty())
        .collect();

        Self { window, shades }
    }
}
