//! Preview and picture size selection.
//!
//! Cameras enumerate a fixed list of supported resolutions per stream. The
//! selector picks the widest one that shares the target aspect family and
//! stays within a width bound. It runs twice per configuration: with a small
//! bound for the preview stream and a larger one for stills.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// A resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Target aspect family, e.g. 4:3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    pub numerator: u32,
    pub denominator: u32,
}

impl AspectRatio {
    pub const FOUR_THREE: AspectRatio = AspectRatio {
        numerator: 4,
        denominator: 3,
    };

    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Whether `size` belongs to this aspect family.
    ///
    /// Uses integer division, so sizes a few pixels off the exact ratio
    /// (e.g. 1280x962 for 4:3) still qualify. A zero term never matches.
    pub fn matches(&self, size: Size) -> bool {
        match (
            size.width.checked_div(self.numerator),
            size.height.checked_div(self.denominator),
        ) {
            (Some(w), Some(h)) => w == h,
            _ => false,
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::FOUR_THREE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// Outcome of [`select_best_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeChoice {
    /// The widest candidate that matched the constraints.
    Best(Size),
    /// Nothing matched; this is the first candidate in the list.
    Fallback(Size),
}

impl SizeChoice {
    pub fn size(self) -> Size {
        match self {
            SizeChoice::Best(size) | SizeChoice::Fallback(size) => size,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, SizeChoice::Fallback(_))
    }
}

/// Choose the widest candidate matching `aspect` with `width <= max_width`.
///
/// Ties on width keep the first candidate seen. When no candidate qualifies
/// the first candidate is returned as [`SizeChoice::Fallback`] so the caller
/// can still proceed after reporting the problem.
///
/// # Errors
///
/// Returns `CameraError::NoCandidateSizes` if `candidates` is empty.
pub fn select_best_size(
    candidates: &[Size],
    max_width: u32,
    aspect: AspectRatio,
) -> Result<SizeChoice, CameraError> {
    let mut best: Option<Size> = None;

    for &candidate in candidates {
        let in_bounds = candidate.width <= max_width;
        let is_wider = best.map_or(true, |b| candidate.width > b.width);

        if in_bounds && is_wider && aspect.matches(candidate) {
            best = Some(candidate);
        }
    }

    match best {
        Some(size) => Ok(SizeChoice::Best(size)),
        None => candidates
            .first()
            .copied()
            .map(SizeChoice::Fallback)
            .ok_or(CameraError::NoCandidateSizes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(list: &[(u32, u32)]) -> Vec<Size> {
        list.iter().map(|&(w, h)| Size::new(w, h)).collect()
    }

    #[test]
    fn test_largest_qualifying_within_bound() {
        let candidates = sizes(&[(640, 480), (1280, 960), (320, 240)]);
        let choice = select_best_size(&candidates, 640, AspectRatio::FOUR_THREE).unwrap();
        assert_eq!(choice, SizeChoice::Best(Size::new(640, 480)));
    }

    #[test]
    fn test_picture_bound_allows_larger() {
        let candidates = sizes(&[(640, 480), (1280, 960), (2592, 1944), (1920, 1080)]);
        let choice = select_best_size(&candidates, 1280, AspectRatio::FOUR_THREE).unwrap();
        assert_eq!(choice.size(), Size::new(1280, 960));
        assert!(!choice.is_fallback());
    }

    #[test]
    fn test_no_qualifying_size_falls_back_to_first() {
        let candidates = sizes(&[(100, 100)]);
        let choice = select_best_size(&candidates, 640, AspectRatio::FOUR_THREE).unwrap();
        assert_eq!(choice, SizeChoice::Fallback(Size::new(100, 100)));
        assert!(choice.is_fallback());
    }

    #[test]
    fn test_fallback_ignores_bound() {
        // Only 16:9 sizes, first one is above the bound
        let candidates = sizes(&[(1920, 1080), (1280, 720)]);
        let choice = select_best_size(&candidates, 640, AspectRatio::FOUR_THREE).unwrap();
        assert_eq!(choice, SizeChoice::Fallback(Size::new(1920, 1080)));
    }

    #[test]
    fn test_empty_candidates_is_an_error() {
        let result = select_best_size(&[], 640, AspectRatio::FOUR_THREE);
        assert!(matches!(result, Err(CameraError::NoCandidateSizes)));
    }

    #[test]
    fn test_integer_division_accepts_near_ratio() {
        // 642 / 4 = 160, 481 / 3 = 160
        assert!(AspectRatio::FOUR_THREE.matches(Size::new(642, 481)));
        assert!(!AspectRatio::FOUR_THREE.matches(Size::new(640, 360)));
    }

    #[test]
    fn test_zero_aspect_never_matches() {
        let aspect = AspectRatio::new(0, 3);
        assert!(!aspect.matches(Size::new(640, 480)));

        let choice = select_best_size(&sizes(&[(640, 480)]), 640, aspect).unwrap();
        assert!(choice.is_fallback());
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        // Both have width 640 and both qualify for 4:3 under integer division
        let candidates = sizes(&[(640, 480), (640, 481)]);
        let choice = select_best_size(&candidates, 640, AspectRatio::FOUR_THREE).unwrap();
        assert_eq!(choice.size(), Size::new(640, 480));
    }

    #[test]
    fn test_other_aspect_family() {
        let candidates = sizes(&[(640, 480), (1280, 720), (960, 540)]);
        let choice = select_best_size(&candidates, 1280, AspectRatio::new(16, 9)).unwrap();
        assert_eq!(choice.size(), Size::new(1280, 720));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Size::new(640, 480).to_string(), "640x480");
        assert_eq!(AspectRatio::default().to_string(), "4:3");
    }
}
