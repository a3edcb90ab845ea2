//! WASM-compatible wrapper types.
//!
//! These wrap the core SquareCam types and handle the conversion between
//! Rust and JavaScript data representations.

use squarecam_core::{CapturedImage, SizeChoice};
use wasm_bindgen::prelude::*;

/// A captured image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. Calling `pixels()` copies it to a
/// JavaScript `Uint8Array`. The `free()` method releases WASM memory early;
/// otherwise wasm-bindgen's finalizer handles cleanup.
#[wasm_bindgen]
pub struct JsCapturedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsCapturedImage {
    /// Create a new JsCapturedImage from dimensions and RGB pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsCapturedImage {
        JsCapturedImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsCapturedImage {
    pub(crate) fn from_captured(img: CapturedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Copy into a core CapturedImage.
    pub(crate) fn to_captured(&self) -> CapturedImage {
        CapturedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Result of a size selection.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsSizeChoice {
    width: u32,
    height: u32,
    fallback: bool,
}

#[wasm_bindgen]
impl JsSizeChoice {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when no size matched and the first supported size was used.
    /// The host should surface a camera error.
    #[wasm_bindgen(getter)]
    pub fn fallback(&self) -> bool {
        self.fallback
    }
}

impl From<SizeChoice> for JsSizeChoice {
    fn from(choice: SizeChoice) -> Self {
        let size = choice.size();
        Self {
            width: size.width,
            height: size.height,
            fallback: choice.is_fallback(),
        }
    }
}
