//! Frame decoding for SquareCam.
//!
//! The camera delivers one encoded buffer per capture request. This module
//! turns it into a [`CapturedImage`] that the rest of the pipeline rotates
//! and crops in place of the original buffer.

mod frame;
mod types;

pub use frame::decode_frame;
pub use types::{CapturedImage, DecodeError};

#[cfg(test)]
pub(crate) use frame::tests::png_bytes;
