//! Rotation of captured frames.
//!
//! Capture orientations are almost always whole quadrants, which are rotated
//! exactly by remapping pixels. A camera reporting an unaligned sensor angle
//! produces an arbitrary capture orientation; that case falls back to
//! bilinear inverse mapping on an expanded canvas:
//!
//! ```text
//! src_x = (dst_x - cx) * cos(-θ) - (dst_y - cy) * sin(-θ) + src_cx
//! src_y = (dst_x - cx) * sin(-θ) + (dst_y - cy) * cos(-θ) + src_cy
//! ```

use image::imageops;
use tracing::debug;

use crate::decode::CapturedImage;
use crate::error::CaptureError;
use crate::orientation::Rotation;

/// Compute the bounding box of an image rotated by `angle_degrees`.
///
/// Quadrant angles return exact dimensions; other angles return the
/// expanded canvas that contains every corner.
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    // Normalize angle to handle 360, 720, etc.
    let angle_normalized = angle_degrees % 360.0;
    let abs_angle = angle_normalized.abs();

    if abs_angle < 0.001 || (360.0 - abs_angle).abs() < 0.001 {
        return (width, height);
    }
    if (abs_angle - 90.0).abs() < 0.001 || (abs_angle - 270.0).abs() < 0.001 {
        return (height, width);
    }
    if (abs_angle - 180.0).abs() < 0.001 {
        return (width, height);
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate a captured frame clockwise by `degrees`.
///
/// The source buffer is consumed. A rotation of 0 (mod 360) returns the
/// input untouched, without copying the buffer.
///
/// # Errors
///
/// Returns `CaptureError::InvalidBuffer` if the pixel buffer does not match
/// the image dimensions.
pub fn rotate_capture(image: CapturedImage, degrees: u32) -> Result<CapturedImage, CaptureError> {
    validate_buffer(&image)?;

    let degrees = degrees % 360;
    if degrees == 0 {
        return Ok(image);
    }

    match Rotation::from_degrees(degrees) {
        Some(rotation) => rotate_quadrant(image, rotation),
        None => {
            debug!(degrees, "Rotating capture by unaligned angle");
            Ok(rotate_bilinear(&image, degrees as f64))
        }
    }
}

pub(crate) fn validate_buffer(image: &CapturedImage) -> Result<(), CaptureError> {
    let expected = (image.width as usize) * (image.height as usize) * 3;
    if image.pixels.len() != expected {
        return Err(CaptureError::InvalidBuffer {
            width: image.width,
            height: image.height,
            expected,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}

fn rotate_quadrant(image: CapturedImage, rotation: Rotation) -> Result<CapturedImage, CaptureError> {
    let (width, height, actual) = (image.width, image.height, image.pixels.len());
    let rgb = image.into_rgb_image().ok_or(CaptureError::InvalidBuffer {
        width,
        height,
        expected: (width as usize) * (height as usize) * 3,
        actual,
    })?;

    let rotated = match rotation {
        Rotation::Deg0 => rgb,
        Rotation::Deg90 => imageops::rotate90(&rgb),
        Rotation::Deg180 => imageops::rotate180(&rgb),
        Rotation::Deg270 => imageops::rotate270(&rgb),
    };

    Ok(CapturedImage::from_rgb_image(rotated))
}

fn rotate_bilinear(image: &CapturedImage, angle_degrees: f64) -> CapturedImage {
    let (src_w, src_h) = (image.width as f64, image.height as f64);
    let (dst_w, dst_h) = compute_rotated_bounds(image.width, image.height, angle_degrees);

    // Inverse mapping: rotate destination points back by -θ
    let angle_rad = -angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut output = vec![0u8; (dst_w as usize) * (dst_h as usize) * 3];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let dx = dst_x as f64 - dst_cx;
            let dy = dst_y as f64 - dst_cy;

            let src_x = dx * cos - dy * sin + src_cx;
            let src_y = dx * sin + dy * cos + src_cy;

            let dst_idx = ((dst_y as usize) * (dst_w as usize) + dst_x as usize) * 3;
            let pixel = sample_bilinear(image, src_x, src_y);
            output[dst_idx..dst_idx + 3].copy_from_slice(&pixel);
        }
    }

    CapturedImage::new(dst_w, dst_h, output)
}

#[inline]
fn get_pixel_f64(image: &CapturedImage, px: usize, py: usize) -> [f64; 3] {
    let idx = (py * image.width as usize + px) * 3;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
    ]
}

/// Sample a pixel using bilinear interpolation. Out-of-bounds samples are black.
fn sample_bilinear(image: &CapturedImage, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = (image.width as i64, image.height as i64);

    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return [0, 0, 0];
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


#[cfg(test)]
mod proptests {
    use super::tests::test_image;
    use super::*;
    use proptest::prelude::*;

    fn quadrant_strategy() -> impl Strategy<Value = u32> {
        prop::sample::select(vec![0u32, 90, 180, 270])
    }

    proptest! {
        /// Property: Rotating by d then 360 - d restores the dimensions.
        #[test]
        fn prop_rotation_round_trip_dimensions(
            width in 1u32..=40,
            height in 1u32..=40,
            degrees in quadrant_strategy(),
        ) {
            let img = test_image(width, height);
            let rotated = rotate_capture(img, degrees).unwrap();
            let restored = rotate_capture(rotated, 360 - degrees).unwrap();

            prop_assert_eq!((restored.width, restored.height), (width, height));
        }

        /// Property: Quadrant rotations are lossless.
        #[test]
        fn prop_quadrant_round_trip_pixels(
            width in 1u32..=20,
            height in 1u32..=20,
            degrees in quadrant_strategy(),
        ) {
            let img = test_image(width, height);
            let expected = img.clone();
            let rotated = rotate_capture(img, degrees).unwrap();
            let restored = rotate_capture(rotated, 360 - degrees).unwrap();

            prop_assert_eq!(restored, expected);
        }

        /// Property: Pixel data length always matches dimensions.
        #[test]
        fn prop_pixel_data_matches_dimensions(
            width in 1u32..=30,
            height in 1u32..=30,
            degrees in 0u32..360,
        ) {
            let img = test_image(width, height);
            let result = rotate_capture(img, degrees).unwrap();
            prop_assert_eq!(result.pixels.len(), (result.width * result.height * 3) as usize);
        }
    }
}
