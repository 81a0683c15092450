//! Right-edge exclusion zone.
//!
//! Forms commonly place a date or stamp block at the right end of the
//! signature line; its dense strokes score deceptively well under the
//! signature heuristics. Blanking the rightmost fraction of the mask before
//! contour analysis keeps that block out of candidate selection.

use image::GrayImage;

/// Returns a mask with the rightmost `exclude_right_frac` of columns zeroed.
///
/// The result is a fresh all-zero mask with only the left `1 - frac` columns
/// copied over; a non-positive fraction passes the mask through unchanged.
pub fn mask_right_region(mask: &GrayImage, exclude_right_frac: f32) -> GrayImage {
    if exclude_right_frac <= 0.0 {
        return mask.clone();
    }
    let (width, height) = mask.dimensions();
    let cut = ((width as f32 * (1.0 - exclude_right_frac)).round() as u32).min(width);
    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..cut {
            out.put_pixel(x, y, *mask.get_pixel(x, y));
        }
    }
    out
}
