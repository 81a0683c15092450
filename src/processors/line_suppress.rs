//! Printed rule-line removal.
//!
//! Signature lines on forms are long horizontal strokes that would otherwise
//! dominate contour analysis. A morphological opening with a wide 1-pixel-tall
//! structuring element isolates them; subtracting the opened image from the
//! mask removes the rules while leaving shorter handwriting segments intact.
//!
//! For a binary mask, opening with a 1×k element is exactly "keep horizontal
//! foreground runs of length >= k", so the opening is computed per row over
//! run lengths instead of via erode/dilate passes.

use image::{GrayImage, Luma};

/// Minimum structuring-element width, in pixels.
const MIN_KERNEL_WIDTH: u32 = 25;

/// Structuring-element width for a mask of `mask_width` pixels.
pub fn horizontal_kernel_width(mask_width: u32, kernel_frac: f32) -> u32 {
    let scaled = (mask_width as f32 * kernel_frac).round() as u32;
    scaled.max(MIN_KERNEL_WIDTH)
}

/// Removes horizontal runs of length `>= horizontal_kernel_width(..)` from
/// the mask.
pub fn suppress_horizontal_lines(mask: &GrayImage, kernel_frac: f32) -> GrayImage {
    let kernel_width = horizontal_kernel_width(mask.width(), kernel_frac);
    let lines = open_horizontal(mask, kernel_width);
    subtract(mask, &lines)
}

/// Morphological opening with a `kernel_width`×1 structuring element.
pub fn open_horizontal(mask: &GrayImage, kernel_width: u32) -> GrayImage {
    let (width, height) = mask.dimensions();
    if kernel_width <= 1 {
        return mask.clone();
    }
    let mut opened = GrayImage::new(width, height);
    for y in 0..height {
        let mut run_start = 0u32;
        let mut in_run = false;
        for x in 0..=width {
            let foreground = x < width && mask.get_pixel(x, y)[0] > 0;
            if foreground && !in_run {
                in_run = true;
                run_start = x;
            } else if !foreground && in_run {
                in_run = false;
                if x - run_start >= kernel_width {
                    for run_x in run_start..x {
                        opened.put_pixel(run_x, y, Luma([255]));
                    }
                }
            }
        }
    }
    opened
}

fn subtract(minuend: &GrayImage, subtrahend: &GrayImage) -> GrayImage {
    let mut out = minuend.clone();
    for (out_px, sub_px) in out.pixels_mut().zip(subtrahend.pixels()) {
        out_px[0] = out_px[0].saturating_sub(sub_px[0]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect as PixelRect;

    const FG: Luma<u8> = Luma([255]);

    #[test]
    fn kernel_width_has_floor() {
        assert_eq!(horizontal_kernel_width(80, 0.25), 25);
        assert_eq!(horizontal_kernel_width(800, 0.25), 200);
    }

    #[test]
    fn removes_full_width_rule_and_keeps_short_strokes() {
        let mut mask = GrayImage::new(200, 60);
        // Printed rule: full-width, 3 px tall.
        draw_filled_rect_mut(&mut mask, PixelRect::at(0, 30).of_size(200, 3), FG);
        // Handwriting segment: 30 px long.
        draw_filled_rect_mut(&mut mask, PixelRect::at(20, 10).of_size(30, 2), FG);

        // Kernel = max(25, 0.25 * 200) = 50.
        let cleaned = suppress_horizontal_lines(&mask, 0.25);

        for x in 0..200 {
            for y in 30..33 {
                assert_eq!(cleaned.get_pixel(x, y)[0], 0, "rule pixel ({x},{y}) survived");
            }
        }
        for x in 20..50 {
            for y in 10..12 {
                assert_eq!(cleaned.get_pixel(x, y)[0], 255, "stroke pixel ({x},{y}) lost");
            }
        }
    }

    #[test]
    fn run_exactly_kernel_width_is_removed() {
        let mut mask = GrayImage::new(100, 10);
        draw_filled_rect_mut(&mut mask, PixelRect::at(10, 5).of_size(25, 1), FG);
        let opened = open_horizontal(&mask, 25);
        assert_eq!(opened.get_pixel(10, 5)[0], 255);
        let cleaned = suppress_horizontal_lines(&mask, 0.25);
        assert_eq!(cleaned.get_pixel(10, 5)[0], 0);
    }

    #[test]
    fn run_below_kernel_width_survives() {
        let mut mask = GrayImage::new(100, 10);
        draw_filled_rect_mut(&mut mask, PixelRect::at(10, 5).of_size(24, 1), FG);
        let cleaned = suppress_horizontal_lines(&mask, 0.25);
        assert_eq!(cleaned.get_pixel(10, 5)[0], 255);
    }

    #[test]
    fn trivial_kernel_is_identity_opening() {
        let mut mask = GrayImage::new(10, 2);
        draw_filled_rect_mut(&mut mask, PixelRect::at(3, 0).of_size(2, 1), FG);
        let opened = open_horizontal(&mask, 1);
        assert_eq!(opened.as_raw(), mask.as_raw());
    }
}
