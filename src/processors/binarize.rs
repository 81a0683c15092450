//! ROI binarization: grayscale conversion, denoising, Otsu thresholding,
//! and polarity normalization.
//!
//! Automatic thresholding does not guarantee which class (ink vs. paper)
//! lands on the high value. Ink is assumed to be the minority of pixels, so
//! when the thresholded mask's mean exceeds the intensity mid-point the mask
//! is inverted, making ink the foreground (255) regardless of the document's
//! original polarity.

use image::{imageops, GrayImage, RgbImage};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use imageproc::filter::gaussian_blur_f32;
use tracing::debug;

/// Sigma of the denoising blur; equivalent to a 3×3 Gaussian kernel.
const BLUR_SIGMA: f32 = 0.8;

/// Mid-point of the 8-bit intensity range used for the polarity decision.
const POLARITY_MIDPOINT: f64 = 127.0;

/// Converts a ROI raster into a normalized binary ink mask.
pub fn binarize(roi: &RgbImage) -> GrayImage {
    let (width, height) = roi.dimensions();
    if width == 0 || height == 0 {
        return GrayImage::new(width, height);
    }

    let gray = imageops::grayscale(roi);
    // The blur kernel exceeds the raster below 3 px; threshold directly.
    let blurred = if width < 3 || height < 3 {
        gray
    } else {
        gaussian_blur_f32(&gray, BLUR_SIGMA)
    };
    let level = otsu_level(&blurred);
    let mut mask = threshold(&blurred, level, ThresholdType::Binary);

    if mask_mean(&mask) > POLARITY_MIDPOINT {
        debug!(otsu_level = level, "majority class is high; inverting mask");
        imageops::invert(&mut mask);
    }
    mask
}

fn mask_mean(mask: &GrayImage) -> f64 {
    let pixels = mask.as_raw();
    if pixels.is_empty() {
        return 0.0;
    }
    let sum: u64 = pixels.iter().map(|&p| p as u64).sum();
    sum as f64 / pixels.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect as PixelRect;

    fn foreground_count(mask: &GrayImage) -> usize {
        mask.as_raw().iter().filter(|&&p| p > 0).count()
    }

    fn page_with_blob(paper: Rgb<u8>, ink: Rgb<u8>) -> RgbImage {
        let mut img = RgbImage::from_pixel(100, 100, paper);
        draw_filled_rect_mut(&mut img, PixelRect::at(40, 45).of_size(20, 10), ink);
        img
    }

    #[test]
    fn dark_ink_on_light_paper_becomes_foreground() {
        let img = page_with_blob(Rgb([255, 255, 255]), Rgb([0, 0, 0]));
        let mask = binarize(&img);
        assert_eq!(mask.dimensions(), (100, 100));
        // Blob center is ink.
        assert_eq!(mask.get_pixel(50, 50)[0], 255);
        // Paper far from the blob is background.
        assert_eq!(mask.get_pixel(5, 5)[0], 0);
        // Ink stays the minority class.
        let fg = foreground_count(&mask);
        assert!(fg > 100 && fg < 1000, "foreground count {fg}");
    }

    #[test]
    fn inverted_polarity_input_normalizes_the_same_way() {
        let img = page_with_blob(Rgb([0, 0, 0]), Rgb([255, 255, 255]));
        let mask = binarize(&img);
        assert_eq!(mask.get_pixel(50, 50)[0], 255);
        assert_eq!(mask.get_pixel(5, 5)[0], 0);
        let fg = foreground_count(&mask);
        assert!(fg > 100 && fg < 1000, "foreground count {fg}");
    }

    #[test]
    fn uniform_page_yields_empty_mask() {
        let img = RgbImage::from_pixel(64, 64, Rgb([255, 255, 255]));
        let mask = binarize(&img);
        assert_eq!(foreground_count(&mask), 0);
    }

    #[test]
    fn zero_area_input_is_passed_through() {
        let img = RgbImage::new(0, 0);
        let mask = binarize(&img);
        assert_eq!(mask.dimensions(), (0, 0));
    }

    #[test]
    fn tiny_input_skips_the_blur() {
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        let mask = binarize(&img);
        assert_eq!(mask.dimensions(), (2, 2));
        assert_eq!(foreground_count(&mask), 0);
    }
}
