//! Rectangle cropping.

use image::RgbImage;

use super::geometry::Rect;

/// Copies `rect` out of `src` into a fresh raster.
///
/// The output is always at least 1×1. The source is never mutated. Target
/// pixels outside the source (possible only for degenerate zero-size
/// sources) stay zero-initialized.
pub fn crop_rect(src: &RgbImage, rect: &Rect) -> RgbImage {
    let out_width = rect.width().max(1);
    let out_height = rect.height().max(1);
    let mut out = RgbImage::new(out_width, out_height);
    for y in 0..out_height {
        let src_y = rect.y0 + y;
        if src_y >= src.height() {
            break;
        }
        for x in 0..out_width {
            let src_x = rect.x0 + x;
            if src_x >= src.width() {
                break;
            }
            out.put_pixel(x, y, *src.get_pixel(src_x, src_y));
        }
    }
    out
}
