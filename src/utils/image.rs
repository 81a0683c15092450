//! Image loading helpers.

use crate::core::errors::ExtractError;
use image::{DynamicImage, RgbImage};

/// Converts a DynamicImage of any pixel format to an RgbImage.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Loads a page raster from a file and converts it to RGB.
///
/// # Errors
///
/// Returns [`ExtractError::ImageLoad`] if the file cannot be opened or
/// decoded.
pub fn load_image(path: &std::path::Path) -> Result<RgbImage, ExtractError> {
    let img = image::open(path).map_err(ExtractError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}
