//! Utility functions for loading and converting page rasters.

mod image;

pub use image::{dynamic_to_rgb, load_image};
