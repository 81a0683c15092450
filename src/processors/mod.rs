//! Per-stage image processing for the extraction pipeline.
//!
//! Stages are pure functions (or small parameterized processors) over rasters
//! and masks. Each stage owns the buffer it produces and hands it to the
//! next; nothing here touches UI, network, or global state.
//!
//! # Modules
//!
//! * `geometry` - Integer rectangles and contour measurements
//! * `binarize` - Grayscale conversion, denoising, Otsu thresholding
//! * `line_suppress` - Printed rule-line removal
//! * `region_mask` - Right-edge date/stamp exclusion
//! * `contour` - Shape measurement and signature-likeness classification
//! * `aggregate` - Candidate merging and fallback policy
//! * `crop` - Rectangle cropping

pub mod aggregate;
pub mod binarize;
pub mod contour;
pub mod crop;
pub mod geometry;
pub mod line_suppress;
pub mod region_mask;

pub use aggregate::{aggregate, RegionSource};
pub use binarize::binarize;
pub use contour::{Candidate, CandidateExtractor, CandidateTag, ContourAnalysis};
pub use crop::crop_rect;
pub use geometry::Rect;
pub use line_suppress::suppress_horizontal_lines;
pub use region_mask::mask_right_region;
