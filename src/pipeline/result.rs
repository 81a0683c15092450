//! Extraction results.

use image::RgbImage;

use crate::processors::aggregate::RegionSource;
use crate::processors::geometry::Rect;

/// Output of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Cropped signature region, same pixel encoding as the input page.
    pub image: RgbImage,
    /// ROI band selected on the page, in page pixel coordinates.
    pub roi: Rect,
    /// Final signature region, in page pixel coordinates.
    pub region: Rect,
    /// Which aggregation path produced `region`.
    pub source: RegionSource,
}

impl ExtractionResult {
    /// Whether the region came from a fallback path rather than accepted
    /// signature-like candidates.
    pub fn is_low_confidence(&self) -> bool {
        self.source != RegionSource::Candidates
    }
}
