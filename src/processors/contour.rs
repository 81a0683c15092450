//! Connected-shape analysis and signature-likeness classification.
//!
//! Every externally-connected foreground shape of the masked image is
//! measured (area, bounding box, perimeter) and classified. Stamps, boxes,
//! and checkmarks present as square-ish well-filled shapes; printed blocks
//! and logos as dense rectangles. Handwriting presents as wide, sparse,
//! elongated shapes, and commonly decomposes into several disconnected pen
//! strokes - so every accepted shape is retained for aggregation, not just
//! the top scorer.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use serde::Serialize;
use tracing::debug;

use super::geometry::{contour_area, contour_bounds, contour_perimeter, Rect};
use crate::core::config::ExtractorConfig;

/// Stabilizer added to denominators of the dimension-derived ratios.
const EPS_RATIO: f32 = 1e-3;

/// Stabilizer added to the thinness denominator of the score.
const EPS_SCORE: f32 = 1e-4;

/// Classification outcome for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CandidateTag {
    /// Signature-like; participates in aggregation.
    Accepted,
    /// Square-ish and well filled: stamp, box, or checkmark.
    RejectedSquareLike,
    /// Dense near-rectangular block: printed text block or logo.
    RejectedDenseRect,
    /// Failed the aspect/width or fill requirements.
    RejectedOther,
}

/// One measured and classified shape.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    /// Bounding rectangle in mask coordinates.
    pub bounds: Rect,
    /// Signature-likeness score; 0 for rejected shapes.
    pub score: f32,
    /// Classification outcome.
    pub tag: CandidateTag,
}

/// Result of one contour analysis pass.
#[derive(Debug, Clone, Default)]
pub struct ContourAnalysis {
    /// Shapes that passed the speckle filter, classified and scored.
    pub candidates: Vec<Candidate>,
    /// Bounding rectangle of every external shape, unfiltered. The
    /// aggregator's last-resort fallback searches these.
    pub shapes: Vec<Rect>,
}

impl ContourAnalysis {
    /// Iterates over the accepted candidates.
    pub fn accepted(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates
            .iter()
            .filter(|c| c.tag == CandidateTag::Accepted)
    }
}

/// Shape classifier with the signature-likeness thresholds.
#[derive(Debug, Clone)]
pub struct CandidateExtractor {
    min_area_fraction: f32,
    max_fill_for_signature: f32,
    min_aspect_for_signature: f32,
}

impl CandidateExtractor {
    /// Builds an extractor from the pipeline configuration.
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            min_area_fraction: config.min_area_fraction,
            max_fill_for_signature: config.max_fill_for_signature,
            min_aspect_for_signature: config.min_aspect_for_signature,
        }
    }

    /// Measures and classifies every external shape of the mask.
    pub fn analyze(&self, mask: &GrayImage) -> ContourAnalysis {
        let (width, height) = mask.dimensions();
        let min_area = self.min_area_fraction * (width as f32 * height as f32);
        let wide_bar = 0.25 * width as f32;

        let mut analysis = ContourAnalysis::default();
        if width == 0 || height == 0 {
            return analysis;
        }

        for contour in find_contours::<i32>(mask) {
            if contour.border_type != BorderType::Outer {
                continue;
            }
            let Some(bounds) = contour_bounds(&contour) else {
                continue;
            };
            analysis.shapes.push(bounds);

            let area = contour_area(&contour.points);
            if area < min_area {
                continue;
            }

            let w = bounds.width() as f32;
            let h = bounds.height() as f32;
            let aspect = w / (h + EPS_RATIO);
            let fill = area / (w * h + EPS_RATIO);
            let perimeter = contour_perimeter(&contour.points);
            let thinness = area / (perimeter * perimeter + EPS_RATIO);

            let square_like = aspect > 0.8 && aspect < 1.25 && fill > 0.35;
            let dense_rect = fill > 0.55 && aspect > 0.5 && aspect < 2.0;
            let wide_enough = aspect > self.min_aspect_for_signature || w > wide_bar;

            let (tag, score) = if square_like {
                (CandidateTag::RejectedSquareLike, 0.0)
            } else if dense_rect {
                (CandidateTag::RejectedDenseRect, 0.0)
            } else if wide_enough && fill < self.max_fill_for_signature {
                let score = w * (1.0 - fill) * (1.0 / (thinness + EPS_SCORE));
                (CandidateTag::Accepted, score)
            } else {
                (CandidateTag::RejectedOther, 0.0)
            };
            analysis.candidates.push(Candidate { bounds, score, tag });
        }

        debug!(
            shapes = analysis.shapes.len(),
            classified = analysis.candidates.len(),
            accepted = analysis.accepted().count(),
            "contour analysis"
        );
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect as PixelRect;

    const FG: Luma<u8> = Luma([255]);

    fn extractor() -> CandidateExtractor {
        CandidateExtractor::from_config(&ExtractorConfig::default())
    }

    /// A wide comb shape: horizontal bar with downward teeth. Sparse within
    /// its bounding box, like a cursive stroke cluster.
    fn draw_comb(mask: &mut GrayImage, x: i32, y: i32) {
        draw_filled_rect_mut(mask, PixelRect::at(x, y).of_size(150, 4), FG);
        for i in 0..4 {
            draw_filled_rect_mut(mask, PixelRect::at(x + 8 + i * 40, y + 4).of_size(4, 12), FG);
        }
    }

    #[test]
    fn comb_shape_is_accepted() {
        let mut mask = GrayImage::new(400, 200);
        draw_comb(&mut mask, 30, 60);
        let analysis = extractor().analyze(&mask);
        assert_eq!(analysis.shapes.len(), 1);
        let accepted: Vec<_> = analysis.accepted().collect();
        assert_eq!(accepted.len(), 1);
        assert!(accepted[0].score > 0.0);
        assert_eq!(accepted[0].bounds, Rect::new(30, 60, 180, 76));
    }

    #[test]
    fn filled_square_is_rejected_square_like() {
        let mut mask = GrayImage::new(300, 300);
        draw_filled_rect_mut(&mut mask, PixelRect::at(50, 50).of_size(100, 100), FG);
        let analysis = extractor().analyze(&mask);
        assert_eq!(analysis.candidates.len(), 1);
        assert_eq!(analysis.candidates[0].tag, CandidateTag::RejectedSquareLike);
        assert_eq!(analysis.accepted().count(), 0);
    }

    #[test]
    fn dense_block_is_rejected_dense_rect() {
        let mut mask = GrayImage::new(300, 300);
        draw_filled_rect_mut(&mut mask, PixelRect::at(40, 40).of_size(90, 60), FG);
        let analysis = extractor().analyze(&mask);
        assert_eq!(analysis.candidates.len(), 1);
        assert_eq!(analysis.candidates[0].tag, CandidateTag::RejectedDenseRect);
    }

    #[test]
    fn tall_narrow_bar_is_rejected_other_but_listed_as_shape() {
        let mut mask = GrayImage::new(400, 300);
        draw_filled_rect_mut(&mut mask, PixelRect::at(50, 20).of_size(40, 200), FG);
        let analysis = extractor().analyze(&mask);
        assert_eq!(analysis.shapes.len(), 1);
        assert_eq!(analysis.candidates[0].tag, CandidateTag::RejectedOther);
    }

    #[test]
    fn speckle_is_skipped_but_still_a_shape() {
        let mut mask = GrayImage::new(400, 200);
        draw_filled_rect_mut(&mut mask, PixelRect::at(10, 10).of_size(3, 3), FG);
        let analysis = extractor().analyze(&mask);
        assert_eq!(analysis.shapes.len(), 1);
        assert!(analysis.candidates.is_empty());
    }

    #[test]
    fn raising_min_area_never_accepts_more() {
        let mut mask = GrayImage::new(400, 200);
        draw_comb(&mut mask, 30, 20);
        // Second, smaller sparse shape.
        draw_filled_rect_mut(&mut mask, PixelRect::at(30, 120).of_size(60, 2), FG);
        draw_filled_rect_mut(&mut mask, PixelRect::at(40, 122).of_size(2, 8), FG);

        let loose = extractor().analyze(&mask).accepted().count();
        let strict_config = ExtractorConfig {
            min_area_fraction: 0.004,
            ..Default::default()
        };
        let strict = CandidateExtractor::from_config(&strict_config)
            .analyze(&mask)
            .accepted()
            .count();
        assert!(loose >= 1);
        assert!(strict <= loose);
    }

    #[test]
    fn empty_mask_yields_no_shapes() {
        let mask = GrayImage::new(100, 100);
        let analysis = extractor().analyze(&mask);
        assert!(analysis.shapes.is_empty());
        assert!(analysis.candidates.is_empty());
    }
}
