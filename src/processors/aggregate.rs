//! Candidate merging and the layered fallback policy.
//!
//! Aggregation never fails: accepted candidates merge into one padded
//! rectangle; with none accepted, the widest flat shape is taken as a
//! last-resort guess; with a blank mask, the ROI itself is returned.

use tracing::{debug, warn};

use super::contour::ContourAnalysis;
use super::geometry::Rect;
use serde::Serialize;

/// Which aggregation path produced the final region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegionSource {
    /// Union of accepted signature-like candidates.
    Candidates,
    /// No candidate accepted; widest flat shape chosen instead.
    WidestShape,
    /// Blank mask; the unmodified ROI band.
    RoiBand,
}

/// Merges the analysis into one rectangle within a `width`×`height` mask.
pub fn aggregate(
    analysis: &ContourAnalysis,
    width: u32,
    height: u32,
    merge_padding_frac: f32,
    fallback_padding_frac: f32,
) -> (Rect, RegionSource) {
    let longest_side = width.max(height) as f32;

    let mut accepted = analysis.accepted();
    if let Some(first) = accepted.next() {
        // A signature commonly decomposes into several disconnected pen
        // strokes; merge every accepted rect into one region.
        let merged = accepted.fold(first.bounds, |acc, c| acc.union(&c.bounds));
        let pad = (merge_padding_frac * longest_side).round() as u32;
        let region = merged.padded(pad, width, height);
        debug!(?region, "merged accepted candidates");
        return (region, RegionSource::Candidates);
    }

    if let Some(best) = widest_flat_shape(&analysis.shapes) {
        let pad = (fallback_padding_frac * longest_side).round() as u32;
        let region = best.padded(pad, width, height);
        warn!(?region, "no signature-like candidate; using widest flat shape");
        return (region, RegionSource::WidestShape);
    }

    warn!("blank mask; keeping the region of interest unchanged");
    (
        Rect::clamped(0.0, 0.0, width as f32, height as f32, width, height),
        RegionSource::RoiBand,
    )
}

/// The shape maximizing `width - 2 * height`: favors wide, flat shapes over
/// tall ones. Ties resolve to the earliest shape in contour order.
fn widest_flat_shape(shapes: &[Rect]) -> Option<Rect> {
    let mut best: Option<(i64, Rect)> = None;
    for rect in shapes {
        let key = rect.width() as i64 - 2 * rect.height() as i64;
        match best {
            Some((best_key, _)) if key <= best_key => {}
            _ => best = Some((key, *rect)),
        }
    }
    best.map(|(_, rect)| rect)
}
