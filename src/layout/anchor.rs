//! Signature anchor localization and ROI derivation.
//!
//! Forms label the signature line with a short keyword ("Firma:",
//! "Firmado por", "Signature", ...). The lowest keyword occurrence on the
//! rendered page is assumed closest to the actual signature; the ROI is a
//! band starting slightly above it and extending well below it. Pages with
//! no text layer, or none of the keywords, fall back to a fixed bottom band.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::{compose, TextItem, Viewport};
use crate::core::config::ExtractorConfig;
use crate::processors::geometry::Rect;

/// Keyword variants that label a signature line.
static SIGNATURE_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new("firma|firmado|signature|firmante|firma:|firmado por")
        .case_insensitive(true)
        .build()
        .expect("keyword pattern is valid")
});

/// Fraction of the page height kept below the fallback band; skips the
/// page-edge scanner shadow.
const BOTTOM_MARGIN_FRAC: f32 = 0.98;

/// Pixel-space y of the lowest keyword occurrence, if any.
///
/// Each matching item's transform is composed with the viewport transform;
/// the greatest resulting y wins (y grows downward in pixel space).
pub fn find_anchor_y(items: &[TextItem], viewport: &Viewport) -> Option<f32> {
    let mut best: Option<f32> = None;
    for item in items {
        if !SIGNATURE_KEYWORDS.is_match(&item.text) {
            continue;
        }
        let m = compose(&viewport.transform, &item.transform);
        let y = m[5];
        if y.is_finite() && best.is_none_or(|b| y > b) {
            best = Some(y);
        }
    }
    best
}

/// Selects the region of interest on a `page_width`×`page_height` raster.
///
/// With an anchor: a band from `above_frac` above it to `below_frac` below
/// it, full width. Without: the bottom `bottom_fallback_frac` of the page.
/// Always a valid in-bounds rectangle; absence of an anchor is not an error.
pub fn locate_roi(
    items: Option<&[TextItem]>,
    viewport: &Viewport,
    page_width: u32,
    page_height: u32,
    config: &ExtractorConfig,
) -> Rect {
    let height = viewport.height;
    match items.and_then(|items| find_anchor_y(items, viewport)) {
        Some(anchor_y) => {
            debug!(anchor_y, "signature keyword anchor found");
            Rect::clamped(
                0.0,
                anchor_y - config.anchor_above_pad_frac * height,
                viewport.width,
                anchor_y + config.anchor_below_pad_frac * height,
                page_width,
                page_height,
            )
        }
        None => {
            debug!("no signature keyword; using bottom fallback band");
            Rect::clamped(
                0.0,
                height * (1.0 - config.bottom_fallback_frac),
                viewport.width,
                height * BOTTOM_MARGIN_FRAC,
                page_width,
                page_height,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str, x: f32, y: f32) -> TextItem {
        TextItem::new(text, [1.0, 0.0, 0.0, 1.0, x, y])
    }

    #[test]
    fn picks_the_lowest_keyword_occurrence() {
        let viewport = Viewport::identity(800.0, 1000.0);
        let items = vec![
            at("Firmado por: Cnel. Ruiz", 80.0, 800.0),
            at("Observaciones", 80.0, 870.0),
            at("firma", 420.0, 950.0),
        ];
        assert_eq!(find_anchor_y(&items, &viewport), Some(950.0));
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let viewport = Viewport::identity(800.0, 1000.0);
        let items = vec![at("SIGNATURE", 10.0, 500.0)];
        assert_eq!(find_anchor_y(&items, &viewport), Some(500.0));
    }

    #[test]
    fn no_keyword_means_no_anchor() {
        let viewport = Viewport::identity(800.0, 1000.0);
        let items = vec![at("Fecha de entrega", 10.0, 900.0)];
        assert_eq!(find_anchor_y(&items, &viewport), None);
    }

    #[test]
    fn anchored_roi_band_is_clamped_to_the_page() {
        let viewport = Viewport::identity(800.0, 1000.0);
        let items = vec![at("Firma", 0.0, 800.0), at("firmado", 0.0, 950.0)];
        let roi = locate_roi(
            Some(&items),
            &viewport,
            800,
            1000,
            &ExtractorConfig::default(),
        );
        // y0 = 950 - 0.05*1000, y1 = min(1000, 950 + 0.35*1000)
        assert_eq!(roi, Rect::new(0, 900, 800, 1000));
    }

    #[test]
    fn missing_layout_uses_bottom_band() {
        let viewport = Viewport::identity(800.0, 1000.0);
        let roi = locate_roi(None, &viewport, 800, 1000, &ExtractorConfig::default());
        // y0 = 1000 * (1 - 0.35), y1 = 1000 * 0.98
        assert_eq!(roi, Rect::new(0, 650, 800, 980));
    }

    #[test]
    fn empty_layout_uses_bottom_band() {
        let viewport = Viewport::identity(800.0, 1000.0);
        let roi = locate_roi(Some(&[]), &viewport, 800, 1000, &ExtractorConfig::default());
        assert_eq!(roi, Rect::new(0, 650, 800, 980));
    }

    #[test]
    fn viewport_scale_moves_the_anchor() {
        // 2x render: the item at page-space y=400 lands at pixel y=800.
        let viewport = Viewport {
            width: 800.0,
            height: 1000.0,
            transform: [2.0, 0.0, 0.0, 2.0, 0.0, 0.0],
        };
        let items = vec![at("firma:", 0.0, 400.0)];
        assert_eq!(find_anchor_y(&items, &viewport), Some(800.0));
    }
}
