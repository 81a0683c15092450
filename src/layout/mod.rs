//! Text-layout inputs from the rendering collaborator.
//!
//! Pages rendered from a born-digital document carry a text layer: an ordered
//! sequence of strings, each with a 6-coefficient affine transform mapping
//! glyph space into page space. Scanned/image-only pages have none; every
//! consumer of these types treats the layout as optional.

mod anchor;

pub use anchor::{find_anchor_y, locate_roi};

use serde::{Deserialize, Serialize};

/// One item of a page's text layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    /// Text content, in page-render order.
    pub text: String,
    /// Affine transform `[a, b, c, d, e, f]` from glyph space to page space.
    pub transform: [f32; 6],
}

impl TextItem {
    /// Creates a text item.
    pub fn new(text: impl Into<String>, transform: [f32; 6]) -> Self {
        Self {
            text: text.into(),
            transform,
        }
    }
}

/// Render viewport mapping text-space coordinates into raster pixel space.
///
/// The transform is expected to produce y-down pixel coordinates; a
/// collaborator working y-up must fold the flip into this transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    /// Rendered width in pixels.
    pub width: f32,
    /// Rendered height in pixels.
    pub height: f32,
    /// Affine transform `[a, b, c, d, e, f]` from page space to pixel space.
    pub transform: [f32; 6],
}

impl Viewport {
    /// A viewport whose page space already is pixel space.
    pub fn identity(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            transform: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }
}

/// Composes two affine transforms: the result applies `inner` first, then
/// `outer`. Coefficient layout `[a, b, c, d, e, f]` for the matrix
/// `[a c e; b d f; 0 0 1]`.
pub fn compose(outer: &[f32; 6], inner: &[f32; 6]) -> [f32; 6] {
    [
        outer[0] * inner[0] + outer[2] * inner[1],
        outer[1] * inner[0] + outer[3] * inner[1],
        outer[0] * inner[2] + outer[2] * inner[3],
        outer[1] * inner[2] + outer[3] * inner[3],
        outer[0] * inner[4] + outer[2] * inner[5] + outer[4],
        outer[1] * inner[4] + outer[3] * inner[5] + outer[5],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_composition_is_inner() {
        let identity = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        let inner = [2.0, 0.0, 0.0, 3.0, 10.0, 20.0];
        assert_eq!(compose(&identity, &inner), inner);
    }

    #[test]
    fn translation_accumulates() {
        let outer = [1.0, 0.0, 0.0, 1.0, 5.0, 7.0];
        let inner = [1.0, 0.0, 0.0, 1.0, 10.0, 20.0];
        let m = compose(&outer, &inner);
        assert_eq!(m[4], 15.0);
        assert_eq!(m[5], 27.0);
    }

    #[test]
    fn scale_applies_to_inner_translation() {
        // A 2x viewport scale doubles the item's page-space position.
        let outer = [2.0, 0.0, 0.0, 2.0, 0.0, 0.0];
        let inner = [1.0, 0.0, 0.0, 1.0, 10.0, 20.0];
        let m = compose(&outer, &inner);
        assert_eq!(m[4], 20.0);
        assert_eq!(m[5], 40.0);
    }
}
