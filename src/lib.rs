//! # sigcrop
//!
//! Locates and isolates, within a rasterized document page, the sub-region
//! most likely to contain a handwritten signature, so an external classifier
//! can judge authenticity.
//!
//! The core is a deterministic multi-stage pipeline over pixel and (optional)
//! text-layout data:
//!
//! 1. **Anchor localization** - a keyword of the page's text layer
//!    ("Firma:", "Signature", ...) anchors a region of interest; pages
//!    without one fall back to a fixed bottom band.
//! 2. **Binarization** - blur, Otsu thresholding, and polarity correction
//!    produce an ink mask.
//! 3. **Rule-line removal** - a wide horizontal morphological opening strips
//!    printed signature lines without touching handwriting strokes.
//! 4. **Right-edge exclusion** - the date/stamp zone is blanked.
//! 5. **Shape classification** - connected shapes are measured and scored;
//!    wide, sparse, elongated shapes count as signature-like.
//! 6. **Aggregation** - accepted shapes merge into one padded rectangle,
//!    with a layered fallback guaranteeing a usable crop on any input.
//!
//! Only a missing vision runtime fails an invocation; everything else
//! degrades geometrically and still yields a non-empty crop.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use sigcrop::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let page = load_image(std::path::Path::new("page.png"))?;
//!     let viewport = Viewport::identity(page.width() as f32, page.height() as f32);
//!
//!     let extractor = SignatureExtractor::new(ExtractorConfig::default())?;
//!     let result = extractor.extract(&page, None, &viewport)?;
//!
//!     println!("signature region: {:?}", result.region);
//!     result.image.save("signature.png")?;
//!     Ok(())
//! }
//! ```
//!
//! Classification of the crop is an external concern; [`classify`] holds the
//! boundary types and an HTTP client for a `/predict`-style service.

pub mod classify;
pub mod core;
pub mod layout;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// ```rust
/// use sigcrop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{
        ExtractError, ExtractResult, ExtractorConfig, Readiness, ReadinessSignal,
    };
    pub use crate::layout::{TextItem, Viewport};
    pub use crate::pipeline::{ExtractionResult, PageInput, SignatureExtractor};
    pub use crate::processors::{RegionSource, Rect};
    pub use crate::utils::load_image;
}
