//! Signature extraction pipeline orchestration.
//!
//! [`SignatureExtractor`] runs the stage sequence once, synchronously, per
//! page: anchor localization → ROI crop → binarization → rule-line removal →
//! right-edge exclusion → contour classification → aggregation → final crop.
//! Identical inputs and configuration produce byte-identical output.
//!
//! Every intermediate buffer is owned by its stage and dropped when the
//! invocation returns, on every exit path; peak memory stays a small constant
//! multiple of one page raster.

use std::time::Duration;

use image::RgbImage;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::config::{ConfigValidator, ExtractorConfig};
use crate::core::errors::{ExtractError, ExtractResult};
use crate::core::readiness::Readiness;
use crate::layout::{locate_roi, TextItem, Viewport};
use crate::processors::aggregate::{aggregate, RegionSource};
use crate::processors::binarize::binarize;
use crate::processors::contour::CandidateExtractor;
use crate::processors::crop::crop_rect;
use crate::processors::line_suppress::suppress_horizontal_lines;
use crate::processors::region_mask::mask_right_region;

use super::result::ExtractionResult;

/// One page to process in a batch.
#[derive(Debug, Clone)]
pub struct PageInput {
    /// Rendered page raster.
    pub page: RgbImage,
    /// Text layer, if the source page has one.
    pub text_layout: Option<Vec<TextItem>>,
    /// Render viewport for the raster.
    pub viewport: Viewport,
}

/// The signature-region extraction pipeline.
///
/// Construction validates the configuration once; the configuration is never
/// mutated afterwards. Separate invocations share no mutable state, so one
/// extractor may serve many threads.
#[derive(Debug, Clone)]
pub struct SignatureExtractor {
    config: ExtractorConfig,
    readiness: Readiness,
}

impl SignatureExtractor {
    /// Creates an extractor over an already-ready vision runtime.
    pub fn new(config: ExtractorConfig) -> ExtractResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            readiness: Readiness::ready(),
        })
    }

    /// Replaces the readiness gate, for deployments whose vision runtime
    /// initializes asynchronously.
    pub fn with_readiness(mut self, readiness: Readiness) -> Self {
        self.readiness = readiness;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts the probable signature region of one page.
    ///
    /// Fails only when the vision runtime misses the readiness bound; every
    /// other condition (no text layer, no anchor, no signature-like shape,
    /// blank mask) degrades through the fallback chain and still yields a
    /// non-empty crop.
    pub fn extract(
        &self,
        page: &RgbImage,
        text_layout: Option<&[TextItem]>,
        viewport: &Viewport,
    ) -> ExtractResult<ExtractionResult> {
        let timeout = Duration::from_millis(self.config.readiness_timeout_ms);
        if !self.readiness.wait_ready(timeout) {
            return Err(ExtractError::EnvironmentNotReady {
                timeout_ms: self.config.readiness_timeout_ms,
            });
        }

        let (page_width, page_height) = page.dimensions();
        let roi = locate_roi(text_layout, viewport, page_width, page_height, &self.config);
        debug!(?roi, page_width, page_height, "selected region of interest");

        let roi_raster = crop_rect(page, &roi);
        let mask = binarize(&roi_raster);
        let mask = suppress_horizontal_lines(&mask, self.config.horizontal_line_kernel_frac);
        let mask = mask_right_region(&mask, self.config.exclude_right_frac);

        let analysis = CandidateExtractor::from_config(&self.config).analyze(&mask);
        let (region_in_roi, source) = aggregate(
            &analysis,
            mask.width(),
            mask.height(),
            self.config.merge_padding_frac,
            self.config.fallback_padding_frac,
        );
        if source != RegionSource::Candidates {
            warn!(?source, "low-confidence extraction");
        }

        let image = crop_rect(&roi_raster, &region_in_roi);
        let region = region_in_roi.translated(roi.x0, roi.y0);
        debug!(?region, ?source, "extracted signature region");

        Ok(ExtractionResult {
            image,
            roi,
            region,
            source,
        })
    }

    /// Extracts every page of a batch in parallel.
    ///
    /// Invocations share no mutable state; results keep the input order.
    pub fn extract_batch(&self, inputs: &[PageInput]) -> Vec<ExtractResult<ExtractionResult>> {
        inputs
            .par_iter()
            .map(|input| {
                self.extract(
                    &input.page,
                    input.text_layout.as_deref(),
                    &input.viewport,
                )
            })
            .collect()
    }
}
