//! Configuration for the extraction pipeline.
//!
//! [`ExtractorConfig`] carries every tunable threshold of the pipeline. It is
//! passed by value into the extractor, validated once at construction, and
//! never mutated mid-run. All fields are serde-roundtrippable so a deployment
//! can ship its tuning as JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error indicating that a configuration value is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// A message describing the invalid value.
        message: String,
    },
}

/// A trait for validating configuration parameters.
pub trait ConfigValidator {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// A Result indicating success or a ConfigError if validation fails.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Returns the recommended default configuration.
    fn get_defaults() -> Self
    where
        Self: Sized;
}

/// Tunable parameters for signature-region extraction.
///
/// Defaults correspond to the reference tuning for 2.8×-scaled page renders.
/// Fraction fields are relative to the region-of-interest dimensions unless
/// noted otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Upstream render resolution, as a multiple of the document's native
    /// point-to-pixel ratio. Informational: the pipeline never rescales.
    pub render_scale: f32,
    /// Height fraction of the page used as the ROI band when no text anchor
    /// is found.
    pub bottom_fallback_frac: f32,
    /// Fraction of the ROI width blanked on the right before contour
    /// analysis (date/stamp exclusion zone). Zero disables the stage.
    pub exclude_right_frac: f32,
    /// Minimum contour area as a fraction of the ROI area; smaller shapes
    /// are treated as speckle noise.
    pub min_area_fraction: f32,
    /// Upper bound on bounding-box fill ratio for a shape to count as
    /// signature-like.
    pub max_fill_for_signature: f32,
    /// Minimum width/height ratio for acceptance (a shape wider than a
    /// quarter of the ROI passes regardless).
    pub min_aspect_for_signature: f32,
    /// Width fraction of the ROI used for the horizontal line-removal
    /// kernel (floored at 25 px).
    pub horizontal_line_kernel_frac: f32,
    /// Padding applied around merged accepted candidates, as a fraction of
    /// the larger ROI dimension.
    pub merge_padding_frac: f32,
    /// Padding applied around the fallback single-shape result.
    pub fallback_padding_frac: f32,
    /// ROI extent above a found text anchor, as a fraction of page height.
    pub anchor_above_pad_frac: f32,
    /// ROI extent below a found text anchor, as a fraction of page height.
    pub anchor_below_pad_frac: f32,
    /// Maximum wait for the vision runtime to become ready, in milliseconds.
    pub readiness_timeout_ms: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            render_scale: 2.8,
            bottom_fallback_frac: 0.35,
            exclude_right_frac: 0.20,
            min_area_fraction: 0.0008,
            max_fill_for_signature: 0.42,
            min_aspect_for_signature: 3.0,
            horizontal_line_kernel_frac: 0.25,
            merge_padding_frac: 0.06,
            fallback_padding_frac: 0.05,
            anchor_above_pad_frac: 0.05,
            anchor_below_pad_frac: 0.35,
            readiness_timeout_ms: 15000,
        }
    }
}

impl ConfigValidator for ExtractorConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        check_unit_fraction("bottom_fallback_frac", self.bottom_fallback_frac)?;
        check_unit_fraction("exclude_right_frac", self.exclude_right_frac)?;
        check_unit_fraction("min_area_fraction", self.min_area_fraction)?;
        check_unit_fraction("max_fill_for_signature", self.max_fill_for_signature)?;
        check_unit_fraction("horizontal_line_kernel_frac", self.horizontal_line_kernel_frac)?;
        check_unit_fraction("merge_padding_frac", self.merge_padding_frac)?;
        check_unit_fraction("fallback_padding_frac", self.fallback_padding_frac)?;
        check_unit_fraction("anchor_above_pad_frac", self.anchor_above_pad_frac)?;
        check_unit_fraction("anchor_below_pad_frac", self.anchor_below_pad_frac)?;
        if !(self.min_aspect_for_signature > 0.0) {
            return Err(ConfigError::InvalidConfig {
                message: format!(
                    "min_aspect_for_signature must be positive, got {}",
                    self.min_aspect_for_signature
                ),
            });
        }
        if !(self.render_scale > 0.0) {
            return Err(ConfigError::InvalidConfig {
                message: format!("render_scale must be positive, got {}", self.render_scale),
            });
        }
        if self.readiness_timeout_ms == 0 {
            return Err(ConfigError::InvalidConfig {
                message: "readiness_timeout_ms must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}

fn check_unit_fraction(name: &str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidConfig {
            message: format!("{name} must lie in [0, 1], got {value}"),
        })
    }
}
