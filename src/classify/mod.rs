//! Boundary to the downstream signature-authenticity classifier.
//!
//! The pipeline treats classification as an opaque function over a cropped
//! image: label plus class probabilities in, structured error out.
//! Classification failures never cross into the pipeline and are never
//! retried here - retrying a whole invocation is a caller decision.

mod client;

pub use client::HttpClassifier;

use image::RgbImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options forwarded to the classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassifyOptions {
    /// Decision threshold on `p_real`, in `[0, 1]`.
    pub threshold: f32,
    /// Test-time-augmentation repetitions, in `[0, 32]`; 0 disables TTA.
    pub tta: u32,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            threshold: 0.7,
            tta: 0,
        }
    }
}

/// Classifier verdict for one crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// `"REAL"` or `"FORGED"`.
    pub label: String,
    /// Probability the signature is genuine.
    pub p_real: f32,
    /// Probability the signature is forged.
    pub p_forge: f32,
    /// Threshold the service actually applied.
    pub threshold_used: f32,
    /// TTA repetitions the service actually ran.
    pub tta: u32,
    /// Service-side inference latency in milliseconds.
    pub latency_ms: f64,
}

impl Verdict {
    /// Whether the service judged the signature genuine.
    pub fn is_real(&self) -> bool {
        self.label.eq_ignore_ascii_case("REAL")
    }
}

/// Errors from the classification boundary.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The crop could not be encoded as PNG.
    #[error("failed to encode crop as PNG")]
    Encode(#[source] image::ImageError),

    /// Transport-level failure (connect, send, or body decode).
    #[error("classification request failed")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("classifier returned status {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        message: String,
    },
}

/// An opaque signature-authenticity classifier.
pub trait SignatureClassifier {
    /// Classifies one cropped signature image.
    fn classify(&self, image: &RgbImage, options: &ClassifyOptions) -> Result<Verdict, ClassifyError>;
}
