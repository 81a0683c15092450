//! Error types for the signature extraction pipeline.
//!
//! The pipeline itself is total: anything short of a missing vision runtime
//! is absorbed by a geometric fallback and still produces a crop. The error
//! enum therefore stays small - readiness expiry, image loading, and
//! configuration rejection are the only ways an invocation can fail.

use thiserror::Error;

use super::config::ConfigError;

/// Errors surfaced by the extraction pipeline.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The vision runtime did not become ready within the bounded wait.
    ///
    /// This is the only fail-closed path: no crop is produced.
    #[error("vision runtime not ready after {timeout_ms} ms")]
    EnvironmentNotReady {
        /// The wait bound that expired, in milliseconds.
        timeout_ms: u64,
    },

    /// Error occurred while loading a page raster.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// The supplied configuration failed validation.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Convenient result alias for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
