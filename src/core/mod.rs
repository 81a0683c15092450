//! Core error, configuration, and readiness types for the pipeline.

pub mod config;
pub mod errors;
pub mod readiness;

pub use config::{ConfigError, ConfigValidator, ExtractorConfig};
pub use errors::{ExtractError, ExtractResult};
pub use readiness::{Readiness, ReadinessSignal};
