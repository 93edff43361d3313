//! Error types for HDR measurement.

use thiserror::Error;

/// Measurement error.
///
/// Every error is fatal for the call; no partial outputs are returned.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// A transform could not be built or run.
    #[error("transform error: {0}")]
    Construction(#[from] hilux_color::ColorError),

    /// Scratch or output storage could not be allocated.
    #[error("resource error: {0}")]
    Resource(#[from] hilux_core::Error),

    /// The highlight configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The source image cannot be measured.
    #[error("unsupported image: {0}")]
    Image(String),
}

/// Result type for measurement.
pub type MeasureResult<T> = Result<T, MeasureError>;
