//! Error types for profile and transform operations.

use thiserror::Error;

/// Color transform error.
///
/// Covers the two ways a transform can fail:
/// - building it (unsupported endpoints, unusable profiles)
/// - running it on buffers of the wrong size
#[derive(Debug, Error)]
pub enum ColorError {
    /// The transform could not be built for the requested endpoints.
    #[error("transform construction failed: {0}")]
    Construction(String),

    /// A pixel slice does not hold the number of samples the call needs.
    #[error("buffer size mismatch: expected {expected} samples, got {got}")]
    BufferSize {
        /// Samples required.
        expected: usize,
        /// Samples provided.
        got: usize,
    },
}

impl ColorError {
    /// Creates a construction error.
    pub fn construction(reason: impl Into<String>) -> Self {
        Self::Construction(reason.into())
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ColorError::construction("XYZ to XYZ");
        assert_eq!(err.to_string(), "transform construction failed: XYZ to XYZ");

        let err = ColorError::BufferSize { expected: 12, got: 9 };
        assert!(err.to_string().contains("expected 12"));
    }
}
