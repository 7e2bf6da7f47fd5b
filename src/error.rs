//! Error types for trajectory feature operations.
//!
//! Feature extraction itself never fails: degenerate trajectories produce the
//! zero vector and malformed numbers propagate into the output. Errors only
//! arise from the supporting constructors (configuration, column input,
//! vector conversion).

use thiserror::Error;

/// Main error type for trajectory feature operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Coordinate and timestamp columns have different lengths.
    #[error("Length mismatch: {xs} x values, {ys} y values, {ts} timestamps")]
    LengthMismatch { xs: usize, ys: usize, ts: usize },

    /// A slice could not be converted into a feature vector.
    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type alias for trajectory feature operations.
pub type Result<T> = std::result::Result<T, FeatureError>;

impl FeatureError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a column length mismatch error.
    #[must_use]
    pub const fn length_mismatch(xs: usize, ys: usize, ts: usize) -> Self {
        Self::LengthMismatch { xs, ys, ts }
    }

    /// Create a dimension mismatch error.
    #[must_use]
    pub const fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeatureError::length_mismatch(4, 3, 4);
        let msg = err.to_string();
        assert!(msg.contains("4 x values"));
        assert!(msg.contains("3 y values"));

        let err = FeatureError::dimension_mismatch(16, 15);
        assert!(err.to_string().contains("16"));
        assert!(err.to_string().contains("15"));
    }

    #[test]
    fn test_error_constructors() {
        assert_eq!(
            FeatureError::invalid_config("bad divisor"),
            FeatureError::InvalidConfig("bad divisor".to_string())
        );
        assert!(matches!(
            FeatureError::dimension_mismatch(16, 3),
            FeatureError::DimensionMismatch { expected: 16, actual: 3 }
        ));
    }
}
