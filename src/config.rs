//! Configuration for trajectory feature extraction.
//!
//! [`FeatureConfig::default`] carries the reference constants. Vectors
//! produced with any other configuration are not comparable with vectors from
//! the reference extractor, so downstream models must be trained against the
//! same configuration they are served with.
//!
//! # Example
//!
//! ```
//! use trajectory_features::{FeatureConfig, FeatureIndex};
//!
//! let config = FeatureConfig::default();
//! assert_eq!(config.scale(FeatureIndex::MeanInterval), 100.0);
//!
//! let custom = FeatureConfig::default()
//!     .with_pause_threshold_ms(250.0)
//!     .with_scale(FeatureIndex::TotalDistance, 4000.0);
//! assert!(custom.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};
use crate::extractor::MIN_POINTS;
use crate::features::{FeatureIndex, FEATURE_DIM};

/// Configuration for feature extraction.
///
/// # Thresholds
///
/// - `min_points`: trajectories shorter than this yield the zero vector. Never
///   below [`MIN_POINTS`]; shorter trajectories have no defined statistics.
/// - `min_interval_ms`: floor applied to each `dt` before dividing by it.
/// - `pause_threshold_ms`: raw gaps strictly above this count as pauses.
///
/// # Normalization
///
/// `scales[i]` is the divisor for output slot `i`; the quotient is capped at 1.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureConfig {
    /// Minimum number of samples for a non-degenerate vector.
    pub min_points: usize,

    /// Floor (ms) for the per-step time delta used in speed.
    pub min_interval_ms: f64,

    /// Gaps (ms) strictly greater than this count as pauses.
    pub pause_threshold_ms: f64,

    /// Floor for the total path length in the efficiency denominator.
    pub min_path_length: f64,

    /// Floor (ms) for the duration in the point-density denominator.
    pub min_duration_ms: f64,

    /// Milliseconds per density unit (1000 gives points per second).
    pub density_unit_ms: f64,

    /// Per-slot normalization divisors, indexed by [`FeatureIndex`].
    pub scales: [f64; FEATURE_DIM],
}

impl Default for FeatureConfig {
    fn default() -> Self {
        let mut scales = [1.0; FEATURE_DIM];
        for idx in FeatureIndex::ALL {
            scales[idx.index()] = idx.reference_divisor();
        }

        Self {
            min_points: MIN_POINTS,
            min_interval_ms: 1.0,
            pause_threshold_ms: 100.0,
            min_path_length: 1.0,
            min_duration_ms: 1.0,
            density_unit_ms: 1000.0,
            scales,
        }
    }
}

impl FeatureConfig {
    /// Create a configuration with the reference constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this configuration equals the reference constants.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        *self == Self::default()
    }

    /// Divisor for one output slot.
    #[inline]
    #[must_use]
    pub const fn scale(&self, idx: FeatureIndex) -> f64 {
        self.scales[idx.index()]
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold or divisor is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.min_points < MIN_POINTS {
            return Err(FeatureError::invalid_config(format!(
                "min_points must be at least {MIN_POINTS}, got {}",
                self.min_points
            )));
        }
        if !is_positive(self.min_interval_ms) {
            return Err(FeatureError::invalid_config(
                "min_interval_ms must be positive",
            ));
        }
        if !self.pause_threshold_ms.is_finite() {
            return Err(FeatureError::invalid_config(
                "pause_threshold_ms must be finite",
            ));
        }
        if !is_positive(self.min_path_length) {
            return Err(FeatureError::invalid_config(
                "min_path_length must be positive",
            ));
        }
        if !is_positive(self.min_duration_ms) {
            return Err(FeatureError::invalid_config(
                "min_duration_ms must be positive",
            ));
        }
        if !is_positive(self.density_unit_ms) {
            return Err(FeatureError::invalid_config(
                "density_unit_ms must be positive",
            ));
        }
        for idx in FeatureIndex::ALL {
            let s = self.scale(idx);
            if !(is_positive(s) && s.is_finite()) {
                return Err(FeatureError::invalid_config(format!(
                    "scale for {} must be positive and finite, got {s}",
                    idx.name()
                )));
            }
        }
        Ok(())
    }

    /// Set the minimum number of samples.
    #[must_use]
    pub const fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Set the pause threshold.
    #[must_use]
    pub const fn with_pause_threshold_ms(mut self, threshold: f64) -> Self {
        self.pause_threshold_ms = threshold;
        self
    }

    /// Set the per-step time floor.
    #[must_use]
    pub const fn with_min_interval_ms(mut self, min_interval: f64) -> Self {
        self.min_interval_ms = min_interval;
        self
    }

    /// Set the divisor for one output slot.
    #[must_use]
    pub fn with_scale(mut self, idx: FeatureIndex, scale: f64) -> Self {
        self.scales[idx.index()] = scale;
        self
    }
}

/// Positive and not NaN.
fn is_positive(value: f64) -> bool {
    value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_default_config() {
        let config = FeatureConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.is_reference());
        assert_eq!(config.min_points, 3);
        assert_eq!(config.pause_threshold_ms, 100.0);
        assert_eq!(
            config.scales,
            [2.0, 5.0, 2.0, 0.5, 1.0, PI, 2.0, 1.0, 100.0, 5000.0, 1.0, 10.0, 5000.0, 100.0, 100.0, 2000.0]
        );
    }

    #[test]
    fn test_validation() {
        let mut config = FeatureConfig::default();

        config.min_interval_ms = 0.0;
        assert!(config.validate().is_err());

        config.min_interval_ms = 1.0;
        config.min_points = 0;
        assert!(config.validate().is_err());

        config.min_points = 3;
        config.pause_threshold_ms = f64::NAN;
        assert!(config.validate().is_err());

        config.pause_threshold_ms = 100.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_min_points_below_three_rejected() {
        for min_points in [1, 2] {
            let err = FeatureConfig::default()
                .with_min_points(min_points)
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("min_points must be at least 3"));
        }
        assert!(FeatureConfig::default().with_min_points(3).validate().is_ok());
        assert!(FeatureConfig::default().with_min_points(10).validate().is_ok());
    }

    #[test]
    fn test_invalid_scale_names_slot() {
        let config = FeatureConfig::default().with_scale(FeatureIndex::Jitter, 0.0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("jitter"));

        let config = FeatureConfig::default().with_scale(FeatureIndex::Duration, f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FeatureConfig::default()
            .with_min_points(5)
            .with_pause_threshold_ms(50.0)
            .with_min_interval_ms(0.5)
            .with_scale(FeatureIndex::MaxSpeed, 10.0);
        assert_eq!(config.min_points, 5);
        assert_eq!(config.pause_threshold_ms, 50.0);
        assert_eq!(config.min_interval_ms, 0.5);
        assert_eq!(config.scale(FeatureIndex::MaxSpeed), 10.0);
        assert!(!config.is_reference());
    }
}
