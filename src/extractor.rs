//! Core feature extraction.
//!
//! This module implements [`extract_features`], which maps a trajectory of
//! timestamped samples to a normalized 16-dimensional [`FeatureVector`].
//!
//! # Pipeline Overview
//!
//! 1. Per-step speed (distance over floored `dt`)
//! 2. Acceleration as absolute speed change
//! 3. Signed turning angles between consecutive steps
//! 4. Pause ratio over raw time gaps
//! 5. Time interval statistics
//! 6. Path length, direct distance and efficiency
//! 7. Jitter (L1 second difference)
//! 8. Duration and point density
//! 9. Scale-and-clamp normalization
//!
//! The computation is pure and never fails. Trajectories shorter than
//! [`FeatureConfig::min_points`] produce the zero vector; NaN, infinite or
//! unordered values are not rejected and flow through to the output.

use tracing::{debug, trace};

use crate::config::FeatureConfig;
use crate::error::Result;
use crate::features::{FeatureIndex, FeatureVector, FEATURE_DIM};
use crate::math::{
    compression::{floor_at, scale_clamp},
    geometry::{distance, second_difference_l1, step, turning_angle},
    stats,
};
use crate::sample::Sample;

/// Minimum number of samples for a non-degenerate vector.
pub const MIN_POINTS: usize = 3;

/// Raw, un-normalized trajectory statistics.
///
/// Fields follow [`FeatureIndex`] order. Units are the input units: positions
/// as given, time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawStatistics {
    /// Mean per-step speed.
    pub mean_speed: f64,
    /// Maximum per-step speed.
    pub max_speed: f64,
    /// Population variance of speed around `mean_speed`.
    pub speed_variance: f64,
    /// Mean absolute change between consecutive speeds.
    pub mean_acceleration: f64,
    /// Maximum absolute change between consecutive speeds.
    pub max_acceleration: f64,
    /// Mean absolute turning angle (radians).
    pub mean_abs_angle: f64,
    /// Mean squared signed turning angle (radians²).
    pub angle_variance: f64,
    /// Pauses divided by the sample count.
    pub pause_ratio: f64,
    /// Mean raw time gap.
    pub mean_interval: f64,
    /// Population variance of raw time gaps.
    pub interval_variance: f64,
    /// Direct distance over floored path length.
    pub path_efficiency: f64,
    /// Summed L1 second difference divided by the sample count.
    pub jitter: f64,
    /// Last minus first timestamp.
    pub duration: f64,
    /// Samples per density unit of time.
    pub point_density: f64,
    /// Number of samples.
    pub sample_count: usize,
    /// Summed step length.
    pub total_distance: f64,
}

impl RawStatistics {
    /// Value of one statistic.
    #[must_use]
    pub fn get(&self, idx: FeatureIndex) -> f64 {
        match idx {
            FeatureIndex::MeanSpeed => self.mean_speed,
            FeatureIndex::MaxSpeed => self.max_speed,
            FeatureIndex::SpeedVariance => self.speed_variance,
            FeatureIndex::MeanAcceleration => self.mean_acceleration,
            FeatureIndex::MaxAcceleration => self.max_acceleration,
            FeatureIndex::MeanAbsAngle => self.mean_abs_angle,
            FeatureIndex::AngleVariance => self.angle_variance,
            FeatureIndex::PauseRatio => self.pause_ratio,
            FeatureIndex::MeanInterval => self.mean_interval,
            FeatureIndex::IntervalVariance => self.interval_variance,
            FeatureIndex::PathEfficiency => self.path_efficiency,
            FeatureIndex::Jitter => self.jitter,
            FeatureIndex::Duration => self.duration,
            FeatureIndex::PointDensity => self.point_density,
            FeatureIndex::SampleCount => self.sample_count as f64,
            FeatureIndex::TotalDistance => self.total_distance,
        }
    }

    /// All statistics as an array in vector order.
    #[must_use]
    pub fn to_array(&self) -> [f64; FEATURE_DIM] {
        FeatureIndex::ALL.map(|idx| self.get(idx))
    }

    /// Divide each statistic by its configured scale and cap at 1.
    #[must_use]
    pub fn normalize(&self, config: &FeatureConfig) -> FeatureVector {
        FeatureVector::from_array(
            FeatureIndex::ALL.map(|idx| scale_clamp(self.get(idx), config.scale(idx))),
        )
    }
}

/// Trajectory feature extractor bound to a validated configuration.
///
/// # Example
///
/// ```
/// use trajectory_features::{FeatureConfig, FeatureExtractor, Sample};
///
/// let extractor = FeatureExtractor::new(FeatureConfig::default())?;
/// let samples = [
///     Sample::new(0.0, 0.0, 0.0),
///     Sample::new(4.0, 3.0, 16.0),
///     Sample::new(9.0, 5.0, 33.0),
/// ];
/// let features = extractor.extract(&samples);
/// assert!(features.is_bounded());
/// # Ok::<(), trajectory_features::FeatureError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: FeatureConfig,
}

impl FeatureExtractor {
    /// Create an extractor.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: FeatureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Extract the normalized feature vector.
    #[must_use]
    pub fn extract(&self, trajectory: &[Sample]) -> FeatureVector {
        match self.raw_statistics(trajectory) {
            Some(raw) => {
                trace!(n_points = trajectory.len(), "extracted trajectory features");
                raw.normalize(&self.config)
            }
            None => {
                debug!(
                    n_points = trajectory.len(),
                    min_points = self.config.min_points,
                    "trajectory too short, returning zero vector"
                );
                FeatureVector::zeros()
            }
        }
    }

    /// Extract from a possibly absent trajectory; `None` yields zeros.
    #[must_use]
    pub fn extract_opt(&self, trajectory: Option<&[Sample]>) -> FeatureVector {
        self.extract(trajectory.unwrap_or_default())
    }

    /// Extract one vector per trajectory, in input order.
    #[must_use]
    pub fn extract_batch(&self, trajectories: &[&[Sample]]) -> Vec<FeatureVector> {
        trajectories.iter().map(|t| self.extract(t)).collect()
    }

    /// Raw statistics before normalization, or `None` for a degenerate trajectory.
    #[must_use]
    pub fn raw_statistics(&self, trajectory: &[Sample]) -> Option<RawStatistics> {
        compute_raw(trajectory, &self.config)
    }
}

/// Extract the normalized feature vector using the reference configuration.
///
/// Trajectories with fewer than [`MIN_POINTS`] samples give 16 zeros.
///
/// # Example
///
/// ```
/// use trajectory_features::{extract_features, FeatureIndex, Sample};
///
/// let samples = [
///     Sample::new(0.0, 0.0, 0.0),
///     Sample::new(10.0, 0.0, 100.0),
///     Sample::new(10.0, 10.0, 200.0),
/// ];
/// let features = extract_features(&samples);
/// assert_eq!(features.get(FeatureIndex::MeanAbsAngle), 0.5);
/// assert_eq!(features.get(FeatureIndex::SampleCount), 0.03);
/// ```
#[must_use]
pub fn extract_features(trajectory: &[Sample]) -> FeatureVector {
    FeatureExtractor::default().extract(trajectory)
}

/// Nullable variant of [`extract_features`]; `None` gives 16 zeros.
#[must_use]
pub fn extract_features_opt(trajectory: Option<&[Sample]>) -> FeatureVector {
    FeatureExtractor::default().extract_opt(trajectory)
}

/// Raw statistics using the reference configuration.
#[must_use]
pub fn compute_raw_statistics(trajectory: &[Sample]) -> Option<RawStatistics> {
    FeatureExtractor::default().raw_statistics(trajectory)
}

fn compute_raw(points: &[Sample], config: &FeatureConfig) -> Option<RawStatistics> {
    let n = points.len();
    if n == 0 || n < config.min_points {
        return None;
    }
    let n_f = n as f64;

    // =========================================================================
    // 1. SPEED
    // =========================================================================
    let step_lengths: Vec<f64> = points.windows(2).map(|w| distance(&w[0], &w[1])).collect();

    let speeds: Vec<f64> = points
        .windows(2)
        .zip(step_lengths.iter())
        .map(|(w, &d)| d / floor_at(w[1].t - w[0].t, config.min_interval_ms))
        .collect();

    let mean_speed = stats::mean(&speeds);
    let max_speed = stats::max(&speeds);
    let speed_variance = stats::variance_about(&speeds, mean_speed);

    // =========================================================================
    // 2. ACCELERATION
    // =========================================================================
    let accelerations: Vec<f64> = speeds.windows(2).map(|w| (w[1] - w[0]).abs()).collect();

    let mean_acceleration = stats::mean_or_zero(&accelerations);
    let max_acceleration = stats::max_or_zero(&accelerations);

    // =========================================================================
    // 3. TURNING ANGLES
    // =========================================================================
    let angles: Vec<f64> = points
        .windows(3)
        .map(|w| turning_angle(&step(&w[0], &w[1]), &step(&w[1], &w[2])))
        .collect();

    let (mean_abs_angle, angle_variance) = if angles.is_empty() {
        (0.0, 0.0)
    } else {
        let abs_angles: Vec<f64> = angles.iter().map(|a| a.abs()).collect();
        // Dispersion around a zero turn, not around the mean angle.
        (stats::mean(&abs_angles), stats::variance_about(&angles, 0.0))
    };

    // =========================================================================
    // 4-5. PAUSES AND INTERVALS
    // =========================================================================
    let intervals: Vec<f64> = points.windows(2).map(|w| w[1].t - w[0].t).collect();

    let pause_count = intervals
        .iter()
        .filter(|&&dt| dt > config.pause_threshold_ms)
        .count();
    let pause_ratio = pause_count as f64 / n_f;

    let mean_interval = stats::mean(&intervals);
    let interval_variance = stats::variance_about(&intervals, mean_interval);

    // =========================================================================
    // 6. PATH
    // =========================================================================
    let total_distance = stats::sum(&step_lengths);
    let direct_distance = distance(&points[0], &points[n - 1]);
    let path_efficiency = if direct_distance > 0.0 {
        direct_distance / floor_at(total_distance, config.min_path_length)
    } else {
        0.0
    };

    // =========================================================================
    // 7. JITTER
    // =========================================================================
    let jitter = points
        .windows(3)
        .map(|w| second_difference_l1(&step(&w[0], &w[1]), &step(&w[1], &w[2])))
        .fold(0.0, |acc, d| acc + d)
        / n_f;

    // =========================================================================
    // 8. DURATION AND DENSITY
    // =========================================================================
    let duration = points[n - 1].t - points[0].t;
    let point_density = n_f / floor_at(duration, config.min_duration_ms) * config.density_unit_ms;

    Some(RawStatistics {
        mean_speed,
        max_speed,
        speed_variance,
        mean_acceleration,
        max_acceleration,
        mean_abs_angle,
        angle_variance,
        pause_ratio,
        mean_interval,
        interval_variance,
        path_efficiency,
        jitter,
        duration,
        point_density,
        sample_count: n,
        total_distance,
    })
}
