//! Feature vector data structures.
//!
//! This module defines the 16-slot [`FeatureVector`] and the [`FeatureIndex`]
//! naming each slot.
//!
//! # Layout
//!
//! | Index | Feature | Divisor | Description |
//! |-------|---------|---------|-------------|
//! | 0 | mean_speed | 2 | Mean per-step speed (px/ms) |
//! | 1 | max_speed | 5 | Maximum per-step speed |
//! | 2 | speed_variance | 2 | Population variance of speed |
//! | 3 | mean_acceleration | 0.5 | Mean absolute speed change |
//! | 4 | max_acceleration | 1 | Maximum absolute speed change |
//! | 5 | mean_abs_angle | π | Mean absolute turning angle |
//! | 6 | angle_variance | 2 | Mean squared signed turning angle |
//! | 7 | pause_ratio | 1 | Gaps over 100 ms per sample |
//! | 8 | mean_interval | 100 | Mean raw time gap (ms) |
//! | 9 | interval_variance | 5000 | Population variance of time gaps |
//! | 10 | path_efficiency | 1 | Direct distance over path length |
//! | 11 | jitter | 10 | Summed L1 second difference per sample |
//! | 12 | duration | 5000 | Last minus first timestamp (ms) |
//! | 13 | point_density | 100 | Samples per second |
//! | 14 | sample_count | 100 | Number of samples |
//! | 15 | total_distance | 2000 | Summed step length |

use std::f64::consts::PI;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};

/// Number of slots in a feature vector.
pub const FEATURE_DIM: usize = 16;

/// Named slot of a [`FeatureVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FeatureIndex {
    MeanSpeed = 0,
    MaxSpeed = 1,
    SpeedVariance = 2,
    MeanAcceleration = 3,
    MaxAcceleration = 4,
    MeanAbsAngle = 5,
    AngleVariance = 6,
    PauseRatio = 7,
    MeanInterval = 8,
    IntervalVariance = 9,
    PathEfficiency = 10,
    Jitter = 11,
    Duration = 12,
    PointDensity = 13,
    SampleCount = 14,
    TotalDistance = 15,
}

impl FeatureIndex {
    /// All slots in vector order.
    pub const ALL: [Self; FEATURE_DIM] = [
        Self::MeanSpeed,
        Self::MaxSpeed,
        Self::SpeedVariance,
        Self::MeanAcceleration,
        Self::MaxAcceleration,
        Self::MeanAbsAngle,
        Self::AngleVariance,
        Self::PauseRatio,
        Self::MeanInterval,
        Self::IntervalVariance,
        Self::PathEfficiency,
        Self::Jitter,
        Self::Duration,
        Self::PointDensity,
        Self::SampleCount,
        Self::TotalDistance,
    ];

    /// Position of this slot in the vector.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Slot for a vector position, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Snake-case name of the slot.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MeanSpeed => "mean_speed",
            Self::MaxSpeed => "max_speed",
            Self::SpeedVariance => "speed_variance",
            Self::MeanAcceleration => "mean_acceleration",
            Self::MaxAcceleration => "max_acceleration",
            Self::MeanAbsAngle => "mean_abs_angle",
            Self::AngleVariance => "angle_variance",
            Self::PauseRatio => "pause_ratio",
            Self::MeanInterval => "mean_interval",
            Self::IntervalVariance => "interval_variance",
            Self::PathEfficiency => "path_efficiency",
            Self::Jitter => "jitter",
            Self::Duration => "duration",
            Self::PointDensity => "point_density",
            Self::SampleCount => "sample_count",
            Self::TotalDistance => "total_distance",
        }
    }

    /// Reference normalization divisor for this slot.
    #[must_use]
    pub const fn reference_divisor(self) -> f64 {
        match self {
            Self::MeanSpeed | Self::SpeedVariance | Self::AngleVariance => 2.0,
            Self::MaxSpeed => 5.0,
            Self::MeanAcceleration => 0.5,
            Self::MaxAcceleration | Self::PauseRatio | Self::PathEfficiency => 1.0,
            Self::MeanAbsAngle => PI,
            Self::MeanInterval | Self::PointDensity | Self::SampleCount => 100.0,
            Self::IntervalVariance | Self::Duration => 5000.0,
            Self::Jitter => 10.0,
            Self::TotalDistance => 2000.0,
        }
    }
}

impl std::fmt::Display for FeatureIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized 16-dimensional trajectory fingerprint.
///
/// Every slot is capped at 1. For finite, time-ordered input every slot also
/// lies in `[0, 1]`; malformed input can produce NaN or negative values, which
/// are passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeatureVector {
    values: [f64; FEATURE_DIM],
}

impl FeatureVector {
    /// Dimension (always 16).
    pub const DIM: usize = FEATURE_DIM;

    /// The all-zero vector returned for degenerate trajectories.
    #[must_use]
    pub const fn zeros() -> Self {
        Self {
            values: [0.0; FEATURE_DIM],
        }
    }

    /// Wrap raw slot values.
    #[must_use]
    pub const fn from_array(values: [f64; FEATURE_DIM]) -> Self {
        Self { values }
    }

    /// Value of one slot.
    #[inline]
    #[must_use]
    pub const fn get(&self, idx: FeatureIndex) -> f64 {
        self.values[idx.index()]
    }

    /// Copy out as an array.
    #[must_use]
    pub const fn to_array(&self) -> [f64; FEATURE_DIM] {
        self.values
    }

    /// Borrow as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Copy out as a Vec.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }

    /// Iterate `(slot, value)` pairs in vector order.
    pub fn iter_named(&self) -> impl Iterator<Item = (FeatureIndex, f64)> + '_ {
        FeatureIndex::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// Whether every slot is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Whether every slot is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Whether every slot lies in `[0, 1]`.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.values.iter().all(|v| (0.0..=1.0).contains(v))
    }
}

impl Index<FeatureIndex> for FeatureVector {
    type Output = f64;

    fn index(&self, idx: FeatureIndex) -> &f64 {
        &self.values[idx.index()]
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        &self.values[idx]
    }
}

impl From<FeatureVector> for [f64; FEATURE_DIM] {
    fn from(v: FeatureVector) -> Self {
        v.values
    }
}

impl From<[f64; FEATURE_DIM]> for FeatureVector {
    fn from(values: [f64; FEATURE_DIM]) -> Self {
        Self::from_array(values)
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = FeatureError;

    fn try_from(values: &[f64]) -> Result<Self> {
        let values: [f64; FEATURE_DIM] = values
            .try_into()
            .map_err(|_| FeatureError::dimension_mismatch(FEATURE_DIM, values.len()))?;
        Ok(Self { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        for (i, idx) in FeatureIndex::ALL.iter().enumerate() {
            assert_eq!(idx.index(), i);
            assert_eq!(FeatureIndex::from_index(i), Some(*idx));
        }
        assert_eq!(FeatureIndex::from_index(FEATURE_DIM), None);
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = FeatureIndex::ALL.iter().map(|i| i.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FEATURE_DIM);
        assert_eq!(FeatureIndex::PathEfficiency.to_string(), "path_efficiency");
    }

    #[test]
    fn test_zeros() {
        let v = FeatureVector::zeros();
        assert!(v.is_zero());
        assert!(v.is_bounded());
        assert_eq!(v.as_slice().len(), FeatureVector::DIM);
        assert_eq!(v, FeatureVector::default());
    }

    #[test]
    fn test_accessors() {
        let mut arr = [0.0; FEATURE_DIM];
        arr[FeatureIndex::Jitter.index()] = 0.25;
        let v = FeatureVector::from(arr);

        assert_eq!(v.get(FeatureIndex::Jitter), 0.25);
        assert_eq!(v[FeatureIndex::Jitter], 0.25);
        assert_eq!(v[11], 0.25);
        assert!(!v.is_zero());

        let named: Vec<_> = v.iter_named().filter(|(_, x)| *x > 0.0).collect();
        assert_eq!(named, vec![(FeatureIndex::Jitter, 0.25)]);
    }

    #[test]
    fn test_bounds_checks() {
        let mut arr = [0.5; FEATURE_DIM];
        arr[3] = f64::NAN;
        let v = FeatureVector::from_array(arr);
        assert!(!v.is_finite());
        assert!(!v.is_bounded());

        arr[3] = -0.1;
        assert!(!FeatureVector::from_array(arr).is_bounded());
    }

    #[test]
    fn test_try_from_slice() {
        let ok = FeatureVector::try_from(&[0.1; FEATURE_DIM][..]).unwrap();
        assert_eq!(ok.to_vec(), vec![0.1; FEATURE_DIM]);

        let err = FeatureVector::try_from(&[0.1; 3][..]).unwrap_err();
        assert_eq!(err, FeatureError::dimension_mismatch(16, 3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_plain_array() {
        let v = FeatureVector::from_array([0.5; FEATURE_DIM]);
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.starts_with("[0.5,"));
        let back: FeatureVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
