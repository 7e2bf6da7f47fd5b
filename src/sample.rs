//! Timestamped planar samples.
//!
//! A trajectory is an ordered slice of [`Sample`]s; slice order is temporal
//! order. Timestamps are in milliseconds and are expected (but not checked)
//! to be non-decreasing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};

/// A single pointer/touch sample: position plus timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Timestamp in milliseconds.
    pub t: f64,
}

impl Sample {
    /// Create a sample.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }

    /// Position as `[x, y]`.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64, f64)> for Sample {
    fn from((x, y, t): (f64, f64, f64)) -> Self {
        Self::new(x, y, t)
    }
}

impl From<[f64; 3]> for Sample {
    fn from([x, y, t]: [f64; 3]) -> Self {
        Self::new(x, y, t)
    }
}

/// Build a trajectory from parallel coordinate and timestamp columns.
///
/// # Errors
///
/// Returns [`FeatureError::LengthMismatch`] if the three columns do not have
/// the same length.
///
/// # Example
///
/// ```
/// use trajectory_features::samples_from_columns;
///
/// let samples = samples_from_columns(&[0.0, 1.0], &[0.0, 0.0], &[0.0, 16.0])?;
/// assert_eq!(samples.len(), 2);
/// # Ok::<(), trajectory_features::FeatureError>(())
/// ```
pub fn samples_from_columns(xs: &[f64], ys: &[f64], ts: &[f64]) -> Result<Vec<Sample>> {
    if xs.len() != ys.len() || xs.len() != ts.len() {
        return Err(FeatureError::length_mismatch(xs.len(), ys.len(), ts.len()));
    }

    Ok(xs
        .iter()
        .zip(ys)
        .zip(ts)
        .map(|((&x, &y), &t)| Sample::new(x, y, t))
        .collect())
}
