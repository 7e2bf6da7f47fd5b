//! Batch health checks for feature vectors.
//!
//! A model trained on these vectors relies on every slot carrying signal.
//! [`analyze_feature_batch`] flags slots that never vary, slots that sit at
//! the clamp ceiling, and non-finite values leaking from malformed input.

use tracing::debug;

use crate::features::{FeatureIndex, FeatureVector, FEATURE_DIM};

/// Variance below which a slot is considered dead.
pub const DEAD_VARIANCE_EPS: f64 = 1e-12;

/// Share of clamped values above which a slot is considered saturated.
pub const SATURATION_LIMIT: f64 = 0.5;

/// Per-slot summary over a batch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotStats {
    /// Mean of finite values.
    pub mean: f64,
    /// Sample variance (n - 1) of finite values.
    pub variance: f64,
    /// Share of vectors at exactly 1.
    pub saturation_ratio: f64,
    /// Share of vectors at exactly 0.
    pub zero_ratio: f64,
    /// Number of NaN or infinite values.
    pub non_finite: usize,
}

/// Batch analysis results.
#[derive(Debug, Clone)]
pub struct BatchAnalysis {
    /// Number of vectors analyzed.
    pub n_vectors: usize,

    /// Number of all-zero vectors (degenerate trajectories).
    pub zero_vectors: usize,

    /// Per-slot statistics in vector order.
    pub slots: [SlotStats; FEATURE_DIM],

    /// Slots with variance below [`DEAD_VARIANCE_EPS`].
    pub dead_slots: Vec<FeatureIndex>,

    /// Slots clamped in more than [`SATURATION_LIMIT`] of vectors.
    pub saturated_slots: Vec<FeatureIndex>,

    /// Whether the batch passes health checks.
    pub is_healthy: bool,
}

impl BatchAnalysis {
    /// Statistics for one slot.
    #[must_use]
    pub const fn slot(&self, idx: FeatureIndex) -> &SlotStats {
        &self.slots[idx.index()]
    }

    /// Total number of non-finite values across all slots.
    #[must_use]
    pub fn non_finite_total(&self) -> usize {
        self.slots.iter().map(|s| s.non_finite).sum()
    }
}

/// Analyze the distribution of a batch of feature vectors.
///
/// Returns `None` for fewer than two vectors.
///
/// # Health Targets
///
/// - No NaN or infinite values
/// - No dead slots (every feature varies across the batch)
/// - No saturated slots (scale divisors suit the data)
#[must_use]
pub fn analyze_feature_batch(vectors: &[FeatureVector]) -> Option<BatchAnalysis> {
    if vectors.len() < 2 {
        return None;
    }

    let n = vectors.len();
    let zero_vectors = vectors.iter().filter(|v| v.is_zero()).count();

    let mut slots = [SlotStats::default(); FEATURE_DIM];
    for idx in FeatureIndex::ALL {
        slots[idx.index()] = slot_stats(vectors.iter().map(|v| v.get(idx)), n);
    }

    let dead_slots: Vec<FeatureIndex> = FeatureIndex::ALL
        .into_iter()
        .filter(|idx| slots[idx.index()].variance < DEAD_VARIANCE_EPS)
        .collect();

    let saturated_slots: Vec<FeatureIndex> = FeatureIndex::ALL
        .into_iter()
        .filter(|idx| slots[idx.index()].saturation_ratio > SATURATION_LIMIT)
        .collect();

    let non_finite: usize = slots.iter().map(|s| s.non_finite).sum();
    let is_healthy = non_finite == 0 && dead_slots.is_empty() && saturated_slots.is_empty();

    debug!(
        n_vectors = n,
        zero_vectors,
        dead = dead_slots.len(),
        saturated = saturated_slots.len(),
        non_finite,
        is_healthy,
        "analyzed feature batch"
    );

    Some(BatchAnalysis {
        n_vectors: n,
        zero_vectors,
        slots,
        dead_slots,
        saturated_slots,
        is_healthy,
    })
}

fn slot_stats(values: impl Iterator<Item = f64> + Clone, n: usize) -> SlotStats {
    let finite: Vec<f64> = values.clone().filter(|v| v.is_finite()).collect();
    let non_finite = n - finite.len();

    let (mean, variance) = if finite.len() >= 2 {
        let m = finite.iter().sum::<f64>() / finite.len() as f64;
        let ss: f64 = finite.iter().map(|v| (v - m) * (v - m)).sum();
        (m, ss / (finite.len() - 1) as f64)
    } else {
        (finite.first().copied().unwrap_or(0.0), 0.0)
    };

    let saturated = values.clone().filter(|&v| v == 1.0).count();
    let zeros = values.filter(|&v| v == 0.0).count();

    SlotStats {
        mean,
        variance,
        saturation_ratio: saturated as f64 / n as f64,
        zero_ratio: zeros as f64 / n as f64,
        non_finite,
    }
}
