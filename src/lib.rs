//! Trajectory Features Library
//!
//! Fixed-length fingerprints for pointer and touch trajectories.
//!
//! This library maps a short, variable-length sequence of timestamped 2D
//! samples to a 16-dimensional vector with every slot capped at 1, for
//! downstream classifiers such as human-vs-automated input detection.
//!
//! # Features
//!
//! - **Fixed layout**: 16 slots with stable meaning and reference scales
//! - **Pure**: no state, no I/O, safe to call from any thread
//! - **Reproducible**: evaluation order matches the reference extractor so the
//!   collection side and the verification side agree on every vector
//! - **Total**: never fails; short input gives the zero vector
//!
//! # Quick Start
//!
//! ```
//! use trajectory_features::{extract_features, FeatureIndex, Sample};
//!
//! let trajectory = vec![
//!     Sample::new(0.0, 0.0, 0.0),
//!     Sample::new(12.0, 3.0, 16.0),
//!     Sample::new(25.0, 7.0, 33.0),
//!     Sample::new(31.0, 14.0, 50.0),
//! ];
//!
//! let features = extract_features(&trajectory);
//! assert_eq!(features.as_slice().len(), 16);
//! assert!(features.get(FeatureIndex::PathEfficiency) > 0.9);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`extractor`] | `extract_features`, `FeatureExtractor`, `RawStatistics` |
//! | [`features`] | `FeatureVector`, `FeatureIndex` |
//! | [`config`] | `FeatureConfig` with the reference constants |
//! | [`validation`] | Batch health checks |

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod features;
pub mod math;
pub mod sample;
pub mod validation;

// Re-exports for convenient access
pub use config::FeatureConfig;
pub use error::{FeatureError, Result};
pub use extractor::{
    compute_raw_statistics, extract_features, extract_features_opt, FeatureExtractor,
    RawStatistics, MIN_POINTS,
};
pub use features::{FeatureIndex, FeatureVector, FEATURE_DIM};
pub use sample::{samples_from_columns, Sample};
pub use validation::{analyze_feature_batch, BatchAnalysis, SlotStats};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_thread_safety() {
        assert_send_sync::<Sample>();
        assert_send_sync::<FeatureVector>();
        assert_send_sync::<FeatureConfig>();
        assert_send_sync::<FeatureExtractor>();
    }

    #[test]
    fn test_full_pipeline() {
        let trajectory: Vec<Sample> = (0..50)
            .map(|i| {
                let t = f64::from(i);
                Sample::new(t * 4.0, (t * 0.3).sin() * 20.0, t * 16.0)
            })
            .collect();

        let features = extract_features(&trajectory);
        assert_eq!(features.as_slice().len(), FEATURE_DIM);
        assert!(features.is_bounded());
        assert!(!features.is_zero());

        let raw = compute_raw_statistics(&trajectory).unwrap();
        assert_eq!(raw.normalize(&FeatureConfig::default()), features);
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let trajectory: Vec<Sample> = (0..30)
            .map(|i| Sample::new(f64::from(i * i), f64::from(i), f64::from(i * 10)))
            .collect();
        let expected = extract_features(&trajectory);

        let shared = &trajectory;
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || extract_features(shared)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
