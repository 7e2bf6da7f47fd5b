//! Mathematical utilities for trajectory features.
//!
//! This module provides:
//! - [`compression`]: scale-and-clamp normalization
//! - [`geometry`]: planar steps, distances and turning angles
//! - [`stats`]: means, population variances and maxima

pub mod compression;
pub mod geometry;
pub mod stats;

pub use compression::{floor_at, scale_clamp};
pub use geometry::{distance, turning_angle};
