//! Inverse-distance-weighted hole filling for single-channel images
//!
//! A hole is a connected region of cells carrying the sentinel value `-1.0`.
//! The fillers locate the hole and its boundary, then replace every hole cell
//! with a weighted average of the boundary intensities. The exact filler uses
//! the full boundary; the accelerated filler first clusters the boundary into a
//! bounded number of representatives.

#![forbid(unsafe_code)]

/// Hole discovery, boundary clustering and the two filling algorithms
pub mod algorithm;
/// Input/output operations, configuration defaults and error handling
pub mod io;
/// Distance weighting functions used by the interpolation
pub mod math;
/// Coordinates, connectivity and grid access helpers
pub mod spatial;

pub use algorithm::filler::{FillReport, FillerConfig, HoleFiller, build_filler, fill_all_holes};
pub use io::error::{HoleFillError, Result};
pub use spatial::{Connectivity, Coordinate, Grid, HOLE_SENTINEL};
