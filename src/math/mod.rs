//! Mathematical utilities for the interpolation

/// Pluggable distance weighting used to blend boundary intensities
pub mod weighting;
