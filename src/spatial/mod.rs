//! Spatial data structures and grid access
//!
//! This module contains spatial-related functionality including:
//! - Integer pixel coordinates and neighbor enumeration
//! - Sentinel-aware grid access and visited masks

/// Pixel coordinates and connectivity rules
pub mod coordinate;
/// Grid type, sentinel handling and flood-fill visited masks
pub mod grid;

pub use coordinate::{Connectivity, Coordinate, neighbors};
pub use grid::{CellMask, Grid, HOLE_SENTINEL};
