//! Boundary clustering for the accelerated filler
//!
//! The boundary is walked in 4-connected flood-fill order, split into at most
//! `K` consecutive sections, and each section is collapsed into one
//! representative coordinate carrying the mean intensity of its members.

use std::collections::{BTreeMap, BTreeSet};

use crate::spatial::grid::{self, CellMask, Grid};
use crate::spatial::{Connectivity, Coordinate, neighbors};

/// Order boundary pixels by an iterative 4-connected flood fill
///
/// Starts at the first boundary pixel in row-major order. Only the connected
/// component containing that seed is visited; boundary pixels outside it are
/// left out of the returned sequence.
pub fn order_boundary(grid: &Grid, boundary: &BTreeSet<Coordinate>) -> Vec<Coordinate> {
    let Some(&seed) = boundary.first() else {
        return Vec::new();
    };

    let mut ordered = Vec::with_capacity(boundary.len());
    let mut handled = CellMask::for_grid(grid);
    let mut stack = vec![seed];

    while let Some(current) = stack.pop() {
        if !handled.insert(current) {
            continue;
        }
        ordered.push(current);
        stack.extend(
            neighbors(current, Connectivity::FourConnected)
                .filter(|neighbor| !handled.contains(*neighbor) && boundary.contains(neighbor)),
        );
    }

    ordered
}

/// Position of the group currently being filled during partitioning
///
/// A fresh cursor starts at the first group. Callers wanting rotation across
/// invocations keep the cursor returned by `partition_sections` and pass it
/// back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionCursor(usize);

impl SectionCursor {
    /// Cursor positioned on a specific group
    pub const fn at(group: usize) -> Self {
        Self(group)
    }

    /// Index of the group the cursor points at
    pub const fn group(self) -> usize {
        self.0
    }
}

/// Split an ordered boundary walk into at most `sections` groups
///
/// The group count is `K' = min(sections, boundary_size)` and each group takes
/// `floor(boundary_size / K')` pixels before the cursor moves to the next
/// group, wrapping modulo `K'`. The cursor advances at most `K' - 1` times, so
/// any remainder lands in the last group it reached. `boundary_size` is the
/// full boundary size even when the walk covered only part of it, in which
/// case trailing groups stay empty.
///
/// Returns the groups in group-index order (empty ones included) and the
/// cursor where partitioning stopped.
pub fn partition_sections(
    ordered: &[Coordinate],
    boundary_size: usize,
    sections: usize,
    cursor: SectionCursor,
) -> (Vec<Vec<Coordinate>>, SectionCursor) {
    let count = sections.min(boundary_size);
    if count == 0 || ordered.is_empty() {
        return (Vec::new(), cursor);
    }

    let capacity = boundary_size / count;
    let mut groups: Vec<Vec<Coordinate>> = vec![Vec::with_capacity(capacity); count];
    let mut index = cursor.group() % count;
    let mut advances = 0;

    for &coord in ordered {
        let full = groups.get(index).is_some_and(|group| group.len() >= capacity);
        if full && advances + 1 < count {
            index = (index + 1) % count;
            advances += 1;
        }
        if let Some(group) = groups.get_mut(index) {
            group.push(coord);
        }
    }

    (groups, SectionCursor(index))
}

/// Collapse each non-empty group into its first member and the group's mean
///
/// Means are computed from the grid values as they are when called, before
/// any hole pixel is written. The grid itself is not modified.
pub fn section_means(grid: &Grid, groups: &[Vec<Coordinate>]) -> BTreeMap<Coordinate, f32> {
    groups
        .iter()
        .filter_map(|group| {
            let representative = *group.first()?;
            let values: Vec<f64> = group
                .iter()
                .filter_map(|&coord| grid::cell(grid, coord))
                .map(f64::from)
                .collect();
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            Some((representative, mean as f32))
        })
        .collect()
}
