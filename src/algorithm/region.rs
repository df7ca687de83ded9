//! Hole and boundary discovery
//!
//! The hole is always grown with 8-connectivity, whatever connectivity the
//! caller configures for the boundary. The boundary connectivity only decides
//! which known cells around the hole feed the interpolation.

use std::collections::BTreeSet;

use log::debug;

use crate::spatial::grid::{self, CellMask, Grid};
use crate::spatial::{Connectivity, Coordinate, neighbors};

pub use crate::spatial::grid::is_hole;

/// Connectivity used to grow the hole region
pub const HOLE_CONNECTIVITY: Connectivity = Connectivity::EightConnected;

/// First sentinel cell in row-major scan order
pub fn find_hole_representative(grid: &Grid) -> Option<Coordinate> {
    grid.indexed_iter()
        .find(|&(_, &value)| grid::is_sentinel(value))
        .map(|((row, col), _)| Coordinate::new(col as i32, row as i32))
}

/// Find the hole containing the first sentinel cell in scan order
///
/// Grows an 8-connected flood fill from the representative using an explicit
/// work list. Returns an empty set when the grid has no sentinel cell.
pub fn find_hole(grid: &Grid) -> BTreeSet<Coordinate> {
    let mut hole = BTreeSet::new();
    let Some(seed) = find_hole_representative(grid) else {
        return hole;
    };

    let mut visited = CellMask::for_grid(grid);
    let mut stack = vec![seed];
    visited.insert(seed);

    while let Some(current) = stack.pop() {
        hole.insert(current);
        for neighbor in neighbors(current, HOLE_CONNECTIVITY) {
            if grid::is_hole(grid, neighbor) && visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    debug!("found hole of {} pixels seeded at {seed}", visited.count());
    hole
}

/// Collect the known cells adjacent to the hole under `connectivity`
///
/// Neighbors outside the grid are discarded. Empty when the hole is empty.
pub fn find_boundary(
    grid: &Grid,
    hole: &BTreeSet<Coordinate>,
    connectivity: Connectivity,
) -> BTreeSet<Coordinate> {
    let boundary: BTreeSet<Coordinate> = hole
        .iter()
        .flat_map(|&coord| neighbors(coord, connectivity))
        .filter(|&neighbor| grid::is_known(grid, neighbor))
        .collect();

    debug!(
        "boundary of {} pixels under {connectivity:?}",
        boundary.len()
    );
    boundary
}
