//! Integer pixel coordinates and neighbor enumeration under 4- and 8-connectivity

use std::cmp::Ordering;
use std::fmt;

/// Integer pixel position with `x` as column and `y` as row
///
/// Identity is the `(x, y)` pair alone. Ordering is row-major (`y` first) so
/// ordered sets of coordinates iterate the way a scanline does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        dx.hypot(dy)
    }

    /// Translate by an offset
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rule deciding which surrounding cells count as adjacent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Edge-sharing neighbors only
    FourConnected,
    /// Edge- and corner-sharing neighbors
    #[default]
    EightConnected,
}

// Clockwise starting from north
const FOUR_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

const EIGHT_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Connectivity {
    /// Neighbor offsets `(dx, dy)` in enumeration order
    pub const fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::FourConnected => &FOUR_OFFSETS,
            Self::EightConnected => &EIGHT_OFFSETS,
        }
    }
}

/// Enumerate the neighbors of a coordinate in a fixed clockwise order
///
/// No bounds checking is performed; callers discard coordinates that fall
/// outside the grid.
pub fn neighbors(coord: Coordinate, connectivity: Connectivity) -> impl Iterator<Item = Coordinate> {
    connectivity
        .offsets()
        .iter()
        .map(move |&(dx, dy)| coord.offset(dx, dy))
}
