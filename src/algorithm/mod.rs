/// Accelerated filler interpolating from clustered boundary representatives
pub mod accelerated;
/// Exact filler interpolating from every boundary pixel
pub mod exact;
/// Filler trait, configuration and construction
pub mod filler;
/// Hole and boundary discovery
pub mod region;
/// Boundary ordering, partitioning and section means
pub mod sections;
