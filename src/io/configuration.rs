//! Filler defaults and output settings

// Interpolation defaults
/// Default decay exponent of the inverse-distance weighting
pub const DEFAULT_Z_FACTOR: i32 = 3;
/// Default stabilizing constant added to the weighting denominator
pub const DEFAULT_EPSILON: f32 = 0.01;
/// Section count suggested for the accelerated filler
pub const SUGGESTED_SECTION_COUNT: usize = 150;

// Mask handling
/// Normalized mask intensities below this mark hole pixels
pub const MASK_THRESHOLD: f32 = 0.5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_filled";
/// Extension of generated output files
pub const OUTPUT_EXTENSION: &str = "png";

// Progress display settings
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
