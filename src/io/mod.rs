//! Input/output operations around the filling core

/// Command-line interface and run orchestration
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding, mask merging and export
pub mod image;
/// Stage progress display
pub mod progress;
