/// Command-line interface and batch processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Solution rendering
pub mod display;
/// Error types
pub mod error;
/// Progress display
pub mod progress;
/// Puzzle file parsing and picture registry
pub mod puzzle;
