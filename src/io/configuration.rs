//! Puzzle constants and runtime configuration defaults

/// Tiles along each side of the grid
pub const GRID_SIDE: usize = 3;

/// Tiles in a complete puzzle
pub const TILE_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Edges on each tile
pub const EDGES_PER_TILE: usize = 4;

// Puzzle file layout
/// Lowercase marker identifying the picture header line
pub const PICTURE_HEADER_MARKER: &str = "picture";
/// First character of the first tile line
pub const FIRST_TILE_MARKER: char = '1';

// Default values for configurable parameters
/// Fixed seed for reproducible puzzle generation
pub const DEFAULT_SEED: u64 = 42;
/// Distinct pictures used by generated puzzles
pub const DEFAULT_PICTURE_COUNT: usize = 4;
/// Fewest pictures that leave every generated tile four distinct edges
pub const MIN_PICTURE_COUNT: usize = 4;

// Output settings
/// Extension of puzzle files picked up from a directory
pub const PUZZLE_EXTENSION: &str = "txt";
/// Suffix added to solution filenames
pub const SOLUTION_SUFFIX: &str = "_solved";
/// Line written when the search is exhausted
pub const NO_SOLUTION_MESSAGE: &str = "no solution found";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
