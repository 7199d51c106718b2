//! Spatial data structures
//!
//! This module contains the puzzle's geometric pieces:
//! - Edges, sides and polarity
//! - Tiles with rotation and orientation search
//! - The solved 3x3 arrangement

/// Edges, compass sides and head/tail polarity
pub mod edge;
/// Solved grid layout and adjacency verification
pub mod grid;
/// Tiles with rotation and edge fitting
pub mod tiles;

pub use grid::Arrangement;
pub use tiles::Tile;
