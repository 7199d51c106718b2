//! Backtracking solver for 3x3 edge-matching tile puzzles
//!
//! Nine square tiles each carry four half-pictures. The solver places them
//! on a 3x3 grid, rotating as needed, so that every pair of touching edges
//! shows the same picture with a head meeting a tail.

#![forbid(unsafe_code)]

/// Backtracking search, placement schedule and puzzle generation
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tiles, edges and the solved grid layout
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
