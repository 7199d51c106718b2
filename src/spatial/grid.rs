//! Solved 3x3 layout built from tiles placed in spiral order
//!
//! The solver fills positions in schedule order starting at the centre.
//! This module maps those positions onto rows and columns (row 0 is the
//! top) and re-checks every interior adjacency from the geometry alone.

use ndarray::Array2;

use crate::io::configuration::{GRID_SIDE, TILE_COUNT};
use crate::io::error::{AlgorithmError, Result, computation_error};
use crate::spatial::edge::Side;
use crate::spatial::tiles::Tile;

/// Grid cell `(row, col)` of each spiral position
pub const SPIRAL_CELLS: [(usize, usize); TILE_COUNT] = [
    (1, 1),
    (1, 2),
    (2, 2),
    (2, 1),
    (2, 0),
    (1, 0),
    (0, 0),
    (0, 1),
    (0, 2),
];

/// Two neighbouring cells whose touching edges do not fit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Upper or left cell
    pub cell: (usize, usize),
    /// Side of `cell` facing the neighbour (`Right` or `Bottom`)
    pub side: Side,
}

impl Mismatch {
    /// Cell on the other side of the mismatched edge
    ///
    /// `None` when that side of `cell` faces out of the grid.
    pub fn neighbour(&self) -> Option<(usize, usize)> {
        let (row, col) = self.cell;
        let (n_row, n_col) = match self.side {
            Side::Bottom => (row.checked_add(1)?, col),
            Side::Right => (row, col.checked_add(1)?),
            Side::Top => (row.checked_sub(1)?, col),
            Side::Left => (row, col.checked_sub(1)?),
        };
        (n_row < GRID_SIDE && n_col < GRID_SIDE).then_some((n_row, n_col))
    }
}

/// Nine oriented tiles laid out on the 3x3 grid
#[derive(Clone, Debug)]
pub struct Arrangement {
    cells: Array2<Tile>,
}

impl Arrangement {
    /// Lay out tiles given in spiral placement order
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::TileCount`] unless exactly nine tiles are given
    pub fn from_spiral(tiles: &[Tile]) -> Result<Self> {
        if tiles.len() != TILE_COUNT {
            return Err(AlgorithmError::TileCount {
                expected: TILE_COUNT,
                found: tiles.len(),
            });
        }

        let mut row_major: Vec<Option<Tile>> = vec![None; TILE_COUNT];
        for (tile, &(row, col)) in tiles.iter().zip(SPIRAL_CELLS.iter()) {
            if let Some(cell) = row_major.get_mut(row * GRID_SIDE + col) {
                *cell = Some(tile.clone());
            }
        }

        let ordered: Vec<Tile> = row_major.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((GRID_SIDE, GRID_SIDE), ordered)
            .map_err(|error| computation_error("grid layout", &error))?;

        Ok(Self { cells })
    }

    /// Tile at `(row, col)`
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.cells.get((row, col))
    }

    /// Tiles row by row, top row first
    pub fn rows(&self) -> Vec<Vec<&Tile>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect()
    }

    /// All interior adjacencies whose touching edges do not fit
    pub fn mismatches(&self) -> Vec<Mismatch> {
        let mut mismatches = Vec::new();
        for ((row, col), tile) in self.cells.indexed_iter() {
            for side in [Side::Right, Side::Bottom] {
                let candidate = Mismatch {
                    cell: (row, col),
                    side,
                };
                if let Some((n_row, n_col)) = candidate.neighbour()
                    && let Some(neighbour) = self.tile(n_row, n_col)
                    && !tile.edge(side).matches(neighbour.edge(side.opposite()))
                {
                    mismatches.push(candidate);
                }
            }
        }
        mismatches
    }

    /// Whether every touching pair of edges fits
    pub fn is_consistent(&self) -> bool {
        self.mismatches().is_empty()
    }
}
