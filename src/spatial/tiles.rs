//! Square puzzle tiles with rotation and edge fitting
//!
//! A tile stores its four edges in clockwise order starting at the bottom.
//! Rotation only shifts which side each edge occupies; the cyclic order of
//! the edges never changes, so four quarter-turns restore the original tile.

use crate::spatial::edge::{Edge, Side};

/// Quarter-turns in a full rotation
pub const FULL_TURN: usize = 4;

/// An edge that a tile side must fit against
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requirement {
    /// Side of the tile being oriented
    pub side: Side,
    /// Edge of the already-placed neighbour touching that side
    pub edge: Edge,
}

impl Requirement {
    /// Require `side` to fit against `edge`
    pub const fn new(side: Side, edge: Edge) -> Self {
        Self { side, edge }
    }
}

/// A square tile with four picture edges
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    edges: [Edge; 4],
    turns: usize,
}

impl Tile {
    /// Create a tile from edges listed bottom, right, top, left
    pub const fn new(edges: [Edge; 4]) -> Self {
        Self { edges, turns: 0 }
    }

    /// Edge currently on `side`
    pub const fn edge(&self, side: Side) -> Edge {
        let [bottom, right, top, left] = self.edges;
        match side {
            Side::Bottom => bottom,
            Side::Right => right,
            Side::Top => top,
            Side::Left => left,
        }
    }

    /// All edges in bottom, right, top, left order
    pub const fn edges(&self) -> [Edge; 4] {
        self.edges
    }

    /// Clockwise quarter-turns applied since construction, modulo four
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Turn the tile a quarter clockwise
    ///
    /// The left edge moves to the bottom, bottom to right, right to top
    /// and top to left.
    pub fn rotate(&mut self) {
        self.edges.rotate_right(1);
        self.turns = (self.turns + 1) % FULL_TURN;
    }

    /// Whether every requirement holds in the current orientation
    pub fn satisfies(&self, requirements: &[Requirement]) -> bool {
        requirements
            .iter()
            .all(|requirement| self.edge(requirement.side).matches(requirement.edge))
    }

    /// Rotate until all requirements hold at once
    ///
    /// Tries the current orientation first, then each further quarter-turn.
    /// Returns the number of turns applied to reach the first fitting
    /// orientation. When none fits the tile has been turned a full circle
    /// and is back where it started.
    pub fn try_orient(&mut self, requirements: &[Requirement]) -> Option<usize> {
        for turns in 0..FULL_TURN {
            if self.satisfies(requirements) {
                return Some(turns);
            }
            self.rotate();
        }
        None
    }
}
