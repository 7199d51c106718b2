//! Seeded generation of scrambled, solvable puzzles
//!
//! Builds a consistent 3x3 arrangement first, then turns every tile by a
//! random number of quarter-turns and shuffles the tile order. No tile
//! repeats an edge, so any requirement fits at most one orientation of a
//! tile and the first-fit search always reaches the built arrangement.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{EDGES_PER_TILE, GRID_SIDE, MIN_PICTURE_COUNT, TILE_COUNT};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::spatial::edge::{Edge, Side};
use crate::spatial::tiles::{FULL_TURN, Tile};

/// Edges chosen so far, row-major, in bottom, right, top, left order
type PartialLayout = Vec<[Option<Edge>; EDGES_PER_TILE]>;

/// Random puzzle source with a fixed seed
pub struct PuzzleGenerator {
    rng: StdRng,
    picture_count: usize,
}

impl PuzzleGenerator {
    /// Create a generator drawing pictures from `0..picture_count`
    ///
    /// # Errors
    ///
    /// Returns an error if `picture_count` is below [`MIN_PICTURE_COUNT`],
    /// too few to keep every edge of a tile distinct
    pub fn new(seed: u64, picture_count: usize) -> Result<Self> {
        if picture_count < MIN_PICTURE_COUNT {
            return Err(invalid_parameter(
                "picture_count",
                &picture_count,
                &format!("at least {MIN_PICTURE_COUNT} pictures are required"),
            ));
        }

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            picture_count,
        })
    }

    /// Random edge for which `excluded` is false
    fn pick_edge(&mut self, excluded: impl Fn(Edge) -> bool) -> Result<Edge> {
        let candidates: Vec<Edge> = (0..self.picture_count)
            .flat_map(|picture| [Edge::head(picture), Edge::tail(picture)])
            .filter(|&edge| !excluded(edge))
            .collect();
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| computation_error("puzzle generation", &"no unused edge left"))
    }

    /// Generate a solved arrangement in row-major order, unrotated
    ///
    /// # Errors
    ///
    /// Returns an error if a tile runs out of distinct edges, which the
    /// picture count check in [`PuzzleGenerator::new`] rules out
    pub fn solved_layout(&mut self) -> Result<Vec<Tile>> {
        let mut cells: PartialLayout = vec![[None; EDGES_PER_TILE]; TILE_COUNT];

        for row in 0..GRID_SIDE {
            for col in 0..GRID_SIDE {
                let here = row * GRID_SIDE + col;
                let seams = [
                    (col + 1 < GRID_SIDE, Side::Right, here + 1),
                    (row + 1 < GRID_SIDE, Side::Bottom, here + GRID_SIDE),
                ];
                for (inside, side, neighbour) in seams {
                    if !inside {
                        continue;
                    }
                    let shared = self.pick_edge(|edge| {
                        holds(&cells, here, edge) || holds(&cells, neighbour, edge.complement())
                    })?;
                    set_edge(&mut cells, here, side, shared);
                    set_edge(&mut cells, neighbour, side.opposite(), shared.complement());
                }
            }
        }

        for cell in 0..TILE_COUNT {
            for side in Side::ALL {
                if edge_at(&cells, cell, side).is_none() {
                    let border = self.pick_edge(|edge| holds(&cells, cell, edge))?;
                    set_edge(&mut cells, cell, side, border);
                }
            }
        }

        cells
            .into_iter()
            .map(|edges| match edges {
                [Some(bottom), Some(right), Some(top), Some(left)] => {
                    Ok(Tile::new([bottom, right, top, left]))
                }
                _ => Err(computation_error("puzzle generation", &"tile edge left unset")),
            })
            .collect()
    }

    /// Generate a solvable puzzle with rotated, shuffled tiles
    ///
    /// # Errors
    ///
    /// Propagates errors from [`PuzzleGenerator::solved_layout`]
    pub fn generate(&mut self) -> Result<Vec<Tile>> {
        let mut tiles = self.solved_layout()?;
        for tile in &mut tiles {
            for _ in 0..self.rng.random_range(0..FULL_TURN) {
                tile.rotate();
            }
        }
        tiles.shuffle(&mut self.rng);

        // Scrambling turns count as the starting orientation
        Ok(tiles.into_iter().map(|tile| Tile::new(tile.edges())).collect())
    }
}

fn edge_at(cells: &PartialLayout, cell: usize, side: Side) -> Option<Edge> {
    cells
        .get(cell)
        .and_then(|edges| edges.get(side.index()))
        .copied()
        .flatten()
}

fn holds(cells: &PartialLayout, cell: usize, edge: Edge) -> bool {
    cells
        .get(cell)
        .is_some_and(|edges| edges.contains(&Some(edge)))
}

fn set_edge(cells: &mut PartialLayout, cell: usize, side: Side, edge: Edge) {
    if let Some(slot) = cells
        .get_mut(cell)
        .and_then(|edges| edges.get_mut(side.index()))
    {
        *slot = Some(edge);
    }
}
