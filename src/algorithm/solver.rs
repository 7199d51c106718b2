//! Depth-first backtracking placement over a fixed schedule
//!
//! Tiles live in a flat pool and never move. The search tracks ownership of
//! pool indices instead: each tile is either in a grid slot, in the current
//! level's available stack, or in its used stack. Undo needs no snapshots,
//! because a failed orientation search turns a tile a full circle and
//! clearing a slot is a single write.
//!
//! Only the first fitting orientation of a candidate is tried at each
//! level, so the order candidates come off the stacks decides which
//! arrangements are reachable. The next level gets the untried tiles with
//! the rejected ones stacked on top, most recent rejection first.

use tracing::{debug, instrument, trace};

use crate::algorithm::bitset::TileSet;
use crate::algorithm::schedule::Schedule;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::grid::Arrangement;
use crate::spatial::tiles::Tile;

/// Counters collected during a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate tiles taken from an available set
    pub candidates_tried: usize,
    /// Candidates that found a fitting orientation
    pub placements: usize,
    /// Placements undone because the rest of the grid could not be filled
    pub backtracks: usize,
}

/// Backtracking solver for one puzzle instance
#[derive(Clone, Debug)]
pub struct Solver {
    pool: Vec<Tile>,
    schedule: Schedule,
    slots: Vec<Option<usize>>,
    stats: SearchStats,
}

impl Solver {
    /// Create a solver for the given tiles and schedule
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::TileCount`] unless there is exactly one tile
    /// per schedule position
    pub fn new(tiles: Vec<Tile>, schedule: Schedule) -> Result<Self> {
        if tiles.len() != schedule.len() {
            return Err(AlgorithmError::TileCount {
                expected: schedule.len(),
                found: tiles.len(),
            });
        }

        let slots = vec![None; schedule.len()];
        Ok(Self {
            pool: tiles,
            schedule,
            slots,
            stats: SearchStats::default(),
        })
    }

    /// Create a solver for nine tiles on the 3x3 spiral schedule
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::TileCount`] unless exactly nine tiles are given
    pub fn spiral(tiles: Vec<Tile>) -> Result<Self> {
        Self::new(tiles, Schedule::spiral())
    }

    /// Search for an arrangement satisfying every schedule constraint
    ///
    /// Returns `Ok(false)` when the search is exhausted without a solution.
    /// On success every slot holds a tile left in its fitting orientation.
    ///
    /// # Errors
    ///
    /// Returns an error only if a search precondition is violated: a check
    /// against an empty slot or a pool index out of range
    #[instrument(skip(self), fields(positions = self.schedule.len()))]
    pub fn solve(&mut self) -> Result<bool> {
        self.slots.fill(None);
        self.stats = SearchStats::default();

        let solved = self.place(0, TileSet::all(self.pool.len()))?;
        if !solved {
            self.slots.fill(None);
        }

        debug!(
            solved,
            candidates = self.stats.candidates_tried,
            backtracks = self.stats.backtracks,
            "search finished"
        );
        Ok(solved)
    }

    /// Fill `position` and everything after it from `available`
    fn place(&mut self, position: usize, mut available: TileSet) -> Result<bool> {
        let Some(constraint) = self.schedule.get(position) else {
            return Ok(true);
        };

        let requirements = constraint
            .requirements(|neighbour| self.placement(neighbour))
            .map_err(|neighbour| AlgorithmError::UnplacedNeighbour {
                position,
                neighbour,
            })?;

        let max_tiles = self.pool.len();
        let mut used = TileSet::new(max_tiles);

        while let Some(candidate) = available.pop() {
            debug_assert!(available.is_disjoint(&used));
            self.stats.candidates_tried += 1;

            let tile = self
                .pool
                .get_mut(candidate)
                .ok_or(AlgorithmError::InvalidTileIndex {
                    index: candidate,
                    max_tiles,
                })?;

            if let Some(turns) = tile.try_orient(&requirements) {
                self.stats.placements += 1;
                self.set_slot(position, Some(candidate));
                trace!(position, tile = candidate, turns, "placed");

                if self.place(position + 1, available.followed_by(&used))? {
                    return Ok(true);
                }

                self.stats.backtracks += 1;
                self.set_slot(position, None);
                trace!(position, tile = candidate, "backtracked");
            }

            used.push(candidate);
        }

        Ok(false)
    }

    fn set_slot(&mut self, position: usize, tile: Option<usize>) {
        if let Some(slot) = self.slots.get_mut(position) {
            *slot = tile;
        }
    }

    /// Pool index of the tile at a schedule position
    pub fn slot(&self, position: usize) -> Option<usize> {
        self.slots.get(position).copied().flatten()
    }

    /// Tile at a schedule position in its placed orientation
    pub fn placement(&self, position: usize) -> Option<&Tile> {
        self.slot(position).and_then(|index| self.pool.get(index))
    }

    /// Placed tiles in schedule order, stopping at the first empty slot
    pub fn placed_tiles(&self) -> Vec<Tile> {
        (0..self.slots.len())
            .map_while(|position| self.placement(position).cloned())
            .collect()
    }

    /// The solved grid, when all nine spiral positions are filled
    pub fn arrangement(&self) -> Option<Arrangement> {
        Arrangement::from_spiral(&self.placed_tiles()).ok()
    }

    /// Tiles in pool order, in their current orientation
    pub fn tiles(&self) -> &[Tile] {
        &self.pool
    }

    /// The schedule being followed
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Counters from the most recent search
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }
}
