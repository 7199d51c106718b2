use bitvec::prelude::*;
use std::fmt;

/// Ordered stack of tile pool indices with a membership bitset
///
/// Holds one search partition (available or used). Tiles come off the top
/// of the stack; the bitset mirrors the stack contents so membership and
/// overlap checks need no scan. An index is held at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    order: Vec<usize>,
    bits: BitVec,
    max_tiles: usize,
}

impl TileSet {
    /// Create a set with no tiles present
    pub fn new(max_tiles: usize) -> Self {
        Self {
            order: Vec::with_capacity(max_tiles),
            bits: bitvec![0; max_tiles],
            max_tiles,
        }
    }

    /// Create a set holding every tile, pushed in pool order
    ///
    /// The highest index ends on top and is taken first.
    pub fn all(max_tiles: usize) -> Self {
        Self {
            order: (0..max_tiles).collect(),
            bits: bitvec![1; max_tiles],
            max_tiles,
        }
    }

    /// Push a tile onto the top, ignoring indices outside the pool or
    /// already present
    pub fn push(&mut self, tile: usize) {
        if tile < self.max_tiles && !self.contains(tile) {
            self.bits.set(tile, true);
            self.order.push(tile);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Remove and return the tile on top
    pub fn pop(&mut self) -> Option<usize> {
        let tile = self.order.pop()?;
        self.bits.set(tile, false);
        Some(tile)
    }

    /// A new set with this set's tiles at the bottom and `other`'s on top
    ///
    /// Both keep their internal order, so the last tile pushed onto `other`
    /// is the first taken from the result.
    #[must_use]
    pub fn followed_by(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for &tile in &other.order {
            result.push(tile);
        }
        result
    }

    /// Test whether the two sets share no tile
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let mut overlap = self.bits.clone();
        overlap &= &other.bits;
        overlap.not_any()
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.order.len()
    }

    /// Size of the tile pool this set ranges over
    pub const fn capacity(&self) -> usize {
        self.max_tiles
    }

    /// Tile indices from bottom to top
    pub fn to_vec(&self) -> Vec<usize> {
        self.order.clone()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({} tiles: {:?})", self.count(), self.order)
    }
}
