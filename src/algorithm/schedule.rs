//! Placement schedule: which neighbours each grid position is checked against
//!
//! The 3x3 grid is filled in a spiral starting at the centre. Each position
//! carries a [`Constraint`] naming the already-placed positions its tile must
//! fit against, so a neighbour is always in its final orientation when used.

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::edge::Side;
use crate::spatial::tiles::{Requirement, Tile};

/// Shape of the adjacency check at a position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// No neighbours yet
    Nothing,
    /// Own left edge against a neighbour's right edge
    Left,
    /// Own top edge against a neighbour's bottom edge
    Top,
    /// Own right and top edges
    RightTop,
    /// Own right edge against a neighbour's left edge
    Right,
    /// Own bottom and right edges
    BottomRight,
    /// Own bottom edge against a neighbour's top edge
    Bottom,
    /// Own left and bottom edges
    LeftBottom,
}

/// A neighbour check: one of the tile's own sides and the position beside it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    /// Side of the tile being placed
    pub side: Side,
    /// Schedule position of the neighbour on that side
    pub neighbour: usize,
}

/// Adjacency check at a position together with the neighbour positions it reads
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// First tile; anything fits
    Nothing,
    /// Left-hand neighbour at the given position
    Left(usize),
    /// Upper neighbour at the given position
    Top(usize),
    /// Right-hand neighbour at the given position
    Right(usize),
    /// Lower neighbour at the given position
    Bottom(usize),
    /// Right-hand and upper neighbours
    RightTop {
        /// Position of the right-hand neighbour
        right: usize,
        /// Position of the upper neighbour
        top: usize,
    },
    /// Lower and right-hand neighbours
    BottomRight {
        /// Position of the lower neighbour
        bottom: usize,
        /// Position of the right-hand neighbour
        right: usize,
    },
    /// Left-hand and lower neighbours
    LeftBottom {
        /// Position of the left-hand neighbour
        left: usize,
        /// Position of the lower neighbour
        bottom: usize,
    },
}

const fn check(side: Side, neighbour: usize) -> Option<Check> {
    Some(Check { side, neighbour })
}

impl Constraint {
    /// The kind of check, without neighbour positions
    pub const fn kind(self) -> ConstraintKind {
        match self {
            Self::Nothing => ConstraintKind::Nothing,
            Self::Left(_) => ConstraintKind::Left,
            Self::Top(_) => ConstraintKind::Top,
            Self::Right(_) => ConstraintKind::Right,
            Self::Bottom(_) => ConstraintKind::Bottom,
            Self::RightTop { .. } => ConstraintKind::RightTop,
            Self::BottomRight { .. } => ConstraintKind::BottomRight,
            Self::LeftBottom { .. } => ConstraintKind::LeftBottom,
        }
    }

    /// Own sides checked and the neighbour position for each, in table order
    pub const fn checks(self) -> [Option<Check>; 2] {
        match self {
            Self::Nothing => [None, None],
            Self::Left(left) => [check(Side::Left, left), None],
            Self::Top(top) => [check(Side::Top, top), None],
            Self::Right(right) => [check(Side::Right, right), None],
            Self::Bottom(bottom) => [check(Side::Bottom, bottom), None],
            Self::RightTop { right, top } => [check(Side::Right, right), check(Side::Top, top)],
            Self::BottomRight { bottom, right } => {
                [check(Side::Bottom, bottom), check(Side::Right, right)]
            }
            Self::LeftBottom { left, bottom } => {
                [check(Side::Left, left), check(Side::Bottom, bottom)]
            }
        }
    }

    /// Neighbour positions in table order
    pub fn neighbours(self) -> Vec<usize> {
        self.checks()
            .into_iter()
            .flatten()
            .map(|check| check.neighbour)
            .collect()
    }

    /// Resolve the checks into edges using the neighbours' current orientation
    ///
    /// `lookup` returns the tile placed at a schedule position.
    ///
    /// # Errors
    ///
    /// Returns the neighbour position that `lookup` could not supply
    pub fn requirements<'a, F>(self, lookup: F) -> std::result::Result<Vec<Requirement>, usize>
    where
        F: Fn(usize) -> Option<&'a Tile>,
    {
        self.checks()
            .into_iter()
            .flatten()
            .map(|check| {
                lookup(check.neighbour)
                    .map(|tile| Requirement::new(check.side, tile.edge(check.side.opposite())))
                    .ok_or(check.neighbour)
            })
            .collect()
    }
}

/// Spiral traversal of the 3x3 grid
///
/// Centre, then right, below it, the bottom row right to left, up the left
/// column, and along the top row. The last two positions both close against
/// a left and a lower neighbour.
pub const SPIRAL: [Constraint; 9] = [
    Constraint::Nothing,
    Constraint::Left(0),
    Constraint::Top(1),
    Constraint::RightTop { right: 2, top: 0 },
    Constraint::Right(3),
    Constraint::BottomRight {
        bottom: 4,
        right: 0,
    },
    Constraint::Bottom(5),
    Constraint::LeftBottom { left: 6, bottom: 0 },
    Constraint::LeftBottom { left: 7, bottom: 1 },
];

/// Ordered constraints, one per position to fill
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<Constraint>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::spiral()
    }
}

impl Schedule {
    /// The fixed 3x3 spiral schedule
    pub fn spiral() -> Self {
        Self {
            entries: SPIRAL.to_vec(),
        }
    }

    /// Build a custom schedule
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidSchedule`] if an entry checks a
    /// position that is not filled before it
    pub fn new(entries: Vec<Constraint>) -> Result<Self> {
        for (position, constraint) in entries.iter().enumerate() {
            if let Some(&neighbour) = constraint
                .neighbours()
                .iter()
                .find(|&&neighbour| neighbour >= position)
            {
                return Err(AlgorithmError::InvalidSchedule {
                    position,
                    neighbour,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Constraint at a position, or `None` past the end
    pub fn get(&self, position: usize) -> Option<Constraint> {
        self.entries.get(position).copied()
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no positions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Constraints in placement order
    pub fn iter(&self) -> impl Iterator<Item = Constraint> + '_ {
        self.entries.iter().copied()
    }
}
