//! Tile edges, compass sides and head/tail polarity
//!
//! Every edge carries half of a picture. Two touching edges fit when they
//! show the same picture and opposite halves, so a head always meets a tail.

use std::fmt;

/// Compass position of an edge on a tile, in clockwise order starting at the bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Lower edge (index 0)
    Bottom,
    /// Right-hand edge (index 1)
    Right,
    /// Upper edge (index 2)
    Top,
    /// Left-hand edge (index 3)
    Left,
}

impl Side {
    /// All sides in storage order
    pub const ALL: [Self; 4] = [Self::Bottom, Self::Right, Self::Top, Self::Left];

    /// Storage index of this side within a tile
    pub const fn index(self) -> usize {
        match self {
            Self::Bottom => 0,
            Self::Right => 1,
            Self::Top => 2,
            Self::Left => 3,
        }
    }

    /// The side of a neighbouring tile that touches this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::Bottom => Self::Top,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Left => Self::Right,
        }
    }

    /// Lowercase label used in listings
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Right => "right",
            Self::Top => "top",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which half of a picture an edge shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Polarity {
    /// Front half of the picture
    Head,
    /// Back half of the picture
    Tail,
}

impl Polarity {
    /// Parse a polarity tag from its first character (`h` or `t`, any case)
    pub fn from_tag(token: &str) -> Option<Self> {
        match token.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('h') => Some(Self::Head),
            Some('t') => Some(Self::Tail),
            _ => None,
        }
    }

    /// The other half
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Head => Self::Tail,
            Self::Tail => Self::Head,
        }
    }

    /// `true` for heads, matching the boolean encoding of puzzle files
    pub const fn is_head(self) -> bool {
        matches!(self, Self::Head)
    }

    /// Single-letter tag written in listings
    pub const fn tag(self) -> char {
        match self {
            Self::Head => 'H',
            Self::Tail => 'T',
        }
    }
}

impl From<bool> for Polarity {
    fn from(is_head: bool) -> Self {
        if is_head { Self::Head } else { Self::Tail }
    }
}

/// One side of a tile: a picture id and the half of it shown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Picture id from the registry
    pub picture: usize,
    /// Head or tail half
    pub polarity: Polarity,
}

impl Edge {
    /// Create an edge
    pub const fn new(picture: usize, polarity: Polarity) -> Self {
        Self { picture, polarity }
    }

    /// Head half of `picture`
    pub const fn head(picture: usize) -> Self {
        Self::new(picture, Polarity::Head)
    }

    /// Tail half of `picture`
    pub const fn tail(picture: usize) -> Self {
        Self::new(picture, Polarity::Tail)
    }

    /// The edge that would fit against this one
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::new(self.picture, self.polarity.flipped())
    }

    /// Whether the two edges can touch
    pub fn matches(self, other: Self) -> bool {
        edges_match(self, other)
    }
}

/// Edges match on the same picture with opposite polarity
pub fn edges_match(a: Edge, b: Edge) -> bool {
    a.picture == b.picture && a.polarity != b.polarity
}
