//! Tile handles and the four-direction adjacency frame

/// Opaque handle for a tile variant within a catalog
///
/// Wraps the dense index assigned at catalog construction; identity is only
/// meaningful against the catalog that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(usize);

impl TileId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Dense index of this tile within its catalog
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One of the four cardinal neighbor directions
///
/// The N, S, E, W ordering is fixed and indexes every per-direction array in
/// the system, including neighbor-lookup results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the row above
    North,
    /// Toward the row below
    South,
    /// Toward the column to the right
    East,
    /// Toward the column to the left
    West,
}

impl Direction {
    /// All directions in their fixed ordering
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Position of this direction within the fixed ordering
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }

    /// The direction pointing back at this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Unit offset as (dx, dy) with y growing downward
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}
