use crate::catalog::tiles::TileId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity membership set over a catalog's dense tile indices
///
/// Backs both per-cell candidate tracking and compatibility table rows.
/// Provides O(1) membership testing and efficient intersection; iteration
/// order is ascending tile index, which is the ordering the compatibility
/// contract promises.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
    tile_count: usize,
}

impl TileSet {
    /// Create a set with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
            tile_count,
        }
    }

    /// Create a set containing every tile in the catalog
    pub fn all(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
            tile_count,
        }
    }

    /// Number of tiles the catalog defines
    pub const fn capacity(&self) -> usize {
        self.tile_count
    }

    /// Insert a tile index
    ///
    /// Handles outside the catalog range are ignored
    pub fn insert(&mut self, tile: TileId) {
        if tile.index() < self.tile_count {
            self.bits.set(tile.index(), true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: TileId) -> bool {
        self.bits.get(tile.index()).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate members in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones().map(TileId::new)
    }

    /// Extract members as a vector in ascending index order
    pub fn to_vec(&self) -> Vec<TileId> {
        self.iter().collect()
    }

    /// Whether both sets share at least one member
    pub fn intersects(&self, other: &Self) -> bool {
        !self.intersection(other).is_empty()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({} of {})", self.count(), self.tile_count)
    }
}
