//! Compatibility table derivation from declarative tile encodings
//!
//! The table maps (tile, direction) to the ordered set of tiles permitted in
//! the neighboring cell. It is precomputed once at construction, independent
//! of any grid state, and immutable afterwards. Symmetry holds by
//! construction: list input is inserted pairwise, quadrant input derives
//! every entry from one symmetric matching rule.

use crate::algorithm::tileset::TileSet;
use crate::catalog::quadrant::QuadrantPattern;
use crate::catalog::tiles::{Direction, TileId};
use crate::io::error::{Result, configuration};

/// Declarative per-direction adjacency for one tile
///
/// Lists the tile indices allowed on each side, in the fixed N, S, E, W
/// direction ordering. Indices refer to positions within the rule slice
/// handed to [`CompatibilityTable::from_neighbor_lists`].
#[derive(Clone, Debug)]
pub struct NeighborRule {
    /// Display label for the tile
    pub label: String,
    /// Allowed neighbor indices per direction
    pub allowed: [Vec<usize>; 4],
}

/// Precomputed (tile, direction) to allowed-neighbor-set mapping
#[derive(Clone, Debug)]
pub struct CompatibilityTable {
    rows: Vec<[TileSet; 4]>,
    labels: Vec<String>,
    blank: Option<TileId>,
    empty: TileSet,
}

impl CompatibilityTable {
    /// Build a table from explicit per-direction neighbor lists
    ///
    /// Every declared pairing is inserted in both directions, so the
    /// resulting table is symmetric even when the input lists are not. A
    /// `blank` designation makes that tile compatible with every tile in
    /// every direction.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when the rule list is empty, or when
    /// a neighbor index or the blank designation is out of range.
    pub fn from_neighbor_lists(rules: &[NeighborRule], blank: Option<usize>) -> Result<Self> {
        let tile_count = rules.len();
        if tile_count == 0 {
            return Err(configuration(
                "catalog",
                &"0 tiles",
                &"at least one tile is required",
            ));
        }

        let mut rows = empty_rows(tile_count);

        for (tile, rule) in rules.iter().enumerate() {
            for direction in Direction::ALL {
                let allowed = rule
                    .allowed
                    .get(direction.index())
                    .map_or(&[] as &[usize], Vec::as_slice);
                for &neighbor in allowed {
                    if neighbor >= tile_count {
                        return Err(configuration(
                            "neighbor",
                            &neighbor,
                            &format!("tile index exceeds catalog size {tile_count}"),
                        ));
                    }
                    insert_pair(&mut rows, tile, direction, neighbor);
                }
            }
        }

        let blank = match blank {
            Some(index) if index >= tile_count => {
                return Err(configuration(
                    "blank",
                    &index,
                    &format!("tile index exceeds catalog size {tile_count}"),
                ));
            }
            Some(index) => {
                for tile in 0..tile_count {
                    for direction in Direction::ALL {
                        insert_pair(&mut rows, index, direction, tile);
                    }
                }
                Some(TileId::new(index))
            }
            None => None,
        };

        Ok(Self {
            rows,
            labels: rules.iter().map(|rule| rule.label.clone()).collect(),
            blank,
            empty: TileSet::new(tile_count),
        })
    }

    /// Build a table from four-symbol quadrant patterns
    ///
    /// The pattern string is the tile identifier; adjacency is derived from
    /// the touching-quadrant matching rule. An all-wildcard pattern acts as
    /// the blank tile.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when the pattern list is empty,
    /// contains a duplicate, or a pattern is not exactly four symbols.
    pub fn from_quadrant_patterns(patterns: &[String]) -> Result<Self> {
        let tile_count = patterns.len();
        if tile_count == 0 {
            return Err(configuration(
                "catalog",
                &"0 patterns",
                &"at least one quadrant pattern is required",
            ));
        }

        let mut parsed = Vec::with_capacity(tile_count);
        for (index, pattern) in patterns.iter().enumerate() {
            if patterns.get(..index).is_some_and(|seen| seen.contains(pattern)) {
                return Err(configuration(
                    "pattern",
                    pattern,
                    &"duplicate quadrant pattern",
                ));
            }
            parsed.push(QuadrantPattern::parse(pattern)?);
        }

        let mut rows = empty_rows(tile_count);
        for (tile, tile_pattern) in parsed.iter().enumerate() {
            for (neighbor, neighbor_pattern) in parsed.iter().enumerate() {
                for direction in Direction::ALL {
                    if tile_pattern.admits(neighbor_pattern, direction) {
                        insert_one(&mut rows, tile, direction, neighbor);
                    }
                }
            }
        }

        let blank = parsed
            .iter()
            .position(QuadrantPattern::is_blank)
            .map(TileId::new);

        Ok(Self {
            rows,
            labels: patterns.to_vec(),
            blank,
            empty: TileSet::new(tile_count),
        })
    }

    /// Number of tiles in the catalog
    pub const fn tile_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate every tile handle in index order
    pub fn tile_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        (0..self.tile_count()).map(TileId::new)
    }

    /// Handle for the tile at `index`, if it exists
    pub fn tile_id(&self, index: usize) -> Option<TileId> {
        (index < self.tile_count()).then(|| TileId::new(index))
    }

    /// Display label for a tile
    pub fn label(&self, tile: TileId) -> &str {
        self.labels.get(tile.index()).map_or("", String::as_str)
    }

    /// The universally compatible tile, when one was designated or derived
    pub const fn blank(&self) -> Option<TileId> {
        self.blank
    }

    /// Ordered set of tiles permitted in the `direction` neighbor of `tile`
    ///
    /// Iteration order is ascending tile index. Handles issued by a
    /// different catalog resolve to the empty set.
    pub fn compatible_neighbors(&self, tile: TileId, direction: Direction) -> &TileSet {
        self.rows
            .get(tile.index())
            .and_then(|row| row.get(direction.index()))
            .unwrap_or(&self.empty)
    }
}

fn empty_rows(tile_count: usize) -> Vec<[TileSet; 4]> {
    (0..tile_count)
        .map(|_| std::array::from_fn(|_| TileSet::new(tile_count)))
        .collect()
}

fn insert_one(rows: &mut [[TileSet; 4]], tile: usize, direction: Direction, neighbor: usize) {
    if let Some(set) = rows
        .get_mut(tile)
        .and_then(|row| row.get_mut(direction.index()))
    {
        set.insert(TileId::new(neighbor));
    }
}

// A declares B on one side, so B must declare A on the facing side
fn insert_pair(rows: &mut [[TileSet; 4]], tile: usize, direction: Direction, neighbor: usize) {
    insert_one(rows, tile, direction, neighbor);
    insert_one(rows, neighbor, direction.opposite(), tile);
}
