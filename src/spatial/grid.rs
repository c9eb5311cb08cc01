//! Fixed-size grid state with flat-index cell addressing
//!
//! State is kept in parallel `Array2` planes indexed `[row, col]`: one for
//! resolved tiles, one for candidate sets. The grid is single-owner: it is
//! mutated only by the solver and read by the rendering collaborator between
//! solver steps, so no locking is involved.

use crate::algorithm::tileset::TileSet;
use crate::catalog::table::CompatibilityTable;
use crate::catalog::tiles::{Direction, TileId};
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, configuration};
use ndarray::Array2;

/// Flat row-major handle for a grid cell
///
/// The wrapped value encodes coordinates as `y * width + x`, so coordinate
/// recovery is index arithmetic rather than a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Flat index value
    pub const fn value(self) -> usize {
        self.0
    }
}

/// Grid of cells, each either resolved to a tile or holding candidates
///
/// All cells start unresolved with the full candidate set; a cell resolves
/// exactly once and its candidate set is cleared at that moment, so
/// `resolved == Some` and `candidates empty` coincide except transiently
/// inside a contradicted propagation.
#[derive(Clone, Debug)]
pub struct Grid {
    resolved: Array2<Option<TileId>>,
    candidates: Array2<TileSet>,
    /// (rows, cols)
    dimensions: (usize, usize),
}

impl Grid {
    /// Create a grid of unresolved cells with full candidate sets
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when a dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`.
    pub fn new(width: usize, height: usize, table: &CompatibilityTable) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 {
                return Err(configuration(
                    parameter,
                    &value,
                    &"grid dimensions must be positive",
                ));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(configuration(
                    parameter,
                    &value,
                    &format!("grid dimensions are limited to {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        let full = TileSet::all(table.tile_count());
        Ok(Self {
            resolved: Array2::from_elem((height, width), None),
            candidates: Array2::from_elem((height, width), full),
            dimensions: (height, width),
        })
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.dimensions.1
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.dimensions.0
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.dimensions.0 * self.dimensions.1
    }

    /// Whether a handle addresses a cell of this grid
    pub const fn contains(&self, cell: CellIndex) -> bool {
        cell.0 < self.cell_count()
    }

    /// Handle for the cell at (x, y), if within bounds
    pub fn cell_at(&self, x: usize, y: usize) -> Option<CellIndex> {
        (x < self.width() && y < self.height()).then(|| CellIndex(y * self.width() + x))
    }

    /// Coordinates of a cell, recovered by index arithmetic
    pub const fn position_of(&self, cell: CellIndex) -> (usize, usize) {
        (cell.0 % self.width(), cell.0 / self.width())
    }

    /// Resolved tile at (x, y); `None` while unresolved or out of bounds
    pub fn tile_at(&self, x: usize, y: usize) -> Option<TileId> {
        self.resolved.get([y, x]).copied().flatten()
    }

    /// Remaining candidate count at (x, y); zero once resolved or out of bounds
    pub fn candidate_count_at(&self, x: usize, y: usize) -> usize {
        self.candidates.get([y, x]).map_or(0, TileSet::count)
    }

    /// Remaining candidate count for a cell handle
    pub fn candidate_count(&self, cell: CellIndex) -> usize {
        let (x, y) = self.position_of(cell);
        self.candidate_count_at(x, y)
    }

    /// Candidate set for a cell handle
    pub fn candidate_set(&self, cell: CellIndex) -> Option<&TileSet> {
        let (x, y) = self.position_of(cell);
        self.candidates.get([y, x])
    }

    /// Adjacent cells that can still change, in N, S, E, W order
    ///
    /// A slot is `None` when that side is out of bounds or the neighbor has
    /// already resolved (empty candidates). Resolved neighbors are excluded
    /// deliberately: propagation only narrows cells that can still change.
    pub fn neighbors(&self, cell: CellIndex) -> [Option<CellIndex>; 4] {
        let (x, y) = self.position_of(cell);
        Direction::ALL.map(|direction| {
            let (dx, dy) = direction.offset();
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= self.width() as i32 || ny >= self.height() as i32 {
                return None;
            }
            let neighbor = CellIndex(ny as usize * self.width() + nx as usize);
            (self.candidate_count(neighbor) > 0).then_some(neighbor)
        })
    }

    /// Every cell whose candidate set is non-empty, in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..self.cell_count())
            .map(CellIndex)
            .filter(|&cell| self.candidate_count(cell) > 0)
    }

    /// Whether every cell has a resolved tile
    pub fn is_fully_resolved(&self) -> bool {
        self.resolved.iter().all(Option::is_some)
    }

    /// Fix a cell's tile and clear its candidates
    pub(crate) fn resolve(&mut self, cell: CellIndex, tile: TileId) {
        let (x, y) = self.position_of(cell);
        if let Some(slot) = self.resolved.get_mut([y, x]) {
            *slot = Some(tile);
        }
        if let Some(set) = self.candidates.get_mut([y, x]) {
            set.clear();
        }
    }

    /// Shrink a cell's candidates to those shared with `allowed`
    pub(crate) fn narrow(&mut self, cell: CellIndex, allowed: &TileSet) {
        let (x, y) = self.position_of(cell);
        if let Some(set) = self.candidates.get_mut([y, x]) {
            set.intersect_with(allowed);
        }
    }
}
