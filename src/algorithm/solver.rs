//! Collapse orchestration over a grid and compatibility table
//!
//! The solver is a state machine over the whole grid: Unsolved, then one
//! `collapse` per step, ending Solved (no open cells remain) or in a
//! `Contradiction` error. Scheduling of successive steps belongs to the
//! driver; each `collapse` call is an atomic collapse + propagate +
//! select-next unit.

use crate::algorithm::propagation::propagate;
use crate::algorithm::selection::{RandomSelector, lowest_entropy_cell, random_open_cell};
use crate::algorithm::tileset::TileSet;
use crate::catalog::table::CompatibilityTable;
use crate::catalog::tiles::TileId;
use crate::io::error::{Result, invalid_state};
use crate::spatial::grid::{CellIndex, Grid};

/// Weighting hook for biased tile draws
pub type TileBias = Box<dyn Fn(TileId) -> f64>;

/// Outcome of one collapse step, handed to the rendering collaborator
#[derive(Clone, Debug)]
pub struct StepResult {
    /// Cell fixed by this step
    pub collapsed: CellIndex,
    /// Tile chosen for the collapsed cell
    pub chosen_tile: TileId,
    /// Neighbors narrowed by propagation, in N, S, E, W order
    pub narrowed_neighbors: [Option<CellIndex>; 4],
    /// Lowest-entropy cell to collapse next; `None` once the grid is solved
    pub next_cell: Option<CellIndex>,
}

/// Collapse/propagate/select driver over a borrowed compatibility table
///
/// Owns only its random source and optional bias; the grid is passed into
/// each operation so the caller keeps reading it between steps.
pub struct Solver<'a> {
    table: &'a CompatibilityTable,
    selector: RandomSelector,
    bias: Option<TileBias>,
}

impl<'a> Solver<'a> {
    /// Create a solver with a seeded random source
    pub fn new(table: &'a CompatibilityTable, seed: u64) -> Self {
        Self {
            table,
            selector: RandomSelector::new(seed),
            bias: None,
        }
    }

    /// Reweight tile draws with a bias function
    ///
    /// The default draw is uniform over the candidate set; with a bias each
    /// candidate's weight is `bias(tile)` and the draw follows the
    /// cumulative distribution. Zero-weight candidates still win when no
    /// candidate has positive weight.
    #[must_use]
    pub fn with_bias(mut self, bias: impl Fn(TileId) -> f64 + 'static) -> Self {
        self.bias = Some(Box::new(bias));
        self
    }

    /// Draw a starting cell uniformly from the open cells
    pub fn random_start(&mut self, grid: &Grid) -> Option<CellIndex> {
        random_open_cell(grid, &mut self.selector)
    }

    /// Collapse one cell, propagate to its neighbors, and select the next
    ///
    /// The chosen tile is drawn from the cell's candidates, the candidates
    /// are cleared, each open neighbor is narrowed one hop, and the next
    /// lowest-entropy cell is picked with a uniform tie-break.
    ///
    /// # Errors
    ///
    /// - `InvalidState` when `cell` is not addressable in this grid or has
    ///   no candidates left (already resolved). Callers must only supply
    ///   cells returned by selection.
    /// - `Contradiction` when a neighbor's candidate set empties during
    ///   propagation; the run is dead and the grid should be discarded.
    pub fn collapse(&mut self, grid: &mut Grid, cell: CellIndex) -> Result<StepResult> {
        if !grid.contains(cell) {
            let (x, y) = grid.position_of(cell);
            return Err(invalid_state(x, y, "cell does not exist in this grid"));
        }

        let candidates = grid
            .candidate_set(cell)
            .map(TileSet::to_vec)
            .unwrap_or_default();
        if candidates.is_empty() {
            let (x, y) = grid.position_of(cell);
            return Err(invalid_state(x, y, "cell is already resolved"));
        }

        let chosen = match self.choose_tile(&candidates) {
            Some(tile) => tile,
            None => {
                let (x, y) = grid.position_of(cell);
                return Err(invalid_state(x, y, "no tile could be drawn"));
            }
        };

        grid.resolve(cell, chosen);
        let narrowed_neighbors = propagate(grid, self.table, cell, chosen)?;
        let next_cell = lowest_entropy_cell(grid, &mut self.selector);

        Ok(StepResult {
            collapsed: cell,
            chosen_tile: chosen,
            narrowed_neighbors,
            next_cell,
        })
    }

    /// Collapse repeatedly from `start` until the grid is solved
    ///
    /// The eager scheduling policy: an explicit loop over `collapse`,
    /// following each step's `next_cell`. Returns the number of collapses
    /// performed, which equals the cell count on success from a fresh grid.
    ///
    /// # Errors
    ///
    /// Propagates the first `InvalidState` or `Contradiction` from
    /// `collapse`; no retry or repair is attempted.
    pub fn run_to_completion(&mut self, grid: &mut Grid, start: CellIndex) -> Result<usize> {
        let mut cell = start;
        let mut collapsed = 0;

        loop {
            let step = self.collapse(grid, cell)?;
            collapsed += 1;
            match step.next_cell {
                Some(next) => cell = next,
                None => return Ok(collapsed),
            }
        }
    }

    fn choose_tile(&mut self, candidates: &[TileId]) -> Option<TileId> {
        let index = match &self.bias {
            Some(bias) => {
                let weights: Vec<f64> = candidates.iter().map(|&tile| bias(tile)).collect();
                self.selector.weighted_choice(&weights)
            }
            None => self.selector.uniform_index(candidates.len()),
        };
        candidates.get(index).copied()
    }
}
