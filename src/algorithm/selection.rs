//! Lowest-entropy cell selection and the seeded random source

use crate::spatial::grid::{CellIndex, Grid};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
///
/// Wraps a single `StdRng` so every draw in a run comes from one seedable
/// stream; two runs with the same seed make identical choices.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index draw from `0..len`
    ///
    /// Returns 0 for empty or single-element ranges without consuming
    /// randomness.
    pub fn uniform_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Generic weighted random selection
    ///
    /// Returns an index into the weights array using the cumulative
    /// distribution; falls back to index 0 when no weight is positive.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }
}

/// Find the open cell with the fewest candidates, tie-broken uniformly
///
/// The tie-break is load-bearing for the visual behavior: among all cells at
/// the minimum candidate count the choice is uniform random, never
/// first-found. Returns `None` when no cell has candidates left, which is
/// the solved condition.
pub fn lowest_entropy_cell(grid: &Grid, selector: &mut RandomSelector) -> Option<CellIndex> {
    let mut lowest = usize::MAX;
    let mut ties: Vec<CellIndex> = Vec::new();

    for cell in grid.open_cells() {
        let count = grid.candidate_count(cell);
        if count < lowest {
            lowest = count;
            ties.clear();
            ties.push(cell);
        } else if count == lowest {
            ties.push(cell);
        }
    }

    if ties.is_empty() {
        return None;
    }
    let pick = selector.uniform_index(ties.len());
    ties.get(pick).copied()
}

/// Draw one open cell uniformly at random
///
/// Before any collapse every cell is open, so this doubles as the
/// starting-cell draw.
pub fn random_open_cell(grid: &Grid, selector: &mut RandomSelector) -> Option<CellIndex> {
    let open: Vec<CellIndex> = grid.open_cells().collect();
    if open.is_empty() {
        return None;
    }
    let pick = selector.uniform_index(open.len());
    open.get(pick).copied()
}
