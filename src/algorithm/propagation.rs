//! One-hop candidate narrowing around a freshly collapsed cell

use crate::catalog::table::CompatibilityTable;
use crate::catalog::tiles::{Direction, TileId};
use crate::io::error::{CollapseError, Result};
use crate::spatial::grid::{CellIndex, Grid};

/// Narrow every open neighbor of `cell` to the tiles compatible with `tile`
///
/// Propagation is deliberately one hop: only the immediate neighbors of the
/// just-collapsed cell are narrowed, never their neighbors in turn. This is
/// not an arc-consistency fixpoint, and it is the reason contradictions are
/// reachable at all; when one occurs the failure must surface, not be
/// papered over.
///
/// Returns the neighbor slots that were narrowed, in N, S, E, W order.
///
/// # Errors
///
/// Returns `Contradiction` naming the coordinates of the first neighbor
/// whose candidate set became empty. The grid is left in its terminal state;
/// remaining neighbors are not narrowed.
pub fn propagate(
    grid: &mut Grid,
    table: &CompatibilityTable,
    cell: CellIndex,
    tile: TileId,
) -> Result<[Option<CellIndex>; 4]> {
    let neighbors = grid.neighbors(cell);

    for (slot, direction) in neighbors.iter().zip(Direction::ALL) {
        let Some(neighbor) = *slot else {
            continue;
        };
        grid.narrow(neighbor, table.compatible_neighbors(tile, direction));
        if grid.candidate_count(neighbor) == 0 {
            let (x, y) = grid.position_of(neighbor);
            return Err(CollapseError::Contradiction { x, y });
        }
    }

    Ok(neighbors)
}
