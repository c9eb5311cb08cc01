//! Built-in demonstration tile sets
//!
//! One set per supported encoding: a seven-tile line-art table with explicit
//! connector lists, and a generated two-symbol quadrant set.

use crate::catalog::quadrant::QUADRANT_COUNT;
use crate::catalog::table::NeighborRule;

/// Per-side allowed neighbors for the seven-tile line-art set, N S E W order
const CONNECTOR_TABLE: [[&[usize]; 4]; 7] = [
    [&[0, 2, 4, 5], &[0, 2, 3, 6], &[0, 1, 3, 5], &[0, 1, 4, 6]],
    [&[1, 3, 6], &[1, 4, 5], &[0, 3, 5], &[0, 4, 6]],
    [&[0, 2, 4, 5], &[0, 2, 3, 6], &[2, 4, 6], &[2, 3, 5]],
    [&[0, 2, 4, 5], &[1, 4, 5], &[2, 4, 6], &[0, 1, 4, 6]],
    [&[1, 3, 6], &[0, 2, 3, 6], &[0, 1, 3, 5], &[2, 3, 5]],
    [&[1, 3, 6], &[0, 2, 3, 6], &[2, 4, 6], &[0, 1, 4, 6]],
    [&[0, 2, 4, 5], &[1, 4, 5], &[0, 1, 3, 5], &[2, 3, 5]],
];

/// Symbols used by the generated quadrant set
const BINARY_SYMBOLS: [char; 2] = ['l', 's'];

/// Neighbor rules for the seven-tile line-art set
///
/// Each tile declares, per side, which tiles carry a matching connector on
/// the facing side. The table is symmetric as written.
pub fn connector_rules() -> Vec<NeighborRule> {
    CONNECTOR_TABLE
        .iter()
        .enumerate()
        .map(|(index, sides)| NeighborRule {
            label: index.to_string(),
            allowed: std::array::from_fn(|direction| {
                sides.get(direction).copied().unwrap_or(&[]).to_vec()
            }),
        })
        .collect()
}

/// Every quadrant pattern over the two-symbol alphabet
///
/// Sixteen tiles covering all NW/NE/SW/SE combinations, so every edge pair
/// has at least one compatible neighbor in every direction.
pub fn binary_patterns() -> Vec<String> {
    (0..(1_u32 << QUADRANT_COUNT))
        .map(|bits| {
            (0..QUADRANT_COUNT)
                .map(|quadrant| {
                    let symbol = (bits >> quadrant) & 1;
                    BINARY_SYMBOLS.get(symbol as usize).copied().unwrap_or('l')
                })
                .collect()
        })
        .collect()
}
