//! Four-symbol quadrant patterns and the edge-matching rule
//!
//! A quadrant-encoded tile identifier is four symbols in NW, NE, SW, SE
//! order. Two tiles may sit next to each other when the pair of quadrants
//! along their shared edge match symbol-for-symbol; the `*` wildcard matches
//! any symbol, so the all-wildcard pattern is compatible with every tile in
//! every direction.

use crate::catalog::tiles::Direction;
use crate::io::error::{Result, configuration};

/// Quadrant symbol that matches any other symbol
pub const WILDCARD: char = '*';

/// Number of quadrants in a pattern
pub const QUADRANT_COUNT: usize = 4;

/// A tile's four quadrant symbols in NW, NE, SW, SE order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadrantPattern {
    quadrants: [char; QUADRANT_COUNT],
}

impl QuadrantPattern {
    /// Parse a four-symbol pattern string
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when the pattern is not exactly four
    /// symbols long.
    pub fn parse(pattern: &str) -> Result<Self> {
        let symbols: Vec<char> = pattern.chars().collect();
        let quadrants: [char; QUADRANT_COUNT] = symbols.try_into().map_err(|_| {
            configuration(
                "pattern",
                &pattern,
                &"quadrant patterns must be exactly four symbols",
            )
        })?;
        Ok(Self { quadrants })
    }

    /// Whether every quadrant is the wildcard symbol
    pub fn is_blank(&self) -> bool {
        self.quadrants.iter().all(|&symbol| symbol == WILDCARD)
    }

    /// Whether `other` may occupy the cell on the `direction` side of `self`
    ///
    /// Checks the two quadrants along the shared edge against the two
    /// touching quadrants of the neighbor. The rule is symmetric: `A` admits
    /// `B` to its north exactly when `B` admits `A` to its south.
    pub fn admits(&self, other: &Self, direction: Direction) -> bool {
        let (near, far) = touching_quadrants(direction);
        near.iter()
            .zip(far.iter())
            .all(|(&mine, &theirs)| symbols_match(self.quadrant(mine), other.quadrant(theirs)))
    }

    fn quadrant(&self, index: usize) -> char {
        self.quadrants.get(index).copied().unwrap_or(WILDCARD)
    }
}

/// Quadrant indices along the shared edge for a direction
///
/// Returns (this tile's edge quadrants, the neighbor's touching quadrants),
/// pairwise aligned.
const fn touching_quadrants(direction: Direction) -> ([usize; 2], [usize; 2]) {
    match direction {
        Direction::North => ([0, 1], [2, 3]),
        Direction::South => ([2, 3], [0, 1]),
        Direction::East => ([1, 3], [0, 2]),
        Direction::West => ([0, 2], [1, 3]),
    }
}

const fn symbols_match(a: char, b: char) -> bool {
    a == WILDCARD || b == WILDCARD || a == b
}
