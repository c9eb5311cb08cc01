//! Tile catalog: identities, the direction frame, and adjacency derivation
//!
//! A catalog is built once from a declarative encoding of each tile's edge
//! or quadrant pattern and is immutable afterwards. Two encodings are
//! supported: explicit per-direction neighbor lists and four-symbol
//! quadrant patterns.

/// Built-in demonstration tile sets
pub mod builtin;
/// Quadrant pattern encoding and the edge-matching rule
pub mod quadrant;
/// Compatibility table construction and lookup
pub mod table;
/// Tile handles and the cardinal direction frame
pub mod tiles;

pub use table::{CompatibilityTable, NeighborRule};
pub use tiles::{Direction, TileId};
