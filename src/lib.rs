//! Wave function collapse solver for tiled grid generation
//!
//! The system derives adjacency compatibility from declarative tile
//! encodings, tracks per-cell candidate sets over a fixed grid, and resolves
//! cells one at a time through a collapse/propagate/select loop until the
//! grid is solved or a contradiction is reached.

#![forbid(unsafe_code)]

/// Core solver implementation including candidate tracking, propagation, and cell selection
pub mod algorithm;
/// Tile identity, direction handling, and adjacency compatibility derivation
pub mod catalog;
/// Input/output operations, rendering, and error handling
pub mod io;
/// Grid state management and cell addressing
pub mod spatial;

pub use io::error::{CollapseError, Result};
