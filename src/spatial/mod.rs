//! Spatial data structures and cell addressing
//!
//! This module contains the fixed-size grid the solver operates on and the
//! flat-index handles used to address its cells.

/// Grid state management and cell addressing
pub mod grid;

pub use grid::{CellIndex, Grid};
