/// One-hop candidate narrowing around a freshly collapsed cell
pub mod propagation;
/// Lowest-entropy cell selection and the seeded random source
pub mod selection;
/// Collapse orchestration and step results
pub mod solver;
/// Candidate membership sets over dense tile indices
pub mod tileset;
