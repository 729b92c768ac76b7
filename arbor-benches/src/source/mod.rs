//! Synthetic benchmark graphs.
//!
//! Graphs are generated from a seeded [`rand::rngs::SmallRng`], so a given
//! configuration always yields the same adjacency lists.

mod errors;
mod graph;

pub use errors::SyntheticError;
pub use graph::{SyntheticGraph, SyntheticGraphConfig};
