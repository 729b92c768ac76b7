//! Arbor core library.
//!
//! Builds minimum spanning forests of undirected, integer-weighted graphs
//! with Prim's algorithm, one spanning tree per connected component.
//!
//! # Diagnostics
//!
//! [`prim_algorithm`] runs inside a `core.prim_algorithm` tracing span and
//! emits one `debug` event per component plus an `info` event on completion.
//!
//! When the `metrics` feature is enabled the builder also emits:
//!
//! - `prim_components_spanned` (counter)
//! - `prim_vertices_absorbed` (counter)
//! - `prim_stale_frontier_entries` (counter)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod forest;
mod graph;
mod prim;

pub use crate::{
    error::{PrimError, PrimErrorCode, Result},
    forest::{ForestEdge, SpanningForest},
    graph::{AdjacencyGraph, WeightedEdge},
    prim::prim_algorithm,
};
