//! Error types for synthetic benchmark graph generation.

use arbor_core::PrimError;

/// Errors that may occur while preparing benchmark graphs.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested component count was zero.
    #[error("component count must be greater than zero")]
    ZeroComponents,
    /// The configured component count exceeded the available vertices.
    #[error("component count ({component_count}) must not exceed vertex count ({vertex_count})")]
    ComponentCountExceedsVertexCount {
        /// Number of components requested.
        component_count: usize,
        /// Number of vertices requested.
        vertex_count: usize,
    },
    /// The weight range was empty.
    #[error("invalid weight range: min={min_weight}, max={max_weight}")]
    InvalidWeightRange {
        /// Smallest configured weight.
        min_weight: i64,
        /// Largest configured weight.
        max_weight: i64,
    },
    /// The requested edge count overflowed `usize`.
    #[error("component size * edges_per_vertex overflows usize")]
    Overflow,
    /// The generated edge list could not be turned into a graph.
    #[error("graph construction failed: {0}")]
    Graph(#[from] PrimError),
}
