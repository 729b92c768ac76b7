//! Benchmark parameter types.

use std::fmt;

/// Parameters for a spanning forest benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Extra random edges generated per vertex on top of the spanning paths.
    pub edges_per_vertex: usize,
    /// Number of connected components.
    pub component_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},d={},c={}",
            self.vertex_count, self.edges_per_vertex, self.component_count,
        )
    }
}
