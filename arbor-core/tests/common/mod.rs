use arbor_core::{AdjacencyGraph, SpanningForest};

/// Builds a symmetric graph from an undirected edge list.
#[must_use]
pub fn undirected(vertex_count: usize, edges: &[(usize, usize, i64)]) -> AdjacencyGraph {
    AdjacencyGraph::from_undirected_edges(vertex_count, edges.iter().copied())
        .expect("test edges must reference valid vertices")
}

/// Flattens a forest into `(parent, child, weight)` triples in entry order.
#[must_use]
pub fn triples(forest: &SpanningForest) -> Vec<(usize, usize, i64)> {
    forest
        .edges()
        .map(|edge| (edge.parent(), edge.child(), edge.weight()))
        .collect()
}
