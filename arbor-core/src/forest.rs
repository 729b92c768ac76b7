//! Spanning forest output of [`crate::prim_algorithm`].

use crate::graph::WeightedEdge;

/// A single forest edge, oriented from the vertex already in the tree to the
/// vertex it absorbed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ForestEdge {
    parent: usize,
    child: usize,
    weight: i64,
}

impl ForestEdge {
    /// Returns the vertex that was already part of the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> usize { self.parent }

    /// Returns the vertex absorbed through this edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn child(&self) -> usize { self.child }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }
}

/// A minimum spanning forest, stored as one child list per vertex.
///
/// Entry `u` holds `(v, w)` for every vertex `v` absorbed through an edge from
/// `u`. Vertices that never parent an edge have an empty entry. When the input
/// graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpanningForest {
    entries: Vec<Vec<WeightedEdge>>,
}

impl SpanningForest {
    pub(crate) const fn from_entries(entries: Vec<Vec<WeightedEdge>>) -> Self {
        Self { entries }
    }

    /// Returns the number of vertices covered, equal to the input vertex
    /// count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the forest covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the children selected from `vertex`, or `None` when it is out
    /// of range.
    #[must_use]
    pub fn children(&self, vertex: usize) -> Option<&[WeightedEdge]> {
        self.entries.get(vertex).map(Vec::as_slice)
    }

    /// Returns every per-vertex child list in vertex order.
    #[must_use]
    pub fn entries(&self) -> &[Vec<WeightedEdge>] {
        &self.entries
    }

    /// Consumes the forest and returns its per-vertex child lists.
    #[must_use]
    pub fn into_entries(self) -> Vec<Vec<WeightedEdge>> {
        self.entries
    }

    /// Iterates over all forest edges, ordered by parent and then by
    /// selection order.
    pub fn edges(&self) -> impl Iterator<Item = ForestEdge> + '_ {
        self.entries.iter().enumerate().flat_map(|(parent, children)| {
            children.iter().map(move |edge| ForestEdge {
                parent,
                child: edge.target(),
                weight: edge.weight(),
            })
        })
    }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    /// Returns the sum of all selected edge weights.
    ///
    /// Accumulated as `i128`, so sums of `i64` weights cannot overflow.
    #[must_use]
    pub fn total_weight(&self) -> i128 {
        self.entries
            .iter()
            .flatten()
            .map(|edge| i128::from(edge.weight()))
            .sum()
    }

    /// Returns the number of trees in the forest, one per connected component
    /// of the input graph.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.vertex_count().saturating_sub(self.edge_count())
    }

    /// Returns `true` when the forest is a single spanning tree.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count() == 1
    }

    /// Returns the root of each tree in ascending order.
    ///
    /// A root is a vertex that was never absorbed through an edge; for forests
    /// built by [`crate::prim_algorithm`] it is the lowest-indexed vertex of its
    /// component.
    #[must_use]
    pub fn roots(&self) -> Vec<usize> {
        let mut absorbed = vec![false; self.entries.len()];
        for edge in self.entries.iter().flatten() {
            if let Some(slot) = absorbed.get_mut(edge.target()) {
                *slot = true;
            }
        }
        absorbed
            .iter()
            .enumerate()
            .filter_map(|(vertex, &was_absorbed)| (!was_absorbed).then_some(vertex))
            .collect()
    }
}
