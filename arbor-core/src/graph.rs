//! Adjacency-list graph model consumed by the forest builder.
//!
//! Vertices are dense zero-based indices into the outer adjacency vector.
//! An undirected edge `{u, v}` is expected to appear in both `u`'s and `v`'s
//! lists; [`AdjacencyGraph::new`] takes the lists as given and never
//! symmetrises them. Use [`AdjacencyGraph::from_undirected_edges`] to build a
//! symmetric adjacency from an edge list.

use crate::error::{PrimError, Result};

/// An adjacency entry: the neighbouring vertex and the weight of the edge
/// leading to it. Weights may be negative.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeightedEdge {
    target: usize,
    weight: i64,
}

impl WeightedEdge {
    /// Creates an entry pointing at `target` with the given `weight`.
    #[must_use]
    pub const fn new(target: usize, weight: i64) -> Self {
        Self { target, weight }
    }

    /// Returns the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }
}

impl From<(usize, i64)> for WeightedEdge {
    fn from((target, weight): (usize, i64)) -> Self {
        Self::new(target, weight)
    }
}

/// An undirected, integer-weighted graph in adjacency-list form.
///
/// # Examples
///
/// ```
/// use arbor_core::AdjacencyGraph;
///
/// let graph = AdjacencyGraph::from(vec![vec![(1, 4)], vec![(0, 4)], vec![]]);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.adjacency_entry_count(), 2);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<WeightedEdge>>,
}

impl AdjacencyGraph {
    /// Wraps per-vertex adjacency lists without copying or validating them.
    #[must_use]
    pub const fn new(adjacency: Vec<Vec<WeightedEdge>>) -> Self {
        Self { adjacency }
    }

    /// Builds a symmetric adjacency from an undirected edge list.
    ///
    /// Each `(u, v, weight)` is listed from both endpoints. A self-loop is
    /// listed once. Repeated edges are kept as parallel entries.
    ///
    /// # Errors
    ///
    /// Returns [`PrimError::InvalidVertex`] when either endpoint is
    /// `>= vertex_count`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_core::AdjacencyGraph;
    ///
    /// let graph = AdjacencyGraph::from_undirected_edges(3, [(0, 1, 2), (1, 2, -1)])?;
    /// assert_eq!(graph.neighbours(1).map(<[_]>::len), Some(2));
    /// # Ok::<(), arbor_core::PrimError>(())
    /// ```
    pub fn from_undirected_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, i64)>,
    ) -> Result<Self> {
        let mut adjacency = vec![Vec::new(); vertex_count];
        for (left, right, weight) in edges {
            push_entry(&mut adjacency, left, right, weight)?;
            if left != right {
                push_entry(&mut adjacency, right, left, weight)?;
            }
        }
        Ok(Self { adjacency })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the adjacency list of `vertex`, or `None` when it is out of
    /// range.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> Option<&[WeightedEdge]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Returns all adjacency lists in vertex order.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<WeightedEdge>] {
        &self.adjacency
    }

    /// Returns the total number of adjacency entries across all vertices.
    ///
    /// For a symmetric graph without self-loops this is twice the edge count.
    #[must_use]
    pub fn adjacency_entry_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

impl From<Vec<Vec<WeightedEdge>>> for AdjacencyGraph {
    fn from(adjacency: Vec<Vec<WeightedEdge>>) -> Self {
        Self::new(adjacency)
    }
}

impl From<Vec<Vec<(usize, i64)>>> for AdjacencyGraph {
    fn from(adjacency: Vec<Vec<(usize, i64)>>) -> Self {
        Self::new(
            adjacency
                .into_iter()
                .map(|list| list.into_iter().map(WeightedEdge::from).collect())
                .collect(),
        )
    }
}

fn push_entry(
    adjacency: &mut [Vec<WeightedEdge>],
    from: usize,
    to: usize,
    weight: i64,
) -> Result<()> {
    let vertex_count = adjacency.len();
    if to >= vertex_count {
        return Err(PrimError::InvalidVertex {
            vertex: to,
            referenced_by: from,
            vertex_count,
        });
    }
    let list = adjacency.get_mut(from).ok_or(PrimError::InvalidVertex {
        vertex: from,
        referenced_by: to,
        vertex_count,
    })?;
    list.push(WeightedEdge::new(to, weight));
    Ok(())
}
