//! Minimum spanning forest construction with Prim's algorithm.
//!
//! The driver walks vertices in ascending order and seeds a fresh frontier for
//! every vertex not yet absorbed, so each connected component is grown from its
//! lowest-indexed vertex. The expansion step pops the lightest candidate edge,
//! discards it when its target is already absorbed, and otherwise absorbs the
//! target and pushes that vertex's outgoing edges. Stale entries are filtered on
//! extraction rather than removed from the heap, so no decrease-key is needed.
//!
//! Both steps stop as soon as every vertex of the graph has been absorbed.

mod frontier;

use tracing::{debug, info, instrument};

use crate::{
    error::{PrimError, Result},
    forest::SpanningForest,
    graph::{AdjacencyGraph, WeightedEdge},
};

use self::frontier::{Frontier, FrontierEdge};

/// Computes a minimum spanning forest of `graph` using Prim's algorithm.
///
/// The returned forest has one entry per vertex. Entry `u` lists `(v, w)` for
/// every vertex `v` absorbed through the edge `{u, v}` of weight `w`. A graph
/// with several connected components yields one tree per component; an empty
/// graph yields an empty forest.
///
/// Adjacency lists are used as given. An edge listed only from one endpoint is
/// usable only when that endpoint is absorbed first.
///
/// # Errors
///
/// Returns [`PrimError::InvalidVertex`] when a scanned adjacency list names a
/// vertex `>= graph.vertex_count()`. The adjacency list of the vertex whose
/// absorption completes the graph is never scanned.
///
/// # Examples
///
/// ```
/// use arbor_core::{AdjacencyGraph, prim_algorithm};
///
/// let graph = AdjacencyGraph::from_undirected_edges(
///     5,
///     [(0, 1, 3), (2, 3, 1), (3, 4, 2), (2, 4, 10)],
/// )?;
/// let forest = prim_algorithm(&graph)?;
///
/// assert_eq!(forest.vertex_count(), 5);
/// assert_eq!(forest.component_count(), 2);
/// assert_eq!(forest.total_weight(), 6);
/// # Ok::<(), arbor_core::PrimError>(())
/// ```
#[instrument(
    name = "core.prim_algorithm",
    err,
    skip(graph),
    fields(
        vertices = graph.vertex_count(),
        adjacency_entries = graph.adjacency_entry_count(),
    ),
)]
pub fn prim_algorithm(graph: &AdjacencyGraph) -> Result<SpanningForest> {
    let mut builder = ForestBuilder::new(graph);
    builder.span_all_components()?;
    let forest = builder.finish();
    info!(
        components = forest.component_count(),
        edges = forest.edge_count(),
        total_weight = %forest.total_weight(),
        "spanning forest complete"
    );
    Ok(forest)
}

/// Tallies gathered while one component is grown.
#[derive(Clone, Copy, Debug)]
struct ComponentStats {
    absorbed: usize,
    stale: usize,
}

/// Working state of one [`prim_algorithm`] call.
struct ForestBuilder<'g> {
    graph: &'g AdjacencyGraph,
    visited: Vec<bool>,
    absorbed: usize,
    entries: Vec<Vec<WeightedEdge>>,
}

impl<'g> ForestBuilder<'g> {
    fn new(graph: &'g AdjacencyGraph) -> Self {
        let vertex_count = graph.vertex_count();
        Self {
            graph,
            visited: vec![false; vertex_count],
            absorbed: 0,
            entries: vec![Vec::new(); vertex_count],
        }
    }

    fn span_all_components(&mut self) -> Result<()> {
        for root in 0..self.graph.vertex_count() {
            if self.is_visited(root, root)? {
                continue;
            }

            self.absorb(root, root)?;
            let mut stats = ComponentStats {
                absorbed: 1,
                stale: 0,
            };

            let mut frontier = Frontier::default();
            self.extend_frontier(&mut frontier, root)?;
            if !frontier.is_empty() {
                self.expand(&mut frontier, &mut stats)?;
            }
            record_component(root, stats);

            if self.is_complete() {
                break;
            }
        }
        Ok(())
    }

    fn expand(&mut self, frontier: &mut Frontier, stats: &mut ComponentStats) -> Result<()> {
        while let Some(FrontierEdge {
            source,
            target,
            weight,
        }) = frontier.pop_min()
        {
            if self.is_visited(target, source)? {
                stats.stale += 1;
                continue;
            }

            self.absorb(target, source)?;
            stats.absorbed += 1;
            self.attach(source, WeightedEdge::new(target, weight));

            if self.is_complete() {
                break;
            }
            self.extend_frontier(frontier, target)?;
        }
        Ok(())
    }

    fn extend_frontier(&self, frontier: &mut Frontier, vertex: usize) -> Result<()> {
        let neighbours = self.graph.neighbours(vertex).unwrap_or_default();
        for edge in neighbours {
            if !self.is_visited(edge.target(), vertex)? {
                frontier.push(FrontierEdge::new(vertex, edge.target(), edge.weight()));
            }
        }
        Ok(())
    }

    fn is_visited(&self, vertex: usize, referenced_by: usize) -> Result<bool> {
        self.visited
            .get(vertex)
            .copied()
            .ok_or_else(|| self.invalid_vertex(vertex, referenced_by))
    }

    fn absorb(&mut self, vertex: usize, referenced_by: usize) -> Result<()> {
        let vertex_count = self.visited.len();
        let slot = self.visited.get_mut(vertex).ok_or(PrimError::InvalidVertex {
            vertex,
            referenced_by,
            vertex_count,
        })?;
        *slot = true;
        self.absorbed += 1;
        Ok(())
    }

    fn attach(&mut self, parent: usize, edge: WeightedEdge) {
        if let Some(children) = self.entries.get_mut(parent) {
            children.push(edge);
        }
    }

    fn is_complete(&self) -> bool {
        self.absorbed >= self.graph.vertex_count()
    }

    fn invalid_vertex(&self, vertex: usize, referenced_by: usize) -> PrimError {
        PrimError::InvalidVertex {
            vertex,
            referenced_by,
            vertex_count: self.visited.len(),
        }
    }

    fn finish(self) -> SpanningForest {
        SpanningForest::from_entries(self.entries)
    }
}

fn record_component(root: usize, stats: ComponentStats) {
    debug!(
        root,
        vertices = stats.absorbed,
        stale_entries = stats.stale,
        "component spanned"
    );
    record_component_metrics(stats);
}

#[cfg(feature = "metrics")]
fn record_component_metrics(stats: ComponentStats) {
    metrics::counter!("prim_components_spanned").increment(1);
    metrics::counter!("prim_vertices_absorbed")
        .increment(u64::try_from(stats.absorbed).unwrap_or(u64::MAX));
    metrics::counter!("prim_stale_frontier_entries")
        .increment(u64::try_from(stats.stale).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
const fn record_component_metrics(_stats: ComponentStats) {}
