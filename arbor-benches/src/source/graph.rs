//! Random connected-component graph generator.

use arbor_core::AdjacencyGraph;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::SyntheticError;

/// Configuration for a synthetic weighted graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Number of connected components to split the vertices into.
    pub component_count: usize,
    /// Extra random intra-component edges per vertex. Zero yields one
    /// spanning path per component.
    pub edges_per_vertex: usize,
    /// Smallest edge weight, inclusive.
    pub min_weight: i64,
    /// Largest edge weight, inclusive.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A generated graph with a known number of connected components.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    graph: AdjacencyGraph,
    edge_count: usize,
    component_count: usize,
}

impl SyntheticGraph {
    /// Generates a symmetric graph with exactly `component_count` connected
    /// components.
    ///
    /// Vertices are shuffled and dealt round-robin into components, so
    /// component members interleave in index order. Each component is
    /// connected by a random path, then receives
    /// `size * edges_per_vertex` extra edges between random members. Parallel
    /// edges are allowed; self-loops are not generated.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        validate(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);

        let mut labels: Vec<usize> = (0..config.vertex_count).collect();
        labels.shuffle(&mut rng);
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); config.component_count];
        for (vertex, component) in labels.into_iter().zip((0..config.component_count).cycle()) {
            if let Some(list) = members.get_mut(component) {
                list.push(vertex);
            }
        }

        let mut edges = Vec::new();
        for component in &members {
            connect_component(component, config, &mut rng, &mut edges)?;
        }

        let edge_count = edges.len();
        let graph = AdjacencyGraph::from_undirected_edges(config.vertex_count, edges)?;
        Ok(Self {
            graph,
            edge_count,
            component_count: config.component_count,
        })
    }

    /// Returns the generated adjacency graph.
    #[must_use]
    pub const fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Returns the number of undirected edges generated.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the number of connected components in the graph.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.component_count
    }
}

fn validate(config: &SyntheticGraphConfig) -> Result<(), SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if config.component_count == 0 {
        return Err(SyntheticError::ZeroComponents);
    }
    if config.component_count > config.vertex_count {
        return Err(SyntheticError::ComponentCountExceedsVertexCount {
            component_count: config.component_count,
            vertex_count: config.vertex_count,
        });
    }
    if config.min_weight > config.max_weight {
        return Err(SyntheticError::InvalidWeightRange {
            min_weight: config.min_weight,
            max_weight: config.max_weight,
        });
    }
    Ok(())
}

fn connect_component(
    members: &[usize],
    config: &SyntheticGraphConfig,
    rng: &mut SmallRng,
    edges: &mut Vec<(usize, usize, i64)>,
) -> Result<(), SyntheticError> {
    if members.len() < 2 {
        return Ok(());
    }

    // Members are already shuffled, so consecutive pairs form a random path.
    for pair in members.windows(2) {
        if let [u, v] = *pair {
            edges.push((u, v, rng.gen_range(config.min_weight..=config.max_weight)));
        }
    }

    let extra = members
        .len()
        .checked_mul(config.edges_per_vertex)
        .ok_or(SyntheticError::Overflow)?;
    for _ in 0..extra {
        if let (Some(&u), Some(&v)) = (members.choose(rng), members.choose(rng)) {
            if u != v {
                edges.push((u, v, rng.gen_range(config.min_weight..=config.max_weight)));
            }
        }
    }
    Ok(())
}
