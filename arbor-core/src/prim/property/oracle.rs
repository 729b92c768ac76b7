//! Sequential Kruskal oracle for spanning forest property verification.
//!
//! A deliberately simple reference: sort every undirected edge by weight and
//! accept it when it joins two different union-find sets. Minimum forests may
//! differ in which edges they pick when weights tie, but their total weight,
//! edge count, and component count never do, so only those are compared.

use super::helpers::union;

/// Summary of the oracle's minimum spanning forest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct OracleForest {
    /// Sum of accepted edge weights.
    pub total_weight: i128,
    /// Number of accepted edges.
    pub edge_count: usize,
    /// Number of trees, one per connected component.
    pub component_count: usize,
}

/// Computes a minimum spanning forest summary with sequential Kruskal.
///
/// Self-loops never join two sets and are skipped implicitly.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &[(usize, usize, i64)],
) -> OracleForest {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|&(_, _, weight)| weight);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total_weight = 0_i128;
    let mut edge_count = 0;
    for (u, v, weight) in sorted {
        if union(&mut parent, u, v) {
            total_weight += i128::from(weight);
            edge_count += 1;
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count: vertex_count - edge_count,
    }
}
