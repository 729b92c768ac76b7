//! Shared helper functions for spanning forest property tests.

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Joins the sets containing `left` and `right`, returning `false` when they
/// were already joined.
pub(super) fn union(parent: &mut [usize], left: usize, right: usize) -> bool {
    let left_root = find_root(parent, left);
    let right_root = find_root(parent, right);
    if left_root == right_root {
        return false;
    }
    parent[right_root] = left_root;
    true
}

/// Labels every vertex with the lowest vertex of its connected component.
pub(super) fn component_minima(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Vec<usize> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for &(u, v, _) in edges {
        union(&mut parent, u, v);
    }

    let mut minimum = vec![usize::MAX; vertex_count];
    for vertex in 0..vertex_count {
        let root = find_root(&mut parent, vertex);
        minimum[root] = minimum[root].min(vertex);
    }
    (0..vertex_count)
        .map(|vertex| minimum[find_root(&mut parent, vertex)])
        .collect()
}

/// Counts the connected components of an undirected edge list.
pub(super) fn count_components(vertex_count: usize, edges: &[(usize, usize, i64)]) -> usize {
    let mut labels = component_minima(vertex_count, edges);
    labels.sort_unstable();
    labels.dedup();
    labels.len()
}
