//! Property 2: Structural invariant verification.
//!
//! For any forest produced by [`crate::prim_algorithm`], verifies:
//!
//! - **Shape**: one entry per input vertex.
//! - **Provenance**: every forest edge is an adjacency entry of its parent
//!   with the same weight.
//! - **Single absorption**: no vertex is a child more than once.
//! - **Acyclicity**: no forest edge closes a cycle.
//! - **Edge count**: `n - c` edges for `c` input components.
//! - **Spanning**: forest components coincide with input components, and
//!   each tree is rooted at its component's lowest vertex.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{AdjacencyGraph, SpanningForest, prim_algorithm};

use super::helpers::{component_minima, count_components, union};
use super::types::GraphFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = prim_algorithm(&graph).map_err(|e| {
        TestCaseError::fail(format!("prim_algorithm failed: {e} ({})", fixture.describe()))
    })?;

    validate_shape(fixture, &forest)?;
    validate_provenance(&graph, &forest)?;
    validate_single_absorption(fixture, &forest)?;
    validate_acyclicity(fixture, &forest)?;
    validate_edge_count(fixture, &forest)?;
    validate_spanning(fixture, &forest)?;
    Ok(())
}

fn validate_shape(fixture: &GraphFixture, forest: &SpanningForest) -> TestCaseResult {
    if forest.vertex_count() != fixture.vertex_count {
        return Err(TestCaseError::fail(format!(
            "forest has {} entries for {} vertices ({})",
            forest.vertex_count(),
            fixture.vertex_count,
            fixture.describe(),
        )));
    }
    Ok(())
}

fn validate_provenance(graph: &AdjacencyGraph, forest: &SpanningForest) -> TestCaseResult {
    for edge in forest.edges() {
        let listed = graph.neighbours(edge.parent()).is_some_and(|neighbours| {
            neighbours
                .iter()
                .any(|entry| entry.target() == edge.child() && entry.weight() == edge.weight())
        });
        if !listed {
            return Err(TestCaseError::fail(format!(
                "forest edge {edge:?} is not an adjacency entry of its parent",
            )));
        }
    }
    Ok(())
}

fn validate_single_absorption(fixture: &GraphFixture, forest: &SpanningForest) -> TestCaseResult {
    let mut absorbed = vec![false; fixture.vertex_count];
    for edge in forest.edges() {
        if edge.parent() == edge.child() {
            return Err(TestCaseError::fail(format!("self-loop {edge:?} selected")));
        }
        if std::mem::replace(&mut absorbed[edge.child()], true) {
            return Err(TestCaseError::fail(format!(
                "vertex {} absorbed twice ({})",
                edge.child(),
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

fn validate_acyclicity(fixture: &GraphFixture, forest: &SpanningForest) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    for edge in forest.edges() {
        if !union(&mut parent, edge.parent(), edge.child()) {
            return Err(TestCaseError::fail(format!(
                "forest edge {edge:?} creates a cycle ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

fn validate_edge_count(fixture: &GraphFixture, forest: &SpanningForest) -> TestCaseResult {
    let components = count_components(fixture.vertex_count, &fixture.edges);
    let expected = fixture.vertex_count - components;
    if forest.edge_count() != expected || forest.component_count() != components {
        return Err(TestCaseError::fail(format!(
            "forest has {} edges and {} components, expected {expected} and {components} ({})",
            forest.edge_count(),
            forest.component_count(),
            fixture.describe(),
        )));
    }
    Ok(())
}

fn validate_spanning(fixture: &GraphFixture, forest: &SpanningForest) -> TestCaseResult {
    let input_minima = component_minima(fixture.vertex_count, &fixture.edges);
    let forest_edges: Vec<(usize, usize, i64)> = forest
        .edges()
        .map(|edge| (edge.parent(), edge.child(), edge.weight()))
        .collect();
    let forest_minima = component_minima(fixture.vertex_count, &forest_edges);
    if input_minima != forest_minima {
        return Err(TestCaseError::fail(format!(
            "forest components {forest_minima:?} differ from input components {input_minima:?} ({})",
            fixture.describe(),
        )));
    }

    let mut expected_roots = input_minima;
    expected_roots.sort_unstable();
    expected_roots.dedup();
    if forest.roots() != expected_roots {
        return Err(TestCaseError::fail(format!(
            "roots {:?} are not the component minima {expected_roots:?} ({})",
            forest.roots(),
            fixture.describe(),
        )));
    }
    Ok(())
}
