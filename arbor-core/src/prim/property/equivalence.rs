//! Property 1: Equivalence with the sequential Kruskal oracle.
//!
//! For any generated graph, the Prim forest must match the oracle's total
//! weight, edge count, and component count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::prim_algorithm;

use super::oracle::{OracleForest, sequential_kruskal};
use super::types::GraphFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = prim_algorithm(&fixture.graph()).map_err(|e| {
        TestCaseError::fail(format!("prim_algorithm failed: {e} ({})", fixture.describe()))
    })?;

    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);
    let observed = OracleForest {
        total_weight: forest.total_weight(),
        edge_count: forest.edge_count(),
        component_count: forest.component_count(),
    };

    if observed != oracle {
        return Err(TestCaseError::fail(format!(
            "prim forest {observed:?} differs from oracle {oracle:?} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
