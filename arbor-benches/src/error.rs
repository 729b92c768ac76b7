//! Benchmark setup error type.
//!
//! Lets setup functions propagate generator and builder failures with `?`
//! instead of calling `.expect()`.

use arbor_core::PrimError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The spanning forest builder rejected the graph.
    #[error("spanning forest construction failed: {0}")]
    Prim(#[from] PrimError),
}
