//! Error types for the arbor core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

/// Errors returned while building a minimum spanning forest.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum PrimError {
    /// An adjacency entry referenced a vertex that is not present in the graph.
    #[error(
        "vertex {referenced_by} lists neighbour {vertex}, but the graph has {vertex_count} vertices"
    )]
    InvalidVertex {
        /// The out-of-range vertex index found in an adjacency list.
        vertex: usize,
        /// The vertex whose adjacency list contained the invalid entry.
        referenced_by: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
}

impl PrimError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> PrimErrorCode {
        match self {
            Self::InvalidVertex { .. } => PrimErrorCode::InvalidVertex,
        }
    }
}

/// Machine-readable error codes for [`PrimError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum PrimErrorCode {
    /// An adjacency entry referenced a vertex that is not present in the graph.
    InvalidVertex,
}

impl PrimErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidVertex => "PRIM_INVALID_VERTEX",
        }
    }
}

impl fmt::Display for PrimErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PrimError>;
