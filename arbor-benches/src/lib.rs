//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks of the Prim spanning forest builder.

pub mod error;
pub mod params;
pub mod source;
