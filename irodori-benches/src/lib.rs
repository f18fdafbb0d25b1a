//! Benchmark support crate for irodori.
//!
//! Provides seeded instance builders and parameter types used by the
//! Criterion benchmarks for the coloring strategies and the validator.

pub mod error;
pub mod instances;
pub mod params;
