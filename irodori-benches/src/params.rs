//! Benchmark parameter types.

use std::fmt;

/// Parameters for a `G(n, p)` benchmark instance.
#[derive(Clone, Copy, Debug)]
pub struct GnpBenchParams {
    /// Number of vertices.
    pub order: usize,
    /// Edge inclusion probability.
    pub probability: f64,
}

impl fmt::Display for GnpBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.order, self.probability)
    }
}
