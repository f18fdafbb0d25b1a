//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use irodori_core::{GeneratorError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Random instance generation failed.
    #[error("instance generation failed: {0}")]
    Generator(#[from] GeneratorError),
    /// A fixed instance failed to build.
    #[error("fixture construction failed: {0}")]
    Graph(#[from] GraphError),
}
