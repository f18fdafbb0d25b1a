//! Seeded benchmark instances.
//!
//! Every instance is generated from a fixed seed so timings compare like
//! with like across runs.

use irodori_core::{GnpRandomGraphGenerator, Graph};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::GnpBenchParams};

/// Seed shared by all generated benchmark instances.
pub const SEED: u64 = 42;

/// Generates the `G(n, p)` instance described by `params` from [`SEED`].
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when the probability is invalid.
pub fn seeded_gnp(params: GnpBenchParams) -> Result<Graph<usize>, BenchSetupError> {
    let generator = GnpRandomGraphGenerator::new(params.order, params.probability)?;
    let graph = generator.generate(&mut SmallRng::seed_from_u64(SEED))?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(50)]
    fn instances_are_reproducible(#[case] order: usize) {
        let params = GnpBenchParams {
            order,
            probability: 0.3,
        };
        let first = seeded_gnp(params).expect("valid parameters");
        let second = seeded_gnp(params).expect("valid parameters");
        assert_eq!(first.vertex_count(), order);
        assert_eq!(first.edge_set(), second.edge_set());
    }

    #[test]
    fn invalid_probability_is_reported() {
        let err = seeded_gnp(GnpBenchParams {
            order: 4,
            probability: 2.0,
        })
        .expect_err("probability out of range");
        assert!(matches!(err, BenchSetupError::Generator(_)));
    }
}
