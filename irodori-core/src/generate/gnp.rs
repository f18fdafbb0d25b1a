//! Erdős–Rényi `G(n, p)` random graphs.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    error::GeneratorError,
    graph::{Graph, VertexId},
};

use super::{add_edge, add_named_vertices};

/// Generates `G(n, p)` graphs: every unordered pair of distinct vertices is
/// joined independently with probability `p`.
///
/// A pair is kept when the next float drawn from `[0, 1)` is below `p`, so
/// `p = 0` yields an edgeless graph and `p = 1` the complete graph. With
/// self-loops enabled each vertex also receives a loop with probability `p`.
///
/// # Examples
/// ```
/// use irodori_core::GnpRandomGraphGenerator;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let generator = GnpRandomGraphGenerator::new(20, 0.35)?;
/// let first = generator.generate(&mut SmallRng::seed_from_u64(17))?;
/// let second = generator.generate(&mut SmallRng::seed_from_u64(17))?;
/// assert_eq!(first.vertex_count(), 20);
/// assert_eq!(first.edge_set(), second.edge_set());
/// # Ok::<(), irodori_core::GeneratorError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GnpRandomGraphGenerator {
    order: usize,
    probability: f64,
    self_loops: bool,
}

impl GnpRandomGraphGenerator {
    /// Creates a generator for graphs of `order` vertices.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidProbability`] when `probability` is
    /// outside `[0, 1]` or NaN.
    pub fn new(order: usize, probability: f64) -> Result<Self, GeneratorError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GeneratorError::InvalidProbability { got: probability });
        }
        Ok(Self::from_valid_probability(order, probability))
    }

    /// Builds a generator from a probability already known to lie in
    /// `[0, 1]`.
    pub(crate) const fn from_valid_probability(order: usize, probability: f64) -> Self {
        Self {
            order,
            probability,
            self_loops: false,
        }
    }

    /// Enables or disables self-loops.
    #[must_use]
    pub fn with_self_loops(mut self, self_loops: bool) -> Self {
        self.self_loops = self_loops;
        self
    }

    /// Number of vertices in generated graphs.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Edge inclusion probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Whether generated graphs may contain self-loops.
    #[must_use]
    pub fn self_loops(&self) -> bool {
        self.self_loops
    }

    /// Generates a graph on vertices `0..n`.
    ///
    /// # Errors
    /// Propagates failures from [`Self::generate_with`].
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph<usize>, GeneratorError> {
        self.generate_with(rng, |index| index)
    }

    /// Generates a graph whose `i`-th vertex is named `naming(i)`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::DuplicateVertex`] when `naming` is not
    /// injective over `0..n`.
    #[instrument(
        name = "generate.gnp",
        err,
        skip(self, rng, naming),
        fields(order = self.order, probability = self.probability, self_loops = self.self_loops),
    )]
    pub fn generate_with<V, R, F>(&self, rng: &mut R, naming: F) -> Result<Graph<V>, GeneratorError>
    where
        V: VertexId,
        R: Rng + ?Sized,
        F: FnMut(usize) -> V,
    {
        let mut graph = if self.self_loops {
            Graph::with_self_loops()
        } else {
            Graph::new()
        };
        let names = add_named_vertices(&mut graph, self.order, naming)?;

        for (i, &first) in names.iter().enumerate() {
            let start = if self.self_loops { i } else { i + 1 };
            for &second in names.iter().skip(start) {
                if rng.r#gen::<f64>() < self.probability {
                    add_edge(&mut graph, first, second)?;
                }
            }
        }

        debug!(edges = graph.edge_count(), "gnp graph generated");
        Ok(graph)
    }

    /// Generates twice from identically seeded sources and checks that both
    /// runs agree, returning the first graph.
    ///
    /// # Errors
    /// Returns [`GeneratorError::NonDeterministic`] when the two edge sets
    /// differ.
    #[instrument(name = "generate.gnp_verify", err, skip(self))]
    pub fn verify_deterministic(&self, seed: u64) -> Result<Graph<usize>, GeneratorError> {
        let first = self.generate(&mut SmallRng::seed_from_u64(seed))?;
        let second = self.generate(&mut SmallRng::seed_from_u64(seed))?;
        if first.edge_set() != second.edge_set() {
            return Err(GeneratorError::NonDeterministic {
                seed,
                first_edges: first.edge_count(),
                second_edges: second.edge_count(),
            });
        }
        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneratorErrorCode;
    use rand::rngs::mock::StepRng;
    use rstest::rstest;

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_probability_outside_unit_interval(#[case] probability: f64) {
        let err = GnpRandomGraphGenerator::new(4, probability).expect_err("must reject");
        assert_eq!(err.code(), GeneratorErrorCode::InvalidProbability);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    fn accepts_interval_endpoints(#[case] probability: f64) {
        let generator = GnpRandomGraphGenerator::new(4, probability).expect("must accept");
        assert!((generator.probability() - probability).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_probability_yields_edgeless_graph() {
        let generator = GnpRandomGraphGenerator::new(12, 0.0).expect("valid");
        let graph = generator
            .generate(&mut SmallRng::seed_from_u64(3))
            .expect("generation must succeed");
        assert_eq!(graph.vertex_count(), 12);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn unit_probability_yields_complete_graph() {
        let generator = GnpRandomGraphGenerator::new(12, 1.0).expect("valid");
        let graph = generator
            .generate(&mut SmallRng::seed_from_u64(3))
            .expect("generation must succeed");
        assert_eq!(graph.edge_count(), 12 * 11 / 2);
    }

    #[test]
    fn self_loops_are_drawn_when_enabled() {
        let generator = GnpRandomGraphGenerator::new(5, 1.0)
            .expect("valid")
            .with_self_loops(true);
        let graph = generator
            .generate(&mut SmallRng::seed_from_u64(1))
            .expect("generation must succeed");
        assert!(graph.allows_self_loops());
        assert_eq!(graph.edge_count(), 5 * 4 / 2 + 5);
        assert!((0..5).all(|v| graph.contains_edge(v, v)));
    }

    #[test]
    fn pairs_follow_draw_order() {
        // StepRng yields 0 forever, which `gen::<f64>()` maps to 0.0, so every
        // pair passes any positive threshold.
        let generator = GnpRandomGraphGenerator::new(4, 0.5).expect("valid");
        let graph = generator
            .generate(&mut StepRng::new(0, 0))
            .expect("generation must succeed");
        let expected: Vec<(usize, usize)> = vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        assert_eq!(graph.edges().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn naming_function_controls_identifiers() {
        let generator = GnpRandomGraphGenerator::new(3, 1.0).expect("valid");
        let graph = generator
            .generate_with(&mut SmallRng::seed_from_u64(9), |i| 100 + i)
            .expect("generation must succeed");
        assert_eq!(graph.vertices(), &[100, 101, 102]);
        assert!(graph.contains_edge(100, 102));
    }

    #[test]
    fn non_injective_naming_is_rejected() {
        let generator = GnpRandomGraphGenerator::new(3, 0.5).expect("valid");
        let err = generator
            .generate_with(&mut SmallRng::seed_from_u64(9), |i| i / 2)
            .expect_err("naming collides");
        assert_eq!(
            err,
            GeneratorError::DuplicateVertex {
                index: 1,
                vertex: "0".to_owned(),
            }
        );
    }

    #[test]
    fn identical_seeds_replay_identical_graphs() {
        let generator = GnpRandomGraphGenerator::new(20, 0.35).expect("valid");
        let graph = generator
            .verify_deterministic(17)
            .expect("seeded generation must be deterministic");
        assert_eq!(graph.vertex_count(), 20);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let generator = GnpRandomGraphGenerator::new(30, 0.5).expect("valid");
        let first = generator
            .generate(&mut SmallRng::seed_from_u64(1))
            .expect("generation must succeed");
        let second = generator
            .generate(&mut SmallRng::seed_from_u64(2))
            .expect("generation must succeed");
        assert_ne!(first.edge_set(), second.edge_set());
    }
}
