//! Complete graphs `K_n`.

use tracing::instrument;

use crate::{
    error::GeneratorError,
    graph::{Graph, VertexId},
};

use super::{add_edge, add_named_vertices};

/// Generates the complete graph on `order` vertices.
///
/// Every proper coloring of `K_n` needs exactly `n` colors, which makes it a
/// cheap sanity instance for any strategy.
///
/// # Examples
/// ```
/// use irodori_core::CompleteGraphGenerator;
///
/// let graph = CompleteGraphGenerator::new(5).generate()?;
/// assert_eq!(graph.edge_count(), 10);
/// # Ok::<(), irodori_core::GeneratorError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompleteGraphGenerator {
    order: usize,
}

impl CompleteGraphGenerator {
    #[must_use]
    pub const fn new(order: usize) -> Self {
        Self { order }
    }

    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Generates `K_n` on vertices `0..n`.
    ///
    /// # Errors
    /// Propagates failures from [`Self::generate_with`].
    pub fn generate(&self) -> Result<Graph<usize>, GeneratorError> {
        self.generate_with(|index| index)
    }

    /// Generates `K_n` whose `i`-th vertex is named `naming(i)`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::DuplicateVertex`] when `naming` is not
    /// injective over `0..n`.
    #[instrument(name = "generate.complete", err, skip(self, naming), fields(order = self.order))]
    pub fn generate_with<V, F>(&self, naming: F) -> Result<Graph<V>, GeneratorError>
    where
        V: VertexId,
        F: FnMut(usize) -> V,
    {
        let mut graph = Graph::new();
        let names = add_named_vertices(&mut graph, self.order, naming)?;
        for (i, &first) in names.iter().enumerate() {
            for &second in &names[i + 1..] {
                add_edge(&mut graph, first, second)?;
            }
        }
        Ok(graph)
    }
}
