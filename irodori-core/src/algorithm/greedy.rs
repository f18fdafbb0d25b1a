//! First-fit greedy coloring in vertex insertion order.

use tracing::{debug, instrument};

use crate::{
    coloring::Coloring,
    graph::{Graph, VertexId},
};

use super::{ColoringAlgorithm, bound::BoundGraph, coloring_from_positions, sequential::first_fit};

/// Colors vertices in insertion order, each with the smallest color unused by
/// its already colored neighbours.
///
/// Uses at most `Δ + 1` colors, where `Δ` is the maximum degree, but can be
/// far from optimal on adversarial orderings.
///
/// # Examples
/// ```
/// use irodori_core::{ColoringAlgorithm, GreedyColoring, fixtures};
///
/// let graph = fixtures::greedy_adversarial_7()?;
/// assert_eq!(GreedyColoring::new(&graph).coloring().color_count(), 4);
/// # Ok::<(), irodori_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct GreedyColoring<'g, V> {
    bound: BoundGraph<'g, V>,
}

impl<'g, V: VertexId> ColoringAlgorithm<'g, V> for GreedyColoring<'g, V> {
    const NAME: &'static str = "greedy";

    fn new(graph: &'g Graph<V>) -> Self {
        Self {
            bound: BoundGraph::new(graph),
        }
    }

    fn graph(&self) -> &'g Graph<V> {
        self.bound.graph()
    }

    fn coloring(&self) -> &Coloring<V> {
        self.bound.get_or_compute(color_greedy)
    }
}

#[instrument(
    name = "algorithm.greedy",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
fn color_greedy<V: VertexId>(graph: &Graph<V>) -> Coloring<V> {
    let colors = first_fit(graph, 0..graph.vertex_count());
    let coloring = coloring_from_positions(graph, &colors);
    debug!(colors = coloring.color_count(), "greedy coloring complete");
    coloring
}
