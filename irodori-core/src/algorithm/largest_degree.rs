//! Welsh-Powell style coloring: highest degree first.

use tracing::{debug, instrument};

use crate::{
    coloring::Coloring,
    graph::{Graph, VertexId},
};

use super::{ColoringAlgorithm, bound::BoundGraph, coloring_from_positions, sequential::first_fit};

/// Colors vertices by non-increasing degree, breaking ties by insertion
/// order, each with the smallest color unused by its colored neighbours.
#[derive(Debug)]
pub struct LargestDegreeFirstColoring<'g, V> {
    bound: BoundGraph<'g, V>,
}

impl<'g, V: VertexId> ColoringAlgorithm<'g, V> for LargestDegreeFirstColoring<'g, V> {
    const NAME: &'static str = "largest-degree-first";

    fn new(graph: &'g Graph<V>) -> Self {
        Self {
            bound: BoundGraph::new(graph),
        }
    }

    fn graph(&self) -> &'g Graph<V> {
        self.bound.graph()
    }

    fn coloring(&self) -> &Coloring<V> {
        self.bound.get_or_compute(color_largest_degree_first)
    }
}

#[instrument(
    name = "algorithm.largest_degree_first",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
fn color_largest_degree_first<V: VertexId>(graph: &Graph<V>) -> Coloring<V> {
    let mut order: Vec<usize> = (0..graph.vertex_count()).collect();
    // Stable sort keeps insertion order among equal degrees.
    order.sort_by_key(|&idx| std::cmp::Reverse(graph.degree_at(idx)));
    let colors = first_fit(graph, order);
    let coloring = coloring_from_positions(graph, &colors);
    debug!(
        colors = coloring.color_count(),
        "largest-degree-first coloring complete"
    );
    coloring
}
