//! DSatur: saturation-degree ordered greedy coloring.

use std::collections::BTreeSet;

use tracing::{debug, instrument, trace};

use crate::{
    coloring::Coloring,
    graph::{Graph, VertexId},
};

use super::{ColoringAlgorithm, bound::BoundGraph, coloring_from_positions};

/// Brélaz's DSatur heuristic.
///
/// At each step the uncolored vertex with the most distinctly colored
/// neighbours is colored next with the smallest free color. Ties go to the
/// vertex of higher degree, then to the earlier inserted vertex, so runs are
/// fully deterministic. Exact on bipartite graphs, but not in general.
///
/// # Examples
/// ```
/// use irodori_core::{ColoringAlgorithm, SaturationDegreeColoring, fixtures};
///
/// let graph = fixtures::mycielski_3()?;
/// let dsatur = SaturationDegreeColoring::new(&graph);
/// assert_eq!(dsatur.coloring().color_count(), 4);
/// # Ok::<(), irodori_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct SaturationDegreeColoring<'g, V> {
    bound: BoundGraph<'g, V>,
}

impl<'g, V: VertexId> ColoringAlgorithm<'g, V> for SaturationDegreeColoring<'g, V> {
    const NAME: &'static str = "dsatur";

    fn new(graph: &'g Graph<V>) -> Self {
        Self {
            bound: BoundGraph::new(graph),
        }
    }

    fn graph(&self) -> &'g Graph<V> {
        self.bound.graph()
    }

    fn coloring(&self) -> &Coloring<V> {
        self.bound.get_or_compute(color_dsatur)
    }
}

#[instrument(
    name = "algorithm.dsatur",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
fn color_dsatur<V: VertexId>(graph: &Graph<V>) -> Coloring<V> {
    let colors = dsatur_positions(graph);
    let coloring = coloring_from_positions(graph, &colors);
    debug!(colors = coloring.color_count(), "dsatur coloring complete");
    coloring
}

/// Runs DSatur over vertex positions.
///
/// Shared with the exact search, which uses the result as its initial upper
/// bound.
pub(super) fn dsatur_positions<V: VertexId>(graph: &Graph<V>) -> Vec<Option<usize>> {
    let n = graph.vertex_count();
    let mut colors: Vec<Option<usize>> = vec![None; n];
    let mut neighbour_colors: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];

    while let Some(next) = select_most_saturated(graph, &colors, &neighbour_colors) {
        let taken = &neighbour_colors[next];
        let color = (0..).find(|c| !taken.contains(c)).unwrap_or(taken.len());
        trace!(
            position = next,
            saturation = taken.len(),
            color,
            "dsatur colored vertex"
        );
        colors[next] = Some(color);
        for &neighbour in graph.neighbour_indices(next) {
            if let Some(set) = neighbour_colors.get_mut(neighbour) {
                set.insert(color);
            }
        }
    }
    colors
}

fn select_most_saturated<V: VertexId>(
    graph: &Graph<V>,
    colors: &[Option<usize>],
    neighbour_colors: &[BTreeSet<usize>],
) -> Option<usize> {
    let mut best: Option<(usize, (usize, usize))> = None;
    for (idx, (color, saturation)) in colors.iter().zip(neighbour_colors).enumerate() {
        if color.is_some() {
            continue;
        }
        let key = (saturation.len(), graph.degree_at(idx));
        // Strict comparison keeps the earliest position among equal keys.
        if best.is_none_or(|(_, best_key)| key > best_key) {
            best = Some((idx, key));
        }
    }
    best.map(|(idx, _)| idx)
}
