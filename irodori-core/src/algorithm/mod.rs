//! Coloring algorithm contract and the strategies bundled with the crate.
//!
//! Every strategy binds a graph at construction time and exposes a single
//! coloring that is computed on first access and memoised afterwards. The
//! contract only promises a proper coloring using at most `n` colors; the
//! heuristics are free to be non-optimal.

mod backtracking;
mod bound;
mod greedy;
mod largest_degree;
mod saturation;
mod sequential;

use crate::{
    coloring::Coloring,
    graph::{Graph, VertexId},
};

pub use self::{
    backtracking::BacktrackingColoring, greedy::GreedyColoring,
    largest_degree::LargestDegreeFirstColoring, saturation::SaturationDegreeColoring,
};

/// Capability shared by every coloring strategy: bind a graph, then produce
/// a [`Coloring`] for it.
///
/// Repeated calls to [`ColoringAlgorithm::coloring`] return the same value;
/// implementations compute it at most once per instance.
///
/// # Examples
/// ```
/// use irodori_core::{ColoringAlgorithm, Graph, GreedyColoring};
///
/// let mut graph = Graph::new();
/// graph.add_vertices([1, 2, 3]);
/// graph.add_edge(1, 2)?;
/// graph.add_edge(2, 3)?;
///
/// let algorithm = GreedyColoring::new(&graph);
/// let coloring = algorithm.coloring();
/// assert_eq!(coloring.color_count(), 2);
/// assert_ne!(coloring.color_of(1), coloring.color_of(2));
/// # Ok::<(), irodori_core::GraphError>(())
/// ```
pub trait ColoringAlgorithm<'g, V: VertexId>: Sized {
    /// Stable name used in reports and diagnostics.
    const NAME: &'static str;

    /// Binds the algorithm to `graph`.
    fn new(graph: &'g Graph<V>) -> Self;

    /// Returns the graph this instance was bound to.
    fn graph(&self) -> &'g Graph<V>;

    /// Returns the coloring, computing it on first use.
    fn coloring(&self) -> &Coloring<V>;
}

/// Maps per-position colors back onto vertex identifiers, skipping positions
/// that were never colored.
fn coloring_from_positions<V: VertexId>(graph: &Graph<V>, colors: &[Option<usize>]) -> Coloring<V> {
    graph
        .vertices()
        .iter()
        .zip(colors)
        .filter_map(|(&vertex, color)| color.map(|c| (vertex, c)))
        .collect()
}

#[cfg(test)]
mod tests;
