//! Exact coloring by DSatur-guided branch and bound.

use tracing::{debug, instrument};

use crate::{
    coloring::Coloring,
    graph::{Graph, VertexId},
};

use super::{
    ColoringAlgorithm, bound::BoundGraph, coloring_from_positions, saturation::dsatur_positions,
};

/// Exact coloring in the spirit of Brown's backtracking algorithm.
///
/// The search branches on the most saturated uncolored vertex and only
/// admits colors below the best complete coloring found so far, so every
/// improvement is strict. DSatur seeds the upper bound and a greedily grown
/// clique supplies a lower bound that stops the search early once reached.
/// The returned coloring uses exactly the chromatic number of colors.
///
/// Running time is exponential in the worst case; intended for small
/// benchmark instances.
///
/// # Examples
/// ```
/// use irodori_core::{BacktrackingColoring, ColoringAlgorithm, fixtures};
///
/// let graph = fixtures::greedy_adversarial_7()?;
/// let exact = BacktrackingColoring::new(&graph);
/// assert_eq!(exact.coloring().color_count(), 3);
/// # Ok::<(), irodori_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct BacktrackingColoring<'g, V> {
    bound: BoundGraph<'g, V>,
}

impl<'g, V: VertexId> ColoringAlgorithm<'g, V> for BacktrackingColoring<'g, V> {
    const NAME: &'static str = "backtracking";

    fn new(graph: &'g Graph<V>) -> Self {
        Self {
            bound: BoundGraph::new(graph),
        }
    }

    fn graph(&self) -> &'g Graph<V> {
        self.bound.graph()
    }

    fn coloring(&self) -> &Coloring<V> {
        self.bound.get_or_compute(color_exact)
    }
}

#[instrument(
    name = "algorithm.backtracking",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
fn color_exact<V: VertexId>(graph: &Graph<V>) -> Coloring<V> {
    let initial = dsatur_positions(graph);
    let upper = distinct_colors(&initial);
    let lower = greedy_clique_size(graph);

    let mut search = Search::new(graph, initial, upper, lower);
    if upper > lower {
        search.descend(0, 0);
    }
    debug!(
        lower_bound = lower,
        initial_upper_bound = upper,
        colors = search.best_count,
        nodes = search.nodes,
        "exact coloring complete"
    );
    coloring_from_positions(graph, &search.best)
}

fn distinct_colors(colors: &[Option<usize>]) -> usize {
    colors
        .iter()
        .flatten()
        .max()
        .map_or(0, |&max| max + 1)
}

/// Size of a clique grown greedily from vertices in non-increasing degree
/// order. Any clique size is a valid lower bound on the chromatic number.
fn greedy_clique_size<V: VertexId>(graph: &Graph<V>) -> usize {
    let mut order: Vec<usize> = (0..graph.vertex_count()).collect();
    order.sort_by_key(|&idx| std::cmp::Reverse(graph.degree_at(idx)));

    let mut clique: Vec<usize> = Vec::new();
    for idx in order {
        let neighbours = graph.neighbour_indices(idx);
        if clique.iter().all(|member| neighbours.contains(member)) {
            clique.push(idx);
        }
    }
    clique.len()
}

struct Search<'a, V> {
    graph: &'a Graph<V>,
    colors: Vec<Option<usize>>,
    /// `conflicts[v][c]` counts colored neighbours of `v` holding color `c`.
    conflicts: Vec<Vec<u32>>,
    saturation: Vec<usize>,
    best: Vec<Option<usize>>,
    best_count: usize,
    lower_bound: usize,
    nodes: u64,
}

impl<'a, V: VertexId> Search<'a, V> {
    fn new(
        graph: &'a Graph<V>,
        initial: Vec<Option<usize>>,
        upper: usize,
        lower_bound: usize,
    ) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            colors: vec![None; n],
            conflicts: vec![vec![0; upper.max(1)]; n],
            saturation: vec![0; n],
            best: initial,
            best_count: upper,
            lower_bound,
            nodes: 0,
        }
    }

    /// Extends the partial coloring; returns `true` once a coloring matching
    /// the lower bound has been recorded.
    fn descend(&mut self, colored: usize, used: usize) -> bool {
        self.nodes += 1;
        if colored == self.colors.len() {
            if used < self.best_count {
                self.best.clone_from(&self.colors);
                self.best_count = used;
            }
            return self.best_count <= self.lower_bound;
        }

        let Some(vertex) = self.select() else {
            return false;
        };
        let mut color = 0;
        // The bound is re-read each iteration because deeper calls tighten it.
        while color < (used + 1).min(self.best_count.saturating_sub(1)) {
            if self.conflicts[vertex][color] == 0 {
                self.assign(vertex, color);
                let done = self.descend(colored + 1, used.max(color + 1));
                self.unassign(vertex, color);
                if done {
                    return true;
                }
            }
            color += 1;
        }
        false
    }

    fn select(&self) -> Option<usize> {
        let mut best: Option<(usize, (usize, usize))> = None;
        for (idx, color) in self.colors.iter().enumerate() {
            if color.is_some() {
                continue;
            }
            let key = (self.saturation[idx], self.graph.degree_at(idx));
            if best.is_none_or(|(_, best_key)| key > best_key) {
                best = Some((idx, key));
            }
        }
        best.map(|(idx, _)| idx)
    }

    fn assign(&mut self, vertex: usize, color: usize) {
        self.colors[vertex] = Some(color);
        for &neighbour in self.graph.neighbour_indices(vertex) {
            let count = &mut self.conflicts[neighbour][color];
            if *count == 0 {
                self.saturation[neighbour] += 1;
            }
            *count += 1;
        }
    }

    fn unassign(&mut self, vertex: usize, color: usize) {
        self.colors[vertex] = None;
        for &neighbour in self.graph.neighbour_indices(vertex) {
            let count = &mut self.conflicts[neighbour][color];
            *count -= 1;
            if *count == 0 {
                self.saturation[neighbour] -= 1;
            }
        }
    }
}
