//! Sequential first-fit coloring shared by the order-based heuristics.

use crate::graph::{Graph, VertexId};

/// Colors vertex positions in `order`, giving each the smallest color not
/// used by an already colored neighbour.
///
/// Positions missing from `order` stay uncolored.
pub(super) fn first_fit<V: VertexId>(
    graph: &Graph<V>,
    order: impl IntoIterator<Item = usize>,
) -> Vec<Option<usize>> {
    let n = graph.vertex_count();
    let mut colors: Vec<Option<usize>> = vec![None; n];
    // `forbidden[c] == stamp` marks color `c` as taken for the current vertex.
    let mut forbidden = vec![0_usize; n + 1];

    for (step, idx) in order.into_iter().enumerate() {
        let stamp = step + 1;
        for &neighbour in graph.neighbour_indices(idx) {
            if let Some(slot) = colors
                .get(neighbour)
                .copied()
                .flatten()
                .and_then(|c| forbidden.get_mut(c))
            {
                *slot = stamp;
            }
        }
        let color = smallest_free(&forbidden, stamp);
        if let Some(slot) = colors.get_mut(idx) {
            *slot = Some(color);
        }
    }
    colors
}

/// Returns the smallest color whose marker differs from `stamp`.
fn smallest_free(forbidden: &[usize], stamp: usize) -> usize {
    forbidden
        .iter()
        .position(|&mark| mark != stamp)
        .unwrap_or(forbidden.len())
}
