//! Proper-coloring invariant: no edge joins two vertices of the same color.
//!
//! Uncolored endpoints are skipped here; the domain check reports them. A
//! self-loop always conflicts, so graphs with loops admit no proper coloring.

use tracing::{Level, debug, trace};

use crate::{error::ColoringInvariantViolation, graph::VertexId};

use super::{ColoringContext, EvaluationMode};

pub(super) fn check_proper_coloring<V: VertexId>(
    ctx: ColoringContext<'_, V>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), ColoringInvariantViolation> {
    if tracing::enabled!(Level::TRACE) {
        trace!(edges = ctx.graph.edge_count(), "checking proper coloring");
    }
    for (first, second) in ctx.graph.edges() {
        let (Some(first_color), Some(second_color)) =
            (ctx.coloring.color_of(first), ctx.coloring.color_of(second))
        else {
            continue;
        };
        if first_color == second_color {
            debug!(%first, %second, color = first_color, "conflicting edge");
            mode.record(ColoringInvariantViolation::ConflictingEdge {
                first: first.to_string(),
                second: second.to_string(),
                color: first_color,
            })?;
        }
    }
    Ok(())
}
