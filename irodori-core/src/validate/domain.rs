//! Domain and range checks: the coloring covers exactly the graph's vertex
//! set and every color lies in `[0, n)`.

use tracing::{debug, trace};

use crate::{error::ColoringInvariantViolation, graph::VertexId};

use super::{ColoringContext, EvaluationMode};

pub(super) fn check_domain<V: VertexId>(
    ctx: ColoringContext<'_, V>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), ColoringInvariantViolation> {
    for &vertex in ctx.graph.vertices() {
        if ctx.coloring.color_of(vertex).is_none() {
            debug!(%vertex, "uncolored vertex");
            mode.record(ColoringInvariantViolation::UncoloredVertex {
                vertex: vertex.to_string(),
            })?;
        }
    }
    for &vertex in ctx.coloring.colors().keys() {
        if !ctx.graph.contains_vertex(vertex) {
            debug!(%vertex, "colored vertex outside graph");
            mode.record(ColoringInvariantViolation::UnknownVertex {
                vertex: vertex.to_string(),
            })?;
        }
    }
    Ok(())
}

pub(super) fn check_color_range<V: VertexId>(
    ctx: ColoringContext<'_, V>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), ColoringInvariantViolation> {
    let vertices = ctx.graph.vertex_count();
    trace!(vertices, "checking color range");
    for (&vertex, &color) in ctx.coloring.colors() {
        if color >= vertices {
            debug!(%vertex, color, vertices, "color out of range");
            mode.record(ColoringInvariantViolation::ColorOutOfRange {
                vertex: vertex.to_string(),
                color,
                vertices,
            })?;
        }
    }
    Ok(())
}
