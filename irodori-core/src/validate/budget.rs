use tracing::debug;

use crate::{error::ColoringInvariantViolation, graph::VertexId};

use super::{ColoringContext, EvaluationMode};

pub(super) fn check_color_budget<V: VertexId>(
    ctx: ColoringContext<'_, V>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), ColoringInvariantViolation> {
    let colors = ctx.coloring.color_count();
    let vertices = ctx.graph.vertex_count();
    if colors > vertices {
        debug!(colors, vertices, "color budget exceeded");
        mode.record(ColoringInvariantViolation::ColorBudgetExceeded { colors, vertices })?;
    }
    Ok(())
}

pub(super) fn check_expected_count<V: VertexId>(
    ctx: ColoringContext<'_, V>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), ColoringInvariantViolation> {
    let Some(expected) = ctx.expected_colors else {
        return Ok(());
    };
    let actual = ctx.coloring.color_count();
    if actual != expected {
        debug!(expected, actual, "unexpected color count");
        mode.record(ColoringInvariantViolation::UnexpectedColorCount { expected, actual })?;
    }
    Ok(())
}
