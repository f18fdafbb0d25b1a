//! Structural invariant checks for a coloring produced on a graph.
//!
//! The validator is the oracle used by the conformance harness and by
//! property tests: algorithms do not verify their own output.

mod budget;
mod domain;
mod proper;

use tracing::instrument;

use crate::{
    coloring::Coloring,
    error::ColoringInvariantViolation,
    graph::{Graph, VertexId},
};

use self::{
    budget::{check_color_budget, check_expected_count},
    domain::{check_color_range, check_domain},
    proper::check_proper_coloring,
};

/// Enumerates the invariants a coloring must satisfy.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColoringInvariant {
    /// The coloring uses at most `n` distinct colors.
    ColorBudget,
    /// The coloring uses exactly the expected number of colors, when one is
    /// configured.
    ExpectedCount,
    /// Every graph vertex is colored and no other vertex is.
    Domain,
    /// Every color lies in `[0, n)`.
    ColorRange,
    /// The endpoints of every edge have different colors.
    ProperColoring,
}

impl ColoringInvariant {
    /// Returns all invariants in the order they should be evaluated.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::ColorBudget,
            Self::ExpectedCount,
            Self::Domain,
            Self::ColorRange,
            Self::ProperColoring,
        ]
    }

    /// Short stable name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ColorBudget => "color_budget",
            Self::ExpectedCount => "expected_count",
            Self::Domain => "domain",
            Self::ColorRange => "color_range",
            Self::ProperColoring => "proper_coloring",
        }
    }
}

/// Checks a [`Coloring`] against the [`Graph`] it was produced for.
///
/// # Examples
/// ```
/// use irodori_core::{ColoringInvariantCode, ColoringValidator, Coloring, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_vertices([1, 2]);
/// graph.add_edge(1, 2)?;
///
/// let proper = Coloring::from_assignments([(1, 0), (2, 1)]);
/// ColoringValidator::new(&graph, &proper)
///     .with_expected_colors(2)
///     .check_all()
///     .expect("proper coloring");
///
/// let clash = Coloring::from_assignments([(1, 0), (2, 0)]);
/// let err = ColoringValidator::new(&graph, &clash)
///     .check_all()
///     .expect_err("edge endpoints share a color");
/// assert_eq!(err.code(), ColoringInvariantCode::ConflictingEdge);
/// # Ok::<(), irodori_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ColoringValidator<'a, V> {
    graph: &'a Graph<V>,
    coloring: &'a Coloring<V>,
    expected_colors: Option<usize>,
}

impl<'a, V: VertexId> ColoringValidator<'a, V> {
    /// Creates a validator with no expected color count.
    #[must_use]
    pub fn new(graph: &'a Graph<V>, coloring: &'a Coloring<V>) -> Self {
        Self {
            graph,
            coloring,
            expected_colors: None,
        }
    }

    /// Requires the coloring to use exactly `expected` colors.
    #[must_use]
    pub fn with_expected_colors(mut self, expected: usize) -> Self {
        self.expected_colors = Some(expected);
        self
    }

    /// Sets or clears the expected color count.
    #[must_use]
    pub fn with_expected_colors_opt(mut self, expected: Option<usize>) -> Self {
        self.expected_colors = expected;
        self
    }

    /// Runs all invariants, returning the first violation encountered.
    ///
    /// # Errors
    /// Returns the first [`ColoringInvariantViolation`] found.
    pub fn check_all(&self) -> Result<(), ColoringInvariantViolation> {
        self.check_many(ColoringInvariant::all())
    }

    /// Runs a custom subset of invariants in the provided order.
    ///
    /// # Errors
    /// Returns the first [`ColoringInvariantViolation`] found.
    pub fn check_many(
        &self,
        invariants: impl IntoIterator<Item = ColoringInvariant>,
    ) -> Result<(), ColoringInvariantViolation> {
        self.run_with_mode(invariants, EvaluationMode::FailFast)
    }

    /// Runs a single invariant.
    ///
    /// # Errors
    /// Returns the first [`ColoringInvariantViolation`] found.
    pub fn check(&self, invariant: ColoringInvariant) -> Result<(), ColoringInvariantViolation> {
        self.check_many([invariant])
    }

    /// Executes every invariant and returns the full set of violations.
    #[must_use]
    pub fn collect_all(&self) -> Vec<ColoringInvariantViolation> {
        self.collect_many(ColoringInvariant::all())
    }

    /// Executes the selected invariants and returns every violation discovered.
    #[must_use]
    pub fn collect_many(
        &self,
        invariants: impl IntoIterator<Item = ColoringInvariant>,
    ) -> Vec<ColoringInvariantViolation> {
        let mut violations = Vec::new();
        let _ = self.run_with_mode(invariants, EvaluationMode::Collect(&mut violations));
        violations
    }

    #[instrument(
        name = "validate.run",
        skip_all,
        fields(
            vertices = self.graph.vertex_count(),
            colors = self.coloring.color_count(),
            expected = ?self.expected_colors,
        ),
    )]
    fn run_with_mode(
        &self,
        invariants: impl IntoIterator<Item = ColoringInvariant>,
        mut mode: EvaluationMode<'_>,
    ) -> Result<(), ColoringInvariantViolation> {
        let ctx = ColoringContext {
            graph: self.graph,
            coloring: self.coloring,
            expected_colors: self.expected_colors,
        };
        for invariant in invariants {
            dispatch(ctx, invariant, &mut mode)?;
        }
        Ok(())
    }
}

fn dispatch<V: VertexId>(
    ctx: ColoringContext<'_, V>,
    invariant: ColoringInvariant,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), ColoringInvariantViolation> {
    match invariant {
        ColoringInvariant::ColorBudget => check_color_budget(ctx, mode),
        ColoringInvariant::ExpectedCount => check_expected_count(ctx, mode),
        ColoringInvariant::Domain => check_domain(ctx, mode),
        ColoringInvariant::ColorRange => check_color_range(ctx, mode),
        ColoringInvariant::ProperColoring => check_proper_coloring(ctx, mode),
    }
}

pub(super) struct ColoringContext<'a, V> {
    graph: &'a Graph<V>,
    coloring: &'a Coloring<V>,
    expected_colors: Option<usize>,
}

impl<V> Clone for ColoringContext<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ColoringContext<'_, V> {}

pub(super) enum EvaluationMode<'a> {
    FailFast,
    Collect(&'a mut Vec<ColoringInvariantViolation>),
}

impl EvaluationMode<'_> {
    fn record(
        &mut self,
        violation: ColoringInvariantViolation,
    ) -> Result<(), ColoringInvariantViolation> {
        match self {
            Self::FailFast => Err(violation),
            Self::Collect(sink) => {
                sink.push(violation);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests;
