//! Results of a conformance run.

use super::Scenario;

/// Outcome of a single passing scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub(super) scenario: Scenario,
    pub(super) vertices: usize,
    pub(super) edges: usize,
    pub(super) colors: usize,
    pub(super) expected_colors: Option<usize>,
}

impl ScenarioOutcome {
    #[must_use]
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    #[must_use]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    #[must_use]
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Distinct colors used by the algorithm on this scenario.
    #[must_use]
    pub fn colors(&self) -> usize {
        self.colors
    }

    /// Color count the scenario required, if any.
    #[must_use]
    pub fn expected_colors(&self) -> Option<usize> {
        self.expected_colors
    }
}

/// Summary of a conformance run in which every scenario passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConformanceReport {
    pub(super) algorithm: &'static str,
    pub(super) outcomes: Vec<ScenarioOutcome>,
    pub(super) base_seeds: Vec<u64>,
}

impl ConformanceReport {
    /// Name of the algorithm under test.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Outcomes in scenario order.
    #[must_use]
    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    /// Base seed actually used by each random-trial batch, in batch order.
    /// Entropy-seeded batches report the seed they drew.
    #[must_use]
    pub fn base_seeds(&self) -> &[u64] {
        &self.base_seeds
    }

    /// Looks up the outcome for `scenario`.
    #[must_use]
    pub fn outcome(&self, scenario: &Scenario) -> Option<&ScenarioOutcome> {
        self.outcomes
            .iter()
            .find(|outcome| &outcome.scenario == scenario)
    }
}
