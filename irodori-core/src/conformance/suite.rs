//! Suite configuration, instance generation and evaluation.

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument, warn};

use crate::{
    algorithm::ColoringAlgorithm,
    error::{ConformanceError, Result},
    fixtures::Fixture,
    generate::CompleteGraphGenerator,
    graph::Graph,
    validate::ColoringValidator,
};

use super::{
    ConformanceExpectations, ConformanceReport, ExecutionStrategy, RandomTrials, Scenario,
    ScenarioOutcome, SeedPolicy,
};

/// Configures and constructs a [`ConformanceSuite`].
///
/// # Examples
/// ```
/// use irodori_core::{
///     ConformanceExpectations, ConformanceSuiteBuilder, ExecutionStrategy, RandomTrials,
/// };
///
/// let suite = ConformanceSuiteBuilder::new(ConformanceExpectations::new(3))
///     .with_complete_order(8)
///     .with_random_trials([RandomTrials::default()])
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(suite.complete_order(), 8);
/// assert_eq!(suite.random_trials().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConformanceSuiteBuilder {
    expectations: ConformanceExpectations,
    complete_order: usize,
    random_trials: Vec<RandomTrials>,
    execution_strategy: ExecutionStrategy,
}

impl ConformanceSuiteBuilder {
    /// Order of the complete-graph scenario by default.
    pub const DEFAULT_COMPLETE_ORDER: usize = 20;

    /// Creates a builder with the reference scenarios: the fixed instances,
    /// `K_20`, one seeded and one entropy-seeded batch of random trials.
    #[must_use]
    pub fn new(expectations: ConformanceExpectations) -> Self {
        Self {
            expectations,
            complete_order: Self::DEFAULT_COMPLETE_ORDER,
            random_trials: vec![RandomTrials::default(), RandomTrials::unseeded()],
            execution_strategy: ExecutionStrategy::default(),
        }
    }

    /// Overrides the order of the complete-graph scenario.
    #[must_use]
    pub fn with_complete_order(mut self, order: usize) -> Self {
        self.complete_order = order;
        self
    }

    /// Replaces the random-trial batches.
    #[must_use]
    pub fn with_random_trials(mut self, trials: impl IntoIterator<Item = RandomTrials>) -> Self {
        self.random_trials = trials.into_iter().collect();
        self
    }

    /// Sets how generation and evaluation are scheduled.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Validates the configuration and constructs a [`ConformanceSuite`].
    ///
    /// # Errors
    /// Returns [`ConformanceError::BackendUnavailable`] when the execution
    /// strategy is not compiled into this build.
    pub fn build(self) -> Result<ConformanceSuite> {
        let execution_strategy = self.execution_strategy.ensure_available()?;
        Ok(ConformanceSuite {
            expectations: self.expectations,
            complete_order: self.complete_order,
            random_trials: self.random_trials,
            execution_strategy,
        })
    }
}

/// A validated set of conformance scenarios.
#[derive(Clone, Debug, PartialEq)]
pub struct ConformanceSuite {
    expectations: ConformanceExpectations,
    complete_order: usize,
    random_trials: Vec<RandomTrials>,
    execution_strategy: ExecutionStrategy,
}

impl ConformanceSuite {
    /// Expected color counts for the fixed instances.
    #[must_use]
    pub fn expectations(&self) -> &ConformanceExpectations {
        &self.expectations
    }

    /// Order of the complete-graph scenario.
    #[must_use]
    pub fn complete_order(&self) -> usize {
        self.complete_order
    }

    #[must_use]
    pub fn random_trials(&self) -> &[RandomTrials] {
        &self.random_trials
    }

    /// Strategy used for trial generation and scenario evaluation.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Builds every scenario's graph.
    ///
    /// Entropy-seeded batches draw a fresh base seed on each call. Trials
    /// from a fixed seed are generated twice and compared.
    ///
    /// # Errors
    /// Returns [`ConformanceError::Instance`] when a fixture fails to build
    /// and [`ConformanceError::Generator`] when a generator fails, including
    /// a fixed-seed trial that does not replay identically.
    #[instrument(
        name = "conformance.instantiate",
        err,
        skip(self),
        fields(
            complete_order = self.complete_order,
            batches = self.random_trials.len(),
            strategy = ?self.execution_strategy,
        ),
    )]
    pub fn instantiate(&self) -> Result<ConformanceInstances> {
        let mut instances = Vec::new();

        for fixture in Fixture::all() {
            let scenario = Scenario::Fixture(fixture);
            let graph = fixture
                .build()
                .map_err(|error| ConformanceError::Instance { scenario, error })?;
            instances.push(ScenarioInstance {
                scenario,
                graph,
                expected_colors: self.expectations.expected_for(fixture),
            });
        }

        let scenario = Scenario::Complete {
            order: self.complete_order,
        };
        let graph = CompleteGraphGenerator::new(self.complete_order)
            .generate()
            .map_err(|error| ConformanceError::Generator { scenario, error })?;
        instances.push(ScenarioInstance {
            scenario,
            graph,
            expected_colors: Some(self.complete_order),
        });

        let mut base_seeds = Vec::with_capacity(self.random_trials.len());
        for trials in &self.random_trials {
            let base_seed = trials.resolve_base_seed();
            base_seeds.push(base_seed);
            let plan: Vec<(Scenario, u64)> = trials
                .trial_seeds(base_seed)
                .map(|(trial, seed)| {
                    let scenario = match trials.seed_policy() {
                        SeedPolicy::Fixed(_) => Scenario::SeededRandom { trial, seed },
                        SeedPolicy::Entropy => Scenario::UnseededRandom { trial, seed },
                    };
                    (scenario, seed)
                })
                .collect();
            let generated = self
                .execution_strategy
                .map_ordered(&plan, |&(scenario, seed)| {
                    generate_trial(trials, scenario, seed)
                });
            for instance in generated {
                instances.push(instance?);
            }
        }

        Ok(ConformanceInstances {
            instances,
            base_seeds,
            execution_strategy: self.execution_strategy,
        })
    }
}

fn generate_trial(
    trials: &RandomTrials,
    scenario: Scenario,
    seed: u64,
) -> Result<ScenarioInstance> {
    let generator = trials.generator();
    let generated = match trials.seed_policy() {
        SeedPolicy::Fixed(_) => generator.verify_deterministic(seed),
        SeedPolicy::Entropy => generator.generate(&mut SmallRng::seed_from_u64(seed)),
    };
    let graph = generated.map_err(|error| ConformanceError::Generator { scenario, error })?;
    Ok(ScenarioInstance {
        scenario,
        graph,
        expected_colors: None,
    })
}

#[derive(Clone, Debug)]
struct ScenarioInstance {
    scenario: Scenario,
    graph: Graph<usize>,
    expected_colors: Option<usize>,
}

/// Graphs for every scenario of a [`ConformanceSuite`], ready to be colored.
#[derive(Clone, Debug)]
pub struct ConformanceInstances {
    instances: Vec<ScenarioInstance>,
    base_seeds: Vec<u64>,
    execution_strategy: ExecutionStrategy,
}

impl ConformanceInstances {
    /// Scenarios in evaluation order.
    pub fn scenarios(&self) -> impl ExactSizeIterator<Item = Scenario> + '_ {
        self.instances.iter().map(|instance| instance.scenario)
    }

    /// Returns the graph generated for `scenario`.
    #[must_use]
    pub fn graph(&self, scenario: &Scenario) -> Option<&Graph<usize>> {
        self.instances
            .iter()
            .find(|instance| &instance.scenario == scenario)
            .map(|instance| &instance.graph)
    }

    /// Base seed used by each random-trial batch, in batch order.
    #[must_use]
    pub fn base_seeds(&self) -> &[u64] {
        &self.base_seeds
    }

    /// Colors every scenario with `A` and validates the result.
    ///
    /// # Errors
    /// Returns [`ConformanceError::Violation`] for the first scenario, in
    /// scenario order, whose coloring breaks an invariant or misses its
    /// expected color count.
    #[instrument(
        name = "conformance.run",
        err,
        skip(self),
        fields(algorithm = A::NAME, scenarios = self.instances.len()),
    )]
    pub fn run<'g, A>(&'g self) -> Result<ConformanceReport>
    where
        A: ColoringAlgorithm<'g, usize>,
    {
        let outcomes = self
            .execution_strategy
            .map_ordered(&self.instances, |instance| evaluate::<A>(instance))
            .into_iter()
            .collect::<Result<Vec<_>>>()?;
        info!(scenarios = outcomes.len(), "conformance run passed");
        Ok(ConformanceReport {
            algorithm: A::NAME,
            outcomes,
            base_seeds: self.base_seeds.clone(),
        })
    }
}

#[instrument(
    name = "conformance.evaluate",
    skip(instance),
    fields(algorithm = A::NAME, scenario = %instance.scenario),
)]
fn evaluate<'g, A>(instance: &'g ScenarioInstance) -> Result<ScenarioOutcome>
where
    A: ColoringAlgorithm<'g, usize>,
{
    let algorithm = A::new(&instance.graph);
    let coloring = algorithm.coloring();
    ColoringValidator::new(&instance.graph, coloring)
        .with_expected_colors_opt(instance.expected_colors)
        .check_all()
        .map_err(|violation| {
            warn!(code = %violation.code(), %violation, "scenario failed");
            ConformanceError::Violation {
                algorithm: A::NAME,
                scenario: instance.scenario,
                violation,
            }
        })?;
    info!(colors = coloring.color_count(), "scenario passed");
    Ok(ScenarioOutcome {
        scenario: instance.scenario,
        vertices: instance.graph.vertex_count(),
        edges: instance.graph.edge_count(),
        colors: coloring.color_count(),
        expected_colors: instance.expected_colors,
    })
}
