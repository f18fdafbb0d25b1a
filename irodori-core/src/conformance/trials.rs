//! Configuration of repeated `G(n, p)` trials.

use crate::{
    error::{ConformanceError, Result},
    generate::{GnpRandomGraphGenerator, derive_trial_seed, entropy_seed},
};

/// Where the base seed of a batch of random trials comes from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SeedPolicy {
    /// Replayable trials derived from a fixed base seed.
    Fixed(u64),
    /// Fresh trials drawn from operating-system entropy on every run. The
    /// drawn base seed is recorded in the report so failures can be replayed
    /// with [`SeedPolicy::Fixed`].
    Entropy,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self::Fixed(RandomTrialsBuilder::DEFAULT_SEED)
    }
}

/// Configures and constructs [`RandomTrials`].
///
/// # Examples
/// ```
/// use irodori_core::{RandomTrialsBuilder, SeedPolicy};
///
/// let trials = RandomTrialsBuilder::new()
///     .with_trials(3)
///     .with_order(12)
///     .with_probability(0.5)
///     .with_seed_policy(SeedPolicy::Entropy)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(trials.trials(), 3);
/// assert_eq!(trials.generator().order(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomTrialsBuilder {
    trials: usize,
    order: usize,
    probability: f64,
    seed_policy: SeedPolicy,
}

impl Default for RandomTrialsBuilder {
    fn default() -> Self {
        Self {
            trials: Self::DEFAULT_TRIALS,
            order: Self::DEFAULT_ORDER,
            probability: Self::DEFAULT_PROBABILITY,
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl RandomTrialsBuilder {
    /// Number of trials run by default.
    pub const DEFAULT_TRIALS: usize = 5;
    /// Vertex count of each trial graph by default.
    pub const DEFAULT_ORDER: usize = 20;
    /// Edge probability of each trial graph by default.
    pub const DEFAULT_PROBABILITY: f64 = 0.35;
    /// Base seed used by [`SeedPolicy::default`].
    pub const DEFAULT_SEED: u64 = 17;

    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of trials.
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Overrides the vertex count of each trial graph.
    #[must_use]
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Overrides the edge probability of each trial graph.
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Overrides where the base seed comes from.
    #[must_use]
    pub fn with_seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = seed_policy;
        self
    }

    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    #[must_use]
    pub fn seed_policy(&self) -> SeedPolicy {
        self.seed_policy
    }

    /// Validates the configuration and constructs [`RandomTrials`].
    ///
    /// # Errors
    /// Returns [`ConformanceError::InvalidTrialCount`] when no trial would
    /// run and [`ConformanceError::InvalidTrialParameters`] when the edge
    /// probability is rejected by the generator.
    pub fn build(self) -> Result<RandomTrials> {
        if self.trials == 0 {
            return Err(ConformanceError::InvalidTrialCount { got: self.trials });
        }
        let generator = GnpRandomGraphGenerator::new(self.order, self.probability)
            .map_err(|error| ConformanceError::InvalidTrialParameters { error })?;
        Ok(RandomTrials {
            trials: self.trials,
            generator,
            seed_policy: self.seed_policy,
        })
    }
}

/// A validated batch of random trials.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomTrials {
    trials: usize,
    generator: GnpRandomGraphGenerator,
    seed_policy: SeedPolicy,
}

impl Default for RandomTrials {
    /// Five replayable trials of `G(20, 0.35)` from base seed 17.
    fn default() -> Self {
        Self {
            trials: RandomTrialsBuilder::DEFAULT_TRIALS,
            generator: GnpRandomGraphGenerator::from_valid_probability(
                RandomTrialsBuilder::DEFAULT_ORDER,
                RandomTrialsBuilder::DEFAULT_PROBABILITY,
            ),
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl RandomTrials {
    /// Five trials of `G(20, 0.35)` with entropy-drawn seeds.
    #[must_use]
    pub fn unseeded() -> Self {
        Self {
            seed_policy: SeedPolicy::Entropy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    #[must_use]
    pub fn generator(&self) -> &GnpRandomGraphGenerator {
        &self.generator
    }

    #[must_use]
    pub fn seed_policy(&self) -> SeedPolicy {
        self.seed_policy
    }

    /// Resolves the base seed for one run, drawing entropy when required.
    pub(super) fn resolve_base_seed(&self) -> u64 {
        match self.seed_policy {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::Entropy => entropy_seed(),
        }
    }

    /// Per-trial seeds derived from `base_seed`.
    pub(super) fn trial_seeds(&self, base_seed: u64) -> impl Iterator<Item = (usize, u64)> {
        (0..self.trials).map(move |trial| (trial, derive_trial_seed(base_seed, trial)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConformanceErrorCode, GeneratorErrorCode};
    use rstest::rstest;

    #[test]
    fn defaults_match_reference_scenario() {
        let trials = RandomTrialsBuilder::new().build().expect("defaults are valid");
        assert_eq!(trials, RandomTrials::default());
        assert_eq!(trials.trials(), 5);
        assert_eq!(trials.generator().order(), 20);
        assert_eq!(trials.seed_policy(), SeedPolicy::Fixed(17));
    }

    #[test]
    fn zero_trials_is_rejected() {
        let err = RandomTrialsBuilder::new()
            .with_trials(0)
            .build()
            .expect_err("zero trials must fail");
        assert_eq!(err.code(), ConformanceErrorCode::InvalidTrialCount);
    }

    #[rstest]
    #[case(-0.5)]
    #[case(2.0)]
    fn invalid_probability_is_rejected(#[case] probability: f64) {
        let err = RandomTrialsBuilder::new()
            .with_probability(probability)
            .build()
            .expect_err("probability must be rejected");
        assert_eq!(err.code(), ConformanceErrorCode::InvalidTrialParameters);
        assert_eq!(
            err.generator_code(),
            Some(GeneratorErrorCode::InvalidProbability)
        );
    }

    #[test]
    fn fixed_policy_resolves_to_its_seed() {
        let trials = RandomTrialsBuilder::new()
            .with_seed_policy(SeedPolicy::Fixed(99))
            .build()
            .expect("valid");
        assert_eq!(trials.resolve_base_seed(), 99);
    }

    #[test]
    fn trial_seeds_are_stable_per_index() {
        let trials = RandomTrials::default();
        let first: Vec<_> = trials.trial_seeds(17).collect();
        let second: Vec<_> = trials.trial_seeds(17).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
        assert_eq!(first[2], (2, derive_trial_seed(17, 2)));
    }
}
