//! Per-algorithm expected color counts on the fixed instances.

use crate::fixtures::Fixture;

/// Expected color counts for the fixed instances.
///
/// The adversarial instance has no universal expectation: how many colors a
/// heuristic spends there depends on the heuristic, so every algorithm under
/// test must pin its own value. The remaining fixtures default to their
/// chromatic numbers and may be relaxed to validity-only checks for
/// heuristics that are not exact on them.
///
/// # Examples
/// ```
/// use irodori_core::{ConformanceExpectations, fixtures::Fixture};
///
/// let expectations = ConformanceExpectations::new(4)
///     .with_expected(Fixture::Mycielski4, None);
/// assert_eq!(expectations.expected_for(Fixture::Sample5), Some(3));
/// assert_eq!(expectations.expected_for(Fixture::GreedyAdversarial7), Some(4));
/// assert_eq!(expectations.expected_for(Fixture::Mycielski4), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConformanceExpectations {
    sample_5: Option<usize>,
    mycielski_3: Option<usize>,
    mycielski_4: Option<usize>,
    greedy_adversarial_7: Option<usize>,
}

impl ConformanceExpectations {
    /// Creates expectations with the algorithm's color count on the
    /// adversarial instance.
    #[must_use]
    pub const fn new(greedy_adversarial_7: usize) -> Self {
        Self {
            sample_5: Some(Fixture::Sample5.chromatic_number()),
            mycielski_3: Some(Fixture::Mycielski3.chromatic_number()),
            mycielski_4: Some(Fixture::Mycielski4.chromatic_number()),
            greedy_adversarial_7: Some(greedy_adversarial_7),
        }
    }

    /// Overrides the expectation for `fixture`; `None` checks validity only.
    #[must_use]
    pub const fn with_expected(mut self, fixture: Fixture, expected: Option<usize>) -> Self {
        match fixture {
            Fixture::Sample5 => self.sample_5 = expected,
            Fixture::Mycielski3 => self.mycielski_3 = expected,
            Fixture::Mycielski4 => self.mycielski_4 = expected,
            Fixture::GreedyAdversarial7 => self.greedy_adversarial_7 = expected,
        }
        self
    }

    #[must_use]
    pub const fn expected_for(&self, fixture: Fixture) -> Option<usize> {
        match fixture {
            Fixture::Sample5 => self.sample_5,
            Fixture::Mycielski3 => self.mycielski_3,
            Fixture::Mycielski4 => self.mycielski_4,
            Fixture::GreedyAdversarial7 => self.greedy_adversarial_7,
        }
    }
}
