//! Conformance harness: runs a coloring algorithm over every bundled
//! scenario and checks each result with [`crate::ColoringValidator`].
//!
//! Scenarios cover the fixed instances, the complete graph `K_20`, replayable
//! `G(20, 0.35)` trials from base seed 17, and the same number of trials from
//! an entropy-drawn seed. Graphs are instantiated once and may be reused to
//! compare several algorithms.
//!
//! # Examples
//! ```
//! use irodori_core::{
//!     ConformanceExpectations, ConformanceSuiteBuilder, GreedyColoring,
//!     SaturationDegreeColoring,
//! };
//!
//! let suite = ConformanceSuiteBuilder::new(ConformanceExpectations::new(4)).build()?;
//! let instances = suite.instantiate()?;
//!
//! let greedy = instances.run::<GreedyColoring<'_, usize>>()?;
//! assert_eq!(greedy.algorithm(), "greedy");
//! let dsatur = instances.run::<SaturationDegreeColoring<'_, usize>>()?;
//! assert_eq!(greedy.outcomes().len(), dsatur.outcomes().len());
//! # Ok::<(), irodori_core::ConformanceError>(())
//! ```

mod expectations;
mod report;
mod strategy;
mod suite;
mod trials;

use std::fmt;

use crate::fixtures::Fixture;

pub use self::{
    expectations::ConformanceExpectations,
    report::{ConformanceReport, ScenarioOutcome},
    strategy::ExecutionStrategy,
    suite::{ConformanceInstances, ConformanceSuite, ConformanceSuiteBuilder},
    trials::{RandomTrials, RandomTrialsBuilder, SeedPolicy},
};

/// Identifies one graph instance evaluated by the harness.
///
/// Random scenarios carry the per-trial seed; seeding
/// `rand::rngs::SmallRng` with it and calling
/// [`crate::GnpRandomGraphGenerator::generate`] replays the instance.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Scenario {
    /// A bundled fixed instance.
    Fixture(Fixture),
    /// The complete graph on `order` vertices.
    Complete {
        /// Number of vertices.
        order: usize,
    },
    /// A trial derived from a fixed base seed.
    SeededRandom {
        /// Trial index within its batch.
        trial: usize,
        /// Seed the trial graph was generated from.
        seed: u64,
    },
    /// A trial derived from an entropy-drawn base seed.
    UnseededRandom {
        /// Trial index within its batch.
        trial: usize,
        /// Seed the trial graph was generated from.
        seed: u64,
    },
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixture(fixture) => fixture.fmt(f),
            Self::Complete { order } => write!(f, "complete-{order}"),
            Self::SeededRandom { trial, seed } => {
                write!(f, "gnp-seeded#{trial} (seed {seed:#018x})")
            }
            Self::UnseededRandom { trial, seed } => {
                write!(f, "gnp-unseeded#{trial} (seed {seed:#018x})")
            }
        }
    }
}
