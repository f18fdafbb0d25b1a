//! Irodori core library: graphs, generators, coloring strategies and the
//! oracle that checks them.
//!
//! Data flows one way: a fixture or generator builds a [`Graph`], a
//! [`ColoringAlgorithm`] bound to it produces a [`Coloring`], and a
//! [`ColoringValidator`] checks the result. The [`conformance`](crate::ConformanceSuite)
//! harness wires these together over the reference scenarios.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod algorithm;
mod coloring;
mod conformance;
mod error;
pub mod fixtures;
mod generate;
mod graph;
#[cfg(test)]
mod test_utils;
mod validate;

pub use crate::{
    algorithm::{
        BacktrackingColoring, ColoringAlgorithm, GreedyColoring, LargestDegreeFirstColoring,
        SaturationDegreeColoring,
    },
    coloring::Coloring,
    conformance::{
        ConformanceExpectations, ConformanceInstances, ConformanceReport, ConformanceSuite,
        ConformanceSuiteBuilder, ExecutionStrategy, RandomTrials, RandomTrialsBuilder, Scenario,
        ScenarioOutcome, SeedPolicy,
    },
    error::{
        ColoringInvariantCode, ColoringInvariantViolation, ConformanceError,
        ConformanceErrorCode, GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode,
        Result,
    },
    generate::{CompleteGraphGenerator, GnpRandomGraphGenerator, derive_trial_seed, entropy_seed},
    graph::{EdgeId, Graph, VertexId},
    validate::{ColoringInvariant, ColoringValidator},
};
