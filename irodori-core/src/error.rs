//! Error types for the irodori core library.
//!
//! Every public error enum carries a stable machine-readable code so harnesses
//! can classify failures without matching on display strings.

use std::fmt;

use thiserror::Error;

use crate::conformance::{ExecutionStrategy, Scenario};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex that has not been added to the graph.
    #[error("edge {first}-{second} references vertex {missing}, which is not in the graph")]
    InvalidEdge {
        /// First endpoint supplied by the caller.
        first: String,
        /// Second endpoint supplied by the caller.
        second: String,
        /// The endpoint that is absent from the vertex set.
        missing: String,
    },
    /// A self-loop was added to a graph that does not accept loops.
    #[error("self-loop on vertex {vertex} is not permitted in a simple graph")]
    SelfLoop {
        /// Vertex the loop was attached to.
        vertex: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex that has not been added to the graph.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
        /// A self-loop was added to a graph that does not accept loops.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

/// An error produced by the graph generators.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// The inclusion probability was outside `[0, 1]` or not a number.
    #[error("edge probability must lie in [0, 1] (got {got})")]
    InvalidProbability {
        /// The rejected probability.
        got: f64,
    },
    /// The vertex naming function returned the same identifier twice.
    #[error("vertex naming is not injective: index {index} produced duplicate vertex {vertex}")]
    DuplicateVertex {
        /// Position whose name collided with an earlier vertex.
        index: usize,
        /// The duplicated identifier.
        vertex: String,
    },
    /// Two generations with identical seed and parameters disagreed.
    #[error(
        "generator is not deterministic for seed {seed}: first run produced {first_edges} edge(s), second run {second_edges}"
    )]
    NonDeterministic {
        /// Seed shared by both runs.
        seed: u64,
        /// Edge count of the first run.
        first_edges: usize,
        /// Edge count of the second run.
        second_edges: usize,
    },
    /// Populating the target graph failed.
    #[error("failed to populate generated graph: {error}")]
    Graph {
        /// Underlying graph mutation error.
        #[source]
        error: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The inclusion probability was outside `[0, 1]` or not a number.
        InvalidProbability => InvalidProbability { .. } => "GENERATOR_INVALID_PROBABILITY",
        /// The vertex naming function returned the same identifier twice.
        DuplicateVertex => DuplicateVertex { .. } => "GENERATOR_DUPLICATE_VERTEX",
        /// Two generations with identical seed and parameters disagreed.
        NonDeterministic => NonDeterministic { .. } => "GENERATOR_NON_DETERMINISTIC",
        /// Populating the target graph failed.
        GraphFailure => Graph { .. } => "GENERATOR_GRAPH_FAILURE",
    }
}

impl From<GraphError> for GeneratorError {
    fn from(error: GraphError) -> Self {
        Self::Graph { error }
    }
}

/// Reports a coloring that breaks one of the structural invariants checked by
/// [`crate::ColoringValidator`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ColoringInvariantViolation {
    /// The coloring uses more colors than the graph has vertices.
    #[error("coloring uses {colors} color(s) but the graph has only {vertices} vertices")]
    ColorBudgetExceeded {
        /// Number of distinct colors in the coloring.
        colors: usize,
        /// Number of vertices in the graph.
        vertices: usize,
    },
    /// The coloring does not use the expected number of colors.
    #[error("expected {expected} color(s) but the coloring uses {actual}")]
    UnexpectedColorCount {
        /// Color count the caller expected.
        expected: usize,
        /// Color count the coloring reports.
        actual: usize,
    },
    /// A graph vertex has no color assigned.
    #[error("vertex {vertex} has no assigned color")]
    UncoloredVertex {
        /// The uncolored vertex.
        vertex: String,
    },
    /// The coloring assigns a color to a vertex the graph does not contain.
    #[error("vertex {vertex} is colored but does not belong to the graph")]
    UnknownVertex {
        /// The extraneous vertex.
        vertex: String,
    },
    /// A color lies outside `[0, n)`.
    #[error("vertex {vertex} has color {color}, outside the permitted range [0, {vertices})")]
    ColorOutOfRange {
        /// The offending vertex.
        vertex: String,
        /// The assigned color.
        color: usize,
        /// Number of vertices bounding the range.
        vertices: usize,
    },
    /// Both endpoints of an edge share a color.
    #[error("edge {first}-{second} joins two vertices colored {color}")]
    ConflictingEdge {
        /// First endpoint of the edge.
        first: String,
        /// Second endpoint of the edge.
        second: String,
        /// The shared color.
        color: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ColoringInvariantViolation`] variants.
    enum ColoringInvariantCode for ColoringInvariantViolation {
        /// The coloring uses more colors than the graph has vertices.
        ColorBudgetExceeded => ColorBudgetExceeded { .. } => "COLORING_COLOR_BUDGET_EXCEEDED",
        /// The coloring does not use the expected number of colors.
        UnexpectedColorCount => UnexpectedColorCount { .. } => "COLORING_UNEXPECTED_COLOR_COUNT",
        /// A graph vertex has no color assigned.
        UncoloredVertex => UncoloredVertex { .. } => "COLORING_UNCOLORED_VERTEX",
        /// The coloring assigns a color to a vertex the graph does not contain.
        UnknownVertex => UnknownVertex { .. } => "COLORING_UNKNOWN_VERTEX",
        /// A color lies outside `[0, n)`.
        ColorOutOfRange => ColorOutOfRange { .. } => "COLORING_COLOR_OUT_OF_RANGE",
        /// Both endpoints of an edge share a color.
        ConflictingEdge => ConflictingEdge { .. } => "COLORING_CONFLICTING_EDGE",
    }
}

/// Error type produced when configuring or running a [`crate::ConformanceSuite`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConformanceError {
    /// Random trials require at least one trial.
    #[error("random trials must run at least once (got {got})")]
    InvalidTrialCount {
        /// The rejected trial count.
        got: usize,
    },
    /// The random-trial generator rejected its parameters.
    #[error("invalid random trial parameters: {error}")]
    InvalidTrialParameters {
        /// Underlying generator error.
        #[source]
        error: GeneratorError,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// A fixed instance could not be constructed.
    #[error("failed to build instance for scenario {scenario}: {error}")]
    Instance {
        /// Scenario whose instance failed to build.
        scenario: Scenario,
        /// Underlying graph error.
        #[source]
        error: GraphError,
    },
    /// A generator rejected its parameters or failed to produce a graph.
    #[error("generator failed for scenario {scenario}: {error}")]
    Generator {
        /// Scenario whose generator failed.
        scenario: Scenario,
        /// Underlying generator error.
        #[source]
        error: GeneratorError,
    },
    /// The algorithm under test produced a coloring that broke an invariant.
    #[error("algorithm `{algorithm}` failed scenario {scenario}: {violation}")]
    Violation {
        /// Name of the algorithm under test.
        algorithm: &'static str,
        /// Scenario that exposed the violation.
        scenario: Scenario,
        /// The first violated invariant.
        #[source]
        violation: ColoringInvariantViolation,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConformanceError`] variants.
    enum ConformanceErrorCode for ConformanceError {
        /// Random trials require at least one trial.
        InvalidTrialCount => InvalidTrialCount { .. } => "CONFORMANCE_INVALID_TRIAL_COUNT",
        /// The random-trial generator rejected its parameters.
        InvalidTrialParameters => InvalidTrialParameters { .. } => "CONFORMANCE_INVALID_TRIAL_PARAMETERS",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "CONFORMANCE_BACKEND_UNAVAILABLE",
        /// A fixed instance could not be constructed.
        InstanceFailure => Instance { .. } => "CONFORMANCE_INSTANCE_FAILURE",
        /// A generator rejected its parameters or failed to produce a graph.
        GeneratorFailure => Generator { .. } => "CONFORMANCE_GENERATOR_FAILURE",
        /// The algorithm under test produced a coloring that broke an invariant.
        InvariantViolation => Violation { .. } => "CONFORMANCE_INVARIANT_VIOLATION",
    }
}

impl ConformanceError {
    /// Retrieve the inner [`ColoringInvariantCode`] when the failure was a
    /// coloring invariant violation.
    #[must_use]
    pub const fn violation_code(&self) -> Option<ColoringInvariantCode> {
        match self {
            Self::Violation { violation, .. } => Some(violation.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`GeneratorErrorCode`] when a generator failed or
    /// rejected its parameters.
    #[must_use]
    pub const fn generator_code(&self) -> Option<GeneratorErrorCode> {
        match self {
            Self::Generator { error, .. } | Self::InvalidTrialParameters { error } => {
                Some(error.code())
            }
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the conformance API.
pub type Result<T> = core::result::Result<T, ConformanceError>;
