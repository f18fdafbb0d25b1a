//! Fixed benchmark instances with known chromatic numbers.
//!
//! Each builder is a pure function that returns a fresh graph, so scenarios
//! never share mutable fixture state. The Mycielski graphs come from Michael
//! Trick's coloring instance collection (`myciel3.col`, `myciel4.col`).

use std::fmt;

use crate::{error::GraphError, graph::Graph};

const SAMPLE_5_EDGES: &[(usize, usize)] = &[
    (1, 2),
    (1, 3),
    // Repeated on purpose: duplicate insertion must leave the edge set unchanged.
    (1, 3),
    (1, 4),
    (1, 5),
    (2, 3),
    (3, 4),
    (3, 5),
];

const MYCIELSKI_3_EDGES: &[(usize, usize)] = &[
    (1, 2),
    (1, 4),
    (1, 7),
    (1, 9),
    (2, 3),
    (2, 6),
    (2, 8),
    (3, 5),
    (3, 7),
    (3, 10),
    (4, 5),
    (4, 6),
    (4, 10),
    (5, 8),
    (5, 9),
    (6, 11),
    (7, 11),
    (8, 11),
    (9, 11),
    (10, 11),
];

const MYCIELSKI_4_EDGES: &[(usize, usize)] = &[
    (1, 2),
    (1, 4),
    (1, 7),
    (1, 9),
    (1, 13),
    (1, 15),
    (1, 18),
    (1, 20),
    (2, 3),
    (2, 6),
    (2, 8),
    (2, 12),
    (2, 14),
    (2, 17),
    (2, 19),
    (3, 5),
    (3, 7),
    (3, 10),
    (3, 13),
    (3, 16),
    (3, 18),
    (3, 21),
    (4, 5),
    (4, 6),
    (4, 10),
    (4, 12),
    (4, 16),
    (4, 17),
    (4, 21),
    (5, 8),
    (5, 9),
    (5, 14),
    (5, 15),
    (5, 19),
    (5, 20),
    (6, 11),
    (6, 13),
    (6, 15),
    (6, 22),
    (7, 11),
    (7, 12),
    (7, 14),
    (7, 22),
    (8, 11),
    (8, 13),
    (8, 16),
    (8, 22),
    (9, 11),
    (9, 12),
    (9, 16),
    (9, 22),
    (10, 11),
    (10, 14),
    (10, 15),
    (10, 22),
    (11, 17),
    (11, 18),
    (11, 19),
    (11, 20),
    (11, 21),
    (12, 23),
    (13, 23),
    (14, 23),
    (15, 23),
    (16, 23),
    (17, 23),
    (18, 23),
    (19, 23),
    (20, 23),
    (21, 23),
    (22, 23),
];

const GREEDY_ADVERSARIAL_7_EDGES: &[(usize, usize)] = &[
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 3),
    (2, 5),
    (4, 6),
    (4, 7),
    (5, 6),
    (5, 7),
    (6, 7),
];

fn build(order: usize, edges: &[(usize, usize)]) -> Result<Graph<usize>, GraphError> {
    let mut graph = Graph::new();
    graph.add_vertices(1..=order);
    for &(first, second) in edges {
        graph.add_edge(first, second)?;
    }
    Ok(graph)
}

/// Five vertices, seven distinct edges (`1-3` is inserted twice), chromatic
/// number 3.
///
/// # Errors
/// Never fails for the bundled edge list; the [`GraphError`] is propagated
/// from [`Graph::add_edge`].
///
/// # Examples
/// ```
/// use irodori_core::fixtures;
///
/// let graph = fixtures::sample_5()?;
/// assert_eq!(graph.vertex_count(), 5);
/// assert_eq!(graph.edge_count(), 7);
/// # Ok::<(), irodori_core::GraphError>(())
/// ```
pub fn sample_5() -> Result<Graph<usize>, GraphError> {
    build(5, SAMPLE_5_EDGES)
}

/// Grötzsch graph (`myciel3`): 11 vertices, 20 edges, triangle-free,
/// chromatic number 4.
///
/// # Errors
/// Never fails for the bundled edge list.
pub fn mycielski_3() -> Result<Graph<usize>, GraphError> {
    build(11, MYCIELSKI_3_EDGES)
}

/// Mycielski transform of the Grötzsch graph (`myciel4`): 23 vertices, 71
/// edges, triangle-free, chromatic number 5.
///
/// # Errors
/// Never fails for the bundled edge list.
pub fn mycielski_4() -> Result<Graph<usize>, GraphError> {
    build(23, MYCIELSKI_4_EDGES)
}

/// Seven vertices, ten edges, chromatic number 3.
///
/// First-fit in insertion order and DSatur both need four colors here.
/// How many colors a particular strategy uses is a property of that
/// strategy, not of the graph.
///
/// # Errors
/// Never fails for the bundled edge list.
pub fn greedy_adversarial_7() -> Result<Graph<usize>, GraphError> {
    build(7, GREEDY_ADVERSARIAL_7_EDGES)
}

/// Enumerates the bundled fixed instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fixture {
    /// See [`sample_5`].
    Sample5,
    /// See [`mycielski_3`].
    Mycielski3,
    /// See [`mycielski_4`].
    Mycielski4,
    /// See [`greedy_adversarial_7`].
    GreedyAdversarial7,
}

impl Fixture {
    /// Every fixture, in increasing size.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Sample5,
            Self::GreedyAdversarial7,
            Self::Mycielski3,
            Self::Mycielski4,
        ]
    }

    /// Builds the fixture's graph.
    ///
    /// # Errors
    /// Propagates [`GraphError`] from the underlying builder.
    pub fn build(self) -> Result<Graph<usize>, GraphError> {
        match self {
            Self::Sample5 => sample_5(),
            Self::Mycielski3 => mycielski_3(),
            Self::Mycielski4 => mycielski_4(),
            Self::GreedyAdversarial7 => greedy_adversarial_7(),
        }
    }

    /// The fixture's chromatic number.
    #[must_use]
    pub const fn chromatic_number(self) -> usize {
        match self {
            Self::Sample5 | Self::GreedyAdversarial7 => 3,
            Self::Mycielski3 => 4,
            Self::Mycielski4 => 5,
        }
    }

    /// Short stable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sample5 => "sample-5",
            Self::Mycielski3 => "mycielski-3",
            Self::Mycielski4 => "mycielski-4",
            Self::GreedyAdversarial7 => "greedy-adversarial-7",
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
