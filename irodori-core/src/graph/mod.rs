//! Minimal undirected graph used to drive coloring algorithms.
//!
//! Vertices and edges are stored in insertion order so that order-sensitive
//! heuristics behave reproducibly. Edges have set semantics: inserting
//! `{u, v}` a second time, in either orientation, leaves the graph unchanged.

use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    hash::Hash,
};

use tracing::trace;

use crate::error::GraphError;

/// Capabilities required of a vertex identifier.
///
/// Implemented automatically for every type that is copyable, hashable,
/// totally ordered, and printable, so integer identifiers work out of the box.
pub trait VertexId: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> VertexId for T where T: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// Opaque handle to an edge stored in a [`Graph`].
///
/// Handles are dense, starting at zero in insertion order, and are only
/// meaningful for the graph that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Returns the position of this edge in insertion order.
    ///
    /// # Examples
    /// ```
    /// use irodori_core::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_vertices([1, 2]);
    /// graph.add_edge(1, 2)?;
    /// let id = graph.edge_ids().next().expect("one edge");
    /// assert_eq!(id.index(), 0);
    /// # Ok::<(), irodori_core::GraphError>(())
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Undirected graph with unique vertices and set-semantics edges.
///
/// # Examples
/// ```
/// use irodori_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_vertices([1, 2, 3]);
/// assert!(graph.add_edge(1, 2)?);
/// assert!(!graph.add_edge(2, 1)?);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.degree_of(1), Some(1));
/// # Ok::<(), irodori_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
    edge_lookup: HashMap<(usize, usize), EdgeId>,
    allows_self_loops: bool,
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> Graph<V> {
    /// Creates an empty simple graph that rejects self-loops.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            edge_lookup: HashMap::new(),
            allows_self_loops: false,
        }
    }

    /// Creates an empty graph that accepts self-loops.
    ///
    /// # Examples
    /// ```
    /// use irodori_core::Graph;
    ///
    /// let mut graph = Graph::with_self_loops();
    /// graph.add_vertex(7);
    /// assert!(graph.add_edge(7, 7)?);
    /// # Ok::<(), irodori_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn with_self_loops() -> Self {
        Self {
            allows_self_loops: true,
            ..Self::new()
        }
    }

    /// Returns whether the graph accepts self-loops.
    #[must_use]
    pub fn allows_self_loops(&self) -> bool {
        self.allows_self_loops
    }

    /// Adds `vertex`, returning `true` if it was not already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex, self.vertices.len());
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        true
    }

    /// Adds every vertex yielded by `vertices`, skipping ones already present.
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = V>) {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Adds the undirected edge `{first, second}`.
    ///
    /// Returns `Ok(true)` when a new edge was created and `Ok(false)` when the
    /// edge already existed.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] when either endpoint is absent and
    /// [`GraphError::SelfLoop`] when `first == second` and the graph does not
    /// accept loops.
    pub fn add_edge(&mut self, first: V, second: V) -> Result<bool, GraphError> {
        let first_idx = self.require_vertex(first, second, first)?;
        let second_idx = self.require_vertex(first, second, second)?;
        if first_idx == second_idx && !self.allows_self_loops {
            return Err(GraphError::SelfLoop {
                vertex: first.to_string(),
            });
        }

        let key = canonical(first_idx, second_idx);
        if self.edge_lookup.contains_key(&key) {
            trace!(%first, %second, "edge already present");
            return Ok(false);
        }

        let id = EdgeId(self.edges.len());
        self.edges.push((first_idx, second_idx));
        self.edge_lookup.insert(key, id);
        if let Some(neighbours) = self.adjacency.get_mut(first_idx) {
            neighbours.push(second_idx);
        }
        if first_idx != second_idx {
            if let Some(neighbours) = self.adjacency.get_mut(second_idx) {
                neighbours.push(first_idx);
            }
        }
        Ok(true)
    }

    fn require_vertex(&self, first: V, second: V, endpoint: V) -> Result<usize, GraphError> {
        self.index
            .get(&endpoint)
            .copied()
            .ok_or_else(|| GraphError::InvalidEdge {
                first: first.to_string(),
                second: second.to_string(),
                missing: endpoint.to_string(),
            })
    }

    /// Returns the vertices in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns whether `vertex` belongs to the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: V) -> bool {
        self.index.contains_key(&vertex)
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over edge handles in insertion order.
    pub fn edge_ids(&self) -> impl ExactSizeIterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Returns the endpoints of `edge` in the orientation they were added.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(V, V)> {
        let &(first, second) = self.edges.get(edge.0)?;
        Some((self.vertex_at(first)?, self.vertex_at(second)?))
    }

    /// Iterates over every edge's endpoints in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.edges.iter().filter_map(|&(first, second)| {
            Some((self.vertex_at(first)?, self.vertex_at(second)?))
        })
    }

    /// Returns the edge set as canonical `(min, max)` pairs.
    ///
    /// Two graphs with the same vertices and the same unordered edges produce
    /// equal edge sets regardless of insertion order or orientation.
    ///
    /// # Examples
    /// ```
    /// use irodori_core::Graph;
    ///
    /// let mut left = Graph::new();
    /// left.add_vertices([1, 2, 3]);
    /// left.add_edge(2, 1)?;
    /// left.add_edge(3, 2)?;
    ///
    /// let mut right = Graph::new();
    /// right.add_vertices([3, 2, 1]);
    /// right.add_edge(2, 3)?;
    /// right.add_edge(1, 2)?;
    ///
    /// assert_eq!(left.edge_set(), right.edge_set());
    /// # Ok::<(), irodori_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn edge_set(&self) -> BTreeSet<(V, V)> {
        self.edges()
            .map(|(first, second)| {
                if first <= second {
                    (first, second)
                } else {
                    (second, first)
                }
            })
            .collect()
    }

    /// Returns the handle of the edge `{first, second}` if present.
    #[must_use]
    pub fn edge_between(&self, first: V, second: V) -> Option<EdgeId> {
        let first_idx = self.index_of(first)?;
        let second_idx = self.index_of(second)?;
        self.edge_lookup
            .get(&canonical(first_idx, second_idx))
            .copied()
    }

    /// Returns whether the edge `{first, second}` is present.
    #[must_use]
    pub fn contains_edge(&self, first: V, second: V) -> bool {
        self.edge_between(first, second).is_some()
    }

    /// Returns the number of neighbours of `vertex`, or `None` if absent.
    #[must_use]
    pub fn degree_of(&self, vertex: V) -> Option<usize> {
        let idx = self.index_of(vertex)?;
        self.adjacency.get(idx).map(Vec::len)
    }

    /// Iterates over the neighbours of `vertex` in edge insertion order.
    ///
    /// Yields nothing when the vertex is absent.
    pub fn neighbours_of(&self, vertex: V) -> impl Iterator<Item = V> + '_ {
        self.index_of(vertex)
            .and_then(|idx| self.adjacency.get(idx))
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.vertex_at(idx))
    }

    pub(crate) fn index_of(&self, vertex: V) -> Option<usize> {
        self.index.get(&vertex).copied()
    }

    pub(crate) fn vertex_at(&self, idx: usize) -> Option<V> {
        self.vertices.get(idx).copied()
    }

    /// Neighbour positions of the vertex stored at `idx`.
    pub(crate) fn neighbour_indices(&self, idx: usize) -> &[usize] {
        self.adjacency.get(idx).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn degree_at(&self, idx: usize) -> usize {
        self.neighbour_indices(idx).len()
    }
}

const fn canonical(first: usize, second: usize) -> (usize, usize) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}
