//! Vertex coloring produced by a [`crate::ColoringAlgorithm`].

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::VertexId;

/// Assignment of a non-negative color to each vertex.
///
/// The number of distinct colors is derived once on construction. A coloring
/// is immutable after it has been produced.
///
/// # Examples
/// ```
/// use irodori_core::Coloring;
///
/// let coloring = Coloring::from_assignments([(1, 0), (2, 1), (3, 0)]);
/// assert_eq!(coloring.color_count(), 2);
/// assert_eq!(coloring.color_of(2), Some(1));
/// assert_eq!(coloring.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring<V> {
    colors: BTreeMap<V, usize>,
    color_count: usize,
}

impl<V: VertexId> Coloring<V> {
    /// Builds a coloring from `(vertex, color)` pairs.
    ///
    /// A later pair for the same vertex replaces the earlier one.
    #[must_use]
    pub fn from_assignments(assignments: impl IntoIterator<Item = (V, usize)>) -> Self {
        let colors: BTreeMap<V, usize> = assignments.into_iter().collect();
        let color_count = colors.values().collect::<BTreeSet<_>>().len();
        Self {
            colors,
            color_count,
        }
    }

    /// Returns the color assigned to `vertex`.
    #[must_use]
    pub fn color_of(&self, vertex: V) -> Option<usize> {
        self.colors.get(&vertex).copied()
    }

    /// Returns the full vertex-to-color map.
    #[must_use]
    pub fn colors(&self) -> &BTreeMap<V, usize> {
        &self.colors
    }

    /// Returns the number of distinct colors used.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    /// Returns the number of colored vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns whether no vertex is colored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Groups vertices by color.
    ///
    /// # Examples
    /// ```
    /// use irodori_core::Coloring;
    ///
    /// let coloring = Coloring::from_assignments([(1, 0), (2, 1), (3, 0)]);
    /// let classes = coloring.color_classes();
    /// assert_eq!(classes.get(&0), Some(&vec![1, 3]));
    /// assert_eq!(classes.get(&1), Some(&vec![2]));
    /// ```
    #[must_use]
    pub fn color_classes(&self) -> BTreeMap<usize, Vec<V>> {
        let mut classes: BTreeMap<usize, Vec<V>> = BTreeMap::new();
        for (&vertex, &color) in &self.colors {
            classes.entry(color).or_default().push(vertex);
        }
        classes
    }
}

impl<V: VertexId> FromIterator<(V, usize)> for Coloring<V> {
    fn from_iter<I: IntoIterator<Item = (V, usize)>>(iter: I) -> Self {
        Self::from_assignments(iter)
    }
}
