//! Graph binding with a lazily computed, memoised coloring.

use std::sync::OnceLock;

use crate::{
    coloring::Coloring,
    graph::{Graph, VertexId},
};

#[derive(Debug)]
pub(super) struct BoundGraph<'g, V> {
    graph: &'g Graph<V>,
    coloring: OnceLock<Coloring<V>>,
}

impl<'g, V: VertexId> BoundGraph<'g, V> {
    pub(super) fn new(graph: &'g Graph<V>) -> Self {
        Self {
            graph,
            coloring: OnceLock::new(),
        }
    }

    pub(super) fn graph(&self) -> &'g Graph<V> {
        self.graph
    }

    pub(super) fn get_or_compute(&self, compute: fn(&Graph<V>) -> Coloring<V>) -> &Coloring<V> {
        self.coloring.get_or_init(|| compute(self.graph))
    }
}
