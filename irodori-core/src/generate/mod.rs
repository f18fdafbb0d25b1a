//! Graph generators producing coloring instances.
//!
//! Generators never read ambient randomness: the random generator takes the
//! caller's source as an explicit `&mut` borrow for the duration of a single
//! call, so identical seeds replay identical graphs.

mod complete;
mod gnp;
mod seed;

use crate::{
    error::{GeneratorError, GraphError},
    graph::{Graph, VertexId},
};

pub use self::{
    complete::CompleteGraphGenerator,
    gnp::GnpRandomGraphGenerator,
    seed::{derive_trial_seed, entropy_seed},
};

/// Adds `order` vertices named by `naming`, rejecting non-injective namings.
fn add_named_vertices<V: VertexId>(
    graph: &mut Graph<V>,
    order: usize,
    mut naming: impl FnMut(usize) -> V,
) -> Result<Vec<V>, GeneratorError> {
    let mut names = Vec::with_capacity(order);
    for index in 0..order {
        let vertex = naming(index);
        if !graph.add_vertex(vertex) {
            return Err(GeneratorError::DuplicateVertex {
                index,
                vertex: vertex.to_string(),
            });
        }
        names.push(vertex);
    }
    Ok(names)
}

fn add_edge<V: VertexId>(graph: &mut Graph<V>, first: V, second: V) -> Result<(), GraphError> {
    graph.add_edge(first, second).map(|_| ())
}
