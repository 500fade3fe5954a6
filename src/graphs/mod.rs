use std::{fmt::Debug, fmt::Display, hash::Hash};

use serde::{Deserialize, Serialize};

pub mod edge;
pub mod indexed_graph;
pub mod vec_vec_graph;

use edge::DirectedWeightedEdge;

pub type Vertex = u32;
pub type Weight = u32;
pub type Distance = u64;

/// Distance of every vertex that has not been reached from the source.
pub const UNREACHABLE: Distance = Distance::MAX;

/// Anything usable as a node identifier, e.g. `&str`, `String` or `u32`.
pub trait NodeId: Clone + Eq + Hash + Display + Debug {}

impl<T: Clone + Eq + Hash + Display + Debug> NodeId for T {}

/// How an input edge is turned into adjacency entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeDirection {
    /// Only `tail -> head` is traversable.
    Directed,
    /// Both `tail -> head` and `head -> tail` are traversable.
    #[default]
    Undirected,
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.out_edges(vertex).count() as u32)
            .sum::<u32>()
    }

    fn out_edges(
        &self,
        source: Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = DirectedWeightedEdge> + Send + '_>;

    fn get_weight(&self, tail: Vertex, head: Vertex) -> Option<Weight>;
}
