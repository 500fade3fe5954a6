use graphs::{edge::WeightedEdge, NodeId};
use search::{engine::ShortestPathEngine, path::ShortestPath};

pub mod error;
pub mod exercise;
pub mod graphs;
pub mod search;
pub mod utility;

/// Undirected single target query with default options.
pub fn shortest_path<N: NodeId>(
    nodes: &[N],
    edges: &[WeightedEdge<N>],
    source: &N,
    target: &N,
) -> error::Result<ShortestPath<N>> {
    ShortestPathEngine::default().single_target(nodes, edges, source, target)
}
