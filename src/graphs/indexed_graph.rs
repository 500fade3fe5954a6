use ahash::{HashMap, HashMapExt};

use super::{
    edge::{DirectedWeightedEdge, WeightedEdge},
    vec_vec_graph::VecVecGraph,
    EdgeDirection, NodeId, Vertex, Weight,
};
use crate::error::{InvalidInput, Result};

/// A validated graph over caller-chosen node identifiers.
///
/// Node identifiers are mapped to contiguous vertices in the order they were
/// given, all searches run on the flat [`VecVecGraph`] underneath.
pub struct IndexedGraph<N: NodeId> {
    nodes: Vec<N>,
    index: HashMap<N, Vertex>,
    graph: VecVecGraph,
}

impl<N: NodeId> IndexedGraph<N> {
    /// Validates the whole input before building any adjacency. A single bad
    /// node or edge rejects the call.
    pub fn new(
        nodes: &[N],
        edges: &[WeightedEdge<N>],
        direction: EdgeDirection,
    ) -> Result<IndexedGraph<N>> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (vertex, node) in nodes.iter().enumerate() {
            if index.insert(node.clone(), vertex as Vertex).is_some() {
                return Err(InvalidInput::DuplicateNode {
                    node: node.to_string(),
                });
            }
        }

        let mut validated = Vec::with_capacity(edges.len());
        for (position, edge) in edges.iter().enumerate() {
            let unknown = |node: &N| InvalidInput::UnknownEdgeEndpoint {
                index: position,
                tail: edge.tail.to_string(),
                head: edge.head.to_string(),
                node: node.to_string(),
            };
            let tail = *index.get(&edge.tail).ok_or_else(|| unknown(&edge.tail))?;
            let head = *index.get(&edge.head).ok_or_else(|| unknown(&edge.head))?;

            if edge.weight < 0 {
                return Err(InvalidInput::NegativeWeight {
                    index: position,
                    tail: edge.tail.to_string(),
                    head: edge.head.to_string(),
                    weight: edge.weight,
                });
            }
            let weight = Weight::try_from(edge.weight).map_err(|_| {
                InvalidInput::WeightOutOfRange {
                    index: position,
                    tail: edge.tail.to_string(),
                    head: edge.head.to_string(),
                    weight: edge.weight,
                    max: Weight::MAX,
                }
            })?;

            validated.push((tail, head, weight));
        }

        let mut graph = VecVecGraph::with_vertices(nodes.len() as u32);
        for (tail, head, weight) in validated {
            // Self-loops are filtered here.
            let Some(edge) = DirectedWeightedEdge::new(tail, head, weight) else {
                continue;
            };
            graph.add_edge(&edge);
            if direction == EdgeDirection::Undirected {
                graph.add_edge(&edge.reversed());
            }
        }

        Ok(IndexedGraph {
            nodes: nodes.to_vec(),
            index,
            graph,
        })
    }

    pub fn vertex(&self, node: &N) -> Option<Vertex> {
        self.index.get(node).copied()
    }

    pub fn node(&self, vertex: Vertex) -> &N {
        &self.nodes[vertex as usize]
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn graph(&self) -> &VecVecGraph {
        &self.graph
    }

    pub fn source_vertex(&self, source: &N) -> Result<Vertex> {
        self.vertex(source).ok_or_else(|| InvalidInput::UnknownSource {
            node: source.to_string(),
        })
    }

    pub fn target_vertex(&self, target: &N) -> Result<Vertex> {
        self.vertex(target).ok_or_else(|| InvalidInput::UnknownTarget {
            node: target.to_string(),
        })
    }
}
