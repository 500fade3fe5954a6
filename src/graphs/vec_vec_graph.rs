use serde::{Deserialize, Serialize};

use super::{
    edge::{DirectedTaillessWeightedEdge, DirectedWeightedEdge},
    Graph, Vertex, Weight,
};

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct VecVecGraph {
    edges: Vec<Vec<DirectedTaillessWeightedEdge>>,
}

impl VecVecGraph {
    pub fn with_vertices(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Inserts `edge`. If tail and head are already connected the lighter
    /// weight is kept.
    pub fn add_edge(&mut self, edge: &DirectedWeightedEdge) {
        // Ensure the edge endpoints are within the bounds of self.edges.
        let max_edge_endpoint = std::cmp::max(edge.tail(), edge.head()) as usize;
        if max_edge_endpoint >= self.edges.len() {
            self.edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        let edges_sharing_tail = &mut self.edges[edge.tail() as usize];

        // Heads are kept sorted, so the position doubles as the lookup.
        match edges_sharing_tail.binary_search_by_key(&edge.head(), |other| other.head()) {
            Ok(index) => {
                if edge.weight() < edges_sharing_tail[index].weight() {
                    edges_sharing_tail[index].set_weight(edge.weight());
                }
            }
            Err(index) => edges_sharing_tail.insert(index, edge.tailless()),
        }
    }
}

impl Graph for VecVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn out_edges(
        &self,
        tail: Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = DirectedWeightedEdge> + Send + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, DirectedTaillessWeightedEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = DirectedWeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                // Self-loops never get inserted, so set_tail always succeeds.
                self.edge_iter
                    .by_ref()
                    .find_map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edge_iter = self
            .edges
            .get(tail as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter();

        Box::new(EdgeIterator { edge_iter, tail })
    }

    fn get_weight(&self, tail: Vertex, head: Vertex) -> Option<Weight> {
        let edges_sharing_tail = self.edges.get(tail as usize)?;

        let edge_index = edges_sharing_tail
            .binary_search_by_key(&head, |tailless_edge| tailless_edge.head())
            .ok()?;

        Some(edges_sharing_tail[edge_index].weight())
    }
}
