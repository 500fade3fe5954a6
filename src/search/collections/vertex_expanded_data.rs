use crate::graphs::{Graph, Vertex};

/// Finalized ("expanded") vertices of a search.
pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
}

impl VertexExpandedDataVec {
    pub fn new(graph: &dyn Graph) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; graph.number_of_vertices() as usize],
        }
    }

    /// Marks `vertex` as expanded and returns whether it already was.
    pub fn expand(&mut self, vertex: Vertex) -> bool {
        let is_expanded = self.expanded[vertex as usize];
        self.expanded[vertex as usize] = true;
        is_expanded
    }
}
