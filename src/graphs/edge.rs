use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

/// Edge as handed in by callers. The weight is signed so that negative
/// weights can be reported instead of silently wrapping.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge<N> {
    pub tail: N,
    pub head: N,
    pub weight: i64,
}

impl<N> WeightedEdge<N> {
    pub fn new(tail: N, head: N, weight: i64) -> WeightedEdge<N> {
        WeightedEdge { tail, head, weight }
    }
}

impl<N> From<(N, N, i64)> for WeightedEdge<N> {
    fn from((tail, head, weight): (N, N, i64)) -> Self {
        WeightedEdge::new(tail, head, weight)
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Debug)]
pub struct DirectedWeightedEdge {
    tail: Vertex,
    head: Vertex,
    weight: Weight,
}

impl DirectedWeightedEdge {
    /// Returns `None` for self-loops, they can never shorten a path.
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> Option<DirectedWeightedEdge> {
        if tail == head {
            return None;
        }

        Some(DirectedWeightedEdge { head, tail, weight })
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn reversed(&self) -> DirectedWeightedEdge {
        DirectedWeightedEdge {
            head: self.tail,
            tail: self.head,
            weight: self.weight,
        }
    }

    pub fn tailless(&self) -> DirectedTaillessWeightedEdge {
        DirectedTaillessWeightedEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectedTaillessWeightedEdge {
    head: Vertex,
    weight: Weight,
}

impl DirectedTaillessWeightedEdge {
    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn set_tail(&self, tail: Vertex) -> Option<DirectedWeightedEdge> {
        DirectedWeightedEdge::new(tail, self.head, self.weight)
    }
}
