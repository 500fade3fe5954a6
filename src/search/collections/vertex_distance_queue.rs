use std::{cmp::Reverse, collections::BinaryHeap};

use radix_heap::RadixHeapMap;

use crate::graphs::{Distance, Vertex};

/// A trait for a priority queue that manages vertices and their distances.
/// This trait is useful for graph algorithms that need to repeatedly retrieve
/// the vertex with the smallest distance (such as Dijkstra's algorithm).
///
/// None of the implementations support decrease key. A vertex is inserted
/// again whenever its distance improves and the stale entries are skipped by
/// the caller.
pub trait VertexDistanceQueue {
    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: Vertex, distance: Distance);

    /// Removes and returns the vertex with the smallest distance from the
    /// priority queue or none if the queue is empty.
    fn pop(&mut self) -> Option<(Vertex, Distance)>;
}

/// Binary heap ordered by `(distance, vertex)`, so equal distances pop the
/// smaller vertex first.
#[derive(Default)]
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Distance, Vertex)>>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.heap.push(Reverse((distance, vertex)));
    }

    fn pop(&mut self) -> Option<(Vertex, Distance)> {
        let Reverse((distance, vertex)) = self.heap.pop()?;

        Some((vertex, distance))
    }
}

/// Monotone radix heap. Inserted distances must never be smaller than the
/// last popped one, which holds for non-negative edge weights.
pub struct VertexDistanceQueueRadixHeap {
    heap: RadixHeapMap<Reverse<Distance>, Vertex>,
}

impl VertexDistanceQueueRadixHeap {
    pub fn new() -> Self {
        VertexDistanceQueueRadixHeap {
            heap: RadixHeapMap::new(),
        }
    }
}

impl Default for VertexDistanceQueueRadixHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueue for VertexDistanceQueueRadixHeap {
    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.heap.push(Reverse(distance), vertex);
    }

    fn pop(&mut self) -> Option<(Vertex, Distance)> {
        let (Reverse(distance), vertex) = self.heap.pop()?;

        Some((vertex, distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut dyn VertexDistanceQueue) -> Vec<(Vertex, Distance)> {
        std::iter::from_fn(|| queue.pop()).collect()
    }

    #[test]
    fn binary_heap_pops_ascending_with_vertex_tie_break() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(4, 7);
        queue.insert(2, 3);
        queue.insert(1, 3);
        queue.insert(2, 1);

        assert_eq!(drain(&mut queue), vec![(2, 1), (1, 3), (2, 3), (4, 7)]);
    }

    #[test]
    fn radix_heap_pops_ascending() {
        let mut queue = VertexDistanceQueueRadixHeap::new();
        queue.insert(0, 0);
        assert_eq!(queue.pop(), Some((0, 0)));

        queue.insert(3, 9);
        queue.insert(1, 4);
        queue.insert(2, 4);
        let popped = drain(&mut queue);
        let distances: Vec<_> = popped.iter().map(|&(_, distance)| distance).collect();
        assert_eq!(distances, vec![4, 4, 9]);
        assert_eq!(popped[2].0, 3);
    }

    #[test]
    fn default_queues_start_empty() {
        assert_eq!(VertexDistanceQueueBinaryHeap::default().pop(), None);
        assert_eq!(VertexDistanceQueueRadixHeap::default().pop(), None);
    }
}
