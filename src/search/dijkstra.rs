use tracing::trace;

use super::collections::{
    dijkstra_data::DijkstraData, vertex_distance_queue::VertexDistanceQueue,
    vertex_expanded_data::VertexExpandedDataVec,
};
use crate::graphs::{Distance, Graph, Vertex};

/// One accepted distance improvement, in vertex space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexRelaxation {
    pub vertex: Vertex,
    pub old_distance: Distance,
    pub new_distance: Distance,
    pub predecessor: Vertex,
}

/// Runs until the queue is exhausted. Afterwards `data` holds the final
/// distance and predecessor of every vertex reachable from `source`.
pub fn dijkstra_single_source(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut VertexExpandedDataVec,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
    mut events: Option<&mut Vec<VertexRelaxation>>,
) {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some((tail, _)) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }

        relax_out_edges(graph, data, queue, tail, events.as_deref_mut());
    }
}

/// Stops as soon as `target` is popped from the queue, its distance is final
/// at that point.
pub fn dijkstra_single_pair(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut VertexExpandedDataVec,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
    target: Vertex,
    mut events: Option<&mut Vec<VertexRelaxation>>,
) {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some((tail, _)) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }
        if tail == target {
            break;
        }

        relax_out_edges(graph, data, queue, tail, events.as_deref_mut());
    }
}

fn relax_out_edges(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    queue: &mut dyn VertexDistanceQueue,
    tail: Vertex,
    mut events: Option<&mut Vec<VertexRelaxation>>,
) {
    let distance_tail = data.get_distance(tail);

    for edge in graph.out_edges(tail) {
        let current_distance_head = data.get_distance(edge.head());
        let alternative_distance_head = distance_tail + Distance::from(edge.weight());
        if alternative_distance_head < current_distance_head {
            trace!(
                vertex = edge.head(),
                old = current_distance_head,
                new = alternative_distance_head,
                via = tail,
                "relaxed"
            );
            data.set_distance(edge.head(), alternative_distance_head);
            data.set_predecessor(edge.head(), tail);
            queue.insert(edge.head(), alternative_distance_head);

            if let Some(events) = events.as_deref_mut() {
                events.push(VertexRelaxation {
                    vertex: edge.head(),
                    old_distance: current_distance_head,
                    new_distance: alternative_distance_head,
                    predecessor: tail,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::{edge::DirectedWeightedEdge, vec_vec_graph::VecVecGraph, UNREACHABLE},
        search::collections::{
            dijkstra_data::DijkstraDataVec, vertex_distance_queue::VertexDistanceQueueBinaryHeap,
        },
    };

    fn line_graph() -> VecVecGraph {
        // 0 -> 1 -> 2 -> 3, vertex 4 isolated
        let mut graph = VecVecGraph::with_vertices(5);
        for (tail, head, weight) in [(0, 1, 2), (1, 2, 2), (2, 3, 2)] {
            graph.add_edge(&DirectedWeightedEdge::new(tail, head, weight).unwrap());
        }
        graph
    }

    #[test]
    fn single_source_reaches_everything_reachable() {
        let graph = line_graph();
        let mut data = DijkstraDataVec::new(&graph);
        let mut expanded = VertexExpandedDataVec::new(&graph);
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        let mut events = Vec::new();

        dijkstra_single_source(
            &graph,
            &mut data,
            &mut expanded,
            &mut queue,
            0,
            Some(&mut events),
        );

        assert_eq!(data.distances, vec![0, 2, 4, 6, UNREACHABLE]);
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            VertexRelaxation {
                vertex: 1,
                old_distance: UNREACHABLE,
                new_distance: 2,
                predecessor: 0
            }
        );
    }

    #[test]
    fn single_pair_stops_at_target() {
        let graph = line_graph();
        let mut data = DijkstraDataVec::new(&graph);
        let mut expanded = VertexExpandedDataVec::new(&graph);
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        dijkstra_single_pair(&graph, &mut data, &mut expanded, &mut queue, 0, 1, None);

        assert_eq!(data.get_distance(1), 2);
        // 1 was never expanded, so 2 was never relaxed.
        assert_eq!(data.get_distance(2), UNREACHABLE);
    }
}
