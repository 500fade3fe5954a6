use tracing::debug;

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec},
        vertex_distance_queue::{
            VertexDistanceQueue, VertexDistanceQueueBinaryHeap, VertexDistanceQueueRadixHeap,
        },
        vertex_expanded_data::VertexExpandedDataVec,
    },
    dijkstra::{dijkstra_single_pair, dijkstra_single_source, VertexRelaxation},
    path::{
        DistanceEntry, DistanceTable, PredecessorEntry, PredecessorTable, RelaxationEvent,
        ShortestPath,
    },
    FrontierKind, SearchOptions, Termination,
};
use crate::{
    error::Result,
    graphs::{
        edge::WeightedEdge, indexed_graph::IndexedGraph, Distance, NodeId, Vertex, UNREACHABLE,
    },
};

/// Dijkstra over small graphs given as node and edge lists.
///
/// Every call validates its input, builds fresh tables and keeps nothing
/// around afterwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestPathEngine {
    options: SearchOptions,
}

impl ShortestPathEngine {
    pub fn new(options: SearchOptions) -> Self {
        ShortestPathEngine { options }
    }

    /// Distances from `source` to every node. Always runs until the frontier
    /// is exhausted, the termination option is ignored.
    pub fn all_destinations<N: NodeId>(
        &self,
        nodes: &[N],
        edges: &[WeightedEdge<N>],
        source: &N,
    ) -> Result<AllDestinations<N>> {
        let graph = IndexedGraph::new(nodes, edges, self.options.direction)?;
        let source_vertex = graph.source_vertex(source)?;

        let (data, relaxations) = self.search(&graph, source_vertex, None);
        let events = to_events(&graph, &relaxations);

        debug!(
            source = %source,
            nodes = nodes.len(),
            edges = edges.len(),
            relaxations = relaxations.len(),
            "all destinations search finished"
        );

        Ok(AllDestinations {
            graph,
            source: source.clone(),
            data,
            events,
        })
    }

    /// Distance and one shortest path from `source` to `target`. An
    /// unreachable target is a regular result, not an error.
    pub fn single_target<N: NodeId>(
        &self,
        nodes: &[N],
        edges: &[WeightedEdge<N>],
        source: &N,
        target: &N,
    ) -> Result<ShortestPath<N>> {
        let graph = IndexedGraph::new(nodes, edges, self.options.direction)?;
        let source_vertex = graph.source_vertex(source)?;
        let target_vertex = graph.target_vertex(target)?;

        let stop_at = match self.options.termination {
            Termination::StopAtTarget => Some(target_vertex),
            Termination::Exhaustive => None,
        };
        let (data, relaxations) = self.search(&graph, source_vertex, stop_at);
        let events = to_events(&graph, &relaxations);

        let path = node_path(&graph, &data, source_vertex, target_vertex, events);

        debug!(
            source = %source,
            target = %target,
            distance = ?path.is_reachable().then_some(path.distance),
            hops = path.path.len().saturating_sub(1),
            "single target search finished"
        );

        Ok(path)
    }

    fn search<N: NodeId>(
        &self,
        graph: &IndexedGraph<N>,
        source: Vertex,
        target: Option<Vertex>,
    ) -> (DijkstraDataVec, Vec<VertexRelaxation>) {
        let mut data = DijkstraDataVec::new(graph.graph());
        let mut expanded = VertexExpandedDataVec::new(graph.graph());
        let mut queue: Box<dyn VertexDistanceQueue> = match self.options.frontier {
            FrontierKind::BinaryHeap => Box::new(VertexDistanceQueueBinaryHeap::new()),
            FrontierKind::RadixHeap => Box::new(VertexDistanceQueueRadixHeap::new()),
        };

        let mut relaxations = Vec::new();
        let events = self.options.record_events.then_some(&mut relaxations);

        match target {
            Some(target) => dijkstra_single_pair(
                graph.graph(),
                &mut data,
                &mut expanded,
                queue.as_mut(),
                source,
                target,
                events,
            ),
            None => dijkstra_single_source(
                graph.graph(),
                &mut data,
                &mut expanded,
                queue.as_mut(),
                source,
                events,
            ),
        }

        (data, relaxations)
    }
}

/// Outcome of a search to all destinations.
pub struct AllDestinations<N: NodeId> {
    graph: IndexedGraph<N>,
    source: N,
    data: DijkstraDataVec,
    events: Vec<RelaxationEvent<N>>,
}

impl<N: NodeId> AllDestinations<N> {
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Distance of `node`, [`UNREACHABLE`] if it was never reached or is not
    /// part of the graph.
    pub fn distance(&self, node: &N) -> Distance {
        self.graph
            .vertex(node)
            .map_or(UNREACHABLE, |vertex| self.data.get_distance(vertex))
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node) != UNREACHABLE
    }

    pub fn predecessor(&self, node: &N) -> Option<&N> {
        let vertex = self.graph.vertex(node)?;
        self.data
            .get_predecessor(vertex)
            .map(|predecessor| self.graph.node(predecessor))
    }

    /// Shortest path to `target`, empty if it is unreachable.
    pub fn path_to(&self, target: &N) -> ShortestPath<N> {
        match (self.graph.vertex(&self.source), self.graph.vertex(target)) {
            (Some(source), Some(target_vertex)) => {
                node_path(&self.graph, &self.data, source, target_vertex, Vec::new())
            }
            _ => ShortestPath::unreachable(self.source.clone(), target.clone(), Vec::new()),
        }
    }

    pub fn distance_table(&self) -> DistanceTable<N> {
        DistanceTable::new(
            self.graph
                .nodes()
                .iter()
                .enumerate()
                .map(|(vertex, node)| DistanceEntry {
                    node: node.clone(),
                    distance: self.data.get_distance(vertex as Vertex),
                })
                .collect(),
        )
    }

    pub fn predecessor_table(&self) -> PredecessorTable<N> {
        PredecessorTable::new(
            self.graph
                .nodes()
                .iter()
                .enumerate()
                .map(|(vertex, node)| PredecessorEntry {
                    node: node.clone(),
                    predecessor: self
                        .data
                        .get_predecessor(vertex as Vertex)
                        .map(|predecessor| self.graph.node(predecessor).clone()),
                })
                .collect(),
        )
    }

    /// Relaxations in the order they happened. Empty unless recording was
    /// enabled.
    pub fn events(&self) -> &[RelaxationEvent<N>] {
        &self.events
    }
}

fn node_path<N: NodeId>(
    graph: &IndexedGraph<N>,
    data: &dyn DijkstraData,
    source: Vertex,
    target: Vertex,
    events: Vec<RelaxationEvent<N>>,
) -> ShortestPath<N> {
    let source_node = graph.node(source).clone();
    let target_node = graph.node(target).clone();

    match data.get_path(target) {
        Some(path) if path.vertices.first() == Some(&source) => ShortestPath {
            source: source_node,
            target: target_node,
            distance: path.distance,
            path: path
                .vertices
                .iter()
                .map(|&vertex| graph.node(vertex).clone())
                .collect(),
            events,
        },
        _ => ShortestPath::unreachable(source_node, target_node, events),
    }
}

fn to_events<N: NodeId>(
    graph: &IndexedGraph<N>,
    relaxations: &[VertexRelaxation],
) -> Vec<RelaxationEvent<N>> {
    relaxations
        .iter()
        .map(|relaxation| RelaxationEvent {
            node: graph.node(relaxation.vertex).clone(),
            old_distance: relaxation.old_distance,
            new_distance: relaxation.new_distance,
            from: graph.node(relaxation.predecessor).clone(),
        })
        .collect()
}
