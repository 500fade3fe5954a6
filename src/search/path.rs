use itertools::Itertools;
use serde::{Serialize, Serializer};

use crate::graphs::{
    edge::WeightedEdge, indexed_graph::IndexedGraph, Distance, EdgeDirection, Graph, NodeId,
    UNREACHABLE,
};

/// Serializes [`UNREACHABLE`] as `null` instead of `u64::MAX`.
pub fn serialize_distance<S: Serializer>(
    distance: &Distance,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if *distance == UNREACHABLE {
        serializer.serialize_none()
    } else {
        serializer.serialize_some(distance)
    }
}

/// Result of a single target query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShortestPath<N> {
    pub source: N,
    pub target: N,
    #[serde(serialize_with = "serialize_distance")]
    pub distance: Distance,
    /// Source first, target last. Empty if the target is unreachable.
    pub path: Vec<N>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<RelaxationEvent<N>>,
}

impl<N: NodeId> ShortestPath<N> {
    pub fn unreachable(source: N, target: N, events: Vec<RelaxationEvent<N>>) -> Self {
        ShortestPath {
            source,
            target,
            distance: UNREACHABLE,
            path: Vec::new(),
            events,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }

    /// Consecutive `(tail, head)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.path.iter().tuple_windows()
    }

    /// Sums the weights of the path's hops, looked up in `edges`. Parallel
    /// edges contribute their lightest weight. `None` if a hop has no edge or
    /// the path is empty.
    pub fn weight_in(
        &self,
        edges: &[WeightedEdge<N>],
        direction: EdgeDirection,
    ) -> Option<Distance> {
        if self.path.is_empty() {
            return None;
        }

        self.edges()
            .map(|(tail, head)| {
                edges
                    .iter()
                    .filter(|edge| {
                        (&edge.tail == tail && &edge.head == head)
                            || (direction == EdgeDirection::Undirected
                                && &edge.tail == head
                                && &edge.head == tail)
                    })
                    .filter_map(|edge| Distance::try_from(edge.weight).ok())
                    .min()
            })
            .sum()
    }
}

/// One accepted distance improvement, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelaxationEvent<N> {
    pub node: N,
    #[serde(serialize_with = "serialize_distance")]
    pub old_distance: Distance,
    pub new_distance: Distance,
    pub from: N,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DistanceEntry<N> {
    pub node: N,
    #[serde(serialize_with = "serialize_distance")]
    pub distance: Distance,
}

/// Distance of every node, in node set order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DistanceTable<N> {
    entries: Vec<DistanceEntry<N>>,
}

impl<N: NodeId> DistanceTable<N> {
    pub fn new(entries: Vec<DistanceEntry<N>>) -> Self {
        DistanceTable { entries }
    }

    /// Distance of `node`, [`UNREACHABLE`] if it was never reached or is not
    /// part of the table.
    pub fn get(&self, node: &N) -> Distance {
        self.entries
            .iter()
            .find(|entry| &entry.node == node)
            .map_or(UNREACHABLE, |entry| entry.distance)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PredecessorEntry<N> {
    pub node: N,
    pub predecessor: Option<N>,
}

/// Node that last improved each node's distance, in node set order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PredecessorTable<N> {
    entries: Vec<PredecessorEntry<N>>,
}

impl<N: NodeId> PredecessorTable<N> {
    pub fn new(entries: Vec<PredecessorEntry<N>>) -> Self {
        PredecessorTable { entries }
    }

    pub fn get(&self, node: &N) -> Option<&N> {
        self.entries
            .iter()
            .find(|entry| &entry.node == node)
            .and_then(|entry| entry.predecessor.as_ref())
    }
}

/// Check if a path is correct for the graph it was computed on.
pub fn validate_path<N: NodeId>(
    graph: &IndexedGraph<N>,
    path: &ShortestPath<N>,
) -> Result<(), String> {
    if !path.is_reachable() {
        if !path.path.is_empty() {
            return Err("unreachable target but path is not empty".to_string());
        }
        return Ok(());
    }

    // Ensure first and last node of path are source and target of request.
    if path.path.first() != Some(&path.source) {
        return Err("first node of path is not source of request".to_string());
    }
    if path.path.last() != Some(&path.target) {
        return Err("last node of path is not target of request".to_string());
    }

    // Check if there is an edge between consecutive path nodes.
    let mut true_cost: Distance = 0;
    for (tail, head) in path.edges() {
        let (Some(tail_vertex), Some(head_vertex)) = (graph.vertex(tail), graph.vertex(head))
        else {
            return Err(format!("path contains unknown node between {} and {}", tail, head));
        };
        let Some(weight) = graph.graph().get_weight(tail_vertex, head_vertex) else {
            return Err(format!("no edge between {} and {} found", tail, head));
        };
        true_cost += Distance::from(weight);
    }

    if path.distance != true_cost {
        return Err(format!(
            "wrong path weight: reported {} but edges sum to {}",
            path.distance, true_cost
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(nodes: &[&'static str], distance: Distance) -> ShortestPath<&'static str> {
        ShortestPath {
            source: nodes[0],
            target: nodes[nodes.len() - 1],
            distance,
            path: nodes.to_vec(),
            events: Vec::new(),
        }
    }

    #[test]
    fn edges_pairs_consecutive_nodes() {
        let path = path(&["A", "B", "C"], 6);
        let edges: Vec<_> = path.edges().collect();
        assert_eq!(edges, vec![(&"A", &"B"), (&"B", &"C")]);
    }

    #[test]
    fn weight_in_respects_direction() {
        let edges = vec![WeightedEdge::new("B", "A", 4), WeightedEdge::new("B", "C", 2)];
        let path = path(&["A", "B", "C"], 6);

        assert_eq!(path.weight_in(&edges, EdgeDirection::Undirected), Some(6));
        assert_eq!(path.weight_in(&edges, EdgeDirection::Directed), None);
    }

    #[test]
    fn unreachable_serializes_as_null() {
        let path = ShortestPath::unreachable("A", "B", Vec::new());
        let json = serde_json::to_value(&path).unwrap();

        assert_eq!(json["distance"], serde_json::Value::Null);
        assert_eq!(json["path"], serde_json::json!([]));
        assert!(json.get("events").is_none());
    }

    #[test]
    fn validate_path_detects_wrong_weight() {
        let graph = IndexedGraph::new(
            &["A", "B"],
            &[WeightedEdge::new("A", "B", 3)],
            EdgeDirection::Directed,
        )
        .unwrap();

        assert_eq!(validate_path(&graph, &path(&["A", "B"], 3)), Ok(()));
        assert!(validate_path(&graph, &path(&["A", "B"], 4)).is_err());
        assert!(validate_path(&graph, &path(&["B", "A"], 3)).is_err());
    }
}
