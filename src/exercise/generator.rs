use ahash::{HashSet, HashSetExt};
use rand::{seq::SliceRandom, Rng};

use crate::graphs::{edge::WeightedEdge, NodeId};

/// Random connected graph over `nodes`.
///
/// A path through all nodes in shuffled order keeps the graph connected when
/// its edges are read as undirected. Every other unordered pair gets an edge
/// with probability `connectivity`. Weights are uniform in
/// `min_weight..=max_weight`.
pub fn generate_graph<N: NodeId, R: Rng + ?Sized>(
    nodes: &[N],
    rng: &mut R,
    min_weight: u32,
    max_weight: u32,
    connectivity: f64,
) -> Vec<WeightedEdge<N>> {
    let mut edges = Vec::new();
    let mut connected = HashSet::new();

    let mut shuffled: Vec<usize> = (0..nodes.len()).collect();
    shuffled.shuffle(rng);
    for pair in shuffled.windows(2) {
        let (tail, head) = (pair[0], pair[1]);
        connected.insert((tail.min(head), tail.max(head)));
        edges.push(WeightedEdge::new(
            nodes[tail].clone(),
            nodes[head].clone(),
            i64::from(rng.gen_range(min_weight..=max_weight)),
        ));
    }

    for tail in 0..nodes.len() {
        for head in (tail + 1)..nodes.len() {
            if connected.contains(&(tail, head)) {
                continue;
            }
            if rng.gen_bool(connectivity) {
                edges.push(WeightedEdge::new(
                    nodes[tail].clone(),
                    nodes[head].clone(),
                    i64::from(rng.gen_range(min_weight..=max_weight)),
                ));
            }
        }
    }

    edges
}
