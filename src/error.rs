use thiserror::Error;

pub type Result<T> = std::result::Result<T, InvalidInput>;

/// Rejected input. Raised before any search work starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("source node {node} is not part of the node set")]
    UnknownSource { node: String },

    #[error("target node {node} is not part of the node set")]
    UnknownTarget { node: String },

    #[error("node {node} appears more than once in the node set")]
    DuplicateNode { node: String },

    /// Edge at position `index` of the edge list references a node that is
    /// not part of the node set.
    #[error("edge #{index} ({tail} -> {head}) references unknown node {node}")]
    UnknownEdgeEndpoint {
        index: usize,
        tail: String,
        head: String,
        node: String,
    },

    #[error("edge #{index} ({tail} -> {head}) has negative weight {weight}")]
    NegativeWeight {
        index: usize,
        tail: String,
        head: String,
        weight: i64,
    },

    #[error("edge #{index} ({tail} -> {head}) has weight {weight} which exceeds {max}")]
    WeightOutOfRange {
        index: usize,
        tail: String,
        head: String,
        weight: i64,
        max: u32,
    },
}
