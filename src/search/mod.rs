use serde::{Deserialize, Serialize};

use crate::graphs::EdgeDirection;

pub mod collections;
pub mod dijkstra;
pub mod engine;
pub mod path;

/// When a single target query may stop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Stop once the target is popped from the frontier.
    #[default]
    StopAtTarget,
    /// Always drain the frontier, then reconstruct the path.
    Exhaustive,
}

/// Priority queue backing the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrontierKind {
    #[default]
    BinaryHeap,
    RadixHeap,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub direction: EdgeDirection,
    pub termination: Termination,
    pub record_events: bool,
    pub frontier: FrontierKind,
}

impl SearchOptions {
    pub fn directed(mut self) -> Self {
        self.direction = EdgeDirection::Directed;
        self
    }

    pub fn exhaustive(mut self) -> Self {
        self.termination = Termination::Exhaustive;
        self
    }

    pub fn with_events(mut self) -> Self {
        self.record_events = true;
        self
    }

    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }
}
