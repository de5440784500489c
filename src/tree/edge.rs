use std::fmt;

use crate::types::Weight;

/// An edge recorded into the spanning tree. Node indices are 0-based;
/// `labels()` and `Display` report them 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeEdge {
    pub source: usize,
    /// Node attached by this edge. For the seed, the column of the first minimum.
    pub destination: usize,
    pub cost: Weight,
}

impl TreeEdge {
    pub fn new(source: usize, destination: usize, cost: Weight) -> Self {
        TreeEdge { source, destination, cost }
    }

    /// `(source, destination, cost)` with 1-based node ids.
    pub fn labels(&self) -> (usize, usize, Weight) {
        (self.source + 1, self.destination + 1, self.cost)
    }
}

impl fmt::Display for TreeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node {} ==> Node {} : cost={}",
            self.source + 1,
            self.destination + 1,
            self.cost
        )
    }
}

/// A tied edge that could have replaced a chosen tree edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    pub source: usize,
    pub destination: usize,
    pub cost: Weight,
}

impl Alternative {
    pub fn labels(&self) -> (usize, usize, Weight) {
        (self.source + 1, self.destination + 1, self.cost)
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "An alternative edge is Node {} to Node {} : cost={}",
            self.source + 1,
            self.destination + 1,
            self.cost
        )
    }
}
