use std::fmt;

use log::info;

use crate::driver::matrix_parse::parse_matrix;
use crate::error::Result;
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::store::GraphStore;
use crate::tree::alternatives::{AlternativeCounter, AlternativeReport};
use crate::tree::builder::{MinimumSpanningTree, SpanningTreeBuilder};
use crate::types::{TotalWeight, TreeCount, Weight};

/// Public-facing solver wrapping a validated `GraphStore`.
pub struct SpanningTreeSolver {
    store: GraphStore,
}

impl SpanningTreeSolver {
    pub fn new(matrix: AdjacencyMatrix) -> Result<Self> {
        Ok(SpanningTreeSolver {
            store: GraphStore::new(matrix)?,
        })
    }

    /// Build from raw weight rows where `0` means "no edge".
    pub fn from_weights(rows: Vec<Vec<Weight>>) -> Result<Self> {
        Self::new(AdjacencyMatrix::from_weights(rows)?)
    }

    /// Build from matrix text (see `parse_matrix`).
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(parse_matrix(text)?)
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Build the tree only, without counting alternatives.
    pub fn minimum_spanning_tree(&self) -> Result<MinimumSpanningTree> {
        SpanningTreeBuilder::new(&self.store).build()
    }

    /// Build the tree, then count alternatives on a fresh report copy.
    /// Each call works on new buffers, so repeated calls agree.
    pub fn solve(&self) -> Result<Solution> {
        let tree = self.minimum_spanning_tree()?;
        let report = AlternativeCounter::new(&self.store, &tree).run(&tree)?;
        info!(
            "solved {} nodes: cost {}, {} minimum spanning trees",
            tree.num_nodes, tree.total_cost, report.total_trees
        );
        Ok(Solution { tree, report })
    }
}

/// Tree plus alternative report for one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub tree: MinimumSpanningTree,
    pub report: AlternativeReport,
}

impl Solution {
    pub fn edge_triples(&self) -> Vec<(usize, usize, Weight)> {
        self.tree.edge_triples()
    }

    pub fn total_cost(&self) -> TotalWeight {
        self.tree.total_cost
    }

    pub fn total_trees(&self) -> TreeCount {
        self.report.total_trees
    }

    pub fn choice_list(&self) -> &[u64] {
        &self.report.choice_list
    }

    /// Alternative descriptions per tree edge, in selection order.
    pub fn alternative_descriptions(&self) -> Vec<Vec<String>> {
        self.report.per_edge.iter().map(|e| e.descriptions()).collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.tree.edges {
            writeln!(f, "{edge}")?;
        }
        writeln!(f)?;
        writeln!(f, "Minimum Cost is {}", self.tree.total_cost)?;
        write!(f, "There are {} total Minimum Spanning Trees.", self.report.total_trees)?;
        for entry in self.report.per_edge.iter().filter(|e| !e.alternatives.is_empty()) {
            let (s, d, c) = entry.edge.labels();
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "The chosen edge was: Node {s} to Node {d} : cost={c}")?;
            for alt in &entry.alternatives {
                writeln!(f)?;
                write!(f, "{alt}")?;
            }
        }
        Ok(())
    }
}
