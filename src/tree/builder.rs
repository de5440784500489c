use log::{debug, warn};

use crate::error::{Result, SpanTreeError};
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::store::GraphStore;
use crate::tree::edge::TreeEdge;
use crate::types::{TotalWeight, Weight};

/// Construction phase of a `SpanningTreeBuilder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected yet; the next step picks the globally cheapest edge.
    Seed,
    /// Each step attaches one new node to the connected set.
    Grow,
    /// `N - 1` edges recorded.
    Done,
}

/// A finished minimum spanning tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimumSpanningTree {
    pub num_nodes: usize,
    /// Edges in selection order.
    pub edges: Vec<TreeEdge>,
    /// Nodes in the order they joined the tree.
    pub connected: Vec<usize>,
    pub total_cost: TotalWeight,
}

impl MinimumSpanningTree {
    /// `(source, destination, cost)` triples with 1-based node ids.
    pub fn edge_triples(&self) -> Vec<(usize, usize, Weight)> {
        self.edges.iter().map(TreeEdge::labels).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Greedy matrix-scanning tree builder.
///
/// Every step rescans the columns of all connected nodes for the cheapest
/// live entry, then consumes the chosen row in the working matrix so the
/// node cannot be picked again. Ties go to the first entry met in scan
/// order, which decides the reported edges and therefore the alternatives.
pub struct SpanningTreeBuilder {
    working: AdjacencyMatrix,
    phase: Phase,
    connected: Vec<usize>,
    in_tree: Vec<bool>,
    edges: Vec<TreeEdge>,
}

impl SpanningTreeBuilder {
    pub fn new(store: &GraphStore) -> Self {
        Self::from_matrix(store.working_copy())
    }

    /// Start from an already validated working buffer.
    pub fn from_matrix(working: AdjacencyMatrix) -> Self {
        let n = working.num_nodes();
        SpanningTreeBuilder {
            working,
            phase: if n < 2 { Phase::Done } else { Phase::Seed },
            connected: Vec::with_capacity(n),
            in_tree: vec![false; n],
            edges: Vec::with_capacity(n.saturating_sub(1)),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn connected(&self) -> &[usize] {
        &self.connected
    }

    fn required_edges(&self) -> usize {
        self.working.num_nodes().saturating_sub(1)
    }

    fn disconnected(&self) -> SpanTreeError {
        warn!(
            "graph is disconnected after {} of {} edges",
            self.edges.len(),
            self.required_edges()
        );
        SpanTreeError::DisconnectedGraph {
            found: self.edges.len(),
            required: self.required_edges(),
        }
    }

    fn join(&mut self, node: usize) {
        debug_assert!(!self.in_tree[node], "node {node} joined the tree twice");
        self.in_tree[node] = true;
        self.connected.push(node);
    }

    fn record(&mut self, edge: TreeEdge) {
        self.edges.push(edge);
        self.phase = if self.edges.len() == self.required_edges() {
            Phase::Done
        } else {
            Phase::Grow
        };
    }

    /// SEED: take the smallest live entry of the whole matrix, scanning
    /// row-major. Both endpoints join the tree.
    pub fn seed_first_edge(&mut self) -> Result<TreeEdge> {
        let n = self.working.num_nodes();
        let mut best: Option<(usize, usize, Weight)> = None;
        for row in 0..n {
            for (col, entry) in self.working.row(row).iter().enumerate() {
                if let Some(w) = *entry {
                    if best.is_none_or(|(_, _, b)| w < b) {
                        best = Some((row, col, w));
                    }
                }
            }
        }
        let Some((row, col, cost)) = best else {
            return Err(self.disconnected());
        };

        self.working.mark_row_visited(row, col);
        // The destination is in the tree too; its row must never be selected.
        self.working.mark_row_visited(col, row);
        self.join(row);
        self.join(col);

        let edge = TreeEdge::new(row, col, cost);
        debug!("seed edge {edge}");
        self.record(edge);
        Ok(edge)
    }

    /// GROW: over the connected nodes as columns (in join order), find the
    /// smallest live entry; its row is the new node.
    pub fn select_min_incident_edge(&mut self) -> Result<TreeEdge> {
        let mut best: Option<(usize, usize, Weight)> = None;
        for &col in &self.connected {
            for (row, w) in self.working.column(col) {
                if best.is_none_or(|(_, _, b)| w < b) {
                    best = Some((row, col, w));
                }
            }
        }
        let Some((row, col, cost)) = best else {
            return Err(self.disconnected());
        };

        self.working.mark_row_visited(row, col);
        self.join(row);

        let edge = TreeEdge::new(col, row, cost);
        debug!("grow edge {edge}");
        self.record(edge);
        Ok(edge)
    }

    /// Advance one phase step. Returns `None` once the tree is complete.
    pub fn step(&mut self) -> Result<Option<TreeEdge>> {
        match self.phase {
            Phase::Seed => self.seed_first_edge().map(Some),
            Phase::Grow => self.select_min_incident_edge().map(Some),
            Phase::Done => Ok(None),
        }
    }

    /// Run SEED and GROW to completion.
    pub fn build(mut self) -> Result<MinimumSpanningTree> {
        while self.step()?.is_some() {}

        let total_cost = self.edges.iter().map(|e| TotalWeight::from(e.cost)).sum();
        let num_nodes = self.working.num_nodes();
        if num_nodes == 1 {
            self.connected.push(0);
        }
        Ok(MinimumSpanningTree {
            num_nodes,
            edges: self.edges,
            connected: self.connected,
            total_cost,
        })
    }
}
