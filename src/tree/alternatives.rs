use log::debug;

use crate::error::{Result, SpanTreeError};
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::store::GraphStore;
use crate::tree::builder::MinimumSpanningTree;
use crate::tree::edge::{Alternative, TreeEdge};
use crate::types::{TreeCount, Weight};

/// Alternatives found for one chosen tree edge.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeAlternatives {
    pub edge: TreeEdge,
    pub alternatives: Vec<Alternative>,
}

impl EdgeAlternatives {
    /// Choices available at this step: the chosen edge plus its ties.
    pub fn choices(&self) -> u64 {
        1 + self.alternatives.len() as u64
    }

    /// Human-readable alternative descriptions.
    pub fn descriptions(&self) -> Vec<String> {
        self.alternatives.iter().map(ToString::to_string).collect()
    }
}

/// Outcome of the REPORT phase.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternativeReport {
    /// One entry per tree edge, in selection order.
    pub per_edge: Vec<EdgeAlternatives>,
    pub choice_list: Vec<u64>,
    pub total_trees: TreeCount,
}

impl AlternativeReport {
    /// Alternatives recorded for `edge`, if it belongs to the tree.
    pub fn alternatives_for(&self, edge: &TreeEdge) -> Option<&[Alternative]> {
        self.per_edge
            .iter()
            .find(|e| e.edge == *edge)
            .map(|e| e.alternatives.as_slice())
    }
}

/// Product of a choice list.
///
/// An empty list is an error rather than the empty product, and overflow
/// is reported instead of wrapping.
pub fn total_tree_count(choice_list: &[u64]) -> Result<TreeCount> {
    if choice_list.is_empty() {
        return Err(SpanTreeError::NoEdgesSelected);
    }
    choice_list.iter().try_fold(1 as TreeCount, |acc, &c| {
        acc.checked_mul(TreeCount::from(c))
            .ok_or(SpanTreeError::CountOverflow)
    })
}

/// Column scanned for ties of the `step`-th tree edge.
///
/// A GROW edge scans the node it attached (its destination). The seed edge
/// scans its source, the row of the first minimum.
pub fn counted_column(step: usize, edge: &TreeEdge) -> usize {
    if step == 0 { edge.source } else { edge.destination }
}

/// Counts tied edges per chosen tree edge on an untouched matrix copy.
///
/// This is a local approximation: a tie only counts when it ends at the
/// column picked by `counted_column`, and each matching cell is consumed so
/// a later edge on the same column cannot count it again. It is not an
/// exact count of all minimum-weight spanning trees.
pub struct AlternativeCounter {
    copy: AdjacencyMatrix,
    choice_list: Vec<u64>,
}

impl AlternativeCounter {
    pub fn new(store: &GraphStore, tree: &MinimumSpanningTree) -> Self {
        Self::from_matrix(store.report_copy(), tree)
    }

    /// Take ownership of a report buffer. Every tree edge is removed from it
    /// first, so a chosen edge is never its own alternative.
    pub fn from_matrix(mut copy: AdjacencyMatrix, tree: &MinimumSpanningTree) -> Self {
        for e in &tree.edges {
            copy.clear_edge(e.source, e.destination);
        }
        AlternativeCounter {
            copy,
            choice_list: Vec::with_capacity(tree.edges.len()),
        }
    }

    pub fn choice_list(&self) -> &[u64] {
        &self.choice_list
    }

    /// Scan `destination`'s column for entries equal to `cost`, consume each
    /// match, and append `1 + matches` to the choice list.
    ///
    /// Fails with `InvalidGraph` if `destination` is not a node of the graph.
    pub fn count_alternatives(&mut self, destination: usize, cost: Weight) -> Result<Vec<Alternative>> {
        let num_nodes = self.copy.num_nodes();
        if destination >= num_nodes {
            return Err(SpanTreeError::InvalidGraph(format!(
                "node {} is outside the {num_nodes}-node graph",
                destination + 1
            )));
        }
        let matches: Vec<usize> = self
            .copy
            .column(destination)
            .filter(|&(_, w)| w == cost)
            .map(|(row, _)| row)
            .collect();

        let mut alternatives = Vec::with_capacity(matches.len());
        for row in matches {
            self.copy.set(row, destination, None);
            let alt = Alternative { source: row, destination, cost };
            debug!("{alt}");
            alternatives.push(alt);
        }
        self.choice_list.push(1 + alternatives.len() as u64);
        Ok(alternatives)
    }

    /// Count alternatives for every tree edge in selection order.
    pub fn run(mut self, tree: &MinimumSpanningTree) -> Result<AlternativeReport> {
        if tree.edges.is_empty() {
            return Err(SpanTreeError::NoEdgesSelected);
        }
        let mut per_edge = Vec::with_capacity(tree.edges.len());
        for (step, &edge) in tree.edges.iter().enumerate() {
            let alternatives = self.count_alternatives(counted_column(step, &edge), edge.cost)?;
            per_edge.push(EdgeAlternatives { edge, alternatives });
        }
        let total_trees = total_tree_count(&self.choice_list)?;
        Ok(AlternativeReport {
            per_edge,
            choice_list: self.choice_list,
            total_trees,
        })
    }
}
