use crate::error::{Result, SpanTreeError};
use crate::types::Weight;

/// Square adjacency matrix with an explicit absent-edge marker.
///
/// `get(i, j) == None` means there is no edge between `i` and `j`, or that
/// the cell has been consumed by the tree builder. Any `Some(w)` is a live
/// edge, including `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    num_nodes: usize,
    cells: Vec<Option<Weight>>,
}

impl AdjacencyMatrix {
    /// Build from rows of raw weights where `0` means "no edge".
    pub fn from_weights(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|w| (w > 0).then_some(w)).collect())
            .collect();
        Self::from_entries(rows)
    }

    /// Build from rows of explicit entries. Rows must all have length `rows.len()`.
    pub fn from_entries(rows: Vec<Vec<Option<Weight>>>) -> Result<Self> {
        let num_nodes = rows.len();
        if num_nodes == 0 {
            return Err(SpanTreeError::InvalidGraph("matrix has no rows".into()));
        }
        let mut cells = Vec::with_capacity(num_nodes * num_nodes);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != num_nodes {
                return Err(SpanTreeError::InvalidGraph(format!(
                    "row {} has {} entries, expected {num_nodes}",
                    i + 1,
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(AdjacencyMatrix { num_nodes, cells })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.num_nodes + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Weight> {
        self.cells[self.offset(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Option<Weight>) {
        let idx = self.offset(row, col);
        self.cells[idx] = value;
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> &[Option<Weight>] {
        let start = self.offset(row, 0);
        &self.cells[start..start + self.num_nodes]
    }

    /// Iterate `(row, weight)` over the live entries of one column.
    pub fn column(&self, col: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        (0..self.num_nodes).filter_map(move |row| self.get(row, col).map(|w| (row, w)))
    }

    /// Check symmetry and an empty diagonal.
    pub fn validate(&self) -> Result<()> {
        for i in 0..self.num_nodes {
            if let Some(w) = self.get(i, i) {
                return Err(SpanTreeError::InvalidGraph(format!(
                    "node {} has a self-loop of cost {w}",
                    i + 1
                )));
            }
            for j in (i + 1)..self.num_nodes {
                if self.get(i, j) != self.get(j, i) {
                    return Err(SpanTreeError::InvalidGraph(format!(
                        "matrix is not symmetric at ({}, {}): {} vs {}",
                        i + 1,
                        j + 1,
                        describe(self.get(i, j)),
                        describe(self.get(j, i)),
                    )));
                }
            }
        }
        Ok(())
    }

    /// Consume `row` so it never acts as a destination again, and drop the
    /// mirrored cell `(mirror_col, row)` of the edge that was just taken.
    pub fn mark_row_visited(&mut self, row: usize, mirror_col: usize) {
        let start = self.offset(row, 0);
        self.cells[start..start + self.num_nodes].fill(None);
        self.set(mirror_col, row, None);
    }

    /// Remove an undirected edge in both directions.
    pub fn clear_edge(&mut self, a: usize, b: usize) {
        self.set(a, b, None);
        self.set(b, a, None);
    }

    /// Whether any live entry remains.
    pub fn has_edges(&self) -> bool {
        self.cells.iter().any(Option::is_some)
    }
}

fn describe(entry: Option<Weight>) -> String {
    match entry {
        Some(w) => w.to_string(),
        None => "none".to_string(),
    }
}
