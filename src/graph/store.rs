use crate::error::Result;
use crate::graph::matrix::AdjacencyMatrix;

/// Owns the validated input matrix and hands out the scratch buffers each
/// phase mutates.
///
/// The tree builder gets a working copy it consumes row by row; the
/// alternative counter gets its own untouched copy. Both are fresh clones,
/// so the original is never modified and a store can be solved repeatedly.
#[derive(Debug, Clone)]
pub struct GraphStore {
    original: AdjacencyMatrix,
}

impl GraphStore {
    pub fn new(matrix: AdjacencyMatrix) -> Result<Self> {
        matrix.validate()?;
        Ok(GraphStore { original: matrix })
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.original.num_nodes()
    }

    pub fn original(&self) -> &AdjacencyMatrix {
        &self.original
    }

    /// Buffer for the SEED/GROW phases.
    pub fn working_copy(&self) -> AdjacencyMatrix {
        self.original.clone()
    }

    /// Buffer for the REPORT phase.
    pub fn report_copy(&self) -> AdjacencyMatrix {
        self.original.clone()
    }
}
