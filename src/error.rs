use thiserror::Error;

/// Errors surfaced by graph validation, tree construction and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanTreeError {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("graph is disconnected: found {found} of {required} tree edges")]
    DisconnectedGraph { found: usize, required: usize },

    #[error("no edges selected, cannot count alternative trees")]
    NoEdgesSelected,

    #[error("number of minimum spanning trees does not fit in 128 bits")]
    CountOverflow,

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SpanTreeError>;
