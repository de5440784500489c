pub mod types;
pub mod error;
pub mod graph;
pub mod tree;
pub mod driver;

pub use driver::solver::{Solution, SpanningTreeSolver};
pub use error::{Result, SpanTreeError};
