pub mod matrix;
pub mod store;

pub use matrix::AdjacencyMatrix;
pub use store::GraphStore;
