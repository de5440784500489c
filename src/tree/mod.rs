pub mod alternatives;
pub mod builder;
pub mod edge;

pub use alternatives::{AlternativeCounter, AlternativeReport, EdgeAlternatives};
pub use builder::{MinimumSpanningTree, Phase, SpanningTreeBuilder};
pub use edge::{Alternative, TreeEdge};
