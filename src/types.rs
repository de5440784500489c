/// Cost of a single edge.
pub type Weight = u32;
/// Sum of edge costs across a tree.
pub type TotalWeight = u64;
/// Number of minimum spanning trees reported by the alternative counter.
pub type TreeCount = u128;
