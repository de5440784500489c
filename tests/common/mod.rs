#![allow(dead_code)]

use rspantree::types::Weight;

/// Six-node reference graph.
pub fn reference_six() -> Vec<Vec<Weight>> {
    vec![
        vec![0, 1, 5, 7, 9, 0],
        vec![1, 0, 6, 4, 3, 0],
        vec![5, 6, 0, 5, 0, 10],
        vec![7, 4, 5, 0, 8, 3],
        vec![9, 3, 0, 8, 0, 0],
        vec![0, 0, 10, 3, 0, 0],
    ]
}

/// Ten-node reference graph with heavy weight ties.
pub fn reference_ten() -> Vec<Vec<Weight>> {
    vec![
        vec![0, 5, 0, 6, 0, 0, 0, 0, 0, 0],
        vec![5, 0, 5, 0, 5, 0, 0, 0, 0, 0],
        vec![0, 5, 0, 0, 0, 6, 0, 0, 0, 0],
        vec![6, 0, 0, 0, 5, 0, 6, 0, 0, 0],
        vec![0, 5, 0, 5, 0, 5, 0, 5, 0, 0],
        vec![0, 0, 6, 0, 5, 0, 0, 0, 6, 0],
        vec![0, 0, 0, 6, 0, 0, 0, 5, 0, 6],
        vec![0, 0, 0, 0, 5, 0, 5, 0, 5, 6],
        vec![0, 0, 0, 0, 0, 6, 0, 5, 0, 6],
        vec![0, 0, 0, 0, 0, 0, 6, 6, 6, 0],
    ]
}

/// A-B:1, B-C:2, A-C:3
pub fn triangle() -> Vec<Vec<Weight>> {
    vec![vec![0, 1, 3], vec![1, 0, 2], vec![3, 2, 0]]
}

/// 1-2-3-4-1, every edge costs 5.
pub fn square_cycle() -> Vec<Vec<Weight>> {
    vec![
        vec![0, 5, 0, 5],
        vec![5, 0, 5, 0],
        vec![0, 5, 0, 5],
        vec![5, 0, 5, 0],
    ]
}

/// Complete graph on `n` nodes with every edge costing `w`.
pub fn complete(n: usize, w: Weight) -> Vec<Vec<Weight>> {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 0 } else { w }).collect())
        .collect()
}
