use rspantree::graph::{AdjacencyMatrix, GraphStore};
use rspantree::SpanTreeError;

fn invalid(rows: Vec<Vec<u32>>) -> String {
    let err = AdjacencyMatrix::from_weights(rows)
        .and_then(GraphStore::new)
        .unwrap_err();
    match err {
        SpanTreeError::InvalidGraph(reason) => reason,
        other => panic!("expected InvalidGraph, got {other:?}"),
    }
}

#[test]
fn store_size_matches_matrix() {
    let m = AdjacencyMatrix::from_weights(vec![vec![0, 2, 0], vec![2, 0, 1], vec![0, 1, 0]]).unwrap();
    let store = GraphStore::new(m).unwrap();
    assert_eq!(store.size(), 3);
    assert_eq!(store.original().get(1, 2), Some(1));
}

#[test]
fn empty_matrix_is_invalid() {
    assert!(invalid(vec![]).contains("no rows"));
}

#[test]
fn non_square_matrix_is_invalid() {
    let reason = invalid(vec![vec![0, 1], vec![1, 0, 2]]);
    assert!(reason.contains("row 2"), "{reason}");
}

#[test]
fn asymmetric_matrix_is_invalid() {
    let reason = invalid(vec![vec![0, 1, 0], vec![2, 0, 1], vec![0, 1, 0]]);
    assert!(reason.contains("not symmetric at (1, 2)"), "{reason}");
}

#[test]
fn one_sided_edge_is_invalid() {
    let reason = invalid(vec![vec![0, 4], vec![0, 0]]);
    assert!(reason.contains("4 vs none"), "{reason}");
}

#[test]
fn diagonal_edge_is_invalid() {
    let reason = invalid(vec![vec![0, 1], vec![1, 3]]);
    assert!(reason.contains("node 2 has a self-loop"), "{reason}");
}

#[test]
fn mark_row_visited_clears_row_and_mirror_cell() {
    let mut m = AdjacencyMatrix::from_weights(vec![
        vec![0, 1, 2],
        vec![1, 0, 3],
        vec![2, 3, 0],
    ])
    .unwrap();
    m.mark_row_visited(1, 0);

    assert!(m.row(1).iter().all(Option::is_none));
    assert_eq!(m.get(0, 1), None);
    // Other cells of column 1 survive.
    assert_eq!(m.get(2, 1), Some(3));
    assert_eq!(m.get(0, 2), Some(2));
}

#[test]
fn copies_are_independent_of_the_original() {
    let m = AdjacencyMatrix::from_weights(vec![vec![0, 1], vec![1, 0]]).unwrap();
    let store = GraphStore::new(m).unwrap();

    let mut working = store.working_copy();
    working.mark_row_visited(0, 1);
    assert!(!working.has_edges());

    let report = store.report_copy();
    assert_eq!(report.get(0, 1), Some(1));
    assert_eq!(store.original().get(1, 0), Some(1));
}

#[test]
fn explicit_entries_keep_zero_weight_edges() {
    let m = AdjacencyMatrix::from_entries(vec![
        vec![None, Some(0)],
        vec![Some(0), None],
    ])
    .unwrap();
    assert!(GraphStore::new(m.clone()).is_ok());
    assert_eq!(m.get(0, 1), Some(0));
    assert!(m.has_edges());
}
