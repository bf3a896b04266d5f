//! Tests for walk enumeration and embedded-walk subsumption.

use super::edge_store::EdgeStore;
use super::traversal::{enumerate_walks, subsume_embedded_walks, FlowAdjacency};
use super::types::EdgeCandidate;
use crate::config::TraversalConfig;
use crate::error::GraphError;

/// Builds a store from `(source, destination)` pairs; slot `i` is pair `i`.
fn build(edges: &[(&str, &str)]) -> EdgeStore {
    let mut store = EdgeStore::new();
    for &(src, dst) in edges {
        store.add(EdgeCandidate::new(src, dst)).unwrap();
    }
    store
}

fn sorted(mut walks: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    walks.sort();
    walks
}

fn walks(store: &EdgeStore, start: &str, target: &str, depth: usize) -> Vec<Vec<usize>> {
    sorted(enumerate_walks(store, start, target, depth, &TraversalConfig::default()).unwrap())
}

#[test]
fn test_outgoing_edges_grouped_by_destination() {
    // 0: A→B, 1: A→C, 2: A→B
    let store = build(&[("A", "B"), ("A", "C"), ("A", "B")]);
    let slots: Vec<usize> = store
        .outgoing_edges("A")
        .into_iter()
        .map(|(slot, _)| slot)
        .collect();
    assert_eq!(slots, vec![0, 2, 1]);
    assert!(store.outgoing_edges("Z").is_empty());
}

#[test]
fn test_linear_chain() {
    // A → B → C → D
    let store = build(&[("A", "B"), ("B", "C"), ("C", "D")]);
    assert_eq!(walks(&store, "A", "D", 3), vec![vec![0, 1, 2]]);
    assert!(walks(&store, "A", "D", 2).is_empty());
}

#[test]
fn test_zero_depth_yields_nothing() {
    let store = build(&[("A", "B")]);
    assert!(walks(&store, "A", "B", 0).is_empty());
}

#[test]
fn test_unknown_nodes_yield_nothing() {
    let store = build(&[("A", "B")]);
    assert!(walks(&store, "Z", "B", 3).is_empty());
    assert!(walks(&store, "A", "Z", 3).is_empty());
}

#[test]
fn test_branch_stops_at_first_arrival() {
    // A → T → X → T : the walk must not continue past T.
    let store = build(&[("A", "T"), ("T", "X"), ("X", "T")]);
    assert_eq!(walks(&store, "A", "T", 5), vec![vec![0]]);
}

#[test]
fn test_self_loops_are_never_taken() {
    // 0: A→A, 1: A→B, 2: B→B, 3: B→C
    let store = build(&[("A", "A"), ("A", "B"), ("B", "B"), ("B", "C")]);
    assert_eq!(walks(&store, "A", "C", 4), vec![vec![1, 3]]);
}

#[test]
fn test_self_loop_on_target_not_a_walk() {
    let store = build(&[("A", "A")]);
    assert!(walks(&store, "A", "A", 3).is_empty());
}

#[test]
fn test_parallel_edges_fan_out() {
    // 0,1: A→B (parallel), 2: B→C
    let store = build(&[("A", "B"), ("A", "B"), ("B", "C")]);
    assert_eq!(walks(&store, "A", "C", 2), vec![vec![0, 2], vec![1, 2]]);
}

#[test]
fn test_cycles_are_revisited_within_budget() {
    // 0: A→B, 1: B→A, 2: B→C
    let store = build(&[("A", "B"), ("B", "A"), ("B", "C")]);
    assert_eq!(walks(&store, "A", "C", 2), vec![vec![0, 2]]);
    assert_eq!(walks(&store, "A", "C", 4), vec![vec![0, 1, 0, 2], vec![0, 2]]);
}

#[test]
fn test_start_equal_to_target_closes_cycle() {
    // 0: A→B, 1: B→A
    let store = build(&[("A", "B"), ("B", "A")]);
    assert_eq!(walks(&store, "A", "A", 4), vec![vec![0, 1]]);
}

#[test]
fn test_depth_ceiling_rejected() {
    let store = build(&[("A", "B")]);
    let config = TraversalConfig::new(4, 100);
    let err = enumerate_walks(&store, "A", "B", 5, &config).unwrap_err();
    assert!(matches!(
        err,
        GraphError::DepthLimitExceeded {
            requested: 5,
            ceiling: 4
        }
    ));
    assert!(enumerate_walks(&store, "A", "B", 4, &config).is_ok());
}

#[test]
fn test_path_limit_rejected() {
    // Three parallel A→B edges: three walks.
    let store = build(&[("A", "B"), ("A", "B"), ("A", "B")]);
    let err = enumerate_walks(&store, "A", "B", 1, &TraversalConfig::new(8, 2)).unwrap_err();
    assert!(matches!(err, GraphError::PathLimitExceeded { limit: 2 }));
    assert_eq!(
        enumerate_walks(&store, "A", "B", 1, &TraversalConfig::new(8, 3))
            .unwrap()
            .len(),
        3
    );
}

#[test]
fn test_deep_budget_on_long_chain_does_not_recurse() {
    let names: Vec<String> = (0..=2_000).map(|i| format!("n{i}")).collect();
    let pairs: Vec<(&str, &str)> = names
        .windows(2)
        .map(|w| (w[0].as_str(), w[1].as_str()))
        .collect();
    let store = build(&pairs);
    let config = TraversalConfig::new(5_000, 10);

    let found = enumerate_walks(&store, "n0", "n2000", 2_000, &config).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].len(), 2_000);
}

#[test]
fn test_subsume_drops_tail_after_return_to_start() {
    // 0: A→B, 1: B→A, 2: B→C
    let store = build(&[("A", "B"), ("B", "A"), ("B", "C")]);
    let all = walks(&store, "A", "C", 4);
    let kept = sorted(subsume_embedded_walks(&store, "A", all));
    assert_eq!(kept, vec![vec![0, 1, 0, 2]]);
}

#[test]
fn test_subsume_keeps_unrelated_walks() {
    // Diamond: 0: A→B, 1: A→C, 2: B→D, 3: C→D
    let store = build(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    let all = walks(&store, "A", "D", 3);
    assert_eq!(all.len(), 2);
    let kept = subsume_embedded_walks(&store, "A", all.clone());
    assert_eq!(sorted(kept), all);
}
