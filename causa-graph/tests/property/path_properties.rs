//! Property tests for causa-graph: enumeration, symmetry, and search.

use std::collections::HashSet;

use proptest::prelude::*;

use causa_core::config::AdjustmentConfig;
use causa_core::models::NodeId;
use causa_graph::{get_combinations, CausalGraph, Path};

/// Build a graph over `n` nodes. `directed == false` adds an undirected edge.
/// Later edges between an already adjacent pair are ignored by the graph.
fn build_graph(n: usize, edges: &[(usize, usize, bool)]) -> (CausalGraph, Vec<NodeId>) {
    let mut graph = CausalGraph::new();
    let ids: Vec<NodeId> = (0..n).map(|i| graph.add_node(format!("n{i}"))).collect();
    for &(a, b, directed) in edges {
        if a < n && b < n {
            if directed {
                graph.add_child(ids[a], ids[b]).unwrap();
            } else {
                graph.add_undirected(ids[a], ids[b]).unwrap();
            }
        }
    }
    (graph, ids)
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, bool)>> {
    prop::collection::vec((0..n, 0..n, prop::bool::weighted(0.8)), 0..n * 2)
}

// =============================================================================
// Every enumerated path is a valid simple walk between the endpoints
// =============================================================================
proptest! {
    #[test]
    fn enumerated_paths_are_simple(
        edges in edge_strategy(6),
        a in 0_usize..6,
        b in 0_usize..6,
    ) {
        let (graph, ids) = build_graph(6, &edges);
        let paths = graph.get_paths(ids[a], ids[b]).unwrap();
        if a == b {
            prop_assert!(paths.is_empty());
        }
        let mut seen = HashSet::new();
        for path in &paths {
            prop_assert_eq!(path.first(), ids[a]);
            prop_assert_eq!(path.last(), ids[b]);
            prop_assert!(Path::new(&graph, path.nodes()).is_ok(), "invalid walk {}", path);
            prop_assert!(seen.insert(path.nodes().to_vec()), "duplicate walk {}", path);
        }
    }
}

// =============================================================================
// Enumeration is deterministic and direction-independent as a set
// =============================================================================
proptest! {
    #[test]
    fn enumeration_is_deterministic_and_reversible(
        edges in edge_strategy(6),
        a in 0_usize..6,
        b in 0_usize..6,
    ) {
        let (graph, ids) = build_graph(6, &edges);
        let first = graph.get_paths(ids[a], ids[b]).unwrap();
        let second = graph.get_paths(ids[a], ids[b]).unwrap();
        prop_assert_eq!(
            first.iter().map(|p| p.nodes().to_vec()).collect::<Vec<_>>(),
            second.iter().map(|p| p.nodes().to_vec()).collect::<Vec<_>>()
        );

        let forward: HashSet<Path<'_>> = first.into_iter().collect();
        let backward: HashSet<Path<'_>> = graph.get_paths(ids[b], ids[a]).unwrap().into_iter().collect();
        prop_assert_eq!(forward, backward);
    }
}

// =============================================================================
// Reversal keeps equality and flips every arrow
// =============================================================================
proptest! {
    #[test]
    fn reverse_flips_edge_types(
        edges in edge_strategy(6),
        a in 0_usize..6,
        b in 0_usize..6,
    ) {
        let (graph, ids) = build_graph(6, &edges);
        for path in graph.get_paths(ids[a], ids[b]).unwrap() {
            let reversed = path.reverse();
            prop_assert_eq!(&reversed, &path);
            let mut flipped: Vec<_> = path.edge_types().unwrap().into_iter().map(|e| e.reversed()).collect();
            flipped.reverse();
            prop_assert_eq!(reversed.edge_types().unwrap(), flipped);
            prop_assert_eq!(reversed.colliders().unwrap().len(), path.colliders().unwrap().len());
        }
    }
}

// =============================================================================
// d-connection is symmetric, with and without conditioning
// =============================================================================
proptest! {
    #[test]
    fn d_connection_is_symmetric(
        edges in edge_strategy(6),
        a in 0_usize..6,
        b in 0_usize..6,
        given in prop::collection::vec(0_usize..6, 1..3),
    ) {
        let (graph, ids) = build_graph(6, &edges);
        let (x, y) = (ids[a], ids[b]);
        prop_assert_eq!(graph.is_d_connected(x, y).unwrap(), graph.is_d_connected(y, x).unwrap());

        let given: Vec<NodeId> = given.into_iter().map(|i| ids[i]).collect();
        prop_assert_eq!(
            graph.is_conditionally_d_connected(x, y, &given).unwrap(),
            graph.is_conditionally_d_connected(y, x, &given).unwrap()
        );
        prop_assert_eq!(
            graph.is_conditionally_d_separated(x, y, &given).unwrap(),
            !graph.is_conditionally_d_connected(x, y, &given).unwrap()
        );
    }
}

// =============================================================================
// Adjustment search only returns sets that satisfy the criterion
// =============================================================================
proptest! {
    #[test]
    fn adjustment_sets_satisfy_backdoor(
        edges in edge_strategy(5),
        max_set_size in 0_usize..3,
    ) {
        let (graph, ids) = build_graph(5, &edges);
        let (x, y) = (ids[0], ids[1]);
        let config = AdjustmentConfig { max_set_size, exclude_descendants: true };

        let sets = graph.find_backdoor_adjustment_sets(x, y, &ids, &config).unwrap();
        let descendants = graph.descendants(x).unwrap();
        for set in &sets {
            prop_assert!(!set.is_empty());
            prop_assert!(max_set_size == 0 || set.len() <= max_set_size);
            prop_assert!(!set.contains(&x) && !set.contains(&y));
            prop_assert!(set.iter().all(|n| !descendants.contains(n)));
            prop_assert!(graph.is_backdoor_criterion_satisfied(x, y, set).unwrap());
        }

        let minimal = graph.find_minimal_backdoor_adjustment_sets(x, y, &ids, &config).unwrap();
        for set in &minimal {
            prop_assert!(sets.contains(set));
        }
        prop_assert_eq!(sets.is_empty(), minimal.is_empty());
    }
}

// =============================================================================
// A satisfied frontdoor set intercepts every directed path
// =============================================================================
proptest! {
    #[test]
    fn frontdoor_set_intercepts_directed_paths(
        edges in edge_strategy(5),
        given in prop::collection::vec(2_usize..5, 1..3),
    ) {
        let (graph, ids) = build_graph(5, &edges);
        let (x, y) = (ids[0], ids[1]);
        let given: Vec<NodeId> = given.into_iter().map(|i| ids[i]).collect();

        if graph.is_frontdoor_criterion_satisfied(x, y, &given).unwrap() {
            for path in graph.get_paths(x, y).unwrap() {
                if path.is_directed_path(x, y).unwrap() {
                    prop_assert!(path.contains_any(&given), "unmediated path {}", path);
                }
            }
        }
    }
}

// =============================================================================
// Every non-empty subset appears exactly once
// =============================================================================
proptest! {
    #[test]
    fn combinations_cover_the_power_set(items in prop::collection::hash_set(0_u8..50, 0..8)) {
        let items: Vec<u8> = items.into_iter().collect();
        let combos = get_combinations(&items);
        prop_assert_eq!(combos.len(), (1_usize << items.len()) - 1);

        let unique: HashSet<Vec<u8>> = combos.iter().cloned().collect();
        prop_assert_eq!(unique.len(), combos.len());
    }
}
