//! Property tests over randomly generated edge sets.
//!
//! Node values are clamped to a small span so generated graphs are dense
//! enough to contain cycles, parallel edges, and multiple components.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use edgewise::prelude::*;
use quickcheck_macros::quickcheck;

const NODE_SPAN: u8 = 10;

fn clamp(edges: &[(u8, u8)]) -> Vec<(u8, u8)> {
    edges
        .iter()
        .map(|&(u, v)| (u % NODE_SPAN, v % NODE_SPAN))
        .collect()
}

fn build_undirected(edges: &[(u8, u8)]) -> AdjacencyListGraph<u8, Undirected> {
    let mut graph = AdjacencyListGraph::new();
    for &(u, v) in edges {
        graph.add_edge(u, v);
    }
    graph
}

/// Canonical simple-graph form: each undirected edge once, smaller end first,
/// in sorted order.
fn simple_edges(edges: &[(u8, u8)]) -> BTreeSet<(u8, u8)> {
    clamp(edges)
        .into_iter()
        .map(|(u, v)| if u <= v { (u, v) } else { (v, u) })
        .collect()
}

/// Reference reachability by an independent map-based BFS, with distances.
fn reference_distances(edges: &[(u8, u8)], start: u8) -> HashMap<u8, usize> {
    let mut adjacency: HashMap<u8, Vec<u8>> = HashMap::new();
    for &(u, v) in edges {
        adjacency.entry(u).or_default().push(v);
        if u != v {
            adjacency.entry(v).or_default().push(u);
        }
    }
    let mut distances = HashMap::from([(start, 0)]);
    let mut pending = VecDeque::from([start]);
    while let Some(node) = pending.pop_front() {
        let depth = distances[&node];
        for &neighbor in adjacency.get(&node).into_iter().flatten() {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor, depth + 1);
                pending.push_back(neighbor);
            }
        }
    }
    distances
}

#[quickcheck]
fn prop_undirected_list_edges_are_symmetric(edges: Vec<(u8, u8)>) -> bool {
    let graph = build_undirected(&clamp(&edges));
    let nodes: Vec<u8> = graph.node_ids().collect();
    nodes.iter().all(|&u| {
        nodes
            .iter()
            .all(|&v| graph.has_edge(u, v) == graph.has_edge(v, u))
    })
}

#[quickcheck]
fn prop_undirected_matrix_weights_are_symmetric(edges: Vec<(u8, u8, i8)>) -> bool {
    let span = NODE_SPAN as usize;
    let mut graph: AdjacencyMatrixGraph<Undirected> = AdjacencyMatrixGraph::new_weighted(span);
    for &(u, v, w) in &edges {
        graph
            .add_edge_weighted((u % NODE_SPAN) as usize, (v % NODE_SPAN) as usize, w as Weight)
            .unwrap();
    }
    (0..span).all(|u| (0..span).all(|v| graph.weight(u, v) == graph.weight(v, u)))
}

#[quickcheck]
fn prop_traversals_cover_exactly_the_reachable_set(edges: Vec<(u8, u8)>, start: u8) -> bool {
    let edges = clamp(&edges);
    let start = start % NODE_SPAN;
    let graph = build_undirected(&edges);
    let expected: HashSet<u8> = reference_distances(&edges, start).into_keys().collect();
    let bfs: HashSet<u8> = graph.bfs(start).collect();
    let dfs: HashSet<u8> = graph.dfs(start).collect();
    bfs == expected && dfs == expected
}

#[quickcheck]
fn prop_bfs_visits_in_nondecreasing_distance(edges: Vec<(u8, u8)>, start: u8) -> bool {
    let edges = clamp(&edges);
    let start = start % NODE_SPAN;
    let graph = build_undirected(&edges);
    let distances = reference_distances(&edges, start);
    let order = graph.bfs_order(start);
    order
        .windows(2)
        .all(|pair| distances[&pair[0]] <= distances[&pair[1]])
}

#[quickcheck]
fn prop_dfs_iterative_matches_recursive(edges: Vec<(u8, u8)>, start: u8) -> bool {
    let edges = clamp(&edges);
    let start = start % NODE_SPAN;
    let graph = build_undirected(&edges);
    graph.dfs_order(start) == graph.dfs_recursive(start)
}

#[quickcheck]
fn prop_components_partition_the_node_set(edges: Vec<(u8, u8)>) -> bool {
    let graph = build_undirected(&clamp(&edges));
    let components = graph.connected_components();
    let mut seen = HashSet::new();
    for node in components.iter().flatten() {
        if !seen.insert(*node) {
            return false;
        }
    }
    seen == graph.node_ids().collect::<HashSet<_>>()
}

#[quickcheck]
fn prop_cycle_iff_edges_exceed_spanning_forest(edges: Vec<(u8, u8)>) -> bool {
    // The edge-count criterion assumes a simple graph, so parallel edges are
    // collapsed before building.
    let edges: Vec<(u8, u8)> = simple_edges(&edges).into_iter().collect();
    let graph = build_undirected(&edges);
    let components = graph.connected_components().len();
    let expected = graph.edge_count() > graph.node_count() - components;
    graph.has_cycle() == expected
}

#[quickcheck]
fn prop_representations_agree_on_traversal_order(edges: Vec<(u8, u8)>) -> bool {
    // Sorted canonical edges make every list adjacency row ascending, which
    // is the enumeration order the matrix scan uses; visit orders must then
    // be identical under the identity label mapping.
    let edges: Vec<(usize, usize)> = simple_edges(&edges)
        .into_iter()
        .map(|(u, v)| (u as usize, v as usize))
        .collect();
    let mut list: AdjacencyListGraph<usize, Undirected> = AdjacencyListGraph::new();
    let mut matrix: AdjacencyMatrixGraph<Undirected> =
        AdjacencyMatrixGraph::new(NODE_SPAN as usize);
    for &(u, v) in &edges {
        list.add_edge(u, v);
        matrix.add_edge(u, v).unwrap();
    }
    let Some(&(start, _)) = edges.first() else {
        return true;
    };
    list.bfs_order(start) == matrix.bfs(start).unwrap()
        && list.dfs_order(start) == matrix.dfs(start).unwrap()
}

#[quickcheck]
fn prop_priority_queue_is_stable(priorities: Vec<u8>) -> bool {
    let mut queue = PriorityQueue::new();
    for (i, &p) in priorities.iter().enumerate() {
        queue.enqueue(i, Priority::from(p));
    }
    let mut expected: Vec<(usize, Priority)> = priorities
        .iter()
        .enumerate()
        .map(|(i, &p)| (i, Priority::from(p)))
        .collect();
    expected.sort_by_key(|&(_, p)| p);
    std::iter::from_fn(|| queue.dequeue()).collect::<Vec<_>>() == expected
}
