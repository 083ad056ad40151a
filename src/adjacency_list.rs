//! Sparse graph stored as per-node adjacency lists.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

use derivative::Derivative;
use tracing::{debug, trace};

use crate::{
    directedness::{Directedness, Undirected},
    graph::{DEFAULT_WEIGHT, Graph, NodeId, Weight},
};

/// A graph implementation using per-node adjacency lists, efficient for
/// sparse graphs.  Space complexity is O(V + E).
///
/// Nodes are arbitrary comparable values and are created on demand: a node
/// enters the graph the first time it appears as an edge source or, for
/// undirected graphs, as an edge target.  There is no node or edge removal;
/// the structure only grows.
///
/// Parallel edges are permitted and never deduplicated, so a neighbor list
/// may contain the same target more than once.  An undirected self-loop is
/// stored as a single entry rather than a mirrored pair.
///
/// # Type Parameters
/// * `N` - The node identifier type
/// * `D` - The directedness ([`Directed`](crate::Directed) or [`Undirected`])
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct AdjacencyListGraph<N: NodeId, D: Directedness> {
    edges: HashMap<N, Vec<(N, Weight)>>,
    /// Nodes in the order they were first referenced.  Traversal seeds and
    /// component ordering depend on this, so it is stored explicitly rather
    /// than derived from the map.
    order: Vec<N>,
    edge_count: usize,
    directedness: PhantomData<D>,
}

impl<N, D> AdjacencyListGraph<N, D>
where
    N: NodeId,
    D: Directedness,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
            order: Vec::new(),
            edge_count: 0,
            directedness: PhantomData,
        }
    }

    /// Gets the neighbor list for a node, registering the node if it has
    /// never been referenced before.  This is the only path by which nodes
    /// come into existence.
    fn neighbors_mut(&mut self, node: N) -> &mut Vec<(N, Weight)> {
        match self.edges.entry(node) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(Vec::new())
            }
        }
    }

    /// Adds an edge with the default weight.  See [`Self::add_edge_weighted`].
    pub fn add_edge(&mut self, from: N, into: N) {
        self.add_edge_weighted(from, into, DEFAULT_WEIGHT);
    }

    /// Adds an edge from `from` to `into` with the given weight, creating
    /// either node on demand.  Undirected graphs also record the mirrored
    /// entry, except for self-loops, which are stored once.  Never fails.
    pub fn add_edge_weighted(&mut self, from: N, into: N, weight: Weight) {
        trace!(?from, ?into, weight, "adding edge");
        let mirror = !D::is_directed() && from != into;
        self.neighbors_mut(from.clone()).push((into.clone(), weight));
        if mirror {
            self.neighbors_mut(into).push((from, weight));
        }
        self.edge_count += 1;
    }

    /// Gets a node's neighbor list in insertion order, with edge weights.
    /// A node that was never referenced has an empty list; lookups never
    /// register nodes.
    pub fn neighbors(&self, node: &N) -> &[(N, Weight)] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Gets the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Gets the number of edges added, counting each undirected edge once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Depth-first traversal by direct recursive descent.  Produces exactly
    /// the same visit order as the iterative [`Graph::dfs`], which exists for
    /// callers who want a lazy iterator or need to avoid deep recursion.
    pub fn dfs_recursive(&self, start: N) -> Vec<N> {
        let mut visited = HashSet::new();
        let mut result = Vec::new();
        self.dfs_descend(start, &mut visited, &mut result);
        result
    }

    fn dfs_descend(&self, node: N, visited: &mut HashSet<N>, result: &mut Vec<N>) {
        visited.insert(node.clone());
        result.push(node.clone());
        for (neighbor, _) in self.neighbors(&node) {
            if !visited.contains(neighbor) {
                self.dfs_descend(neighbor.clone(), visited, result);
            }
        }
    }
}

/// Analyses that are only meaningful when edges are symmetric.  Defining them
/// on the `Undirected` instantiation makes calling them on a directed graph a
/// type error.
impl<N> AdjacencyListGraph<N, Undirected>
where
    N: NodeId,
{
    /// Checks whether any component contains a cycle.  An edge that reaches
    /// an already-visited node other than the DFS-tree parent closes a cycle.
    ///
    /// The parent check compares node values, so a parallel edge back to the
    /// parent is not reported as a cycle; a self-loop is.
    pub fn has_cycle(&self) -> bool {
        let mut visited = HashSet::new();
        for node in &self.order {
            if !visited.contains(node) && self.cycle_from(node, None, &mut visited) {
                debug!(?node, "cycle found");
                return true;
            }
        }
        false
    }

    fn cycle_from(&self, node: &N, parent: Option<&N>, visited: &mut HashSet<N>) -> bool {
        visited.insert(node.clone());
        for (neighbor, _) in self.neighbors(node) {
            if !visited.contains(neighbor) {
                if self.cycle_from(neighbor, Some(node), visited) {
                    return true;
                }
            } else if Some(neighbor) != parent {
                return true;
            }
        }
        false
    }

    /// Partitions the graph's nodes into connected components by repeated
    /// BFS.  Components appear in the order their seed node was first
    /// referenced, and each component lists its nodes in BFS visit order.
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        let mut visited: HashSet<N> = HashSet::new();
        let mut components = Vec::new();
        for node in &self.order {
            if visited.contains(node) {
                continue;
            }
            let component: Vec<N> = self.bfs(node.clone()).collect();
            visited.extend(component.iter().cloned());
            components.push(component);
        }
        debug!(count = components.len(), "connected components");
        components
    }
}

impl<N, D> Graph for AdjacencyListGraph<N, D>
where
    N: NodeId,
    D: Directedness,
{
    type NodeId = N;

    fn is_directed(&self) -> bool {
        D::is_directed()
    }

    fn node_ids(&self) -> impl Iterator<Item = N> + '_ {
        self.order.iter().cloned()
    }

    fn successors(&self, node: N) -> impl Iterator<Item = N> + '_ {
        self.neighbors(&node).iter().map(|(n, _)| n.clone())
    }

    fn has_edge(&self, from: N, into: N) -> bool {
        // Linear scan of the source's neighbor list: O(degree(from)).
        self.neighbors(&from).iter().any(|(n, _)| *n == into)
    }

    fn node_count(&self) -> usize {
        self.order.len()
    }
}

impl<N, D> fmt::Display for AdjacencyListGraph<N, D>
where
    N: NodeId + fmt::Display,
    D: Directedness,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes: Vec<&N> = self.order.iter().collect();
        nodes.sort();
        for node in nodes {
            let entries = self
                .neighbors(node)
                .iter()
                .map(|(n, w)| format!("{n}({w})"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "{node}: [{entries}]")?;
        }
        Ok(())
    }
}
