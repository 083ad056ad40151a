use std::{fmt::Debug, hash::Hash};

use crate::search::{BfsIterator, DfsIterator};

/// Edge weight.  Integral on purpose: the "no edge" sentinel of the matrix
/// representation is an explicit `Option`, never a floating-point infinity.
pub type Weight = i64;

/// Weight assigned by the unweighted `add_edge` entry points.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Bound alias for types usable as node identifiers.
///
/// The blanket impl makes any hashable, totally-ordered, cloneable value a
/// valid node identifier, so `&str`, `String`, and the integer types all
/// qualify without newtype wrappers.
pub trait NodeId: Eq + Hash + Clone + Ord + Debug {}

impl<T: Eq + Hash + Clone + Ord + Debug> NodeId for T {}

/// The capability set shared by both graph representations: enumerate nodes,
/// enumerate a node's successors in adjacency order, query edge existence, and
/// traverse.  Traversals are lazy iterators; collect them (or use
/// [`Graph::bfs_order`] / [`Graph::dfs_order`]) to materialize visit order.
///
/// Traversal never fails: a start node the graph has never seen produces a
/// single-node result, and unreachable nodes are silently excluded.
pub trait Graph: Sized {
    type NodeId: NodeId;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool;

    /// Iterates over every node known to the graph.  The list representation
    /// yields nodes in the order they were first referenced; the matrix
    /// representation yields ascending indices.
    fn node_ids(&self) -> impl Iterator<Item = Self::NodeId> + '_;

    /// Iterates over the nodes reachable from `node` by one outgoing edge, in
    /// adjacency order.  Parallel edges yield their target once per edge.
    /// Unknown nodes have no successors.
    fn successors(&self, node: Self::NodeId) -> impl Iterator<Item = Self::NodeId> + '_;

    /// Checks if there is at least one edge from one node to another.
    fn has_edge(&self, from: Self::NodeId, into: Self::NodeId) -> bool {
        self.successors(from).any(|n| n == into)
    }

    /// Gets the number of nodes in the graph.
    fn node_count(&self) -> usize {
        self.node_ids().count()
    }

    /// Performs a breadth-first search starting from the given node.  Nodes
    /// are yielded in dequeue order, frontier by frontier.
    fn bfs(&self, start: Self::NodeId) -> BfsIterator<'_, Self> {
        BfsIterator::new(self, start)
    }

    /// Performs a depth-first search starting from the given node, descending
    /// fully along each branch before backtracking.
    fn dfs(&self, start: Self::NodeId) -> DfsIterator<'_, Self> {
        DfsIterator::new(self, start)
    }

    /// Collects the BFS visit order into a vector.
    fn bfs_order(&self, start: Self::NodeId) -> Vec<Self::NodeId> {
        self.bfs(start).collect()
    }

    /// Collects the DFS visit order into a vector.
    fn dfs_order(&self, start: Self::NodeId) -> Vec<Self::NodeId> {
        self.dfs(start).collect()
    }
}
