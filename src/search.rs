//! Breadth-first and depth-first traversal over anything implementing
//! [`Graph`].
//!
//! Both traversals are lazy iterators, so callers can stop early or collect
//! the full visit order.  BFS keeps its frontier in a [`Queue`], so frontier
//! management is FIFO by construction.

use std::collections::HashSet;

use crate::{graph::Graph, queue::Queue};

/// Breadth-first traversal.  The visited set is seeded with the start node;
/// each dequeued node is yielded and its unvisited successors are enqueued in
/// adjacency order, so nodes come out frontier by frontier.
pub struct BfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::NodeId>,
    frontier: Queue<G::NodeId>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: G::NodeId) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut frontier = Queue::new();
        frontier.enqueue(start);
        Self {
            graph,
            visited,
            frontier,
        }
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let node = self.frontier.dequeue()?;
        for successor in graph.successors(node.clone()) {
            // Marking at enqueue time prevents a node from entering the
            // frontier twice.
            if self.visited.insert(successor.clone()) {
                self.frontier.enqueue(successor);
            }
        }
        Some(node)
    }
}

/// Depth-first traversal with an explicit stack.  A node is settled (marked
/// visited and yielded) only when popped unvisited; duplicate stack entries
/// are silently skipped.  Successors are pushed in reverse adjacency order so
/// the visit order matches a left-to-right recursive descent.
pub struct DfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::NodeId>,
    stack: Vec<G::NodeId>,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: G::NodeId) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            stack: vec![start],
        }
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(node) = self.stack.pop() {
            if !self.visited.insert(node.clone()) {
                continue;
            }
            let pending: Vec<_> = graph
                .successors(node.clone())
                .filter(|n| !self.visited.contains(n))
                .collect();
            self.stack.extend(pending.into_iter().rev());
            return Some(node);
        }
        None
    }
}
