//! Two graph representations sharing one traversal surface: a sparse
//! adjacency-list graph over arbitrary node values and a dense adjacency-matrix
//! graph over integer indices.  Both implement the [`Graph`] trait, which
//! provides BFS and DFS as lazy iterators.  The [`queue`] module holds the FIFO
//! queue backing BFS and a stable priority-queue variant.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod directedness;
pub mod error;
pub mod graph;
pub mod queue;
pub mod search;

pub mod prelude;

pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use directedness::{Directed, Directedness, Undirected};
pub use error::GraphError;
pub use graph::{Graph, NodeId, Weight};
