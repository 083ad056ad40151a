pub use crate::adjacency_list::AdjacencyListGraph;
pub use crate::adjacency_matrix::AdjacencyMatrixGraph;
pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::error::GraphError;
pub use crate::graph::{Graph, NodeId, Weight};
pub use crate::queue::{Priority, PriorityQueue, Queue};
