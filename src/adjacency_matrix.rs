//! Dense graph stored as a fixed V x V matrix of optional edge weights.

use std::fmt;
use std::marker::PhantomData;

use derivative::Derivative;
use tracing::trace;

use crate::{
    directedness::Directedness,
    error::GraphError,
    graph::{DEFAULT_WEIGHT, Graph, Weight},
};

/// A graph implementation using an adjacency matrix, efficient for dense
/// graphs.  Space complexity is O(V^2); edge-existence queries are O(1);
/// every traversal is O(V^2) regardless of the actual edge count.  That cost
/// profile is the defining trade-off against
/// [`AdjacencyListGraph`](crate::AdjacencyListGraph).
///
/// The vertex count is fixed at construction and vertices are exactly the
/// indices `0..vertex_count`.  Cells hold `Option<Weight>`, with `None` as
/// the explicit "no edge" sentinel.  A weighted matrix initializes its
/// diagonal to `Some(0)` (self-distance), so `has_edge(v, v)` reports true
/// there; an unweighted matrix starts fully empty and stores every edge with
/// weight 1.
///
/// Index arguments are validated against `0..vertex_count`; violations are a
/// [`GraphError::IndexOutOfRange`], never a silent wrap or truncation.
///
/// # Type Parameters
/// * `D` - The directedness ([`Directed`](crate::Directed) or
///   [`Undirected`](crate::Undirected))
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct AdjacencyMatrixGraph<D: Directedness> {
    vertex_count: usize,
    weighted: bool,
    /// Row-major: cell (from, into) lives at `from * vertex_count + into`.
    cells: Vec<Option<Weight>>,
    directedness: PhantomData<D>,
}

impl<D> AdjacencyMatrixGraph<D>
where
    D: Directedness,
{
    /// Creates an unweighted graph with the given number of vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            weighted: false,
            cells: vec![None; vertex_count * vertex_count],
            directedness: PhantomData,
        }
    }

    /// Creates a weighted graph with the given number of vertices.  The
    /// diagonal starts at weight zero (self-distance); every other cell
    /// starts empty.
    pub fn new_weighted(vertex_count: usize) -> Self {
        let mut graph = Self {
            vertex_count,
            weighted: true,
            cells: vec![None; vertex_count * vertex_count],
            directedness: PhantomData,
        };
        for i in 0..vertex_count {
            graph.cells[i * vertex_count + i] = Some(0);
        }
        graph
    }

    /// Gets the fixed number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns true if the graph stores caller-supplied weights.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn check_index(&self, index: usize) -> Result<(), GraphError> {
        if index < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                vertex_count: self.vertex_count,
            })
        }
    }

    fn cell_index(&self, from: usize, into: usize) -> Result<usize, GraphError> {
        self.check_index(from)?;
        self.check_index(into)?;
        Ok(from * self.vertex_count + into)
    }

    /// Adds an edge with the default weight.  See [`Self::add_edge_weighted`].
    pub fn add_edge(&mut self, from: usize, into: usize) -> Result<(), GraphError> {
        self.add_edge_weighted(from, into, DEFAULT_WEIGHT)
    }

    /// Writes an edge into cell `(from, into)`, and into `(into, from)` as
    /// well when the graph is undirected; both writes happen in the same
    /// call.  Unweighted graphs store weight 1 regardless of the argument.
    pub fn add_edge_weighted(
        &mut self,
        from: usize,
        into: usize,
        weight: Weight,
    ) -> Result<(), GraphError> {
        let stored = if self.weighted { weight } else { DEFAULT_WEIGHT };
        let index = self.cell_index(from, into)?;
        trace!(from, into, weight = stored, "adding edge");
        self.cells[index] = Some(stored);
        if !D::is_directed() {
            self.cells[into * self.vertex_count + from] = Some(stored);
        }
        Ok(())
    }

    /// Checks edge existence by O(1) cell inspection.
    pub fn has_edge(&self, from: usize, into: usize) -> Result<bool, GraphError> {
        Ok(self.cells[self.cell_index(from, into)?].is_some())
    }

    /// Gets the raw cell value: `Some(weight)` for a present edge, `None` for
    /// the "no edge" sentinel.
    pub fn weight(&self, from: usize, into: usize) -> Result<Option<Weight>, GraphError> {
        Ok(self.cells[self.cell_index(from, into)?])
    }

    /// Breadth-first search with a validated start index.  Neighbor
    /// enumeration scans indices in ascending order.
    pub fn bfs(&self, start: usize) -> Result<Vec<usize>, GraphError> {
        self.check_index(start)?;
        Ok(Graph::bfs(self, start).collect())
    }

    /// Depth-first search with a validated start index.  Visit order is the
    /// same as a recursive descent over ascending neighbor indices.
    pub fn dfs(&self, start: usize) -> Result<Vec<usize>, GraphError> {
        self.check_index(start)?;
        Ok(Graph::dfs(self, start).collect())
    }
}

impl<D> Graph for AdjacencyMatrixGraph<D>
where
    D: Directedness,
{
    type NodeId = usize;

    fn is_directed(&self) -> bool {
        D::is_directed()
    }

    fn node_ids(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.vertex_count
    }

    /// Scans the node's row in ascending index order.  An out-of-range node
    /// has no row and therefore no successors.
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let end = if node < self.vertex_count {
            self.vertex_count
        } else {
            0
        };
        (0..end).filter(move |&into| self.cells[node * self.vertex_count + into].is_some())
    }

    fn has_edge(&self, from: usize, into: usize) -> bool {
        self.weight(from, into).is_ok_and(|cell| cell.is_some())
    }

    fn node_count(&self) -> usize {
        self.vertex_count
    }
}

impl<D> fmt::Display for AdjacencyMatrixGraph<D>
where
    D: Directedness,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for i in 0..self.vertex_count {
            write!(f, "{i:>4}")?;
        }
        writeln!(f)?;
        for from in 0..self.vertex_count {
            write!(f, "{from:>4}")?;
            for into in 0..self.vertex_count {
                match self.cells[from * self.vertex_count + into] {
                    Some(weight) => write!(f, "{weight:>4}")?,
                    None => write!(f, "{:>4}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
