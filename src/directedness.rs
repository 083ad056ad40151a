/// Marker type representing directed graph edges.
pub struct Directed;

/// Marker type representing undirected graph edges.
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented by the [`Directed`] and [`Undirected`] marker
/// types to provide compile-time specialization of graph behavior.  A graph's
/// directedness is chosen at construction through its type parameter and never
/// changes afterward; analyses that are only meaningful for undirected graphs
/// (cycle detection, connected components) are defined on
/// `AdjacencyListGraph<N, Undirected>` only, so misuse on a directed graph is
/// a type error rather than a runtime surprise.
pub trait Directedness {
    fn is_directed() -> bool;
}

impl Directedness for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl Directedness for Undirected {
    fn is_directed() -> bool {
        false
    }
}
