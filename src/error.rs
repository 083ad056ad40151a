use thiserror::Error;

/// Errors reported by graph operations.
///
/// All errors are immediate usage errors surfaced to the caller; nothing is
/// retried or swallowed internally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index was outside `0..vertex_count`.  Only matrix graphs can
    /// produce this; list graphs create nodes on demand and never fail.
    #[error("vertex index {index} out of range for a graph with {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },
}
