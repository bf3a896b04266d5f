//! Thread-safe handle over a [`TransactionGraph`].
//!
//! One `RwLock` guards the store and its index together, so a reader never
//! sees an edge without its index entries. Every query holds the read lock
//! for its whole duration and returns owned copies.

use std::sync::Arc;

use parking_lot::RwLock;

use super::tx_graph::{IngestReport, TransactionGraph};
use super::types::{Edge, EdgeCandidate, EdgeId};
use crate::config::TraversalConfig;
use crate::error::Result;

/// Cloneable, shareable graph handle.
///
/// # Example
///
/// ```rust
/// use txgraph_core::graph::{EdgeCandidate, SharedGraph};
///
/// let graph = SharedGraph::new();
/// let writer = graph.clone();
/// std::thread::spawn(move || {
///     writer.add_edge(EdgeCandidate::new("A", "B")).unwrap();
/// })
/// .join()
/// .unwrap();
/// assert_eq!(graph.count_edges(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<TransactionGraph>>,
}

impl SharedGraph {
    /// Creates an empty shared graph with default traversal limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty shared graph with the given traversal limits.
    #[must_use]
    pub fn with_config(config: TraversalConfig) -> Self {
        Self::from_graph(TransactionGraph::with_config(config))
    }

    /// Wraps an existing graph.
    #[must_use]
    pub fn from_graph(graph: TransactionGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Adds an edge under the write lock.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::MissingEndpoint` if source or destination is absent.
    pub fn add_edge(&self, candidate: EdgeCandidate) -> Result<EdgeId> {
        self.inner.write().add_edge(candidate)
    }

    /// Adds a batch of candidates under one write lock.
    pub fn ingest<I>(&self, candidates: I) -> IngestReport
    where
        I: IntoIterator<Item = EdgeCandidate>,
    {
        self.inner.write().ingest(candidates)
    }

    /// Returns the number of stored edges.
    #[must_use]
    pub fn count_edges(&self) -> usize {
        self.inner.read().count_edges()
    }

    /// Returns a snapshot of all edges in insertion order.
    #[must_use]
    pub fn list_edges(&self) -> Vec<Edge> {
        self.inner.read().list_edges().cloned().collect()
    }

    /// See [`TransactionGraph::get_edge`].
    #[must_use]
    pub fn get_edge(&self, id: &EdgeId) -> Option<Edge> {
        self.inner.read().get_edge(id).cloned()
    }

    /// See [`TransactionGraph::find_edges`].
    #[must_use]
    pub fn find_edges(&self, node: &str) -> Vec<Edge> {
        self.inner
            .read()
            .find_edges(node)
            .into_iter()
            .cloned()
            .collect()
    }

    /// See [`TransactionGraph::find_edge`].
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NotFound` if no timestamped edge touches `node`.
    pub fn find_edge(&self, node: &str) -> Result<Edge> {
        self.inner.read().find_edge(node).cloned()
    }

    /// See [`TransactionGraph::find_edges_xy`].
    #[must_use]
    pub fn find_edges_xy(&self, source: &str, destination: &str) -> Vec<Edge> {
        self.inner
            .read()
            .find_edges_xy(source, destination)
            .into_iter()
            .cloned()
            .collect()
    }

    /// See [`TransactionGraph::find_edge_x2y`].
    ///
    /// # Errors
    ///
    /// Returns an error when a configured traversal ceiling is hit.
    pub fn find_edge_x2y(
        &self,
        start: &str,
        target: &str,
        max_depth: usize,
    ) -> Result<Vec<Vec<Edge>>> {
        let graph = self.inner.read();
        let paths = graph.find_edge_x2y(start, target, max_depth)?;
        Ok(paths
            .into_iter()
            .map(|path| path.into_iter().cloned().collect())
            .collect())
    }

    /// Runs `f` against the graph under a single read lock.
    pub fn read<R>(&self, f: impl FnOnce(&TransactionGraph) -> R) -> R {
        f(&self.inner.read())
    }
}
