//! The transaction-flow graph: edge store plus query API.

use super::edge_store::EdgeStore;
use super::traversal::{enumerate_walks, subsume_embedded_walks};
use super::types::{Edge, EdgeCandidate, EdgeId, NodeId};
use crate::config::TraversalConfig;
use crate::error::{GraphError, Result};

/// A walk through the graph, as the ordered edges it traverses.
pub type EdgePath<'a> = Vec<&'a Edge>;

/// Outcome of a bulk [`TransactionGraph::ingest`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Number of edges stored.
    pub added: usize,
    /// Input positions of the records that were rejected.
    pub rejected: Vec<usize>,
}

/// Directed multi-edge graph of value transfers.
///
/// Single writer: [`add_edge`](Self::add_edge) takes `&mut self` and every
/// query takes `&self`. Wrap in [`SharedGraph`](super::SharedGraph) to share
/// across threads.
///
/// # Example
///
/// ```rust
/// use txgraph_core::graph::{EdgeCandidate, TransactionGraph};
///
/// let mut graph = TransactionGraph::new();
/// graph.add_edge(EdgeCandidate::new("A", "B")).unwrap();
/// graph.add_edge(EdgeCandidate::new("B", "C")).unwrap();
///
/// let paths = graph.find_edge_x2y("A", "C", 3).unwrap();
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0].len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TransactionGraph {
    store: EdgeStore,
    config: TraversalConfig,
}

impl TransactionGraph {
    /// Creates an empty graph with default traversal limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with the given traversal limits.
    #[must_use]
    pub fn with_config(config: TraversalConfig) -> Self {
        Self {
            store: EdgeStore::new(),
            config,
        }
    }

    /// Returns the traversal limits.
    #[must_use]
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Read-only access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &EdgeStore {
        &self.store
    }

    // ── Ingestion ──────────────────────────────────────────────────────

    /// Adds an edge, assigning the next counter value as ID if it has none.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::MissingEndpoint` if source or destination is
    /// absent; the graph is left unchanged.
    pub fn add_edge(&mut self, candidate: EdgeCandidate) -> Result<EdgeId> {
        self.store.add(candidate)
    }

    /// Adds every candidate, skipping (and logging) the malformed ones.
    pub fn ingest<I>(&mut self, candidates: I) -> IngestReport
    where
        I: IntoIterator<Item = EdgeCandidate>,
    {
        let mut report = IngestReport::default();
        for (position, candidate) in candidates.into_iter().enumerate() {
            match self.store.add(candidate) {
                Ok(_) => report.added += 1,
                Err(err) => {
                    tracing::warn!(position, error = %err, "Skipping edge record");
                    report.rejected.push(position);
                }
            }
        }
        tracing::debug!(
            added = report.added,
            rejected = report.rejected.len(),
            total = self.store.count(),
            "Ingested edge batch"
        );
        report
    }

    // ── Store queries ──────────────────────────────────────────────────

    /// Returns the number of stored edges.
    #[must_use]
    pub fn count_edges(&self) -> usize {
        self.store.count()
    }

    /// Iterates over all edges in insertion order.
    pub fn list_edges(&self) -> std::slice::Iter<'_, Edge> {
        self.store.iter()
    }

    /// Gets the earliest-inserted edge carrying `id`.
    #[must_use]
    pub fn get_edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.store.get(id)
    }

    // ── Node queries ───────────────────────────────────────────────────

    /// Returns all edges where `node` is source or destination.
    ///
    /// An unknown node yields an empty vector.
    #[must_use]
    pub fn find_edges(&self, node: &str) -> Vec<&Edge> {
        self.store.resolve(self.store.index().touching(node))
    }

    /// Returns the touching edge with the smallest timestamp.
    ///
    /// Edges without a timestamp are ignored; among equal timestamps the
    /// earliest-inserted edge wins.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NotFound` if no edge touches `node`, or none of
    /// the touching edges has a timestamp.
    pub fn find_edge(&self, node: &str) -> Result<&Edge> {
        let touching = self.find_edges(node);
        if touching.is_empty() {
            return Err(GraphError::NotFound(format!("no edge touches node '{node}'")));
        }
        touching
            .into_iter()
            .filter_map(|edge| edge.timestamp().map(|ts| (ts, edge)))
            .min_by_key(|&(ts, _)| ts)
            .map(|(_, edge)| edge)
            .ok_or_else(|| {
                GraphError::NotFound(format!("no timestamped edge touches node '{node}'"))
            })
    }

    /// Returns all edges from `source` to `destination` (direction-sensitive).
    #[must_use]
    pub fn find_edges_xy(&self, source: &str, destination: &str) -> Vec<&Edge> {
        self.store
            .resolve(self.store.index().between(source, destination))
    }

    /// Iterates over every node that appears as an endpoint.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.store.index().nodes()
    }

    /// Returns the number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.index().node_count()
    }

    /// Returns the number of edges leaving `node`.
    #[must_use]
    pub fn out_degree(&self, node: &str) -> usize {
        self.store.index().out_degree(node)
    }

    /// Returns the number of edges arriving at `node`.
    #[must_use]
    pub fn in_degree(&self, node: &str) -> usize {
        self.store.index().in_degree(node)
    }

    // ── Path queries ───────────────────────────────────────────────────

    /// Finds the walks of at most `max_depth` edges from `start` to `target`.
    ///
    /// Walks may revisit nodes, never take self-loops, and stop at the first
    /// arrival at `target`. A walk that is only the tail of a longer result
    /// walk looping back through `start` is folded into that longer walk; use
    /// [`enumerate_walks`](Self::enumerate_walks) to keep it.
    ///
    /// Folding depends on the result set, so a larger `max_depth` can hide a
    /// shorter flow. With edges `1: A→B`, `2: B→A`, `3: B→C`, tracing A to C
    /// returns `[1, 3]` at depth 2 but only `[1, 2, 1, 3]` at depth 4, since
    /// `[1, 3]` is then the tail of the longer walk.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::DepthLimitExceeded` or
    /// `GraphError::PathLimitExceeded` when a configured ceiling is hit.
    pub fn find_edge_x2y(
        &self,
        start: &str,
        target: &str,
        max_depth: usize,
    ) -> Result<Vec<EdgePath<'_>>> {
        let walks = enumerate_walks(&self.store, start, target, max_depth, &self.config)?;
        let walks = subsume_embedded_walks(&self.store, start, walks);
        Ok(self.resolve_walks(walks))
    }

    /// Finds every qualifying walk, including ones embedded in longer walks.
    ///
    /// # Errors
    ///
    /// Same as [`find_edge_x2y`](Self::find_edge_x2y).
    pub fn enumerate_walks(
        &self,
        start: &str,
        target: &str,
        max_depth: usize,
    ) -> Result<Vec<EdgePath<'_>>> {
        let walks = enumerate_walks(&self.store, start, target, max_depth, &self.config)?;
        Ok(self.resolve_walks(walks))
    }

    fn resolve_walks(&self, walks: Vec<Vec<usize>>) -> Vec<EdgePath<'_>> {
        walks
            .iter()
            .map(|walk| self.store.resolve(walk))
            .collect()
    }
}
