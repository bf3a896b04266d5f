//! Append-only edge storage with its derived node index.
//!
//! The store owns every edge in insertion order together with the
//! [`NodeIndex`] built over them, and the per-graph counter used to assign
//! identifiers to edges that arrive without one.

use super::node_index::NodeIndex;
use super::types::{Edge, EdgeCandidate, EdgeId};
use crate::error::Result;

/// First value handed out by the identifier counter.
const FIRST_AUTO_ID: i64 = 1;

/// Insertion-ordered edge collection plus node index.
///
/// Slots handed out by the index are positions in `edges`; since nothing is
/// ever removed, a slot stays valid for the lifetime of the store.
#[derive(Debug)]
pub struct EdgeStore {
    edges: Vec<Edge>,
    index: NodeIndex,
    /// Next auto-assigned identifier.
    next_id: i64,
}

impl Default for EdgeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            index: NodeIndex::default(),
            next_id: FIRST_AUTO_ID,
        }
    }

    /// Creates a store with pre-allocated capacity for `expected_edges`.
    #[must_use]
    pub fn with_capacity(expected_edges: usize) -> Self {
        Self {
            edges: Vec::with_capacity(expected_edges),
            ..Self::new()
        }
    }

    /// Validates and appends an edge, returning its identifier.
    ///
    /// An identifier is drawn from the counter only when the candidate has
    /// none. On error nothing changes, the counter included.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::MissingEndpoint` if source or destination is absent.
    pub fn add(&mut self, candidate: EdgeCandidate) -> Result<EdgeId> {
        let validated = candidate.validate()?;

        let next_id = &mut self.next_id;
        let edge = validated.into_edge(|| {
            let id = *next_id;
            *next_id += 1;
            EdgeId::Int(id)
        });

        let slot = self.edges.len();
        if !self.index.insert(slot, &edge) {
            tracing::warn!(
                edge_id = %edge.id(),
                "Duplicate edge id; lookups by id keep returning the earlier edge"
            );
        }
        let id = edge.id().clone();
        self.edges.push(edge);
        Ok(id)
    }

    /// Returns the number of stored edges.
    #[must_use]
    pub fn count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over all edges in insertion order.
    ///
    /// Each call starts a fresh pass over the current contents.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Returns the edge stored at `slot`.
    #[must_use]
    pub fn at(&self, slot: usize) -> Option<&Edge> {
        self.edges.get(slot)
    }

    /// Returns the earliest-inserted edge carrying `id`.
    #[must_use]
    pub fn get(&self, id: &EdgeId) -> Option<&Edge> {
        self.index.slot_of(id).and_then(|slot| self.edges.get(slot))
    }

    /// Resolves index slots to edges.
    #[must_use]
    pub fn resolve(&self, slots: &[usize]) -> Vec<&Edge> {
        slots.iter().filter_map(|&slot| self.edges.get(slot)).collect()
    }

    /// Read-only access to the derived node index.
    #[must_use]
    pub fn index(&self) -> &NodeIndex {
        &self.index
    }
}
