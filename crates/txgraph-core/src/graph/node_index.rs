//! Node-keyed indices derived from the edge store.
//!
//! Every index entry is a slot (position) into the store's insertion-ordered
//! edge vector. The index is only written from [`EdgeStore::add`], so it can
//! never drift from the edges it describes.
//!
//! [`EdgeStore::add`]: super::edge_store::EdgeStore::add

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

use super::types::{Edge, EdgeId, NodeId};

/// Destination-grouped outgoing slots of one source node, in first-seen order.
pub(crate) type OutgoingGroups = IndexMap<NodeId, Vec<usize>, FxBuildHasher>;

/// Derived lookup structures over the stored edges.
#[derive(Debug, Default)]
pub struct NodeIndex {
    /// node -> slots of edges where the node is source or destination.
    touching: FxHashMap<NodeId, Vec<usize>>,
    /// source -> destination -> slots of edges for that pair.
    outgoing: FxHashMap<NodeId, OutgoingGroups>,
    /// destination -> number of edges arriving there.
    incoming_count: FxHashMap<NodeId, usize>,
    /// edge id -> first slot carrying it.
    by_id: FxHashMap<EdgeId, usize>,
}

impl NodeIndex {
    /// Records the edge stored at `slot`.
    ///
    /// Returns `false` when the edge's ID was already taken by an earlier
    /// edge; the earlier edge keeps the ID lookup.
    pub(super) fn insert(&mut self, slot: usize, edge: &Edge) -> bool {
        let source = edge.source();
        let destination = edge.destination();

        self.touching.entry(source.clone()).or_default().push(slot);
        if !edge.is_self_loop() {
            self.touching
                .entry(destination.clone())
                .or_default()
                .push(slot);
        }

        self.outgoing
            .entry(source.clone())
            .or_default()
            .entry(destination.clone())
            .or_default()
            .push(slot);
        *self.incoming_count.entry(destination.clone()).or_insert(0) += 1;

        if self.by_id.contains_key(edge.id()) {
            return false;
        }
        self.by_id.insert(edge.id().clone(), slot);
        true
    }

    /// Slots of all edges touching `node`, in insertion order.
    #[must_use]
    pub fn touching(&self, node: &str) -> &[usize] {
        self.touching
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Slots of all edges from `source` to `destination`, in insertion order.
    #[must_use]
    pub fn between(&self, source: &str, destination: &str) -> &[usize] {
        self.outgoing
            .get(source)
            .and_then(|groups| groups.get(destination))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Outgoing slots of `source` grouped by destination.
    pub(crate) fn outgoing_groups(&self, source: &str) -> Option<&OutgoingGroups> {
        self.outgoing.get(source)
    }

    /// First slot carrying `id`.
    #[must_use]
    pub fn slot_of(&self, id: &EdgeId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Number of edges leaving `node` (self-loops included).
    #[must_use]
    pub fn out_degree(&self, node: &str) -> usize {
        self.outgoing
            .get(node)
            .map_or(0, |groups| groups.values().map(Vec::len).sum())
    }

    /// Number of edges arriving at `node` (self-loops included).
    #[must_use]
    pub fn in_degree(&self, node: &str) -> usize {
        self.incoming_count.get(node).copied().unwrap_or(0)
    }

    /// Iterates over every node that appears as an endpoint.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.touching.keys()
    }

    /// Number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.touching.len()
    }
}
