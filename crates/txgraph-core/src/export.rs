//! Node/link documents for flow visualisation.
//!
//! Renders a set of edges (typically the paths returned by a trace) as the
//! `{ "nodes": [...], "links": [...] }` shape consumed by force-directed
//! graph viewers. Links refer to nodes by position in `nodes`.

use std::collections::HashMap;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::graph::{Edge, EdgeId, NodeId};

/// One node of a [`FlowDocument`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowNode {
    /// Node identifier.
    pub id: NodeId,
}

/// One link of a [`FlowDocument`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowLink {
    /// Position of the source node in `nodes`.
    pub source: usize,
    /// Position of the destination node in `nodes`.
    pub target: usize,
    /// Edge identifier.
    pub id: EdgeId,
    /// Edge timestamp, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Passthrough edge attributes.
    #[serde(flatten)]
    pub attributes: HashMap<String, Value>,
}

/// Serializable node/link view over a set of edges.
///
/// # Example
///
/// ```rust
/// use txgraph_core::export::FlowDocument;
/// use txgraph_core::graph::{EdgeCandidate, TransactionGraph};
///
/// let mut graph = TransactionGraph::new();
/// graph.add_edge(EdgeCandidate::new("A", "B")).unwrap();
/// let doc = FlowDocument::from_edges(graph.list_edges());
/// assert_eq!(doc.nodes.len(), 2);
/// assert_eq!(doc.links[0].source, 0);
/// assert_eq!(doc.links[0].target, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowDocument {
    /// Nodes in first-seen order.
    pub nodes: Vec<FlowNode>,
    /// Links, one per distinct edge.
    pub links: Vec<FlowLink>,
}

impl FlowDocument {
    /// Builds a document from edges; repeated edges are emitted once.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut positions: IndexMap<NodeId, usize, FxBuildHasher> = IndexMap::default();
        let mut seen = FxHashSet::default();
        let mut links = Vec::new();

        for edge in edges {
            let key = (
                edge.id().clone(),
                edge.source().clone(),
                edge.destination().clone(),
                edge.timestamp(),
            );
            if !seen.insert(key) {
                continue;
            }
            let source = node_position(&mut positions, edge.source());
            let target = node_position(&mut positions, edge.destination());
            links.push(FlowLink {
                source,
                target,
                id: edge.id().clone(),
                timestamp: edge.timestamp(),
                attributes: edge.attributes().clone(),
            });
        }

        let nodes = positions
            .into_keys()
            .map(|id| FlowNode { id })
            .collect();
        Self { nodes, links }
    }

    /// Builds a document from the union of several paths.
    pub fn from_paths<'a, P, I>(paths: P) -> Self
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = &'a Edge>,
    {
        Self::from_edges(paths.into_iter().flatten())
    }

    /// Serializes the document as JSON.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Json` if an attribute value fails to serialize.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

fn node_position(positions: &mut IndexMap<NodeId, usize, FxBuildHasher>, node: &NodeId) -> usize {
    if let Some(&position) = positions.get(node) {
        return position;
    }
    let position = positions.len();
    positions.insert(node.clone(), position);
    position
}
