//! Edge model for the transaction-flow graph.
//!
//! Nodes are not stored entities: a node exists only as the `source` or
//! `destination` of some edge. Edges enter the graph as [`EdgeCandidate`]
//! records, are checked by [`EdgeCandidate::validate`], and become immutable
//! [`Edge`] values once the store has assigned them an identifier.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GraphError, MissingEndpoint, Result};

/// Identifier of a node (typically an address or entity label).
///
/// # Example
///
/// ```rust
/// use txgraph_core::graph::NodeId;
///
/// let node = NodeId::new("1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
/// assert_eq!(node.as_str(), "1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a node identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an edge: either caller-supplied text or an integer.
///
/// Auto-assigned identifiers are always positive [`EdgeId::Int`] values;
/// caller-supplied integers may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeId {
    /// Numeric identifier.
    Int(i64),
    /// Textual identifier (e.g. a transaction hash).
    Text(String),
}

impl From<i64> for EdgeId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for EdgeId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// A stored, directed transfer between two nodes.
///
/// Edges are only created by the graph store and cannot be mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    destination: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
    #[serde(flatten)]
    attributes: HashMap<String, Value>,
}

impl Edge {
    /// Returns the edge ID.
    #[must_use]
    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    /// Returns the source node.
    #[must_use]
    pub fn source(&self) -> &NodeId {
        &self.source
    }

    /// Returns the destination node.
    #[must_use]
    pub fn destination(&self) -> &NodeId {
        &self.destination
    }

    /// Returns the ordering timestamp, if any.
    #[must_use]
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// Returns all passthrough attributes of this edge.
    #[must_use]
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    /// Returns a specific attribute value, if it exists.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns true when source and destination are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    /// Returns true when `node` is this edge's source or destination.
    #[must_use]
    pub fn touches(&self, node: &str) -> bool {
        self.source.as_str() == node || self.destination.as_str() == node
    }
}

/// Attribute names that collide with serialized edge or export link fields.
pub const RESERVED_ATTRIBUTE_NAMES: [&str; 9] = [
    "id",
    "source",
    "destination",
    "target",
    "timestamp",
    "src",
    "dst",
    "edge",
    "time",
];

/// An ingestion record: every field is optional until validation.
///
/// Deserializes from a JSON mapping. Besides the canonical names, `src`,
/// `dst`/`target`, `edge` and `time` are accepted; any other key lands in the
/// attribute bag untouched.
///
/// # Example
///
/// ```rust
/// use txgraph_core::graph::EdgeCandidate;
/// use serde_json::json;
///
/// let candidate = EdgeCandidate::new("A", "B")
///     .with_timestamp(1_231_006_505)
///     .with_attribute("value", json!(50.0));
/// assert!(candidate.validate().is_ok());
///
/// let broken = EdgeCandidate::default().with_destination("C");
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EdgeCandidate {
    #[serde(default, alias = "src", skip_serializing_if = "Option::is_none")]
    source: Option<NodeId>,
    #[serde(
        default,
        alias = "dst",
        alias = "target",
        skip_serializing_if = "Option::is_none"
    )]
    destination: Option<NodeId>,
    #[serde(default, alias = "edge", skip_serializing_if = "Option::is_none")]
    id: Option<EdgeId>,
    #[serde(default, alias = "time", skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
    #[serde(flatten)]
    attributes: HashMap<String, Value>,
}

impl EdgeCandidate {
    /// Creates a candidate with both endpoints set.
    #[must_use]
    pub fn new(source: impl Into<NodeId>, destination: impl Into<NodeId>) -> Self {
        Self {
            source: Some(source.into()),
            destination: Some(destination.into()),
            ..Self::default()
        }
    }

    /// Sets the source node (builder pattern).
    #[must_use]
    pub fn with_source(mut self, source: impl Into<NodeId>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the destination node (builder pattern).
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<NodeId>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Sets an explicit edge ID (builder pattern).
    #[must_use]
    pub fn with_id(mut self, id: impl Into<EdgeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the ordering timestamp (builder pattern).
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Adds one passthrough attribute (builder pattern).
    ///
    /// Names in [`RESERVED_ATTRIBUTE_NAMES`] are dropped at validation.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: Value) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    /// Replaces all passthrough attributes (builder pattern).
    #[must_use]
    pub fn with_attributes(mut self, attributes: HashMap<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Returns the explicit ID, if one was supplied.
    #[must_use]
    pub fn id(&self) -> Option<&EdgeId> {
        self.id.as_ref()
    }

    /// Checks that both endpoints are present.
    ///
    /// An empty string counts as absent. No identifier is assigned here.
    /// Attributes named like an edge field are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::MissingEndpoint` naming the absent endpoint(s).
    pub fn validate(self) -> Result<ValidatedEdge> {
        let source = self.source.filter(|s| !s.as_str().is_empty());
        let destination = self.destination.filter(|d| !d.as_str().is_empty());

        match (source, destination) {
            (Some(source), Some(destination)) => {
                let mut attributes = self.attributes;
                attributes.retain(|name, _| {
                    let reserved = RESERVED_ATTRIBUTE_NAMES.contains(&name.as_str());
                    if reserved {
                        tracing::warn!(
                            attribute = %name,
                            "Dropping attribute that shadows an edge field"
                        );
                    }
                    !reserved
                });
                Ok(ValidatedEdge {
                    source,
                    destination,
                    id: self.id,
                    timestamp: self.timestamp,
                    attributes,
                })
            }
            (None, Some(_)) => Err(GraphError::MissingEndpoint {
                missing: MissingEndpoint::Source,
            }),
            (Some(_), None) => Err(GraphError::MissingEndpoint {
                missing: MissingEndpoint::Destination,
            }),
            (None, None) => Err(GraphError::MissingEndpoint {
                missing: MissingEndpoint::Both,
            }),
        }
    }
}

/// A candidate that passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEdge {
    source: NodeId,
    destination: NodeId,
    id: Option<EdgeId>,
    timestamp: Option<i64>,
    attributes: HashMap<String, Value>,
}

impl ValidatedEdge {
    /// Returns the source node.
    #[must_use]
    pub fn source(&self) -> &NodeId {
        &self.source
    }

    /// Returns the destination node.
    #[must_use]
    pub fn destination(&self) -> &NodeId {
        &self.destination
    }

    /// Returns the caller-supplied ID, if any.
    #[must_use]
    pub fn explicit_id(&self) -> Option<&EdgeId> {
        self.id.as_ref()
    }

    /// Finalizes the edge, calling `assign_id` only when no ID was supplied.
    pub(crate) fn into_edge(self, assign_id: impl FnOnce() -> EdgeId) -> Edge {
        Edge {
            id: self.id.unwrap_or_else(assign_id),
            source: self.source,
            destination: self.destination,
            timestamp: self.timestamp,
            attributes: self.attributes,
        }
    }
}
