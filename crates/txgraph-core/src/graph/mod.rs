//! In-memory transaction-flow graph.
//!
//! Provides the edge model, the append-only edge store with its node index,
//! and bounded walk enumeration between two nodes.
//!
//! # Example
//!
//! ```rust
//! use txgraph_core::graph::{EdgeCandidate, TransactionGraph};
//!
//! let mut graph = TransactionGraph::new();
//! graph.add_edge(EdgeCandidate::new("A", "B").with_id("1")).unwrap();
//! graph.add_edge(EdgeCandidate::new("B", "F").with_id("5")).unwrap();
//! graph.add_edge(EdgeCandidate::new("B", "B").with_id("888")).unwrap();
//!
//! assert_eq!(graph.count_edges(), 3);
//! assert_eq!(graph.find_edges("B").len(), 3);
//!
//! let paths = graph.find_edge_x2y("A", "F", 4).unwrap();
//! assert_eq!(paths.len(), 1);
//! ```

mod edge_store;
mod node_index;
mod shared;
pub mod traversal;
mod tx_graph;
mod types;

#[cfg(test)]
mod traversal_tests;
#[cfg(test)]
mod types_tests;

pub use edge_store::EdgeStore;
pub use node_index::NodeIndex;
pub use shared::SharedGraph;
pub use traversal::FlowAdjacency;
pub use tx_graph::{EdgePath, IngestReport, TransactionGraph};
pub use types::{Edge, EdgeCandidate, EdgeId, NodeId, ValidatedEdge, RESERVED_ATTRIBUTE_NAMES};
