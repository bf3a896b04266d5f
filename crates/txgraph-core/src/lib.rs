//! # txgraph core
//!
//! In-memory transaction-flow graph engine for blockchain forensics.
//!
//! Edges are directed value transfers between addresses. The engine stores
//! them in insertion order, indexes them by node and by (source, destination)
//! pair, and enumerates bounded-depth walks between two nodes to trace where
//! funds went.
//!
//! ## Quick Start
//!
//! ```rust
//! use txgraph_core::graph::{EdgeCandidate, TransactionGraph};
//!
//! let mut graph = TransactionGraph::new();
//! for (src, dst) in [("A", "B"), ("B", "C"), ("A", "C")] {
//!     graph.add_edge(EdgeCandidate::new(src, dst)).unwrap();
//! }
//!
//! // Direct transfers A -> C
//! assert_eq!(graph.find_edges_xy("A", "C").len(), 1);
//!
//! // All flows from A to C within two hops
//! let paths = graph.find_edge_x2y("A", "C", 2).unwrap();
//! assert_eq!(paths.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;

pub use config::TraversalConfig;
pub use error::{GraphError, MissingEndpoint, Result};
pub use graph::{Edge, EdgeCandidate, EdgeId, EdgePath, NodeId, SharedGraph, TransactionGraph};
