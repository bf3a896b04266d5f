//! Edge file loading and query commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::{json, Value};
use txgraph_core::export::FlowDocument;
use txgraph_core::graph::{EdgeCandidate, TransactionGraph};
use txgraph_core::TraversalConfig;

/// Query to run against the loaded graph.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count stored edges and known addresses
    Count,
    /// List every edge in insertion order
    List,
    /// Edges where the address is sender or receiver
    Edges {
        /// Address to look up
        node: String,
    },
    /// Earliest timestamped edge touching the address
    Earliest {
        /// Address to look up
        node: String,
    },
    /// Direct transfers from one address to another
    Direct {
        /// Sending address
        source: String,
        /// Receiving address
        destination: String,
    },
    /// Multi-hop flows from one address to another
    Paths {
        /// Address the flow starts at
        start: String,
        /// Address the flow ends at
        target: String,
        /// Maximum number of hops
        #[arg(short, long, default_value_t = 4)]
        depth: usize,
        /// Keep walks embedded in longer walks
        #[arg(long)]
        all: bool,
    },
    /// Multi-hop flows as a nodes/links document
    Export {
        /// Address the flow starts at
        start: String,
        /// Address the flow ends at
        target: String,
        /// Maximum number of hops
        #[arg(short, long, default_value_t = 4)]
        depth: usize,
    },
    /// Print the effective traversal limits as TOML
    Config,
}

/// Rendered command result.
pub enum Output {
    Json(Value),
    Text(String),
}

impl Command {
    #[must_use]
    pub fn needs_graph(&self) -> bool {
        !matches!(self, Self::Config)
    }

    pub fn run(&self, graph: &TransactionGraph) -> Result<Output> {
        let value = match self {
            Self::Count => json!({
                "edges": graph.count_edges(),
                "nodes": graph.node_count(),
            }),
            Self::List => serde_json::to_value(graph.list_edges().collect::<Vec<_>>())?,
            Self::Edges { node } => serde_json::to_value(graph.find_edges(node))?,
            Self::Earliest { node } => {
                let edge = graph
                    .find_edge(node)
                    .with_context(|| format!("No timestamped edge touches {node}"))?;
                serde_json::to_value(edge)?
            }
            Self::Direct {
                source,
                destination,
            } => serde_json::to_value(graph.find_edges_xy(source, destination))?,
            Self::Paths {
                start,
                target,
                depth,
                all,
            } => {
                let paths = if *all {
                    graph.enumerate_walks(start, target, *depth)
                } else {
                    graph.find_edge_x2y(start, target, *depth)
                }
                .with_context(|| format!("Tracing {start} -> {target} failed"))?;
                serde_json::to_value(paths)?
            }
            Self::Export {
                start,
                target,
                depth,
            } => {
                let paths = graph
                    .find_edge_x2y(start, target, *depth)
                    .with_context(|| format!("Tracing {start} -> {target} failed"))?;
                serde_json::to_value(FlowDocument::from_paths(paths))?
            }
            Self::Config => return Ok(Output::Text(graph.config().to_toml()?)),
        };
        Ok(Output::Json(value))
    }
}

/// Loads an edge file into a graph, skipping records that cannot be added.
///
/// Records that are not edge mappings are dropped here; the rest go through
/// [`TransactionGraph::ingest`], which rejects those missing an endpoint.
pub fn load_graph(path: &Path, config: TraversalConfig) -> Result<TransactionGraph> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge file {}", path.display()))?;
    let records: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of edge records", path.display()))?;

    let mut unreadable = 0usize;
    let candidates: Vec<EdgeCandidate> = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| match serde_json::from_value(record) {
            Ok(candidate) => Some(candidate),
            Err(err) => {
                tracing::warn!(position, error = %err, "Skipping unreadable edge record");
                unreadable += 1;
                None
            }
        })
        .collect();

    let mut graph = TransactionGraph::with_config(config);
    let report = graph.ingest(candidates);

    tracing::info!(
        edges = report.added,
        nodes = graph.node_count(),
        unreadable,
        rejected = report.rejected.len(),
        "Loaded {}",
        path.display()
    );
    Ok(graph)
}
