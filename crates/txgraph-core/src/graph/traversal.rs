//! Bounded walk enumeration between two nodes.
//!
//! Walks are enumerated, not simple paths: a walk may pass through the same
//! node more than once as long as it stays within the edge budget. Each
//! branch ends the first time it reaches the target. Self-loops are never
//! taken. Parallel edges fan out into separate walks.
//!
//! The enumeration runs on an explicit stack of `(node, walk)` frames, so
//! deep budgets do not grow the call stack.

use rustc_hash::FxHashSet;

use super::edge_store::EdgeStore;
use super::types::NodeId;
use crate::config::TraversalConfig;
use crate::error::{GraphError, Result};

/// Adjacency access needed by the walk enumerator.
///
/// Edges are addressed by slot, the stable position assigned by the store.
pub trait FlowAdjacency {
    /// Returns outgoing edges of `node` as `(slot, destination)` pairs,
    /// grouped by destination and in insertion order within a group.
    fn outgoing_edges(&self, node: &str) -> Vec<(usize, &NodeId)>;

    /// Returns the destination of the edge at `slot`.
    fn edge_destination(&self, slot: usize) -> Option<&NodeId>;
}

impl FlowAdjacency for EdgeStore {
    fn outgoing_edges(&self, node: &str) -> Vec<(usize, &NodeId)> {
        self.index()
            .outgoing_groups(node)
            .map(|groups| {
                groups
                    .iter()
                    .flat_map(|(destination, slots)| {
                        slots.iter().map(move |&slot| (slot, destination))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn edge_destination(&self, slot: usize) -> Option<&NodeId> {
        self.at(slot).map(|edge| edge.destination())
    }
}

/// A pending branch: the node it stands on and the edges taken so far.
struct Frame<'a> {
    node: &'a str,
    walk: Vec<usize>,
}

/// Enumerates every walk of at most `max_depth` edges from `start` that ends
/// the first time it reaches `target`.
///
/// Returns walks as slot sequences. An unknown `start` or a zero budget
/// yields no walks.
///
/// # Errors
///
/// - `GraphError::DepthLimitExceeded` if `max_depth` is above
///   `config.max_depth_ceiling`.
/// - `GraphError::PathLimitExceeded` if more than `config.max_paths` walks
///   are found.
pub fn enumerate_walks<'a, G: FlowAdjacency>(
    graph: &'a G,
    start: &'a str,
    target: &str,
    max_depth: usize,
    config: &TraversalConfig,
) -> Result<Vec<Vec<usize>>> {
    if max_depth > config.max_depth_ceiling {
        tracing::warn!(
            requested = max_depth,
            ceiling = config.max_depth_ceiling,
            "Rejected walk enumeration above depth ceiling"
        );
        return Err(GraphError::DepthLimitExceeded {
            requested: max_depth,
            ceiling: config.max_depth_ceiling,
        });
    }

    let mut walks = Vec::new();
    if max_depth == 0 {
        return Ok(walks);
    }

    let mut expanded = 0usize;
    let mut stack = vec![Frame {
        node: start,
        walk: Vec::new(),
    }];

    while let Some(frame) = stack.pop() {
        expanded += 1;
        let mut branches = Vec::new();

        for (slot, destination) in graph.outgoing_edges(frame.node) {
            if destination.as_str() == frame.node {
                continue;
            }

            let mut walk = Vec::with_capacity(frame.walk.len() + 1);
            walk.extend_from_slice(&frame.walk);
            walk.push(slot);

            if destination.as_str() == target {
                walks.push(walk);
                if walks.len() > config.max_paths {
                    return Err(GraphError::PathLimitExceeded {
                        limit: config.max_paths,
                    });
                }
            } else if walk.len() < max_depth {
                branches.push(Frame {
                    node: destination.as_str(),
                    walk,
                });
            }
        }

        // Reversed so the first outgoing edge is expanded first.
        stack.extend(branches.into_iter().rev());
    }

    tracing::debug!(
        start,
        target,
        max_depth,
        expanded,
        walks = walks.len(),
        "Walk enumeration finished"
    );
    Ok(walks)
}

/// Drops walks that are embedded as the tail of a longer walk.
///
/// When a walk passes back through `start`, the remainder after that visit
/// is itself a walk from `start` to the target; that shorter walk is reported
/// only through the longer one.
#[must_use]
pub fn subsume_embedded_walks<G: FlowAdjacency>(
    graph: &G,
    start: &str,
    walks: Vec<Vec<usize>>,
) -> Vec<Vec<usize>> {
    let keep: Vec<bool> = {
        let embedded: FxHashSet<&[usize]> = walks
            .iter()
            .flat_map(move |walk| {
                walk.iter()
                    .enumerate()
                    .take(walk.len().saturating_sub(1))
                    .filter(move |&(_, &slot)| {
                        graph
                            .edge_destination(slot)
                            .is_some_and(|node| node.as_str() == start)
                    })
                    .map(move |(i, _)| &walk[i + 1..])
            })
            .collect();

        walks
            .iter()
            .map(|walk| !embedded.contains(walk.as_slice()))
            .collect()
    };

    walks
        .into_iter()
        .zip(keep)
        .filter_map(|(walk, keep)| keep.then_some(walk))
        .collect()
}
