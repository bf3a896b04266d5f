//! Error types for txgraph-core.

use std::fmt;

use thiserror::Error;

/// Which endpoint(s) an edge candidate was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEndpoint {
    /// No source node.
    Source,
    /// No destination node.
    Destination,
    /// Neither endpoint.
    Both,
}

impl fmt::Display for MissingEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
            Self::Both => f.write_str("source and destination"),
        }
    }
}

/// Graph engine error types.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Edge candidate rejected because an endpoint is absent.
    #[error("Edge is missing its {missing}")]
    MissingEndpoint {
        /// The absent endpoint(s).
        missing: MissingEndpoint,
    },

    /// No edge satisfies a single-edge lookup.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Requested traversal depth is above the configured ceiling.
    #[error("Traversal depth {requested} exceeds ceiling {ceiling}")]
    DepthLimitExceeded {
        /// Depth asked for by the caller.
        requested: usize,
        /// Configured maximum.
        ceiling: usize,
    },

    /// Walk enumeration produced more paths than allowed.
    #[error("Walk enumeration exceeded the limit of {limit} paths")]
    PathLimitExceeded {
        /// Configured maximum number of paths.
        limit: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for GraphError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GraphError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_endpoint_display() {
        let err = GraphError::MissingEndpoint {
            missing: MissingEndpoint::Both,
        };
        assert_eq!(err.to_string(), "Edge is missing its source and destination");
    }

    #[test]
    fn test_depth_limit_display() {
        let err = GraphError::DepthLimitExceeded {
            requested: 40,
            ceiling: 16,
        };
        assert_eq!(err.to_string(), "Traversal depth 40 exceeds ceiling 16");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GraphError = json_err.into();
        assert!(matches!(err, GraphError::Json(_)));
    }
}
