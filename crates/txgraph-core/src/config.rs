//! Traversal resource limits.
//!
//! Walk enumeration grows exponentially with depth on dense graphs, so every
//! graph carries explicit ceilings. Values are layered with `figment`:
//! built-in defaults, then an optional TOML file, then `TXGRAPH_*`
//! environment variables.
//!
//! ```toml
//! max_depth_ceiling = 12
//! max_paths = 50000
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Prefix of the environment variables read by [`TraversalConfig::load`].
pub const ENV_PREFIX: &str = "TXGRAPH_";

/// Ceilings applied to every walk enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Largest `max_depth` a caller may request.
    pub max_depth_ceiling: usize,
    /// Largest number of walks one query may produce.
    pub max_paths: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth_ceiling: 16,
            max_paths: 100_000,
        }
    }
}

impl TraversalConfig {
    /// Creates a config with the given ceilings.
    #[must_use]
    pub fn new(max_depth_ceiling: usize, max_paths: usize) -> Self {
        Self {
            max_depth_ceiling,
            max_paths,
        }
    }

    /// Loads the config from defaults, an optional TOML file, and the
    /// environment, later sources overriding earlier ones.
    ///
    /// A missing file is not an error; figment skips absent TOML files.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Config` if a source holds a malformed value.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        tracing::debug!(
            max_depth_ceiling = config.max_depth_ceiling,
            max_paths = config.max_paths,
            "Loaded traversal config"
        );
        Ok(config)
    }

    /// Renders the config as TOML.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Config` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
