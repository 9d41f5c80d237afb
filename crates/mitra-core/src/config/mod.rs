//! Configuration loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields a
//! fully-populated config and partial documents override only what they name.
//!
//! # Examples
//!
//! ```
//! use mitra_core::config::MitraConfig;
//!
//! let config = MitraConfig::from_toml("[chain]\nmax_attempts = 4\n").unwrap();
//! assert_eq!(config.chain.max_attempts, 4);
//! assert_eq!(config.chain.initial_retry_delay_secs, 3);
//! ```

mod chain_config;
pub mod defaults;
mod model_config;
mod observability_config;
mod prediction_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use chain_config::ChainConfig;
pub use model_config::ModelConfig;
pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;
pub use storage_config::StorageConfig;

use crate::errors::{MitraError, MitraResult};

/// Root configuration for the whole pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MitraConfig {
    pub prediction: PredictionConfig,
    pub chain: ChainConfig,
    pub model: ModelConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl MitraConfig {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> MitraResult<Self> {
        toml::from_str(source).map_err(|e| MitraError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> MitraResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            MitraError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&source)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> MitraResult<String> {
        toml::to_string(self).map_err(|e| MitraError::ConfigError(e.to_string()))
    }
}
