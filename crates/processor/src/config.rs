//! Processor configuration

use std::path::Path;

use alpha_schema::SchemaConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::signal::SIGNAL_LOGGER;
use crate::validator::VALIDATOR_LOGGER;

/// Environment variable holding the path of a JSON config file
pub const CONFIG_ENV: &str = "ALPHA_PROCESSOR_CONFIG";

/// Processor configuration
///
/// Every field has a default, so a config file only lists what it changes:
///
/// ```json
/// { "log_filter": "debug", "schema": { "allow_unknown_fields": false } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Schema inbound messages must satisfy
    pub schema: SchemaConfig,
    /// Filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Logger target for the validator (and its schema)
    pub validator_logger: String,
    /// Logger target for the signal computer
    pub signal_logger: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            schema: SchemaConfig::default(),
            log_filter: "info".to_string(),
            validator_logger: VALIDATOR_LOGGER.to_string(),
            signal_logger: SIGNAL_LOGGER.to_string(),
        }
    }
}

impl ProcessorConfig {
    /// Parse a JSON config and check its schema rules
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.schema.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Load from the file named by `ALPHA_PROCESSOR_CONFIG`, or defaults if unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                log::info!("Loading processor config from {:?}", path);
                Self::from_path(path)
            }
            None => Ok(Self::default()),
        }
    }
}
