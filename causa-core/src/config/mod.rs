//! Configuration loaded from TOML. Every section falls back to its defaults.

mod adjustment_config;
pub mod defaults;
mod observability_config;

use serde::{Deserialize, Serialize};

pub use adjustment_config::AdjustmentConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{CausaError, CausaResult};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausaConfig {
    pub adjustment: AdjustmentConfig,
    pub observability: ObservabilityConfig,
}

impl CausaConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(input: &str) -> CausaResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| CausaError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> CausaResult<String> {
        toml::to_string(self).map_err(|e| CausaError::ConfigError(e.to_string()))
    }

    fn validate(&self) -> CausaResult<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(CausaError::ConfigError(format!(
                "unknown log level: {}",
                self.observability.log_level
            )));
        }
        Ok(())
    }
}
