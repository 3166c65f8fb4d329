use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Install a tracing subscriber when the engine is created.
    pub tracing_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            tracing_enabled: defaults::DEFAULT_TRACING_ENABLED,
        }
    }
}

impl ObservabilityConfig {
    /// Filter directive scoped to the causa crates.
    pub fn filter_directive(&self) -> String {
        format!("causa={lvl},causa_core={lvl},causa_graph={lvl}", lvl = self.log_level)
    }
}
