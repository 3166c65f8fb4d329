use serde::{Deserialize, Serialize};

use super::defaults;

/// Adjustment-set search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentConfig {
    /// Largest candidate set to try. 0 means every size.
    pub max_set_size: usize,
    /// Drop descendants of the treatment from the candidates before searching.
    pub exclude_descendants: bool,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            max_set_size: defaults::DEFAULT_MAX_ADJUSTMENT_SET_SIZE,
            exclude_descendants: defaults::DEFAULT_EXCLUDE_DESCENDANTS,
        }
    }
}
