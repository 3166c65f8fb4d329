// Single source of truth for all default values.

// --- Adjustment search ---
pub const DEFAULT_MAX_ADJUSTMENT_SET_SIZE: usize = 0; // 0 = unbounded
pub const DEFAULT_EXCLUDE_DESCENDANTS: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TRACING_ENABLED: bool = false;
pub const DEFAULT_LOG_ENV_VAR: &str = "CAUSA_LOG";
