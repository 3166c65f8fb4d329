//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{defaults, ObservabilityConfig};

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Reads the `CAUSA_LOG` environment variable, e.g.
/// `CAUSA_LOG=causa_graph=debug`. Falls back to `causa=info`.
/// Calling it more than once is a no-op. Returns whether this call installed
/// the subscriber.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(defaults::DEFAULT_LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(format!("causa={}", defaults::DEFAULT_LOG_LEVEL)));
    install(filter)
}

/// Install the global subscriber with an explicit filter string.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter))
}

/// Install the global subscriber from config, if tracing is enabled there.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    config.tracing_enabled && init_tracing_with_filter(&config.filter_directive())
}

fn install(filter: EnvFilter) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let result = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
        match result {
            Ok(()) => installed = true,
            // The host application's subscriber stays in charge and receives this event.
            Err(err) => tracing::debug!(error = %err, "global subscriber already set; causa keeps it"),
        }
    });
    installed
}
