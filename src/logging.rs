//! Tracing setup
//!
//! Log output goes to stderr so it never mixes with command output. The filter
//! is read from `PENNYWISE_LOG` (e.g. `PENNYWISE_LOG=pennywise=debug`).

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV_VAR: &str = "PENNYWISE_LOG";

const DEFAULT_FILTER: &str = "pennywise=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber. Safe to call more than once.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber may already be installed by an embedding application.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        tracing::debug!("tracing initialized");
    });
}
