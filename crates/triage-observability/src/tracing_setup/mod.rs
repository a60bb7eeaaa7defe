//! Tracing setup: structured logging, span macros and event helpers.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;
use triage_core::config::ObservabilityConfig;

/// Environment variable read for the log filter.
pub const LOG_ENV_VAR: &str = "TRIAGE_LOG";

/// Initialize JSON tracing filtered by `TRIAGE_LOG`, `info` when unset.
pub fn init_tracing() {
    install(env_filter_or("info"), true);
}

/// Initialize JSON tracing with a fixed filter (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), true);
}

/// Initialize tracing from config. `TRIAGE_LOG` still wins over
/// `log_level` when set.
///
/// Returns false if a global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    install(env_filter_or(&config.log_level), config.json_logs)
}

fn env_filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
