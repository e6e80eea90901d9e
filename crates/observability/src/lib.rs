//! Tracing and logging (shared setup).

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
/// An invalid configuration falls back to the defaults.
pub fn init() {
    let (config, error) = match config::ObservabilityConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (config::ObservabilityConfig::default(), Some(err)),
    };
    tracing::init(&config);
    if let Some(err) = error {
        ::tracing::warn!(error = %err, "invalid observability configuration; using defaults");
    }
}

/// Configuration loaded from environment variables.
pub mod config;

/// Tracing subscriber setup (filters, formats).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
