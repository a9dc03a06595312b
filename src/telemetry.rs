use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Installs the global fmt subscriber. `RUST_LOG` takes precedence over the
/// configured level. A second call keeps the subscriber already installed.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_ascii_lowercase()));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(false)
        .try_init()
    {
        ::tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
