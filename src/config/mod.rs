pub mod app;
pub mod checks;
pub mod fixtures;
pub mod observability;
pub mod services;

use thiserror::Error;

pub use app::{AppConfig, AppMetadata};
pub use checks::ChecksConfig;
pub use fixtures::FixturesConfig;
pub use observability::ObservabilityConfig;
pub use services::{HttpConfig, ServicesConfig};

/// Prefix for environment variable overrides, e.g. `LIGHTER_E2E__HTTP__TIMEOUT=5`.
pub const ENV_PREFIX: &str = "LIGHTER_E2E";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Semantic checks applied after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the checker configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}

pub(crate) fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError(message.into())
}
