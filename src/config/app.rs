use serde::{Deserialize, Serialize};

use super::{
    ChecksConfig, ConfigError, ENV_PREFIX, FixturesConfig, HttpConfig, ObservabilityConfig,
    ServicesConfig, Validate, invalid,
};

/// Top-level configuration that aggregates all config modules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub app: AppMetadata,
    /// Base URLs of the services under test
    #[serde(default)]
    pub services: ServicesConfig,
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Optional checks beyond the write/read cycle
    #[serde(default)]
    pub checks: ChecksConfig,
    /// Accounts to create and profiles to write
    #[serde(default)]
    pub fixtures: FixturesConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Target environment (development, staging, ...)
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_app_name() -> String {
    "lighter-e2e".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            environment: default_environment(),
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(invalid("app.name cannot be empty"));
        }
        if self.environment.is_empty() {
            return Err(invalid("app.environment cannot be empty"));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.services.validate()?;
        self.http.validate()?;
        self.observability.validate()?;
        self.fixtures.validate()?;
        Ok(())
    }
}

/// Load configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. Environment variables: LIGHTER_E2E__SERVICES__AUTH_URL=http://localhost:8080
/// 2. config/local.toml (git-ignored, developer overrides)
/// 3. config/{APP_ENV}.toml (development/staging/production)
/// 4. config/default.toml (base defaults)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};

    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate()?;

    Ok(app_config)
}
