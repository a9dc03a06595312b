use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate, invalid};

/// Where the services under test listen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Base URL of the auth service (serves `/api/auth/signup`)
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// Base URL of the profile service (serves `/api/profile/{uuid}`)
    #[serde(default = "default_profile_url")]
    pub profile_url: String,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_auth_url() -> String {
    "http://localhost:80".to_string()
}

fn default_profile_url() -> String {
    "http://localhost:82".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            profile_url: default_profile_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
        }
    }
}

fn validate_url(key: &str, url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(invalid(format!("{key} cannot be empty")));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(invalid(format!("{key} must start with http:// or https://")));
    }
    Ok(())
}

impl Validate for ServicesConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_url("services.auth_url", &self.auth_url)?;
        validate_url("services.profile_url", &self.profile_url)?;
        Ok(())
    }
}

impl Validate for HttpConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout == 0 {
            return Err(invalid("http.timeout must be > 0"));
        }
        Ok(())
    }
}
