//! Testing utilities (always available for integration tests)

pub mod stub;

use crate::config::{AppConfig, ServicesConfig};

pub use stub::{StubBehavior, StubServices, StubState};

/// Default configuration pointed at a running pair of stub services.
pub fn config(stub: &StubServices) -> AppConfig {
    AppConfig {
        services: ServicesConfig {
            auth_url: stub.auth_url.clone(),
            profile_url: stub.profile_url.clone(),
        },
        ..AppConfig::default()
    }
}
