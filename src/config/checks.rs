use serde::{Deserialize, Serialize};

/// Checks run after the write/read cycle. Both are off unless enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksConfig {
    /// Repeat every write with the same payload and read again
    #[serde(default)]
    pub idempotence: bool,
    /// Read the profile of an identity nobody wrote
    #[serde(default)]
    pub unknown_profile: bool,
}
