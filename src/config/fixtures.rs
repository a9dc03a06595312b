use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate, invalid};
use crate::fixtures::{self, UserFixture};

/// Accounts the runner creates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturesConfig {
    #[serde(default = "fixtures::defaults")]
    pub users: Vec<UserFixture>,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            users: fixtures::defaults(),
        }
    }
}

impl Validate for FixturesConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.users.is_empty() {
            return Err(invalid("fixtures.users must contain at least one user"));
        }

        let mut seen = HashSet::new();
        for (index, user) in self.users.iter().enumerate() {
            let fields = [
                ("username", &user.username),
                ("email", &user.email),
                ("password", &user.password),
                ("first_name", &user.first_name),
                ("last_name", &user.last_name),
                ("contact_email", &user.contact_email),
            ];
            for (name, value) in fields {
                if value.is_empty() {
                    return Err(invalid(format!("fixtures.users[{index}].{name} cannot be empty")));
                }
            }

            if !seen.insert(user.username.as_str()) {
                return Err(invalid(format!(
                    "fixtures.users[{index}].username {} is used more than once",
                    user.username
                )));
            }
        }

        Ok(())
    }
}
