use serde::{Deserialize, Serialize};

use crate::requests::v1::auth::SignupRequest;
use crate::requests::v1::profile::ProfileRequest;

/// An account the runner creates, together with the profile it writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFixture {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Contact address stored on the profile, distinct from the login email.
    pub contact_email: String,
}

impl UserFixture {
    pub fn signup(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn profile(&self, uuid: &str) -> ProfileRequest {
        ProfileRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            uuid: uuid.to_string(),
            email: self.contact_email.clone(),
        }
    }
}

/// The two accounts exercised by a default run.
pub fn defaults() -> Vec<UserFixture> {
    vec![
        UserFixture {
            username: "test_user".to_string(),
            email: "test_email@berkeley.edu".to_string(),
            password: "test_password".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            contact_email: "contact_email@berkeley.edu".to_string(),
        },
        UserFixture {
            username: "test_user2".to_string(),
            email: "test_email2@berkeley.edu".to_string(),
            password: "test_password2".to_string(),
            first_name: "Test".to_string(),
            last_name: "User2".to_string(),
            contact_email: "contact_email2@berkeley.edu".to_string(),
        },
    ]
}
