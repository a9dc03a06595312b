use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}
