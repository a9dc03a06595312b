use serde::{Deserialize, Serialize};

use crate::requests::v1::profile::ProfileRequest;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub uuid: String,
    pub email: String,
}

impl Profile {
    /// Field names as they appear on the wire, paired with their values.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("uuid", self.uuid.as_str()),
            ("email", self.email.as_str()),
        ]
    }
}

impl From<ProfileRequest> for Profile {
    fn from(request: ProfileRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            uuid: request.uuid,
            email: request.email,
        }
    }
}
