use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub uuid: String,
    pub email: String,
}
