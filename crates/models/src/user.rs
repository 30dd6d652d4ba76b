use serde::{Deserialize, Serialize};

use crate::wire::string_or_integer;

/// Body sent to create or update a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequestModel {
    pub name: String,
    pub job: String,
}

impl UserRequestModel {
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// Response of create (`201`) and update (`200`).
///
/// Create fills `id` and `createdAt`; update fills `updatedAt`. Whatever the
/// server leaves out stays an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserResponseModel {
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    pub name: String,
    pub job: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}
