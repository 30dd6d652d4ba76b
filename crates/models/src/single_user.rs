use serde::{Deserialize, Serialize};

use crate::wire::string_or_integer;

/// Envelope returned by `GET /users/{id}`: `{ "data": {...}, "support": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFullResponseModel {
    pub data: DataResponseModel,
    pub support: SupportModel,
}

/// The user record inside the `data` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataResponseModel {
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    pub email: String,
    #[serde(rename = "first_name")]
    pub first_name: String,
    #[serde(rename = "last_name")]
    pub last_name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportModel {
    pub url: String,
    pub text: String,
}
