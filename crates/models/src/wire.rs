//! Wire-format helpers shared by the response models.

use serde::{Deserialize, Deserializer};

/// Deserializes an identifier sent either as a JSON string or a JSON integer.
///
/// The single-user endpoint sends `"id": 2` while create sends `"id": "512"`;
/// both land in memory as the decimal string.
pub(crate) fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Signed(n) => n.to_string(),
        Id::Unsigned(n) => n.to_string(),
    })
}
