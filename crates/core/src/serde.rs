//! Serde helper functions for form and JSON deserialization.

use serde::{Deserialize, Deserializer};

/// Deserialize a string, treating `null` as an empty string.
///
/// Combined with `#[serde(default)]` this lets missing, `null` and blank
/// fields all reach validation as `""`.
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}
