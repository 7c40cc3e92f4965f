//! Serde helper functions for plugin payloads.
//!
//! The orchestrator sends every parameter as a string and uses `""` when a
//! value is not set, so empty strings are treated as absent.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating `null` and `""` as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}
