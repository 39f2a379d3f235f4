//! Helpers for loosely typed form bodies posted by the front end.

use serde::{Deserialize, Deserializer};

/// A field counts as provided only when it is present, non-null and non-empty.
pub fn present(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

/// Ids arrive either as numbers or as strings from a `<select>`; an empty
/// selection means none.
pub fn lenient_id<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(de)? {
        None => Ok(None),
        Some(Raw::Int(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Free-text fields accept any JSON scalar. Numbers and booleans are kept as
/// their text so `"phone": 5551234` passes the presence check like `"5551234"`.
pub fn lenient_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        UInt(u64),
        Float(f64),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(de)?.map(|raw| match raw {
        Raw::Bool(b) => b.to_string(),
        Raw::Int(n) => n.to_string(),
        Raw::UInt(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}
