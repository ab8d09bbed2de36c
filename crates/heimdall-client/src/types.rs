//! Heimdall API types.

use serde::{Deserialize, Deserializer};

/// Search response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "assetList", default)]
    pub asset_list: Vec<Asset>,
}

/// A single catalogue asset.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Asset {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
}

/// Asset ids come back as numbers on some endpoints and strings on others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}

/// Search hit ready to be rendered in chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
}
