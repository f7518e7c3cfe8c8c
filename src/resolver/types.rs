use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classification of the thing a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Book,
    Article,
    Repository,
    Video,
    Website,
    Movie,
    Series,
    Album,
    Track,
    Comic,
    Game,
}

impl ItemType {
    /// Maps a SensCritique catalogue path segment (`/film/...`, `/livre/...`) to a type.
    pub fn from_catalogue_segment(segment: &str) -> Option<Self> {
        match segment.to_ascii_lowercase().as_str() {
            "film" => Some(Self::Movie),
            "serie" => Some(Self::Series),
            "livre" => Some(Self::Book),
            "album" => Some(Self::Album),
            "morceau" => Some(Self::Track),
            "bd" => Some(Self::Comic),
            "jeuvideo" => Some(Self::Game),
            _ => None,
        }
    }
}

/// A provider-specific fact attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Count(u64),
    Text(String),
}

impl From<u64> for MetaValue {
    fn from(value: u64) -> Self {
        MetaValue::Count(value)
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Text(value)
    }
}

pub type ItemMeta = BTreeMap<String, MetaValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Always the URL the caller passed in, unmodified.
    pub product_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ItemMeta>,
}

impl NormalizedItem {
    /// Empty record for `url`; parsers fill in what they find.
    pub fn new(url: &str, item_type: ItemType) -> Self {
        Self {
            title: None,
            author: None,
            description: None,
            image_url: None,
            product_url: url.to_string(),
            provider: None,
            item_type,
            meta: None,
        }
    }

    pub fn with_provider(mut self, provider: &str) -> Self {
        self.provider = Some(provider.to_string());
        self
    }
}
