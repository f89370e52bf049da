//! Records returned by the search source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which Serper endpoint to query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Places,
    News,
    Images,
}

impl SearchKind {
    /// Path segment appended to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            SearchKind::Places => "places",
            SearchKind::News => "news",
            SearchKind::Images => "images",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A point of interest at the destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    #[serde(alias = "title", default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(alias = "ratingCount", alias = "reviewsCount", default)]
    pub reviews: Option<u64>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

/// A recent headline about the destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub source: String,
}

/// A destination photo with display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationImage {
    pub url: String,
    pub title: String,
    pub source: String,
    pub date: String,
    pub photographer: String,
    pub description: String,
    pub tags: String,
    /// Trivia shown next to Paris images
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<String>,
}

// Raw response envelopes

#[derive(Debug, Deserialize)]
pub(crate) struct PlacesResponse {
    #[serde(default)]
    pub places: Vec<Attraction>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewsResponse {
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImagesResponse {
    #[serde(default)]
    pub images: Vec<RawImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawImage {
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub source: Option<String>,
    pub date: Option<String>,
}
