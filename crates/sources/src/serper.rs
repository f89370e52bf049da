//! Serper search client.
//!
//! Every query is sent as `"<query> travel guide"` with US/English
//! localisation. Result lists are capped the way the UI shows them:
//! five attractions, three headlines.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error, instrument, warn};

use crate::images::{fallback_images, from_raw, image_query, narrow_by_category};
use crate::types::{
    Attraction, DestinationImage, ImagesResponse, NewsItem, NewsResponse, PlacesResponse,
    SearchKind,
};
use crate::{Result, SearchError};

pub const DEFAULT_BASE_URL: &str = "https://google.serper.dev";
pub const MAX_ATTRACTIONS: usize = 5;
pub const MAX_NEWS: usize = 3;

/// Client for the search source.
#[derive(Clone)]
pub struct SerperClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerperClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another endpoint (trailing slash optional).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Abort requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    async fn post<T: DeserializeOwned>(&self, query: &str, kind: SearchKind) -> Result<T> {
        let url = format!("{}/{}", self.base_url, kind.path());
        let payload = json!({
            "q": format!("{} travel guide", query),
            "gl": "us",
            "hl": "en",
        });
        debug!("Searching {} for '{}'", url, query);

        let response = self
            .client
            .post(&url)
            .header("X-API-KEY", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Search API error {}: {}", status, body);
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            error!("Could not decode {} results: {}", kind, e);
            SearchError::Decode(e)
        })
    }

    /// Top attractions for a destination.
    #[instrument(skip(self))]
    pub async fn attractions(&self, destination: &str) -> Result<Vec<Attraction>> {
        let response: PlacesResponse = self.post(destination, SearchKind::Places).await?;
        let mut places = response.places;
        places.truncate(MAX_ATTRACTIONS);
        debug!("Found {} attractions", places.len());
        Ok(places)
    }

    /// Latest headlines about a destination.
    #[instrument(skip(self))]
    pub async fn news(&self, destination: &str) -> Result<Vec<NewsItem>> {
        let response: NewsResponse = self.post(destination, SearchKind::News).await?;
        let mut news = response.news;
        news.truncate(MAX_NEWS);
        Ok(news)
    }

    /// Destination photos, optionally refined by category and period.
    ///
    /// If the search fails for Paris, a fixed set of stock images is
    /// returned instead of the error.
    #[instrument(skip(self))]
    pub async fn images(
        &self,
        destination: &str,
        count: usize,
        category: Option<&str>,
        time_filter: Option<&str>,
    ) -> Result<Vec<DestinationImage>> {
        let query = image_query(destination, category, time_filter);
        let response: ImagesResponse = match self.post(&query, SearchKind::Images).await {
            Ok(response) => response,
            Err(e) => {
                let fallback = fallback_images(destination);
                if fallback.is_empty() {
                    return Err(e);
                }
                warn!("Image search failed ({}), using stock images", e);
                return Ok(fallback);
            }
        };

        let images: Vec<DestinationImage> = response
            .images
            .into_iter()
            .take(count)
            .map(|raw| from_raw(raw, destination, category))
            .collect();
        Ok(narrow_by_category(images, category))
    }
}
