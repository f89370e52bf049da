//! Environment-driven wiring for the planner's collaborators.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use llm_client::GeminiClient;
use pipeline::FallbackPolicy;
use sources::SerperClient;

use crate::collaborators::{
    AttractionSource, NarrativeGenerator, NoAttractions, UnavailableNarrative,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to wire the planner's collaborators.
///
/// Keys are optional; a missing key selects the matching null
/// collaborator instead of failing.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub google_api_key: Option<String>,
    pub serper_api_key: Option<String>,
    pub model: String,
    /// Overrides for the service endpoints, mostly for tests
    pub llm_base_url: Option<String>,
    pub search_base_url: Option<String>,
    pub timeout: Duration,
    pub fallback: FallbackPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            serper_api_key: None,
            model: llm_client::DEFAULT_MODEL.to_string(),
            llm_base_url: None,
            search_base_url: None,
            timeout: DEFAULT_TIMEOUT,
            fallback: FallbackPolicy::default(),
        }
    }
}

fn present(key: &Option<String>) -> Option<&str> {
    key.as_deref().map(str::trim).filter(|k| !k.is_empty())
}

impl PlannerConfig {
    pub fn narrative_generator(&self) -> Result<Arc<dyn NarrativeGenerator>> {
        let Some(key) = present(&self.google_api_key) else {
            return Ok(Arc::new(UnavailableNarrative));
        };
        let mut client = GeminiClient::new(key, self.model.clone())
            .with_timeout(self.timeout)
            .context("Failed to build model client")?;
        if let Some(url) = &self.llm_base_url {
            client = client.with_base_url(url.clone());
        }
        Ok(Arc::new(client))
    }

    pub fn attraction_source(&self) -> Result<Arc<dyn AttractionSource>> {
        let source: Arc<dyn AttractionSource> = match self.search_client()? {
            Some(client) => Arc::new(client),
            None => Arc::new(NoAttractions),
        };
        Ok(source)
    }

    /// Search client for the configured key, if any.
    pub fn search_client(&self) -> Result<Option<SerperClient>> {
        let Some(key) = present(&self.serper_api_key) else {
            return Ok(None);
        };
        let mut client = SerperClient::new(key)
            .with_timeout(self.timeout)
            .context("Failed to build search client")?;
        if let Some(url) = &self.search_base_url {
            client = client.with_base_url(url.clone());
        }
        Ok(Some(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_select_null_collaborators() {
        let config = PlannerConfig {
            serper_api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.search_client().unwrap().is_none());
        assert!(config.narrative_generator().is_ok());
        assert_eq!(config.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_present_key_builds_client() {
        let config = PlannerConfig {
            serper_api_key: Some("key".to_string()),
            search_base_url: Some("http://127.0.0.1:9".to_string()),
            ..Default::default()
        };
        assert!(config.search_client().unwrap().is_some());
    }
}
