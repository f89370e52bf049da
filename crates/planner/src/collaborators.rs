//! External collaborators of the planner.
//!
//! The planner only sees these traits, so a missing API key or a test
//! double is just another implementation.

use anyhow::Result;
use async_trait::async_trait;

use llm_client::GeminiClient;
use sources::{Attraction, SerperClient};

/// Shown when no narrative generator is configured.
pub const UNAVAILABLE_NARRATIVE: &str =
    "Unable to generate travel plan at this time. Please try again later.";

/// Shown when the narrative generator fails.
pub const NARRATIVE_FAILURE: &str = "Sorry, we encountered an issue while creating your \
travel plan. Please try again with different parameters or contact support if the problem \
persists.";

/// Produces free-text itinerary prose for a trip.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, destination: &str, dates: &str, budget: f64) -> Result<String>;
}

/// Supplies points of interest for a destination.
#[async_trait]
pub trait AttractionSource: Send + Sync {
    async fn attractions(&self, destination: &str) -> Result<Vec<Attraction>>;
}

#[async_trait]
impl NarrativeGenerator for GeminiClient {
    async fn generate(&self, destination: &str, dates: &str, budget: f64) -> Result<String> {
        Ok(self.generate_travel_plan(destination, dates, budget).await?)
    }
}

#[async_trait]
impl AttractionSource for SerperClient {
    async fn attractions(&self, destination: &str) -> Result<Vec<Attraction>> {
        Ok(SerperClient::attractions(self, destination).await?)
    }
}

/// Stand-in generator used without an API key.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableNarrative;

#[async_trait]
impl NarrativeGenerator for UnavailableNarrative {
    async fn generate(&self, _destination: &str, _dates: &str, _budget: f64) -> Result<String> {
        Ok(UNAVAILABLE_NARRATIVE.to_string())
    }
}

/// Stand-in source used without an API key.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAttractions;

#[async_trait]
impl AttractionSource for NoAttractions {
    async fn attractions(&self, _destination: &str) -> Result<Vec<Attraction>> {
        Ok(Vec::new())
    }
}
