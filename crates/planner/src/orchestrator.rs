//! # Travel Planner
//!
//! Coordinates one recommendation:
//! 1. Validate the request
//! 2. Filter flights, hotels and activities (in parallel, off the async runtime)
//! 3. Generate the narrative at the same time
//! 4. Assemble the `Recommendation`
//!
//! Only an invalid request is an error. Every collaborator failure
//! degrades to a fixed placeholder.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use catalog::{Activity, Catalog, Flight, Hotel, TravelRequest};
use pipeline::{FallbackPolicy, ListingFilters};

use crate::collaborators::{NARRATIVE_FAILURE, NarrativeGenerator, UnavailableNarrative};
use crate::config::PlannerConfig;
use crate::recommendation::Recommendation;

type Listings = (Vec<Flight>, Vec<Hotel>, Vec<Activity>);

/// Builds recommendations from a shared catalog.
#[derive(Clone)]
pub struct TravelPlanner {
    catalog: Arc<Catalog>,
    filters: Arc<ListingFilters>,
    narrator: Arc<dyn NarrativeGenerator>,
}

impl TravelPlanner {
    /// Planner over `catalog` using the default fallback policy.
    pub fn new(catalog: Catalog, narrator: Arc<dyn NarrativeGenerator>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            filters: Arc::new(ListingFilters::default()),
            narrator,
        }
    }

    /// Planner without a narrative generator.
    pub fn offline(catalog: Catalog) -> Self {
        Self::new(catalog, Arc::new(UnavailableNarrative))
    }

    /// Wire collaborators from `config` for the catalog of `destination`.
    pub fn from_config(config: &PlannerConfig, destination: &str) -> Result<Self> {
        let narrator = config.narrative_generator()?;
        Ok(Self::new(Catalog::for_destination(destination), narrator).with_policy(config.fallback))
    }

    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.filters = Arc::new(ListingFilters::new(policy));
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Main entry point: build the recommendation for `request`.
    #[instrument(skip_all, fields(destination = %request.destination, budget = request.budget))]
    pub async fn recommend(&self, request: &TravelRequest) -> Result<Recommendation> {
        let start_time = Instant::now();
        request.validate().context("Rejected travel request")?;

        let (listings, narrative) = tokio::join!(
            self.filter_listings(request),
            self.narrative(request)
        );
        let (flights, hotels, activities) = listings?;
        info!(
            "Filtered {} flights, {} hotels, {} activities",
            flights.len(),
            hotels.len(),
            activities.len()
        );

        let recommendation = Recommendation {
            flights,
            hotels,
            activities,
            narrative,
        };
        info!(
            "Recommendation ready in {:.2?}, estimated cost {:.2}",
            start_time.elapsed(),
            recommendation.total_cost()
        );
        Ok(recommendation)
    }

    /// Run the three independent filters on the blocking pool.
    async fn filter_listings(&self, request: &TravelRequest) -> Result<Listings> {
        let catalog = self.catalog.clone();
        let filters = self.filters.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || -> Result<Listings> {
            let (flights, (hotels, activities)) = rayon::join(
                || filters.flights(&catalog, &request),
                || {
                    rayon::join(
                        || filters.hotels(&catalog, &request),
                        || filters.activities(&catalog, &request),
                    )
                },
            );
            Ok((
                flights.context("Failed to filter flights")?,
                hotels.context("Failed to filter hotels")?,
                activities.context("Failed to filter activities")?,
            ))
        })
        .await
        .context("Filter task panicked")?
    }

    /// Single best-effort narrative attempt.
    async fn narrative(&self, request: &TravelRequest) -> String {
        match self
            .narrator
            .generate(&request.destination, &request.dates, request.budget)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Narrative generation failed: {:#}", e);
                NARRATIVE_FAILURE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use catalog::{RequestError, TravelStyle};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::collaborators::UNAVAILABLE_NARRATIVE;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    /// Echoes its inputs and counts calls
    #[derive(Default)]
    struct EchoNarrative {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl NarrativeGenerator for EchoNarrative {
        async fn generate(&self, destination: &str, dates: &str, budget: f64) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("{destination} | {dates} | {budget}"))
        }
    }

    struct FailingNarrative;

    #[async_trait]
    impl NarrativeGenerator for FailingNarrative {
        async fn generate(&self, _: &str, _: &str, _: f64) -> Result<String> {
            Err(anyhow!("model overloaded"))
        }
    }

    fn paris_request(budget: f64) -> TravelRequest {
        TravelRequest::new("Paris", "May 5-9, 2025", budget)
    }

    // ============================================================================
    // Tests
    // ============================================================================

    #[tokio::test]
    async fn test_recommend_assembles_filtered_lists_and_narrative() {
        let narrator = Arc::new(EchoNarrative::default());
        let planner = TravelPlanner::new(Catalog::paris(), narrator.clone());
        let request = paris_request(5000.0);

        let rec = planner.recommend(&request).await.unwrap();

        assert_eq!(rec.flights, planner.catalog().flights().to_vec());
        assert_eq!(rec.activities.len(), 11);
        assert!(!rec.hotels.is_empty());
        assert_eq!(rec.narrative, "Paris | May 5-9, 2025 | 5000");
        assert_eq!(narrator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_narrative_failure_degrades_to_apology() {
        let planner = TravelPlanner::new(Catalog::paris(), Arc::new(FailingNarrative));
        let rec = planner.recommend(&paris_request(5000.0)).await.unwrap();
        assert_eq!(rec.narrative, NARRATIVE_FAILURE);
        assert_eq!(rec.flights.len(), 5);
    }

    #[tokio::test]
    async fn test_offline_planner_uses_placeholder() {
        let planner = TravelPlanner::offline(Catalog::paris());
        let rec = planner.recommend(&paris_request(5000.0)).await.unwrap();
        assert_eq!(rec.narrative, UNAVAILABLE_NARRATIVE);
    }

    #[tokio::test]
    async fn test_invalid_request_skips_the_narrative() {
        let narrator = Arc::new(EchoNarrative::default());
        let planner = TravelPlanner::new(Catalog::paris(), narrator.clone());

        let err = planner.recommend(&paris_request(0.0)).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<RequestError>(),
            Some(&RequestError::InvalidBudget(0.0))
        );
        assert_eq!(narrator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_concurrent_requests_do_not_share_adjustments() {
        let planner = TravelPlanner::offline(Catalog::paris());
        let luxury = paris_request(10_000.0).with_travel_style(TravelStyle::Luxury);
        let balanced = paris_request(10_000.0);

        let (a, b) = tokio::join!(planner.recommend(&luxury), planner.recommend(&balanced));
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_eq!(a.flights[0].price, 450.0);
        assert_eq!(b.flights[0].price, 300.0);
        assert_eq!(planner.catalog().flights()[0].price, 300.0);
    }

    #[tokio::test]
    async fn test_keep_empty_policy_is_applied() {
        let planner =
            TravelPlanner::offline(Catalog::paris()).with_policy(FallbackPolicy::KeepEmpty);
        let request =
            paris_request(5000.0).with_accommodation(catalog::AccommodationType::Resort);
        let rec = planner.recommend(&request).await.unwrap();
        assert!(rec.hotels.is_empty());
        assert!(rec.has_options());
    }
}
