//! Ready-made pipelines for flights, hotels and activities.
//!
//! Each entry point clones the catalog table it needs, so price
//! adjustments never reach the shared catalog and repeated calls return
//! identical results.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{
    AccommodationFilter, ActivityStyleFilter, BudgetShareFilter, FallbackPolicy,
    FlightStyleFilter, InterestFilter, TravelerSurchargeFilter,
};
use anyhow::Result;
use catalog::{Activity, Catalog, Flight, Hotel, TravelRequest};
use tracing::instrument;

/// The three listing pipelines, built once and reused across requests.
pub struct ListingFilters {
    flights: FilterPipeline<Flight>,
    hotels: FilterPipeline<Hotel>,
    activities: FilterPipeline<Activity>,
}

impl ListingFilters {
    /// Build the pipelines with the given fallback policy for hotel types
    /// and activity interests.
    pub fn new(policy: FallbackPolicy) -> Self {
        Self {
            flights: flight_pipeline(),
            hotels: hotel_pipeline(policy),
            activities: activity_pipeline(policy),
        }
    }

    /// Style pricing, then the whole budget as the fare ceiling.
    #[instrument(skip_all, fields(style = %request.travel_style))]
    pub fn flights(&self, catalog: &Catalog, request: &TravelRequest) -> Result<Vec<Flight>> {
        self.flights.apply(catalog.flights().to_vec(), request)
    }

    /// Type preference, party surcharge, then budget per assumed night.
    #[instrument(
        skip_all,
        fields(accommodation = %request.accommodation_type, travelers = request.travelers)
    )]
    pub fn hotels(&self, catalog: &Catalog, request: &TravelRequest) -> Result<Vec<Hotel>> {
        self.hotels.apply(catalog.hotels().to_vec(), request)
    }

    /// Interests, style pricing, then budget per assumed activity.
    #[instrument(
        skip_all,
        fields(style = %request.travel_style, interests = request.interests.len())
    )]
    pub fn activities(&self, catalog: &Catalog, request: &TravelRequest) -> Result<Vec<Activity>> {
        self.activities.apply(catalog.activities().to_vec(), request)
    }
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self::new(FallbackPolicy::default())
    }
}

pub fn flight_pipeline() -> FilterPipeline<Flight> {
    FilterPipeline::new()
        .add_filter(FlightStyleFilter)
        .add_filter(BudgetShareFilter::whole_budget())
}

pub fn hotel_pipeline(policy: FallbackPolicy) -> FilterPipeline<Hotel> {
    FilterPipeline::new()
        .add_filter(AccommodationFilter::new(policy))
        .add_filter(TravelerSurchargeFilter)
        .add_filter(BudgetShareFilter::per_night())
}

pub fn activity_pipeline(policy: FallbackPolicy) -> FilterPipeline<Activity> {
    FilterPipeline::new()
        .add_filter(InterestFilter::new(policy))
        .add_filter(ActivityStyleFilter)
        .add_filter(BudgetShareFilter::per_activity())
}

/// Flights that fit the request, in catalog order.
pub fn get_flights(catalog: &Catalog, request: &TravelRequest) -> Result<Vec<Flight>> {
    flight_pipeline().apply(catalog.flights().to_vec(), request)
}

/// Hotels that fit the request, in catalog order.
pub fn get_hotels(catalog: &Catalog, request: &TravelRequest) -> Result<Vec<Hotel>> {
    hotel_pipeline(FallbackPolicy::default()).apply(catalog.hotels().to_vec(), request)
}

/// Activities that fit the request, in catalog order.
pub fn get_activities(catalog: &Catalog, request: &TravelRequest) -> Result<Vec<Activity>> {
    activity_pipeline(FallbackPolicy::default()).apply(catalog.activities().to_vec(), request)
}
