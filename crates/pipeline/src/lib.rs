//! Filtering pipeline for trip listings.
//!
//! This crate provides:
//! - Filter trait and implementations for listing filtering
//! - FilterPipeline for composing filters
//! - Ready-made flight, hotel and activity pipelines
//!
//! ## Architecture
//! Each listing type runs through its own pipeline:
//! 1. Preference filters narrow the catalog (accommodation type, interests)
//! 2. Price filters adjust copies for style tier or party size
//! 3. A budget-share filter drops anything above its slice of the budget
//!
//! Pipelines validate the request before filtering, so a non-positive
//! budget or an empty party is rejected rather than yielding an empty list.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, TravelRequest};
//! use pipeline::ListingFilters;
//!
//! let catalog = Catalog::paris();
//! let request = TravelRequest::new("Paris", "May 5-9, 2025", 5000.0);
//!
//! let filters = ListingFilters::default();
//! let flights = filters.flights(&catalog, &request)?;
//! let hotels = filters.hotels(&catalog, &request)?;
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod listings;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use filters::FallbackPolicy;
pub use listings::{ListingFilters, get_activities, get_flights, get_hotels};
pub use traits::{Filter, Priced};
