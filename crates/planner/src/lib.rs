//! Planner crate for the trip planner.
//!
//! This crate contains the orchestrator that turns a `TravelRequest` into a
//! `Recommendation`, plus the enrichment step that merges searched
//! attractions into it afterwards.

pub mod collaborators;
pub mod config;
pub mod enrichment;
pub mod orchestrator;
pub mod recommendation;

pub use collaborators::{
    AttractionSource, NARRATIVE_FAILURE, NarrativeGenerator, NoAttractions, UNAVAILABLE_NARRATIVE,
    UnavailableNarrative,
};
pub use config::PlannerConfig;
pub use enrichment::{attraction_to_activity, enrich_recommendation};
pub use orchestrator::TravelPlanner;
pub use recommendation::Recommendation;
