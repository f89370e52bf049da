//! Filter implementations for the listing pipelines.
//!
//! This module contains the concrete filters that are composed into
//! the flight, hotel and activity pipelines.

pub mod accommodation;
pub mod budget_share;
pub mod interest;
pub mod style_pricing;
pub mod traveler_surcharge;

// Re-export for convenience
pub use accommodation::AccommodationFilter;
pub use budget_share::BudgetShareFilter;
pub use interest::InterestFilter;
pub use style_pricing::{ActivityStyleFilter, FlightStyleFilter};
pub use traveler_surcharge::TravelerSurchargeFilter;

/// What a narrowing filter does when nothing matches the preference.
///
/// Hotels and activities widen back to the full input by default so the
/// traveler is never left with zero options purely because of a
/// preference mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Return the unfiltered input when no item matches
    #[default]
    WidenToCatalog,
    /// Return the (empty) match set as is
    KeepEmpty,
}

impl FallbackPolicy {
    /// Resolve a narrowing step: `matched` wins unless it is empty.
    pub(crate) fn resolve<T>(self, matched: Vec<T>, all: Vec<T>) -> Vec<T> {
        match self {
            _ if !matched.is_empty() => matched,
            FallbackPolicy::WidenToCatalog => all,
            FallbackPolicy::KeepEmpty => matched,
        }
    }
}
