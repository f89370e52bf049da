//! Filter to keep listings within their share of the trip budget.

use crate::traits::{Filter, Priced};
use anyhow::Result;
use catalog::{ASSUMED_ACTIVITY_COUNT, ASSUMED_STAY_NIGHTS, TravelRequest};

/// Keeps listings priced at or below `budget / divisor`.
///
/// ## Divisors used by the planner
/// - Flights: 1 (a single fare must fit the whole budget)
/// - Hotels: `ASSUMED_STAY_NIGHTS` (nightly price against a fixed stay)
/// - Activities: `ASSUMED_ACTIVITY_COUNT`
pub struct BudgetShareFilter {
    divisor: f64,
}

impl BudgetShareFilter {
    /// Create a filter with a custom divisor. Non-positive divisors are
    /// treated as 1.
    pub fn new(divisor: f64) -> Self {
        let divisor = if divisor > 0.0 { divisor } else { 1.0 };
        Self { divisor }
    }

    pub fn whole_budget() -> Self {
        Self::new(1.0)
    }

    pub fn per_night() -> Self {
        Self::new(f64::from(ASSUMED_STAY_NIGHTS))
    }

    pub fn per_activity() -> Self {
        Self::new(f64::from(ASSUMED_ACTIVITY_COUNT))
    }

    /// Highest price this filter lets through for `request`
    pub fn ceiling(&self, request: &TravelRequest) -> f64 {
        request.budget / self.divisor
    }
}

impl<T: Priced> Filter<T> for BudgetShareFilter {
    fn name(&self) -> &str {
        "BudgetShareFilter"
    }

    fn apply(&self, items: Vec<T>, request: &TravelRequest) -> Result<Vec<T>> {
        let ceiling = self.ceiling(request);
        let filtered: Vec<T> = items
            .into_iter()
            .filter(|item| item.price() <= ceiling)
            .collect();
        Ok(filtered)
    }
}
