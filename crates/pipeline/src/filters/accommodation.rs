//! Filter to keep hotels of the requested accommodation type.

use super::FallbackPolicy;
use crate::traits::Filter;
use anyhow::Result;
use catalog::{Hotel, TravelRequest};

/// Keeps hotels whose type matches `request.accommodation_type`.
///
/// When nothing matches, the fallback policy decides between the full
/// input and an empty list.
#[derive(Default)]
pub struct AccommodationFilter {
    policy: FallbackPolicy,
}

impl AccommodationFilter {
    pub fn new(policy: FallbackPolicy) -> Self {
        Self { policy }
    }
}

impl Filter<Hotel> for AccommodationFilter {
    fn name(&self) -> &str {
        "AccommodationFilter"
    }

    fn apply(&self, items: Vec<Hotel>, request: &TravelRequest) -> Result<Vec<Hotel>> {
        let matched: Vec<Hotel> = items
            .iter()
            .filter(|hotel| hotel.kind == request.accommodation_type)
            .cloned()
            .collect();

        if matched.is_empty() {
            tracing::debug!(
                "No {} listings, policy {:?}",
                request.accommodation_type,
                self.policy
            );
        }
        Ok(self.policy.resolve(matched, items))
    }
}
