//! Filter to keep activities matching the traveler's interests.

use super::FallbackPolicy;
use crate::traits::Filter;
use anyhow::Result;
use catalog::{Activity, ActivityCategory, TravelRequest};
use std::collections::HashSet;

/// Keeps activities whose category belongs to any requested interest.
///
/// ## Algorithm
/// 1. No interests: keep everything
/// 2. Map each interest to its categories (`Interest::categories`)
/// 3. Keep activities in the union, in input order
/// 4. Nothing matched: apply the fallback policy
#[derive(Default)]
pub struct InterestFilter {
    policy: FallbackPolicy,
}

impl InterestFilter {
    pub fn new(policy: FallbackPolicy) -> Self {
        Self { policy }
    }
}

impl Filter<Activity> for InterestFilter {
    fn name(&self) -> &str {
        "InterestFilter"
    }

    fn apply(&self, items: Vec<Activity>, request: &TravelRequest) -> Result<Vec<Activity>> {
        if request.interests.is_empty() {
            return Ok(items);
        }

        let wanted: HashSet<ActivityCategory> = request
            .interests
            .iter()
            .flat_map(|interest| interest.categories().iter().copied())
            .collect();

        let matched: Vec<Activity> = items
            .iter()
            .filter(|activity| wanted.contains(&activity.category))
            .cloned()
            .collect();

        if matched.is_empty() {
            tracing::debug!(
                "No activities for {} interest(s), policy {:?}",
                request.interests.len(),
                self.policy
            );
        }
        Ok(self.policy.resolve(matched, items))
    }
}
