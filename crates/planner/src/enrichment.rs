//! Merge searched points of interest into a recommendation.

use tracing::{debug, instrument, warn};

use catalog::{Activity, ActivityCategory};
use sources::Attraction;

use crate::collaborators::AttractionSource;
use crate::recommendation::Recommendation;

pub const ENRICHED_DURATION: &str = "2 hours";

/// Convert a searched attraction into a sightseeing activity.
/// The price is unknown and recorded as zero.
pub fn attraction_to_activity(attraction: Attraction) -> Activity {
    let mut activity = Activity::new(
        &attraction.name,
        ENRICHED_DURATION,
        0.0,
        ActivityCategory::Sightseeing,
    );
    activity.rating = attraction.rating;
    activity.description = Some(attraction.description).filter(|d| !d.is_empty());
    activity
}

/// Append attractions for `destination` whose names are not already listed.
///
/// Returns how many activities were appended. A failing source appends
/// nothing.
#[instrument(skip(recommendation, source))]
pub async fn enrich_recommendation(
    recommendation: &mut Recommendation,
    destination: &str,
    source: &dyn AttractionSource,
) -> usize {
    let attractions = match source.attractions(destination).await {
        Ok(attractions) => attractions,
        Err(e) => {
            warn!("Attraction lookup failed, skipping enrichment: {:#}", e);
            return 0;
        }
    };

    let before = recommendation.activities.len();
    for attraction in attractions {
        if attraction.name.is_empty()
            || recommendation
                .activities
                .iter()
                .any(|a| a.name == attraction.name)
        {
            continue;
        }
        recommendation.activities.push(attraction_to_activity(attraction));
    }

    let added = recommendation.activities.len() - before;
    debug!("Appended {} searched activities", added);
    added
}
