//! The assembled answer for one travel request.

use serde::{Deserialize, Serialize};

use catalog::{
    ASSUMED_STAY_NIGHTS, Activity, COSTED_ACTIVITY_COUNT, Flight, Hotel, Money, ROUND_TRIP_LEGS,
};

/// Final recommendation returned to the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub flights: Vec<Flight>,
    pub hotels: Vec<Hotel>,
    pub activities: Vec<Activity>,
    pub narrative: String,
}

impl Recommendation {
    /// Point estimate of the trip cost from the current listings.
    ///
    /// First flight for both legs, first hotel for the assumed stay, and the
    /// first few activities. Empty lists contribute nothing.
    pub fn total_cost(&self) -> Money {
        let flight = self.flights.first().map_or(0.0, |f| f.price) * ROUND_TRIP_LEGS as Money;
        let hotel = self.hotels.first().map_or(0.0, |h| h.price) * ASSUMED_STAY_NIGHTS as Money;
        let activities: Money = self
            .activities
            .iter()
            .take(COSTED_ACTIVITY_COUNT)
            .map(|a| a.price)
            .sum();
        flight + hotel + activities
    }

    pub fn has_options(&self) -> bool {
        !(self.flights.is_empty() && self.hotels.is_empty() && self.activities.is_empty())
    }
}
