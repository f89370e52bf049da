//! Nightly surcharge for parties larger than two.

use crate::traits::{Filter, Priced};
use anyhow::Result;
use catalog::{Hotel, TravelRequest};

/// Extra nightly cost per traveler beyond the first two
pub const SURCHARGE_PER_EXTRA_TRAVELER: f64 = 0.25;

/// Travelers covered by the base nightly price
pub const BASE_OCCUPANCY: u32 = 2;

/// Scales nightly prices by `1 + 0.25 × (travelers − 2)` when more than
/// two people travel.
pub struct TravelerSurchargeFilter;

impl TravelerSurchargeFilter {
    /// Multiplier applied for a party of `travelers`
    pub fn factor(travelers: u32) -> f64 {
        let extra = travelers.saturating_sub(BASE_OCCUPANCY);
        1.0 + f64::from(extra) * SURCHARGE_PER_EXTRA_TRAVELER
    }
}

impl Filter<Hotel> for TravelerSurchargeFilter {
    fn name(&self) -> &str {
        "TravelerSurchargeFilter"
    }

    fn apply(&self, items: Vec<Hotel>, request: &TravelRequest) -> Result<Vec<Hotel>> {
        if request.travelers <= BASE_OCCUPANCY {
            return Ok(items);
        }

        let factor = Self::factor(request.travelers);
        let adjusted = items
            .into_iter()
            .map(|mut hotel| {
                hotel.scale_price(factor);
                hotel
            })
            .collect();
        Ok(adjusted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::AccommodationType;

    #[test]
    fn test_factor() {
        assert_eq!(TravelerSurchargeFilter::factor(1), 1.0);
        assert_eq!(TravelerSurchargeFilter::factor(2), 1.0);
        assert_eq!(TravelerSurchargeFilter::factor(3), 1.25);
        assert_eq!(TravelerSurchargeFilter::factor(6), 2.0);
    }

    #[test]
    fn test_surcharge_applies_above_two_travelers() {
        let hotels = vec![Hotel::new("Citizen M", 8.7, 200.0, AccommodationType::Hotel)];

        let pair = TravelRequest::new("Paris", "May", 5000.0);
        let unchanged = TravelerSurchargeFilter.apply(hotels.clone(), &pair).unwrap();
        assert_eq!(unchanged[0].price, 200.0);

        let family = TravelRequest::new("Paris", "May", 5000.0).with_travelers(4);
        let surcharged = TravelerSurchargeFilter.apply(hotels, &family).unwrap();
        assert_eq!(surcharged[0].price, 300.0);
    }
}
