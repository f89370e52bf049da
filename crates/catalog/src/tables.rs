//! The bundled listing tables.
//!
//! There is a single hand-written catalog (Paris). Lookups for any other
//! destination return the same tables.

use crate::types::{AccommodationType, Activity, ActivityCategory, Flight, Hotel};

/// Nights assumed when screening nightly hotel prices against the budget
/// and when estimating total cost.
pub const ASSUMED_STAY_NIGHTS: u32 = 5;

/// Activities assumed to be booked across the trip when screening
/// activity prices against the budget.
pub const ASSUMED_ACTIVITY_COUNT: u32 = 10;

/// Flight legs counted in the total cost estimate.
pub const ROUND_TRIP_LEGS: u32 = 2;

/// Activities counted in the total cost estimate.
pub const COSTED_ACTIVITY_COUNT: usize = 3;

/// Read-only listing tables. Filters clone entries out of these slices
/// before adjusting prices.
#[derive(Debug, Clone)]
pub struct Catalog {
    flights: Vec<Flight>,
    hotels: Vec<Hotel>,
    activities: Vec<Activity>,
}

impl Catalog {
    /// Build a catalog from arbitrary tables.
    pub fn new(flights: Vec<Flight>, hotels: Vec<Hotel>, activities: Vec<Activity>) -> Self {
        Self {
            flights,
            hotels,
            activities,
        }
    }

    /// The Paris listings.
    pub fn paris() -> Self {
        use AccommodationType as A;
        use ActivityCategory as C;

        let flights = vec![
            Flight::new("Air France", "08:00", "10:00", 300.0),
            Flight::new("Lufthansa", "10:30", "12:30", 350.0),
            Flight::new("British Airways", "14:00", "16:00", 380.0),
            Flight::new("KLM", "16:30", "18:30", 320.0),
            Flight::new("Tarom", "12:00", "14:00", 500.0),
        ];

        let hotels = vec![
            Hotel::new("Zoku Paris", 8.9, 250.0, A::Hotel),
            Hotel::new("Villa M", 8.8, 450.0, A::Boutique),
            Hotel::new("Citizen M", 8.7, 200.0, A::Hotel),
            Hotel::new("Generator Paris", 8.2, 120.0, A::Hostel),
            Hotel::new("Le Bristol Paris", 9.5, 950.0, A::Luxury),
            Hotel::new("Airbnb in Le Marais", 8.6, 180.0, A::Apartment),
        ];

        let activities = vec![
            Activity::new("Louvre Museum", "3 hours", 17.0, C::Art),
            Activity::new("Eiffel Tower", "2 hours", 26.8, C::Sightseeing),
            Activity::new("Seine River Cruise", "1 hour", 15.0, C::Relaxation),
            Activity::new("Montmartre Walking Tour", "2 hours", 25.0, C::History),
            Activity::new("Cooking Class", "3 hours", 95.0, C::Food),
            Activity::new("Wine Tasting", "2 hours", 65.0, C::Food),
            Activity::new("Versailles Palace", "4 hours", 18.0, C::History),
            Activity::new("Moulin Rouge Show", "2 hours", 115.0, C::Nightlife),
            Activity::new("Bike Tour", "3 hours", 35.0, C::Sports),
            Activity::new("Admission to Disneyland Paris", "Full day", 100.0, C::Entertainment),
            Activity::new(
                "Sightseeing Cruise from the Eiffel Tower",
                "1 hour",
                75.0,
                C::Sightseeing,
            ),
        ];

        Self::new(flights, hotels, activities)
    }

    /// Catalog for a destination. Only one table set exists, so the
    /// destination does not change the result.
    pub fn for_destination(_destination: &str) -> Self {
        Self::paris()
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// (flights, hotels, activities) counts
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.flights.len(), self.hotels.len(), self.activities.len())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::paris()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paris_catalog_sizes() {
        assert_eq!(Catalog::paris().counts(), (5, 6, 11));
    }

    #[test]
    fn test_paris_price_ceilings() {
        let catalog = Catalog::paris();
        let max_flight = catalog.flights().iter().map(|f| f.price).fold(0.0, f64::max);
        let max_activity = catalog.activities().iter().map(|a| a.price).fold(0.0, f64::max);
        assert_eq!(max_flight, 500.0);
        assert_eq!(max_activity, 115.0);
    }

    #[test]
    fn test_entries_start_untagged() {
        let catalog = Catalog::paris();
        assert!(catalog.flights().iter().all(|f| f.class.is_none()));
        assert!(catalog.activities().iter().all(|a| a.booking.is_none()));
    }

    #[test]
    fn test_other_destinations_share_the_tables() {
        assert_eq!(
            Catalog::for_destination("Lisbon").flights(),
            Catalog::paris().flights()
        );
    }
}
