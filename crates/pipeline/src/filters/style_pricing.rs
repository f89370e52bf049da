//! Travel-style price tiers for flights and activities.
//!
//! Luxury and Budget styles scale prices and tag the listing; every other
//! style leaves listings untouched.

use crate::traits::{Filter, Priced};
use anyhow::Result;
use catalog::{Activity, BookingType, CabinClass, Flight, TravelRequest, TravelStyle};

pub const LUXURY_FLIGHT_FACTOR: f64 = 1.5;
pub const BUDGET_FLIGHT_FACTOR: f64 = 0.8;
pub const LUXURY_ACTIVITY_FACTOR: f64 = 1.3;
pub const BUDGET_ACTIVITY_FACTOR: f64 = 0.9;

/// Luxury: fare × 1.5, Business. Budget: fare × 0.8, Economy.
pub struct FlightStyleFilter;

impl Filter<Flight> for FlightStyleFilter {
    fn name(&self) -> &str {
        "FlightStyleFilter"
    }

    fn apply(&self, items: Vec<Flight>, request: &TravelRequest) -> Result<Vec<Flight>> {
        let tier = match request.travel_style {
            TravelStyle::Luxury => Some((LUXURY_FLIGHT_FACTOR, CabinClass::Business)),
            TravelStyle::Budget => Some((BUDGET_FLIGHT_FACTOR, CabinClass::Economy)),
            _ => None,
        };
        let Some((factor, class)) = tier else {
            return Ok(items);
        };

        let adjusted = items
            .into_iter()
            .map(|mut flight| {
                flight.scale_price(factor);
                flight.class = Some(class);
                flight
            })
            .collect();
        Ok(adjusted)
    }
}

/// Luxury: price × 1.3, Private. Budget: price × 0.9, Group.
pub struct ActivityStyleFilter;

impl Filter<Activity> for ActivityStyleFilter {
    fn name(&self) -> &str {
        "ActivityStyleFilter"
    }

    fn apply(&self, items: Vec<Activity>, request: &TravelRequest) -> Result<Vec<Activity>> {
        let tier = match request.travel_style {
            TravelStyle::Luxury => Some((LUXURY_ACTIVITY_FACTOR, BookingType::Private)),
            TravelStyle::Budget => Some((BUDGET_ACTIVITY_FACTOR, BookingType::Group)),
            _ => None,
        };
        let Some((factor, booking)) = tier else {
            return Ok(items);
        };

        let adjusted = items
            .into_iter()
            .map(|mut activity| {
                activity.scale_price(factor);
                activity.booking = Some(booking);
                activity
            })
            .collect();
        Ok(adjusted)
    }
}
