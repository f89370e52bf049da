//! Integration tests for the pipeline.
//!
//! These run the full flight, hotel and activity pipelines against the
//! bundled catalog.

use catalog::{
    AccommodationType, BookingType, CabinClass, Catalog, Interest, RequestError, TravelRequest,
    TravelStyle,
};
use pipeline::{FallbackPolicy, ListingFilters, get_activities, get_flights, get_hotels};

fn paris_request(budget: f64) -> TravelRequest {
    TravelRequest::new("Paris", "May 5-9, 2025", budget)
}

#[test]
fn test_balanced_paris_scenario() {
    let catalog = Catalog::paris();
    let request = paris_request(5000.0);

    let flights = get_flights(&catalog, &request).unwrap();
    assert_eq!(flights, catalog.flights().to_vec(), "all 5 flights, unmodified");

    let activities = get_activities(&catalog, &request).unwrap();
    assert_eq!(activities.len(), 11);
    assert_eq!(activities, catalog.activities().to_vec(), "catalog order kept");
}

#[test]
fn test_non_positive_budget_is_rejected_by_every_filter() {
    let catalog = Catalog::paris();
    for budget in [0.0, -1.0] {
        let request = paris_request(budget);

        let errors = [
            get_flights(&catalog, &request).unwrap_err(),
            get_hotels(&catalog, &request).unwrap_err(),
            get_activities(&catalog, &request).unwrap_err(),
        ];
        for err in errors {
            assert_eq!(
                err.downcast_ref::<RequestError>(),
                Some(&RequestError::InvalidBudget(budget))
            );
        }
    }
}

#[test]
fn test_zero_travelers_is_rejected() {
    let catalog = Catalog::paris();
    let request = paris_request(5000.0).with_travelers(0);
    let err = get_hotels(&catalog, &request).unwrap_err();
    assert_eq!(
        err.downcast_ref::<RequestError>(),
        Some(&RequestError::InvalidTravelerCount(0))
    );
}

#[test]
fn test_budget_style_flights() {
    let catalog = Catalog::paris();
    let request = paris_request(300.0).with_travel_style(TravelStyle::Budget);

    let flights = get_flights(&catalog, &request).unwrap();
    assert!(!flights.is_empty());
    for flight in &flights {
        let original = catalog
            .flights()
            .iter()
            .find(|f| f.airline == flight.airline)
            .unwrap();
        assert_eq!(flight.price, original.price * 0.8);
        assert!(flight.price <= request.budget);
        assert_eq!(flight.class, Some(CabinClass::Economy));
    }
    // British Airways (304) and Tarom (400) end up above the budget
    assert_eq!(flights.len(), 3);
}

#[test]
fn test_luxury_style_flights() {
    let catalog = Catalog::paris();
    let request = paris_request(10_000.0).with_travel_style(TravelStyle::Luxury);

    let flights = get_flights(&catalog, &request).unwrap();
    assert_eq!(flights.len(), 5);
    for (flight, original) in flights.iter().zip(catalog.flights()) {
        assert_eq!(flight.price, original.price * 1.5);
        assert_eq!(flight.class, Some(CabinClass::Business));
    }
}

#[test]
fn test_budget_below_every_fare_returns_empty() {
    let catalog = Catalog::paris();
    let flights = get_flights(&catalog, &paris_request(100.0)).unwrap();
    assert!(flights.is_empty());
}

#[test]
fn test_repeated_calls_do_not_compound_prices() {
    let catalog = Catalog::paris();
    let request = paris_request(10_000.0).with_travel_style(TravelStyle::Luxury);

    let first = get_flights(&catalog, &request).unwrap();
    let second = get_flights(&catalog, &request).unwrap();
    assert_eq!(first, second);
    assert_eq!(catalog.flights()[0].price, 300.0);
    assert!(catalog.flights()[0].class.is_none());

    let filters = ListingFilters::default();
    let a = filters.activities(&catalog, &request).unwrap();
    let b = filters.activities(&catalog, &request).unwrap();
    assert_eq!(a, b);
    assert_eq!(catalog.activities()[0].price, 17.0);
}

#[test]
fn test_unmatched_accommodation_widens_to_budget_filtered_catalog() {
    let catalog = Catalog::paris();
    let request = paris_request(2000.0).with_accommodation(AccommodationType::Resort);

    let hotels = get_hotels(&catalog, &request).unwrap();
    let expected: Vec<_> = catalog
        .hotels()
        .iter()
        .filter(|h| h.price <= 2000.0 / 5.0)
        .cloned()
        .collect();
    assert_eq!(hotels, expected);
    assert!(!hotels.is_empty());

    let strict = ListingFilters::new(FallbackPolicy::KeepEmpty);
    assert!(strict.hotels(&catalog, &request).unwrap().is_empty());
}

#[test]
fn test_hotel_budget_uses_five_night_stay() {
    let catalog = Catalog::paris();
    // Ceiling 1000 / 5 = 200: Citizen M (200) passes, Zoku Paris (250) does not
    let hotels = get_hotels(&catalog, &paris_request(1000.0)).unwrap();
    let names: Vec<&str> = hotels.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Citizen M"]);
}

#[test]
fn test_budget_activities_with_interests() {
    let catalog = Catalog::paris();
    let request = paris_request(700.0)
        .with_travel_style(TravelStyle::Budget)
        .with_interests([Interest::Food, Interest::Nightlife]);

    let activities = get_activities(&catalog, &request).unwrap();
    // Cooking Class 85.5, Wine Tasting 58.5, Moulin Rouge 103.5; ceiling 70
    let names: Vec<&str> = activities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Wine Tasting"]);
    assert_eq!(activities[0].price, 65.0 * 0.9);
    assert_eq!(activities[0].booking, Some(BookingType::Group));
}

#[test]
fn test_blank_destination_is_not_a_precondition() {
    let catalog = Catalog::paris();
    let request = TravelRequest::new("", "May 5-9, 2025", 5000.0);

    assert_eq!(get_flights(&catalog, &request).unwrap().len(), 5);
    assert!(!get_hotels(&catalog, &request).unwrap().is_empty());
    assert_eq!(get_activities(&catalog, &request).unwrap().len(), 11);
}
