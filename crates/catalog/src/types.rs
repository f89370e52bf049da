//! Core domain types for trip planning.
//!
//! Catalog entries (flights, hotels, activities) and the traveler's
//! request live here so every other crate shares one vocabulary.

use crate::error::{RequestError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Currency amount in the traveler's currency (USD in the bundled data)
pub type Money = f64;

// =============================================================================
// Enums
// =============================================================================

/// Declares a fieldless enum together with its display names and a
/// case-insensitive `FromStr`.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display name used in the UI and in serialized catalogs
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = RequestError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| RequestError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

named_enum! {
    /// Coarse pricing tier applied uniformly to flights and activities
    TravelStyle as "travel style" {
        Balanced => "Balanced",
        Luxury => "Luxury",
        Budget => "Budget",
        Adventure => "Adventure",
        Cultural => "Cultural",
        Relaxation => "Relaxation",
    }
}

named_enum! {
    /// Kind of lodging. `Luxury` only appears on catalog entries; the
    /// request form offers the other five.
    AccommodationType as "accommodation type" {
        Hotel => "Hotel",
        Resort => "Resort",
        Apartment => "Apartment",
        Hostel => "Hostel",
        Boutique => "Boutique",
        Luxury => "Luxury",
    }
}

named_enum! {
    /// Traveler interests offered by the request form
    Interest as "interest" {
        History => "History",
        Food => "Food",
        Nature => "Nature",
        Shopping => "Shopping",
        Art => "Art",
        Nightlife => "Nightlife",
        Sports => "Sports",
    }
}

named_enum! {
    /// Category tag carried by every activity
    ActivityCategory as "activity category" {
        Art => "Art",
        Sightseeing => "Sightseeing",
        Relaxation => "Relaxation",
        History => "History",
        Food => "Food",
        Nightlife => "Nightlife",
        Sports => "Sports",
        Entertainment => "Entertainment",
    }
}

named_enum! {
    /// Cabin class derived from the travel style
    CabinClass as "cabin class" {
        Economy => "Economy",
        Business => "Business",
    }
}

named_enum! {
    /// Booking type derived from the travel style
    BookingType as "booking type" {
        Private => "Private",
        Group => "Group",
    }
}

impl Default for TravelStyle {
    fn default() -> Self {
        TravelStyle::Balanced
    }
}

impl Default for AccommodationType {
    fn default() -> Self {
        AccommodationType::Hotel
    }
}

impl Interest {
    /// Activity categories that satisfy this interest.
    ///
    /// Shopping has no matching category in the bundled catalog and maps
    /// to nothing.
    pub fn categories(&self) -> &'static [ActivityCategory] {
        match self {
            Interest::History => &[ActivityCategory::History],
            Interest::Food => &[ActivityCategory::Food],
            Interest::Nature => &[ActivityCategory::Relaxation, ActivityCategory::Sports],
            Interest::Shopping => &[],
            Interest::Art => &[ActivityCategory::Art],
            Interest::Nightlife => &[ActivityCategory::Nightlife],
            Interest::Sports => &[ActivityCategory::Sports],
        }
    }
}

// =============================================================================
// Catalog entries
// =============================================================================

/// A flight option. `class` is only set once a travel style is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub airline: String,
    /// Local departure time, "HH:MM"
    pub departure: String,
    /// Local arrival time, "HH:MM"
    pub arrival: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<CabinClass>,
}

/// A place to stay, priced per night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    /// Guest rating on a 0-10 scale
    pub rating: f32,
    /// Nightly price
    pub price: Money,
    #[serde(rename = "type")]
    pub kind: AccommodationType,
}

/// Something to do at the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    /// Free-form duration, e.g. "3 hours" or "Full day"
    pub duration: String,
    pub price: Money,
    pub category: ActivityCategory,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingType>,
    /// Only present on activities merged from a search source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Flight {
    pub fn new(airline: &str, departure: &str, arrival: &str, price: Money) -> Self {
        Self {
            airline: airline.to_string(),
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            price,
            class: None,
        }
    }
}

impl Hotel {
    pub fn new(name: &str, rating: f32, price: Money, kind: AccommodationType) -> Self {
        Self {
            name: name.to_string(),
            rating,
            price,
            kind,
        }
    }
}

impl Activity {
    pub fn new(name: &str, duration: &str, price: Money, category: ActivityCategory) -> Self {
        Self {
            name: name.to_string(),
            duration: duration.to_string(),
            price,
            category,
            booking: None,
            rating: None,
            description: None,
        }
    }
}

// =============================================================================
// Request
// =============================================================================

/// The traveler's search criteria.
///
/// Construct with [`TravelRequest::new`] and refine with the `with_*`
/// methods. Every pipeline entry point calls [`TravelRequest::validate`]
/// before touching the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRequest {
    pub destination: String,
    /// Free-form date range, e.g. "May 5-9, 2025"
    pub dates: String,
    /// Total trip budget
    pub budget: Money,
    #[serde(default)]
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub accommodation_type: AccommodationType,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default)]
    pub interests: BTreeSet<Interest>,
}

fn default_travelers() -> u32 {
    2
}

impl TravelRequest {
    /// Create a request with the form defaults: Balanced style, Hotel
    /// lodging, two travelers and no interests.
    pub fn new(destination: impl Into<String>, dates: impl Into<String>, budget: Money) -> Self {
        Self {
            destination: destination.into(),
            dates: dates.into(),
            budget,
            travel_style: TravelStyle::default(),
            accommodation_type: AccommodationType::default(),
            travelers: default_travelers(),
            interests: BTreeSet::new(),
        }
    }

    pub fn with_travel_style(mut self, style: TravelStyle) -> Self {
        self.travel_style = style;
        self
    }

    pub fn with_accommodation(mut self, accommodation: AccommodationType) -> Self {
        self.accommodation_type = accommodation;
        self
    }

    pub fn with_travelers(mut self, travelers: u32) -> Self {
        self.travelers = travelers;
        self
    }

    pub fn with_interests(mut self, interests: impl IntoIterator<Item = Interest>) -> Self {
        self.interests = interests.into_iter().collect();
        self
    }

    /// Check the preconditions shared by every filter.
    pub fn validate(&self) -> Result<()> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(RequestError::InvalidBudget(self.budget));
        }
        if self.travelers == 0 {
            return Err(RequestError::InvalidTravelerCount(self.travelers));
        }
        Ok(())
    }
}
