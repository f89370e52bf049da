//! # Catalog Crate
//!
//! Static listing data and the request vocabulary shared by the planner.
//!
//! ## Main Components
//!
//! - **types**: Request, catalog entries and their enums
//! - **tables**: The bundled flight/hotel/activity tables and stay assumptions
//! - **weather**: Canned weather outlook for a date range
//! - **tips**: Hand-written local tips
//! - **error**: Request validation and parsing errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, TravelRequest, TravelStyle};
//!
//! let catalog = Catalog::paris();
//! let request = TravelRequest::new("Paris", "May 5-9, 2025", 5000.0)
//!     .with_travel_style(TravelStyle::Budget);
//! request.validate()?;
//!
//! println!("{} flights on offer", catalog.flights().len());
//! ```

pub mod error;
pub mod tables;
pub mod tips;
pub mod types;
pub mod weather;

pub use error::{RequestError, Result};
pub use tables::{
    ASSUMED_ACTIVITY_COUNT, ASSUMED_STAY_NIGHTS, COSTED_ACTIVITY_COUNT, Catalog, ROUND_TRIP_LEGS,
};
pub use tips::{LocalTips, local_tips};
pub use types::{
    // Entries
    Activity,
    Flight,
    Hotel,
    Money,
    TravelRequest,
    // Enums
    AccommodationType,
    ActivityCategory,
    BookingType,
    CabinClass,
    Interest,
    TravelStyle,
};
pub use weather::{WeatherDay, forecast_for};
