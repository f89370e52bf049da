//! Core traits for the filtering pipeline.
//!
//! `Filter` lets listing filters be composed into a `FilterPipeline`;
//! `Priced` gives filters uniform access to an entry's price.

use anyhow::Result;
use catalog::{Activity, Flight, Hotel, Money, TravelRequest};

/// Core trait for filtering one kind of listing.
///
/// ## Design Note
/// - `Send + Sync` allows filters to run on worker threads
/// - Filters take ownership of the Vec and return a filtered Vec, so price
///   adjustments happen on owned copies and never on catalog data
pub trait Filter<T>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of listings.
    ///
    /// # Arguments
    /// * `items` - The listings to filter (takes ownership)
    /// * `request` - The traveler's search criteria
    fn apply(&self, items: Vec<T>, request: &TravelRequest) -> Result<Vec<T>>;
}

/// A listing with a single adjustable price.
pub trait Priced {
    fn price(&self) -> Money;
    fn set_price(&mut self, price: Money);

    /// Multiply the price in place.
    fn scale_price(&mut self, factor: f64) {
        let scaled = self.price() * factor;
        self.set_price(scaled);
    }
}

impl Priced for Flight {
    fn price(&self) -> Money {
        self.price
    }

    fn set_price(&mut self, price: Money) {
        self.price = price;
    }
}

impl Priced for Hotel {
    fn price(&self) -> Money {
        self.price
    }

    fn set_price(&mut self, price: Money) {
        self.price = price;
    }
}

impl Priced for Activity {
    fn price(&self) -> Money {
        self.price
    }

    fn set_price(&mut self, price: Money) {
        self.price = price;
    }
}
