//! Ordered chain of filters for one listing type.
//!
//! Each listing (flights, hotels, activities) gets its own
//! `FilterPipeline<T>`; the request is validated once before any filter
//! sees it.

use crate::traits::Filter;
use anyhow::{Context, Result};
use catalog::TravelRequest;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(FlightStyleFilter)
///     .add_filter(BudgetShareFilter::whole_budget());
///
/// let flights = pipeline.apply(catalog.flights().to_vec(), &request)?;
/// ```
pub struct FilterPipeline<T> {
    filters: Vec<Box<dyn Filter<T>>>,
}

impl<T> FilterPipeline<T> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter<T> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Validate the request, then apply all filters in sequence.
    ///
    /// An empty result is not an error; an invalid request is.
    pub fn apply(&self, items: Vec<T>, request: &TravelRequest) -> Result<Vec<T>> {
        request.validate().context("Rejected travel request")?;

        let mut current = items;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, request)?;
            tracing::debug!("{}: {} -> {} items", filter.name(), before, current.len());
        }
        Ok(current)
    }
}

impl<T> Default for FilterPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
