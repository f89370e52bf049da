//! Error types for the catalog crate.
//!
//! Only request construction and enum parsing can fail here; the catalog
//! tables themselves are static and always available.

use thiserror::Error;

/// Errors raised while building or validating a [`TravelRequest`].
///
/// [`TravelRequest`]: crate::TravelRequest
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Budget must be a positive, finite amount
    #[error("Invalid budget: {0} (must be greater than zero)")]
    InvalidBudget(f64),

    /// At least one traveler is required
    #[error("Invalid traveler count: {0} (must be at least 1)")]
    InvalidTravelerCount(u32),

    /// A name did not match any variant of the expected enum
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RequestError>;
