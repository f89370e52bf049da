//! # Sources Crate
//!
//! External search data for a destination, fetched from Serper.
//!
//! ## Components
//!
//! - **serper**: HTTP client for places, news and image search
//! - **images**: Query refinement, Paris trivia and stock-image fallback
//! - **types**: Records returned to callers
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::SerperClient;
//!
//! let client = SerperClient::new(std::env::var("SERPER_API_KEY")?);
//! let attractions = client.attractions("Paris").await?;
//! let news = client.news("Paris").await?;
//! ```

pub mod images;
pub mod serper;
pub mod types;

pub use serper::SerperClient;
pub use types::{Attraction, DestinationImage, NewsItem, SearchKind};

use thiserror::Error;

/// Errors that can occur when querying the search source
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to reach search API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Search API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode search results: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
