//! Listing API
//!
//! Collaborator traits for the breed catalog and dog list, plus the HTTP
//! implementation used in the browser.

mod client;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Dog;
use crate::query::DogQuery;

pub use client::ApiClient;

/// Failure talking to the listing API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Source of the full breed catalog (`GET /api/breeds`)
#[async_trait(?Send)]
pub trait BreedCatalogSource: Send + Sync {
    async fn fetch_breeds(&self) -> Result<Vec<String>, ApiError>;
}

/// Source of dogs filtered server-side (`GET /api/dogs`)
#[async_trait(?Send)]
pub trait DogSource: Send + Sync {
    async fn fetch_dogs(&self, query: &DogQuery) -> Result<Vec<Dog>, ApiError>;
}
