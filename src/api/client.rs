//! HTTP client for the listing API
//!
//! Uses reqwest, which is backed by `fetch` on wasm32.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{ApiError, BreedCatalogSource, DogSource};
use crate::models::Dog;
use crate::query::DogQuery;

/// Used when the page origin cannot be read (e.g. outside a browser)
const DEFAULT_API_BASE: &str = "http://localhost:5100";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Client for the origin the page was served from
    pub fn from_window() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        match origin {
            Some(origin) => Self::new(origin),
            None => {
                tracing::warn!("page origin unavailable, using {}", DEFAULT_API_BASE);
                Self::new(DEFAULT_API_BASE)
            }
        }
    }

    pub fn breeds_url(&self) -> String {
        format!("{}/api/breeds", self.base_url)
    }

    pub fn dogs_url(&self, query: &DogQuery) -> String {
        match query.to_query_string() {
            Some(qs) => format!("{}/api/dogs?{}", self.base_url, qs),
            None => format!("{}/api/dogs", self.base_url),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);
        let response = reqwest::get(url)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl BreedCatalogSource for ApiClient {
    async fn fetch_breeds(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&self.breeds_url()).await
    }
}

#[async_trait(?Send)]
impl DogSource for ApiClient {
    async fn fetch_dogs(&self, query: &DogQuery) -> Result<Vec<Dog>, ApiError> {
        self.get_json(&self.dogs_url(query)).await
    }
}
