//! Application Context
//!
//! Data sources provided via Leptos Context API so components never reach
//! for a global client.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiClient, BreedCatalogSource, DogSource};

/// Collaborators used by the breed filter and the dog list
#[derive(Clone)]
pub struct ShelterSources {
    pub breeds: Arc<dyn BreedCatalogSource>,
    pub dogs: Arc<dyn DogSource>,
}

impl ShelterSources {
    pub fn new(breeds: Arc<dyn BreedCatalogSource>, dogs: Arc<dyn DogSource>) -> Self {
        Self { breeds, dogs }
    }

    /// Both sources backed by the same HTTP client
    pub fn http(client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client)
    }
}

/// Get the data sources from context
pub fn use_sources() -> ShelterSources {
    expect_context::<ShelterSources>()
}
