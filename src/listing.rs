//! Listing State
//!
//! Load state for the breed catalog and the dog list. The two are tracked
//! separately so a failure in one never clears the other.

use crate::api::ApiError;
use crate::models::Dog;
use crate::query::{RequestTicket, RequestTracker};
use crate::selection::BreedCatalog;

pub const LOADING_BREEDS: &str = "Loading breeds...";
pub const LOADING_DOGS: &str = "Loading dogs...";
pub const NO_DOGS_FOUND: &str = "No dogs found matching the selected breeds.";
pub const NO_DOGS_HINT: &str = "Try selecting different breeds or clearing the filters.";

/// Breed catalog plus its fetch status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub catalog: BreedCatalog,
    loading: bool,
    loaded: bool,
    error: Option<String>,
}

impl CatalogState {
    /// No successful load yet and nothing in flight
    pub fn needs_fetch(&self) -> bool {
        !self.loading && !self.loaded
    }

    /// Mark a fetch in flight. A retry with nothing loaded drops the old
    /// error so the loading indicator shows instead.
    pub fn begin(&mut self) {
        self.loading = true;
        if self.catalog.is_empty() {
            self.error = None;
        }
    }

    /// Apply a fetch result. On failure the previous catalog is kept.
    /// Returns the new catalog on success.
    pub fn finish(&mut self, result: Result<Vec<String>, ApiError>) -> Option<&BreedCatalog> {
        self.loading = false;
        match result {
            Ok(names) => {
                self.catalog = BreedCatalog::new(names);
                self.loaded = true;
                self.error = None;
                Some(&self.catalog)
            }
            Err(err) => {
                tracing::error!("breed catalog fetch failed: {}", err);
                self.error = Some(format!("Failed to fetch breeds: {}", err));
                None
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Dog collection for the latest query plus its fetch status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DogListState {
    pub dogs: Vec<Dog>,
    tracker: RequestTracker,
    loading: bool,
    loaded: bool,
    error: Option<String>,
}

impl DogListState {
    /// Register a new request; responses to older tickets are ignored
    pub fn begin(&mut self) -> RequestTicket {
        self.loading = true;
        self.tracker.issue()
    }

    /// Apply a response. Returns false when `ticket` was superseded.
    ///
    /// Success replaces the dogs wholesale; failure keeps the dogs already
    /// shown and records the error.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<Vec<Dog>, ApiError>) -> bool {
        if !self.tracker.is_latest(ticket) {
            tracing::debug!("discarding superseded dog response {:?}", ticket);
            return false;
        }

        self.loading = false;
        match result {
            Ok(dogs) => {
                self.dogs = dogs;
                self.loaded = true;
                self.error = None;
            }
            Err(err) => {
                tracing::error!("dog list fetch failed: {}", err);
                self.error = Some(format!("Failed to fetch dogs: {}", err));
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The latest successful query returned no dogs
    pub fn is_empty_result(&self) -> bool {
        self.loaded && self.dogs.is_empty() && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BreedCatalogSource, DogSource};
    use crate::query::DogQuery;
    use crate::selection::BreedSelection;
    use async_trait::async_trait;

    struct FakeBreeds(Result<Vec<String>, ApiError>);

    #[async_trait(?Send)]
    impl BreedCatalogSource for FakeBreeds {
        async fn fetch_breeds(&self) -> Result<Vec<String>, ApiError> {
            self.0.clone()
        }
    }

    /// Filters like the server does: exact breed match
    struct FakeDogs(Vec<Dog>);

    #[async_trait(?Send)]
    impl DogSource for FakeDogs {
        async fn fetch_dogs(&self, query: &DogQuery) -> Result<Vec<Dog>, ApiError> {
            Ok(self.0.iter().filter(|d| query.is_unfiltered() || query.breeds().contains(&d.breed)).cloned().collect())
        }
    }

    async fn refresh_catalog(source: &dyn BreedCatalogSource, state: &mut CatalogState) -> bool {
        state.begin();
        let result = source.fetch_breeds().await;
        state.finish(result).is_some()
    }

    fn dog(id: u32, name: &str, breed: &str) -> Dog {
        Dog {
            id,
            name: name.to_string(),
            breed: breed.to_string(),
        }
    }

    fn scenario_catalog() -> Vec<String> {
        ["Beagle", "French Bulldog", "Golden Retriever", "Mixed Breed", "Unknown"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn shelter_dogs() -> FakeDogs {
        FakeDogs(vec![
            dog(1, "Buddy", "Golden Retriever"),
            dog(2, "Rex", "French Bulldog"),
        ])
    }

    #[tokio::test]
    async fn test_refresh_catalog_success() {
        let mut state = CatalogState::default();
        assert!(state.needs_fetch());

        let ok = refresh_catalog(&FakeBreeds(Ok(scenario_catalog())), &mut state).await;

        assert!(ok);
        assert!(!state.is_loading());
        assert!(!state.needs_fetch());
        assert_eq!(state.catalog.names().len(), 5);
        assert_eq!(state.error(), None);
    }

    #[tokio::test]
    async fn test_refresh_catalog_failure_keeps_catalog() {
        let mut state = CatalogState::default();
        refresh_catalog(&FakeBreeds(Ok(scenario_catalog())), &mut state).await;
        let before = state.catalog.clone();

        let ok = refresh_catalog(&FakeBreeds(Err(ApiError::Status(500))), &mut state).await;

        assert!(!ok);
        assert_eq!(state.catalog, before);
        assert!(state.error().unwrap().contains("Failed to fetch breeds"));
    }

    #[tokio::test]
    async fn test_failed_first_load_is_retried() {
        let mut state = CatalogState::default();
        refresh_catalog(&FakeBreeds(Err(ApiError::Network("offline".into()))), &mut state).await;
        assert!(state.needs_fetch());
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn test_retry_after_failed_load_shows_loading() {
        let mut state = CatalogState::default();
        state.begin();
        state.finish(Err(ApiError::Status(500)));
        assert!(state.error().is_some());

        state.begin();

        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_refresh_with_catalog_keeps_error_until_done() {
        let mut state = CatalogState::default();
        state.begin();
        state.finish(Ok(scenario_catalog()));
        state.begin();
        state.finish(Err(ApiError::Status(502)));

        state.begin();

        assert!(state.is_loading());
        assert!(state.error().is_some());
        assert_eq!(state.catalog.names().len(), 5);
    }

    #[test]
    fn test_catalog_in_flight_is_not_refetched() {
        let mut state = CatalogState::default();
        state.begin();
        assert!(state.is_loading());
        assert!(!state.needs_fetch());
    }

    #[tokio::test]
    async fn test_french_bulldog_selection_yields_rex() {
        let mut selection = BreedSelection::new();
        selection.toggle("French Bulldog");
        let query = DogQuery::from_selection(&selection);
        assert_eq!(query.to_query_string().as_deref(), Some("breeds=French%20Bulldog"));

        let mut list = DogListState::default();
        let ticket = list.begin();
        let result = shelter_dogs().fetch_dogs(&query).await;
        assert!(list.complete(ticket, result));

        assert_eq!(list.dogs, vec![dog(2, "Rex", "French Bulldog")]);
    }

    #[tokio::test]
    async fn test_breed_without_dogs_shows_empty_state() {
        let mut selection = BreedSelection::new();
        selection.toggle("Beagle");
        let query = DogQuery::from_selection(&selection);

        let mut list = DogListState::default();
        let ticket = list.begin();
        list.complete(ticket, shelter_dogs().fetch_dogs(&query).await);

        assert!(list.dogs.is_empty());
        assert!(list.is_empty_result());
    }

    #[tokio::test]
    async fn test_rapid_changes_render_latest_selection() {
        let source = shelter_dogs();
        let mut selection = BreedSelection::new();
        let mut list = DogListState::default();

        selection.toggle("Golden Retriever");
        let query_a = DogQuery::from_selection(&selection);
        let ticket_a = list.begin();

        selection.toggle("French Bulldog");
        let query_ab = DogQuery::from_selection(&selection);
        let ticket_ab = list.begin();

        // Combined response arrives first, the stale one afterwards
        assert!(list.complete(ticket_ab, source.fetch_dogs(&query_ab).await));
        assert!(!list.complete(ticket_a, source.fetch_dogs(&query_a).await));

        let names: Vec<&str> = list.dogs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Buddy", "Rex"]);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_superseded_response_keeps_loading_flag() {
        let mut list = DogListState::default();
        let first = list.begin();
        let _second = list.begin();

        assert!(!list.complete(first, Ok(vec![])));
        assert!(list.is_loading());
        assert!(!list.is_empty_result());
    }

    #[test]
    fn test_dog_failure_keeps_previous_dogs() {
        let mut list = DogListState::default();
        let ticket = list.begin();
        list.complete(ticket, Ok(vec![dog(1, "Buddy", "Golden Retriever")]));

        let ticket = list.begin();
        list.complete(ticket, Err(ApiError::Status(503)));

        assert_eq!(list.dogs.len(), 1);
        assert!(list.error().unwrap().starts_with("Failed to fetch dogs"));
        assert!(!list.is_empty_result());
    }

    #[test]
    fn test_dog_and_breed_errors_are_independent() {
        let mut catalog = CatalogState::default();
        catalog.begin();
        catalog.finish(Ok(scenario_catalog()));

        let mut list = DogListState::default();
        let ticket = list.begin();
        list.complete(ticket, Err(ApiError::Network("reset".into())));

        assert_eq!(catalog.error(), None);
        assert_eq!(catalog.catalog.names().len(), 5);
        assert!(list.error().is_some());
    }
}
