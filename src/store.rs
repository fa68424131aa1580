//! Listing Store
//!
//! Uses Leptos reactive_stores so the catalog and the dog list update
//! independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::listing::{CatalogState, DogListState};

/// Page-level listing state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShelterState {
    /// Breed catalog for the filter widget
    pub catalog: CatalogState,
    /// Dogs for the current breed query
    pub dogs: DogListState,
}

/// Type alias for the store
pub type ShelterStore = Store<ShelterState>;

/// Get the shelter store from context
pub fn use_shelter_store() -> ShelterStore {
    expect_context::<ShelterStore>()
}
