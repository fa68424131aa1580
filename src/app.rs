//! Tailspin Shelter Frontend App
//!
//! Listing page: breed filter above the dog grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{BreedFilter, DogList};
use crate::context::ShelterSources;
use crate::query::DogQuery;
use crate::store::{ShelterState, ShelterStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let sources = ShelterSources::http(ApiClient::from_window());
    let dog_source = StoredValue::new(sources.dogs.clone());

    // Provide context to all children
    provide_context(sources);
    let store = Store::new(ShelterState::default());
    provide_context(store);

    // Reload dogs whenever the breed filter reports a new selection
    let on_breeds_change = move |query: DogQuery| {
        let ticket = store.dogs().write().begin();
        let source = dog_source.get_value();
        tracing::debug!("dog request {:?} for {:?}", ticket, query.breeds());
        spawn_local(async move {
            let result = source.fetch_dogs(&query).await;
            store.dogs().write().complete(ticket, result);
        });
    };

    view! {
        <main class="container">
            <h1>"Tailspin Shelter"</h1>
            <p class="subtitle">"Find your new best friend"</p>

            <BreedFilter on_change=on_breeds_change />

            <DogList />
        </main>
    }
}
