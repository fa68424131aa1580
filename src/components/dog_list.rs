//! Dog List Component
//!
//! Grid of dog cards for the current breed query, with loading, empty and
//! error states.

use leptos::prelude::*;

use crate::listing::{LOADING_DOGS, NO_DOGS_FOUND, NO_DOGS_HINT};
use crate::models::Dog;
use crate::store::{use_shelter_store, ShelterStateStoreFields};

/// Card linking to a dog's detail page
#[component]
pub fn DogCard(dog: Dog) -> impl IntoView {
    let href = dog.href();
    view! {
        <a href=href class="dog-card">
            <h3 class="dog-name">{dog.name}</h3>
            <p class="dog-breed">{dog.breed}</p>
        </a>
    }
}

/// Dog listing driven by the shelter store
#[component]
pub fn DogList() -> impl IntoView {
    let store = use_shelter_store();

    view! {
        <section class="dog-listing" aria-live="polite">
            // Errors render above the last good list, which stays visible
            {move || store.dogs().read().error().map(str::to_string).map(|message| {
                view! { <p class="error-message" role="alert">{message}</p> }
            })}
            {move || {
                let listing = store.dogs().get();
                if listing.is_empty_result() {
                    view! {
                        <div class="empty-state">
                            <p class="empty-title">{NO_DOGS_FOUND}</p>
                            <p class="empty-hint">{NO_DOGS_HINT}</p>
                        </div>
                    }
                    .into_any()
                } else if listing.dogs.is_empty() && listing.is_loading() {
                    view! { <p class="loading-message">{LOADING_DOGS}</p> }.into_any()
                } else {
                    view! {
                        <div class="grid">
                            {listing.dogs.into_iter().map(|dog| view! { <DogCard dog=dog /> }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
