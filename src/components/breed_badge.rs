//! Breed Badge Component
//!
//! Removable chip for a selected breed.

use leptos::prelude::*;

use crate::selection::remove_badge_label;

/// Selected breed with an inline remove button
///
/// # Arguments
/// * `name` - Breed shown on the badge
/// * `on_remove` - Callback to execute when the × button is pressed
#[component]
pub fn BreedBadge(
    name: String,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    let label = remove_badge_label(&name);

    view! {
        <span class="breed-badge">
            <span class="breed-badge-name">{name}</span>
            <button
                type="button"
                class="badge-remove"
                aria-label=label
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(());
                }
            >
                "×"
            </button>
        </span>
    }
}
