//! Breed Option Component
//!
//! One selectable row in the breed listbox.

use leptos::prelude::*;

/// Listbox option toggled by click, Enter or Space
#[component]
pub fn BreedOption(
    name: String,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    let name_for_click = name.clone();
    let name_for_key = name.clone();

    view! {
        <div
            class=move || if selected.get() { "breed-option selected" } else { "breed-option" }
            role="option"
            tabindex="0"
            aria-selected=move || selected.get().to_string()
            on:click=move |_| on_toggle.run(name_for_click.clone())
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    on_toggle.run(name_for_key.clone());
                }
            }
        >
            <span class="breed-check" aria-hidden="true">
                {move || if selected.get() { "✓" } else { "" }}
            </span>
            <span class="breed-name">{name}</span>
        </div>
    }
}
