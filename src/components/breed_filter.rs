//! Breed Filter Component
//!
//! Multi-select dropdown with search, selected-breed badges and a clear-all
//! control. Emits the selected breeds whenever the selection changes.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::breed_badge::BreedBadge;
use crate::components::breed_option::BreedOption;
use crate::context::use_sources;
use crate::dropdown::{DropdownEvent, DropdownState};
use crate::listing::LOADING_BREEDS;
use crate::query::DogQuery;
use crate::selection::{no_match_message, BreedSelection};
use crate::store::{use_shelter_store, ShelterStateStoreFields};

/// Whether an event target lies inside `root`
fn is_inside(root: Option<web_sys::HtmlDivElement>, target: Option<web_sys::EventTarget>) -> bool {
    let node = target.and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    match (root, node) {
        (Some(root), Some(node)) => root.contains(Some(&node)),
        _ => false,
    }
}

/// Breed filter dropdown
///
/// Props:
/// - on_change: called with the dog query for the selected breeds on mount
///   and after every change to the selection. Search text never triggers it.
#[component]
pub fn BreedFilter(#[prop(into)] on_change: Callback<DogQuery>) -> impl IntoView {
    let store = use_shelter_store();
    let breed_source = StoredValue::new(use_sources().breeds);

    let selection = RwSignal::new(BreedSelection::new());
    let dropdown = RwSignal::new(DropdownState::Closed);
    let root_ref = NodeRef::<html::Div>::new();
    let search_ref = NodeRef::<html::Input>::new();

    // Fetch the catalog unless a load succeeded or is in flight
    let load_breeds = move || {
        if !store.catalog().read_untracked().needs_fetch() {
            return;
        }
        store.catalog().write().begin();
        let source = breed_source.get_value();
        spawn_local(async move {
            let result = source.fetch_breeds().await;
            let field = store.catalog();
            let mut catalog = field.write();
            if let Some(loaded) = catalog.finish(result) {
                let mut pruned = Vec::new();
                selection.update(|s| pruned = s.retain_in_catalog(loaded));
                if !pruned.is_empty() {
                    tracing::info!("dropped breeds no longer offered: {:?}", pruned);
                }
            }
        });
    };

    load_breeds();

    let dispatch = move |event: DropdownEvent| {
        let was_open = dropdown.get_untracked().is_open();
        dropdown.update(|d| *d = d.apply(event));
        let now_open = dropdown.get_untracked().is_open();
        if !was_open && now_open {
            load_breeds();
        }
    };

    // Emit only when the selected set changes
    let query = Memo::new(move |_| selection.with(DogQuery::from_selection));
    Effect::new(move |_| {
        on_change.run(query.get());
    });

    // Focus the search box when the panel opens
    Effect::new(move |_| {
        if dropdown.get().is_open() {
            if let Some(input) = search_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let pointer_handle = window_event_listener(ev::mousedown, move |ev| {
        if dropdown.get_untracked().is_open() {
            let inside = is_inside(root_ref.get_untracked(), ev.target());
            dispatch(DropdownEvent::PointerDown { inside });
        }
    });
    let focus_handle = window_event_listener(ev::focusin, move |ev| {
        if dropdown.get_untracked().is_open() {
            let inside = is_inside(root_ref.get_untracked(), ev.target());
            dispatch(DropdownEvent::FocusMoved { inside });
        }
    });
    let key_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && dropdown.get_untracked().is_open() {
            dispatch(DropdownEvent::EscapePressed);
        }
    });
    on_cleanup(move || {
        pointer_handle.remove();
        focus_handle.remove();
        key_handle.remove();
    });

    let toggle_breed = move |breed: String| {
        selection.update(|s| {
            s.toggle(&breed);
        });
    };

    let panel_body = move || {
        let (catalog, loading, error) = {
            let state = store.catalog().read();
            (state.catalog.clone(), state.is_loading(), state.error().map(str::to_string))
        };

        if loading && catalog.is_empty() {
            return view! { <p class="loading-message">{LOADING_BREEDS}</p> }.into_any();
        }
        if let Some(message) = error.filter(|_| catalog.is_empty()) {
            return view! { <p class="error-message" role="alert">{message}</p> }.into_any();
        }

        let visible: Vec<String> = selection.with(|s| {
            s.visible_breeds(&catalog).into_iter().map(String::from).collect()
        });
        if visible.is_empty() {
            let term = selection.with(|s| s.search().to_string());
            return view! { <p class="empty-message">{no_match_message(&term)}</p> }.into_any();
        }

        view! {
            <div class="breed-options">
                {visible.into_iter().map(|name| {
                    let name_for_selected = name.clone();
                    view! {
                        <BreedOption
                            name=name
                            selected=Signal::derive(move || selection.with(|s| s.is_selected(&name_for_selected)))
                            on_toggle=toggle_breed
                        />
                    }
                }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="breed-filter" node_ref=root_ref>
            <button
                id="breed-filter-button"
                type="button"
                class="filter-button"
                aria-haspopup="listbox"
                aria-expanded=move || dropdown.get().is_open().to_string()
                aria-label="Select dog breeds to filter"
                on:click=move |_| dispatch(DropdownEvent::ToggleActivated)
            >
                <span class="filter-button-label">{move || selection.with(|s| s.summary_label())}</span>
                <span class="filter-button-caret" aria-hidden="true">"▾"</span>
            </button>

            <Show when=move || dropdown.get().is_open()>
                <div
                    class="dropdown-panel"
                    role="listbox"
                    aria-label="Breed selection"
                    aria-multiselectable="true"
                >
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search breeds..."
                        aria-label="Search for breeds"
                        autocomplete="off"
                        node_ref=search_ref
                        prop:value=move || selection.with(|s| s.search().to_string())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            selection.update(|s| s.set_search(term));
                        }
                    />
                    {panel_body}
                    // Catalog refresh failed but the old list is still usable
                    {move || {
                        let stale_error = {
                            let state = store.catalog().read();
                            state.error().filter(|_| !state.catalog.is_empty()).map(str::to_string)
                        };
                        stale_error.map(|message| {
                            view! { <p class="error-message" role="alert">{message}</p> }
                        })
                    }}
                </div>
            </Show>

            <Show when=move || selection.with(|s| !s.is_empty())>
                <div class="selected-badges">
                    {move || selection.with(|s| s.selected_breeds()).into_iter().map(|name| {
                        let name_for_remove = name.clone();
                        view! {
                            <BreedBadge
                                name=name
                                on_remove=move |_: ()| toggle_breed(name_for_remove.clone())
                            />
                        }
                    }).collect_view()}
                    <button
                        type="button"
                        class="clear-all-button"
                        aria-label="Clear all breed filters"
                        on:click=move |_| selection.update(|s| s.clear_all())
                    >
                        "Clear all"
                    </button>
                </div>
            </Show>
        </div>
    }
}
