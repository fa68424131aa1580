//! UI Components
//!
//! Leptos components for the listing page.

mod breed_badge;
mod breed_filter;
mod breed_option;
mod dog_list;

pub use breed_filter::BreedFilter;
pub use dog_list::DogList;
