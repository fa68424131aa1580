//! Domain Layer
//!
//! Contains the shelter entities and core abstractions.
//! This layer has NO storage or HTTP dependencies.

mod breed;
mod dog;
mod entity;

pub use breed::{catalog_with_sentinels, is_sentinel, Breed, MIXED_BREED, SENTINEL_BREEDS, UNKNOWN_BREED};
pub use dog::{parse_breed_filter, Dog, DogStatus, DogSummary};
pub use entity::{DomainError, DomainResult, Entity};
