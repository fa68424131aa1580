//! Breed Entity
//!
//! Breeds are the filter dimension of the dog listing. Two sentinel names,
//! "Mixed Breed" and "Unknown", are always offered and always listed last.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

pub const MIXED_BREED: &str = "Mixed Breed";
pub const UNKNOWN_BREED: &str = "Unknown";

/// Sentinels in the order they are appended to the catalog
pub const SENTINEL_BREEDS: [&str; 2] = [MIXED_BREED, UNKNOWN_BREED];

/// A dog breed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    /// Unique identifier
    pub id: u32,
    /// Display name, unique across breeds
    pub name: String,
    pub description: Option<String>,
}

impl Breed {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(id: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: Some(description.into()),
        }
    }
}

impl Entity for Breed {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

pub fn is_sentinel(name: &str) -> bool {
    SENTINEL_BREEDS.contains(&name)
}

/// Catalog served to clients: the given names (already alphabetical) minus
/// any sentinels, followed by the sentinels in pinned order.
pub fn catalog_with_sentinels<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .filter(|name| !is_sentinel(name))
        .chain(SENTINEL_BREEDS.iter().map(|s| s.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_creation() {
        let breed = Breed::new(1, "Beagle");
        assert_eq!(breed.id(), 1);
        assert_eq!(breed.name, "Beagle");
        assert!(breed.description.is_none());
    }

    #[test]
    fn test_catalog_appends_sentinels() {
        let catalog = catalog_with_sentinels(vec!["Beagle".to_string(), "Labrador Retriever".to_string()]);
        assert_eq!(catalog, vec!["Beagle", "Labrador Retriever", "Mixed Breed", "Unknown"]);
    }

    #[test]
    fn test_catalog_of_nothing_is_only_sentinels() {
        assert_eq!(catalog_with_sentinels(Vec::new()), vec!["Mixed Breed", "Unknown"]);
    }

    #[test]
    fn test_stored_sentinels_are_not_duplicated() {
        let catalog = catalog_with_sentinels(vec![
            "Beagle".to_string(),
            "Mixed Breed".to_string(),
            "Poodle".to_string(),
            "Unknown".to_string(),
        ]);
        assert_eq!(catalog, vec!["Beagle", "Poodle", "Mixed Breed", "Unknown"]);
    }
}
