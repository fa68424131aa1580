//! Breed Selection State
//!
//! Pure in-memory model behind the breed filter: the normalised catalog,
//! the set of selected breeds and the current search text.

use std::collections::{BTreeSet, HashSet};

/// Sentinel entries that do not name a genetic breed
pub const MIXED_BREED: &str = "Mixed Breed";
pub const UNKNOWN_BREED: &str = "Unknown";

/// Sentinels in the order they are pinned to the end of the catalog
pub const SENTINEL_BREEDS: [&str; 2] = [MIXED_BREED, UNKNOWN_BREED];

/// Label shown on the toggle button when nothing is selected
pub const EMPTY_SUMMARY: &str = "Select breeds...";

/// 0 for ordinary breeds, 1.. for sentinels in pinned order
fn sentinel_rank(name: &str) -> usize {
    SENTINEL_BREEDS
        .iter()
        .position(|s| *s == name)
        .map_or(0, |pos| pos + 1)
}

/// The full list of breeds available for filtering, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedCatalog {
    names: Vec<String>,
}

impl BreedCatalog {
    /// Build a catalog: duplicates dropped, alphabetical, sentinels last.
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        let mut seen = HashSet::new();
        let mut names: Vec<String> = names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty() && seen.insert(n.clone()))
            .collect();

        names.sort_by(|a, b| {
            sentinel_rank(a)
                .cmp(&sentinel_rank(b))
                .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
                .then_with(|| a.cmp(b))
        });

        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, breed: &str) -> bool {
        self.names.iter().any(|n| n == breed)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Selected breeds plus the search text narrowing the visible catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedSelection {
    selected: BTreeSet<String>,
    search: String,
}

impl BreedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the breed if absent, deselect it otherwise.
    /// Returns whether the breed is selected afterwards.
    pub fn toggle(&mut self, breed: &str) -> bool {
        if self.selected.remove(breed) {
            false
        } else {
            self.selected.insert(breed.to_string());
            true
        }
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_selected(&self, breed: &str) -> bool {
        self.selected.contains(breed)
    }

    /// Selected breeds in alphabetical order
    pub fn selected_breeds(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Catalog entries matching the search text, in catalog order
    pub fn visible_breeds<'a>(&self, catalog: &'a BreedCatalog) -> Vec<&'a str> {
        let needle = self.search.trim().to_lowercase();
        catalog
            .names()
            .iter()
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Text for the toggle button
    pub fn summary_label(&self) -> String {
        match self.len() {
            0 => EMPTY_SUMMARY.to_string(),
            1 => self.selected.iter().next().cloned().unwrap_or_default(),
            n => format!("{} breeds selected", n),
        }
    }

    /// Drop selections that are no longer in the catalog, returning them
    pub fn retain_in_catalog(&mut self, catalog: &BreedCatalog) -> Vec<String> {
        let stale: Vec<String> = self
            .selected
            .iter()
            .filter(|name| !catalog.contains(name))
            .cloned()
            .collect();
        for name in &stale {
            self.selected.remove(name);
        }
        stale
    }
}

/// Message rendered when the search text matches no breed
pub fn no_match_message(term: &str) -> String {
    format!("No breeds found matching \"{}\"", term.trim())
}

/// Accessible name of the remove button on a selected-breed badge
pub fn remove_badge_label(breed: &str) -> String {
    format!("Remove {} filter", breed)
}
