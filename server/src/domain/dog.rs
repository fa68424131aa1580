//! Dog Entity
//!
//! Adoptable dogs. The listing exposes a summary (id, name, breed); the
//! detail endpoint exposes the full record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, Entity};

/// Adoption status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DogStatus {
    Available,
    Pending,
    Adopted,
}

impl DogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DogStatus::Available => "AVAILABLE",
            DogStatus::Pending => "PENDING",
            DogStatus::Adopted => "ADOPTED",
        }
    }
}

impl fmt::Display for DogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DogStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(DogStatus::Available),
            "PENDING" => Ok(DogStatus::Pending),
            "ADOPTED" => Ok(DogStatus::Adopted),
            other => Err(DomainError::InvalidInput(format!("unknown dog status '{}'", other))),
        }
    }
}

/// Full dog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: u32,
    pub name: String,
    /// Foreign key into breeds; not exposed over HTTP
    #[serde(skip)]
    pub breed_id: u32,
    /// Breed name, joined from breeds on read
    pub breed: String,
    pub age: u32,
    pub gender: String,
    pub description: String,
    pub status: DogStatus,
}

impl Dog {
    pub fn new(id: u32, name: impl Into<String>, breed_id: u32, age: u32, gender: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            breed_id,
            breed: String::new(),
            age,
            gender: gender.into(),
            description: String::new(),
            status: DogStatus::Available,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: DogStatus) -> Self {
        self.status = status;
        self
    }
}

impl Entity for Dog {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Listing row returned by `GET /api/dogs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogSummary {
    pub id: u32,
    pub name: String,
    pub breed: String,
}

/// Split a `breeds` query value into breed names.
/// Entries are trimmed and empty entries dropped.
pub fn parse_breed_filter(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(String::from)
        .collect()
}
