//! Frontend Models
//!
//! Data structures matching the listing API.

use serde::{Deserialize, Serialize};

/// Dog record as returned by `GET /api/dogs` (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: u32,
    pub name: String,
    pub breed: String,
}

impl Dog {
    /// Path of the dog's detail page
    pub fn href(&self) -> String {
        format!("/dog/{}", self.id)
    }
}
