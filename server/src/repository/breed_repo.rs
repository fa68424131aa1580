//! Breed Repository
//!
//! SQLite-backed implementation for breed storage and lookup.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use super::db::{row_id, SharedConnection};
use super::traits::Repository;
use crate::domain::{Breed, DomainError, DomainResult};

/// SQLite implementation of Breed repository
#[derive(Clone)]
pub struct BreedRepository {
    conn: SharedConnection,
}

impl BreedRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Breed names in alphabetical order
    pub async fn list_names(&self) -> DomainResult<Vec<String>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT name FROM breeds ORDER BY name COLLATE NOCASE, name")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    pub async fn find_by_name(&self, name: &str) -> DomainResult<Option<Breed>> {
        let conn = self.conn.lock().await;
        let breed = conn
            .query_row(
                "SELECT id, name, description FROM breeds WHERE name = ?",
                params![name],
                row_to_breed,
            )
            .optional()?;
        Ok(breed)
    }
}

#[async_trait]
impl Repository<Breed> for BreedRepository {
    async fn create(&self, entity: &Breed) -> DomainResult<Breed> {
        let name = entity.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("breed name is empty".to_string()));
        }

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO breeds (name, description) VALUES (?, ?)",
            params![name, entity.description],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _) if err.code == rusqlite::ErrorCode::ConstraintViolation => {
                DomainError::InvalidInput(format!("breed '{}' already exists", name))
            }
            other => DomainError::from(other),
        })?;

        let mut breed = entity.clone();
        breed.id = row_id(conn.last_insert_rowid())?;
        breed.name = name.to_string();
        Ok(breed)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Breed>> {
        let conn = self.conn.lock().await;
        let breed = conn
            .query_row(
                "SELECT id, name, description FROM breeds WHERE id = ?",
                params![id],
                row_to_breed,
            )
            .optional()?;
        Ok(breed)
    }

    async fn list(&self) -> DomainResult<Vec<Breed>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT id, name, description FROM breeds ORDER BY name COLLATE NOCASE, name")?;
        let breeds = stmt
            .query_map([], row_to_breed)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(breeds)
    }
}

/// Convert a database row to Breed
fn row_to_breed(row: &rusqlite::Row) -> rusqlite::Result<Breed> {
    Ok(Breed {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}
