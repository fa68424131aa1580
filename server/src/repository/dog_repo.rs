//! Dog Repository
//!
//! SQLite-backed implementation for dogs. Reads join breeds so every dog
//! carries its breed name.

use async_trait::async_trait;
use rusqlite::{params, params_from_iter, OptionalExtension};

use super::db::{row_id, SharedConnection};
use super::traits::{DogQueries, Repository};
use crate::domain::{Dog, DogStatus, DogSummary, DomainError, DomainResult};

const SELECT_DOG: &str = "SELECT d.id, d.name, d.breed_id, b.name, d.age, d.gender, d.description, d.status
     FROM dogs d JOIN breeds b ON d.breed_id = b.id";

/// SQLite implementation of Dog repository
#[derive(Clone)]
pub struct DogRepository {
    conn: SharedConnection,
}

impl DogRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Dog> for DogRepository {
    async fn create(&self, entity: &Dog) -> DomainResult<Dog> {
        let conn = self.conn.lock().await;

        let breed: Option<String> = conn
            .query_row("SELECT name FROM breeds WHERE id = ?", params![entity.breed_id], |row| row.get(0))
            .optional()?;
        let breed = breed.ok_or_else(|| DomainError::NotFound(format!("breed {}", entity.breed_id)))?;

        conn.execute(
            "INSERT INTO dogs (name, breed_id, age, gender, description, status) VALUES (?, ?, ?, ?, ?, ?)",
            params![
                entity.name,
                entity.breed_id,
                entity.age,
                entity.gender,
                entity.description,
                entity.status.as_str(),
            ],
        )?;

        let mut dog = entity.clone();
        dog.id = row_id(conn.last_insert_rowid())?;
        dog.breed = breed;
        Ok(dog)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Dog>> {
        let conn = self.conn.lock().await;
        let dog = conn
            .query_row(&format!("{} WHERE d.id = ?", SELECT_DOG), params![id], row_to_dog)
            .optional()?;
        dog.transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Dog>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!("{} ORDER BY d.id", SELECT_DOG))?;
        let rows = stmt
            .query_map([], row_to_dog)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().collect()
    }
}

#[async_trait]
impl DogQueries for DogRepository {
    async fn list_summaries(&self, breeds: &[String]) -> DomainResult<Vec<DogSummary>> {
        let conn = self.conn.lock().await;

        let mut sql = String::from(
            "SELECT d.id, d.name, b.name FROM dogs d JOIN breeds b ON d.breed_id = b.id",
        );
        if !breeds.is_empty() {
            let placeholders = vec!["?"; breeds.len()].join(", ");
            sql.push_str(&format!(" WHERE b.name IN ({})", placeholders));
        }
        sql.push_str(" ORDER BY d.id");

        let mut stmt = conn.prepare(&sql)?;
        let dogs = stmt
            .query_map(params_from_iter(breeds.iter()), |row| {
                Ok(DogSummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    breed: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dogs)
    }

    async fn list_ids(&self) -> DomainResult<Vec<u32>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT id FROM dogs ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, u32>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }
}

/// Convert a database row to Dog. The outer error is the SQLite read, the
/// inner one a stored status that no longer parses.
fn row_to_dog(row: &rusqlite::Row) -> rusqlite::Result<DomainResult<Dog>> {
    let status: String = row.get(7)?;
    let status = match status.parse::<DogStatus>() {
        Ok(status) => status,
        Err(err) => return Ok(Err(DomainError::Internal(format!("corrupt dog row: {}", err)))),
    };

    Ok(Ok(Dog {
        id: row.get(0)?,
        name: row.get(1)?,
        breed_id: row.get(2)?,
        breed: row.get(3)?,
        age: row.get(4)?,
        gender: row.get(5)?,
        description: row.get(6)?,
        status,
    }))
}
