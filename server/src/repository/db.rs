//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Connection shared by all repositories
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Open (or create) the database at `db_path` and migrate it.
/// `:memory:` opens a private in-memory database.
pub fn init_db(db_path: &Path) -> DomainResult<SharedConnection> {
    let conn = if db_path.as_os_str() == ":memory:" {
        Connection::open_in_memory()?
    } else {
        Connection::open(db_path)?
    };

    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    run_migrations(&conn)?;

    tracing::info!("database ready at {}", db_path.display());
    Ok(Arc::new(Mutex::new(conn)))
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> DomainResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS breeds (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT
        );

        CREATE TABLE IF NOT EXISTS dogs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            breed_id INTEGER NOT NULL REFERENCES breeds(id),
            age INTEGER NOT NULL DEFAULT 0,
            gender TEXT NOT NULL DEFAULT 'Unknown',
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_dogs_breed ON dogs(breed_id);",
    )?;

    // Status arrived after the first schema; add it to older databases
    if !column_exists(conn, "dogs", "status")? {
        conn.execute(
            "ALTER TABLE dogs ADD COLUMN status TEXT NOT NULL DEFAULT 'AVAILABLE'",
            [],
        )?;
    }

    Ok(())
}

/// Narrow a SQLite rowid to the u32 ids exposed by the API
pub(crate) fn row_id(rowid: i64) -> DomainResult<u32> {
    u32::try_from(rowid).map_err(|_| DomainError::Internal(format!("row id {} out of range", rowid)))
}
