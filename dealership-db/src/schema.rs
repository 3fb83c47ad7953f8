//! `Cars` table creation and verification.

use std::collections::HashSet;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::StoreError;

/// Table holding every car record.
pub const TABLE: &str = "Cars";

/// Columns `load_all` reads. A database missing any of them is rejected.
pub const COLUMNS: [&str; 9] = [
    "id",
    "year",
    "make",
    "model",
    "color",
    "engine",
    "transmission",
    "price",
    "sold",
];

/// Open an existing database file and check it holds a usable `Cars` table.
///
/// The file is never created here; a missing path is an error.
pub fn open_database(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(StoreError::Unavailable)?;
    verify_schema(&conn)?;
    log::debug!("Opened database {}", path.display());
    Ok(conn)
}

/// Create a new database file containing an empty `Cars` table.
pub fn create_database(path: &Path) -> Result<Connection, StoreError> {
    if path.exists() {
        return Err(StoreError::AlreadyExists(path.to_path_buf()));
    }
    let conn = Connection::open(path).map_err(StoreError::Unavailable)?;
    create_schema(&conn)?;
    log::info!("Created database {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the `Cars` table. Useful for testing.
pub fn open_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory().map_err(StoreError::Unavailable)?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Create the `Cars` table if it doesn't exist.
pub fn create_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(SCHEMA_SQL)
        .map_err(StoreError::Unavailable)
}

/// Check that `Cars` exists and has every column in [`COLUMNS`].
///
/// Extra columns are allowed.
pub fn verify_schema(conn: &Connection) -> Result<(), StoreError> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1)")
        .map_err(StoreError::Unavailable)?;
    let names = stmt
        .query_map([TABLE], |row| row.get::<_, String>(0))
        .map_err(StoreError::Unavailable)?;
    let mut columns = HashSet::new();
    for name in names {
        columns.insert(name.map_err(StoreError::Unavailable)?.to_lowercase());
    }

    if columns.is_empty() {
        return Err(StoreError::MissingSchema(format!("table '{}'", TABLE)));
    }
    for column in COLUMNS {
        if !columns.contains(column) {
            return Err(StoreError::MissingSchema(format!(
                "column '{}.{}'",
                TABLE, column
            )));
        }
    }
    Ok(())
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS Cars (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    year INTEGER NOT NULL CHECK (year >= 0),
    make TEXT NOT NULL,
    model TEXT NOT NULL,
    color TEXT NOT NULL,
    engine TEXT NOT NULL,
    transmission TEXT NOT NULL,
    price REAL NOT NULL CHECK (price >= 0),
    sold BOOLEAN NOT NULL DEFAULT 0
);
"#;
