use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be opened or queried
    #[error("Database unavailable: {0}")]
    Unavailable(#[source] rusqlite::Error),

    /// The file opened but lacks the expected table or columns
    #[error("Database is missing {0}")]
    MissingSchema(String),

    /// Refused to create a database over an existing file
    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The database rejected a mutation
    #[error("Write failed: {0}")]
    Write(#[source] rusqlite::Error),

    /// No car with this id
    #[error("Car not found: id {0}")]
    NotFound(i64),
}

impl StoreError {
    /// True for errors meaning the storage itself cannot be used.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::Unavailable(_) | StoreError::MissingSchema(_) | StoreError::AlreadyExists(_)
        )
    }
}
