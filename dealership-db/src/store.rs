//! The record store seam.
//!
//! [`RecordStore`] is the four-operation contract the inventory and the
//! bulk-delete engine are written against. [`SqliteStore`] is the only
//! production implementation.

use std::path::{Path, PathBuf};

use dealership_core::{Car, CarDetails};
use rusqlite::Connection;

use crate::error::StoreError;
use crate::{operations, queries, schema};

/// Persistence of car records.
pub trait RecordStore {
    /// Every car in store-native order.
    fn load_all(&self) -> Result<Vec<Car>, StoreError>;

    /// Insert a new, unsold car and return it with its assigned id.
    fn insert(&mut self, details: &CarDetails) -> Result<Car, StoreError>;

    /// Overwrite car `id`. Fails with [`StoreError::NotFound`] if it is gone.
    fn update(&mut self, id: i64, details: &CarDetails, sold: bool) -> Result<(), StoreError>;

    /// Remove car `id`. Succeeds if it is already absent.
    fn delete(&mut self, id: i64) -> Result<(), StoreError>;
}

/// A [`RecordStore`] backed by one SQLite connection.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open an existing database file, verifying its `Cars` table.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            conn: schema::open_database(path)?,
            path: Some(path.to_path_buf()),
        })
    }

    /// Create a new database file with an empty `Cars` table.
    pub fn create(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            conn: schema::create_database(path)?,
            path: Some(path.to_path_buf()),
        })
    }

    /// A store over an in-memory database.
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: schema::open_memory()?,
            path: None,
        })
    }

    /// The file backing this store, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        queries::count_cars(&self.conn)
    }
}

impl RecordStore for SqliteStore {
    fn load_all(&self) -> Result<Vec<Car>, StoreError> {
        queries::load_all(&self.conn)
    }

    fn insert(&mut self, details: &CarDetails) -> Result<Car, StoreError> {
        operations::insert_car(&self.conn, details)
    }

    fn update(&mut self, id: i64, details: &CarDetails, sold: bool) -> Result<(), StoreError> {
        operations::update_car(&self.conn, id, details, sold)
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        operations::delete_car(&self.conn, id).map(|_| ())
    }
}
