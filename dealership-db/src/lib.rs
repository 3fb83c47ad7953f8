//! SQLite persistence layer for the car inventory.
//!
//! Owns the `Cars` table: opening and verifying a database file, creating a
//! new one, and the load/insert/update/delete operations. No other crate
//! builds SQL.

pub mod error;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use error::StoreError;
pub use operations::{delete_car, insert_car, update_car};
pub use queries::{count_cars, load_all};
pub use schema::{create_database, open_database, open_memory};
pub use store::{RecordStore, SqliteStore};
