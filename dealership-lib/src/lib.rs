//! Inventory actions shared by the CLI and GUI front ends.
//!
//! [`Inventory`] pairs a record store with the in-memory collection the user
//! is looking at, and exposes load, add, edit, delete, and filtered delete.
//! Every failure comes back as an [`InventoryError`] for the front end to
//! report; none of them are fatal.

pub mod bulk;
pub mod error;
pub mod inventory;
pub mod settings;

pub use bulk::{BulkDeleteOutcome, delete_matching};
pub use error::InventoryError;
pub use inventory::Inventory;

pub use dealership_core::form;
pub use dealership_core::{Car, CarDetails, CarForm, Criterion, Field, FilterCriteria, ValidationError};
pub use dealership_db::{RecordStore, SqliteStore, StoreError};
