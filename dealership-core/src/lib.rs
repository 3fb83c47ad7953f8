//! Car inventory data model, input validation, and filter criteria.
//!
//! This crate has no database dependency. `dealership-db` persists these
//! types and `dealership-lib` combines the two into the inventory actions
//! used by the CLI and GUI.

pub mod filter;
pub mod form;
pub mod types;

pub use filter::{Criterion, FilterCriteria};
pub use form::{CarForm, Field, ValidationError};
pub use types::{Car, CarDetails};
