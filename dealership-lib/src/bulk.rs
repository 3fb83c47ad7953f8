//! Filtered bulk deletion.
//!
//! Matches are taken from the in-memory collection, not queried from the
//! store, and deleted one row at a time in collection order. The deletes
//! are independent: if one fails the run stops, the rows already removed
//! stay removed, and nothing is rolled back.

use std::collections::HashSet;

use dealership_core::{Car, FilterCriteria};
use dealership_db::RecordStore;

use crate::error::InventoryError;

/// Result of a filtered delete that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkDeleteOutcome {
    /// No criterion was supplied, so nothing was considered for deletion.
    NoFilterSpecified,
    /// These cars were deleted, in deletion order. May be empty.
    Deleted(Vec<Car>),
}

impl BulkDeleteOutcome {
    pub fn count(&self) -> usize {
        match self {
            BulkDeleteOutcome::NoFilterSpecified => 0,
            BulkDeleteOutcome::Deleted(cars) => cars.len(),
        }
    }
}

/// Delete every car in `cars` that matches `filter`, then drop the deleted
/// ones from `cars`.
///
/// On failure returns [`InventoryError::PartialFailure`] with the number of
/// deletions that succeeded; those cars are still removed from `cars` so the
/// collection keeps mirroring the store.
pub fn delete_matching<S: RecordStore + ?Sized>(
    store: &mut S,
    cars: &mut Vec<Car>,
    filter: &FilterCriteria,
) -> Result<BulkDeleteOutcome, InventoryError> {
    if filter.is_empty() {
        log::info!("No filter criteria supplied; nothing removed");
        return Ok(BulkDeleteOutcome::NoFilterSpecified);
    }

    let targets: Vec<i64> = filter.select(cars).iter().map(|car| car.id).collect();
    log::info!("Removing {} car(s) matching filter", targets.len());

    let mut deleted = HashSet::with_capacity(targets.len());
    let mut failure = None;
    for id in targets {
        match store.delete(id) {
            Ok(()) => {
                deleted.insert(id);
            }
            Err(e) => {
                log::warn!("Delete of car {} failed: {}", id, e);
                failure = Some(e);
                break;
            }
        }
    }

    let (removed, kept): (Vec<Car>, Vec<Car>) =
        cars.drain(..).partition(|car| deleted.contains(&car.id));
    *cars = kept;

    match failure {
        Some(source) => Err(InventoryError::PartialFailure {
            deleted: removed.len(),
            source,
        }),
        None => Ok(BulkDeleteOutcome::Deleted(removed)),
    }
}
