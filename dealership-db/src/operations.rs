//! Insert, update, and delete operations on the `Cars` table.

use dealership_core::{Car, CarDetails};
use rusqlite::{Connection, params};

use crate::error::StoreError;

/// Insert a new car. It always starts unsold. Returns the stored record
/// with its assigned id.
pub fn insert_car(conn: &Connection, details: &CarDetails) -> Result<Car, StoreError> {
    conn.execute(
        "INSERT INTO Cars (year, make, model, color, engine, transmission, price, sold)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0)",
        params![
            details.year,
            details.make,
            details.model,
            details.color,
            details.engine,
            details.transmission,
            details.price,
        ],
    )
    .map_err(StoreError::Write)?;

    let id = conn.last_insert_rowid();
    log::debug!("Inserted car {}", id);
    Ok(Car::from_details(id, details.clone()))
}

/// Overwrite every writable field of car `id`.
pub fn update_car(
    conn: &Connection,
    id: i64,
    details: &CarDetails,
    sold: bool,
) -> Result<(), StoreError> {
    let changed = conn
        .execute(
            "UPDATE Cars SET year = ?1, make = ?2, model = ?3, color = ?4, engine = ?5,
                 transmission = ?6, price = ?7, sold = ?8
             WHERE id = ?9",
            params![
                details.year,
                details.make,
                details.model,
                details.color,
                details.engine,
                details.transmission,
                details.price,
                sold,
                id,
            ],
        )
        .map_err(StoreError::Write)?;
    if changed == 0 {
        return Err(StoreError::NotFound(id));
    }
    log::debug!("Updated car {}", id);
    Ok(())
}

/// Delete car `id`. Deleting an id that is already gone succeeds.
///
/// Returns whether a row was actually removed.
pub fn delete_car(conn: &Connection, id: i64) -> Result<bool, StoreError> {
    let changed = conn
        .execute("DELETE FROM Cars WHERE id = ?1", params![id])
        .map_err(StoreError::Write)?;
    log::debug!("Deleted car {} ({} rows)", id, changed);
    Ok(changed > 0)
}
