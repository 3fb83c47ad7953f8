//! Read queries for the car inventory.

use dealership_core::Car;
use rusqlite::{Connection, Row};

use crate::error::StoreError;

/// Load every car in the table's natural order.
///
/// Columns are read by name, so extra columns in a user-supplied database
/// are ignored. NULL text and sold cells are tolerated; a row whose id,
/// year, or price cannot be decoded fails the whole load.
pub fn load_all(conn: &Connection) -> Result<Vec<Car>, StoreError> {
    let mut stmt = conn
        .prepare("SELECT * FROM Cars")
        .map_err(StoreError::Unavailable)?;
    let rows = stmt
        .query_map([], row_to_car)
        .map_err(StoreError::Unavailable)?;
    let cars = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::Unavailable)?;
    log::debug!("Loaded {} cars", cars.len());
    Ok(cars)
}

/// Number of rows in the table.
pub fn count_cars(conn: &Connection) -> Result<usize, StoreError> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Cars", [], |row| row.get(0))
        .map_err(StoreError::Unavailable)?;
    Ok(count.max(0) as usize)
}

fn row_to_car(row: &Row) -> rusqlite::Result<Car> {
    Ok(Car {
        id: row.get("id")?,
        year: row.get("year")?,
        make: text(row, "make")?,
        model: text(row, "model")?,
        color: text(row, "color")?,
        engine: text(row, "engine")?,
        transmission: text(row, "transmission")?,
        price: row.get("price")?,
        sold: row.get::<_, Option<bool>>("sold")?.unwrap_or(false),
    })
}

/// NULL text cells in user-supplied databases read as empty strings.
fn text(row: &Row, column: &str) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
}
