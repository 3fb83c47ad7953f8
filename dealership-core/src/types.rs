//! Data model types for the car inventory.

use serde::{Deserialize, Serialize};

/// A car record as stored in the `Cars` table.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub year: u32,
    pub make: String,
    pub model: String,
    pub color: String,
    pub engine: String,
    pub transmission: String,
    pub price: f64,
    pub sold: bool,
}

/// The writable fields of a car, already validated.
///
/// Produced by [`crate::CarForm::validate`] and consumed by the store's
/// insert and update operations. The sold flag is not part of it: new cars
/// always start unsold and edits carry the flag separately.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDetails {
    pub year: u32,
    pub make: String,
    pub model: String,
    pub color: String,
    pub engine: String,
    pub transmission: String,
    pub price: f64,
}

impl Car {
    /// Build a record from freshly inserted details.
    pub fn from_details(id: i64, details: CarDetails) -> Self {
        Self {
            id,
            year: details.year,
            make: details.make,
            model: details.model,
            color: details.color,
            engine: details.engine,
            transmission: details.transmission,
            price: details.price,
            sold: false,
        }
    }

    /// Overwrite every writable field, keeping the identifier.
    pub fn apply(&mut self, details: CarDetails, sold: bool) {
        self.year = details.year;
        self.make = details.make;
        self.model = details.model;
        self.color = details.color;
        self.engine = details.engine;
        self.transmission = details.transmission;
        self.price = details.price;
        self.sold = sold;
    }

    /// Current writable fields as a [`CarDetails`].
    pub fn details(&self) -> CarDetails {
        CarDetails {
            year: self.year,
            make: self.make.clone(),
            model: self.model.clone(),
            color: self.color.clone(),
            engine: self.engine.clone(),
            transmission: self.transmission.clone(),
            price: self.price,
        }
    }

    /// Short human label, e.g. "2020 Toyota Corolla".
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}
