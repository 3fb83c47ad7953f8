//! Raw form input and validation.
//!
//! Front ends collect every field as text. Nothing reaches the store until
//! [`CarForm::validate`] has turned that text into a [`CarDetails`].

use std::fmt;

use thiserror::Error;

use crate::types::{Car, CarDetails};

/// A field of the add/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Make,
    Model,
    Color,
    Engine,
    Transmission,
    Price,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Year,
        Field::Make,
        Field::Model,
        Field::Color,
        Field::Engine,
        Field::Transmission,
        Field::Price,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Year => "Year",
            Field::Make => "Make",
            Field::Model => "Model",
            Field::Color => "Color",
            Field::Engine => "Engine",
            Field::Transmission => "Transmission",
            Field::Price => "Price",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors produced while validating form input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field was left blank
    #[error("{0} is required")]
    EmptyField(Field),

    /// Year is not a non-negative whole number
    #[error("Year must be a whole number, got '{0}'")]
    InvalidYear(String),

    /// Price is not a non-negative decimal
    #[error("Price must be a non-negative number, got '{0}'")]
    InvalidPrice(String),
}

/// Text entered for a car, one string per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarForm {
    pub year: String,
    pub make: String,
    pub model: String,
    pub color: String,
    pub engine: String,
    pub transmission: String,
    pub price: String,
}

impl CarForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill a form with a record's current values.
    pub fn from_car(car: &Car) -> Self {
        Self {
            year: car.year.to_string(),
            make: car.make.clone(),
            model: car.model.clone(),
            color: car.color.clone(),
            engine: car.engine.clone(),
            transmission: car.transmission.clone(),
            price: car.price.to_string(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Year => &self.year,
            Field::Make => &self.make,
            Field::Model => &self.model,
            Field::Color => &self.color,
            Field::Engine => &self.engine,
            Field::Transmission => &self.transmission,
            Field::Price => &self.price,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Year => &mut self.year,
            Field::Make => &mut self.make,
            Field::Model => &mut self.model,
            Field::Color => &mut self.color,
            Field::Engine => &mut self.engine,
            Field::Transmission => &mut self.transmission,
            Field::Price => &mut self.price,
        }
    }

    /// Check every field and produce typed details.
    ///
    /// Blank fields are reported first (in form order), then the year, then
    /// the price. Text fields are trimmed.
    pub fn validate(&self) -> Result<CarDetails, ValidationError> {
        for field in Field::ALL {
            if self.field(field).trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }

        let year = parse_year(self.year.trim())?;
        let price = parse_price(self.price.trim())?;

        Ok(CarDetails {
            year,
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            color: self.color.trim().to_string(),
            engine: self.engine.trim().to_string(),
            transmission: self.transmission.trim().to_string(),
            price,
        })
    }
}

/// Parse a year made of ASCII digits only.
pub fn parse_year(text: &str) -> Result<u32, ValidationError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidYear(text.to_string()));
    }
    text.parse()
        .map_err(|_| ValidationError::InvalidYear(text.to_string()))
}

/// Parse a price of the form `digits[.digits]`.
///
/// Either side of the point may be empty, but not both.
pub fn parse_price(text: &str) -> Result<f64, ValidationError> {
    if !is_partial_price(text) || !text.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidPrice(text.to_string()));
    }
    match text.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(ValidationError::InvalidPrice(text.to_string())),
    }
}

/// True if `text` could be the start of a price: digits with at most one
/// decimal point. The empty string and a lone "." qualify.
pub fn is_partial_price(text: &str) -> bool {
    let mut seen_point = false;
    for b in text.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Strip everything except ASCII digits.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}
