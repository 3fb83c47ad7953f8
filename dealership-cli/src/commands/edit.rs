use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dealership_lib::{CarForm, InventoryError};

use crate::{CarArgs, CarEditArgs, CliError};

/// Add a car and print its assigned id.
pub(crate) fn run_add(db: Option<PathBuf>, car: CarArgs) -> Result<(), CliError> {
    let mut inventory = super::open_inventory(db)?;
    let form = CarForm {
        year: car.year,
        make: car.make,
        model: car.model,
        color: car.color,
        engine: car.engine,
        transmission: car.transmission,
        price: car.price,
    };

    let added = inventory.add(&form)?;
    log::info!(
        "{} car {}: {}",
        "Added".if_supports_color(Stdout, |t| t.green()),
        added.id,
        added.display_name().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

/// Edit the given fields of car `id`, keeping the rest.
pub(crate) fn run_edit(db: Option<PathBuf>, id: i64, fields: CarEditArgs) -> Result<(), CliError> {
    let mut inventory = super::open_inventory(db)?;
    let current = inventory
        .get(id)
        .ok_or(InventoryError::NotFound(id))?;

    let sold = fields.sold.unwrap_or(current.sold);
    let form = overlay(CarForm::from_car(current), fields);

    let edited = inventory.edit(id, &form, sold)?;
    log::info!(
        "{} car {}: {}{}",
        "Updated".if_supports_color(Stdout, |t| t.green()),
        edited.id,
        edited.display_name().if_supports_color(Stdout, |t| t.bold()),
        if edited.sold { " (sold)" } else { "" },
    );
    Ok(())
}

/// Replace the fields of `form` that were given on the command line.
fn overlay(mut form: CarForm, fields: CarEditArgs) -> CarForm {
    let CarEditArgs {
        year,
        make,
        model,
        color,
        engine,
        transmission,
        price,
        sold: _,
    } = fields;
    if let Some(v) = year {
        form.year = v;
    }
    if let Some(v) = make {
        form.make = v;
    }
    if let Some(v) = model {
        form.model = v;
    }
    if let Some(v) = color {
        form.color = v;
    }
    if let Some(v) = engine {
        form.engine = v;
    }
    if let Some(v) = transmission {
        form.transmission = v;
    }
    if let Some(v) = price {
        form.price = v;
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CarForm {
        CarForm {
            year: "2019".to_string(),
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            color: "Red".to_string(),
            engine: "2.0L".to_string(),
            transmission: "Manual".to_string(),
            price: "15000".to_string(),
        }
    }

    #[test]
    fn overlay_replaces_only_given_fields() {
        let fields = CarEditArgs {
            color: Some("Blue".to_string()),
            price: Some("14500".to_string()),
            ..Default::default()
        };
        let form = overlay(base(), fields);
        assert_eq!(form.color, "Blue");
        assert_eq!(form.price, "14500");
        assert_eq!(form.make, "Honda");
        assert_eq!(form.year, "2019");
    }

    #[test]
    fn overlay_can_blank_a_field() {
        let fields = CarEditArgs {
            make: Some(String::new()),
            ..Default::default()
        };
        let form = overlay(base(), fields);
        assert!(form.validate().is_err());
    }
}
