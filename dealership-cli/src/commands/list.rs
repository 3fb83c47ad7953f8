use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dealership_lib::Car;

use crate::CliError;

const HEADERS: [&str; 9] = [
    "ID",
    "Year",
    "Make",
    "Model",
    "Color",
    "Engine",
    "Transmission",
    "Price",
    "Sold",
];

/// Print every car in the database.
pub(crate) fn run_list(db: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let inventory = super::open_inventory(db)?;

    if json {
        println!("{}", serde_json::to_string_pretty(inventory.cars())?);
        return Ok(());
    }

    if inventory.is_empty() {
        log::info!(
            "{}",
            "No cars in the database".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    print_table(inventory.cars());
    crate::log_blank();
    log::info!("{} car(s)", inventory.len());
    Ok(())
}

/// Print cars as an aligned table.
pub(crate) fn print_table(cars: &[Car]) {
    let rows: Vec<[String; 9]> = cars.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = join_padded(HEADERS.iter().copied(), &widths);
    log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));

    for (car, row) in cars.iter().zip(&rows) {
        let line = join_padded(row.iter().map(String::as_str), &widths);
        if car.sold {
            log::info!("{}", line.if_supports_color(Stdout, |t| t.dimmed()));
        } else {
            log::info!("{}", line);
        }
    }
}

fn row_cells(car: &Car) -> [String; 9] {
    [
        car.id.to_string(),
        car.year.to_string(),
        car.make.clone(),
        car.model.clone(),
        car.color.clone(),
        car.engine.clone(),
        car.transmission.clone(),
        format!("{:.2}", car.price),
        if car.sold { "yes" } else { "no" }.to_string(),
    ]
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_padded_aligns_and_trims() {
        let line = join_padded(["1", "Honda", "no"].into_iter(), &[3, 6, 4]);
        assert_eq!(line, "1    Honda   no");
    }

    #[test]
    fn row_cells_formats_price_and_sold() {
        let car = Car {
            id: 2,
            year: 2020,
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            color: "Blue".to_string(),
            engine: "2.5L".to_string(),
            transmission: "Automatic".to_string(),
            price: 24999.5,
            sold: true,
        };
        let cells = row_cells(&car);
        assert_eq!(cells[7], "24999.50");
        assert_eq!(cells[8], "yes");
    }
}
